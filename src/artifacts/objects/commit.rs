//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - Parent commit ID(s) (for history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> +0000
//! committer <name> <email> <timestamp> +0000
//!
//! <commit message>
//! ```
//!
//! Timestamps are always written with a fixed UTC offset.

use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::{BufRead, Write};

const UTC_OFFSET: &str = "+0000";

/// Author or committer information
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::Utc>,
}

impl Author {
    /// Create a new author with the current timestamp
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// String in format "Name <email> timestamp +0000"
    pub fn display(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name(),
            self.timestamp.timestamp(),
            UTC_OFFSET
        )
    }

    /// String like "Mon, 1 Jan 2024 12:34:56 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp.to_rfc2822()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::Utc> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Split from right to get timezone and timestamp first
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(anyhow::anyhow!("Invalid author format"));
        }

        let timestamp = parts[1]
            .parse::<i64>()
            .map_err(|_| anyhow::anyhow!("Invalid timestamp"))?;
        let name_email_part = parts[2];

        // the email is the last bracketed part; the name may contain '<' or '>'
        let email_start = name_email_part
            .rfind('<')
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '<'"))?;
        let email_end = name_email_part[email_start..]
            .find('>')
            .map(|offset| email_start + offset)
            .ok_or_else(|| anyhow::anyhow!("Invalid author format: missing '>'"))?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();
        let timestamp = chrono::DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid timestamp"))?;

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

#[derive(Debug, Clone, new)]
pub struct Commit {
    parents: Vec<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn short_message(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut object_content = Vec::new();

        writeln!(object_content, "tree {}", self.tree_oid)?;
        for parent in &self.parents {
            writeln!(object_content, "parent {}", parent)?;
        }
        writeln!(object_content, "author {}", self.author.display())?;
        writeln!(object_content, "committer {}", self.committer.display())?;
        writeln!(object_content)?;
        object_content.write_all(self.message.as_bytes())?;

        Ok(Bytes::from(object_content))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut lines = Vec::new();
        let mut reader = reader;
        let mut line = String::new();

        // headers end at the first empty line
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            let header = line.trim_end_matches('\n');
            if header.is_empty() {
                break;
            }
            lines.push(header.to_string());
        }

        let mut message = String::new();
        reader.read_to_string(&mut message)?;

        let mut tree_oid = None;
        let mut parents = Vec::new();
        let mut author = None;
        let mut committer = None;

        for header in &lines {
            let (key, value) = header
                .split_once(' ')
                .with_context(|| format!("Invalid commit header: {header}"))?;
            match key {
                "tree" => tree_oid = Some(ObjectId::try_parse(value)?),
                "parent" => parents.push(ObjectId::try_parse(value)?),
                "author" => author = Some(Author::try_from(value)?),
                "committer" => committer = Some(Author::try_from(value)?),
                _ => {}
            }
        }

        Ok(Commit {
            parents,
            tree_oid: tree_oid.context("Commit is missing its tree")?,
            author: author.context("Commit is missing its author")?,
            committer: committer.context("Commit is missing its committer")?,
            message,
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        String::from_utf8_lossy(&self.serialize().unwrap_or_default()).to_string()
    }
}
