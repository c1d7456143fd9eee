//! Repository configuration
//!
//! A `Config` is built once per invocation and handed to the repository,
//! which derives every on-disk location from it. Nothing reads global state.

use crate::artifacts::objects::commit::Author;
use anyhow::Context;
use std::path::{Path, PathBuf};

pub const DEFAULT_GIT_DIRECTORY: &str = ".git";
pub const DEFAULT_BRANCH: &str = "main";
const IGNORE_FILE: &str = ".gitignore";

/// Name and email used for author and committer lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
    /// Fixed timestamp for authored commits; `None` means "now"
    pub date: Option<chrono::DateTime<chrono::Utc>>,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Identity {
            name: name.into(),
            email: email.into(),
            date: None,
        }
    }

    pub fn with_date(mut self, date: chrono::DateTime<chrono::Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn to_author(&self) -> Author {
        match self.date {
            Some(date) => Author::new_with_timestamp(self.name.clone(), self.email.clone(), date),
            None => Author::new(self.name.clone(), self.email.clone()),
        }
    }

    /// Read GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL and optionally GIT_AUTHOR_DATE.
    ///
    /// Returns `None` when either name or email is missing.
    pub fn load_from_env() -> Option<Self> {
        let name = std::env::var("GIT_AUTHOR_NAME").ok()?;
        let email = std::env::var("GIT_AUTHOR_EMAIL").ok()?;
        let date = std::env::var("GIT_AUTHOR_DATE")
            .ok()
            .and_then(|date| Self::parse_date(&date));

        Some(Identity { name, email, date })
    }

    fn parse_date(value: &str) -> Option<chrono::DateTime<chrono::Utc>> {
        let value = value.trim();
        if let Ok(timestamp) = value.parse::<i64>() {
            return chrono::DateTime::from_timestamp(timestamp, 0);
        }

        chrono::DateTime::parse_from_rfc2822(value)
            .or_else(|_| chrono::DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S %z"))
            .map(|date| date.to_utc())
            .ok()
    }
}

/// Per-invocation configuration
#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    git_directory: String,
    default_branch: String,
    ignore: Vec<String>,
    author: Option<Identity>,
}

impl Config {
    /// Configuration rooted at `path` with default directory names.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Config {
            path: path.into(),
            git_directory: DEFAULT_GIT_DIRECTORY.to_string(),
            default_branch: DEFAULT_BRANCH.to_string(),
            ignore: Vec::new(),
            author: None,
        }
    }

    /// Configuration for the repository rooted at `path`, with ignore
    /// prefixes read from its `.gitignore` and the author taken from the
    /// environment.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve repository path {}", path.display()))?;
        let ignore = Self::read_ignore_file(&path.join(IGNORE_FILE))?;

        let config = Config::new(path).with_ignore(ignore);
        Ok(match Identity::load_from_env() {
            Some(identity) => config.with_author(identity),
            None => config,
        })
    }

    fn read_ignore_file(path: &Path) -> anyhow::Result<Vec<String>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read ignore file {}", path.display()))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.trim_start_matches('/').to_string())
            .collect())
    }

    pub fn with_git_directory(mut self, git_directory: impl Into<String>) -> Self {
        self.git_directory = git_directory.into();
        self
    }

    pub fn with_default_branch(mut self, default_branch: impl Into<String>) -> Self {
        self.default_branch = default_branch.into();
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_author(mut self, author: Identity) -> Self {
        self.author = Some(author);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_directory(&self) -> &str {
        &self.git_directory
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn ignore(&self) -> &[String] {
        &self.ignore
    }

    pub fn author(&self) -> Option<&Identity> {
        self.author.as_ref()
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(&self.git_directory)
    }

    pub fn objects_path(&self) -> PathBuf {
        self.git_path().join("objects")
    }

    pub fn refs_path(&self) -> PathBuf {
        self.git_path().join("refs")
    }

    pub fn heads_path(&self) -> PathBuf {
        self.refs_path().join("heads")
    }

    pub fn head_path(&self) -> PathBuf {
        self.git_path().join("HEAD")
    }

    pub fn index_path(&self) -> PathBuf {
        self.git_path().join("index")
    }
}
