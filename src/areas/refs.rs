//! Branch references and HEAD
//!
//! `HEAD` always holds `ref: refs/heads/<branch>\n`; every branch file under
//! `refs/heads/` holds the hex digest of its tip commit followed by a
//! newline. A branch whose file does not exist yet is unborn.

use crate::artifacts::branch::SYMREF_REGEX;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::config::Config;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use file_guard::Lock;
use std::io::Write;
use std::ops::DerefMut;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Refs {
    head_path: Box<Path>,
    heads_path: Box<Path>,
}

impl Refs {
    pub fn new(config: &Config) -> Self {
        Refs {
            head_path: config.head_path().into_boxed_path(),
            heads_path: config.heads_path().into_boxed_path(),
        }
    }

    pub fn head_path(&self) -> &Path {
        &self.head_path
    }

    pub fn heads_path(&self) -> &Path {
        &self.heads_path
    }

    /// Name of the branch `HEAD` points at.
    pub fn current_branch(&self) -> anyhow::Result<String> {
        let content = std::fs::read_to_string(&self.head_path)
            .with_context(|| format!("failed to read {}", self.head_path.display()))?;
        let content = content.trim_end();

        let re = regex::Regex::new(SYMREF_REGEX)
            .with_context(|| format!("invalid symref regex: {SYMREF_REGEX}"))?;

        re.captures(content)
            .map(|captures| captures[1].to_string())
            .with_context(|| format!("HEAD does not point at a branch: {content}"))
    }

    /// Tip of the current branch.
    pub fn last_commit(&self) -> anyhow::Result<ObjectId> {
        let branch = self.current_branch()?;

        self.read_branch(&branch)?
            .ok_or_else(|| RepositoryError::NoCommitYet { branch }.into())
    }

    /// Tip of `name`, or `None` when the branch is unborn.
    pub fn read_branch(&self, name: &str) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(name);
        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        Ok(Some(ObjectId::try_parse(content)?))
    }

    pub fn branch_exists(&self, name: &str) -> bool {
        self.branch_path(name).is_file()
    }

    pub fn update_branch_head(&self, name: &str, oid: &ObjectId) -> anyhow::Result<()> {
        self.update_ref_file(&self.branch_path(name), format!("{oid}\n"))?;
        debug!(branch = name, oid = %oid, "branch head updated");

        Ok(())
    }

    pub fn set_head_branch(&self, name: &BranchName) -> anyhow::Result<()> {
        self.update_ref_file(&self.head_path, format!("ref: {}\n", name.ref_path()))
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name.as_ref()) {
            return Err(RepositoryError::BranchAlreadyExists {
                name: name.to_string(),
            }
            .into());
        }

        self.update_branch_head(name.as_ref(), source_oid)
    }

    /// Remove a branch file and return the commit it pointed at.
    ///
    /// Refusing to delete the checked-out branch is the caller's concern.
    pub fn delete_branch(&self, name: &str) -> anyhow::Result<ObjectId> {
        let oid = self
            .read_branch(name)?
            .ok_or_else(|| RepositoryError::BranchNotFound {
                name: name.to_string(),
            })?;
        let branch_path = self.branch_path(name);

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {:?}", branch_path))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;

        Ok(oid)
    }

    /// Every branch with a file under `refs/heads`, sorted by name.
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        if !self.heads_path.exists() {
            return Ok(Vec::new());
        }

        let mut branches = Vec::new();
        for entry in WalkDir::new(&self.heads_path).sort_by_file_name() {
            let entry = entry.context("failed to list branches")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(&self.heads_path)?;
            branches.push(relative_path.to_string_lossy().to_string());
        }
        branches.sort();

        Ok(branches)
    }

    fn branch_path(&self, name: &str) -> PathBuf {
        self.heads_path.join(name)
    }

    fn update_ref_file(&self, path: &Path, raw_ref: String) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        let mut ref_file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("failed to open ref file at {:?}", path))?;
        let mut lock = file_guard::lock(&mut ref_file, Lock::Exclusive, 0, 1)?;
        lock.deref_mut().write_all(raw_ref.as_bytes())?;

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {:?}", parent)
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
