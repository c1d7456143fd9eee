use crate::artifacts::files::file_status::{IndexStatus, WorktreeStatus};
use crate::artifacts::index::index_entry::{EntryMetadata, IndexEntry};
use crate::artifacts::objects::object_id::ObjectId;
use std::path::{Path, PathBuf};

/// One tracked or observed path
///
/// Files built from the last commit carry a digest but no metadata, files
/// from the working directory carry metadata but no digest, and files from
/// the index carry both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub path: PathBuf,
    pub index_status: IndexStatus,
    pub worktree_status: WorktreeStatus,
    pub oid: Option<ObjectId>,
    pub metadata: Option<EntryMetadata>,
}

impl File {
    /// A file known from a commit tree.
    pub fn from_commit(path: PathBuf, oid: ObjectId) -> Self {
        File {
            path,
            index_status: IndexStatus::default(),
            worktree_status: WorktreeStatus::default(),
            oid: Some(oid),
            metadata: None,
        }
    }

    /// A file observed in the working directory.
    pub fn from_worktree(path: PathBuf, metadata: EntryMetadata) -> Self {
        File {
            path,
            index_status: IndexStatus::default(),
            worktree_status: WorktreeStatus::default(),
            oid: None,
            metadata: Some(metadata),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Both columns are still at their neutral value.
    pub fn is_unchanged(&self) -> bool {
        self.index_status == IndexStatus::Unmodified
            && self.worktree_status == WorktreeStatus::Matches
    }
}

impl From<IndexEntry> for File {
    fn from(entry: IndexEntry) -> Self {
        File {
            path: entry.name,
            index_status: IndexStatus::default(),
            worktree_status: WorktreeStatus::default(),
            oid: Some(entry.oid),
            metadata: Some(entry.metadata),
        }
    }
}

impl TryFrom<File> for IndexEntry {
    type Error = anyhow::Error;

    fn try_from(file: File) -> anyhow::Result<Self> {
        let oid = file
            .oid
            .ok_or_else(|| anyhow::anyhow!("{} has no stored content", file.path.display()))?;
        let metadata = file
            .metadata
            .ok_or_else(|| anyhow::anyhow!("{} has no recorded metadata", file.path.display()))?;

        Ok(IndexEntry::new(file.path, oid, metadata))
    }
}
