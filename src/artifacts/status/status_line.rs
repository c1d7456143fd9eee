use crate::artifacts::files::file::File;
use crate::artifacts::files::file_status::{IndexStatus, WorktreeStatus};
use std::path::PathBuf;

/// One printed status row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub path: PathBuf,
    pub index_status: IndexStatus,
    pub worktree_status: WorktreeStatus,
}

impl StatusLine {
    pub fn is_untracked(&self) -> bool {
        self.worktree_status == WorktreeStatus::Untracked
    }
}

impl From<&File> for StatusLine {
    fn from(file: &File) -> Self {
        StatusLine {
            path: file.path.clone(),
            index_status: file.index_status,
            worktree_status: file.worktree_status,
        }
    }
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_untracked() {
            write!(f, " ?? {}", self.path.display())
        } else {
            write!(
                f,
                "{}{} {}",
                self.index_status,
                self.worktree_status,
                self.path.display()
            )
        }
    }
}
