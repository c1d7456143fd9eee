use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the engine itself.
///
/// I/O failures are not part of this enum: they propagate unchanged through
/// `anyhow` with the context of the operation that hit them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("invalid object id: expected 40 hex characters or 20 bytes, got {length} bytes")]
    InvalidObjectId { length: usize },

    #[error("invalid object id characters: {value}")]
    InvalidObjectIdCharacters { value: String },

    #[error("pathspec '{path}' is not supported, only '.' can be added")]
    UnsupportedPathspec { path: String },

    #[error("branch '{branch}' does not have any commits yet")]
    NoCommitYet { branch: String },

    #[error("error: Cannot delete branch '{name}' checked out at '{}'", path.display())]
    BranchCheckedOut { name: String, path: PathBuf },

    #[error("branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("a branch named '{name}' already exists")]
    BranchAlreadyExists { name: String },

    #[error("invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("your local changes would be overwritten by switch: {}", paths.join(", "))]
    LocalChanges { paths: Vec<String> },

    #[error("author identity unknown, set GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL")]
    UnknownAuthor,
}

impl RepositoryError {
    /// Check whether an `anyhow` error carries a missing branch head.
    pub fn is_no_commit_yet(error: &anyhow::Error) -> bool {
        matches!(
            error.downcast_ref::<RepositoryError>(),
            Some(RepositoryError::NoCommitYet { .. })
        )
    }
}
