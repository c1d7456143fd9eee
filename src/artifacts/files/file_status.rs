//! Status columns
//!
//! The staged column compares the index against the last commit, the
//! unstaged column compares the working directory against the index. Each
//! set renders to the single-letter codes used by porcelain status output.

/// Index status relative to the last commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IndexStatus {
    #[default]
    Unmodified,
    Updated,
    TypeChanged,
    Added,
    Deleted,
    Renamed,
    Copied,
    Untracked,
}

impl IndexStatus {
    pub fn code(&self) -> char {
        match self {
            IndexStatus::Unmodified => ' ',
            IndexStatus::Updated => 'M',
            IndexStatus::TypeChanged => 'T',
            IndexStatus::Added => 'A',
            IndexStatus::Deleted => 'D',
            IndexStatus::Renamed => 'R',
            IndexStatus::Copied => 'C',
            IndexStatus::Untracked => '?',
        }
    }
}

impl std::fmt::Display for IndexStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Working directory status relative to the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WorktreeStatus {
    #[default]
    Matches,
    Changed,
    TypeChanged,
    Deleted,
    Renamed,
    Copied,
    Untracked,
}

impl WorktreeStatus {
    pub fn code(&self) -> char {
        match self {
            WorktreeStatus::Matches => ' ',
            WorktreeStatus::Changed => 'M',
            WorktreeStatus::TypeChanged => 'T',
            WorktreeStatus::Deleted => 'D',
            WorktreeStatus::Renamed => 'R',
            WorktreeStatus::Copied => 'C',
            WorktreeStatus::Untracked => '?',
        }
    }
}

impl std::fmt::Display for WorktreeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
