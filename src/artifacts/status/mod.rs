//! Three-way status
//!
//! The last commit, the index and the working directory are each turned
//! into a file set. Two independent passes compare them pairwise:
//!
//! - index against commit (staged changes)
//! - working directory against index (unstaged and untracked changes)
//!
//! Each pass reports only the paths it found changed.

pub mod status_info;
pub mod status_line;
