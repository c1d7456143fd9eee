//! Porcelain commands (user-facing operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage the whole working directory
//! - `commit`: Create a new commit
//! - `status`: Show staged, unstaged and untracked changes
//! - `log`: Show first-parent history
//! - `ls_files`: List staged paths
//! - `branch`: Create, list, or delete branches
//! - `switch`: Check out another branch

pub mod add;
pub mod branch;
pub mod commit;
pub mod init;
pub mod log;
pub mod ls_files;
pub mod status;
pub mod switch;
