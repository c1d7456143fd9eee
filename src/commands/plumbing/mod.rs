//! Plumbing commands (low-level object access)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob digest and optionally store it
//! - `cat-file`: Print a stored object
//! - `write_commit`: Store a commit and advance the current branch

pub mod cat_file;
pub mod hash_object;
pub mod write_commit;
