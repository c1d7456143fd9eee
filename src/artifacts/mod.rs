//! Data structures and algorithms
//!
//! - `branch`: Branch name validation
//! - `core`: Configuration, error taxonomy and ignore rules
//! - `files`: Per-path file records and the FileSet merge algebra
//! - `index`: Index/staging area on-disk records
//! - `objects`: Object types (blob, tree, commit) and the tree builder
//! - `status`: Index-vs-commit and worktree-vs-index status passes

pub mod branch;
pub mod core;
pub mod files;
pub mod index;
pub mod objects;
pub mod status;
