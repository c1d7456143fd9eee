//! Command implementations
//!
//! Commands are `impl Repository` blocks, organized into two categories:
//!
//! - `plumbing`: Low-level commands for direct object manipulation
//! - `porcelain`: User-facing commands built on top of them

pub mod plumbing;
pub mod porcelain;
