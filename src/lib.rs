//! A minimal content-addressable version-control engine.
//!
//! - `areas`: on-disk areas of a repository (object database, index, refs, workspace)
//! - `artifacts`: objects, index records, file sets and the status algebra
//! - `commands`: plumbing and porcelain operations on a [`areas::repository::Repository`]

pub mod areas;
pub mod artifacts;
pub mod commands;
