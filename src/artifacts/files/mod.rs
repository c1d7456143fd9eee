//! Per-path file records and the FileSet merge algebra
//!
//! A `File` combines what one source (last commit, index, working directory)
//! knows about a path with the two status columns. A `FileSet` is an
//! insertion-ordered, path-keyed collection of files; merging file sets from
//! different sources produces the status of every path.

pub mod file;
pub mod file_set;
pub mod file_status;
