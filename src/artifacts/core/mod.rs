//! Shared building blocks used across the areas
//!
//! - `config`: Per-invocation repository configuration
//! - `error`: Error taxonomy for malformed input and consistency failures
//! - `ignore`: Prefix-based ignore rules for the working directory scan

pub mod config;
pub mod error;
pub mod ignore;
