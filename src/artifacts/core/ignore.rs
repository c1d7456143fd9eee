use crate::artifacts::core::config::Config;
use std::path::Path;

/// Prefix-based ignore rules
///
/// A path is ignored when it is the repository root itself, lives inside
/// the git directory, or starts with one of the configured prefixes.
#[derive(Debug, Clone)]
pub struct Ignore {
    git_directory: String,
    prefixes: Vec<String>,
}

impl Ignore {
    pub fn new(config: &Config) -> Self {
        Ignore {
            git_directory: config.git_directory().to_string(),
            prefixes: config.ignore().to_vec(),
        }
    }

    /// `path` is relative to the repository root.
    pub fn is_ignored(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();
        let path = path.trim_start_matches('/');

        if path.is_empty() {
            return true;
        }
        if path == self.git_directory || path.starts_with(&format!("{}/", self.git_directory)) {
            return true;
        }

        self.prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}
