use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Rewrite a file and push its modification time forward so the change is
/// visible regardless of timestamp granularity.
pub fn modify_file(file_spec: FileSpec) {
    let path = file_spec.path.clone();
    let before = std::fs::metadata(&path)
        .map(|metadata| filetime::FileTime::from_last_modification_time(&metadata))
        .unwrap_or_else(|e| panic!("Failed to stat file {:?}: {}", path, e));

    write_file(file_spec);

    let after = filetime::FileTime::from_unix_time(before.unix_seconds() + 10, 0);
    filetime::set_file_mtime(&path, after)
        .unwrap_or_else(|e| panic!("Failed to set mtime of {:?}: {}", path, e));
}

pub fn delete_path(path: &Path) {
    if path.is_dir() {
        std::fs::remove_dir_all(path)
            .unwrap_or_else(|e| panic!("Failed to remove directory {:?}: {}", path, e));
    } else {
        std::fs::remove_file(path)
            .unwrap_or_else(|e| panic!("Failed to remove file {:?}: {}", path, e));
    }
}

/// Every regular file below `dir`, relative and sorted, skipping `.git`.
pub fn list_worktree_files(dir: &Path) -> Vec<String> {
    let mut files = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ".git")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(dir)
                .expect("walked path is below the root")
                .display()
                .to_string()
        })
        .collect::<Vec<_>>();
    files.sort();
    files
}
