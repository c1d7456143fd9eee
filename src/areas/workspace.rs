use crate::artifacts::core::ignore::Ignore;
use crate::artifacts::files::file::File;
use crate::artifacts::files::file_set::FileSet;
use crate::artifacts::index::index_entry::EntryMetadata;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The live working directory
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Walk the working directory and record every regular file that is
    /// not ignored, in file name order.
    ///
    /// Ignored directories are not descended into.
    pub fn scan(&self, ignore: &Ignore) -> anyhow::Result<FileSet> {
        let mut files = FileSet::default();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .map(|relative| !ignore.is_ignored(relative))
                    .unwrap_or(false)
            });

        for entry in walker {
            let entry = entry.with_context(|| {
                format!("Unable to scan working directory {}", self.path.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry.path().strip_prefix(&self.path)?.to_path_buf();
            let metadata = entry
                .metadata()
                .with_context(|| format!("Unable to stat {}", relative_path.display()))?;
            let metadata = EntryMetadata::try_from((relative_path.as_path(), metadata))?;

            files.upsert(File::from_worktree(relative_path, metadata));
        }

        Ok(files)
    }

    pub fn stat_file(&self, file_path: &Path) -> anyhow::Result<EntryMetadata> {
        let metadata = std::fs::metadata(self.path.join(file_path))
            .with_context(|| format!("Unable to stat {}", file_path.display()))?;

        (file_path, metadata).try_into()
    }

    pub fn write_file(&self, file_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory for file: {:?}", file_path)
            })?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Failed to open file: {:?}", file_path))?;

        file.write_all(data)
            .with_context(|| format!("Failed to write to file: {:?}", file_path))?;

        Ok(())
    }

    /// Delete a file, then every parent directory it leaves empty.
    pub fn remove_file(&self, file_path: &Path) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {:?}", file_path))?;
        }

        self.prune_empty_parent_dirs(file_path)
    }

    fn prune_empty_parent_dirs(&self, file_path: &Path) -> anyhow::Result<()> {
        for parent in file_path.ancestors().skip(1) {
            if parent.as_os_str().is_empty() {
                break;
            }

            let dir_path = self.path.join(parent);
            let is_empty = match std::fs::read_dir(&dir_path) {
                Ok(mut entries) => entries.next().is_none(),
                Err(_) => break,
            };
            if !is_empty {
                break;
            }

            std::fs::remove_dir(&dir_path)
                .with_context(|| format!("Failed to remove directory: {:?}", parent))?;
        }

        Ok(())
    }

    pub fn absolute_path(&self, file_path: &Path) -> PathBuf {
        self.path.join(file_path)
    }
}
