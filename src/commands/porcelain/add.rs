use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::files::file_status::WorktreeStatus;
use crate::artifacts::index::index_entry::IndexEntry;

const ADD_ALL: &str = ".";

impl Repository {
    /// Stage every untracked, changed and deleted file.
    ///
    /// Only `.` is accepted as a pathspec.
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        if let Some(path) = paths.iter().find(|path| path.as_str() != ADD_ALL) {
            return Err(RepositoryError::UnsupportedPathspec { path: path.clone() }.into());
        }

        let mut index = self.index();

        // Load the index file from the disk
        index.rehydrate()?;

        let files = self.status_engine().worktree_pass(&index)?;

        for mut file in files {
            match file.worktree_status {
                WorktreeStatus::Untracked | WorktreeStatus::Changed => {
                    let absolute_path = self.workspace().absolute_path(&file.path);
                    let blob = self
                        .database()
                        .write_blob(&absolute_path, file.path.clone())?;

                    file.oid = Some(blob.oid);
                    index.add(IndexEntry::try_from(file)?);
                }
                WorktreeStatus::Deleted => index.remove(&file.path),
                _ => {}
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
