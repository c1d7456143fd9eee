use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::index::index_entry::IndexEntry;
use anyhow::Context;
use std::path::Path;
use tracing::info;

impl Repository {
    /// Check out `name`, replacing tracked files with the branch's snapshot.
    ///
    /// Refused when tracked files have staged or unstaged changes, or when
    /// an untracked file would be overwritten. Other untracked files stay.
    pub fn switch(&self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name)?;
        let target_oid =
            self.refs()
                .read_branch(name.as_ref())?
                .ok_or_else(|| RepositoryError::BranchNotFound {
                    name: name.to_string(),
                })?;

        if self.refs().current_branch()? == name.as_ref() {
            writeln!(self.writer(), "Already on '{}'", name)?;
            return Ok(());
        }

        let status_info = self.status_engine().initialize()?;
        let tracked_changes = status_info.tracked_changes();
        if !tracked_changes.is_empty() {
            return Err(RepositoryError::LocalChanges {
                paths: tracked_changes,
            }
            .into());
        }

        let target_files = self.status_engine().commit_file_set(&target_oid)?;

        let mut index = self.index();
        index.rehydrate()?;

        let worktree = self.workspace().scan(self.ignore())?;
        let untracked = index.file_set().complement(&worktree);
        let overwritten = untracked
            .iter()
            .filter(|file| {
                target_files
                    .iter()
                    .any(|target| Self::paths_clash(&file.path, &target.path))
            })
            .map(|file| file.path.display().to_string())
            .collect::<Vec<_>>();
        if !overwritten.is_empty() {
            return Err(RepositoryError::LocalChanges { paths: overwritten }.into());
        }

        // nothing is touched until every target blob is known to be stored
        let mut target_blobs = Vec::with_capacity(target_files.len());
        for file in target_files.iter() {
            let oid = file
                .oid
                .with_context(|| format!("{} has no stored content", file.path.display()))?;
            if !self.database().contains(&oid) {
                anyhow::bail!("object {} for {} is missing", oid, file.path.display());
            }
            target_blobs.push((file.path.clone(), oid));
        }

        for entry in index.entries() {
            if target_files.contains(&entry.name).is_none() {
                self.workspace().remove_file(&entry.name)?;
            }
        }

        let mut entries = Vec::with_capacity(target_blobs.len());
        for (path, oid) in target_blobs {
            let blob = self.database().parse_object_as_blob(&oid)?;
            self.workspace().write_file(&path, blob.content())?;

            let metadata = self.workspace().stat_file(&path)?;
            entries.push(IndexEntry::new(path, oid, metadata));
        }

        index.replace_all(entries);
        index.write_updates()?;

        self.refs().set_head_branch(&name)?;
        info!(branch = %name, oid = %target_oid, "switched branch");

        writeln!(self.writer(), "Switched to branch '{}'", name)?;

        Ok(())
    }

    /// A file at `untracked` blocks writing `target` when one is the other or
    /// lies inside the other.
    fn paths_clash(untracked: &Path, target: &Path) -> bool {
        untracked.starts_with(target) || target.starts_with(untracked)
    }
}
