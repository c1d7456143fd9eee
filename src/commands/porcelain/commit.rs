use crate::areas::repository::Repository;
use crate::artifacts::core::error::RepositoryError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree_builder::TreeBuilder;

impl Repository {
    /// Snapshot the index as a commit on the current branch.
    pub fn commit(&self, message: &str) -> anyhow::Result<ObjectId> {
        let identity = self
            .config()
            .author()
            .ok_or(RepositoryError::UnknownAuthor)?;

        let message = message.trim_end_matches('\n');
        if message.trim().is_empty() {
            anyhow::bail!("Aborting commit due to empty commit message.");
        }
        let message = format!("{message}\n");

        let tree_id = {
            let mut index = self.index();

            // Load the index file from the disk
            index.rehydrate()?;

            let builder =
                TreeBuilder::build(index.entries().map(|entry| (entry.name.as_path(), entry.oid)))?;
            self.database().write_tree(&builder)?
        };

        let parent = match self.refs().last_commit() {
            Ok(oid) => Some(oid),
            Err(error) if RepositoryError::is_no_commit_yet(&error) => None,
            Err(error) => return Err(error),
        };
        let is_root = match parent {
            Some(_) => "",
            None => "(root-commit) ",
        };

        let author = identity.to_author();
        let commit = Commit::new(
            parent.into_iter().collect(),
            tree_id,
            author.clone(),
            author,
            message,
        );
        let commit_id = self.write_commit(&commit)?;

        writeln!(
            self.writer(),
            "[{} {}{}] {}",
            self.refs().current_branch()?,
            is_root,
            commit_id.to_short_oid(),
            commit.short_message()
        )?;

        Ok(commit_id)
    }
}
