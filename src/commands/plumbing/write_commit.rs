use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use tracing::info;

impl Repository {
    /// Store `commit` and point the current branch at it.
    ///
    /// The branch moves only once the object is on disk.
    pub fn write_commit(&self, commit: &Commit) -> anyhow::Result<ObjectId> {
        let commit_id = self.database().store(commit)?;

        let branch = self.refs().current_branch()?;
        self.refs().update_branch_head(&branch, &commit_id)?;
        info!(branch = %branch, oid = %commit_id, "commit written");

        Ok(commit_id)
    }
}
