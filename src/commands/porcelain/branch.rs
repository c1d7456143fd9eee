use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::RepositoryError;
use tracing::info;

impl Repository {
    /// `* <current>` then `  <other>` for every branch, sorted by name.
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;

        for branch in self.refs().list_branches()? {
            let marker = if branch == current { "*" } else { " " };
            writeln!(self.writer(), "{} {}", marker, branch)?;
        }

        Ok(())
    }

    /// New branch at the tip of the current one.
    pub fn create_branch(&self, name: &str) -> anyhow::Result<()> {
        let name = BranchName::try_parse(name)?;
        let source_oid = self.refs().last_commit()?;

        self.refs().create_branch(&name, &source_oid)?;
        info!(branch = %name, oid = %source_oid, "branch created");

        Ok(())
    }

    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        if self.refs().current_branch()? == name {
            return Err(RepositoryError::BranchCheckedOut {
                name: name.to_string(),
                path: self.path().to_path_buf(),
            }
            .into());
        }

        let oid = self.refs().delete_branch(name)?;
        info!(branch = name, oid = %oid, "branch deleted");

        writeln!(
            self.writer(),
            "Deleted branch {} (was {}).",
            name,
            oid.to_short_oid()
        )?;

        Ok(())
    }
}
