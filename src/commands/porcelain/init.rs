use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;

impl Repository {
    /// Create `.git` with `HEAD`, `objects`, `refs` and `refs/heads`.
    ///
    /// No branch file and no index exist until the first add and commit.
    pub fn init(&self) -> anyhow::Result<()> {
        let config = self.config();
        let reinitialized = config.head_path().exists();

        fs::create_dir_all(config.objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(config.heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        if !reinitialized {
            let default_branch = BranchName::try_parse(config.default_branch())?;
            self.refs()
                .set_head_branch(&default_branch)
                .context("Failed to create initial HEAD reference")?;
        }

        writeln!(
            self.writer(),
            "{} Git repository in {}",
            if reinitialized {
                "Reinitialized existing"
            } else {
                "Initialized empty"
            },
            config.git_path().display()
        )?;

        Ok(())
    }
}
