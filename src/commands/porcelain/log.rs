use crate::areas::repository::Repository;

impl Repository {
    /// Walk first parents from the tip of the current branch.
    pub fn log(&self) -> anyhow::Result<()> {
        let mut next = Some(self.refs().last_commit()?);
        let mut first = true;

        while let Some(commit_id) = next {
            let commit = self.database().parse_object_as_commit(&commit_id)?;

            if !first {
                writeln!(self.writer())?;
            }
            first = false;

            let mut writer = self.writer();
            writeln!(writer, "commit {}", commit_id)?;
            writeln!(writer, "Author: {}", commit.author().display_name())?;
            writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
            writeln!(writer)?;
            for line in commit.message().lines() {
                writeln!(writer, "    {}", line)?;
            }

            next = commit.parents().first().copied();
        }

        Ok(())
    }
}
