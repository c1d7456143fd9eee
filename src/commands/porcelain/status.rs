use crate::areas::repository::Repository;

impl Repository {
    /// Staged rows first, then working directory rows, one per changed path.
    pub fn status(&self) -> anyhow::Result<()> {
        let status_info = self.status_engine().initialize()?;

        for line in status_info.lines() {
            writeln!(self.writer(), "{}", line)?;
        }

        Ok(())
    }
}
