use crate::areas::repository::Repository;

impl Repository {
    pub fn ls_files(&self) -> anyhow::Result<()> {
        let mut index = self.index();
        index.rehydrate()?;

        for entry in index.entries() {
            writeln!(self.writer(), "{}", entry.name.display())?;
        }

        Ok(())
    }
}
