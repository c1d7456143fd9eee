use crate::areas::repository::Repository;
use std::path::Path;

impl Repository {
    /// Print the blob digest of `file_path`, storing the blob when `write` is set.
    pub fn hash_object(&self, file_path: &Path, write: bool) -> anyhow::Result<()> {
        let absolute_path = self.path().join(file_path);

        let object_id = if write {
            self.database()
                .write_blob(&absolute_path, file_path.to_path_buf())?
                .oid
        } else {
            self.database().hash_blob(&absolute_path)?
        };

        writeln!(self.writer(), "{}", object_id)?;

        Ok(())
    }
}
