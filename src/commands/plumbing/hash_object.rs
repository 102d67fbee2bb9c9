use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object::Object;
use std::io::Write;

impl Repository {
    /// Hash a file's content as a blob and print the resulting ID.
    ///
    /// Without `write` the object database is left untouched; with it the
    /// blob is stored as well.
    pub fn hash_object(&self, object_path: &str, write: bool) -> anyhow::Result<()> {
        let object_data = self.workspace().read_file(object_path.as_ref())?;
        let object = Blob::new(object_data);

        let object_id = object.object_id();
        writeln!(self.writer(), "{object_id}")?;

        if !write {
            return Ok(());
        }

        self.database().store(&object)?;

        Ok(())
    }
}
