use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::entry_mode::EntryMode;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::{Tree, TreeEntry};
use std::io::Write;
use std::path::Path;

impl Repository {
    /// Snapshot the working directory as tree objects, bottom-up, and
    /// print the root tree's ID.
    pub fn write_tree(&self) -> anyhow::Result<()> {
        let tree_id = self.build_tree(Path::new(""))?;

        writeln!(self.writer(), "{tree_id}")?;

        Ok(())
    }

    /// Store one directory level and return its tree ID.
    ///
    /// Files are stored as blobs with mode 100644, subdirectories are
    /// recursed into first. An empty directory still yields a valid
    /// (empty) tree object referenced by its parent. Any read failure
    /// aborts the whole build; sub-objects already written stay behind
    /// as valid orphans.
    fn build_tree(&self, dir_path: &Path) -> anyhow::Result<ObjectId> {
        let mut entries = Vec::new();

        for child_path in self.workspace().list_dir(dir_path)? {
            let name = child_path
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or_else(|| {
                    anyhow::anyhow!("unrepresentable file name in {}", child_path.display())
                })?
                .to_string();

            let (mode, oid) = if self.workspace().is_dir(&child_path)? {
                (EntryMode::Directory, self.build_tree(&child_path)?)
            } else {
                let blob = Blob::new(self.workspace().read_file(&child_path)?);
                (EntryMode::Regular, self.database().store(&blob)?)
            };

            entries.push(TreeEntry::new(mode, name, oid));
        }

        let tree = Tree::new(entries);
        Ok(self.database().store(&tree)?)
    }
}
