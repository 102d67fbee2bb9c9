use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// Print a stored object. Blob content is written byte for byte;
    /// trees and commits are pretty-printed.
    pub fn cat_file(&self, object_sha: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha)?;

        match self.database().parse_object(&object_id)? {
            ObjectBox::Blob(blob) => self.writer().write_all(blob.content())?,
            ObjectBox::Tree(tree) => write!(self.writer(), "{}", tree.display())?,
            ObjectBox::Commit(commit) => write!(self.writer(), "{}", commit.display())?,
        }

        Ok(())
    }
}
