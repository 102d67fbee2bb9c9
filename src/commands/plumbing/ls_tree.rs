use crate::areas::repository::Repository;
use crate::artifacts::objects::object::ObjectBox;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

impl Repository {
    /// List the direct entries of a tree object, one `<mode> <name>` line
    /// per entry in stored order. Subtrees are not recursed into.
    pub fn ls_tree(&self, object_sha: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_sha)?;

        let ObjectBox::Tree(tree) = self.database().parse_object(&object_id)? else {
            anyhow::bail!("not a tree object: {object_id}");
        };

        for entry in tree.entries() {
            writeln!(self.writer(), "{} {}", entry.mode(), entry.name())?;
        }

        Ok(())
    }
}
