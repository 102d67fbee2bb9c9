use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Author, Commit};
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;

const DEFAULT_AUTHOR: &str = "John Doe <john@example.com> 1631234567 -0700";
const DEFAULT_COMMITTER: &str = "Jane Smith <jane@example.com> 1631234789 -0700";

impl Repository {
    /// Wrap a tree in a commit object and print the commit's ID.
    ///
    /// The tree and parent IDs are taken at face value; whether they
    /// reference stored objects is a concern for a higher layer.
    /// Identities come from the `GIT_AUTHOR_*` and `GIT_COMMITTER_*`
    /// environment variables, with fixed fallbacks so the command also
    /// works in a bare environment.
    pub fn commit_tree(
        &self,
        tree_sha: &str,
        parent_sha: Option<&str>,
        message: &str,
    ) -> anyhow::Result<()> {
        let tree_oid = ObjectId::try_parse(tree_sha)?;
        let parent = match parent_sha {
            Some(parent_sha) => Some(ObjectId::try_parse(parent_sha)?),
            None => None,
        };

        let author = Author::load_from_env("GIT_AUTHOR")
            .or_else(|_| Author::try_parse(DEFAULT_AUTHOR).map_err(anyhow::Error::from))?;
        let committer = Author::load_from_env("GIT_COMMITTER")
            .or_else(|_| Author::try_parse(DEFAULT_COMMITTER).map_err(anyhow::Error::from))?;

        let commit = Commit::new(tree_oid, parent, author, committer, message.to_string());
        let commit_id = self.database().store(&commit)?;

        writeln!(self.writer(), "{commit_id}")?;

        Ok(())
    }
}
