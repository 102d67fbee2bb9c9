//! Plumbing commands (low-level object operations)
//!
//! ## Commands
//!
//! - `hash-object`: Compute a blob's ID and optionally store it
//! - `cat-file`: Print the content of a stored object
//! - `ls-tree`: List the direct entries of a tree object
//! - `write-tree`: Snapshot the working directory as tree objects
//! - `commit-tree`: Wrap a tree in a commit object

pub mod cat_file;
pub mod commit_tree;
pub mod hash_object;
pub mod ls_tree;
pub mod write_tree;
