//! Command implementations
//!
//! Commands are organized into two categories following git's
//! architecture:
//!
//! - `plumbing`: low-level commands for direct object manipulation
//!   (hash-object, cat-file, ls-tree, write-tree, commit-tree)
//! - `porcelain`: user-facing commands (init)
//!
//! Each command is an `impl Repository` extension in its own file and
//! writes its output through the repository's writer.

pub mod plumbing;
pub mod porcelain;
