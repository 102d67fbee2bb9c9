//! A minimal git-compatible object store.
//!
//! Objects (blobs, trees, commits) are encoded with the loose-object
//! envelope, hashed with SHA-1, zlib-compressed and stored under
//! `.git/objects/` in the same two-level layout git uses, so repositories
//! written by this crate can be read back by stock git tooling.
//!
//! Tree siblings are ordered by raw name bytes; git itself orders
//! directory names as if they ended in `/`. A tree pairing a directory
//! with a same-prefixed sibling (`foo` next to `foo.txt`) therefore gets
//! a different id here than git computes for the same content.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
