//! Git object types and operations
//!
//! All content is stored as objects identified by SHA-1 hashes. Three types
//! exist in this store:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (modes, names, and object IDs)
//! - **Commit**: snapshot metadata (tree, optional parent, author, message)
//!
//! All objects share the same on-disk envelope: `<type> <size>\0<content>`,
//! hashed before compression.

pub mod blob;
pub mod commit;
pub mod entry_mode;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const OBJECT_ID_RAW_LENGTH: usize = 20;
