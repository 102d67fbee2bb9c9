//! Error kinds surfaced by the object store
//!
//! Every failure in the core maps to one of four kinds:
//!
//! - `Io`: read/write/mkdir failures against the workspace or the store
//! - `NotFound`: a requested object id has no file in the store
//! - `MalformedObject`: a stored payload fails header or content parsing
//! - `CorruptStream`: zlib inflation fails on a stored object
//!
//! The command layer wraps these in `anyhow` contexts and reports them on
//! stderr.

use crate::artifacts::objects::object_id::ObjectId;

/// Errors from object encoding, compression and storage.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The requested object does not exist in the store.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// A stored payload could not be decoded.
    #[error("malformed object: {0}")]
    MalformedObject(String),

    /// The compressed byte stream could not be inflated.
    #[error("corrupt object stream: {0}")]
    CorruptStream(#[source] std::io::Error),

    /// I/O failure from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
