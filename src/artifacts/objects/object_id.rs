//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 20-byte SHA-1 digests, conventionally rendered as 40
//! hexadecimal characters. They uniquely identify all objects in the store.
//!
//! ## Storage
//!
//! Objects are stored in `.git/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, OBJECT_ID_RAW_LENGTH};
use crate::errors::{StoreError, StoreResult};
use std::path::PathBuf;

/// Git object identifier (SHA-1 hash)
///
/// Held as the 20 raw digest bytes; the hex form is derived on demand.
/// Tree entries embed the raw bytes, everything user-facing shows hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_RAW_LENGTH]);

impl ObjectId {
    /// Wrap a raw 20-byte digest.
    pub fn from_bytes(bytes: [u8; OBJECT_ID_RAW_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Read an object ID from a byte slice, e.g. out of a tree entry.
    pub fn from_slice(bytes: &[u8]) -> StoreResult<Self> {
        let bytes: [u8; OBJECT_ID_RAW_LENGTH] = bytes.try_into().map_err(|_| {
            StoreError::MalformedObject(format!(
                "invalid object id length: {} bytes",
                bytes.len()
            ))
        })?;

        Ok(Self(bytes))
    }

    /// Parse and validate an object ID from its 40-character hex form.
    pub fn try_parse(id: &str) -> StoreResult<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(StoreError::MalformedObject(format!(
                "invalid object id length: {}",
                id.len()
            )));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StoreError::MalformedObject(format!(
                "invalid object id characters: {id}"
            )));
        }

        let mut bytes = [0u8; OBJECT_ID_RAW_LENGTH];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&id[i * 2..i * 2 + 2], 16).map_err(|_| {
                StoreError::MalformedObject(format!("invalid object id characters: {id}"))
            })?;
        }

        Ok(Self(bytes))
    }

    /// The raw 20-byte digest.
    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_RAW_LENGTH] {
        &self.0
    }

    /// Convert to the file system path for object storage.
    ///
    /// Splits the hex form as `XX/YYYYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let hex = self.to_string();
        let (dir, file) = hex.split_at(2);
        PathBuf::from(dir).join(file)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
