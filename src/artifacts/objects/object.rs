//! Object envelope codec
//!
//! Every object is stored as `<type> <decimal-content-length>\0<content>`.
//! That exact byte sequence is what gets hashed (SHA-1) and compressed, so
//! encoding here defines the content-addressing contract: identical
//! `(type, content)` pairs always produce identical object IDs.
//!
//! Decoding works on raw byte slices with explicit bounds checks; blob
//! content is arbitrary binary and is never assumed to be text.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use sha1::{Digest, Sha1};

/// Serialization into the stored payload (header + content).
pub trait Packable {
    /// Build the full encoded payload. Encoding never fails for well-formed
    /// values, so there is no error channel here.
    fn serialize(&self) -> Bytes;
}

/// Deserialization from the content bytes of a payload (header already
/// stripped by [`split_object`]).
pub trait Unpackable {
    fn deserialize(content: Bytes) -> StoreResult<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    /// Content hash over the exact encoded payload.
    fn object_id(&self) -> ObjectId {
        let payload = self.serialize();
        let digest = Sha1::digest(&payload);
        ObjectId::from_bytes(digest.into())
    }
}

/// A fully decoded object of any kind.
pub enum ObjectBox {
    Blob(Blob),
    Tree(Tree),
    Commit(Commit),
}

/// Wrap content bytes in the object envelope.
pub fn encode_object(object_type: ObjectType, content: &[u8]) -> Bytes {
    let header = format!("{} {}\0", object_type.as_str(), content.len());

    let mut payload = Vec::with_capacity(header.len() + content.len());
    payload.extend_from_slice(header.as_bytes());
    payload.extend_from_slice(content);

    Bytes::from(payload)
}

/// Split a decompressed payload into its type tag and content bytes.
///
/// Fails with [`StoreError::MalformedObject`] when the NUL separator is
/// missing, the header is not `<known-type> <decimal-length>`, or the
/// declared length does not match the remaining byte count.
pub fn split_object(payload: &[u8]) -> StoreResult<(ObjectType, &[u8])> {
    let nul = payload
        .iter()
        .position(|&byte| byte == 0)
        .ok_or_else(|| StoreError::MalformedObject("missing NUL header separator".to_string()))?;

    let header = std::str::from_utf8(&payload[..nul])
        .map_err(|_| StoreError::MalformedObject("non-ASCII header".to_string()))?;
    let (type_tag, declared_size) = header
        .split_once(' ')
        .ok_or_else(|| StoreError::MalformedObject(format!("invalid header: {header:?}")))?;

    let object_type = ObjectType::try_from(type_tag)?;
    let declared_size: usize = declared_size.parse().map_err(|_| {
        StoreError::MalformedObject(format!("invalid content length: {declared_size:?}"))
    })?;

    let content = &payload[nul + 1..];
    if content.len() != declared_size {
        return Err(StoreError::MalformedObject(format!(
            "declared length {declared_size} does not match content length {}",
            content.len()
        )));
    }

    Ok((object_type, content))
}
