//! Zlib wrapper around stored payloads.
//!
//! Payloads are compressed on the way into the object database and
//! decompressed on the way out. A stream that cannot be inflated is
//! reported as [`StoreError::CorruptStream`] so callers can distinguish
//! on-disk corruption from plain I/O failures.

use crate::errors::{StoreError, StoreResult};
use bytes::Bytes;
use std::io::{Read, Write};

pub(crate) fn compress(data: &[u8]) -> StoreResult<Bytes> {
    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;

    let compressed_content = encoder.finish()?;
    Ok(compressed_content.into())
}

pub(crate) fn decompress(data: &[u8]) -> StoreResult<Bytes> {
    let mut decoder = flate2::read::ZlibDecoder::new(data);
    let mut decompressed_content = Vec::new();
    decoder
        .read_to_end(&mut decompressed_content)
        .map_err(StoreError::CorruptStream)?;

    Ok(decompressed_content.into())
}
