//! Decoding of downloaded or local index payloads.
//!
//! Mirrors publish `Packages.gz`; test repositories are usually plain text.
//! The payload itself decides: gzip magic bytes mean decompress, anything
//! else is taken as text.

use crate::shared::error::DepGraphError;
use crate::shared::security::MAX_INDEX_SIZE;
use crate::shared::Result;
use flate2::read::MultiGzDecoder;
use std::io::Read;

/// Leading bytes of every gzip member
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// True when `bytes` start with the gzip magic number
pub fn is_gzip(bytes: &[u8]) -> bool {
    bytes.starts_with(&GZIP_MAGIC)
}

/// Turns raw index bytes into text
///
/// Gzip payloads are decompressed (at most [`MAX_INDEX_SIZE`] bytes of
/// output). Invalid UTF-8 sequences are replaced rather than rejected, since
/// package descriptions occasionally carry legacy encodings.
///
/// # Arguments
/// * `bytes` - Payload as read from disk or the network
/// * `location` - Path or URL, used in error messages
pub fn decode_index(bytes: Vec<u8>, location: &str) -> Result<String> {
    let raw = if is_gzip(&bytes) {
        decompress(&bytes, location)?
    } else {
        bytes
    };

    Ok(match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}

fn decompress(bytes: &[u8], location: &str) -> Result<Vec<u8>> {
    let decode_error = |details: String| DepGraphError::IndexDecodeError {
        location: location.to_string(),
        details,
    };

    let mut output = Vec::new();
    MultiGzDecoder::new(bytes)
        .take(MAX_INDEX_SIZE + 1)
        .read_to_end(&mut output)
        .map_err(|e| decode_error(format!("gzip decompression failed: {}", e)))?;

    if output.len() as u64 > MAX_INDEX_SIZE {
        return Err(decode_error(format!(
            "decompressed index exceeds {} bytes",
            MAX_INDEX_SIZE
        ))
        .into());
    }

    Ok(output)
}
