//! Block decompression entry points.

use crate::method::CompressionMethod;
use cramcodec_core::error::{CodecError, Result};
use std::io::Cursor;

/// Gzip magic bytes.
const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Whether `input` starts with a valid zlib header: deflate method and
/// header check bits that make `CMF << 8 | FLG` a multiple of 31.
fn is_zlib(input: &[u8]) -> bool {
    match input {
        [cmf, flg, ..] => {
            cmf & 0x0F == 8 && ((u16::from(*cmf) << 8) | u16::from(*flg)) % 31 == 0
        }
        _ => false,
    }
}

/// Inflate gzip, zlib or raw deflate data, detecting the framing from the
/// first bytes.
///
/// Gzip members are read with their optional header fields, and the CRC-32
/// and length in the trailer are checked.
///
/// # Example
///
/// ```rust
/// let packed = oxiarc_deflate::zlib_compress(b"ACGTACGTACGT", 6).unwrap();
/// let data = cramcodec_block::inflate(&packed).unwrap();
/// assert_eq!(data, b"ACGTACGTACGT");
/// ```
pub fn inflate(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    if input.starts_with(&GZIP_MAGIC) {
        log::trace!("Inflating {} bytes as gzip", input.len());
        oxiarc_archive::gzip::decompress(&mut Cursor::new(input))
            .map_err(|e| CodecError::decompression("gzip", e.to_string()))
    } else if is_zlib(input) {
        log::trace!("Inflating {} bytes as zlib", input.len());
        oxiarc_deflate::zlib_decompress(input)
            .map_err(|e| CodecError::decompression("zlib", e.to_string()))
    } else {
        log::trace!("Inflating {} bytes as raw deflate", input.len());
        oxiarc_deflate::inflate(input)
            .map_err(|e| CodecError::decompression("deflate", e.to_string()))
    }
}

/// Decompress bzip2 data.
pub fn bunzip2(input: &[u8]) -> Result<Vec<u8>> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    oxiarc_bzip2::decompress(Cursor::new(input))
        .map_err(|e| CodecError::decompression("bzip2", e.to_string()))
}

/// Decompress a block payload.
///
/// Empty input yields an empty buffer for every method. When
/// `expected_size` is given, the decompressed length must match it.
pub fn decompress(
    method: CompressionMethod,
    input: &[u8],
    expected_size: Option<usize>,
) -> Result<Vec<u8>> {
    let output = match method {
        CompressionMethod::Raw => input.to_vec(),
        CompressionMethod::Gzip => inflate(input)?,
        CompressionMethod::Bzip2 => bunzip2(input)?,
    };

    log::debug!(
        "Decompressed {} block: {} -> {} bytes",
        method,
        input.len(),
        output.len()
    );

    match expected_size {
        Some(expected) if expected != output.len() => {
            Err(CodecError::size_mismatch(expected, output.len()))
        }
        _ => Ok(output),
    }
}

/// Decompress a block payload given its raw CRAM method id.
pub fn decompress_by_id(
    method_id: u8,
    input: &[u8],
    expected_size: Option<usize>,
) -> Result<Vec<u8>> {
    decompress(CompressionMethod::from_id(method_id)?, input, expected_size)
}
