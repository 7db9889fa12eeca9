//! Beta (fixed-width binary) codec.
//!
//! Each value is a plain `num_bits`-wide unsigned integer, MSB-first, from
//! which the caller's offset is subtracted.

use crate::bulk::{self, BulkDecode};
use cramcodec_core::bitstream::{BitCursor, BitReader, MAX_READ_BITS};
use cramcodec_core::error::{CodecError, Result};

/// Reject widths outside 1..=32.
pub(crate) fn check_num_bits(num_bits: u32) -> Result<()> {
    if num_bits == 0 || num_bits > MAX_READ_BITS {
        return Err(CodecError::invalid_parameter(
            "num_bits",
            num_bits,
            "beta width must be in 1..=32",
        ));
    }
    Ok(())
}

/// Decode one beta value from `reader`. `num_bits` is already validated.
#[inline]
pub(crate) fn read_beta(reader: &mut BitReader<'_>, num_bits: u32, offset: i32) -> Result<i32> {
    // Byte-aligned 8-bit values skip the bit loop.
    let value = if num_bits == 8 && reader.cursor().is_byte_aligned() {
        reader.read_aligned_byte()? as u32
    } else {
        reader.read_bits(num_bits)?
    };
    Ok((value as i32).wrapping_sub(offset))
}

/// Decode a single `num_bits`-wide value at `cursor`.
///
/// # Example
///
/// ```
/// use cramcodec_core::BitCursor;
/// use cramcodec_int::decode_beta;
///
/// let data = [0xFF];
/// let (value, cursor) = decode_beta(&data, BitCursor::START, 8, 0).unwrap();
/// assert_eq!(value, 255);
/// assert_eq!(cursor, BitCursor::at_byte(1));
/// ```
pub fn decode_beta(
    data: &[u8],
    cursor: BitCursor,
    num_bits: u32,
    offset: i32,
) -> Result<(i32, BitCursor)> {
    check_num_bits(num_bits)?;
    let mut reader = BitReader::with_cursor(data, cursor);
    let value = read_beta(&mut reader, num_bits, offset)?;
    Ok((value, reader.cursor()))
}

/// Decode up to `count` beta values, stopping early when the input runs out.
pub fn decode_beta_bulk(
    data: &[u8],
    cursor: BitCursor,
    num_bits: u32,
    offset: i32,
    count: usize,
) -> Result<BulkDecode> {
    check_num_bits(num_bits)?;
    bulk::collect(data, cursor, count, |reader| read_beta(reader, num_bits, offset))
}

/// Decode beta values into `out`, returning how many were written.
pub fn decode_beta_into(
    data: &[u8],
    cursor: BitCursor,
    num_bits: u32,
    offset: i32,
    out: &mut [i32],
) -> Result<(usize, BitCursor)> {
    check_num_bits(num_bits)?;
    bulk::fill(data, cursor, out, |reader| read_beta(reader, num_bits, offset))
}
