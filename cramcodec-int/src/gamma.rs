//! Elias gamma codec.
//!
//! A value `v >= 1` is written as `length - 1` zero bits, a one bit, and the
//! `length - 1` low-order bits of `v`, where `length` is the bit length of
//! `v`. The caller's offset is subtracted from the decoded magnitude so that
//! zero and negative values can be represented.
//!
//! ```text
//! v = 5 (0b101, length 3)  ->  0 0 1 0 1
//!                              └┬┘ │ └┬┘
//!                         prefix   │  low bits
//!                             terminator
//! ```

use crate::bulk::{self, BulkDecode};
use crate::unary::read_unary;
use cramcodec_core::bitstream::{BitCursor, BitReader};
use cramcodec_core::error::Result;

/// Longest zero prefix whose value still fits in 32 bits.
pub const MAX_GAMMA_PREFIX: u32 = 31;

/// Decode one gamma value from `reader`.
#[inline]
pub(crate) fn read_gamma(reader: &mut BitReader<'_>, offset: i32) -> Result<i32> {
    let zeros = read_unary(reader, 1, MAX_GAMMA_PREFIX)?;
    let low_bits = reader.read_bits(zeros)?;
    let magnitude = low_bits | (1u32 << zeros);
    Ok((magnitude as i32).wrapping_sub(offset))
}

/// Decode a single gamma value at `cursor`.
///
/// The caller is trusted to supply enough input; when it does not, the read
/// fails with a buffer overrun rather than touching memory past the buffer.
///
/// # Example
///
/// ```
/// use cramcodec_core::BitCursor;
/// use cramcodec_int::decode_gamma;
///
/// // 0 0 1 0 1 -> 5
/// let data = [0b0010_1000];
/// let (value, cursor) = decode_gamma(&data, BitCursor::START, 0).unwrap();
/// assert_eq!(value, 5);
/// assert_eq!(cursor.bit_offset(), 5);
/// ```
pub fn decode_gamma(data: &[u8], cursor: BitCursor, offset: i32) -> Result<(i32, BitCursor)> {
    let mut reader = BitReader::with_cursor(data, cursor);
    let value = read_gamma(&mut reader, offset)?;
    Ok((value, reader.cursor()))
}

/// Decode up to `count` gamma values, stopping early when the input runs out.
pub fn decode_gamma_bulk(
    data: &[u8],
    cursor: BitCursor,
    offset: i32,
    count: usize,
) -> Result<BulkDecode> {
    bulk::collect(data, cursor, count, |reader| read_gamma(reader, offset))
}

/// Decode gamma values into `out`, returning how many were written.
pub fn decode_gamma_into(
    data: &[u8],
    cursor: BitCursor,
    offset: i32,
    out: &mut [i32],
) -> Result<(usize, BitCursor)> {
    bulk::fill(data, cursor, out, |reader| read_gamma(reader, offset))
}
