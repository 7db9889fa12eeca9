//! Subexponential codec.
//!
//! A run of `u` one bits, terminated by a zero, selects the width of the
//! field that follows:
//!
//! - `u == 0`: a `k`-bit field holds the value directly.
//! - `u > 0`: a `u + k - 1`-bit field holds the low bits, and the leading one
//!   bit just above them is implicit.
//!
//! The caller's offset is subtracted from the result.

use crate::bulk::{self, BulkDecode};
use crate::unary::read_unary;
use cramcodec_core::bitstream::{BitCursor, BitReader, MAX_READ_BITS};
use cramcodec_core::error::{CodecError, Result};

/// Reject `k` above 32.
pub(crate) fn check_k(k: u32) -> Result<()> {
    if k > MAX_READ_BITS {
        return Err(CodecError::invalid_parameter(
            "k",
            k,
            "subexponential k must be in 0..=32",
        ));
    }
    Ok(())
}

/// Decode one subexponential value from `reader`. `k` is already validated.
#[inline]
pub(crate) fn read_subexp(reader: &mut BitReader<'_>, k: u32, offset: i32) -> Result<i32> {
    // Keeps u + k - 1 <= 31 so the implicit high bit fits.
    let ones = read_unary(reader, 0, MAX_READ_BITS - k)?;

    let magnitude = if ones == 0 {
        reader.read_bits(k)?
    } else {
        let width = ones + k - 1;
        (1u32 << width) | reader.read_bits(width)?
    };
    Ok((magnitude as i32).wrapping_sub(offset))
}

/// Decode a single subexponential value at `cursor`.
///
/// # Example
///
/// ```
/// use cramcodec_core::BitCursor;
/// use cramcodec_int::decode_subexp;
///
/// // k = 2: prefix "10", field "11" -> 4 | 3
/// let data = [0b1011_0000];
/// let (value, _) = decode_subexp(&data, BitCursor::START, 2, 0).unwrap();
/// assert_eq!(value, 7);
/// ```
pub fn decode_subexp(
    data: &[u8],
    cursor: BitCursor,
    k: u32,
    offset: i32,
) -> Result<(i32, BitCursor)> {
    check_k(k)?;
    let mut reader = BitReader::with_cursor(data, cursor);
    let value = read_subexp(&mut reader, k, offset)?;
    Ok((value, reader.cursor()))
}

/// Decode up to `count` subexponential values, stopping early when the input
/// runs out.
pub fn decode_subexp_bulk(
    data: &[u8],
    cursor: BitCursor,
    k: u32,
    offset: i32,
    count: usize,
) -> Result<BulkDecode> {
    check_k(k)?;
    bulk::collect(data, cursor, count, |reader| read_subexp(reader, k, offset))
}

/// Decode subexponential values into `out`, returning how many were written.
pub fn decode_subexp_into(
    data: &[u8],
    cursor: BitCursor,
    k: u32,
    offset: i32,
    out: &mut [i32],
) -> Result<(usize, BitCursor)> {
    check_k(k)?;
    bulk::fill(data, cursor, out, |reader| read_subexp(reader, k, offset))
}
