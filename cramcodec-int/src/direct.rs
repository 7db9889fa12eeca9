//! Raw bit-field reads for Huffman decoders outside this crate.

use cramcodec_core::bitstream::{self, BitCursor};
use cramcodec_core::error::Result;

/// Read `num_bits` (0..=32) raw bits at `cursor`, MSB-first.
///
/// No offset is applied and no short-read handling is done: running past the
/// end of `data` is a buffer overrun error.
#[inline]
pub fn read_bits_direct(
    data: &[u8],
    cursor: BitCursor,
    num_bits: u32,
) -> Result<(u32, BitCursor)> {
    bitstream::read_bits(data, cursor, num_bits)
}
