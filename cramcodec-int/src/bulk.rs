//! Bulk decoding driver shared by every codec.
//!
//! Bulk decodes are bounds-checked: running out of input is a short read,
//! not an error. The driver stops before a value when the cursor has passed
//! the last byte, and abandons a value whose bits run past the end of the
//! buffer, rewinding to where that value started. No partial value is ever
//! emitted.

use cramcodec_core::bitstream::{BitCursor, BitReader};
use cramcodec_core::error::Result;

/// Values produced by a bulk decode, with the cursor where decoding stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDecode {
    /// Decoded values, in stream order.
    pub values: Vec<i32>,
    /// Cursor after the last decoded value.
    pub cursor: BitCursor,
}

impl BulkDecode {
    /// Number of values decoded.
    pub fn n_decoded(&self) -> usize {
        self.values.len()
    }

    /// Whether all `requested` values were decoded.
    pub fn is_complete(&self, requested: usize) -> bool {
        self.values.len() == requested
    }
}

/// Decode up to `count` values, handing each to `emit` with its index.
///
/// Returns how many values were decoded. On a short read the reader is left
/// at the start of the first value that could not be decoded.
pub(crate) fn run<'a, D, E>(
    reader: &mut BitReader<'a>,
    count: usize,
    mut decode_one: D,
    mut emit: E,
) -> Result<usize>
where
    D: FnMut(&mut BitReader<'a>) -> Result<i32>,
    E: FnMut(usize, i32),
{
    for n in 0..count {
        if reader.is_exhausted() {
            return Ok(n);
        }

        let start = reader.cursor();
        match decode_one(reader) {
            Ok(value) => emit(n, value),
            Err(err) if err.is_overrun() => {
                reader.set_cursor(start);
                return Ok(n);
            }
            Err(err) => return Err(err),
        }
    }
    Ok(count)
}

/// Decode up to `count` values into a new vector.
pub(crate) fn collect<'a, D>(
    data: &'a [u8],
    cursor: BitCursor,
    count: usize,
    decode_one: D,
) -> Result<BulkDecode>
where
    D: FnMut(&mut BitReader<'a>) -> Result<i32>,
{
    let mut reader = BitReader::with_cursor(data, cursor);
    let hint = usize::try_from(reader.remaining_bits()).unwrap_or(usize::MAX);
    let mut values = Vec::with_capacity(count.min(hint));

    run(&mut reader, count, decode_one, |_, value| values.push(value))?;

    Ok(BulkDecode {
        values,
        cursor: reader.cursor(),
    })
}

/// Decode up to `out.len()` values into `out`.
///
/// Slots past the returned count are left untouched.
pub(crate) fn fill<'a, D>(
    data: &'a [u8],
    cursor: BitCursor,
    out: &mut [i32],
    decode_one: D,
) -> Result<(usize, BitCursor)>
where
    D: FnMut(&mut BitReader<'a>) -> Result<i32>,
{
    let mut reader = BitReader::with_cursor(data, cursor);
    let count = out.len();
    let decoded = run(&mut reader, count, decode_one, |n, value| out[n] = value)?;
    Ok((decoded, reader.cursor()))
}
