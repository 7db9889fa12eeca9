//! Unary prefix reading shared by the gamma and subexponential codecs.

use cramcodec_core::bitstream::BitReader;
use cramcodec_core::error::{CodecError, Result};

/// Count the bits read before `terminator` (0 or 1), consuming the terminator.
///
/// A prefix longer than `limit` is [`CodecError::CodeTooLong`] once its
/// terminator is read. If the input ends first, the buffer overrun is
/// returned instead, so padding after the last value reads as a short read.
#[inline]
pub(crate) fn read_unary(
    reader: &mut BitReader<'_>,
    terminator: u32,
    limit: u32,
) -> Result<u32> {
    let mut count = 0u32;
    while reader.read_bit()? != terminator {
        count = count.saturating_add(1);
    }
    if count > limit {
        return Err(CodecError::code_too_long(count, limit));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cramcodec_core::BitCursor;

    #[test]
    fn test_zeros_terminated_by_one() {
        let data = [0b0001_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(read_unary(&mut reader, 1, 31).unwrap(), 3);
        assert_eq!(reader.cursor(), BitCursor::new(0, 3).unwrap());
    }

    #[test]
    fn test_ones_terminated_by_zero() {
        let data = [0b1111_1111, 0b1000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(read_unary(&mut reader, 0, 32).unwrap(), 9);
        assert_eq!(reader.cursor(), BitCursor::new(1, 5).unwrap());
    }

    #[test]
    fn test_immediate_terminator() {
        let data = [0b1000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(read_unary(&mut reader, 1, 31).unwrap(), 0);
        assert_eq!(reader.cursor().bit_offset(), 1);
    }

    #[test]
    fn test_limit() {
        // 32 zeros, then the terminator.
        let data = [0, 0, 0, 0, 0b1000_0000];
        let mut reader = BitReader::new(&data);
        assert_eq!(
            read_unary(&mut reader, 1, 31).unwrap_err(),
            CodecError::code_too_long(32, 31)
        );
    }

    #[test]
    fn test_runs_off_the_end() {
        let data = [0u8];
        let mut reader = BitReader::new(&data);
        assert!(read_unary(&mut reader, 1, 31).unwrap_err().is_overrun());
    }

    #[test]
    fn test_unterminated_past_limit_is_overrun() {
        let data = [0xFFu8; 6];
        let mut reader = BitReader::new(&data);
        assert!(read_unary(&mut reader, 0, 2).unwrap_err().is_overrun());
    }
}
