//! Bit-level reading over in-memory CRAM block buffers.
//!
//! This module provides [`BitCursor`], the position of the next unread bit in
//! a byte buffer, and the primitives that consume bits at a cursor.
//!
//! # Bit Ordering
//!
//! CRAM core data blocks are MSB-first: the first bit of a byte is its most
//! significant bit. A cursor's `bit_position` therefore counts *down* from 7
//! to 0 inside each byte, and rolls over to bit 7 of the next byte.
//!
//! # Value Semantics
//!
//! The free functions [`read_bit`] and [`read_bits`] take a cursor by value and
//! return the advanced cursor alongside the result. [`BitReader`] wraps a
//! buffer and a cursor for code that reads many fields in a row.
//!
//! Every byte access is a checked slice lookup. Reading past the end of the
//! buffer yields [`CodecError::BufferOverrun`](crate::error::CodecError).
//!
//! # Example
//!
//! ```
//! use cramcodec_core::bitstream::{BitCursor, read_bits};
//!
//! let data = [0b1011_0000];
//! let (value, cursor) = read_bits(&data, BitCursor::START, 4).unwrap();
//! assert_eq!(value, 0b1011);
//! assert_eq!(cursor.bit_position(), 3);
//! ```

use crate::error::{CodecError, Result};
use std::cmp::Ordering;

/// Largest number of bits a single [`read_bits`] call can return.
pub const MAX_READ_BITS: u32 = 32;

/// Position of the next unread bit in a byte buffer.
///
/// `bit_position` is always in `0..=7`, with 7 naming the most significant
/// unread bit of the byte at `byte_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitCursor {
    byte_position: usize,
    bit_position: u8,
}

impl BitCursor {
    /// Cursor at the first bit of a buffer.
    pub const START: Self = Self {
        byte_position: 0,
        bit_position: 7,
    };

    /// Create a cursor, rejecting bit positions above 7.
    pub fn new(byte_position: usize, bit_position: u8) -> Result<Self> {
        if bit_position > 7 {
            return Err(CodecError::invalid_bit_position(bit_position));
        }
        Ok(Self {
            byte_position,
            bit_position,
        })
    }

    /// Cursor at the most significant bit of `byte_position`.
    pub const fn at_byte(byte_position: usize) -> Self {
        Self {
            byte_position,
            bit_position: 7,
        }
    }

    /// Byte offset of the next unread bit.
    #[inline]
    pub const fn byte_position(&self) -> usize {
        self.byte_position
    }

    /// Bit index of the next unread bit within its byte (7 = MSB).
    #[inline]
    pub const fn bit_position(&self) -> u8 {
        self.bit_position
    }

    /// Absolute offset of the next unread bit, counted from the buffer start.
    #[inline]
    pub const fn bit_offset(&self) -> u64 {
        self.byte_position as u64 * 8 + (7 - self.bit_position) as u64
    }

    /// Whether no bits of the current byte have been consumed.
    #[inline]
    pub const fn is_byte_aligned(&self) -> bool {
        self.bit_position == 7
    }

    /// Number of unread bits left in a buffer of `len` bytes.
    #[inline]
    pub const fn remaining_bits(&self, len: usize) -> u64 {
        if self.byte_position >= len {
            0
        } else {
            (len - self.byte_position - 1) as u64 * 8 + self.bit_position as u64 + 1
        }
    }

    /// Whether the cursor sits exactly at the end of a buffer of `len` bytes.
    #[inline]
    pub const fn is_at_end(&self, len: usize) -> bool {
        self.byte_position == len && self.bit_position == 7
    }

    /// Step past one bit, rolling over to the next byte after bit 0.
    #[inline]
    fn advance(&mut self) {
        if self.bit_position == 0 {
            self.byte_position += 1;
            self.bit_position = 7;
        } else {
            self.bit_position -= 1;
        }
    }

    /// Step past a whole byte. Only meaningful on an aligned cursor.
    #[inline]
    fn advance_byte(&mut self) {
        self.byte_position += 1;
    }
}

impl Default for BitCursor {
    fn default() -> Self {
        Self::START
    }
}

impl PartialOrd for BitCursor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BitCursor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bit_offset().cmp(&other.bit_offset())
    }
}

/// A bit reader over a borrowed byte buffer.
///
/// `BitReader` owns nothing but a cursor. Codecs use it to read a sequence of
/// fields and hand the final cursor back to their caller.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    /// Buffer being read.
    data: &'a [u8],
    /// Next unread bit.
    cursor: BitCursor,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_cursor(data, BitCursor::START)
    }

    /// Create a reader positioned at `cursor`.
    pub fn with_cursor(data: &'a [u8], cursor: BitCursor) -> Self {
        Self { data, cursor }
    }

    /// Get the current cursor.
    #[inline]
    pub fn cursor(&self) -> BitCursor {
        self.cursor
    }

    /// Move the reader to `cursor`.
    #[inline]
    pub fn set_cursor(&mut self, cursor: BitCursor) {
        self.cursor = cursor;
    }

    /// Number of unread bits.
    #[inline]
    pub fn remaining_bits(&self) -> u64 {
        self.cursor.remaining_bits(self.data.len())
    }

    /// Whether the cursor has reached (or passed) the last byte.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cursor.byte_position >= self.data.len()
    }

    #[inline]
    fn overrun(&self) -> CodecError {
        CodecError::buffer_overrun(
            self.cursor.byte_position,
            self.cursor.bit_position,
            self.data.len(),
        )
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<u32> {
        let byte = *self
            .data
            .get(self.cursor.byte_position)
            .ok_or_else(|| self.overrun())?;
        let bit = (byte >> self.cursor.bit_position) & 1;
        self.cursor.advance();
        Ok(bit as u32)
    }

    /// Read up to 32 bits, first bit read in the most significant position.
    ///
    /// Fails without consuming anything when fewer than `count` bits remain.
    #[inline]
    pub fn read_bits(&mut self, count: u32) -> Result<u32> {
        if count > MAX_READ_BITS {
            return Err(CodecError::invalid_bit_width(count, MAX_READ_BITS));
        }
        if count == 0 {
            return Ok(0);
        }
        if self.remaining_bits() < count as u64 {
            return Err(self.overrun());
        }

        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | self.read_bit()?;
        }
        Ok(value)
    }

    /// Read 8 bits, taking the whole byte at once when the cursor is aligned.
    #[inline]
    pub fn read_aligned_byte(&mut self) -> Result<u8> {
        if !self.cursor.is_byte_aligned() {
            return self.read_bits(8).map(|v| v as u8);
        }
        let byte = *self
            .data
            .get(self.cursor.byte_position)
            .ok_or_else(|| self.overrun())?;
        self.cursor.advance_byte();
        Ok(byte)
    }
}

/// Read one bit at `cursor`, returning it with the advanced cursor.
#[inline]
pub fn read_bit(data: &[u8], cursor: BitCursor) -> Result<(u32, BitCursor)> {
    let mut reader = BitReader::with_cursor(data, cursor);
    let bit = reader.read_bit()?;
    Ok((bit, reader.cursor()))
}

/// Read `count` bits (0..=32) MSB-first at `cursor`.
///
/// `count == 0` returns 0 and the cursor unchanged.
#[inline]
pub fn read_bits(data: &[u8], cursor: BitCursor, count: u32) -> Result<(u32, BitCursor)> {
    let mut reader = BitReader::with_cursor(data, cursor);
    let value = reader.read_bits(count)?;
    Ok((value, reader.cursor()))
}
