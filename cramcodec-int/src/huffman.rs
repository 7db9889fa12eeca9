//! Canonical Huffman codec for integer data series.
//!
//! CRAM describes a Huffman code by its alphabet and the code length of each
//! symbol. Codes are canonical: symbols are ordered by `(length, symbol)` and
//! given consecutive code values, shifting left whenever the length grows.
//! Codes are read MSB-first with the same cursor as the other codecs.
//!
//! A table whose shortest code has length zero is degenerate: it always
//! yields that symbol and consumes no bits.

use crate::bulk::{self, BulkDecode};
use cramcodec_core::bitstream::{BitCursor, BitReader};
use cramcodec_core::error::{CodecError, Result};

/// Maximum supported code length.
pub const MAX_HUFFMAN_CODE_LENGTH: u32 = 31;

/// All codes of one length. Their values are consecutive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LengthClass {
    /// Code length in bits.
    bit_length: u32,
    /// Code value of the first symbol of this length.
    first_code: u32,
    /// Index of that symbol in `HuffmanCodec::symbols`.
    first_index: usize,
    /// Number of codes of this length.
    count: usize,
}

/// A canonical Huffman decoder for 32-bit integer symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanCodec {
    /// Symbols in canonical code order.
    symbols: Vec<i32>,
    /// Length classes, shortest first. Empty for a degenerate table.
    classes: Vec<LengthClass>,
}

impl HuffmanCodec {
    /// Build a codec from parallel symbol and code-length arrays.
    ///
    /// # Errors
    ///
    /// Fails when the arrays are empty or differ in length, when a symbol
    /// repeats, when a length exceeds [`MAX_HUFFMAN_CODE_LENGTH`], or when the
    /// lengths over-subscribe the code space.
    pub fn new(symbols: &[i32], bit_lengths: &[u32]) -> Result<Self> {
        if symbols.len() != bit_lengths.len() {
            return Err(CodecError::invalid_huffman_table(format!(
                "{} symbols but {} code lengths",
                symbols.len(),
                bit_lengths.len()
            )));
        }
        if symbols.is_empty() {
            return Err(CodecError::invalid_huffman_table("empty alphabet"));
        }
        if let Some(&len) = bit_lengths.iter().find(|&&len| len > MAX_HUFFMAN_CODE_LENGTH) {
            return Err(CodecError::invalid_huffman_table(format!(
                "code length {} exceeds maximum {}",
                len, MAX_HUFFMAN_CODE_LENGTH
            )));
        }

        let mut codes: Vec<(u32, i32)> = bit_lengths
            .iter()
            .copied()
            .zip(symbols.iter().copied())
            .collect();
        codes.sort_unstable();

        let mut seen = symbols.to_vec();
        seen.sort_unstable();
        if let Some(pair) = seen.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(CodecError::invalid_huffman_table(format!(
                "symbol {} appears more than once",
                pair[0]
            )));
        }

        let ordered: Vec<i32> = codes.iter().map(|&(_, symbol)| symbol).collect();

        if codes[0].0 == 0 {
            log::debug!("Huffman table is degenerate: constant symbol {}", ordered[0]);
            return Ok(Self {
                symbols: ordered,
                classes: Vec::new(),
            });
        }

        let mut classes: Vec<LengthClass> = Vec::new();
        let mut code = 0u64;
        let mut prev_len = 0u32;
        for (index, &(len, symbol)) in codes.iter().enumerate() {
            if index > 0 {
                code += 1;
            }
            code <<= len - prev_len;
            if code >> len != 0 {
                return Err(CodecError::invalid_huffman_table(format!(
                    "over-subscribed at symbol {} (length {})",
                    symbol, len
                )));
            }

            match classes.last_mut() {
                Some(class) if class.bit_length == len => class.count += 1,
                _ => classes.push(LengthClass {
                    bit_length: len,
                    first_code: code as u32,
                    first_index: index,
                    count: 1,
                }),
            }
            prev_len = len;
        }

        log::debug!(
            "Built Huffman table: {} codes in {} length classes, max length {}",
            ordered.len(),
            classes.len(),
            prev_len
        );

        Ok(Self {
            symbols: ordered,
            classes,
        })
    }

    /// Number of symbols in the alphabet.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Longest code length, 0 for a degenerate table.
    pub fn max_code_length(&self) -> u32 {
        self.classes.last().map_or(0, |class| class.bit_length)
    }

    /// Whether every decode yields the same symbol without reading bits.
    pub fn is_degenerate(&self) -> bool {
        self.classes.is_empty()
    }

    /// Decode one symbol from `reader`.
    pub(crate) fn read_symbol(&self, reader: &mut BitReader<'_>) -> Result<i32> {
        let start = reader.cursor();
        if self.classes.is_empty() {
            return self
                .constant_symbol()
                .ok_or_else(|| CodecError::invalid_huffman(start.bit_offset()));
        }

        let mut code = 0u32;
        let mut len = 0u32;
        for class in &self.classes {
            let extra = class.bit_length - len;
            code = (code << extra) | reader.read_bits(extra)?;
            len = class.bit_length;

            if let Some(rank) = code.checked_sub(class.first_code) {
                let rank = rank as usize;
                if rank < class.count {
                    return Ok(self.symbols[class.first_index + rank]);
                }
            }
        }

        Err(CodecError::invalid_huffman(start.bit_offset()))
    }

    /// Decode a single symbol at `cursor`.
    pub fn decode(&self, data: &[u8], cursor: BitCursor) -> Result<(i32, BitCursor)> {
        let mut reader = BitReader::with_cursor(data, cursor);
        let value = self.read_symbol(&mut reader)?;
        Ok((value, reader.cursor()))
    }

    /// Decode up to `count` symbols, stopping early when the input runs out.
    ///
    /// A degenerate table reads no input, so it always yields `count` values,
    /// even from an empty buffer.
    pub fn decode_bulk(
        &self,
        data: &[u8],
        cursor: BitCursor,
        count: usize,
    ) -> Result<BulkDecode> {
        if let Some(symbol) = self.constant_symbol() {
            return Ok(BulkDecode {
                values: vec![symbol; count],
                cursor,
            });
        }
        bulk::collect(data, cursor, count, |reader| self.read_symbol(reader))
    }

    /// Decode symbols into `out`, returning how many were written.
    pub fn decode_into(
        &self,
        data: &[u8],
        cursor: BitCursor,
        out: &mut [i32],
    ) -> Result<(usize, BitCursor)> {
        if let Some(symbol) = self.constant_symbol() {
            out.fill(symbol);
            return Ok((out.len(), cursor));
        }
        bulk::fill(data, cursor, out, |reader| self.read_symbol(reader))
    }

    fn constant_symbol(&self) -> Option<i32> {
        if self.classes.is_empty() {
            self.symbols.first().copied()
        } else {
            None
        }
    }
}
