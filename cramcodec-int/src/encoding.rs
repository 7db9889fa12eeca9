//! Encoding descriptors and codec dispatch.
//!
//! [`IntEncoding`] carries the parameters a CRAM compression header attaches
//! to an integer data series. [`IntEncoding::build`] validates them and
//! returns an [`IntCodec`] that decodes with the right algorithm.
//!
//! With the `serde` feature, descriptors can be read from configuration:
//!
//! ```text
//! { "codec": "subexp", "offset": 0, "k": 2 }
//! ```

use crate::beta::{check_num_bits, read_beta};
use crate::bulk::{self, BulkDecode};
use crate::gamma::read_gamma;
use crate::huffman::HuffmanCodec;
use crate::subexp::{check_k, read_subexp};
use cramcodec_core::bitstream::{BitCursor, BitReader};
use cramcodec_core::error::Result;

/// Parameters of an integer encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "codec", rename_all = "lowercase"))]
pub enum IntEncoding {
    /// Canonical Huffman code.
    Huffman {
        /// Alphabet.
        symbols: Vec<i32>,
        /// Code length of each symbol.
        bit_lengths: Vec<u32>,
    },
    /// Fixed-width binary.
    Beta {
        /// Subtracted from every value.
        offset: i32,
        /// Width in bits.
        length: u32,
    },
    /// Subexponential code.
    Subexp {
        /// Subtracted from every value.
        offset: i32,
        /// Width of the field when there are no leading ones.
        k: u32,
    },
    /// Elias gamma code.
    Gamma {
        /// Subtracted from every value.
        offset: i32,
    },
}

impl IntEncoding {
    /// CRAM codec id of this encoding.
    pub const fn codec_id(&self) -> u8 {
        match self {
            Self::Huffman { .. } => 3,
            Self::Beta { .. } => 6,
            Self::Subexp { .. } => 7,
            Self::Gamma { .. } => 9,
        }
    }

    /// Short name of this encoding.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Huffman { .. } => "huffman",
            Self::Beta { .. } => "beta",
            Self::Subexp { .. } => "subexp",
            Self::Gamma { .. } => "gamma",
        }
    }

    /// Check that the parameters are in range.
    pub fn validate(&self) -> Result<()> {
        self.build().map(|_| ())
    }

    /// Validate the parameters and build a decoder.
    pub fn build(&self) -> Result<IntCodec> {
        match self {
            Self::Huffman {
                symbols,
                bit_lengths,
            } => HuffmanCodec::new(symbols, bit_lengths).map(IntCodec::Huffman),
            &Self::Beta { offset, length } => {
                check_num_bits(length)?;
                Ok(IntCodec::Beta {
                    offset,
                    num_bits: length,
                })
            }
            &Self::Subexp { offset, k } => {
                check_k(k)?;
                Ok(IntCodec::Subexp { offset, k })
            }
            &Self::Gamma { offset } => Ok(IntCodec::Gamma { offset }),
        }
    }
}

/// A validated integer decoder.
///
/// Decoding never mutates the codec, so one instance can serve any number
/// of cursors and threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntCodec {
    /// Canonical Huffman.
    Huffman(HuffmanCodec),
    /// Fixed-width binary.
    Beta {
        /// Subtracted from every value.
        offset: i32,
        /// Width in bits, 1..=32.
        num_bits: u32,
    },
    /// Subexponential.
    Subexp {
        /// Subtracted from every value.
        offset: i32,
        /// Subexponential parameter, 0..=32.
        k: u32,
    },
    /// Elias gamma.
    Gamma {
        /// Subtracted from every value.
        offset: i32,
    },
}

impl IntCodec {
    #[inline]
    fn read_one(&self, reader: &mut BitReader<'_>) -> Result<i32> {
        match *self {
            Self::Huffman(ref codec) => codec.read_symbol(reader),
            Self::Beta { offset, num_bits } => read_beta(reader, num_bits, offset),
            Self::Subexp { offset, k } => read_subexp(reader, k, offset),
            Self::Gamma { offset } => read_gamma(reader, offset),
        }
    }

    /// Decode a single value at `cursor`.
    pub fn decode(&self, data: &[u8], cursor: BitCursor) -> Result<(i32, BitCursor)> {
        let mut reader = BitReader::with_cursor(data, cursor);
        let value = self.read_one(&mut reader)?;
        Ok((value, reader.cursor()))
    }

    /// Decode up to `count` values, stopping early when the input runs out.
    pub fn decode_bulk(
        &self,
        data: &[u8],
        cursor: BitCursor,
        count: usize,
    ) -> Result<BulkDecode> {
        match self {
            Self::Huffman(codec) => codec.decode_bulk(data, cursor, count),
            _ => bulk::collect(data, cursor, count, |reader| self.read_one(reader)),
        }
    }

    /// Decode values into `out`, returning how many were written.
    pub fn decode_into(
        &self,
        data: &[u8],
        cursor: BitCursor,
        out: &mut [i32],
    ) -> Result<(usize, BitCursor)> {
        match self {
            Self::Huffman(codec) => codec.decode_into(data, cursor, out),
            _ => bulk::fill(data, cursor, out, |reader| self.read_one(reader)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cramcodec_core::CodecError;

    #[test]
    fn test_codec_ids() {
        assert_eq!(IntEncoding::Gamma { offset: 0 }.codec_id(), 9);
        assert_eq!(IntEncoding::Beta { offset: 0, length: 8 }.codec_id(), 6);
        assert_eq!(IntEncoding::Subexp { offset: 0, k: 1 }.codec_id(), 7);
        let huffman = IntEncoding::Huffman {
            symbols: vec![0],
            bit_lengths: vec![0],
        };
        assert_eq!(huffman.codec_id(), 3);
        assert_eq!(huffman.name(), "huffman");
    }

    #[test]
    fn test_validate() {
        assert!(IntEncoding::Beta { offset: 0, length: 0 }.validate().is_err());
        assert!(IntEncoding::Beta { offset: 0, length: 32 }.validate().is_ok());
        assert!(matches!(
            IntEncoding::Subexp { offset: 0, k: 33 }.validate().unwrap_err(),
            CodecError::InvalidParameter { name: "k", .. }
        ));
        assert!(
            IntEncoding::Huffman {
                symbols: vec![1, 2],
                bit_lengths: vec![1],
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_dispatch_matches_free_functions() {
        let data = [0b0010_1101, 0b1001_0110, 0b1100_0011];
        let cases = [
            IntEncoding::Gamma { offset: 1 },
            IntEncoding::Beta { offset: 0, length: 5 },
            IntEncoding::Subexp { offset: -2, k: 1 },
        ];
        for encoding in cases {
            let codec = encoding.build().unwrap();
            let (value, cursor) = codec.decode(&data, BitCursor::START).unwrap();
            let expected = match encoding {
                IntEncoding::Gamma { offset } => {
                    crate::decode_gamma(&data, BitCursor::START, offset)
                }
                IntEncoding::Beta { offset, length } => {
                    crate::decode_beta(&data, BitCursor::START, length, offset)
                }
                IntEncoding::Subexp { offset, k } => {
                    crate::decode_subexp(&data, BitCursor::START, k, offset)
                }
                IntEncoding::Huffman { .. } => unreachable!(),
            }
            .unwrap();
            assert_eq!((value, cursor), expected);
        }
    }

    #[test]
    fn test_bulk_dispatch() {
        let codec = IntEncoding::Beta { offset: 0, length: 4 }.build().unwrap();
        let data = [0x12, 0x34];
        let result = codec.decode_bulk(&data, BitCursor::START, 8).unwrap();
        assert_eq!(result.values, vec![1, 2, 3, 4]);

        let mut out = [0; 2];
        let (n, cursor) = codec.decode_into(&data, BitCursor::START, &mut out).unwrap();
        assert_eq!((n, out), (2, [1, 2]));
        assert_eq!(cursor, BitCursor::at_byte(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_descriptor() {
        let encoding: IntEncoding =
            serde_json::from_str(r#"{ "codec": "subexp", "offset": 0, "k": 2 }"#).unwrap();
        assert_eq!(encoding, IntEncoding::Subexp { offset: 0, k: 2 });

        let json = serde_json::to_string(&IntEncoding::Gamma { offset: -1 }).unwrap();
        assert_eq!(json, r#"{"codec":"gamma","offset":-1}"#);
    }
}
