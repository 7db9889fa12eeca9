//! # CramCodec Int
//!
//! Bit-level integer codecs for CRAM core data blocks.
//!
//! Every codec comes in two flavours:
//!
//! - **Single value** (`decode_*`): decodes one value and returns it with the
//!   advanced cursor. The caller is trusted to provide enough input; if it
//!   does not, the read fails with a buffer overrun error.
//! - **Bulk** (`decode_*_bulk`, `decode_*_into`): decodes up to a requested
//!   number of values and stops early, without error, when the input runs
//!   out. The returned cursor points at the first value not decoded.
//!
//! ## Codecs
//!
//! - [`gamma`]: Elias gamma, unary length prefix plus binary field
//! - [`beta`]: fixed-width binary
//! - [`subexp`]: subexponential, unary prefix plus `k`-dependent field
//! - [`huffman`]: canonical Huffman over an integer alphabet
//! - [`direct`]: raw bit-field reads for decoders living elsewhere
//!
//! ## Example
//!
//! ```rust
//! use cramcodec_core::BitCursor;
//! use cramcodec_int::{decode_beta, decode_gamma_bulk};
//!
//! // 1 | 010 | 011, then a 4-bit beta value 0b1001
//! let data = [0b1010_0111, 0b0010_0000];
//! let bulk = decode_gamma_bulk(&data, BitCursor::START, 0, 3).unwrap();
//! assert_eq!(bulk.values, vec![1, 2, 3]);
//!
//! let (value, cursor) = decode_beta(&data, bulk.cursor, 4, 0).unwrap();
//! assert_eq!(value, 0b1001);
//! assert_eq!(cursor.bit_offset(), 11);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod beta;
pub mod bulk;
pub mod direct;
pub mod encoding;
pub mod gamma;
pub mod huffman;
pub mod subexp;
mod unary;

// Re-exports
pub use beta::{decode_beta, decode_beta_bulk, decode_beta_into};
pub use bulk::BulkDecode;
pub use direct::read_bits_direct;
pub use encoding::{IntCodec, IntEncoding};
pub use gamma::{decode_gamma, decode_gamma_bulk, decode_gamma_into};
pub use huffman::HuffmanCodec;
pub use subexp::{decode_subexp, decode_subexp_bulk, decode_subexp_into};
