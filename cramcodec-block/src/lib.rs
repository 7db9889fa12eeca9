//! # CramCodec Block
//!
//! Decompression of CRAM block payloads before their bits reach the integer
//! codecs in `cramcodec-int`.
//!
//! | Method | Id | Backend |
//! |--------|----|---------|
//! | raw    | 0  | copied as-is |
//! | gzip   | 1  | `oxiarc-archive` (gzip), `oxiarc-deflate` (zlib, raw deflate) |
//! | bzip2  | 2  | `oxiarc-bzip2` |
//!
//! ## Example
//!
//! ```rust
//! use cramcodec_block::{CompressionMethod, decompress};
//!
//! let packed = oxiarc_deflate::deflate(b"read_names", 6).unwrap();
//! let block = decompress(CompressionMethod::Gzip, &packed, Some(10)).unwrap();
//! assert_eq!(block, b"read_names");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod decompress;
pub mod method;

pub use decompress::{bunzip2, decompress, decompress_by_id, inflate};
pub use method::CompressionMethod;
