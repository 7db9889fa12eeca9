//! # CramCodec Core
//!
//! Core components for the CramCodec integer decoders.
//!
//! This crate provides the building blocks shared by every codec:
//!
//! - [`bitstream`]: the [`BitCursor`] position type and MSB-first bit reads
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! CramCodec is split the way a CRAM reader consumes a slice. Block payloads
//! are decompressed first; the integer codecs then read bits out of the
//! resulting buffer through this crate:
//!
//! ```text
//!  compressed block
//!         │
//!         ▼
//! ┌──────────────────┐   buffer   ┌──────────────────────────────┐
//! │ cramcodec-block  │ ─────────► │ cramcodec-int                │
//! │ gzip/zlib/deflate│            │ Gamma, Beta, Subexp, Huffman │
//! │ bzip2            │            │ direct bit reads             │
//! └────────┬─────────┘            └──────────────┬───────────────┘
//!          │                                     │
//!          └──────────────┬──────────────────────┘
//!                         ▼
//!        ┌─────────────────────────────────────┐
//!        │ cramcodec-core (this crate)         │
//!        │ BitCursor, bit primitives, errors   │
//!        └─────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use cramcodec_core::bitstream::{BitCursor, read_bit, read_bits};
//!
//! let data = [0xAB, 0xCD];
//! let (bit, cursor) = read_bit(&data, BitCursor::START).unwrap();
//! assert_eq!(bit, 1);
//!
//! let (bits, cursor) = read_bits(&data, cursor, 11).unwrap();
//! assert_eq!(bits, 0b010_1011_1100);
//! assert_eq!(cursor.bit_offset(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;

// Re-exports for convenience
pub use bitstream::{BitCursor, BitReader, MAX_READ_BITS, read_bit, read_bits};
pub use error::{CodecError, Result};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{BitCursor, BitReader};
    pub use crate::error::{CodecError, Result};
}
