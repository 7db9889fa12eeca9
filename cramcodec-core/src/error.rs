//! Error types for CramCodec operations.
//!
//! A single error enum covers every failure the codecs can report: storage
//! overruns, malformed codes, invalid caller parameters, and failures of the
//! block decompression collaborators.
//!
//! Running out of input during a bulk decode is *not* an error. Bulk
//! operations return the values decoded so far and let the caller decide.

use thiserror::Error;

/// The main error type for CramCodec operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A read was attempted past the end of the supplied buffer.
    #[error(
        "Buffer overrun at byte {byte_position}, bit {bit_position}: buffer holds {len} bytes"
    )]
    BufferOverrun {
        /// Byte position of the cursor when the read was attempted.
        byte_position: usize,
        /// Bit position of the cursor when the read was attempted.
        bit_position: u8,
        /// Length of the buffer in bytes.
        len: usize,
    },

    /// A cursor was built with a bit position outside 0..=7.
    #[error("Invalid bit position {bit_position}: must be in 0..=7")]
    InvalidBitPosition {
        /// The rejected bit position.
        bit_position: u8,
    },

    /// A raw bit read asked for more bits than fit in the result.
    #[error("Invalid bit width {bits}: at most {max} bits can be read at once")]
    InvalidBitWidth {
        /// Requested number of bits.
        bits: u32,
        /// Largest supported width.
        max: u32,
    },

    /// A codec parameter is outside its supported range.
    #[error("Invalid parameter {name} = {value}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: i64,
        /// Description of the supported range.
        message: String,
    },

    /// A unary prefix describes a value wider than 32 bits.
    #[error("Code too long: unary prefix of {prefix} bits exceeds maximum {max}")]
    CodeTooLong {
        /// Length of the unary prefix read so far.
        prefix: u32,
        /// Largest prefix that still fits a 32-bit value.
        max: u32,
    },

    /// No Huffman code matched the bits in the stream.
    #[error("Invalid Huffman code at bit offset {bit_offset}")]
    InvalidHuffmanCode {
        /// Absolute bit offset where decoding started.
        bit_offset: u64,
    },

    /// A Huffman table could not be built from its parameters.
    #[error("Invalid Huffman table: {message}")]
    InvalidHuffmanTable {
        /// Description of the table error.
        message: String,
    },

    /// Block compression method that has no decompressor here.
    #[error("Unsupported compression method: {method}")]
    UnsupportedMethod {
        /// The method identifier.
        method: String,
    },

    /// A decompression collaborator rejected its input.
    #[error("{method} decompression failed: {message}")]
    Decompression {
        /// Name of the decompressor.
        method: &'static str,
        /// Message reported by the decompressor.
        message: String,
    },

    /// Decompressed block size differs from the size the caller expected.
    #[error("Decompressed size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Size announced by the caller.
        expected: usize,
        /// Size actually produced.
        actual: usize,
    },
}

/// Result type alias for CramCodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;

impl CodecError {
    /// Create a buffer overrun error.
    pub fn buffer_overrun(byte_position: usize, bit_position: u8, len: usize) -> Self {
        Self::BufferOverrun {
            byte_position,
            bit_position,
            len,
        }
    }

    /// Create an invalid bit position error.
    pub fn invalid_bit_position(bit_position: u8) -> Self {
        Self::InvalidBitPosition { bit_position }
    }

    /// Create an invalid bit width error.
    pub fn invalid_bit_width(bits: u32, max: u32) -> Self {
        Self::InvalidBitWidth { bits, max }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(
        name: &'static str,
        value: impl Into<i64>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a code too long error.
    pub fn code_too_long(prefix: u32, max: u32) -> Self {
        Self::CodeTooLong { prefix, max }
    }

    /// Create an invalid Huffman code error.
    pub fn invalid_huffman(bit_offset: u64) -> Self {
        Self::InvalidHuffmanCode { bit_offset }
    }

    /// Create an invalid Huffman table error.
    pub fn invalid_huffman_table(message: impl Into<String>) -> Self {
        Self::InvalidHuffmanTable {
            message: message.into(),
        }
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(method: impl Into<String>) -> Self {
        Self::UnsupportedMethod {
            method: method.into(),
        }
    }

    /// Create a decompression error.
    pub fn decompression(method: &'static str, message: impl Into<String>) -> Self {
        Self::Decompression {
            method,
            message: message.into(),
        }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }

    /// Whether this error means the input ended before a value was complete.
    pub fn is_overrun(&self) -> bool {
        matches!(self, Self::BufferOverrun { .. })
    }
}
