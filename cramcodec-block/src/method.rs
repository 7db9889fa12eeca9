//! Block compression methods.

use cramcodec_core::error::{CodecError, Result};
use std::fmt;

/// Compression method recorded in a CRAM block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CompressionMethod {
    /// Stored without compression.
    Raw = 0,
    /// Gzip, zlib or raw deflate.
    Gzip = 1,
    /// Bzip2.
    Bzip2 = 2,
}

impl CompressionMethod {
    /// Look up a method by its CRAM block id.
    ///
    /// Ids of methods this crate does not decode (lzma, rANS, ...) are
    /// reported as [`CodecError::UnsupportedMethod`].
    pub fn from_id(id: u8) -> Result<Self> {
        match id {
            0 => Ok(Self::Raw),
            1 => Ok(Self::Gzip),
            2 => Ok(Self::Bzip2),
            3 => Err(CodecError::unsupported_method("lzma (id 3)")),
            4 => Err(CodecError::unsupported_method("rANS (id 4)")),
            other => Err(CodecError::unsupported_method(format!("id {}", other))),
        }
    }

    /// CRAM block id of this method.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Short name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }
}

impl TryFrom<u8> for CompressionMethod {
    type Error = CodecError;

    fn try_from(id: u8) -> Result<Self> {
        Self::from_id(id)
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids() {
        for method in [
            CompressionMethod::Raw,
            CompressionMethod::Gzip,
            CompressionMethod::Bzip2,
        ] {
            assert_eq!(CompressionMethod::from_id(method.id()).unwrap(), method);
        }
        assert_eq!(CompressionMethod::Bzip2.to_string(), "bzip2");
    }

    #[test]
    fn test_unsupported() {
        let err = CompressionMethod::try_from(4).unwrap_err();
        assert_eq!(err, CodecError::unsupported_method("rANS (id 4)"));
        assert!(matches!(
            CompressionMethod::from_id(200),
            Err(CodecError::UnsupportedMethod { .. })
        ));
    }
}
