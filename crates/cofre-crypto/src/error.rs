//! Error types for the cofre-crypto crate

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from key derivation and AEAD operations
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key derivation failed or was given unusable parameters
    #[error("key derivation failed: {0}")]
    Derivation(String),

    /// Cipher setup or the encryption pass itself failed
    #[error("cipher failure: {0}")]
    Cipher(String),

    /// GCM tag mismatch on decrypt
    #[error("wrong password or corrupted data")]
    Authentication,
}

/// Errors from encoding or decoding the binary artifact format
#[derive(Error, Debug)]
pub enum FormatError {
    /// The blob does not start with the expected magic header
    #[error("magic header mismatch")]
    BadMagic,

    /// The blob declares a format version this build does not read
    #[error("unsupported format version: v{0}")]
    UnsupportedVersion(u8),

    /// The blob ended before the named field could be read in full
    #[error("blob truncated while reading {0}")]
    Truncated(&'static str),

    /// A variable-length field does not fit its length prefix
    #[error("{field} is {len} bytes, exceeding the {max}-byte field limit")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: u64,
    },

    /// Base64 input could not be decoded
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Top-level error for the crate
///
/// Keeps the two failure domains distinct so callers can branch on
/// "wrong password" vs "malformed input" without string matching.
#[derive(Error, Debug)]
pub enum Error {
    /// Cryptographic failure
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Artifact format failure
    #[error(transparent)]
    Format(#[from] FormatError),

    /// IO failure from the file-cipher paths
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True when decryption failed due to a wrong password or tampered data
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Crypto(CryptoError::Authentication))
    }

    /// True for any artifact-format failure
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_is_distinguishable() {
        let err = Error::from(CryptoError::Authentication);
        assert!(err.is_authentication());
        assert!(!err.is_format());

        let err = Error::from(CryptoError::Cipher("bad key".into()));
        assert!(!err.is_authentication());
    }

    #[test]
    fn test_unsupported_version_names_the_version() {
        let err = Error::from(FormatError::UnsupportedVersion(7));
        assert!(err.is_format());
        assert!(err.to_string().contains("v7"));
    }
}
