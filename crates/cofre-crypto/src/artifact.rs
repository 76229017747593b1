//! The persisted record of a single encryption

use crate::{FormatError, Result};

/// Everything needed to reproduce a decryption, minus the password
///
/// One instance per encrypt/decrypt operation; built, serialized (or
/// drained of its plaintext ingredients), and discarded. The derived key
/// itself is never stored here, only the ingredients to re-derive it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CipherArtifact {
    /// Artifact format version
    pub version: u8,
    /// AEAD mode identifier
    pub mode: u8,
    /// KDF identifier
    pub kdf: u8,
    /// Derived-key length in bits
    pub key_bits: u16,
    /// Per-operation KDF salt
    pub salt: Vec<u8>,
    /// Per-operation AEAD nonce
    pub nonce: Vec<u8>,
    /// Associated data, possibly empty
    pub aad: Vec<u8>,
    /// Encrypted payload
    pub ciphertext: Vec<u8>,
    /// AEAD authentication tag
    pub tag: Vec<u8>,
}

impl CipherArtifact {
    /// Assemble an artifact, enforcing the wire-format field limits
    ///
    /// Each variable-length field must fit the width of its length prefix:
    /// salt and aad in 16 bits, nonce and tag in 8 bits, ciphertext in
    /// 32 bits.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        version: u8,
        mode: u8,
        kdf: u8,
        key_bits: u16,
        salt: Vec<u8>,
        nonce: Vec<u8>,
        aad: Vec<u8>,
        ciphertext: Vec<u8>,
        tag: Vec<u8>,
    ) -> Result<Self> {
        let artifact = Self {
            version,
            mode,
            kdf,
            key_bits,
            salt,
            nonce,
            aad,
            ciphertext,
            tag,
        };
        artifact.check_field_limits()?;
        Ok(artifact)
    }

    pub(crate) fn check_field_limits(&self) -> Result<()> {
        check_limit("salt", self.salt.len(), u16::MAX as u64)?;
        check_limit("nonce", self.nonce.len(), u8::MAX as u64)?;
        check_limit("aad", self.aad.len(), u16::MAX as u64)?;
        check_limit("ciphertext", self.ciphertext.len(), u32::MAX as u64)?;
        check_limit("tag", self.tag.len(), u8::MAX as u64)?;
        Ok(())
    }
}

fn check_limit(field: &'static str, len: usize, max: u64) -> Result<()> {
    if len as u64 > max {
        return Err(FormatError::FieldTooLong { field, len, max }.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy;

    fn sample() -> CipherArtifact {
        CipherArtifact::new(
            policy::VERSION,
            policy::MODE_ID_GCM,
            policy::KDF_ID_PBKDF2,
            256,
            vec![1; 16],
            vec![2; 12],
            vec![],
            vec![3; 20],
            vec![4; 16],
        )
        .unwrap()
    }

    #[test]
    fn test_valid_artifact_passes_limits() {
        let a = sample();
        assert_eq!(a.key_bits, 256);
        assert!(a.aad.is_empty());
    }

    #[test]
    fn test_oversized_nonce_rejected() {
        let err = CipherArtifact::new(1, 1, 2, 256, vec![], vec![0; 256], vec![], vec![], vec![])
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_oversized_tag_rejected() {
        let err = CipherArtifact::new(1, 1, 2, 256, vec![], vec![], vec![], vec![], vec![0; 300])
            .unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_oversized_salt_rejected() {
        let err =
            CipherArtifact::new(1, 1, 2, 256, vec![0; 70_000], vec![], vec![], vec![], vec![])
                .unwrap_err();
        assert!(err.is_format());
    }
}
