//! Password-based key derivation
//!
//! PBKDF2-HMAC-SHA-256 stretches a password and salt into AES key material.
//! The derived bytes live inside [`KeyMaterial`], which wipes its buffer on
//! drop, so the raw key never outlives the encrypt/decrypt call that needed
//! it.

use crate::{CryptoError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A derived symmetric key, zeroized on drop
///
/// Never serialized; only the ingredients to re-derive it (salt, key size,
/// iteration count) appear in the artifact.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyMaterial {
    bytes: Vec<u8>,
}

impl KeyMaterial {
    /// Get the raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Key length in bits
    pub fn key_bits(&self) -> u16 {
        (self.bytes.len() * 8) as u16
    }
}

impl std::fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyMaterial({} bits)", self.key_bits())
    }
}

/// Derive a symmetric key from a password and salt
///
/// `key_bits` must be 128 or 256. `iterations` must be positive. Error
/// messages never echo the password or derived bytes.
pub fn derive_from_password(
    password: &[u8],
    salt: &[u8],
    key_bits: u16,
    iterations: u32,
) -> Result<KeyMaterial> {
    if key_bits != 128 && key_bits != 256 {
        return Err(CryptoError::Derivation(format!(
            "unsupported key size: {} bits (expected 128 or 256)",
            key_bits
        ))
        .into());
    }
    if iterations == 0 {
        return Err(CryptoError::Derivation("iteration count must be positive".to_string()).into());
    }

    // The output buffer is moved into KeyMaterial, whose ZeroizeOnDrop impl
    // wipes it on every exit path.
    let mut bytes = vec![0u8; key_bits as usize / 8];
    pbkdf2_hmac::<Sha256>(password, salt, iterations, &mut bytes);
    Ok(KeyMaterial { bytes })
}
