//! AES-GCM encryption and decryption with a detached tag
//!
//! Stateless: every call receives the key, nonce, and optional associated
//! data it needs. The AEAD backend appends the authentication tag to the
//! ciphertext; this module splits the two apart on encrypt and joins them
//! back together on decrypt, so the artifact can store them as separate
//! fields.

use crate::{policy, CryptoError, KeyMaterial, Result};
use aes_gcm::aead::{Aead as AeadTrait, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm, KeyInit, Nonce};

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypt `plaintext`, returning `(ciphertext, tag)` separately
///
/// The tag is exactly [`policy::GCM_TAG_LEN`] bytes taken from the end of
/// the AEAD output. An empty `aad` skips the associated-data step entirely.
pub fn encrypt(
    plaintext: &[u8],
    key: &KeyMaterial,
    nonce: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, Vec<u8>)> {
    let mut out = run(Direction::Encrypt, plaintext, key, nonce, aad)?;
    let split = out.len() - policy::GCM_TAG_LEN;
    let tag = out.split_off(split);
    Ok((out, tag))
}

/// Decrypt a detached `(ciphertext, tag)` pair
///
/// Reassembles ciphertext followed by tag before the AEAD call. A tag
/// mismatch surfaces as [`CryptoError::Authentication`]; any other cipher
/// failure keeps its underlying cause.
pub fn decrypt(
    ciphertext: &[u8],
    tag: &[u8],
    key: &KeyMaterial,
    nonce: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    let mut joined = Vec::with_capacity(ciphertext.len() + tag.len());
    joined.extend_from_slice(ciphertext);
    joined.extend_from_slice(tag);
    run(Direction::Decrypt, &joined, key, nonce, aad)
}

fn run(
    direction: Direction,
    input: &[u8],
    key: &KeyMaterial,
    nonce: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>> {
    if nonce.len() != policy::GCM_NONCE_LEN {
        return Err(CryptoError::Cipher(format!(
            "nonce must be {} bytes, got {}",
            policy::GCM_NONCE_LEN,
            nonce.len()
        ))
        .into());
    }
    let nonce = Nonce::from_slice(nonce);

    match key.as_bytes().len() {
        16 => {
            let cipher = Aes128Gcm::new_from_slice(key.as_bytes())
                .map_err(|e| CryptoError::Cipher(e.to_string()))?;
            // Only bind associated data when there is any; an absent AAD and
            // an empty AAD must be interchangeable on the wire.
            let result = if aad.is_empty() {
                match direction {
                    Direction::Encrypt => cipher.encrypt(nonce, input),
                    Direction::Decrypt => cipher.decrypt(nonce, input),
                }
            } else {
                let payload = Payload { msg: input, aad };
                match direction {
                    Direction::Encrypt => cipher.encrypt(nonce, payload),
                    Direction::Decrypt => cipher.decrypt(nonce, payload),
                }
            };
            finish(direction, result)
        }
        32 => {
            let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
                .map_err(|e| CryptoError::Cipher(e.to_string()))?;
            let result = if aad.is_empty() {
                match direction {
                    Direction::Encrypt => cipher.encrypt(nonce, input),
                    Direction::Decrypt => cipher.decrypt(nonce, input),
                }
            } else {
                let payload = Payload { msg: input, aad };
                match direction {
                    Direction::Encrypt => cipher.encrypt(nonce, payload),
                    Direction::Decrypt => cipher.decrypt(nonce, payload),
                }
            };
            finish(direction, result)
        }
        n => Err(CryptoError::Cipher(format!("unsupported key length: {} bytes", n)).into()),
    }
}

fn finish(
    direction: Direction,
    result: std::result::Result<Vec<u8>, aes_gcm::aead::Error>,
) -> Result<Vec<u8>> {
    result.map_err(|_| match direction {
        // The aead API reports encryption failures opaquely; nothing
        // secret-dependent can be recovered from them.
        Direction::Encrypt => CryptoError::Cipher("AEAD encryption failed".to_string()).into(),
        // On decrypt the only failure mode is a tag mismatch.
        Direction::Decrypt => CryptoError::Authentication.into(),
    })
}
