//! Password-based encrypt/decrypt orchestration
//!
//! The four public operations of the crate. Every encryption draws a fresh
//! salt and nonce, derives a key, runs the AEAD engine, and packs the
//! result into one self-describing blob; decryption re-derives the same key
//! from the ingredients embedded in the blob.

use crate::{codec, engine, kdf, policy, random, CipherArtifact, FormatError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Encrypt `plaintext` under `password`, producing a self-contained blob
///
/// Salt and nonce are drawn fresh on every call; two encryptions of the
/// same inputs never produce the same blob. An absent AAD is treated as
/// empty.
pub fn encrypt_with_password(
    plaintext: &[u8],
    password: &[u8],
    aad: Option<&[u8]>,
) -> Result<Vec<u8>> {
    let aad = aad.unwrap_or_default();
    let key_bits = policy::KEY_BITS_DEFAULT;

    let salt = random::next_bytes(policy::SALT_LEN);
    let key = kdf::derive_from_password(password, &salt, key_bits, policy::PBKDF2_ITERATIONS)?;
    let nonce = random::next_bytes(policy::GCM_NONCE_LEN);
    let (ciphertext, tag) = engine::encrypt(plaintext, &key, &nonce, aad)?;

    let artifact = CipherArtifact::new(
        policy::VERSION,
        policy::MODE_ID_GCM,
        policy::KDF_ID_PBKDF2,
        key_bits,
        salt,
        nonce,
        aad.to_vec(),
        ciphertext,
        tag,
    )?;
    codec::encode(&artifact)
}

/// Recover the plaintext from a blob produced by [`encrypt_with_password`]
///
/// The key is re-derived from the salt and key size embedded in the blob.
pub fn decrypt_with_password(blob: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let artifact = codec::decode(blob)?;
    let key = kdf::derive_from_password(
        password,
        &artifact.salt,
        artifact.key_bits,
        policy::PBKDF2_ITERATIONS,
    )?;
    engine::decrypt(
        &artifact.ciphertext,
        &artifact.tag,
        &key,
        &artifact.nonce,
        &artifact.aad,
    )
}

/// Encrypt and return the blob as standard Base64
///
/// `aad_text` is bound as UTF-8 bytes; `None` means no associated data.
pub fn encrypt_to_base64(
    plaintext: &[u8],
    password: &[u8],
    aad_text: Option<&str>,
) -> Result<String> {
    let aad = aad_text.map(str::as_bytes);
    let blob = encrypt_with_password(plaintext, password, aad)?;
    Ok(BASE64.encode(blob))
}

/// Base64-decode and decrypt a blob produced by [`encrypt_to_base64`]
pub fn decrypt_from_base64(b64: &str, password: &[u8]) -> Result<Vec<u8>> {
    let blob = BASE64.decode(b64).map_err(FormatError::from)?;
    decrypt_with_password(&blob, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let blob = encrypt_with_password(b"hello", b"pw", None).unwrap();
        assert_eq!(decrypt_with_password(&blob, b"pw").unwrap(), b"hello");
    }

    #[test]
    fn test_roundtrip_with_aad() {
        let blob = encrypt_with_password(b"hello", b"pw", Some(b"ctx")).unwrap();
        assert_eq!(decrypt_with_password(&blob, b"pw").unwrap(), b"hello");
    }

    #[test]
    fn test_wrong_password_fails_authentication() {
        let blob = encrypt_with_password(b"hello", b"pw", None).unwrap();
        let err = decrypt_with_password(&blob, b"not-pw").unwrap_err();
        assert!(err.is_authentication());
    }

    #[test]
    fn test_fresh_salt_and_nonce_per_call() {
        let a = encrypt_with_password(b"same", b"pw", Some(b"aad")).unwrap();
        let b = encrypt_with_password(b"same", b"pw", Some(b"aad")).unwrap();
        assert_ne!(a, b);

        assert_eq!(decrypt_with_password(&a, b"pw").unwrap(), b"same");
        assert_eq!(decrypt_with_password(&b, b"pw").unwrap(), b"same");
    }

    #[test]
    fn test_absent_and_empty_aad_both_decrypt() {
        let absent = encrypt_with_password(b"data", b"pw", None).unwrap();
        let empty = encrypt_with_password(b"data", b"pw", Some(b"")).unwrap();
        assert_eq!(decrypt_with_password(&absent, b"pw").unwrap(), b"data");
        assert_eq!(decrypt_with_password(&empty, b"pw").unwrap(), b"data");
    }

    #[test]
    fn test_base64_facade_delegates() {
        let b64 = encrypt_to_base64(b"text mode", b"pw", Some("label")).unwrap();
        assert_eq!(decrypt_from_base64(&b64, b"pw").unwrap(), b"text mode");
    }

    #[test]
    fn test_invalid_base64_is_a_format_error() {
        let err = decrypt_from_base64("@@not base64@@", b"pw").unwrap_err();
        assert!(err.is_format());
    }
}
