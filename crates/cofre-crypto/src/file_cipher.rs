//! Legacy whole-file encryption
//!
//! Predates the versioned artifact format and is kept for reading files
//! written by older releases. The key is an unsalted SHA-256 of the
//! password truncated to 128 bits, and the output file is just
//! `nonce || ciphertext+tag` with no magic header or version byte. New code
//! should prefer [`crate::vault`]; migrating old files onto the artifact
//! format is an open product decision, so the two formats stay separate.

use crate::{random, CryptoError, Error, FormatError, Result};
use aes_gcm::aead::Aead as AeadTrait;
use aes_gcm::{Aes128Gcm, KeyInit, Nonce};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use zeroize::{Zeroize, ZeroizeOnDrop};

const NONCE_LEN: usize = 12;

/// AES-128-GCM whole-file cipher keyed by a password hash
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct FileCipher {
    key: [u8; 16],
}

impl FileCipher {
    /// Build a cipher from a password
    ///
    /// The same password always yields the same key: this scheme has no
    /// salt, which is the main reason it is weaker than the artifact
    /// format.
    pub fn new(password: &str) -> Self {
        let digest = Sha256::digest(password.as_bytes());
        let mut key = [0u8; 16];
        key.copy_from_slice(&digest[..16]);
        Self { key }
    }

    /// Encrypt `input` into `output` as `nonce || ciphertext+tag`
    pub fn encrypt_file(&self, input: &Path, output: &Path) -> Result<()> {
        let plaintext = fs::read(input)?;
        let sealed = self.seal(&plaintext)?;
        fs::write(output, sealed)?;
        Ok(())
    }

    /// Decrypt a file written by [`FileCipher::encrypt_file`]
    pub fn decrypt_file(&self, input: &Path, output: &Path) -> Result<()> {
        let data = fs::read(input)?;
        let plaintext = self.open(&data)?;
        fs::write(output, plaintext)?;
        Ok(())
    }

    fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let nonce = random::next_bytes(NONCE_LEN);
        let cipher = self.cipher()?;
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| Error::from(CryptoError::Cipher("AEAD encryption failed".to_string())))?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);
        Ok(out)
    }

    fn open(&self, data: &[u8]) -> Result<Vec<u8>> {
        if data.len() < NONCE_LEN {
            return Err(FormatError::Truncated("nonce").into());
        }
        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        let cipher = self.cipher()?;
        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| CryptoError::Authentication.into())
    }

    fn cipher(&self) -> Result<Aes128Gcm> {
        Aes128Gcm::new_from_slice(&self.key)
            .map_err(|e| CryptoError::Cipher(e.to_string()).into())
    }
}
