//! # Cofre Crypto
//!
//! Password-protected authenticated encryption in one self-describing blob.
//!
//! This crate provides:
//! - **PBKDF2-HMAC-SHA-256**: password stretching with a per-operation salt
//! - **AES-GCM**: authenticated encryption with optional associated data
//! - **A versioned binary artifact format**: magic header, algorithm ids,
//!   salt, nonce, AAD, ciphertext, and tag bundled into a single blob
//! - **Base64 facades**: text-safe variants of the two entry points
//!
//! ## Security Model
//!
//! - Every encryption draws a fresh random salt and nonce
//! - Derived key material is zeroized as soon as the operation finishes
//! - A wrong password is indistinguishable from tampered data (GCM tag
//!   mismatch) and is reported as a distinct authentication failure
//!
//! ## Example
//!
//! ```rust,ignore
//! use cofre_crypto::{encrypt_to_base64, decrypt_from_base64};
//!
//! let blob = encrypt_to_base64(b"meet at noon", b"super-secret", Some("app=notes"))?;
//! let plain = decrypt_from_base64(&blob, b"super-secret")?;
//! assert_eq!(plain, b"meet at noon");
//! ```

pub mod artifact;
pub mod codec;
pub mod engine;
pub mod error;
pub mod file_cipher;
pub mod kdf;
pub mod policy;
pub mod random;
pub mod vault;

pub use artifact::CipherArtifact;
pub use error::{CryptoError, Error, FormatError, Result};
pub use file_cipher::FileCipher;
pub use kdf::KeyMaterial;
pub use vault::{
    decrypt_from_base64, decrypt_with_password, encrypt_to_base64, encrypt_with_password,
};
