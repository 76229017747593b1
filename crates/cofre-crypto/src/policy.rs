//! Format and algorithm parameters
//!
//! Every constant the artifact format or its ciphers depend on lives here:
//! magic header, format version, algorithm identifiers, field sizes, and the
//! PBKDF2 work factor. Nothing in this module is mutable at runtime.

/// Magic header identifying a cofre artifact ("ENC")
pub const MAGIC: [u8; 3] = *b"ENC";

/// Current artifact format version
pub const VERSION: u8 = 0x01;

/// AEAD mode identifier for AES-GCM
pub const MODE_ID_GCM: u8 = 0x01;

/// KDF identifier for PBKDF2-HMAC-SHA-256
pub const KDF_ID_PBKDF2: u8 = 0x02;

/// Default derived-key size in bits
pub const KEY_BITS_DEFAULT: u16 = 256;

/// GCM nonce length in bytes
pub const GCM_NONCE_LEN: usize = 12;

/// GCM authentication tag length in bits
pub const GCM_TAG_BITS: usize = 128;

/// GCM authentication tag length in bytes
pub const GCM_TAG_LEN: usize = GCM_TAG_BITS / 8;

/// Salt length in bytes for password-based derivation
pub const SALT_LEN: usize = 16;

/// PBKDF2 iteration count
pub const PBKDF2_ITERATIONS: u32 = 200_000;
