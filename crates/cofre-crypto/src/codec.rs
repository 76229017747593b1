//! Binary encoding of [`CipherArtifact`]
//!
//! Layout, all multi-byte integers big-endian:
//!
//! ```text
//! magic(3) | version(1) | mode(1) | kdf(1) | keyBits(2)
//! | saltLen(2)  | salt
//! | nonceLen(1) | nonce
//! | aadLen(2)   | aad         (absent when aadLen = 0)
//! | ctLen(4)    | ciphertext  (absent when ctLen = 0)
//! | tagLen(1)   | tag
//! ```
//!
//! Decoding validates the magic header first, then the version, before
//! trusting any length-prefixed field. The format is deliberately
//! forward-incompatible: an unknown version is rejected, never best-effort
//! parsed.

use crate::{policy, CipherArtifact, FormatError, Result};
use bytes::BufMut;

/// Serialize an artifact to its binary form
pub fn encode(artifact: &CipherArtifact) -> Result<Vec<u8>> {
    // Hand-assembled artifacts may exceed a length prefix; re-check before
    // the casts below can truncate.
    artifact.check_field_limits()?;

    let mut out = Vec::with_capacity(
        policy::MAGIC.len()
            + 8
            + artifact.salt.len()
            + artifact.nonce.len()
            + artifact.aad.len()
            + artifact.ciphertext.len()
            + artifact.tag.len()
            + 10,
    );
    out.put_slice(&policy::MAGIC);
    out.put_u8(artifact.version);
    out.put_u8(artifact.mode);
    out.put_u8(artifact.kdf);
    out.put_u16(artifact.key_bits);

    out.put_u16(artifact.salt.len() as u16);
    out.put_slice(&artifact.salt);

    out.put_u8(artifact.nonce.len() as u8);
    out.put_slice(&artifact.nonce);

    out.put_u16(artifact.aad.len() as u16);
    if !artifact.aad.is_empty() {
        out.put_slice(&artifact.aad);
    }

    out.put_u32(artifact.ciphertext.len() as u32);
    if !artifact.ciphertext.is_empty() {
        out.put_slice(&artifact.ciphertext);
    }

    out.put_u8(artifact.tag.len() as u8);
    out.put_slice(&artifact.tag);

    Ok(out)
}

/// Parse an artifact from its binary form
///
/// Truncated input fails with [`FormatError::Truncated`] naming the field
/// that could not be read; it never reads out of bounds.
pub fn decode(blob: &[u8]) -> Result<CipherArtifact> {
    let mut buf = blob;

    let magic = take(&mut buf, policy::MAGIC.len(), "magic")?;
    if magic != policy::MAGIC {
        return Err(FormatError::BadMagic.into());
    }

    let version = take_u8(&mut buf, "version")?;
    if version != policy::VERSION {
        return Err(FormatError::UnsupportedVersion(version).into());
    }

    let mode = take_u8(&mut buf, "mode")?;
    let kdf = take_u8(&mut buf, "kdf")?;
    let key_bits = take_u16(&mut buf, "keyBits")?;

    let salt_len = take_u16(&mut buf, "saltLen")? as usize;
    let salt = take(&mut buf, salt_len, "salt")?.to_vec();

    let nonce_len = take_u8(&mut buf, "nonceLen")? as usize;
    let nonce = take(&mut buf, nonce_len, "nonce")?.to_vec();

    let aad_len = take_u16(&mut buf, "aadLen")? as usize;
    let aad = take(&mut buf, aad_len, "aad")?.to_vec();

    let ct_len = take_u32(&mut buf, "ctLen")? as usize;
    let ciphertext = take(&mut buf, ct_len, "ciphertext")?.to_vec();

    let tag_len = take_u8(&mut buf, "tagLen")? as usize;
    let tag = take(&mut buf, tag_len, "tag")?.to_vec();

    Ok(CipherArtifact {
        version,
        mode,
        kdf,
        key_bits,
        salt,
        nonce,
        aad,
        ciphertext,
        tag,
    })
}

fn take<'a>(buf: &mut &'a [u8], n: usize, field: &'static str) -> Result<&'a [u8]> {
    if buf.len() < n {
        return Err(FormatError::Truncated(field).into());
    }
    let (head, rest) = buf.split_at(n);
    *buf = rest;
    Ok(head)
}

fn take_u8(buf: &mut &[u8], field: &'static str) -> Result<u8> {
    Ok(take(buf, 1, field)?[0])
}

fn take_u16(buf: &mut &[u8], field: &'static str) -> Result<u16> {
    let bytes = take(buf, 2, field)?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn take_u32(buf: &mut &[u8], field: &'static str) -> Result<u32> {
    let bytes = take(buf, 4, field)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}
