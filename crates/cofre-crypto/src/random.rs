//! CSPRNG access for salts and nonces
//!
//! All randomness comes from [`OsRng`], the operating system's entropy
//! source. It is a zero-sized shared handle, safe to use concurrently from
//! any number of threads, and is never swapped for a general-purpose PRNG.

use rand::rngs::OsRng;
use rand::RngCore;

/// Fill `buf` with cryptographically secure random bytes
pub fn fill(buf: &mut [u8]) {
    OsRng.fill_bytes(buf);
}

/// Produce `n` cryptographically secure random bytes
pub fn next_bytes(n: usize) -> Vec<u8> {
    let mut out = vec![0u8; n];
    fill(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_length() {
        assert_eq!(next_bytes(0).len(), 0);
        assert_eq!(next_bytes(16).len(), 16);
        assert_eq!(next_bytes(4096).len(), 4096);
    }

    #[test]
    fn test_successive_draws_differ() {
        let a = next_bytes(32);
        let b = next_bytes(32);
        assert_ne!(a, b);
    }
}
