// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! Hash functions for address checksums.
//!
//! The checksum appended to every base58check payload is the first
//! [`CHECKSUM_SIZE`] bytes of a double SHA-256 over the payload.

use sha2::{Digest, Sha256};

/// Number of digest bytes appended to a base58check payload.
pub const CHECKSUM_SIZE: usize = 4;

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash256 (double SHA-256) of the input data.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first_hash = sha256(data);
    sha256(&first_hash)
}

/// Computes the 4-byte checksum of a payload.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let hash = hash256(data);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Verifies a supplied checksum against the payload it claims to cover.
pub fn verify_checksum(data: &[u8], supplied: &[u8]) -> bool {
    checksum(data) == supplied
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_sha256() {
        let hash = sha256(b"hello world");
        let expected = "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9";
        assert_eq!(hex::encode(hash), expected);
    }

    #[test]
    fn test_hash256() {
        let hash = hash256(b"hello world");
        assert_eq!(
            hash,
            hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423")
        );
    }

    #[test]
    fn test_checksum_of_zero_burn_payload() {
        let mut payload = [0u8; 21];
        payload[0] = 25;
        assert_eq!(checksum(&payload), hex!("dc01020d"));
    }

    #[test]
    fn test_verify_checksum() {
        let data = b"test address data";
        let sum = checksum(data);
        assert!(verify_checksum(data, &sum));
        assert!(!verify_checksum(b"test address datb", &sum));
        assert!(!verify_checksum(data, &sum[..3]));
    }
}
