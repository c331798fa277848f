// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! Property-based tests for the checksum digests.

use bbp_cryptography::{checksum, hash256, sha256, verify_checksum, CHECKSUM_SIZE};
use proptest::prelude::*;

proptest! {
    /// Hash256 is SHA-256 applied twice.
    #[test]
    fn prop_hash256_is_double_sha256(data in prop::collection::vec(any::<u8>(), 0..256)) {
        prop_assert_eq!(hash256(&data), sha256(&sha256(&data)));
    }

    /// The checksum is the hash256 prefix.
    #[test]
    fn prop_checksum_is_hash256_prefix(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let sum = checksum(&data);
        prop_assert_eq!(&sum[..], &hash256(&data)[..CHECKSUM_SIZE]);
        prop_assert!(verify_checksum(&data, &sum));
    }

    /// Appending a byte to the payload changes its checksum.
    #[test]
    fn prop_checksum_detects_extension(
        data in prop::collection::vec(any::<u8>(), 1..128),
        extra in any::<u8>()
    ) {
        let mut extended = data.clone();
        extended.push(extra);
        // 2^-32 collision odds; treat a hit as a real failure.
        prop_assert_ne!(checksum(&data), checksum(&extended));
    }
}
