// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! BiblePay cryptography primitives.
//!
//! Only the digests needed to checksum base58 payloads live here. Deriving
//! identifiers from public keys is the wallet's job and is not provided.

pub mod hash;

pub use hash::{checksum, hash256, sha256, verify_checksum, CHECKSUM_SIZE};
