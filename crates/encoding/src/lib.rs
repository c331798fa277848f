// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! BiblePay text encodings.
//!
//! - [`base58`]: the radix-58 codec with leading-zero preservation
//! - [`base58check`]: base58 with a trailing double SHA-256 checksum
//! - [`wif`]: wallet import format for secret keys

pub mod base58;
pub mod base58check;
pub mod wif;

pub use base58::{Base58Error, FromBase58, ToBase58, ALPHABET};
pub use base58check::{Base58CheckError, FromBase58Check, ToBase58Check};
pub use wif::{Wif, WifError, SECRET_KEY_SIZE};
