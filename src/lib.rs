// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! # bbp-address: BiblePay address encoding
//!
//! Encodes a version byte and a 20-byte identifier hash as a Base58Check
//! address, and validates such addresses on the way back in.
//!
//! ## Quick Start
//!
//! ```rust
//! use bbp_address::{decode_address, encode_address, IDENTIFIER_SIZE};
//!
//! let mut identifier = [0u8; IDENTIFIER_SIZE];
//! identifier[0] = 1;
//!
//! let text = encode_address(25, &identifier)?;
//! assert_eq!(text, "B4YNHuaXAgpbyP5QgM3H6S41AuKcsRCEaB");
//!
//! let (version, decoded) = decode_address(&text, IDENTIFIER_SIZE)?;
//! assert_eq!(version, 25);
//! assert_eq!(decoded, identifier);
//! # Ok::<(), bbp_address::AddressError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`bbp_cryptography`] - double SHA-256 checksums
//! - [`bbp_encoding`] - base58, base58check and WIF codecs
//! - [`bbp_config`] - networks and their base58 prefixes
//!
//! Deriving the identifier from a public key is left to the caller.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod address;

pub use address::{
    burn_address, decode_address, encode_address, parse_for_network, Address, AddressError,
    AddressKind, CHECKED_ADDRESS_SIZE,
};
pub use bbp_config::{AddressConfig, Base58Prefixes, NetworkType, IDENTIFIER_SIZE};

// Re-export the component crates
pub use bbp_config as config;
pub use bbp_cryptography as crypto;
pub use bbp_encoding as encoding;
