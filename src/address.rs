// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! Versioned, checksummed addresses.
//!
//! An address is the base58 text of `version || identifier || checksum`,
//! where the checksum is the first four bytes of a double SHA-256 over
//! `version || identifier`.

use core::fmt;
use core::str::FromStr;

use bbp_config::{Base58Prefixes, IDENTIFIER_SIZE};
use bbp_cryptography::{verify_checksum, CHECKSUM_SIZE};
use bbp_encoding::base58::{self, Base58Error};
use bbp_encoding::base58check::ToBase58Check;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, trace};

/// Byte length of a decoded standard address.
pub const CHECKED_ADDRESS_SIZE: usize = 1 + IDENTIFIER_SIZE + CHECKSUM_SIZE;

/// Errors raised while building or validating an address.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum AddressError {
    /// The text contains a character outside the base58 alphabet.
    #[error("address: invalid character '{character}' at {index}")]
    InvalidCharacter {
        /// Offending character.
        character: char,
        /// Character position in the text.
        index: usize,
    },

    /// The decoded byte length does not fit the expected layout.
    #[error("address: invalid length, expected {expected} bytes but got {actual}")]
    InvalidLength {
        /// `1 + identifier_length + 4`.
        expected: usize,
        /// Length actually decoded.
        actual: usize,
    },

    /// The trailing checksum does not match the payload.
    #[error("address: invalid checksum")]
    InvalidChecksum,

    /// The identifier handed to the encoder has the wrong size.
    #[error("address: invalid identifier length, expected {expected} bytes but got {actual}")]
    InvalidIdentifierLength {
        /// Protocol identifier size.
        expected: usize,
        /// Size supplied by the caller.
        actual: usize,
    },

    /// The version byte belongs to no address kind of the network.
    #[error("address: unexpected version '0x{0:02x}'")]
    UnexpectedVersion(u8),
}

impl From<Base58Error> for AddressError {
    #[inline]
    fn from(value: Base58Error) -> Self {
        match value {
            Base58Error::InvalidCharacter { character, index } => {
                AddressError::InvalidCharacter { character, index }
            }
        }
    }
}

/// Encodes `identifier` under `version`.
///
/// Fails with [`AddressError::InvalidIdentifierLength`] unless the identifier
/// is exactly [`IDENTIFIER_SIZE`] bytes.
pub fn encode_address(version: u8, identifier: &[u8]) -> Result<String, AddressError> {
    if identifier.len() != IDENTIFIER_SIZE {
        return Err(AddressError::InvalidIdentifierLength {
            expected: IDENTIFIER_SIZE,
            actual: identifier.len(),
        });
    }

    Ok(encode_checked(version, identifier))
}

fn encode_checked(version: u8, identifier: &[u8]) -> String {
    let payload: Vec<u8> = core::iter::once(version).chain(identifier.iter().copied()).collect();

    trace!(version, "encoding address");
    payload.to_base58_check()
}

/// Decodes `text` into its version byte and an identifier of
/// `identifier_length` bytes, verifying the checksum.
pub fn decode_address(text: &str, identifier_length: usize) -> Result<(u8, Vec<u8>), AddressError> {
    let bytes = base58::decode(text)?;

    // saturates so an absurd identifier length is rejected, not wrapped
    let expected = identifier_length.checked_add(1 + CHECKSUM_SIZE).unwrap_or(usize::MAX);
    if bytes.len() != expected {
        debug!(expected, actual = bytes.len(), "address has unexpected length");
        return Err(AddressError::InvalidLength { expected, actual: bytes.len() });
    }

    let (payload, supplied) = bytes.split_at(bytes.len() - CHECKSUM_SIZE);
    if !verify_checksum(payload, supplied) {
        debug!(version = payload[0], "address checksum mismatch");
        return Err(AddressError::InvalidChecksum);
    }

    Ok((payload[0], payload[1..].to_vec()))
}

/// Address for `version` with an all-zero identifier.
///
/// Nobody holds a key hashing to zero, so funds sent here are burned.
pub fn burn_address(version: u8) -> String {
    Address::burn(version).encode()
}

/// What an address pays to, judged by its version byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressKind {
    /// Pay-to-pubkey-hash.
    PubkeyHash,
    /// Pay-to-script-hash.
    Script,
}

impl AddressKind {
    /// Version byte of this kind on a network.
    pub fn version(&self, prefixes: &Base58Prefixes) -> u8 {
        match self {
            AddressKind::PubkeyHash => prefixes.pubkey_address,
            AddressKind::Script => prefixes.script_address,
        }
    }
}

/// A decoded standard address: version byte plus a 20-byte identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address {
    version: u8,
    identifier: [u8; IDENTIFIER_SIZE],
}

impl Address {
    /// Creates an address from its parts.
    #[inline]
    pub const fn new(version: u8, identifier: [u8; IDENTIFIER_SIZE]) -> Self {
        Self { version, identifier }
    }

    /// Creates an address from an identifier slice, checking its length.
    pub fn from_slice(version: u8, identifier: &[u8]) -> Result<Self, AddressError> {
        let identifier: [u8; IDENTIFIER_SIZE] =
            identifier.try_into().map_err(|_| AddressError::InvalidIdentifierLength {
                expected: IDENTIFIER_SIZE,
                actual: identifier.len(),
            })?;

        Ok(Self { version, identifier })
    }

    /// The burn address of `version`.
    #[inline]
    pub const fn burn(version: u8) -> Self {
        Self { version, identifier: [0u8; IDENTIFIER_SIZE] }
    }

    /// An address of `kind` on the network described by `prefixes`.
    #[inline]
    pub fn for_network(
        prefixes: &Base58Prefixes,
        kind: AddressKind,
        identifier: [u8; IDENTIFIER_SIZE],
    ) -> Self {
        Self::new(kind.version(prefixes), identifier)
    }

    /// Version byte.
    #[inline]
    pub fn version(&self) -> u8 {
        self.version
    }

    /// Identifier bytes.
    #[inline]
    pub fn identifier(&self) -> &[u8; IDENTIFIER_SIZE] {
        &self.identifier
    }

    /// Whether the identifier is all zero.
    #[inline]
    pub fn is_burn(&self) -> bool {
        self.identifier.iter().all(|&b| b == 0)
    }

    /// Base58 text of the address.
    #[inline]
    pub fn encode(&self) -> String {
        encode_checked(self.version, &self.identifier)
    }

    /// Classifies the address against a network's prefixes.
    pub fn kind_in(&self, prefixes: &Base58Prefixes) -> Result<AddressKind, AddressError> {
        if self.version == prefixes.pubkey_address {
            Ok(AddressKind::PubkeyHash)
        } else if self.version == prefixes.script_address {
            Ok(AddressKind::Script)
        } else {
            debug!(version = self.version, ?prefixes, "address version not used by network");
            Err(AddressError::UnexpectedVersion(self.version))
        }
    }
}

/// Decodes `text` and checks that its version is a pubkey-hash or script
/// prefix of the network.
pub fn parse_for_network(
    text: &str,
    prefixes: &Base58Prefixes,
) -> Result<(Address, AddressKind), AddressError> {
    let address: Address = text.parse()?;
    let kind = address.kind_in(prefixes)?;
    Ok((address, kind))
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (version, identifier) = decode_address(s, IDENTIFIER_SIZE)?;
        Self::from_slice(version, &identifier)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text: String = Deserialize::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
