// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

use core::fmt;
use core::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::base58check::{Base58CheckError, FromBase58Check, ToBase58Check};

/// Size of a raw secp256k1 secret key.
pub const SECRET_KEY_SIZE: usize = 32;

const COMPRESSED_FLAG: u8 = 0x01;

/// A secret key in Wallet Import Format.
///
/// The encoded payload is `version || key || [0x01]`, the trailing flag
/// present only when the key pairs with a compressed public key.
#[derive(Clone, PartialEq, Eq)]
pub struct Wif {
    version: u8,
    key: [u8; SECRET_KEY_SIZE],
    compressed: bool,
}

impl Wif {
    pub fn new(version: u8, key: [u8; SECRET_KEY_SIZE], compressed: bool) -> Self {
        Self { version, key, compressed }
    }

    pub fn version(&self) -> u8 { self.version }

    pub fn key(&self) -> &[u8; SECRET_KEY_SIZE] { &self.key }

    pub fn compressed(&self) -> bool { self.compressed }

    pub fn encode(&self) -> String {
        let mut buf = Vec::with_capacity(1 + SECRET_KEY_SIZE + 1);

        buf.push(self.version);
        buf.extend_from_slice(&self.key);
        if self.compressed {
            buf.push(COMPRESSED_FLAG);
        }

        buf.to_base58_check()
    }

    pub fn decode(src: &str) -> Result<Self, WifError> {
        let payload = Vec::from_base58_check(src)?;

        let compressed = match payload.len() {
            n if n == 1 + SECRET_KEY_SIZE => false,
            n if n == 1 + SECRET_KEY_SIZE + 1 => true,
            n => {
                debug!(len = n, "wif payload has unexpected length");
                return Err(WifError::InvalidLength(n));
            }
        };

        if compressed {
            let flag = payload[1 + SECRET_KEY_SIZE];
            if flag != COMPRESSED_FLAG {
                return Err(WifError::InvalidCompressedFlag(flag));
            }
        }

        let mut key = [0u8; SECRET_KEY_SIZE];
        key.copy_from_slice(&payload[1..1 + SECRET_KEY_SIZE]);

        Ok(Self { version: payload[0], key, compressed })
    }
}

// Keeps key material out of logs.
impl fmt::Debug for Wif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wif")
            .field("version", &self.version)
            .field("compressed", &self.compressed)
            .finish_non_exhaustive()
    }
}

impl FromStr for Wif {
    type Err = WifError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Error)]
pub enum WifError {
    #[error("wif-decode: {0}")]
    Base58Check(#[from] Base58CheckError),

    #[error("wif-decode: invalid length '{0}'")]
    InvalidLength(usize),

    #[error("wif-decode: invalid compressed flag '{0}'")]
    InvalidCompressedFlag(u8),
}
