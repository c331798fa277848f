// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

use bbp_cryptography::{checksum, verify_checksum, CHECKSUM_SIZE};
use thiserror::Error;
use tracing::{debug, trace};

use crate::base58::{self, Base58Error};

/// Smallest decodable base58check payload: one data byte plus the checksum.
pub const MIN_CHECKED_SIZE: usize = 1 + CHECKSUM_SIZE;

pub trait ToBase58Check {
    fn to_base58_check(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase58Check for T {
    fn to_base58_check(&self) -> String {
        let payload = self.as_ref();
        let sum = checksum(payload);
        trace!(payload_len = payload.len(), "base58check encode");

        let checked: Vec<u8> = payload.iter().chain(sum.iter()).copied().collect();
        base58::encode(&checked)
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, Error)]
pub enum Base58CheckError {
    #[error("base58check: invalid character '{character}' at {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("base58check: invalid length {0}")]
    InvalidLength(usize),

    #[error("base58check: invalid checksum")]
    InvalidChecksum,
}

impl From<Base58Error> for Base58CheckError {
    #[inline]
    fn from(value: Base58Error) -> Self {
        match value {
            Base58Error::InvalidCharacter { character, index } => {
                Self::InvalidCharacter { character, index }
            }
        }
    }
}

pub trait FromBase58Check: Sized {
    type Error;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Self, Self::Error>;
}

impl FromBase58Check for Vec<u8> {
    type Error = Base58CheckError;

    fn from_base58_check<T: AsRef<str>>(src: T) -> Result<Vec<u8>, Self::Error> {
        let mut decoded = base58::decode(src.as_ref())?;
        if decoded.len() < MIN_CHECKED_SIZE {
            debug!(len = decoded.len(), "base58check payload too short");
            return Err(Self::Error::InvalidLength(decoded.len()));
        }

        let split = decoded.len() - CHECKSUM_SIZE;
        let (payload, supplied) = decoded.split_at(split);
        if !verify_checksum(payload, supplied) {
            debug!(payload_len = payload.len(), "base58check checksum mismatch");
            return Err(Self::Error::InvalidChecksum);
        }

        decoded.truncate(split);
        Ok(decoded)
    }
}
