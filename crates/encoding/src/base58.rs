// Copyright @ 2025 - present, BiblePay Developers
// Licensed under the MIT License

//! Radix-58 codec.
//!
//! Bytes are read as a big-endian unsigned integer and rewritten in base 58
//! by long division over the byte array itself, so no big-integer type is
//! needed. Leading zero bytes carry no numeric weight and are kept as a run
//! of the alphabet's first character instead.

use thiserror::Error;

/// Digits 1-9, then letters without `I`, `O` and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const RADIX: u32 = 58;
const INVALID: u8 = 0xFF;

const DECODE_MAP: [u8; 128] = {
    let mut map = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        map[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Error)]
pub enum Base58Error {
    #[error("base58: invalid character '{character}' at {index}")]
    InvalidCharacter { character: char, index: usize },
}

/// Encodes `input` as base58.
///
/// Every leading zero byte becomes one `'1'`, so `[0, 0, 0]` encodes to
/// `"111"` and the empty slice to `""`.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    // log(256) / log(58) ~= 1.37
    let mut digits = Vec::with_capacity((input.len() - zeros) * 138 / 100 + 1);
    let mut quotient = input[zeros..].to_vec();
    let mut start = 0;

    while start < quotient.len() {
        let mut remainder = 0u32;
        for byte in quotient[start..].iter_mut() {
            let acc = (remainder << 8) | u32::from(*byte);
            *byte = (acc / RADIX) as u8;
            remainder = acc % RADIX;
        }
        digits.push(ALPHABET[remainder as usize]);

        while start < quotient.len() && quotient[start] == 0 {
            start += 1;
        }
    }

    let mut encoded = String::with_capacity(zeros + digits.len());
    encoded.extend(core::iter::repeat(ALPHABET[0] as char).take(zeros));
    encoded.extend(digits.iter().rev().map(|&d| d as char));
    encoded
}

/// Decodes base58 text back to bytes.
///
/// Leading `'1'`s are restored as zero bytes; the remaining digits produce the
/// minimal big-endian representation of their value.
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let zeros = input.bytes().take_while(|&b| b == ALPHABET[0]).count();

    // little-endian accumulator, reversed at the end
    let mut value: Vec<u8> = Vec::with_capacity(input.len() * 733 / 1000 + 1);
    for (index, character) in input.chars().enumerate().skip(zeros) {
        let digit = digit_of(character).ok_or(Base58Error::InvalidCharacter { character, index })?;

        let mut carry = u32::from(digit);
        for byte in value.iter_mut() {
            carry += u32::from(*byte) * RADIX;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            value.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut decoded = vec![0u8; zeros];
    decoded.extend(value.iter().rev());
    Ok(decoded)
}

#[inline]
fn digit_of(character: char) -> Option<u8> {
    let code = character as u32;
    if code >= 128 {
        return None;
    }

    match DECODE_MAP[code as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}

pub trait ToBase58 {
    fn to_base58(&self) -> String;
}

impl<T: AsRef<[u8]>> ToBase58 for T {
    #[inline]
    fn to_base58(&self) -> String {
        encode(self.as_ref())
    }
}

pub trait FromBase58 {
    fn from_base58(&self) -> Result<Vec<u8>, Base58Error>;
}

impl<T: AsRef<str>> FromBase58 for T {
    #[inline]
    fn from_base58(&self) -> Result<Vec<u8>, Base58Error> {
        decode(self.as_ref())
    }
}
