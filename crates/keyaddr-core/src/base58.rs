//! Base58Check encoding for legacy (P2PKH / P2SH) addresses.
//!
//! `payload ++ hash256(payload)[..4]`, written in base 58 with one leading
//! `'1'` per leading zero byte.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use crate::hash::hash256;

const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the trailing checksum in bytes.
pub const CHECKSUM_SIZE: usize = 4;

/// Base58Check decoding errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base58Error {
    /// A character outside the base58 alphabet.
    InvalidChar(char),
    /// Fewer bytes than the checksum itself.
    TooShort(usize),
    /// The trailing checksum does not match the payload.
    InvalidChecksum,
}

impl fmt::Display for Base58Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Base58Error::InvalidChar(c) => write!(f, "invalid base58 character: {}", c),
            Base58Error::TooShort(len) => write!(f, "base58check data too short: {} bytes", len),
            Base58Error::InvalidChecksum => write!(f, "invalid base58check checksum"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Base58Error {}

/// Encode raw bytes in base58 (no checksum).
pub fn encode(data: &[u8]) -> String {
    let leading_zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base58 digits of the big-endian input number
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[leading_zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            let temp = u32::from(*digit) * 256 + carry;
            *digit = (temp % 58) as u8;
            carry = temp / 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(leading_zeros + digits.len());
    for _ in 0..leading_zeros {
        result.push('1');
    }
    for &digit in digits.iter().rev() {
        result.push(char::from(BASE58_ALPHABET[usize::from(digit)]));
    }
    result
}

/// Decode a base58 string into raw bytes (no checksum check).
pub fn decode(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut result = Vec::new();

    // Leading '1's become leading zero bytes
    let leading_zeros = input.chars().take_while(|&c| c == '1').count();

    for c in input.chars() {
        let value = BASE58_ALPHABET
            .iter()
            .position(|&x| char::from(x) == c)
            .ok_or(Base58Error::InvalidChar(c))? as u32;

        // Multiply result by 58 and add value
        let mut carry = value;
        for byte in result.iter_mut().rev() {
            let temp = u32::from(*byte) * 58 + carry;
            *byte = (temp & 0xFF) as u8;
            carry = temp >> 8;
        }

        while carry > 0 {
            result.insert(0, (carry & 0xFF) as u8);
            carry >>= 8;
        }
    }

    let mut final_result = vec![0u8; leading_zeros];
    final_result.extend(result);
    Ok(final_result)
}

/// Append the 4-byte `hash256` checksum and base58-encode.
pub fn encode_check(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    data.extend_from_slice(payload);
    data.extend_from_slice(&hash256(payload)[..CHECKSUM_SIZE]);
    encode(&data)
}

/// Decode a base58check string, verify and strip its checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>, Base58Error> {
    let mut decoded = decode(input)?;
    if decoded.len() < CHECKSUM_SIZE {
        return Err(Base58Error::TooShort(decoded.len()));
    }

    let split = decoded.len() - CHECKSUM_SIZE;
    let expected = hash256(&decoded[..split]);
    if decoded[split..] != expected[..CHECKSUM_SIZE] {
        return Err(Base58Error::InvalidChecksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}
