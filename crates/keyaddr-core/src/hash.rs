//! SHA256 / RIPEMD160 digests used to derive address payloads.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Size of a SHA256 digest in bytes.
pub const SHA256_SIZE: usize = 32;

/// Size of a RIPEMD160 digest in bytes.
pub const HASH160_SIZE: usize = 20;

/// Single SHA256 hash.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; SHA256_SIZE] {
    let hash = Sha256::digest(data);
    let mut result = [0u8; SHA256_SIZE];
    result.copy_from_slice(&hash);
    result
}

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
///
/// The first four bytes form the base58check checksum.
#[inline]
pub fn hash256(data: &[u8]) -> [u8; SHA256_SIZE] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; SHA256_SIZE];
    result.copy_from_slice(&second);
    result
}

/// RIPEMD160(SHA256(data)), the hash committed to by P2PKH, P2SH and
/// P2WPKH outputs.
#[inline]
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    let hash = Ripemd160::digest(Sha256::digest(data));
    let mut result = [0u8; HASH160_SIZE];
    result.copy_from_slice(&hash);
    result
}
