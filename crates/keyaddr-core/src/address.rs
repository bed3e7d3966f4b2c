//! Bitcoin address derivation from a compressed public key.
//!
//! Supports:
//! - P2PKH (Pay to Public Key Hash) - Legacy addresses starting with 1 (mainnet) or m/n (testnet)
//! - P2SH-P2WPKH (SegWit v0 nested in P2SH) - Addresses starting with 3 (mainnet) or 2 (testnet)
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit v0, bc1q.../tb1q...

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use crate::base58;
use crate::bech32;
use crate::checksum::Variant;
use crate::error::EncodeError;
use crate::hash::{hash160, HASH160_SIZE};
use crate::network::Network;

/// Size of a compressed secp256k1 public key in bytes.
pub const COMPRESSED_PUBKEY_SIZE: usize = 33;

/// Address derivation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressError {
    /// The public key is not valid hex.
    InvalidHex(hex::FromHexError),
    /// The public key is not 33 bytes long.
    InvalidPublicKeyLength(usize),
    /// The public key does not start with 0x02 or 0x03.
    InvalidPublicKeyPrefix(u8),
    /// Unrecognized address type name.
    UnknownAddressType(String),
    /// Bech32 encoding failed.
    Encode(EncodeError),
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidHex(e) => write!(f, "invalid public key hex: {}", e),
            AddressError::InvalidPublicKeyLength(len) => write!(
                f,
                "invalid public key length: {} bytes (expected {})",
                len, COMPRESSED_PUBKEY_SIZE
            ),
            AddressError::InvalidPublicKeyPrefix(b) => {
                write!(f, "invalid compressed public key prefix: 0x{:02x}", b)
            }
            AddressError::UnknownAddressType(name) => write!(f, "unknown address type: '{}'", name),
            AddressError::Encode(e) => write!(f, "{}", e),
        }
    }
}

impl From<EncodeError> for AddressError {
    fn from(e: EncodeError) -> Self {
        AddressError::Encode(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AddressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AddressError::InvalidHex(e) => Some(e),
            AddressError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

/// A 33-byte compressed secp256k1 public key.
///
/// Only the encoding is checked (length and 0x02/0x03 prefix); the point is
/// not verified to lie on the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; COMPRESSED_PUBKEY_SIZE]);

impl PublicKey {
    /// Parse a compressed public key from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddressError> {
        if bytes.len() != COMPRESSED_PUBKEY_SIZE {
            return Err(AddressError::InvalidPublicKeyLength(bytes.len()));
        }
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(AddressError::InvalidPublicKeyPrefix(bytes[0]));
        }
        let mut key = [0u8; COMPRESSED_PUBKEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(PublicKey(key))
    }

    /// The serialized key.
    pub fn as_bytes(&self) -> &[u8; COMPRESSED_PUBKEY_SIZE] {
        &self.0
    }

    /// RIPEMD160(SHA256(key)).
    pub fn hash160(&self) -> [u8; HASH160_SIZE] {
        hash160(&self.0)
    }
}

impl FromStr for PublicKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s.trim()).map_err(AddressError::InvalidHex)?;
        PublicKey::from_slice(&bytes)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Address type derived from a public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2pkh,
    /// P2SH wrapping the P2WPKH script OP_0 <20-byte-hash>
    P2shP2wpkh,
    /// Native SegWit v0 P2WPKH: OP_0 <20-byte-hash>
    P2wpkh,
}

impl AddressType {
    /// Every address type, in display order.
    pub const ALL: [AddressType; 3] = [
        AddressType::P2pkh,
        AddressType::P2shP2wpkh,
        AddressType::P2wpkh,
    ];

    /// Get the display name for this address type.
    pub fn name(&self) -> &'static str {
        match self {
            AddressType::P2pkh => "p2pkh",
            AddressType::P2shP2wpkh => "p2sh-p2wpkh",
            AddressType::P2wpkh => "bech32",
        }
    }

    /// Parse an address type from its name, ignoring case.
    ///
    /// `p2wpkh` is accepted as an alias for `bech32`.
    pub fn from_name(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("p2wpkh") {
            return Some(AddressType::P2wpkh);
        }
        AddressType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AddressType {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AddressType::from_name(s).ok_or_else(|| AddressError::UnknownAddressType(s.to_string()))
    }
}

/// The P2WPKH witness script `OP_0 PUSH20 <hash>`, used as the P2SH redeem
/// script for nested SegWit.
pub fn p2wpkh_script(hash: &[u8; HASH160_SIZE]) -> [u8; 2 + HASH160_SIZE] {
    let mut script = [0u8; 2 + HASH160_SIZE];
    script[0] = 0x00; // OP_0
    script[1] = 0x14; // Push 20 bytes
    script[2..].copy_from_slice(hash);
    script
}

fn base58_address(version: u8, hash: &[u8; HASH160_SIZE]) -> String {
    let mut payload = [0u8; 1 + HASH160_SIZE];
    payload[0] = version;
    payload[1..].copy_from_slice(hash);
    base58::encode_check(&payload)
}

/// Legacy P2PKH address: base58check(`version ++ hash160(pubkey)`).
pub fn p2pkh_address(pubkey: &PublicKey, network: Network) -> String {
    base58_address(network.p2pkh_version(), &pubkey.hash160())
}

/// Nested SegWit address: base58check(`version ++ hash160(OP_0 PUSH20 hash160(pubkey))`).
pub fn p2sh_p2wpkh_address(pubkey: &PublicKey, network: Network) -> String {
    let redeem_script = p2wpkh_script(&pubkey.hash160());
    base58_address(network.p2sh_version(), &hash160(&redeem_script))
}

/// Native SegWit v0 address: Bech32 encoding of `hash160(pubkey)`.
pub fn p2wpkh_address(pubkey: &PublicKey, network: Network) -> Result<String, EncodeError> {
    bech32::encode(0, network.bech32_hrp(), &pubkey.hash160(), Variant::Bech32)
}

/// Derive the address of the given type.
pub fn derive_address(
    pubkey: &PublicKey,
    address_type: AddressType,
    network: Network,
) -> Result<String, AddressError> {
    match address_type {
        AddressType::P2pkh => Ok(p2pkh_address(pubkey, network)),
        AddressType::P2shP2wpkh => Ok(p2sh_p2wpkh_address(pubkey, network)),
        AddressType::P2wpkh => Ok(p2wpkh_address(pubkey, network)?),
    }
}

/// Derive every address type, in [`AddressType::ALL`] order.
pub fn derive_all(
    pubkey: &PublicKey,
    network: Network,
) -> Result<Vec<(AddressType, String)>, AddressError> {
    AddressType::ALL
        .iter()
        .map(|&t| derive_address(pubkey, t, network).map(|addr| (t, addr)))
        .collect()
}
