//! Bech32 encoding and Bitcoin address derivation.
//!
//! This crate provides pure Rust implementations of:
//! - 8-bit to 5-bit group repacking ([`convert`])
//! - The BIP-173 / BIP-350 polymod checksum ([`checksum`])
//! - Bech32 / Bech32m segwit encoding and decoding ([`bech32`])
//! - SHA256, double SHA256 and HASH160 digests ([`hash`])
//! - Base58Check encoding ([`base58`])
//! - P2PKH, P2SH-P2WPKH and P2WPKH addresses from a compressed public key ([`address`])

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod base58;
pub mod bech32;
pub mod checksum;
pub mod convert;
pub mod error;
pub mod hash;
pub mod network;

pub use address::{derive_address, derive_all, AddressError, AddressType, PublicKey};
pub use bech32::{decode, encode, encode_segwit, Decoded};
pub use checksum::Variant;
pub use error::{ConvertError, DecodeError, EncodeError};
pub use hash::{hash160, hash256, sha256};
pub use network::Network;
