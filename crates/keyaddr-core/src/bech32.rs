//! Bech32 / Bech32m segwit encoding (BIP-173, BIP-350).
//!
//! An encoded string is laid out as:
//!
//! ```text
//! <hrp> 1 <witness version> <program groups...> <6 checksum symbols>
//! ```
//!
//! [`encode`] takes the checksum [`Variant`] explicitly. [`encode_segwit`]
//! picks it from the witness version following BIP-350.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use crate::checksum::{Polymod, Variant, CHECKSUM_LENGTH};
use crate::convert::{bytes_to_groups, group_count, groups_to_bytes};
use crate::error::{DecodeError, EncodeError};

/// The 32-symbol alphabet. Index = 5-bit group value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between the human-readable prefix and the data part.
pub const SEPARATOR: char = '1';

/// Maximum length of an encoded string.
pub const MAX_LENGTH: usize = 90;

/// Highest witness version.
pub const MAX_WITNESS_VERSION: u8 = 16;

/// Minimum witness program length in bytes.
pub const MIN_PROGRAM_LENGTH: usize = 2;

/// Maximum witness program length in bytes.
pub const MAX_PROGRAM_LENGTH: usize = 40;

/// Characters allowed in a human-readable prefix by the encoder: printable
/// ASCII without uppercase letters.
#[inline]
fn is_valid_hrp_char(c: char) -> bool {
    ('!'..='~').contains(&c) && !c.is_ascii_uppercase()
}

/// Total length of the string [`encode`] produces for these input sizes.
pub fn encoded_length(hrp_len: usize, payload_len: usize) -> usize {
    hrp_len + 1 + 1 + group_count(payload_len) + CHECKSUM_LENGTH
}

/// Encode a witness version and program under the given prefix.
///
/// Checks run in order and the first failure is returned:
/// 1. `version <= 16`, `2 <= payload.len() <= 40` and a non-empty prefix,
///    otherwise [`EncodeError::InvalidArgument`].
/// 2. Every prefix character is in `!`..=`~` and not uppercase, otherwise
///    [`EncodeError::InvalidPrefix`].
/// 3. The encoded string fits in 90 characters, otherwise
///    [`EncodeError::TooLong`].
///
/// # Example
///
/// ```
/// use keyaddr_core::bech32::encode;
/// use keyaddr_core::checksum::Variant;
///
/// let program = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
/// let address = encode(0, "bc", &program, Variant::Bech32).unwrap();
/// assert_eq!(address, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");
/// ```
pub fn encode(
    version: u8,
    hrp: &str,
    payload: &[u8],
    variant: Variant,
) -> Result<String, EncodeError> {
    if version > MAX_WITNESS_VERSION {
        return Err(EncodeError::InvalidArgument {
            name: "witness version",
            value: usize::from(version),
        });
    }
    if !(MIN_PROGRAM_LENGTH..=MAX_PROGRAM_LENGTH).contains(&payload.len()) {
        return Err(EncodeError::InvalidArgument {
            name: "payload length",
            value: payload.len(),
        });
    }
    if hrp.is_empty() {
        return Err(EncodeError::InvalidArgument {
            name: "prefix length",
            value: 0,
        });
    }

    if let Some(c) = hrp.chars().find(|&c| !is_valid_hrp_char(c)) {
        return Err(EncodeError::InvalidPrefix(c));
    }

    let length = encoded_length(hrp.len(), payload.len());
    if length > MAX_LENGTH {
        return Err(EncodeError::TooLong {
            length,
            max: MAX_LENGTH,
        });
    }

    let mut checksum = Polymod::new();
    checksum.fold_hrp(hrp.as_bytes());

    let mut output = String::with_capacity(length);
    output.push_str(hrp);
    output.push(SEPARATOR);

    let mut groups = Vec::with_capacity(1 + group_count(payload.len()));
    groups.push(version);
    groups.extend(bytes_to_groups(payload));

    for &group in &groups {
        checksum.fold(group);
        output.push(char::from(CHARSET[usize::from(group)]));
    }

    for symbol in checksum.finish(variant) {
        output.push(char::from(CHARSET[usize::from(symbol)]));
    }

    debug_assert_eq!(output.len(), length);
    Ok(output)
}

/// Encode a segwit address, using Bech32 for witness version 0 and Bech32m
/// for versions 1 to 16.
pub fn encode_segwit(version: u8, hrp: &str, program: &[u8]) -> Result<String, EncodeError> {
    encode(version, hrp, program, Variant::for_witness_version(version))
}

/// A decoded segwit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The human-readable prefix, lowercased.
    pub hrp: String,
    /// The witness version (first data symbol).
    pub version: u8,
    /// The witness program.
    pub program: Vec<u8>,
    /// The checksum variant the string verified against.
    pub variant: Variant,
}

/// Decode and verify a segwit Bech32 or Bech32m string.
///
/// Accepts all-lowercase or all-uppercase input. The variant is reported,
/// not checked against the witness version.
pub fn decode(s: &str) -> Result<Decoded, DecodeError> {
    if s.len() > MAX_LENGTH {
        return Err(DecodeError::TooLong(s.len()));
    }

    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(DecodeError::MixedCase);
    }
    let lower = s.to_ascii_lowercase();

    let sep = lower.rfind(SEPARATOR).ok_or(DecodeError::MissingSeparator)?;
    if sep == 0 {
        return Err(DecodeError::InvalidPrefix);
    }
    if sep + 1 + CHECKSUM_LENGTH > lower.len() {
        return Err(DecodeError::MissingSeparator);
    }

    let hrp = &lower[..sep];
    if !hrp.chars().all(is_valid_hrp_char) {
        return Err(DecodeError::InvalidPrefix);
    }

    let mut values = Vec::with_capacity(lower.len() - sep - 1);
    for c in lower[sep + 1..].chars() {
        let value = CHARSET
            .iter()
            .position(|&x| char::from(x) == c)
            .ok_or(DecodeError::InvalidChar(c))?;
        // CHARSET has 32 entries.
        values.push(value as u8);
    }

    let mut checksum = Polymod::new();
    checksum.fold_hrp(hrp.as_bytes());
    for &value in &values {
        checksum.fold(value);
    }
    let variant =
        Variant::from_residue(checksum.residue()).ok_or(DecodeError::InvalidChecksum)?;

    values.truncate(values.len() - CHECKSUM_LENGTH);
    let (&version, groups) = values
        .split_first()
        .ok_or(DecodeError::InvalidProgramLength(0))?;
    if version > MAX_WITNESS_VERSION {
        return Err(DecodeError::InvalidWitnessVersion(version));
    }

    let program = groups_to_bytes(groups)?;
    if !(MIN_PROGRAM_LENGTH..=MAX_PROGRAM_LENGTH).contains(&program.len()) {
        return Err(DecodeError::InvalidProgramLength(program.len()));
    }

    Ok(Decoded {
        hrp: hrp.to_string(),
        version,
        program,
        variant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use alloc::format;
    use alloc::vec;

    const P2WPKH_PROGRAM: &str = "751e76e8199196d454941c45d1b3a323f1433bd6";

    fn program() -> Vec<u8> {
        hex::decode(P2WPKH_PROGRAM).unwrap()
    }

    #[test]
    fn test_known_vector() {
        let address = encode(0, "bc", &program(), Variant::Bech32).unwrap();
        assert_eq!(address, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

        let address = encode(0, "tb", &program(), Variant::Bech32).unwrap();
        assert_eq!(address, "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx");
    }

    #[test]
    fn test_variant_is_explicit() {
        let short = hex::decode("751e76e8199196d454941c45d1b3a323").unwrap();
        assert_eq!(
            encode(2, "bc", &short, Variant::Bech32).unwrap(),
            "bc1zw508d6qejxtdg4y5r3zarvaryvg6kdaj"
        );
        assert_eq!(
            encode(2, "bc", &short, Variant::Bech32m).unwrap(),
            "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs"
        );
        assert_eq!(
            encode_segwit(2, "bc", &short).unwrap(),
            "bc1zw508d6qejxtdg4y5r3zarvaryvaxxpcs"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = encode(0, "bc", &program(), Variant::Bech32).unwrap();
        let b = encode(0, "bc", &program(), Variant::Bech32).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_arguments() {
        assert_eq!(
            encode(17, "bc", &program(), Variant::Bech32m),
            Err(EncodeError::InvalidArgument { name: "witness version", value: 17 })
        );
        assert_eq!(
            encode(0, "bc", &[0x00], Variant::Bech32),
            Err(EncodeError::InvalidArgument { name: "payload length", value: 1 })
        );
        assert_eq!(
            encode(0, "bc", &[0x00; 41], Variant::Bech32),
            Err(EncodeError::InvalidArgument { name: "payload length", value: 41 })
        );
        assert_eq!(
            encode(0, "", &program(), Variant::Bech32),
            Err(EncodeError::InvalidArgument { name: "prefix length", value: 0 })
        );
    }

    #[test]
    fn test_invalid_prefix() {
        assert_eq!(
            encode(0, "Bc", &program(), Variant::Bech32),
            Err(EncodeError::InvalidPrefix('B'))
        );
        assert_eq!(
            encode(0, "b c", &program(), Variant::Bech32),
            Err(EncodeError::InvalidPrefix(' '))
        );
        assert_eq!(
            encode(0, "b\u{7f}", &program(), Variant::Bech32),
            Err(EncodeError::InvalidPrefix('\u{7f}'))
        );
        assert_eq!(
            encode(0, "bé", &program(), Variant::Bech32),
            Err(EncodeError::InvalidPrefix('é'))
        );
    }

    #[test]
    fn test_argument_checked_before_prefix() {
        assert!(matches!(
            encode(0, "BC", &[0x00], Variant::Bech32),
            Err(EncodeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_length_boundary() {
        // 18 + 1 + 1 + 64 + 6 = 90
        let hrp = "abcdefghijklmnopqr";
        let payload = [0xa5; 40];
        let address = encode(1, hrp, &payload, Variant::Bech32m).unwrap();
        assert_eq!(address.len(), MAX_LENGTH);

        let decoded = decode(&address).unwrap();
        assert_eq!(decoded.hrp, hrp);
        assert_eq!(decoded.program, payload.to_vec());

        let hrp = "abcdefghijklmnopqrs";
        assert_eq!(
            encode(1, hrp, &payload, Variant::Bech32m),
            Err(EncodeError::TooLong { length: 91, max: 90 })
        );
    }

    #[test]
    fn test_round_trip() {
        let mut seed: u32 = 0x1234_5678;
        let mut next = || {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (seed >> 16) as u8
        };

        for version in 0..=MAX_WITNESS_VERSION {
            for len in MIN_PROGRAM_LENGTH..=MAX_PROGRAM_LENGTH {
                let payload: Vec<u8> = (0..len).map(|_| next()).collect();
                for hrp in ["bc", "tb", "bcrt"] {
                    for variant in [Variant::Bech32, Variant::Bech32m] {
                        let encoded = encode(version, hrp, &payload, variant).unwrap();
                        assert_eq!(encoded.len(), encoded_length(hrp.len(), len));

                        let decoded = decode(&encoded).unwrap();
                        assert_eq!(decoded.hrp, hrp);
                        assert_eq!(decoded.version, version);
                        assert_eq!(decoded.program, payload);
                        assert_eq!(decoded.variant, variant);
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_substitution_detected() {
        let address = encode(0, "bc", &program(), Variant::Bech32).unwrap();
        let sep = address.rfind(SEPARATOR).unwrap();

        for (i, original) in address.char_indices() {
            if i == sep {
                continue;
            }
            let replacements: Vec<char> = if i < sep {
                ('a'..='z').collect()
            } else {
                CHARSET.iter().map(|&b| char::from(b)).collect()
            };
            for c in replacements {
                if c == original {
                    continue;
                }
                let mut mutated = String::with_capacity(address.len());
                mutated.push_str(&address[..i]);
                mutated.push(c);
                mutated.push_str(&address[i + 1..]);
                assert!(
                    decode(&mutated).is_err(),
                    "mutation at {} to {:?} not detected",
                    i,
                    c
                );
            }
        }
    }

    #[test]
    fn test_decode_uppercase() {
        let decoded = decode("BC1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4").unwrap();
        assert_eq!(decoded.hrp, "bc");
        assert_eq!(decoded.version, 0);
        assert_eq!(decoded.program, program());
        assert_eq!(decoded.variant, Variant::Bech32);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            decode("bc1QW508D6QEJXTDG4Y5R3ZARVARY0C5XW7KV8F3T4"),
            Err(DecodeError::MixedCase)
        );
        assert_eq!(decode("bcqw508d6qe"), Err(DecodeError::MissingSeparator));
        assert_eq!(decode("1qw508d6qejxtdg"), Err(DecodeError::InvalidPrefix));
        assert_eq!(
            decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3tb"),
            Err(DecodeError::InvalidChar('b'))
        );
        assert_eq!(
            decode("bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t5"),
            Err(DecodeError::InvalidChecksum)
        );
        let long = format!("bc1{}", "q".repeat(88));
        assert_eq!(decode(&long), Err(DecodeError::TooLong(91)));
    }

    #[test]
    fn test_decode_rejects_bad_padding() {
        // 2-byte tail whose last group carries non-zero padding bits.
        let mut checksum = Polymod::new();
        checksum.fold_hrp(b"bc");
        let groups = vec![0u8, 31, 31, 31, 1];
        let mut s = String::from("bc1");
        for &g in &groups {
            checksum.fold(g);
            s.push(char::from(CHARSET[usize::from(g)]));
        }
        for symbol in checksum.finish(Variant::Bech32) {
            s.push(char::from(CHARSET[usize::from(symbol)]));
        }
        assert_eq!(decode(&s), Err(DecodeError::Convert(ConvertError::MalformedPadding)));
    }
}
