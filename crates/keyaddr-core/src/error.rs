//! Error types for Bech32 encoding, decoding and bit-group conversion.

use core::fmt;

/// Errors returned by [`crate::bech32::encode`].
///
/// Every variant is detected before any output is produced; no partial
/// address is ever returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// An argument is outside its allowed range (witness version, payload
    /// length or an empty human-readable prefix).
    InvalidArgument {
        /// Which argument was rejected.
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// The human-readable prefix contains a character outside `!`..=`~`
    /// or an uppercase letter.
    InvalidPrefix(char),
    /// The encoded string would exceed the maximum length.
    TooLong {
        /// Length the encoded string would have.
        length: usize,
        /// Maximum allowed length (90).
        max: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::InvalidArgument { name, value } => {
                write!(f, "invalid {}: {}", name, value)
            }
            EncodeError::InvalidPrefix(c) => {
                write!(f, "invalid human-readable prefix character: {:?}", c)
            }
            EncodeError::TooLong { length, max } => {
                write!(f, "encoded address too long: {} characters (max {})", length, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {}

/// Errors converting 5-bit groups back into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The trailing partial chunk has 1, 3 or 6 groups, which cannot come
    /// from a whole number of bytes.
    InvalidGroupCount(usize),
    /// The bits discarded past the last byte boundary are not zero.
    MalformedPadding,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidGroupCount(n) => write!(f, "invalid 5-bit group count: {}", n),
            ConvertError::MalformedPadding => write!(f, "non-zero padding bits"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConvertError {}

/// Errors returned by [`crate::bech32::decode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The string is longer than 90 characters.
    TooLong(usize),
    /// The string mixes upper- and lowercase characters.
    MixedCase,
    /// No `1` separator, or not enough characters after it.
    MissingSeparator,
    /// The human-readable prefix is empty or contains a disallowed character.
    InvalidPrefix,
    /// A data character is not in the Bech32 alphabet.
    InvalidChar(char),
    /// The checksum matches neither Bech32 nor Bech32m.
    InvalidChecksum,
    /// The witness version is above 16.
    InvalidWitnessVersion(u8),
    /// The witness program is missing, shorter than 2 or longer than 40 bytes.
    InvalidProgramLength(usize),
    /// The data part could not be converted back into bytes.
    Convert(ConvertError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TooLong(len) => write!(f, "bech32 string too long: {} characters", len),
            DecodeError::MixedCase => write!(f, "bech32 string mixes upper and lower case"),
            DecodeError::MissingSeparator => write!(f, "missing or misplaced separator"),
            DecodeError::InvalidPrefix => write!(f, "invalid human-readable prefix"),
            DecodeError::InvalidChar(c) => write!(f, "invalid bech32 character: {:?}", c),
            DecodeError::InvalidChecksum => write!(f, "invalid checksum"),
            DecodeError::InvalidWitnessVersion(v) => write!(f, "invalid witness version: {}", v),
            DecodeError::InvalidProgramLength(len) => {
                write!(f, "invalid witness program length: {}", len)
            }
            DecodeError::Convert(e) => write!(f, "{}", e),
        }
    }
}

impl From<ConvertError> for DecodeError {
    fn from(e: ConvertError) -> Self {
        DecodeError::Convert(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Convert(e) => Some(e),
            _ => None,
        }
    }
}
