//! Repacking between 8-bit bytes and 5-bit groups.
//!
//! Five bytes (40 bits) map to exactly eight groups, so both directions work
//! on whole 40-bit chunks with fixed shift/mask expressions:
//!
//! ```text
//! bytes:  01110101|00011110|01110110|11101000|00011001
//! groups: 01110|10100|01111|00111|01101|11010|00000|11001
//! ```
//!
//! A trailing partial chunk is handled by zero-filling it to a full chunk,
//! converting, and keeping only the meaningful prefix. The lengths line up as
//! follows:
//!
//! | bytes | groups | padding bits |
//! |-------|--------|--------------|
//! | 1     | 2      | 2            |
//! | 2     | 4      | 4            |
//! | 3     | 5      | 1            |
//! | 4     | 7      | 3            |

use alloc::vec::Vec;
use crate::error::ConvertError;

/// Number of groups produced by a trailing chunk of `n` bytes (index `n`).
const TAIL_GROUPS: [usize; 5] = [0, 2, 4, 5, 7];

/// Number of bytes recovered from a trailing chunk of `n` groups, if `n` is a
/// length that a whole number of bytes can produce.
fn tail_bytes(groups: usize) -> Option<usize> {
    TAIL_GROUPS.iter().position(|&g| g == groups)
}

/// Number of 5-bit groups needed to carry `byte_len` bytes.
pub fn group_count(byte_len: usize) -> usize {
    byte_len / 5 * 8 + TAIL_GROUPS[byte_len % 5]
}

#[inline]
fn chunk_to_groups(b: &[u8; 5]) -> [u8; 8] {
    [
        b[0] >> 3,
        ((b[0] & 0x07) << 2) | (b[1] >> 6),
        (b[1] >> 1) & 0x1f,
        ((b[1] & 0x01) << 4) | (b[2] >> 4),
        ((b[2] & 0x0f) << 1) | (b[3] >> 7),
        (b[3] >> 2) & 0x1f,
        ((b[3] & 0x03) << 3) | (b[4] >> 5),
        b[4] & 0x1f,
    ]
}

#[inline]
fn chunk_to_bytes(g: &[u8; 8]) -> [u8; 5] {
    // Shifts on u8 drop the high bits, leaving exactly the 8 bits per byte.
    [
        (g[0] << 3) | (g[1] >> 2),
        (g[1] << 6) | (g[2] << 1) | (g[3] >> 4),
        (g[3] << 4) | (g[4] >> 1),
        (g[4] << 7) | (g[5] << 2) | (g[6] >> 3),
        (g[6] << 5) | g[7],
    ]
}

/// Convert bytes into 5-bit groups, zero-padding the low bits of the final
/// group when the bit count is not a multiple of 5.
pub fn bytes_to_groups(bytes: &[u8]) -> Vec<u8> {
    let mut groups = Vec::with_capacity(group_count(bytes.len()));

    let mut chunks = bytes.chunks_exact(5);
    for chunk in &mut chunks {
        let mut block = [0u8; 5];
        block.copy_from_slice(chunk);
        groups.extend_from_slice(&chunk_to_groups(&block));
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut block = [0u8; 5];
        block[..tail.len()].copy_from_slice(tail);
        groups.extend_from_slice(&chunk_to_groups(&block)[..TAIL_GROUPS[tail.len()]]);
    }

    groups
}

/// Convert 5-bit groups back into bytes.
///
/// Fails if the trailing partial chunk has a length no byte count maps to, or
/// if the bits past the last byte boundary are not all zero.
///
/// Every group must be in `0..=31`; larger values are a caller bug.
pub fn groups_to_bytes(groups: &[u8]) -> Result<Vec<u8>, ConvertError> {
    debug_assert!(groups.iter().all(|&g| g < 32), "5-bit group out of range");

    let tail = groups.len() % 8;
    let tail_len = tail_bytes(tail).ok_or(ConvertError::InvalidGroupCount(groups.len()))?;
    let mut bytes = Vec::with_capacity(groups.len() / 8 * 5 + tail_len);

    let mut chunks = groups.chunks_exact(8);
    for chunk in &mut chunks {
        let mut block = [0u8; 8];
        block.copy_from_slice(chunk);
        bytes.extend_from_slice(&chunk_to_bytes(&block));
    }

    let rest = chunks.remainder();
    if !rest.is_empty() {
        let mut block = [0u8; 8];
        block[..rest.len()].copy_from_slice(rest);
        let decoded = chunk_to_bytes(&block);
        // Zero-filled groups contribute nothing, so anything set past the
        // byte boundary came from the padding bits of the input.
        if decoded[tail_len..].iter().any(|&b| b != 0) {
            return Err(ConvertError::MalformedPadding);
        }
        bytes.extend_from_slice(&decoded[..tail_len]);
    }

    Ok(bytes)
}
