//! Unicode scalar values → UTF-8 bytes, per RFC 3629.
//!
//! Each code point maps independently to its minimal length class; the
//! match arms are non-overlapping, so overlong encodings are impossible by
//! construction. Anything that is not a Unicode scalar value (surrogates
//! included) is rejected, never masked.

use alloc::vec::Vec;

use crate::error::TranscodeError;

const CONTINUATION: u8 = 0x80;
const PAYLOAD_MASK: u32 = 0x3F;

/// Encodes an ordered sequence of code points as UTF-8 bytes.
///
/// The traversal covers exactly the input slice: no sentinel byte is ever
/// appended, and the returned vector's length equals the bytes written
/// (the worst-case pre-allocation is internal only).
///
/// # Errors
///
/// [`TranscodeError::CodePointOutOfRange`] if a value above `0x10FFFF` or a
/// residual surrogate in `0xD800..=0xDFFF` is encountered. The whole call
/// fails; nothing is dropped or substituted.
#[expect(clippy::cast_possible_truncation)]
pub fn encode(points: &[u32]) -> Result<Vec<u8>, TranscodeError> {
    let mut bytes = Vec::with_capacity(points.len() * 4);

    for &point in points {
        match point {
            0x0000..=0x007F => bytes.push(point as u8),
            0x0080..=0x07FF => {
                bytes.push(0xC0 | (point >> 6) as u8);
                bytes.push(CONTINUATION | (point & PAYLOAD_MASK) as u8);
            }
            0x0800..=0xD7FF | 0xE000..=0xFFFF => {
                bytes.push(0xE0 | (point >> 12) as u8);
                bytes.push(CONTINUATION | ((point >> 6) & PAYLOAD_MASK) as u8);
                bytes.push(CONTINUATION | (point & PAYLOAD_MASK) as u8);
            }
            0x1_0000..=0x10_FFFF => {
                bytes.push(0xF0 | (point >> 18) as u8);
                bytes.push(CONTINUATION | ((point >> 12) & PAYLOAD_MASK) as u8);
                bytes.push(CONTINUATION | ((point >> 6) & PAYLOAD_MASK) as u8);
                bytes.push(CONTINUATION | (point & PAYLOAD_MASK) as u8);
            }
            // Surrogates and values past the Unicode ceiling.
            _ => return Err(TranscodeError::CodePointOutOfRange { value: point }),
        }
    }

    Ok(bytes)
}
