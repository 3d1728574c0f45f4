//! UTF-16 code unit sequences → Unicode scalar values.
//!
//! The decoder walks the unit buffer with a single forward cursor and no
//! backtracking. Surrogate classification is inclusive at all four range
//! boundaries (0xD800, 0xDBFF, 0xDC00, 0xDFFF); ill-formed sequences fail
//! hard with the offending unit's index, never with lossy substitution.

use alloc::vec::Vec;

use crate::{error::TranscodeError, units::UnitBuffer};

const HIGH_SURROGATE_MIN: u16 = 0xD800;
const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
const LOW_SURROGATE_MIN: u16 = 0xDC00;
const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// Offset added to the combined 20-bit surrogate payload.
const SUPPLEMENTARY_BASE: u32 = 0x10000;

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&unit)
}

/// Combine a high/low surrogate pair into its supplementary-plane scalar.
///
/// The `+ 0x10000` bias applies to the full combined 20-bit value, not to
/// the low contribution alone.
#[inline]
fn combine_pair(high: u16, low: u16) -> u32 {
    ((u32::from(high & 0x3FF) << 10) | u32::from(low & 0x3FF)) + SUPPLEMENTARY_BASE
}

/// Decodes a buffer of UTF-16 code units into Unicode scalar values.
///
/// Units outside the surrogate range pass through unchanged; a high
/// surrogate must be immediately followed by a low surrogate, and the pair
/// collapses into one code point in `0x10000..=0x10FFFF`. Output order
/// matches input order, and the output never contains surrogate values.
///
/// # Errors
///
/// - [`TranscodeError::InvalidSurrogatePair`] when a high surrogate is at
///   the end of input or followed by anything but a low surrogate.
/// - [`TranscodeError::UnexpectedLowSurrogate`] when a low surrogate is
///   reached directly by the cursor.
pub fn decode(units: &UnitBuffer) -> Result<Vec<u32>, TranscodeError> {
    // Worst case one code point per unit; pairs only shrink the output.
    let mut points = Vec::with_capacity(units.len());
    let mut cursor = 0;

    while cursor < units.len() {
        let w1 = units[cursor];
        if is_high_surrogate(w1) {
            match units.get(cursor + 1) {
                Some(w2) if is_low_surrogate(w2) => {
                    points.push(combine_pair(w1, w2));
                    cursor += 2;
                }
                _ => {
                    return Err(TranscodeError::InvalidSurrogatePair {
                        index: cursor,
                        unit: w1,
                    });
                }
            }
        } else if is_low_surrogate(w1) {
            return Err(TranscodeError::UnexpectedLowSurrogate {
                index: cursor,
                unit: w1,
            });
        } else {
            points.push(u32::from(w1));
            cursor += 1;
        }
    }

    Ok(points)
}
