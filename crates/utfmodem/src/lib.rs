//! A strict UTF-16 → UTF-8 transcoder.
//!
//! The pipeline has three stages composed strictly forward:
//!
//! 1. [`UnitBuffer`] materializes a string's UTF-16 code units into an
//!    immutable, indexable buffer.
//! 2. [`decode`] walks the buffer left to right, resolving surrogate pairs
//!    into Unicode scalar values and rejecting ill-formed sequences.
//! 3. [`encode`] re-encodes the scalar values as UTF-8 bytes, one 1–4 byte
//!    sequence per code point.
//!
//! Malformed input is a hard failure: no partial output is returned and no
//! replacement character is ever substituted. Each [`TranscodeError`] names
//! the offending unit index or code point value.
//!
//! ```
//! let bytes = utfmodem::transcode("aø😀")?;
//! assert_eq!(bytes, "aø😀".as_bytes());
//! # Ok::<(), utfmodem::TranscodeError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod error;
mod units;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use decoder::decode;
pub use encoder::encode;
pub use error::TranscodeError;
pub use units::UnitBuffer;

/// Transcodes `input` into UTF-8 bytes via its UTF-16 representation.
///
/// Because `&str` is always well-formed, this entry point cannot encounter
/// lone surrogates; it exists to exercise the full pipeline on ordinary
/// strings. Raw unit sequences go through [`transcode_units`].
///
/// # Errors
///
/// Returns a [`TranscodeError`] if any stage rejects the input.
pub fn transcode(input: &str) -> Result<Vec<u8>, TranscodeError> {
    encode(&decode(&UnitBuffer::from_str(input))?)
}

/// Transcodes a raw UTF-16 code unit sequence into UTF-8 bytes.
///
/// This is the path by which potentially ill-formed input (lone or
/// mismatched surrogates) enters the pipeline.
///
/// # Errors
///
/// Returns a [`TranscodeError`] naming the offending unit index or code
/// point value. The whole call fails; no prefix of the output is returned.
pub fn transcode_units(units: &[u16]) -> Result<Vec<u8>, TranscodeError> {
    encode(&decode(&UnitBuffer::from_units(units))?)
}
