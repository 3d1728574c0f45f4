use thiserror::Error;

/// Failures raised while transcoding UTF-16 code units to UTF-8 bytes.
///
/// All variants are unrecoverable for the current call: the transcoder
/// aborts and surfaces the error, never substituting a replacement
/// character or skipping units. Each variant carries enough to locate the
/// offender in the input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TranscodeError {
    /// A high surrogate was not followed by a low surrogate, either because
    /// the input ended or because the next unit is outside `0xDC00..=0xDFFF`.
    #[error("high surrogate {unit:#06X} at unit index {index} is not followed by a low surrogate")]
    InvalidSurrogatePair {
        /// Position of the offending high surrogate in the unit sequence.
        index: usize,
        /// The high surrogate's value.
        unit: u16,
    },

    /// A low surrogate appeared without a preceding unconsumed high
    /// surrogate.
    #[error("unexpected low surrogate {unit:#06X} at unit index {index}")]
    UnexpectedLowSurrogate {
        /// Position of the offending low surrogate in the unit sequence.
        index: usize,
        /// The low surrogate's value.
        unit: u16,
    },

    /// A value that is not a Unicode scalar value reached the encoder:
    /// above `0x10FFFF`, or a residual surrogate in `0xD800..=0xDFFF`.
    #[error("code point {value:#X} is not a Unicode scalar value")]
    CodePointOutOfRange {
        /// The offending value.
        value: u32,
    },
}
