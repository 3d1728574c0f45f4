use alloc::vec::Vec;
use core::ops::Index;

/// An immutable, ordered, indexable buffer of UTF-16 code units.
///
/// The length is fixed at construction and the contents are never mutated;
/// the decoder traverses the buffer with a forward cursor and nothing else
/// touches it. Construction performs no validation — ill-formed sequences
/// are rejected later, by [`decode`](crate::decode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitBuffer {
    units: Vec<u16>,
}

impl UnitBuffer {
    /// Materializes `text`'s native UTF-16 representation, one element per
    /// code unit, in original order. Cannot fail: `&str` is always
    /// well-formed.
    #[must_use]
    pub fn from_str(text: &str) -> Self {
        Self {
            units: text.encode_utf16().collect(),
        }
    }

    /// Wraps an existing unit sequence verbatim, including any lone or
    /// mismatched surrogates. This is the only constructor through which
    /// ill-formed input can enter the pipeline.
    #[must_use]
    pub fn from_units(units: impl Into<Vec<u16>>) -> Self {
        Self {
            units: units.into(),
        }
    }

    /// Number of code units in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the buffer holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The unit at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u16> {
        self.units.get(index).copied()
    }

    /// The underlying units as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u16] {
        &self.units
    }

    /// Iterates over the units in order.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.units.iter().copied()
    }
}

impl Index<usize> for UnitBuffer {
    type Output = u16;

    fn index(&self, index: usize) -> &u16 {
        &self.units[index]
    }
}

impl From<&str> for UnitBuffer {
    fn from(text: &str) -> Self {
        Self::from_str(text)
    }
}

impl From<Vec<u16>> for UnitBuffer {
    fn from(units: Vec<u16>) -> Self {
        Self::from_units(units)
    }
}

impl From<&[u16]> for UnitBuffer {
    fn from(units: &[u16]) -> Self {
        Self::from_units(units)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::UnitBuffer;

    #[test]
    fn bmp_text_is_one_unit_per_char() {
        let buf = UnitBuffer::from_str("aø");
        assert_eq!(buf.as_slice(), &[0x0061, 0x00F8]);
    }

    #[test]
    fn astral_char_becomes_surrogate_pair() {
        let buf = UnitBuffer::from_str("😀");
        assert_eq!(buf.as_slice(), &[0xD83D, 0xDE00]);
    }

    #[test]
    fn raw_units_kept_verbatim_without_validation() {
        // A lone high surrogate must survive construction untouched.
        let buf = UnitBuffer::from_units(vec![0xD800, 0x0061]);
        assert_eq!(buf.len(), 2);
        assert_eq!(buf[0], 0xD800);
        assert_eq!(buf.get(2), None);
    }

    #[test]
    fn empty_string_yields_empty_buffer() {
        assert!(UnitBuffer::from_str("").is_empty());
    }
}
