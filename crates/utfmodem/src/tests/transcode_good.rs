use alloc::{vec, vec::Vec};

use rstest::rstest;

use crate::{UnitBuffer, decode, encode, transcode, transcode_units};

#[test]
fn ascii_letter() {
    assert_eq!(transcode("a").unwrap(), vec![0x61]);
}

#[test]
fn latin_small_o_with_stroke() {
    assert_eq!(transcode("ø").unwrap(), vec![0xC3, 0xB8]);
}

#[test]
fn grinning_face_via_string_and_via_units() {
    let expected = vec![0xF0, 0x9F, 0x98, 0x80];
    assert_eq!(transcode("😀").unwrap(), expected);
    assert_eq!(transcode_units(&[0xD83D, 0xDE00]).unwrap(), expected);
}

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(transcode("").unwrap(), Vec::<u8>::new());
    assert_eq!(transcode_units(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn mixed_script_text_matches_platform_utf8() {
    for text in ["hello", "héllo wörld", "日本語", "aø😀b", "\u{0}\u{7F}\u{80}"] {
        assert_eq!(transcode(text).unwrap(), text.as_bytes(), "{text:?}");
    }
}

#[rstest]
#[case(0x7F, vec![0x7F])]
#[case(0x80, vec![0xC2, 0x80])]
#[case(0x7FF, vec![0xDF, 0xBF])]
#[case(0x800, vec![0xE0, 0xA0, 0x80])]
#[case(0xFFFF, vec![0xEF, 0xBF, 0xBF])]
#[case(0x1_0000, vec![0xF0, 0x90, 0x80, 0x80])]
#[case(0x10_FFFF, vec![0xF4, 0x8F, 0xBF, 0xBF])]
fn length_class_boundaries(#[case] point: u32, #[case] expected: Vec<u8>) {
    assert_eq!(encode(&[point]).unwrap(), expected);
}

#[rstest]
#[case(&[0xD800, 0xDC00], 0x1_0000)]
#[case(&[0xDBFF, 0xDFFF], 0x10_FFFF)]
#[case(&[0xD83D, 0xDE00], 0x1F600)]
fn extreme_surrogate_pairs_decode_and_reencode(#[case] units: &[u16], #[case] point: u32) {
    let points = decode(&UnitBuffer::from_units(units)).unwrap();
    assert_eq!(points, vec![point]);
    assert_eq!(encode(&points).unwrap().len(), 4);
}

#[test]
fn surrogate_range_neighbors_transcode_as_bmp() {
    assert_eq!(transcode_units(&[0xD7FF]).unwrap(), "\u{D7FF}".as_bytes());
    assert_eq!(transcode_units(&[0xE000]).unwrap(), "\u{E000}".as_bytes());
}
