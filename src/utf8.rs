//! Conversions between UTF-8 byte strings and packed code point sequences.

use crate::code_point_ty::CodePoint;
use crate::error::{Error, Result};

pub(crate) const MAX_BYTE_COUNT: usize = 4;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
// FSS-UTF five and six byte leads, never legal in UTF-8
const TAG_FIVE_B: u8 = 0b1111_1000;

const CONT_PREFIX_MASK: u8 = 0b1100_0000;
const CONT_VALUE_MASK: u8 = 0b0011_1111;

pub(crate) fn len_from_first_byte(v: u8) -> Option<usize> {
    if v < 128 {
        Some(1)
    } else if v & TAG_FIVE_B == TAG_FIVE_B {
        None
    } else if v & TAG_FOUR_B == TAG_FOUR_B {
        Some(4)
    } else if v & TAG_THREE_B == TAG_THREE_B {
        Some(3)
    } else if v & TAG_TWO_B == TAG_TWO_B {
        Some(2)
    } else {
        None
    }
}

pub(crate) fn is_cont_byte(v: u8) -> bool {
    (v & CONT_PREFIX_MASK) == TAG_CONT
}

/// Checks one complete sequence, its length already taken from the lead byte.
fn check_sequence(seq: &[u8]) -> std::result::Result<(), &'static str> {
    match *seq {
        [0] => Err("NUL byte"),
        [a] => {
            debug_assert!(a < 0x80);
            Ok(())
        }
        [a, b] => {
            if !is_cont_byte(b) {
                return Err("invalid continuation byte");
            }
            if a < 0xC2 {
                return Err("overlong encoding");
            }
            Ok(())
        }
        [a, b, c] => {
            if !is_cont_byte(b) || !is_cont_byte(c) {
                return Err("invalid continuation byte");
            }
            match a {
                0xE0 if b < 0xA0 => Err("overlong encoding"),
                0xED if b > 0x9F => Err("surrogate code point"),
                _ => Ok(()),
            }
        }
        [a, b, c, d] => {
            if !is_cont_byte(b) || !is_cont_byte(c) || !is_cont_byte(d) {
                return Err("invalid continuation byte");
            }
            match a {
                0xF0 if b < 0x90 => Err("overlong encoding"),
                0xF4 if b > 0x8F => Err("code point above U+10FFFF"),
                0xF5..=0xF7 => Err("code point above U+10FFFF"),
                _ => Ok(()),
            }
        }
        _ => Err("invalid sequence length"),
    }
}

/// Splits the next legal sequence off the front of `bytes`.
///
/// `offset` is only used for error reporting.
fn split_sequence(bytes: &[u8], offset: usize) -> Result<(&[u8], &[u8])> {
    let malformed = |reason| Error::MalformedInput { offset, reason };
    let head = match bytes.first() {
        Some(&head) => head,
        None => return Err(malformed("unexpected end of input")),
    };
    let len = match len_from_first_byte(head) {
        Some(len) => len,
        None if is_cont_byte(head) => return Err(malformed("unexpected continuation byte")),
        None => return Err(malformed("invalid lead byte")),
    };
    if bytes.len() < len {
        return Err(malformed("truncated sequence"));
    }
    let (seq, rest) = bytes.split_at(len);
    check_sequence(seq).map_err(malformed)?;
    Ok((seq, rest))
}

/// Packs a byte sequence big-endian into the low bytes of a `u32`.
#[inline]
pub(crate) fn pack_bytes(seq: &[u8]) -> u32 {
    seq.iter().fold(0, |acc, &b| (acc << 8) | b as u32)
}

#[inline]
fn decode_value(h: u8, cont: &[u8]) -> u32 {
    let mut v = (h & (0x7F >> cont.len())) as u32;
    for c in cont.iter().copied() {
        v = (v << 6) | (c & CONT_VALUE_MASK) as u32;
    }
    v
}

/// Returns the significant bytes of a packed value, i.e. without its leading
/// zero bytes.
pub(crate) fn significant_bytes(code: u32) -> ([u8; MAX_BYTE_COUNT], usize) {
    let bytes = code.to_be_bytes();
    let skip = (code.leading_zeros() / 8) as usize;
    (bytes, skip)
}

/// Whether `code` holds exactly one legal, non-NUL UTF-8 sequence.
pub(crate) fn is_packed_scalar(code: u32) -> bool {
    let (bytes, skip) = significant_bytes(code);
    match split_sequence(&bytes[skip..], 0) {
        Ok((_, rest)) => rest.is_empty(),
        Err(_) => false,
    }
}

/// Recovers the scalar a packed value was built from.
pub(crate) fn unpack_char(code: u32) -> Option<char> {
    let (bytes, skip) = significant_bytes(code);
    let (seq, rest) = split_sequence(&bytes[skip..], 0).ok()?;
    if !rest.is_empty() {
        return None;
    }
    match *seq {
        [head, ref cont @ ..] => char::from_u32(decode_value(head, cont)),
        [] => None,
    }
}

fn count_scalars(bytes: &[u8]) -> Result<usize> {
    let mut count = 0;
    let mut rest = bytes;
    while !rest.is_empty() {
        let offset = bytes.len() - rest.len();
        let (_, tail) = split_sequence(rest, offset)?;
        rest = tail;
        count += 1;
    }
    Ok(count)
}

/// Decodes a UTF-8 byte string into packed code points, one per scalar.
///
/// The whole input is validated before anything is produced; the first
/// illegal sequence fails the call.
pub fn decode(bytes: &[u8]) -> Result<Vec<CodePoint>> {
    let count = count_scalars(bytes).map_err(|err| {
        log::debug!("rejecting {} input bytes: {}", bytes.len(), err);
        err
    })?;

    let mut result = Vec::with_capacity(count);
    let mut rest = bytes;
    while !rest.is_empty() {
        let offset = bytes.len() - rest.len();
        let (seq, tail) = split_sequence(rest, offset)?;
        result.push(CodePoint::from_inner(pack_bytes(seq)));
        rest = tail;
    }
    debug_assert_eq!(count, result.len());
    Ok(result)
}

/// Decodes a Rust string. NUL characters are still rejected.
pub fn decode_str(s: &str) -> Result<Vec<CodePoint>> {
    decode(s.as_bytes())
}

/// Re-emits the bytes packed into each code point.
///
/// Every non-zero byte of a packed value is written, most significant first.
/// Values are not checked: a code point that did not come out of [`decode`]
/// produces whatever bytes it happens to hold.
pub fn encode(seq: &[CodePoint]) -> Vec<u8> {
    let size = seq.iter().map(|code| code.len_utf8()).sum();
    let mut result = Vec::with_capacity(size);
    for code in seq {
        result.extend(code.to_utf8_bytes());
    }
    debug_assert_eq!(size, result.len());
    result
}

/// Like [`encode`], but every code point must be a packed UTF-8 scalar.
pub fn encode_string(seq: &[CodePoint]) -> Result<String> {
    let mut offset = 0;
    for code in seq {
        if !code.is_well_formed() {
            return Err(Error::MalformedInput {
                offset,
                reason: "code point is not a packed utf-8 scalar",
            });
        }
        offset += code.len_utf8();
    }
    String::from_utf8(encode(seq)).map_err(|err| Error::MalformedInput {
        offset: err.utf8_error().valid_up_to(),
        reason: "encoded output is not valid utf-8",
    })
}

/// Rejects any declared text encoding other than UTF-8.
pub fn check_encoding(label: &str) -> Result<()> {
    let name = label.trim();
    if name.eq_ignore_ascii_case("UTF8") || name.eq_ignore_ascii_case("UTF-8") {
        Ok(())
    } else {
        Err(Error::UnsupportedEncoding(name.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(seq: &[CodePoint]) -> Vec<u32> {
        seq.iter().map(|c| c.into_inner()).collect()
    }

    #[test]
    fn test_decode_packs_raw_bytes() {
        let decoded = decode("café".as_bytes()).unwrap();
        assert_eq!(vec![0x63, 0x61, 0x66, 0xC3A9], inner(&decoded));

        let decoded = decode("\u{20AC}\u{1F600}".as_bytes()).unwrap();
        assert_eq!(vec![0xE282AC, 0xF09F9880], inner(&decoded));
    }

    #[test]
    fn test_encode_restores_bytes() {
        let input = "ça\u{0301} \u{20AC}\u{10FFFF}x";
        let decoded = decode(input.as_bytes()).unwrap();
        assert_eq!(input.as_bytes(), &encode(&decoded)[..]);
        assert_eq!(input, encode_string(&decoded).unwrap());
    }

    #[test]
    fn test_empty() {
        assert!(decode(b"").unwrap().is_empty());
        assert!(encode(&[]).is_empty());
        assert_eq!("", encode_string(&[]).unwrap());
    }

    #[test]
    fn test_malformed_input() {
        let cases: &[(&[u8], usize, &str)] = &[
            (b"\x80", 0, "unexpected continuation byte"),
            (b"ab\xBF", 2, "unexpected continuation byte"),
            (b"\xC3", 0, "truncated sequence"),
            (b"a\xE2\x82", 1, "truncated sequence"),
            (b"\xC3\x28", 0, "invalid continuation byte"),
            (b"\xC0\xAF", 0, "overlong encoding"),
            (b"\xC1\xBF", 0, "overlong encoding"),
            (b"\xE0\x80\xAF", 0, "overlong encoding"),
            (b"\xF0\x80\x80\xAF", 0, "overlong encoding"),
            (b"\xED\xA0\x80", 0, "surrogate code point"),
            (b"\xF4\x90\x80\x80", 0, "code point above U+10FFFF"),
            (b"\xF5\x80\x80\x80", 0, "code point above U+10FFFF"),
            (b"\xF8\x88\x80\x80\x80", 0, "invalid lead byte"),
            (b"\xFF", 0, "invalid lead byte"),
            (b"a\0b", 1, "NUL byte"),
        ];
        for &(bytes, offset, reason) in cases {
            assert_eq!(
                Err(Error::MalformedInput { offset, reason }),
                decode(bytes),
                "input {:x?}",
                bytes
            );
        }
    }

    #[test]
    fn test_boundary_scalars_accepted() {
        for ch in ['\u{7F}', '\u{80}', '\u{7FF}', '\u{800}', '\u{D7FF}', '\u{E000}', '\u{FFFF}'] {
            let mut buf = [0; 4];
            let bytes = ch.encode_utf8(&mut buf).as_bytes();
            let decoded = decode(bytes).unwrap();
            assert_eq!(1, decoded.len());
            assert_eq!(Some(ch), decoded[0].as_char());
        }
    }

    #[test]
    fn test_encode_is_unchecked() {
        // not a packed scalar: the bytes come out as they are, zero bytes dropped
        let garbage = [CodePoint::from_inner(0x6162), CodePoint::from_inner(0xFF00_0041)];
        assert_eq!(b"ab\xFFA".to_vec(), encode(&garbage));
        assert!(matches!(
            encode_string(&garbage),
            Err(Error::MalformedInput { offset: 0, .. })
        ));
    }

    #[test]
    fn test_packed_scalar_checks() {
        assert!(is_packed_scalar(0x41));
        assert!(is_packed_scalar(0xC3A9));
        assert!(is_packed_scalar(0xF4_8F_BF_BF));
        assert!(!is_packed_scalar(0));
        assert!(!is_packed_scalar(0x4142));
        assert!(!is_packed_scalar(0xC3_00_A9));
        assert!(!is_packed_scalar(0xEDA080));
        assert_eq!(Some('é'), unpack_char(0xC3A9));
        assert_eq!(None, unpack_char(0xC3));
    }

    #[test]
    fn test_check_encoding() {
        assert!(check_encoding("UTF8").is_ok());
        assert!(check_encoding(" utf-8 ").is_ok());
        assert_eq!(
            Err(Error::UnsupportedEncoding("LATIN1".to_owned())),
            check_encoding("LATIN1")
        );
    }
}
