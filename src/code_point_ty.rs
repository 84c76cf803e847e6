use crate::utf8;
use smallvec::SmallVec;
use std::fmt;

/// One Unicode scalar in its packed form: the UTF-8 bytes of the scalar
/// stored big-endian in the low bytes of a `u32`.
///
/// `'é'` (U+00E9, encoded `C3 A9`) is `CodePoint(0xC3A9)`, not `0xE9`. The
/// decomposition table is keyed on this form, so lookups only work when the
/// value was built the same way.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CodePoint(pub(crate) u32);

/// The bytes of one packed code point, as written by `encode`.
pub type Utf8Bytes = SmallVec<[u8; utf8::MAX_BYTE_COUNT]>;

impl CodePoint {
    /// Constructs a `CodePoint` from its packed representation.
    ///
    /// No check is made that `v` holds a legal UTF-8 sequence; see
    /// [`CodePoint::is_well_formed`].
    pub const fn from_inner(v: u32) -> Self {
        CodePoint(v)
    }

    /// Packs the UTF-8 encoding of `ch`.
    pub fn from_char(ch: char) -> Self {
        let mut buf = [0; utf8::MAX_BYTE_COUNT];
        let bytes = ch.encode_utf8(&mut buf).as_bytes();
        CodePoint(utf8::pack_bytes(bytes))
    }

    /// Retrieves the packed representation.
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Reinterprets a signed 32-bit host integer bit for bit.
    ///
    /// Four-byte sequences have their top bit set and show up negative on
    /// the signed side.
    pub const fn from_signed(v: i32) -> Self {
        CodePoint(v as u32)
    }

    /// The packed value as a signed 32-bit host integer.
    pub const fn to_signed(self) -> i32 {
        self.0 as i32
    }

    /// Whether the packed bytes are exactly one legal, non-overlong UTF-8
    /// sequence other than NUL, i.e. whether `decode` could have produced it.
    pub fn is_well_formed(self) -> bool {
        utf8::is_packed_scalar(self.0)
    }

    /// Retrieves the scalar this code point was packed from, or `None` if it
    /// is not well formed.
    pub fn as_char(self) -> Option<char> {
        utf8::unpack_char(self.0)
    }

    /// Number of bytes `encode` writes for this code point.
    pub fn len_utf8(self) -> usize {
        self.0.to_be_bytes().iter().filter(|&&b| b != 0).count()
    }

    /// The bytes `encode` writes for this code point: every non-zero byte,
    /// most significant first.
    pub fn to_utf8_bytes(self) -> Utf8Bytes {
        self.0.to_be_bytes().into_iter().filter(|&b| b != 0).collect()
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        CodePoint::from_char(ch)
    }
}

impl From<CodePoint> for u32 {
    fn from(code: CodePoint) -> Self {
        code.0
    }
}

impl From<i32> for CodePoint {
    fn from(v: i32) -> Self {
        CodePoint::from_signed(v)
    }
}

impl PartialEq<char> for CodePoint {
    fn eq(&self, rhs: &char) -> bool {
        *self == CodePoint::from_char(*rhs)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_char() {
            Some(ch) => write!(f, "{}", ch),
            None => write!(f, "{:#X}", self.0),
        }
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodePoint({:#X})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::CodePoint;

    #[test]
    fn test_packing() {
        assert_eq!(0x41, CodePoint::from_char('A').into_inner());
        assert_eq!(0xC3A9, CodePoint::from_char('é').into_inner());
        assert_eq!(0xE282AC, CodePoint::from('\u{20AC}').into_inner());
        assert_eq!(0xF09F9880, CodePoint::from('\u{1F600}').into_inner());
        assert_eq!(CodePoint::from_inner(0xCC81), '\u{0301}');
    }

    #[test]
    fn test_signed_host_integers() {
        let grin = CodePoint::from('\u{1F600}');
        assert!(grin.to_signed() < 0);
        assert_eq!(grin, CodePoint::from_signed(grin.to_signed()));
        assert_eq!(CodePoint::from_inner(0x61), CodePoint::from(0x61_i32));
    }

    #[test]
    fn test_lengths() {
        assert_eq!(1, CodePoint::from('a').len_utf8());
        assert_eq!(2, CodePoint::from('é').len_utf8());
        assert_eq!(4, CodePoint::from('\u{10FFFF}').len_utf8());
        assert_eq!(0, CodePoint::from_inner(0).len_utf8());
        assert_eq!(&[0xC3, 0xA9], &CodePoint::from('é').to_utf8_bytes()[..]);
    }

    #[test]
    fn test_round_trip_through_char() {
        for ch in ['a', 'ß', '\u{0301}', '\u{AC00}', '\u{FFFD}', '\u{1D11E}'] {
            let code = CodePoint::from(ch);
            assert!(code.is_well_formed());
            assert_eq!(Some(ch), code.as_char());
        }
        assert_eq!(None, CodePoint::from_inner(0xE9).as_char());
    }

    #[test]
    fn test_fmt() {
        assert_eq!("é", CodePoint::from('é').to_string());
        assert_eq!("0xFFFF", CodePoint::from_inner(0xFFFF).to_string());
        assert_eq!("CodePoint(0xC3A9)", format!("{:?}", CodePoint::from('é')));
    }
}
