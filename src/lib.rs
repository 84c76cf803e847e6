#![forbid(unsafe_code)]
#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Character preparation for SASL authentication.
//!
//! This crate implements the decomposition half of SASLprep: every code point
//! is expanded through a static table of canonical and compatibility
//! mappings until only terminal code points remain, and the result is put
//! into canonical order (UAX #15) so that equivalent inputs compare equal.
//!
//! # Packed code points
//!
//! A [`CodePoint`] does not hold a Unicode scalar value. It holds the UTF-8
//! bytes of the scalar packed big-endian into a `u32`: `'é'` is `0xC3A9`,
//! `'€'` is `0xE282AC`. [`decode`] produces this form from a UTF-8 byte
//! string and [`encode`] writes the bytes back out. The decomposition table
//! is keyed the same way.
//!
//! # Pipeline
//!
//! ```text
//! bytes --decode--> code points --decompose--> expansion --reorder--> prepared --encode--> bytes
//! ```
//!
//! ```
//! use saslprep_decompose::{decode, encode, prepare};
//!
//! let input = decode("e\u{0301}\u{0323}".as_bytes()).unwrap();
//! let prepared = prepare(&input).unwrap();
//! assert_eq!("e\u{0323}\u{0301}".as_bytes(), &encode(&prepared)[..]);
//! ```
//!
//! # Scope
//!
//! Only decomposition and canonical ordering are done here. Hangul syllables
//! are not decomposed algorithmically, and there is no composition, case
//! folding or bidi checking.

pub(crate) mod tables;

pub(crate) mod code_point_ty;

pub(crate) mod table_ty;

pub(crate) mod decompose;

pub(crate) mod reorder;

pub(crate) mod normalizer;

pub(crate) mod utf8;

pub mod error;

pub use code_point_ty::{CodePoint, Utf8Bytes};

pub use table_ty::{Entries, Mapping, Table, TableEntry, TableRow};

pub use decompose::Decomposition;

pub use normalizer::{Normalizer, DEFAULT_MAX_DEPTH};

pub use utf8::{check_encoding, decode, decode_str, encode, encode_string};

pub use error::{Error, Result};

/// Version of the Unicode Character Database the compiled table was built from.
pub const UNICODE_VERSION: (u8, u8, u8) = tables::decomposition::UNICODE_VERSION;

/// Decomposes and canonically orders `input` against the compiled table.
pub fn prepare(input: &[CodePoint]) -> Result<Vec<CodePoint>> {
    Normalizer::new().prepare(input)
}

/// Decodes, prepares and re-encodes a Rust string.
pub fn prepare_str(input: &str) -> Result<String> {
    Normalizer::new().prepare_str(input)
}

/// Finds the compiled table's entry for `code`.
///
/// Every well formed code point has one; `None` means no decode could have
/// produced `code`.
pub fn lookup(code: CodePoint) -> Option<TableEntry<'static>> {
    Table::unicode().lookup(code)
}

/// A slice of packed code points
pub type CodePointSlice = [CodePoint];

/// A `Vec` of packed code points
pub type CodePointVec = Vec<CodePoint>;
