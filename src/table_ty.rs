use crate::code_point_ty::CodePoint;
use crate::error::{Error, Result};
use crate::tables::decomposition::DECOMPOSITION_TABLE;
use std::{fmt, iter::FusedIterator, slice};

/// One stored row: packed code point, canonical combining class, and the
/// packed code points of its single-level mapping (empty if none).
pub type TableRow<'t> = (u32, u8, &'t [u32]);

/// A read-only decomposition table, sorted by packed code point.
///
/// Rows only exist for code points with a non-zero combining class or a
/// mapping. Any other well formed code point is a terminal starter.
#[derive(Copy, Clone)]
pub struct Table<'t> {
    rows: &'t [TableRow<'t>],
}

impl Table<'static> {
    /// The table compiled into this crate.
    pub fn unicode() -> Self {
        Table {
            rows: DECOMPOSITION_TABLE,
        }
    }
}

impl Default for Table<'static> {
    fn default() -> Self {
        Table::unicode()
    }
}

impl<'t> Table<'t> {
    /// Wraps a slice of rows, which must be strictly ascending by code point.
    pub fn new(rows: &'t [TableRow<'t>]) -> Result<Self> {
        if let Some(pair) = rows.windows(2).find(|pair| pair[0].0 >= pair[1].0) {
            return Err(Error::IllFormedTable {
                reason: format!(
                    "row {:#X} is not ordered before row {:#X}",
                    pair[0].0, pair[1].0
                ),
            });
        }
        Ok(Table { rows })
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finds the entry for `code`.
    ///
    /// A well formed code point without a stored row gets an implicit
    /// terminal starter entry. `None` means `code` is not the packed form of
    /// any scalar, so no decode could have produced it; it is never a fault.
    pub fn lookup(&self, code: CodePoint) -> Option<TableEntry<'t>> {
        match self
            .rows
            .binary_search_by_key(&code.into_inner(), |&(key, _, _)| key)
        {
            Ok(idx) => Some(TableEntry::from_row(self.rows[idx])),
            Err(_) if code.is_well_formed() => Some(TableEntry::implicit(code)),
            Err(_) => None,
        }
    }

    /// Resolves `code` for the preparation pipeline, where a miss fails the
    /// call.
    pub(crate) fn entry(&self, code: CodePoint) -> Result<TableEntry<'t>> {
        self.lookup(code).ok_or_else(|| {
            log::debug!("no table entry for {:?}", code);
            Error::UnknownCodePoint(code.into_inner())
        })
    }

    pub(crate) fn combining_class(&self, code: CodePoint) -> Result<u8> {
        self.entry(code).map(|entry| entry.combining_class())
    }

    /// Iterates over every stored row in ascending order.
    ///
    /// Only stored rows are listed; code points that resolve to an implicit
    /// entry in [`lookup`](Table::lookup) do not appear.
    pub fn entries(&self) -> Entries<'t> {
        Entries {
            rows: self.rows.iter(),
        }
    }
}

impl fmt::Debug for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table").field("len", &self.len()).finish()
    }
}

/// A resolved table row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TableEntry<'t> {
    code: CodePoint,
    combining_class: u8,
    mapping: &'t [u32],
}

impl<'t> TableEntry<'t> {
    fn from_row((code, combining_class, mapping): TableRow<'t>) -> Self {
        TableEntry {
            code: CodePoint::from_inner(code),
            combining_class,
            mapping,
        }
    }

    fn implicit(code: CodePoint) -> Self {
        TableEntry {
            code,
            combining_class: 0,
            mapping: &[],
        }
    }

    /// The code point this row describes.
    pub fn code_point(&self) -> CodePoint {
        self.code
    }

    /// Canonical combining class; 0 for starters.
    pub fn combining_class(&self) -> u8 {
        self.combining_class
    }

    /// Whether this is a starter (combining class 0).
    pub fn is_starter(&self) -> bool {
        self.combining_class == 0
    }

    /// Whether the code point decomposes only to itself.
    pub fn is_terminal(&self) -> bool {
        self.mapping.is_empty()
    }

    /// The single-level mapping, in order. Empty for terminal code points.
    pub fn decomposition(&self) -> Mapping<'t> {
        Mapping {
            codes: self.mapping.iter(),
        }
    }
}

/// An iterator over the mapping of a [`TableEntry`].
#[derive(Clone, Debug)]
pub struct Mapping<'t> {
    codes: slice::Iter<'t, u32>,
}

impl<'t> Iterator for Mapping<'t> {
    type Item = CodePoint;

    fn next(&mut self) -> Option<Self::Item> {
        self.codes.next().map(|&code| CodePoint::from_inner(code))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.codes.size_hint()
    }
}

impl<'t> DoubleEndedIterator for Mapping<'t> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.codes.next_back().map(|&code| CodePoint::from_inner(code))
    }
}

impl ExactSizeIterator for Mapping<'_> {}

/// An iterator over the stored rows of a [`Table`].
///
/// Call [`Table::entries`] again for another pass.
#[derive(Clone)]
pub struct Entries<'t> {
    rows: slice::Iter<'t, TableRow<'t>>,
}

impl<'t> Iterator for Entries<'t> {
    type Item = TableEntry<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|&row| TableEntry::from_row(row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<'t> DoubleEndedIterator for Entries<'t> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.rows.next_back().map(|&row| TableEntry::from_row(row))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}

impl fmt::Debug for Entries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("remaining", &self.rows.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::decomposition::{MAX_MAPPING_LEN, UNICODE_VERSION};

    #[test]
    fn test_unicode_table_sorted() {
        let rows = Table::unicode().rows;
        assert!(Table::new(rows).is_ok());
        assert_eq!(rows.len(), Table::unicode().entries().count());
        assert_eq!((14, 0, 0), UNICODE_VERSION);
    }

    #[test]
    fn test_lookup() {
        let table = Table::unicode();

        let e_acute = table.lookup(CodePoint::from('é')).unwrap();
        assert_eq!(0, e_acute.combining_class());
        assert!(e_acute.is_starter());
        assert!(!e_acute.is_terminal());
        assert_eq!(
            vec![CodePoint::from('e'), CodePoint::from('\u{0301}')],
            e_acute.decomposition().collect::<Vec<_>>()
        );

        let acute = table.lookup(CodePoint::from('\u{0301}')).unwrap();
        assert_eq!(230, acute.combining_class());
        assert!(acute.is_terminal());

        let cedilla_below = table.lookup(CodePoint::from('\u{0316}')).unwrap();
        assert_eq!(220, cedilla_below.combining_class());
    }

    #[test]
    fn test_lookup_miss_is_not_a_fault() {
        let table = Table::unicode();
        assert_eq!(None, table.lookup(CodePoint::from_inner(0xFFFF_FFFF)));
        assert_eq!(None, table.lookup(CodePoint::from_inner(0xE9)));
    }

    #[test]
    fn test_lookup_implicit_starter() {
        let table = Table::unicode();
        let a = CodePoint::from('a');
        let entry = table.lookup(a).unwrap();
        assert_eq!(a, entry.code_point());
        assert_eq!(0, entry.combining_class());
        assert!(entry.is_terminal());
        assert_eq!(0, entry.decomposition().len());
        assert!(table.entries().all(|e| e.code_point() != a));

        for ch in ['Z', '\u{3042}', '\u{AC00}', '\u{1F600}'] {
            assert!(table.lookup(CodePoint::from(ch)).is_some(), "{:?}", ch);
        }
    }

    #[test]
    fn test_pipeline_entry() {
        let table = Table::unicode();
        let a = table.entry(CodePoint::from('a')).unwrap();
        assert!(a.is_starter() && a.is_terminal());
        assert_eq!(CodePoint::from('a'), a.code_point());

        // hangul syllables are decomposed algorithmically upstream, not here
        let ga = table.entry(CodePoint::from('\u{AC00}')).unwrap();
        assert!(ga.is_terminal());

        assert_eq!(
            Err(Error::UnknownCodePoint(0xE9)),
            table.entry(CodePoint::from_inner(0xE9))
        );
    }

    #[test]
    fn test_unsorted_rows_rejected() {
        static ROWS: &[TableRow<'static>] = &[(0x62, 0, &[]), (0x61, 0, &[0x62])];
        assert!(matches!(
            Table::new(ROWS),
            Err(Error::IllFormedTable { .. })
        ));

        static DUPLICATES: &[TableRow<'static>] = &[(0x61, 0, &[]), (0x61, 0, &[])];
        assert!(Table::new(DUPLICATES).is_err());
    }

    #[test]
    fn test_entries_restart() {
        let table = Table::unicode();
        let first = table.entries().next().unwrap();
        assert_eq!(CodePoint::from('\u{00A0}'), first.code_point());
        assert_eq!(
            vec![CodePoint::from(' ')],
            first.decomposition().collect::<Vec<_>>()
        );
        assert_eq!(first, table.entries().next().unwrap());

        let longest = table.entries().map(|e| e.decomposition().len()).max();
        assert_eq!(Some(MAX_MAPPING_LEN), longest);
    }
}
