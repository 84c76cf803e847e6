use crate::code_point_ty::CodePoint;
use crate::decompose::{self, Decomposition};
use crate::error::Result;
use crate::reorder;
use crate::table_ty::{Table, TableEntry};
use crate::tables::decomposition::MAX_NESTING;
use crate::utf8;

/// Default bound on nested mappings, well above what the compiled table needs.
pub const DEFAULT_MAX_DEPTH: usize = 16;

const _: () = assert!(MAX_NESTING <= DEFAULT_MAX_DEPTH);

/// Decomposes and canonically orders code point sequences against one table.
///
/// `Normalizer` is cheap to copy and holds no mutable state, so one value can
/// serve any number of threads at once.
#[derive(Copy, Clone, Debug)]
pub struct Normalizer<'t> {
    table: Table<'t>,
    max_depth: usize,
    presize: bool,
}

impl Normalizer<'static> {
    /// A normalizer over the compiled-in table with default options.
    pub fn new() -> Self {
        Normalizer::with_table(Table::unicode())
    }
}

impl Default for Normalizer<'static> {
    fn default() -> Self {
        Normalizer::new()
    }
}

impl<'t> Normalizer<'t> {
    /// A normalizer over `table` with default options.
    pub fn with_table(table: Table<'t>) -> Self {
        Normalizer {
            table,
            max_depth: DEFAULT_MAX_DEPTH,
            presize: true,
        }
    }

    /// Sets how many levels of nested mappings are followed before the table
    /// is declared ill-formed.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether `prepare` first counts the decomposed length and allocates the
    /// result exactly (the default), or grows it as it goes.
    pub fn presize(mut self, presize: bool) -> Self {
        self.presize = presize;
        self
    }

    /// The table this normalizer reads.
    pub fn table(&self) -> Table<'t> {
        self.table
    }

    /// Finds the entry for `code`; `None` means `code` is not a packed scalar.
    pub fn lookup(&self, code: CodePoint) -> Option<TableEntry<'t>> {
        self.table.lookup(code)
    }

    /// Fully decomposes one code point.
    pub fn decompose(&self, code: CodePoint) -> Result<Decomposition> {
        decompose::decompose(&self.table, code, self.max_depth)
    }

    /// Length of the full decomposition of one code point.
    pub fn decomposed_len(&self, code: CodePoint) -> Result<usize> {
        decompose::decomposed_len(&self.table, code, self.max_depth)
    }

    /// Canonically orders `seq` in place.
    pub fn reorder(&self, seq: &mut [CodePoint]) -> Result<()> {
        reorder::reorder(&self.table, seq)
    }

    /// Whether `seq` is already in canonical order.
    pub fn is_canonically_ordered(&self, seq: &[CodePoint]) -> Result<bool> {
        reorder::is_canonically_ordered(&self.table, seq)
    }

    /// Decomposes every code point of `input`, concatenates the expansions
    /// in input order and canonically orders the result.
    pub fn prepare(&self, input: &[CodePoint]) -> Result<Vec<CodePoint>> {
        let mut result = if self.presize {
            let size = input.iter().try_fold(0, |size, &code| {
                self.decomposed_len(code).map(|len| size + len)
            })?;
            Vec::with_capacity(size)
        } else {
            Vec::new()
        };

        for &code in input {
            decompose::decompose_into(&self.table, code, self.max_depth, &mut result)?;
        }
        self.reorder(&mut result)?;

        log::debug!(
            "prepared {} code points into {}",
            input.len(),
            result.len()
        );
        Ok(result)
    }

    /// Decodes UTF-8 bytes, prepares them and encodes the result.
    pub fn prepare_bytes(&self, input: &[u8]) -> Result<Vec<u8>> {
        let decoded = utf8::decode(input)?;
        let prepared = self.prepare(&decoded)?;
        Ok(utf8::encode(&prepared))
    }

    /// Like [`Normalizer::prepare_bytes`], for Rust strings.
    pub fn prepare_str(&self, input: &str) -> Result<String> {
        let decoded = utf8::decode_str(input)?;
        let prepared = self.prepare(&decoded)?;
        utf8::encode_string(&prepared)
    }

    /// Prepares signed 32-bit host integers, as handed over by an `int4[]`
    /// style array.
    pub fn prepare_signed(&self, input: &[i32]) -> Result<Vec<i32>> {
        let codes = input
            .iter()
            .map(|&v| CodePoint::from_signed(v))
            .collect::<Vec<_>>();
        let prepared = self.prepare(&codes)?;
        Ok(prepared.into_iter().map(CodePoint::to_signed).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::table_ty::TableRow;

    fn codes(s: &str) -> Vec<CodePoint> {
        s.chars().map(CodePoint::from).collect()
    }

    // a: plain letter; x -> a + m1; m1: class 230; m2: class 220
    static SCENARIO_ROWS: &[TableRow<'static>] = &[
        (0x61, 0, &[]),
        (0x6D, 230, &[]),
        (0x6E, 220, &[]),
        (0x78, 0, &[0x61, 0x6D]),
    ];

    fn scenario() -> Normalizer<'static> {
        Normalizer::with_table(Table::new(SCENARIO_ROWS).unwrap())
    }

    #[test]
    fn test_plain_letter_unchanged() {
        assert_eq!(codes("a"), scenario().prepare(&codes("a")).unwrap());
    }

    #[test]
    fn test_sorted_decomposition_kept() {
        assert_eq!(codes("am"), scenario().prepare(&codes("x")).unwrap());
    }

    #[test]
    fn test_marks_swapped() {
        assert_eq!(codes("nm"), scenario().prepare(&codes("mn")).unwrap());
        assert_eq!(codes("anm"), scenario().prepare(&codes("xn")).unwrap());
    }

    #[test]
    fn test_empty() {
        let normalizer = Normalizer::new();
        assert!(normalizer.prepare(&[]).unwrap().is_empty());
        assert!(normalizer.prepare_bytes(b"").unwrap().is_empty());
        assert_eq!("", normalizer.prepare_str("").unwrap());
    }

    #[test]
    fn test_presize_equivalent() {
        let input = codes("\u{1E69}\u{0301}\u{FB03} \u{1F82}\u{0316}e\u{0301}\u{0323}");
        let exact = Normalizer::new().prepare(&input).unwrap();
        let grown = Normalizer::new().presize(false).prepare(&input).unwrap();
        assert_eq!(exact, grown);

        let counted: usize = input
            .iter()
            .map(|&code| Normalizer::new().decomposed_len(code).unwrap())
            .sum();
        assert_eq!(counted, exact.len());
    }

    #[test]
    fn test_prepare_str() {
        let normalizer = Normalizer::new();
        assert_eq!("e\u{0323}\u{0301}", normalizer.prepare_str("é\u{0323}").unwrap());
        assert_eq!("ffi", normalizer.prepare_str("\u{FB03}").unwrap());
        assert_eq!("s\u{0323}\u{0307}", normalizer.prepare_str("\u{1E69}").unwrap());
    }

    #[test]
    fn test_prepare_signed() {
        let grin = CodePoint::from('\u{1F600}').to_signed();
        let normalizer = Normalizer::new();
        assert_eq!(
            vec![0x65, 0xCCA3, 0xCC81, grin],
            normalizer
                .prepare_signed(&[0xC3A9, 0xCCA3, grin])
                .unwrap()
        );
    }

    #[test]
    fn test_faults_abort() {
        let normalizer = Normalizer::new();
        assert_eq!(
            Err(Error::UnknownCodePoint(0xFFFF_FFFF)),
            normalizer.prepare(&[CodePoint::from('a'), CodePoint::from_inner(0xFFFF_FFFF)])
        );
        assert!(matches!(
            normalizer.prepare_bytes(b"abc\x80"),
            Err(Error::MalformedInput { offset: 3, .. })
        ));
        assert!(matches!(
            normalizer.max_depth(2).prepare(&codes("\u{1F82}")),
            Err(Error::IllFormedTable { .. })
        ));
    }

    #[test]
    fn test_lookup_through_normalizer() {
        let normalizer = Normalizer::new();
        assert_eq!(
            Some(230),
            normalizer
                .lookup(CodePoint::from('\u{0301}'))
                .map(|e| e.combining_class())
        );
        assert_eq!(
            Some(0),
            normalizer
                .lookup(CodePoint::from_inner(7))
                .map(|e| e.combining_class())
        );
        assert_eq!(None, normalizer.lookup(CodePoint::from_inner(0x80)));
        assert!(normalizer.table().len() > 6000);
    }
}
