//! Recursive expansion of code points through the decomposition table.

use crate::code_point_ty::CodePoint;
use crate::error::{Error, Result};
use crate::table_ty::Table;
use smallvec::SmallVec;

/// The full expansion of one code point. Most fit inline.
pub type Decomposition = SmallVec<[CodePoint; 4]>;

/// Walks the mapping tree of `code` depth first, handing every terminal code
/// point to `emit` in order.
fn walk<F>(
    table: &Table<'_>,
    code: CodePoint,
    depth: usize,
    max_depth: usize,
    emit: &mut F,
) -> Result<()>
where
    F: FnMut(CodePoint),
{
    let entry = table.entry(code)?;
    if entry.is_terminal() {
        emit(code);
        return Ok(());
    }
    if depth >= max_depth {
        log::debug!("{:?} still has a mapping at depth {}", code, depth);
        return Err(Error::IllFormedTable {
            reason: format!(
                "mapping of {:#X} nests deeper than {} levels",
                code.into_inner(),
                max_depth
            ),
        });
    }
    for child in entry.decomposition() {
        walk(table, child, depth + 1, max_depth, emit)?;
    }
    Ok(())
}

/// Fully decomposes `code`. The result holds terminal code points only.
pub(crate) fn decompose(
    table: &Table<'_>,
    code: CodePoint,
    max_depth: usize,
) -> Result<Decomposition> {
    let mut result = Decomposition::new();
    walk(table, code, 0, max_depth, &mut |c| result.push(c))?;
    Ok(result)
}

/// Appends the full decomposition of `code` to `out`.
///
/// On error `out` may hold part of the expansion; callers discard it.
pub(crate) fn decompose_into(
    table: &Table<'_>,
    code: CodePoint,
    max_depth: usize,
    out: &mut Vec<CodePoint>,
) -> Result<()> {
    walk(table, code, 0, max_depth, &mut |c| out.push(c))
}

/// Length of the full decomposition of `code`, without building it.
pub(crate) fn decomposed_len(
    table: &Table<'_>,
    code: CodePoint,
    max_depth: usize,
) -> Result<usize> {
    let mut len = 0;
    walk(table, code, 0, max_depth, &mut |_| len += 1)?;
    Ok(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table_ty::TableRow;
    use crate::tables::decomposition::MAX_NESTING;

    fn codes(s: &str) -> Vec<CodePoint> {
        s.chars().map(CodePoint::from).collect()
    }

    #[test]
    fn test_terminal_decomposes_to_itself() {
        let table = Table::unicode();
        let a = CodePoint::from('a');
        assert_eq!(&[a], &decompose(&table, a, 0).unwrap()[..]);
        assert_eq!(1, decomposed_len(&table, a, 0).unwrap());
    }

    #[test]
    fn test_nested_mappings() {
        let table = Table::unicode();

        // U+1E9B -> U+017F U+0307, U+017F -> 's'
        let long_s_dot = CodePoint::from('\u{1E9B}');
        assert_eq!(
            codes("s\u{0307}"),
            decompose(&table, long_s_dot, MAX_NESTING).unwrap().to_vec()
        );

        // U+1F82 nests three levels deep
        let alpha = CodePoint::from('\u{1F82}');
        assert_eq!(
            codes("\u{03B1}\u{0313}\u{0300}\u{0345}"),
            decompose(&table, alpha, MAX_NESTING).unwrap().to_vec()
        );
        assert_eq!(4, decomposed_len(&table, alpha, MAX_NESTING).unwrap());
    }

    #[test]
    fn test_compatibility_mappings() {
        let table = Table::unicode();
        assert_eq!(
            codes("ffi"),
            decompose(&table, CodePoint::from('\u{FB03}'), MAX_NESTING)
                .unwrap()
                .to_vec()
        );
        assert_eq!(
            codes(" "),
            decompose(&table, CodePoint::from('\u{3000}'), MAX_NESTING)
                .unwrap()
                .to_vec()
        );
    }

    #[test]
    fn test_depth_limit() {
        let table = Table::unicode();
        let alpha = CodePoint::from('\u{1F82}');
        assert!(matches!(
            decompose(&table, alpha, MAX_NESTING - 1),
            Err(Error::IllFormedTable { .. })
        ));
        assert!(matches!(
            decompose(&table, CodePoint::from('é'), 0),
            Err(Error::IllFormedTable { .. })
        ));
        assert!(decompose(&table, CodePoint::from('é'), 1).is_ok());
    }

    #[test]
    fn test_cycle_faults() {
        static ROWS: &[TableRow<'static>] = &[(0x61, 0, &[0x62]), (0x62, 0, &[0x61])];
        let table = Table::new(ROWS).unwrap();
        assert_eq!(
            Err(Error::IllFormedTable {
                reason: "mapping of 0x61 nests deeper than 8 levels".to_owned()
            }),
            decompose(&table, CodePoint::from('a'), 8)
        );
    }

    #[test]
    fn test_unknown_code_in_mapping() {
        static ROWS: &[TableRow<'static>] = &[(0x61, 0, &[0x62, 0xFFFF])];
        let table = Table::new(ROWS).unwrap();
        assert_eq!(
            Err(Error::UnknownCodePoint(0xFFFF)),
            decompose(&table, CodePoint::from('a'), 4)
        );
    }

    #[test]
    fn test_decompose_into_appends() {
        let table = Table::unicode();
        let mut out = codes("x");
        decompose_into(&table, CodePoint::from('é'), MAX_NESTING, &mut out).unwrap();
        assert_eq!(codes("xe\u{0301}"), out);
    }

    #[test]
    fn test_every_row_fully_decomposes() {
        let table = Table::unicode();
        for entry in table.entries() {
            let code = entry.code_point();
            let expanded = decompose(&table, code, MAX_NESTING).unwrap();
            assert_eq!(expanded.len(), decomposed_len(&table, code, MAX_NESTING).unwrap());
            for part in expanded {
                assert!(table.entry(part).unwrap().is_terminal(), "{:?} in {:?}", part, code);
            }
        }
    }
}
