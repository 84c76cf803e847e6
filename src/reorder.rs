//! Canonical ordering of combining marks (UAX #15).

use crate::code_point_ty::CodePoint;
use crate::error::Result;
use crate::table_ty::Table;

/// Sorts every run of non-starters in `seq` into non-decreasing combining
/// class, in place. Starters never move and equal classes keep their order.
///
/// Two neighbours are exchanged when neither is a starter and the first has
/// the higher class. After an exchange the scan steps back one pair, since
/// the mark that moved left may now be out of order with the one before it.
pub(crate) fn reorder(table: &Table<'_>, seq: &mut [CodePoint]) -> Result<()> {
    let mut idx = 1;
    while idx < seq.len() {
        let prev_class = table.combining_class(seq[idx - 1])?;
        let next_class = table.combining_class(seq[idx])?;

        if prev_class == 0 || next_class == 0 || prev_class <= next_class {
            idx += 1;
            continue;
        }

        seq.swap(idx - 1, idx);
        log::trace!(
            "exchanged {:?} (class {}) and {:?} (class {}) at {}",
            seq[idx],
            prev_class,
            seq[idx - 1],
            next_class,
            idx
        );

        if idx > 1 {
            idx -= 1;
        } else {
            idx += 1;
        }
    }
    Ok(())
}

/// Whether every run of non-starters in `seq` is already in canonical order.
pub(crate) fn is_canonically_ordered(table: &Table<'_>, seq: &[CodePoint]) -> Result<bool> {
    for pair in seq.windows(2) {
        let prev_class = table.combining_class(pair[0])?;
        let next_class = table.combining_class(pair[1])?;
        if prev_class != 0 && next_class != 0 && prev_class > next_class {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn codes(s: &str) -> Vec<CodePoint> {
        s.chars().map(CodePoint::from).collect()
    }

    fn reordered(s: &str) -> Vec<CodePoint> {
        let mut seq = codes(s);
        reorder(&Table::unicode(), &mut seq).unwrap();
        seq
    }

    #[test]
    fn test_exchange_pair() {
        // acute (230) before dot below (220)
        assert_eq!(codes("\u{0323}\u{0301}"), reordered("\u{0301}\u{0323}"));
        assert_eq!(codes("a\u{0323}\u{0301}"), reordered("a\u{0301}\u{0323}"));
    }

    #[test]
    fn test_already_ordered() {
        for s in ["", "a", "abc", "e\u{0301}", "a\u{0323}\u{0301}b"] {
            assert_eq!(codes(s), reordered(s));
        }
    }

    #[test]
    fn test_starters_block_exchange() {
        // the acute belongs to 'a', the dot below to 'b'
        assert_eq!(codes("a\u{0301}b\u{0323}"), reordered("a\u{0301}b\u{0323}"));
    }

    #[test]
    fn test_backtracking() {
        // ypogegrammeni (240), acute (230), dot below (220), hebrew sheva (10)
        let input = "x\u{0345}\u{0301}\u{0323}\u{05B0}";
        assert_eq!(codes("x\u{05B0}\u{0323}\u{0301}\u{0345}"), reordered(input));

        // leading marks with no starter before them
        assert_eq!(
            codes("\u{05B0}\u{0323}\u{0301}\u{0345}"),
            reordered("\u{0345}\u{0301}\u{0323}\u{05B0}")
        );
    }

    #[test]
    fn test_equal_classes_stable() {
        // grave and acute are both 230
        assert_eq!(codes("a\u{0300}\u{0301}"), reordered("a\u{0300}\u{0301}"));
        assert_eq!(
            codes("a\u{0323}\u{0301}\u{0300}"),
            reordered("a\u{0301}\u{0323}\u{0300}")
        );
    }

    #[test]
    fn test_unknown_code_point() {
        let mut seq = vec![CodePoint::from('a'), CodePoint::from_inner(0xFF)];
        assert_eq!(
            Err(Error::UnknownCodePoint(0xFF)),
            reorder(&Table::unicode(), &mut seq)
        );
    }

    #[test]
    fn test_ordered_check() {
        let table = Table::unicode();
        assert!(is_canonically_ordered(&table, &codes("a\u{0323}\u{0301}")).unwrap());
        assert!(!is_canonically_ordered(&table, &codes("a\u{0301}\u{0323}")).unwrap());
        assert!(is_canonically_ordered(&table, &codes("\u{0301}b\u{0323}")).unwrap());
    }
}
