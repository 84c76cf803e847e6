//! End-to-end tests for decoding, preparing and re-encoding text.

use saslprep_decompose::{
    decode, decode_str, encode, lookup, prepare, prepare_str, CodePoint, Error, Normalizer, Table,
};
use unicode_normalization::UnicodeNormalization;

const SAMPLES: &[&str] = &[
    "",
    "hello",
    "password123",
    "café",
    "Ångström",
    "e\u{0301}\u{0323}",
    "a\u{0345}\u{0301}\u{0323}\u{05B0}b",
    "\u{1E69}\u{0301}",
    "\u{1F82}\u{0316}",
    "\u{FB03}ce \u{2163} \u{FF21}\u{FF22}",
    "\u{00BD} \u{2126} \u{212B}",
    "\u{05E9}\u{05BC}\u{05C1}\u{FB2C}",
    "\u{0958}\u{0F73}\u{0F75}",
    "x\u{0301}\u{0300}\u{0302}",
    "I\u{2075}\u{2082}\u{33A1}",
    "\u{1D400}\u{1D7CE}",
];

fn codes(s: &str) -> Vec<CodePoint> {
    s.chars().map(CodePoint::from).collect()
}

fn contains_hangul_syllable(s: &str) -> bool {
    s.chars().any(|ch| ('\u{AC00}'..='\u{D7A3}').contains(&ch))
}

/// Test that plain ASCII passes through unchanged.
#[test]
fn test_ascii_passthrough() {
    assert_eq!("hello", prepare_str("hello").unwrap());
    assert_eq!("Test String", prepare_str("Test String").unwrap());
}

/// Test that prepared text matches NFKD for inputs without Hangul syllables.
#[test]
fn test_matches_nfkd() {
    for &s in SAMPLES {
        let expected = s.nfkd().collect::<String>();
        assert_eq!(expected, prepare_str(s).unwrap(), "input {:?}", s);
    }
}

/// Test every row of the compiled table against NFKD of the same character.
#[test]
fn test_table_matches_nfkd() {
    let table = Table::unicode();
    let mut checked = 0;
    for entry in table.entries() {
        let ch = entry.code_point().as_char().unwrap();
        let expected = ch.to_string().nfkd().collect::<String>();
        let prepared = prepare(&[entry.code_point()]).unwrap();
        let actual = saslprep_decompose::encode_string(&prepared).unwrap();
        // syllables in a mapping are left for algorithmic decomposition
        if contains_hangul_syllable(&actual) {
            continue;
        }
        assert_eq!(expected, actual, "U+{:04X}", ch as u32);
        checked += 1;
    }
    assert!(checked > 6000);
}

/// Test that preparing twice changes nothing.
#[test]
fn test_idempotent() {
    for &s in SAMPLES {
        let once = prepare(&decode_str(s).unwrap()).unwrap();
        let twice = prepare(&once).unwrap();
        assert_eq!(once, twice, "input {:?}", s);
    }
}

/// Test byte-exact round trips through the codec.
#[test]
fn test_round_trip() {
    for &s in SAMPLES {
        let decoded = decode(s.as_bytes()).unwrap();
        assert_eq!(s.as_bytes(), &encode(&decoded)[..]);
        assert_eq!(decoded, decode(&encode(&decoded)).unwrap());
    }
}

/// Test the "café" scenario: five code points, one of them two bytes wide.
#[test]
fn test_cafe_round_trip() {
    let bytes = "caf\u{00E9}!".as_bytes();
    let decoded = decode(bytes).unwrap();
    assert_eq!(5, decoded.len());
    assert_eq!(0xC3A9, decoded[3].into_inner());
    assert_eq!(bytes, &encode(&decoded)[..]);
}

/// Test that a lone continuation byte produces no output at all.
#[test]
fn test_lone_continuation_byte() {
    assert!(matches!(
        decode(b"caf\xA9"),
        Err(Error::MalformedInput { offset: 3, .. })
    ));
}

/// Test that starters keep their relative order.
#[test]
fn test_starters_keep_order() {
    let table = Table::unicode();
    for &s in SAMPLES {
        let prepared = prepare(&decode_str(s).unwrap()).unwrap();
        let starters_out = prepared
            .iter()
            .filter(|&&code| lookup(code).unwrap().is_starter())
            .copied()
            .collect::<Vec<_>>();

        let mut expanded = Vec::new();
        for code in decode_str(s).unwrap() {
            expanded.extend(Normalizer::new().decompose(code).unwrap());
        }
        let starters_in = expanded
            .iter()
            .filter(|&&code| lookup(code).unwrap().is_starter())
            .copied()
            .collect::<Vec<_>>();

        assert_eq!(starters_in, starters_out, "input {:?}", s);
        assert!(Normalizer::with_table(table)
            .is_canonically_ordered(&prepared)
            .unwrap());
    }
}

/// Test that every run of marks between starters is sorted by class.
#[test]
fn test_runs_sorted() {
    for &s in SAMPLES {
        let prepared = prepare(&decode_str(s).unwrap()).unwrap();
        let classes = prepared
            .iter()
            .map(|&code| lookup(code).unwrap().combining_class())
            .collect::<Vec<_>>();
        for run in classes.split(|&class| class == 0) {
            assert!(
                run.windows(2).all(|pair| pair[0] <= pair[1]),
                "input {:?} classes {:?}",
                s,
                classes
            );
        }
    }
}

/// Test that decomposition leaves terminal code points only.
#[test]
fn test_decomposition_complete() {
    for &s in SAMPLES {
        for code in prepare(&decode_str(s).unwrap()).unwrap() {
            assert!(lookup(code).unwrap().is_terminal(), "{:?}", code);
        }
    }
}

/// Test that every decodable code point has exactly one table entry.
#[test]
fn test_every_decoded_code_has_entry() {
    let table = Table::unicode();
    for &s in SAMPLES {
        for code in decode_str(s).unwrap() {
            let entry = lookup(code).unwrap();
            assert_eq!(code, entry.code_point());
        }
    }

    let a = lookup(CodePoint::from('a')).unwrap();
    assert!(a.is_starter() && a.is_terminal());
    assert!(table.entries().all(|e| e.code_point() != 'a'));

    assert!(lookup(CodePoint::from_inner(0x6162)).is_none());
}

/// Test that the raw-array entry point does not validate what it encodes.
#[test]
fn test_encode_of_foreign_integers() {
    // 0x6162 is two ASCII letters, not one scalar; it is written out as is
    assert_eq!(b"ab".to_vec(), encode(&[CodePoint::from_inner(0x6162)]));
    // but preparing it is refused, as no decode produces it
    assert_eq!(
        Err(Error::UnknownCodePoint(0x6162)),
        prepare(&[CodePoint::from_inner(0x6162)])
    );
}

/// Test Hangul syllables are passed through, not decomposed.
#[test]
fn test_hangul_untouched() {
    assert_eq!("\u{D55C}\u{AE00}", prepare_str("\u{D55C}\u{AE00}").unwrap());
    assert_eq!(codes("\u{AC00}"), prepare(&codes("\u{AC00}")).unwrap());
}

/// Test the table can be shared by concurrent callers.
#[test]
fn test_concurrent_callers() {
    let normalizer = Normalizer::new();
    std::thread::scope(|scope| {
        let handles = SAMPLES
            .iter()
            .map(|&s| scope.spawn(move || (s, normalizer.prepare_str(s).unwrap())))
            .collect::<Vec<_>>();
        for handle in handles {
            let (s, prepared) = handle.join().unwrap();
            assert_eq!(prepare_str(s).unwrap(), prepared);
        }
    });
}
