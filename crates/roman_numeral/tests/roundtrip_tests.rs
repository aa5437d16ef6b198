//! Round-trip tests over the whole supported range

use roman_numeral::{from_roman, to_roman, Roman, MAX, MIN};

#[test]
fn test_every_value_parses_back() {
    for n in MIN..=MAX {
        let numeral = to_roman(i64::from(n)).unwrap();
        assert_eq!(from_roman(&numeral), Ok(n), "numeral {numeral}");
    }
}

#[test]
fn test_numerals_only_use_roman_symbols() {
    for n in MIN..=MAX {
        let numeral = n.roman().unwrap();
        assert!(numeral.chars().all(|c| "IVXLCDM".contains(c)));
        // no symbol repeats more than three times in a row
        assert!(!numeral.contains("IIII") && !numeral.contains("XXXX") && !numeral.contains("CCCC"));
    }
}

#[test]
fn test_range_boundaries() {
    assert_eq!(0i32.roman(), None);
    assert_eq!(1i32.roman().as_deref(), Some("I"));
    assert_eq!(3999i32.roman().as_deref(), Some("MMMCMXCIX"));
    assert_eq!(4000i32.roman(), None);
}
