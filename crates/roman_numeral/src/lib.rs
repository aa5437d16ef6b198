//! roman_numeral - Roman numeral formatting
//!
//! Formats integers in 1..=3999 using subtractive notation and parses the
//! canonical spelling back.

use thiserror::Error;

pub const MIN: u32 = 1;
pub const MAX: u32 = 3999;

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RomanError {
    #[error("Empty numeral")]
    Empty,

    #[error("Invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    #[error("Numeral {0:?} is not in canonical form")]
    NonCanonical(String),
}

/// Format `n` as a Roman numeral, or `None` outside 1..=3999.
pub fn to_roman(n: i64) -> Option<String> {
    if n < i64::from(MIN) || n > i64::from(MAX) {
        return None;
    }

    let mut remaining = n as u32;
    let mut result = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
        if remaining == 0 {
            break;
        }
    }
    Some(result)
}

fn symbol_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Parse a canonical Roman numeral.
///
/// A symbol followed by a larger one is subtracted. Only the spelling that
/// `to_roman` would produce is accepted.
pub fn from_roman(numeral: &str) -> Result<u32, RomanError> {
    if numeral.is_empty() {
        return Err(RomanError::Empty);
    }

    let values = numeral
        .chars()
        .enumerate()
        .map(|(position, symbol)| {
            symbol_value(symbol).ok_or(RomanError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let mut total: u32 = 0;
    for (i, value) in values.iter().enumerate() {
        match values.get(i + 1) {
            Some(next) if next > value => total = total.saturating_sub(*value),
            _ => total = total.saturating_add(*value),
        }
    }

    // "IM", "IIII" and friends sum to a value whose canonical spelling differs
    match to_roman(i64::from(total)) {
        Some(canonical) if canonical == numeral => Ok(total),
        _ => Err(RomanError::NonCanonical(numeral.to_string())),
    }
}

/// Roman numeral formatting for integer types.
pub trait Roman {
    fn roman(&self) -> Option<String>;
}

macro_rules! impl_roman {
    ($($t:ty),*) => {
        $(
            impl Roman for $t {
                fn roman(&self) -> Option<String> {
                    i64::try_from(*self).ok().and_then(to_roman)
                }
            }
        )*
    };
}

impl_roman!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
