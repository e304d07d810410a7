use lazy_static::lazy_static;
use regex::Regex;

use super::model::MonophoneError;

lazy_static! {
    /// Integer or single-point decimal, optionally signed so negatives fail loudly.
    static ref NUMERAL: Regex = Regex::new(r"^-?[0-9]+(?:\.[0-9]+)?$").unwrap();
}

pub(crate) const ONES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Returns true if `token` has numeral shape (integer or decimal).
pub fn is_numeral(token: &str) -> bool {
    NUMERAL.is_match(token)
}

/// Expand a numeral string into English words.
///
/// Decimals are read digit by digit with `.` spoken as "point"
/// (`"3.14"` → `"three point one four"`). Integers are supported up to 999.
///
/// # Errors
/// Returns [`MonophoneError::Format`] for strings that are not numerals,
/// for negative values and for integers of 1000 or more.
pub fn expand_number(numeral: &str) -> Result<String, MonophoneError> {
    if !is_numeral(numeral) {
        return Err(MonophoneError::Format(format!(
            "'{numeral}' is not a number"
        )));
    }
    if numeral.starts_with('-') {
        return Err(MonophoneError::Format(format!(
            "negative number '{numeral}' is not supported"
        )));
    }
    if numeral.contains('.') {
        return Ok(expand_digits(numeral));
    }

    numeral
        .parse::<u32>()
        .ok()
        .and_then(expand_integer)
        .ok_or_else(|| {
            MonophoneError::Format(format!(
                "number '{numeral}' is out of range (only 0 to 999 can be spoken)"
            ))
        })
}

/// Read a decimal numeral one character at a time.
fn expand_digits(numeral: &str) -> String {
    numeral
        .chars()
        .filter_map(|ch| match ch {
            '.' => Some("point"),
            _ => ch.to_digit(10).map(|d| ONES[d as usize]),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Expand an integer in `0..=999`. Returns `None` above that.
pub fn expand_integer(value: u32) -> Option<String> {
    let words = match value {
        0..=9 => ONES[value as usize].to_string(),
        10..=19 => TEENS[(value - 10) as usize].to_string(),
        20..=99 => tens_and_ones(value),
        100..=999 => {
            let hundreds = ONES[(value / 100) as usize];
            match value % 100 {
                0 => format!("{hundreds} hundred"),
                rest @ 1..=9 => format!("{hundreds} hundred and {}", ONES[rest as usize]),
                rest @ 10..=19 => {
                    format!("{hundreds} hundred and {}", TEENS[(rest - 10) as usize])
                }
                rest if rest % 10 == 0 => {
                    format!("{hundreds} hundred {}", TENS[(rest / 10) as usize])
                }
                rest => format!("{hundreds} hundred and {}", tens_and_ones(rest)),
            }
        }
        _ => return None,
    };
    Some(words)
}

/// 20..=99: "forty", "forty nine".
fn tens_and_ones(value: u32) -> String {
    let tens = TENS[(value / 10) as usize];
    match value % 10 {
        0 => tens.to_string(),
        ones => format!("{tens} {}", ONES[ones as usize]),
    }
}

#[cfg(test)]
mod tests {
    use super::{expand_integer, expand_number, is_numeral};
    use crate::engines::monophone::MonophoneError;

    fn expand(numeral: &str) -> String {
        expand_number(numeral).expect("numeral should expand")
    }

    #[test]
    fn expands_single_digits_and_teens() {
        assert_eq!(expand("0"), "zero");
        assert_eq!(expand("7"), "seven");
        assert_eq!(expand("10"), "ten");
        assert_eq!(expand("11"), "eleven");
        assert_eq!(expand("19"), "nineteen");
    }

    #[test]
    fn expands_tens() {
        assert_eq!(expand("20"), "twenty");
        assert_eq!(expand("49"), "forty nine");
        assert_eq!(expand("90"), "ninety");
    }

    #[test]
    fn expands_hundreds_with_and_rules() {
        assert_eq!(expand("100"), "one hundred");
        assert_eq!(expand("101"), "one hundred and one");
        assert_eq!(expand("110"), "one hundred and ten");
        assert_eq!(expand("112"), "one hundred and twelve");
        assert_eq!(expand("120"), "one hundred twenty");
        assert_eq!(expand("342"), "three hundred and forty two");
        assert_eq!(expand("999"), "nine hundred and ninety nine");
    }

    #[test]
    fn expands_decimals_digit_by_digit() {
        assert_eq!(expand("3.14"), "three point one four");
        assert_eq!(expand("10.05"), "one zero point zero five");
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(expand("007"), "seven");
        assert_eq!(expand("05"), "five");
    }

    #[test]
    fn rejects_unsupported_magnitudes() {
        assert!(matches!(expand_number("1000"), Err(MonophoneError::Format(_))));
        assert!(matches!(
            expand_number("99999999999999"),
            Err(MonophoneError::Format(_))
        ));
        assert!(matches!(expand_number("-5"), Err(MonophoneError::Format(_))));
        assert_eq!(expand_integer(1000), None);
    }

    #[test]
    fn rejects_non_numerals() {
        assert!(matches!(expand_number("3.1.4"), Err(MonophoneError::Format(_))));
        assert!(matches!(expand_number("cats"), Err(MonophoneError::Format(_))));
    }

    #[test]
    fn numeral_shape_is_ascii_only() {
        assert!(is_numeral("344"));
        assert!(is_numeral("3.14"));
        assert!(is_numeral("-2"));
        assert!(!is_numeral("3."));
        assert!(!is_numeral("1e3"));
        assert!(!is_numeral("٣"));
        assert!(!is_numeral(""));
    }
}
