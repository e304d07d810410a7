use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::model::MonophoneError;
use super::numbers::{expand_integer, ONES};

lazy_static! {
    /// Anything that looks like a slash date, valid or not.
    static ref DATE_SHAPE: Regex = Regex::new(r"^[0-9]{1,2}/[0-9]{1,2}(?:/[0-9]+)?$").unwrap();

    /// `DD/MM`, `DD/MM/YY` or `DD/MM/YYYY` (single-digit day allowed).
    static ref DATE: Regex =
        Regex::new(r"^([0-3]?[0-9])/([0-9]{2})(?:/([0-9]{2}(?:[0-9]{2})?))?$").unwrap();
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ORDINALS: [&str; 13] = [
    "", "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth",
];

/// How a two-digit half of a year that starts with `0` is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearZeroStyle {
    /// Read as a plain number: 1905 → "nineteen five", 1900 → "nineteen zero".
    #[default]
    Plain,
    /// Read with "oh": 1905 → "nineteen oh five", 1900 → "nineteen hundred",
    /// 2000 → "two thousand".
    Oh,
}

/// Returns true if `token` is shaped like a slash date.
///
/// Shape-matching tokens that are not real dates make [`expand_date`] fail.
pub fn is_date_shape(token: &str) -> bool {
    DATE_SHAPE.is_match(token)
}

/// Expand a `DD/MM`, `DD/MM/YY` or `DD/MM/YYYY` date into
/// "the ORDINAL of MONTH [YEAR]".
///
/// Two-digit years are read as 19YY. A four-digit year is read as two
/// two-digit numbers (1980 → "nineteen eighty").
pub fn expand_date(date: &str, style: YearZeroStyle) -> Result<String, MonophoneError> {
    let caps = DATE.captures(date).ok_or_else(|| {
        MonophoneError::Format(format!(
            "'{date}' is not a DD/MM, DD/MM/YY or DD/MM/YYYY date"
        ))
    })?;

    let day = field(&caps, 1, date)?;
    let month = field(&caps, 2, date)?;
    let year = caps.get(3).map(|m| m.as_str());

    if !(1..=12).contains(&month) {
        return Err(MonophoneError::Format(format!(
            "'{date}' has no month {month}"
        )));
    }
    let full_year = match year {
        Some(y) if y.len() == 2 => Some(1900 + field(&caps, 3, date)?),
        Some(_) => Some(field(&caps, 3, date)?),
        None => None,
    };
    if day == 0 || day > days_in_month(month, full_year) {
        return Err(MonophoneError::Format(format!(
            "'{date}' has no day {day} in {}",
            MONTHS[month as usize - 1]
        )));
    }

    let mut phrase = format!(
        "the {} of {}",
        ordinal_day(day),
        MONTHS[month as usize - 1]
    );
    if let Some(year) = year {
        phrase.push(' ');
        phrase.push_str(&expand_year(year, style));
    }
    Ok(phrase)
}

fn field(caps: &Captures<'_>, group: usize, date: &str) -> Result<u32, MonophoneError> {
    caps.get(group)
        .and_then(|m| m.as_str().parse().ok())
        .ok_or_else(|| MonophoneError::Format(format!("'{date}' is not a valid date")))
}

fn days_in_month(month: u32, year: Option<u32>) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        // Without a year, the 29th is allowed.
        2 => match year {
            Some(y) if !is_leap_year(y) => 28,
            _ => 29,
        },
        _ => 31,
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// `day` must be in `1..=31`.
fn ordinal_day(day: u32) -> String {
    match day {
        1..=12 => ORDINALS[day as usize].to_string(),
        13..=19 => format!("{}th", ten_to_ninety_nine(day)),
        20 => "twentieth".to_string(),
        30 => "thirtieth".to_string(),
        31 => "thirty first".to_string(),
        _ => format!(
            "{} {}",
            ten_to_ninety_nine(day / 10 * 10),
            ORDINALS[(day % 10) as usize]
        ),
    }
}

fn ten_to_ninety_nine(value: u32) -> String {
    expand_integer(value).unwrap_or_default()
}

fn expand_year(year: &str, style: YearZeroStyle) -> String {
    let (century_value, century, rest) = if year.len() == 4 {
        let (century, rest) = year.split_at(2);
        (
            century.parse::<u32>().unwrap_or_default(),
            expand_year_half(century, style),
            rest,
        )
    } else {
        (19, "nineteen".to_string(), year)
    };

    if style == YearZeroStyle::Oh && rest == "00" {
        // 2000 → "two thousand", 2100 → "twenty one hundred".
        if century_value != 0 && century_value % 10 == 0 {
            return format!("{} thousand", ONES[(century_value / 10) as usize]);
        }
        return format!("{century} hundred");
    }
    format!("{century} {}", expand_year_half(rest, style))
}

/// `half` is exactly two ASCII digits.
fn expand_year_half(half: &str, style: YearZeroStyle) -> String {
    let value: u32 = half.parse().unwrap_or_default();
    match style {
        YearZeroStyle::Oh if (1..10).contains(&value) => {
            format!("oh {}", ONES[value as usize])
        }
        _ => ten_to_ninety_nine(value),
    }
}
