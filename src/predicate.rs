use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{ConfigError, Failure, FieldState, Predicate};

// Two to four letter TLD; no plus tags or quoted local parts.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$")
        .expect("email pattern is a valid regex")
});

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Check one predicate against a field.
///
/// Never panics: unparsable values and arguments make the predicate fail.
///
/// # Errors
///
/// Returns [`Failure::Invalid`] with the predicate's message when the value is
/// rejected, or a [`ConfigError::UnknownRule`] for [`Predicate::Unknown`].
pub fn evaluate<F: FieldState + ?Sized>(predicate: &Predicate, field: &F) -> Result<(), Failure> {
    let value = field.raw_value();

    let passed = match predicate {
        Predicate::Email => EMAIL_PATTERN.is_match(value),
        Predicate::Numeric => parse_number(value).is_some(),
        Predicate::Unchecked => !field.is_checked(),
        Predicate::Date => is_date(value),
        Predicate::InList(list) => list.split(',').any(|entry| entry == value),
        Predicate::NotInList(list) => !list.split(',').any(|entry| entry == value),
        Predicate::Length(arg) => parse_length(arg).is_some_and(|n| char_len(value) == n),
        Predicate::MinLength(arg) => parse_length(arg).is_some_and(|n| char_len(value) >= n),
        Predicate::MaxLength(arg) => parse_length(arg).is_some_and(|n| char_len(value) <= n),
        Predicate::EqualThan(arg) => compare(value, arg, |a, b| a == b),
        Predicate::GreaterThan(arg) => compare(value, arg, |a, b| a > b),
        Predicate::LessThan(arg) => compare(value, arg, |a, b| a < b),
        Predicate::Unknown(rule) => {
            return Err(ConfigError::UnknownRule { rule: rule.clone() }.into());
        }
    };

    if passed {
        Ok(())
    } else {
        Err(Failure::invalid(predicate.failure_message()))
    }
}

/// Finite number, surrounding whitespace ignored.
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_length(arg: &str) -> Option<usize> {
    arg.trim().parse().ok()
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn compare(value: &str, arg: &str, op: impl Fn(f64, f64) -> bool) -> bool {
    match (parse_number(value), parse_number(arg)) {
        (Some(a), Some(b)) => op(a, b),
        _ => false,
    }
}

/// RFC 3339, the listed date and date-time layouts, or a bare `YYYY` or
/// `YYYY-MM`. Impossible calendar dates are rejected.
fn is_date(value: &str) -> bool {
    let value = value.trim();
    DateTime::parse_from_rfc3339(value).is_ok()
        || is_partial_date(value)
        || DATE_FORMATS
            .iter()
            .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|fmt| NaiveDateTime::parse_from_str(value, fmt).is_ok())
}

/// `YYYY` and `YYYY-MM`, read as the first day of that year or month.
fn is_partial_date(value: &str) -> bool {
    if !value.get(..4).is_some_and(|year| year.bytes().all(|b| b.is_ascii_digit())) {
        return false;
    }
    let completed = match value.len() {
        4 => format!("{value}-01-01"),
        7 => format!("{value}-01"),
        _ => return false,
    };
    NaiveDate::parse_from_str(&completed, "%Y-%m-%d").is_ok()
}
