//! Card field validators.
//!
//! Each check is a pure function over the submitted text; aggregation into
//! a [`ValidationResult`](crate::payment::ValidationResult) lives in the
//! validator module.

use chrono::{Datelike, Local, NaiveDate};

use crate::payment::{luhn_check, MAX_CARD_DIGITS, MIN_CARD_DIGITS, TEST_CARD_SUFFIX};

/// Strips surrounding whitespace and inner spaces from a card number.
pub fn normalize_card_number(raw: &str) -> String {
    raw.trim().replace(' ', "")
}

/// Whether the digit count is within the accepted range.
pub fn has_valid_length(number: &str) -> bool {
    (MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&number.len())
}

/// Whether the number ends with the reserved test sequence.
pub fn is_test_number(number: &str) -> bool {
    number.ends_with(TEST_CARD_SUFFIX)
}

// == Card Number ==
/// Validates a normalized card number: Luhn checksum, 13-19 digits, and not
/// a test number.
pub fn validate_card(number: &str) -> bool {
    luhn_check(number) && has_valid_length(number) && !is_test_number(number)
}

// == CVV ==
/// Validates a CVV: three or four ASCII digits.
pub fn validate_cvv(cvv: &str) -> bool {
    matches!(cvv.len(), 3 | 4) && cvv.bytes().all(|b| b.is_ascii_digit())
}

// == Expiry ==
/// Validates an `MM/YY` expiry against today's local date.
pub fn validate_expiry(expiry: &str) -> bool {
    validate_expiry_on(expiry, Local::now().date_naive())
}

/// Validates an `MM/YY` expiry against the given date.
///
/// Whitespace around either part is tolerated. The month must be 1-12 and
/// the year one or two digits. Cards expire after their printed month, so
/// the current month is still valid.
pub fn validate_expiry_on(expiry: &str, today: NaiveDate) -> bool {
    let Some((month, year)) = parse_expiry(expiry) else {
        return false;
    };

    let current_year = today.year().rem_euclid(100) as u32;
    let current_month = today.month();

    (year, month) >= (current_year, current_month)
}

fn parse_expiry(expiry: &str) -> Option<(u32, u32)> {
    let (month, year) = expiry.split_once('/')?;
    let (month, year) = (month.trim(), year.trim());

    if year.is_empty() || year.len() > 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month: u32 = month.parse().ok()?;
    let year: u32 = year.parse().ok()?;

    (1..=12).contains(&month).then_some((month, year))
}
