//! Payment Module
//!
//! Card number, CVV, expiry and amount validation. Nothing here talks to a
//! payment network; failures are reported as messages, never raised.

mod card;
mod luhn;
mod validator;

pub use card::{
    has_valid_length, is_test_number, normalize_card_number, validate_card, validate_cvv,
    validate_expiry, validate_expiry_on,
};
pub use luhn::luhn_check;
pub use validator::{validate_payment, CardData, PaymentValidator, ValidationResult};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// == Public Constants ==
/// Shortest accepted card number
pub const MIN_CARD_DIGITS: usize = 13;

/// Longest accepted card number
pub const MAX_CARD_DIGITS: usize = 19;

/// Card numbers ending with this are test cards
pub const TEST_CARD_SUFFIX: &str = "1111";

/// Amounts above this are flagged with a warning
pub const DEFAULT_LARGE_TRANSACTION_THRESHOLD: Decimal = dec!(10000.00);
