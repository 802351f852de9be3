//! Payment Validator Module
//!
//! Runs every field check over a payment submission and collects the
//! outcome into a [`ValidationResult`].

use chrono::{DateTime, Local, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::payment::{
    has_valid_length, is_test_number, luhn_check, normalize_card_number, validate_cvv,
    validate_expiry_on, DEFAULT_LARGE_TRANSACTION_THRESHOLD,
};

// == Card Data ==
/// Payment fields as submitted at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardData {
    /// Raw card number, spaces allowed
    pub number: String,
    pub cvv: String,
    /// `MM/YY`
    pub expiry: String,
    /// None when the submitted amount could not be parsed
    pub amount: Option<Decimal>,
}

// == Validation Result ==
/// Outcome of a payment validation.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// True when no errors were found; warnings do not affect it
    pub success: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub validation_timestamp: DateTime<Utc>,
}

impl ValidationResult {
    fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
            warnings,
            validation_timestamp: Utc::now(),
        }
    }
}

// == Payment Validator ==
/// Aggregating payment validator.
///
/// The field checks are stateless; the validator only carries the amount
/// above which a transaction is flagged.
#[derive(Debug, Clone)]
pub struct PaymentValidator {
    large_transaction_threshold: Decimal,
}

impl Default for PaymentValidator {
    fn default() -> Self {
        Self::new(DEFAULT_LARGE_TRANSACTION_THRESHOLD)
    }
}

impl PaymentValidator {
    pub fn new(large_transaction_threshold: Decimal) -> Self {
        Self {
            large_transaction_threshold,
        }
    }

    pub fn large_transaction_threshold(&self) -> Decimal {
        self.large_transaction_threshold
    }

    /// Validates a submission against today's local date.
    pub fn validate_payment(&self, card: &CardData) -> ValidationResult {
        self.validate_payment_on(card, Local::now().date_naive())
    }

    /// Validates a submission, judging the expiry against `today`.
    pub fn validate_payment_on(&self, card: &CardData, today: NaiveDate) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let number = normalize_card_number(&card.number);
        if !luhn_check(&number) {
            errors.push("Invalid card number format".to_string());
        }
        if !has_valid_length(&number) {
            errors.push("Invalid card number length".to_string());
        }
        if is_test_number(&number) {
            errors.push("Test card number rejected".to_string());
        }

        if !validate_cvv(&card.cvv) {
            errors.push("Invalid CVV code".to_string());
        }

        if !validate_expiry_on(&card.expiry, today) {
            errors.push("Invalid or expired card".to_string());
        }

        match card.amount {
            None => errors.push("Invalid payment amount format".to_string()),
            Some(amount) if amount <= Decimal::ZERO => {
                errors.push("Invalid payment amount".to_string())
            }
            Some(amount) if amount > self.large_transaction_threshold => {
                info!(%amount, threshold = %self.large_transaction_threshold, "Large transaction flagged");
                warnings.push("Large transaction amount detected".to_string());
            }
            Some(_) => {}
        }

        debug!(
            errors = errors.len(),
            warnings = warnings.len(),
            "Payment validation finished"
        );

        ValidationResult::new(errors, warnings)
    }
}

/// Validates a submission with the default large-transaction threshold.
pub fn validate_payment(card: &CardData) -> ValidationResult {
    PaymentValidator::default().validate_payment(card)
}
