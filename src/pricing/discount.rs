//! Discount Module
//!
//! Discount code table and memoized discount application.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use crate::cache::JsonCache;
use crate::error::ApiError;
use crate::pricing::{round_half_up, MAX_DISCOUNT_RATE, ZERO_TOTAL};

// == Discount Code ==
/// Discount codes the store ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountCode {
    Save10,
    Welcome20,
    Student15,
}

impl DiscountCode {
    pub const ALL: [DiscountCode; 3] = [
        DiscountCode::Save10,
        DiscountCode::Welcome20,
        DiscountCode::Student15,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DiscountCode::Save10 => "SAVE10",
            DiscountCode::Welcome20 => "WELCOME20",
            DiscountCode::Student15 => "STUDENT15",
        }
    }

    /// Fraction taken off the subtotal.
    pub fn rate(&self) -> Decimal {
        match self {
            DiscountCode::Save10 => dec!(0.10),
            DiscountCode::Welcome20 => dec!(0.20),
            DiscountCode::Student15 => dec!(0.15),
        }
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiscountCode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DiscountCode::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ApiError::InvalidInput(format!("Unknown discount code '{}'", s)))
    }
}

// == Discount Table ==
/// Maps upper-cased code strings to their configured rate.
///
/// Rates are stored as configured; [`DiscountTable::effective_rate`] applies
/// the cap.
#[derive(Debug, Clone)]
pub struct DiscountTable {
    rates: HashMap<String, Decimal>,
}

impl Default for DiscountTable {
    fn default() -> Self {
        let rates = DiscountCode::ALL
            .into_iter()
            .map(|code| (code.as_str().to_string(), code.rate()))
            .collect();
        Self { rates }
    }
}

impl DiscountTable {
    /// Creates a table with no codes.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Adds or replaces a code.
    pub fn with_rate(mut self, code: &str, rate: Decimal) -> Self {
        self.rates.insert(code.to_uppercase(), rate);
        self
    }

    /// Configured rate for a code, case-insensitive; unknown codes give zero.
    pub fn rate_for(&self, code: &str) -> Decimal {
        self.rates
            .get(&code.to_uppercase())
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Rate actually applied: the configured rate clamped to [0, 50%].
    pub fn effective_rate(&self, code: &str) -> Decimal {
        let rate = self.rate_for(code);
        if rate > MAX_DISCOUNT_RATE {
            warn!(code, %rate, cap = %MAX_DISCOUNT_RATE, "Discount rate capped");
            MAX_DISCOUNT_RATE
        } else if rate < Decimal::ZERO {
            warn!(code, %rate, "Ignoring negative discount rate");
            Decimal::ZERO
        } else {
            rate
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

// == Cache Key ==
/// Memoization key for a (subtotal, code) pair.
///
/// The code is hashed as submitted, so `save10` and `SAVE10` are memoized
/// separately even though they resolve to the same rate.
pub fn discount_cache_key(subtotal: Decimal, code: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}_{}", subtotal, code).as_bytes());
    format!("discount_{}", hex::encode(hasher.finalize()))
}

// == Apply Discount ==
/// Applies a discount code to a subtotal, rounding half-up to cents.
///
/// Negative subtotals yield `0.00`. Results are memoized in `cache`, so a
/// repeated request is answered from the cache and counted as a hit.
pub fn apply_discount(
    cache: &mut JsonCache,
    table: &DiscountTable,
    subtotal: Decimal,
    code: &str,
) -> Decimal {
    if subtotal < Decimal::ZERO {
        debug!(%subtotal, "Negative subtotal, discount result is zero");
        return ZERO_TOTAL;
    }

    let key = discount_cache_key(subtotal, code);

    if let Some(cached) = cache.get(&key) {
        if let Some(result) = cached.as_str().and_then(|s| Decimal::from_str(s).ok()) {
            debug!(key = %key, "Cache hit for discount calculation");
            return result;
        }
    }

    let rate = table.effective_rate(code);
    let result = round_half_up(subtotal * (Decimal::ONE - rate));

    cache.set(key, Value::String(result.to_string()));

    let percent = rate * dec!(100);
    match code.parse::<DiscountCode>() {
        Ok(known) => info!(code = %known, %percent, %result, "Discount applied"),
        Err(_) => info!(code, %percent, %result, "Discount applied for non-standard code"),
    }
    result
}
