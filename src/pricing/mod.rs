//! Pricing Module
//!
//! Cart totals and discount codes, computed with `rust_decimal` so that cent
//! amounts never pass through binary floating point.

mod discount;
mod money;

pub use discount::{apply_discount, discount_cache_key, DiscountCode, DiscountTable};
pub use money::{cart_total, round_half_up, CartItem};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// == Public Constants ==
/// Decimal places kept on every money result
pub const MONEY_SCALE: u32 = 2;

/// Highest discount fraction ever applied
pub const MAX_DISCOUNT_RATE: Decimal = dec!(0.50);

/// `0.00`, returned for empty carts and rejected subtotals
pub const ZERO_TOTAL: Decimal = dec!(0.00);
