//! Money Module
//!
//! Decimal rounding and cart total calculation.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{info, warn};

use crate::error::Result;
use crate::pricing::{MONEY_SCALE, ZERO_TOTAL};

// == Rounding ==
/// Rounds to two decimal places with exact halves going away from zero.
///
/// The result always carries a scale of two, so `20` becomes `20.00`.
pub fn round_half_up(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

// == Cart Item ==
/// A single cart line as submitted by the client.
///
/// Values are kept as given; negative lines are filtered out by
/// [`cart_total`] rather than rejected on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartItem {
    pub price: Decimal,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(price: Decimal, quantity: i64) -> Self {
        Self { price, quantity }
    }

    /// Whether the line may contribute to a total.
    pub fn is_countable(&self) -> bool {
        self.price >= Decimal::ZERO && self.quantity >= 0
    }

    /// price x quantity, or None when the product does not fit a Decimal.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

// == Cart Total ==
/// Sums price x quantity over every usable cart line.
///
/// Lines that failed to parse, carry a negative price or quantity, or
/// overflow are skipped with a warning. The sum is rounded half-up to
/// cents; an empty or fully invalid cart totals `0.00`.
pub fn cart_total<I>(items: I) -> Decimal
where
    I: IntoIterator<Item = Result<CartItem>>,
{
    let mut total = Decimal::ZERO;
    let mut valid_items: u32 = 0;

    for (index, item) in items.into_iter().enumerate() {
        let item = match item {
            Ok(item) => item,
            Err(err) => {
                warn!(index, error = %err, "Skipping invalid cart item");
                continue;
            }
        };

        if !item.is_countable() {
            warn!(
                index,
                price = %item.price,
                quantity = item.quantity,
                "Skipping cart item with negative price or quantity"
            );
            continue;
        }

        match item.line_total().and_then(|line| total.checked_add(line)) {
            Some(sum) => {
                total = sum;
                valid_items += 1;
            }
            None => warn!(index, "Skipping cart item that overflows the total"),
        }
    }

    if valid_items == 0 {
        return ZERO_TOTAL;
    }

    let average = total / Decimal::from(valid_items);
    info!(valid_items, average = %average.round_dp(4), "Cart calculation");

    round_half_up(total)
}
