//! Request DTOs for the bookstore API
//!
//! Defines the structure of incoming HTTP request bodies. Money and
//! quantity fields arrive as either JSON numbers or strings, so they are
//! captured as raw [`Value`]s and interpreted here at the boundary.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::payment::CardData;
use crate::pricing::CartItem;

fn zero() -> Value {
    Value::from(0)
}

/// Request body for POST /api/calculate-total
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateTotalRequest {
    #[serde(default)]
    pub items: Vec<CartItemPayload>,
}

/// One cart line; missing fields count as zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CartItemPayload {
    #[serde(default = "zero")]
    pub price: Value,
    #[serde(default = "zero")]
    pub quantity: Value,
}

impl CartItemPayload {
    pub fn new(price: impl Into<Value>, quantity: impl Into<Value>) -> Self {
        Self {
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    /// Interprets the line, failing on an unparsable price or quantity.
    pub fn to_cart_item(&self) -> Result<CartItem> {
        Ok(CartItem::new(
            parse_decimal(&self.price)?,
            parse_quantity(&self.quantity)?,
        ))
    }
}

/// Request body for POST /api/apply-discount
#[derive(Debug, Clone, Deserialize)]
pub struct ApplyDiscountRequest {
    #[serde(default = "zero")]
    pub subtotal: Value,
    #[serde(default)]
    pub discount_code: String,
}

/// Request body for POST /api/validate-payment
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatePaymentRequest {
    #[serde(default)]
    pub number: Value,
    #[serde(default)]
    pub cvv: Value,
    #[serde(default)]
    pub expiry: Value,
    #[serde(default = "zero")]
    pub amount: Value,
}

impl ValidatePaymentRequest {
    pub fn to_card_data(&self) -> CardData {
        CardData {
            number: value_text(&self.number),
            cvv: value_text(&self.cvv),
            expiry: value_text(&self.expiry),
            amount: parse_decimal(&self.amount).ok(),
        }
    }
}

// == Field Parsing ==
/// Reads a decimal from a JSON number or numeric string.
///
/// Numbers are parsed from their textual form, so `10.005` stays exact.
/// Scientific notation is accepted.
pub fn parse_decimal(value: &Value) -> Result<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        other => return Err(ApiError::InvalidInput(format!("'{}' is not a number", other))),
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| ApiError::InvalidInput(format!("'{}' is not a valid amount", text)))
}

/// Reads a whole quantity; fractional JSON numbers are truncated.
///
/// Numbers outside the `i64` range are rejected rather than saturated.
pub fn parse_quantity(value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(truncate_to_i64))
            .ok_or_else(|| ApiError::InvalidInput(format!("'{}' is not a quantity", n))),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidInput(format!("'{}' is not a quantity", s))),
        other => Err(ApiError::InvalidInput(format!(
            "'{}' is not a quantity",
            other
        ))),
    }
}

/// `i64::MAX as f64` rounds up to 2^63, so the upper bound is exclusive.
fn truncate_to_i64(f: f64) -> Option<i64> {
    let whole = f.trunc();
    (whole.is_finite() && whole >= i64::MIN as f64 && whole < i64::MAX as f64)
        .then_some(whole as i64)
}

/// Text form of a loosely typed field; null becomes empty.
fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_calculate_total_request_deserialize() {
        let json = r#"{"items": [{"price": 10.005, "quantity": 2}, {"price": "4.50"}]}"#;
        let req: CalculateTotalRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.items.len(), 2);
        assert_eq!(
            req.items[0].to_cart_item().unwrap(),
            CartItem::new(dec!(10.005), 2)
        );
        assert_eq!(
            req.items[1].to_cart_item().unwrap(),
            CartItem::new(dec!(4.50), 0)
        );
    }

    #[test]
    fn test_calculate_total_request_missing_items() {
        let req: CalculateTotalRequest = serde_json::from_str("{}").unwrap();
        assert!(req.items.is_empty());
    }

    #[test]
    fn test_cart_item_with_bad_fields() {
        assert!(CartItemPayload::new("abc", 1).to_cart_item().is_err());
        assert!(CartItemPayload::new(1, "two").to_cart_item().is_err());
        assert!(CartItemPayload::new(Value::Null, 1).to_cart_item().is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(&json!(19.99)).unwrap(), dec!(19.99));
        assert_eq!(parse_decimal(&json!(" 7 ")).unwrap(), dec!(7));
        assert_eq!(parse_decimal(&json!("1e2")).unwrap(), dec!(100));
        assert!(parse_decimal(&json!(true)).is_err());
        assert!(parse_decimal(&json!([1])).is_err());
        assert!(parse_decimal(&json!("")).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity(&json!(3)).unwrap(), 3);
        assert_eq!(parse_quantity(&json!(2.9)).unwrap(), 2);
        assert_eq!(parse_quantity(&json!("-4")).unwrap(), -4);
        assert!(parse_quantity(&json!("2.5")).is_err());
        assert!(parse_quantity(&json!(null)).is_err());
    }

    #[test]
    fn test_parse_quantity_rejects_out_of_range_numbers() {
        assert!(parse_quantity(&json!(1e300)).is_err());
        assert!(parse_quantity(&json!(-1e300)).is_err());
        assert!(parse_quantity(&json!(9.3e18)).is_err());
        assert_eq!(parse_quantity(&json!(-4.7)).unwrap(), -4);

        let item = CartItemPayload::new(1, json!(1e300)).to_cart_item();
        assert!(item.is_err());
    }

    #[test]
    fn test_parse_decimal_outside_decimal_range() {
        assert!(parse_decimal(&json!(1e300)).is_err());
        assert!(parse_decimal(&json!("1e300")).is_err());
    }

    #[test]
    fn test_apply_discount_request_defaults() {
        let req: ApplyDiscountRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.subtotal, json!(0));
        assert_eq!(req.discount_code, "");
    }

    #[test]
    fn test_validate_payment_request_to_card_data() {
        let json = r#"{"number": 4532015112830366, "cvv": "123", "expiry": "12/30", "amount": "abc"}"#;
        let req: ValidatePaymentRequest = serde_json::from_str(json).unwrap();
        let card = req.to_card_data();

        assert_eq!(card.number, "4532015112830366");
        assert_eq!(card.cvv, "123");
        assert_eq!(card.expiry, "12/30");
        assert_eq!(card.amount, None);
    }

    #[test]
    fn test_validate_payment_request_missing_fields() {
        let req: ValidatePaymentRequest = serde_json::from_str("{}").unwrap();
        let card = req.to_card_data();

        assert_eq!(card.number, "");
        assert_eq!(card.amount, Some(Decimal::ZERO));
    }
}
