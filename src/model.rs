//! Wire types for operations and tax results
//!
//! Field names follow the JSON contract of the input format:
//! `{"operation":"buy","unit-cost":10.00,"quantity":100}` in,
//! `{"tax":0.0}` out.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two kinds of stock market operation accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Buy,
    Sell,
}

/// A single buy or sell order within one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operation")]
    pub kind: OperationKind,
    #[serde(rename = "unit-cost", with = "rust_decimal::serde::float")]
    pub unit_cost: Decimal,
    pub quantity: u64,
}

/// Tax owed for one operation, serialized as `{"tax": <value>}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    #[serde(with = "rust_decimal::serde::float")]
    pub tax: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_operation_deserializes_wire_names() {
        let op: Operation =
            serde_json::from_str(r#"{"operation":"buy","unit-cost":10.00,"quantity":100}"#)
                .unwrap();
        assert_eq!(op.kind, OperationKind::Buy);
        assert_eq!(op.unit_cost, dec!(10));
        assert_eq!(op.quantity, 100);
    }

    #[test]
    fn test_operation_accepts_integer_unit_cost() {
        let op: Operation =
            serde_json::from_str(r#"{"operation":"sell","unit-cost":20,"quantity":50}"#).unwrap();
        assert_eq!(op.kind, OperationKind::Sell);
        assert_eq!(op.unit_cost, dec!(20));
    }

    #[test]
    fn test_operation_rejects_unknown_kind() {
        let result: std::result::Result<Operation, _> =
            serde_json::from_str(r#"{"operation":"split","unit-cost":1,"quantity":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_operation_rejects_negative_quantity() {
        let result: std::result::Result<Operation, _> =
            serde_json::from_str(r#"{"operation":"sell","unit-cost":1,"quantity":-5}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_tax_line_serializes_as_number() {
        let line = TaxLine { tax: dec!(10000) };
        assert_eq!(serde_json::to_string(&line).unwrap(), r#"{"tax":10000.0}"#);

        let zero = TaxLine {
            tax: Decimal::ZERO,
        };
        assert_eq!(serde_json::to_string(&zero).unwrap(), r#"{"tax":0.0}"#);
    }
}
