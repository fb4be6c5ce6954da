//! JSON round trips through the validating serde impls
#![cfg(feature = "serde")]

use anyvals::{NonNegativeF64, NonZeroI64, NumericString, Percent};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Invoice {
    number: NumericString,
    lines: Vec<InvoiceLine>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct InvoiceLine {
    amount: NonNegativeF64,
    discount: Percent,
    ledger: NonZeroI64,
}

fn sample() -> Invoice {
    Invoice {
        number: NumericString::from_literal("000123"),
        lines: vec![
            InvoiceLine {
                amount: NonNegativeF64::assert_valid(19.5),
                discount: Percent::assert_valid(0),
                ledger: NonZeroI64::assert_valid(-7),
            },
            InvoiceLine {
                amount: NonNegativeF64::assert_valid(0.0),
                discount: Percent::assert_valid(100),
                ledger: NonZeroI64::assert_valid(i64::MAX),
            },
        ],
    }
}

#[test]
fn roundtrip_preserves_values() {
    let original = sample();
    let json = serde_json::to_string(&original).unwrap();
    let restored: Invoice = serde_json::from_str(&json).unwrap();
    assert_eq!(original, restored);
}

#[test]
fn serialized_form_is_the_bare_primitive() {
    let json = serde_json::to_value(sample()).unwrap();
    assert_eq!(json["number"], "000123");
    assert_eq!(json["lines"][0]["amount"], 19.5);
    assert_eq!(json["lines"][1]["discount"], 100);
}

#[test]
fn invalid_nested_value_fails_with_violation_message() {
    let json = r#"{"number":"1","lines":[{"amount":-1.0,"discount":5,"ledger":1}]}"#;
    let err = serde_json::from_str::<Invoice>(json).unwrap_err().to_string();
    assert!(err.contains("NonNegative f64"), "{err}");
    assert!(err.contains("got -1.0"), "{err}");
}

#[test]
fn non_digit_number_is_rejected() {
    let json = r#"{"number":"12-3","lines":[]}"#;
    assert!(serde_json::from_str::<Invoice>(json).is_err());
}
