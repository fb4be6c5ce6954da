//! Concrete end-to-end scenarios for the refined aliases

use anyvals::refined::NonNegative;
use anyvals::{
    assert_fail, assert_failure, assert_pass, assert_success, literal, ConstraintViolation, Either,
    NegativeF64, NonNegativeF64, NonNegativeI32, NonZeroF64, NumericChar, NumericString, PassFail,
    Percent, PositiveF64, PositiveI32, PositiveI64, Validation,
};

#[test]
fn positive_int_parses_and_rejects() {
    assert_eq!(PositiveI32::try_parse(5).map(|n| n.value()), Some(5));
    assert!(PositiveI32::try_parse(0).is_none());

    let panic = std::panic::catch_unwind(|| PositiveI32::assert_valid(0)).unwrap_err();
    let message = panic
        .downcast_ref::<String>()
        .expect("panic payload is the formatted violation");
    assert!(message.contains("Positive"));
    assert_eq!(
        message,
        "assert_valid can only be invoked on valid Positive i32 values, e.g. Positive(42); got 0"
    );
}

#[test]
fn non_negative_double_accepts_both_zeros() {
    let zero = NonNegativeF64::try_parse(0.0).unwrap();
    assert_eq!(zero.value(), 0.0);

    let neg_zero = NonNegativeF64::try_parse(-0.0).unwrap();
    assert_eq!(neg_zero.value(), 0.0);
    // The sign bit is kept, not normalized
    assert!(neg_zero.value().is_sign_negative());
    assert_eq!(zero, neg_zero);
}

#[test]
fn non_zero_double_accepts_infinity_rejects_nan() {
    assert!(NonZeroF64::try_parse(f64::INFINITY).is_some());
    assert!(NonZeroF64::try_parse(f64::NEG_INFINITY).is_some());
    assert!(NonZeroF64::try_parse(f64::NAN).is_none());
    assert!(NonZeroF64::try_parse(0.0).is_none());
}

#[test]
fn positive_int_addition_matches_primitive() {
    let three = PositiveI32::assert_valid(3);
    let sum: i32 = three + three;
    assert_eq!(sum, 3 + 3);
}

#[test]
fn numeric_string_char_at_and_rejection() {
    let fifty = NumericString::try_parse("50".to_string()).unwrap();
    assert_eq!(fifty.char_at(0).map(|c| c.value()), "50".chars().next());
    assert_eq!(fifty.char_at(0).map(|c| c.value()), Some('5'));
    assert!(NumericString::try_parse("50a".to_string()).is_none());
}

#[test]
fn positive_doubles_sort() {
    let mut values: Vec<PositiveF64> = [2.2, 4.4, 1.1, 3.3]
        .into_iter()
        .map(PositiveF64::assert_valid)
        .collect();
    values.sort();

    let expected: Vec<PositiveF64> = [1.1, 2.2, 3.3, 4.4]
        .into_iter()
        .map(PositiveF64::assert_valid)
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn every_constructor_agrees_on_validity() {
    for raw in [-1, 0, 50, 100, 101] {
        let valid = Percent::is_valid(raw);
        assert_eq!(Percent::try_parse(raw).is_some(), valid);
        assert_eq!(Percent::new(raw).is_ok(), valid);
        assert_eq!(Percent::try_validate(raw).is_ok(), valid);
        assert_eq!(Percent::validate(raw).is_success(), valid);
        assert_eq!(Percent::good_or_else(raw, |r| r).is_success(), valid);
        assert_eq!(Percent::pass_or_else(raw, |r| r).is_pass(), valid);
        assert_eq!(Percent::right_or_else(raw, |r| r).is_right(), valid);
    }
}

#[test]
fn or_else_constructors_map_the_raw_value() {
    assert_eq!(
        PositiveI64::pass_or_else(-9, |raw| raw * 2),
        PassFail::Fail(-18)
    );
    assert_eq!(
        NegativeF64::right_or_else(2.0, |raw| format!("{raw} >= 0")),
        Either::Left("2 >= 0".to_string())
    );
    let bad = assert_failure!(NumericString::good_or_else("x1".to_string(), |raw| raw.len()));
    assert_eq!(bad, 2);
}

#[test]
fn parse_or_default_falls_back() {
    let fallback = literal!(Percent, 50);
    assert_eq!(Percent::parse_or_default(101, fallback).value(), 50);
    assert_eq!(Percent::parse_or_default(7, fallback).value(), 7);
}

#[test]
fn ensuring_valid_keeps_or_panics() {
    let n = literal!(PositiveI32, 10);
    assert_eq!(n.ensuring_valid(|v| v / 2).value(), 5);

    let result = std::panic::catch_unwind(|| n.ensuring_valid(|v| v - 10));
    assert!(result.is_err());
}

#[test]
fn form_validation_accumulates_every_error() {
    fn validate(
        sku: &str,
        quantity: i32,
        discount: i32,
    ) -> Validation<((NumericString, PositiveI32), Percent), Vec<ConstraintViolation>> {
        NumericString::validate_vec(sku.to_string())
            .and(PositiveI32::validate_vec(quantity))
            .and(Percent::validate_vec(discount))
    }

    let ((sku, quantity), discount) = assert_success!(validate("0042", 3, 10));
    assert_eq!(sku, "0042");
    assert_eq!(quantity.value(), 3);
    assert_eq!(discount.value(), 10);

    let errors = assert_failure!(validate("4x", 0, 250));
    let constraints: Vec<_> = errors.iter().map(|e| e.constraint).collect();
    assert_eq!(constraints, vec!["Numeric", "Positive", "InRange"]);
}

#[test]
fn pass_fail_checks_accumulate() {
    let all_good = PositiveI32::pass_or_else(1, |r| vec![r])
        .and(PositiveI32::pass_or_else(2, |r| vec![r]));
    assert_pass!(all_good);

    let failed = PositiveI32::pass_or_else(-1, |r| vec![r])
        .and(PositiveI32::pass_or_else(5, |r| vec![r]))
        .and(PositiveI32::pass_or_else(-3, |r| vec![r]));
    assert_eq!(assert_fail!(failed), vec![-1, -3]);
}

#[test]
fn digits_convert_to_numbers() {
    let digit = literal!(NumericChar, '7');
    let as_int: NonNegativeI32 = digit.to_non_negative_i32();
    assert_eq!(as_int.value(), 7);

    let widened: NonNegativeI32 = Percent::MAX.into();
    assert_eq!(widened, Percent::MAX.widen::<NonNegative>());
}

#[test]
fn debug_and_display() {
    let p = PositiveF64::assert_valid(1.5);
    assert_eq!(format!("{p:?}"), "Positive(1.5)");
    assert_eq!(p.to_string(), "1.5");

    let s = NumericString::from_literal("12");
    assert_eq!(format!("{s:?}"), "Numeric(\"12\")");
}
