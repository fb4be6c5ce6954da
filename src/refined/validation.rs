//! Accumulating constructors for refined types
//!
//! Each constructor here reports a miss as a value in one of the crate's
//! result shapes, so several fields can be checked at once and every
//! failure reported together.
//!
//! # Example
//!
//! ```rust
//! use anyvals::{ConstraintViolation, NumericString, PositiveI32, Validation};
//!
//! fn validate_order(
//!     sku: String,
//!     quantity: i32,
//! ) -> Validation<(NumericString, PositiveI32), Vec<ConstraintViolation>> {
//!     NumericString::validate_vec(sku).and(PositiveI32::validate_vec(quantity))
//! }
//!
//! assert!(validate_order("0042".to_string(), 3).is_success());
//!
//! match validate_order("42a".to_string(), 0) {
//!     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use std::fmt;

use super::{Predicate, Refined, Scalar};
use crate::error::ConstraintViolation;
use crate::{Either, PassFail, Validation};

impl<T: Scalar, P: Predicate<T>> Refined<T, P> {
    /// Checks `value`, mapping the raw input to an error on failure.
    ///
    /// Only the outcome is kept: `Pass` carries no value. Use it to check
    /// inputs whose refined form is not needed afterwards.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::{PassFail, PositiveI32};
    ///
    /// let check = |n| PositiveI32::pass_or_else(n, |bad| format!("{bad} is not positive"));
    /// assert_eq!(check(3), PassFail::Pass);
    /// assert_eq!(check(-3), PassFail::Fail("-3 is not positive".to_string()));
    /// ```
    pub fn pass_or_else<E, F>(value: T, f: F) -> PassFail<E>
    where
        F: FnOnce(T) -> E,
    {
        if P::check(&value) {
            PassFail::Pass
        } else {
            log_miss::<T, P>("pass_or_else", &value);
            PassFail::Fail(f(value))
        }
    }

    /// Wraps `value` as a `Success`, or maps the raw input to a `Failure`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::{NonZeroI64, Validation};
    ///
    /// let v = NonZeroI64::good_or_else(0, |raw| vec![format!("{raw} is zero")]);
    /// assert_eq!(v.into_result().unwrap_err(), vec!["0 is zero".to_string()]);
    /// ```
    pub fn good_or_else<E, F>(value: T, f: F) -> Validation<Self, E>
    where
        F: FnOnce(T) -> E,
    {
        if P::check(&value) {
            Validation::Success(Self::new_unchecked(value))
        } else {
            log_miss::<T, P>("good_or_else", &value);
            Validation::Failure(f(value))
        }
    }

    /// Wraps `value` as a `Right`, or maps the raw input to a `Left`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::{Either, NegativeF64};
    ///
    /// let e = NegativeF64::right_or_else(1.0, |raw| raw);
    /// assert_eq!(e.into_left(), Some(1.0));
    /// ```
    pub fn right_or_else<E, F>(value: T, f: F) -> Either<E, Self>
    where
        F: FnOnce(T) -> E,
    {
        if P::check(&value) {
            Either::Right(Self::new_unchecked(value))
        } else {
            log_miss::<T, P>("right_or_else", &value);
            Either::Left(f(value))
        }
    }

    /// Validate a value, returning a Validation result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// assert!(PositiveI32::validate(42).is_success());
    /// assert!(PositiveI32::validate(-5).is_failure());
    /// ```
    pub fn validate(value: T) -> Validation<Self, ConstraintViolation> {
        Validation::from_result(Self::new(value))
    }

    /// Validate a value, wrapping the error in a Vec for accumulation.
    pub fn validate_vec(value: T) -> Validation<Self, Vec<ConstraintViolation>> {
        Self::validate(value).map_err(|e| vec![e])
    }

    /// Validate with a field name for error context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::{Percent, Validation};
    ///
    /// match Percent::validate_field(120, "discount") {
    ///     Validation::Failure(err) => assert!(err.to_string().starts_with("discount: ")),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn validate_field(
        value: T,
        field: &'static str,
    ) -> Validation<Self, FieldError<ConstraintViolation>> {
        Self::validate(value).with_field(field)
    }
}

// The `*_or_else` constructors never build a ConstraintViolation for the
// caller, so the miss is only logged.
#[cfg(feature = "tracing")]
fn log_miss<T: Scalar, P: Predicate<T>>(operation: &'static str, value: &T) {
    tracing::debug!(
        constraint = P::NAME,
        type_name = T::TYPE_NAME,
        requirement = P::description(),
        value = ?value,
        "{} rejected value",
        operation
    );
}

#[cfg(not(feature = "tracing"))]
fn log_miss<T: Scalar, P: Predicate<T>>(_operation: &'static str, _value: &T) {}

/// Error with field context
///
/// # Example
///
/// ```rust
/// use anyvals::refined::FieldError;
///
/// let err = FieldError {
///     field: "zip",
///     error: "must be digits",
/// };
/// assert_eq!(format!("{}", err), "zip: must be digits");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError<E> {
    /// The field name
    pub field: &'static str,
    /// The underlying error
    pub error: E,
}

impl<E: fmt::Display> fmt::Display for FieldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for FieldError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Extension trait for adding field context to validations
pub trait ValidationFieldExt<T, E> {
    /// Add field context to a validation error
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>>;
}

impl<T, E> ValidationFieldExt<T, E> for Validation<T, E> {
    fn with_field(self, field: &'static str) -> Validation<T, FieldError<E>> {
        self.map_err(|error| FieldError { field, error })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refined::{NumericString, PositiveI32};

    #[test]
    fn test_pass_or_else() {
        assert_eq!(PositiveI32::pass_or_else(1, |n| n), PassFail::Pass);
        assert_eq!(PositiveI32::pass_or_else(-1, |n| n), PassFail::Fail(-1));
    }

    #[test]
    fn test_pass_or_else_does_not_call_f_on_pass() {
        let result = PositiveI32::pass_or_else(1, |_| -> u8 { panic!("called") });
        assert!(result.is_pass());
    }

    #[test]
    fn test_good_or_else() {
        let good = PositiveI32::good_or_else(5, |n| n.to_string());
        assert_eq!(good.into_result().map(|p| p.value()), Ok(5));

        let bad = PositiveI32::good_or_else(-5, |n| n.to_string());
        assert_eq!(bad.into_result().unwrap_err(), "-5");
    }

    #[test]
    fn test_right_or_else() {
        let right = PositiveI32::right_or_else(5, |n| n);
        assert_eq!(right.into_right().map(|p| p.value()), Some(5));

        let left = PositiveI32::right_or_else(0, |n| n * 10);
        assert_eq!(left.into_left(), Some(0));
    }

    #[test]
    fn test_validate() {
        assert!(PositiveI32::validate(42).is_success());
        let err = PositiveI32::validate(-5).into_result().unwrap_err();
        assert_eq!(err.operation, "new");
        assert_eq!(err.value, "-5");
    }

    #[test]
    fn test_validate_vec_accumulates() {
        let result = NumericString::validate_vec("12x".to_string())
            .and(PositiveI32::validate_vec(0));
        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].constraint, "Numeric");
                assert_eq!(errors[1].constraint, "Positive");
            }
            Validation::Success(_) => panic!("Expected failure with 2 errors"),
        }
    }

    #[test]
    fn test_validate_field() {
        match PositiveI32::validate_field(-1, "quantity") {
            Validation::Failure(err) => {
                assert_eq!(err.field, "quantity");
                assert_eq!(err.error.constraint, "Positive");
            }
            Validation::Success(_) => panic!("Expected failure"),
        }
    }

    #[test]
    fn test_combined_field_validation() {
        let v1 = NumericString::validate("abc".to_string())
            .with_field("zip")
            .map_err(|e| vec![e]);
        let v2 = PositiveI32::validate(-5)
            .with_field("age")
            .map_err(|e| vec![e]);

        match v1.and(v2) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].field, "zip");
                assert_eq!(errors[1].field, "age");
            }
            Validation::Success(_) => panic!("Expected failure with 2 errors"),
        }
    }

    #[test]
    fn test_field_error_source() {
        use std::error::Error;

        let err = FieldError {
            field: "age",
            error: PositiveI32::new(0).unwrap_err(),
        };
        assert!(err.source().is_some());
    }
}
