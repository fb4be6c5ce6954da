//! The error carried by every failed constraint check.
//!
//! A [`ConstraintViolation`] is returned as a value by the non-panicking
//! constructors (`new`, `try_validate`, `validate`, ...) and its message is the
//! panic payload of the asserting ones (`assert_valid`, `ensuring_valid`).

use std::fmt;

use thiserror::Error;

/// A value failed the predicate of a refined type.
///
/// # Example
///
/// ```rust
/// use anyvals::PositiveI32;
///
/// let err = PositiveI32::new(0).unwrap_err();
/// assert_eq!(err.constraint, "Positive");
/// assert_eq!(err.value, "0");
/// assert_eq!(err.requirement, "positive number (> 0)");
/// assert_eq!(
///     err.to_string(),
///     "new can only be invoked on valid Positive i32 values, e.g. Positive(42); got 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{operation} can only be invoked on valid {constraint} {type_name} values, \
     e.g. {constraint}({example}); got {value}"
)]
pub struct ConstraintViolation {
    /// The operation that rejected the value, e.g. `"assert_valid"`
    pub operation: &'static str,
    /// Name of the violated predicate, e.g. `"Positive"`
    pub constraint: &'static str,
    /// Name of the underlying primitive, e.g. `"i32"`
    pub type_name: &'static str,
    /// What the predicate requires, e.g. `"positive number (> 0)"`
    pub requirement: &'static str,
    /// The rejected value, rendered with `Debug`
    pub value: String,
    /// A value that would have been accepted
    pub example: String,
}

impl ConstraintViolation {
    pub(crate) fn new<T: fmt::Debug>(
        operation: &'static str,
        constraint: &'static str,
        type_name: &'static str,
        requirement: &'static str,
        value: &T,
        example: &T,
    ) -> Self {
        Self {
            operation,
            constraint,
            type_name,
            requirement,
            value: format!("{value:?}"),
            example: format!("{example:?}"),
        }
    }

    /// Returns a copy of this violation attributed to another operation.
    #[must_use]
    pub fn during(mut self, operation: &'static str) -> Self {
        self.operation = operation;
        self
    }
}
