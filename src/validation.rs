//! Result shapes that accumulate errors
//!
//! - [`Validation<T, E>`]: like `Result`, but [`and`](Validation::and)
//!   keeps both failures instead of stopping at the first one
//! - [`PassFail<E>`]: a check whose success carries no value
//!
//! Failures are merged with [`Semigroup::combine`], so `Vec<E>` collects
//! every error in order.
//!
//! # Examples
//!
//! ```
//! use anyvals::{NonNegativeI64, Percent, Validation};
//!
//! let result = Percent::validate_vec(140).and(NonNegativeI64::validate_vec(-3));
//!
//! match result {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.len(), 2);
//!         assert_eq!(errors[0].constraint, "InRange");
//!         assert_eq!(errors[1].constraint, "NonNegative");
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Examples
///
/// ```
/// use anyvals::Validation;
///
/// let v = Validation::<_, Vec<&str>>::success(42);
/// assert_eq!(v.into_result(), Ok(42));
///
/// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
/// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
/// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert a `Result` into a `Validation`
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Returns `true` for `Success`
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Returns `true` for `Failure`
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value
    ///
    /// ```
    /// use anyvals::{PositiveI32, Validation};
    ///
    /// let doubled = PositiveI32::validate(21).map(|n| n.value() * 2);
    /// assert_eq!(doubled.into_result().ok(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Chain a dependent validation
    ///
    /// `f` only runs on success, so nothing accumulates across the chain.
    ///
    /// ```
    /// use anyvals::{NonZeroI32, PositiveI32, Validation};
    ///
    /// let quotient = PositiveI32::validate(12)
    ///     .and_then(|n| NonZeroI32::validate(n.value() / 4));
    /// assert!(quotient.is_success());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Both successes give a tuple of the values. Any failure gives a
    /// failure; two failures are combined, left first.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Succeeds with every value in order, or fails with every error
    /// combined in order.
    ///
    /// ```
    /// use anyvals::{NumericChar, Validation};
    ///
    /// let digits = "4a2b".chars().map(NumericChar::validate_vec).collect();
    /// match Validation::all_vec(digits) {
    ///     Validation::Failure(errors) => assert_eq!(errors.len(), 2),
    ///     Validation::Success(_) => unreachable!(),
    /// }
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut failure: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failure = Some(match failure {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

/// The outcome of a check that produces no value
///
/// # Examples
///
/// ```
/// use anyvals::{PassFail, PositiveI32, NumericString};
///
/// let checks = PositiveI32::pass_or_else(0, |raw| vec![format!("quantity {raw}")])
///     .and(NumericString::pass_or_else("12a".to_string(), |raw| vec![format!("sku {raw}")]));
///
/// assert_eq!(
///     checks,
///     PassFail::Fail(vec!["quantity 0".to_string(), "sku 12a".to_string()])
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PassFail<E> {
    /// The check passed
    Pass,
    /// The check failed with an error
    Fail(E),
}

impl<E> PassFail<E> {
    /// Returns `true` for `Pass`
    #[inline]
    pub fn is_pass(&self) -> bool {
        matches!(self, PassFail::Pass)
    }

    /// Returns `true` for `Fail`
    #[inline]
    pub fn is_fail(&self) -> bool {
        matches!(self, PassFail::Fail(_))
    }

    /// Convert a `Result` into a `PassFail`, dropping the success value
    #[inline]
    pub fn from_result<T>(result: Result<T, E>) -> Self {
        match result {
            Ok(_) => PassFail::Pass,
            Err(error) => PassFail::Fail(error),
        }
    }

    /// Convert into a `Result` with a unit success
    #[inline]
    pub fn into_result(self) -> Result<(), E> {
        match self {
            PassFail::Pass => Ok(()),
            PassFail::Fail(error) => Err(error),
        }
    }

    /// Transform the error
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> PassFail<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            PassFail::Pass => PassFail::Pass,
            PassFail::Fail(error) => PassFail::Fail(f(error)),
        }
    }
}

impl<E: Semigroup> PassFail<E> {
    /// Combine two checks, accumulating failures using the Semigroup instance
    pub fn and(self, other: PassFail<E>) -> PassFail<E> {
        match (self, other) {
            (PassFail::Pass, PassFail::Pass) => PassFail::Pass,
            (PassFail::Fail(e1), PassFail::Fail(e2)) => PassFail::Fail(e1.combine(e2)),
            (PassFail::Fail(e), _) | (_, PassFail::Fail(e)) => PassFail::Fail(e),
        }
    }
}
