//! A right-biased sum of two values
//!
//! [`right_or_else`](crate::refined::Refined::right_or_else) reports an
//! invalid input as `Left` and a refined value as `Right`. Unlike `Result`,
//! the left side need not be an error type: it is often the raw input
//! itself, kept for a fallback path.
//!
//! `map` and `and_then` act on `Right`, the happy path.
//!
//! # Examples
//!
//! ```rust
//! use anyvals::{Either, PositiveI32};
//!
//! let described = PositiveI32::right_or_else(-4, |raw| raw).fold(
//!     |raw| format!("rejected {raw}"),
//!     |n| format!("accepted {n}"),
//! );
//! assert_eq!(described, "rejected -4");
//! ```

use crate::Validation;

/// A value that is either `Left(L)` or `Right(R)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// The left variant
    Left(L),
    /// The right variant
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Create a `Left`
    #[inline]
    pub fn left(value: L) -> Self {
        Either::Left(value)
    }

    /// Create a `Right`
    #[inline]
    pub fn right(value: R) -> Self {
        Either::Right(value)
    }

    /// Returns `true` for `Left`
    #[inline]
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` for `Right`
    #[inline]
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The left value, if any
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The right value, if any
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow both sides
    #[inline]
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Transform the right value
    ///
    /// ```rust
    /// use anyvals::{Either, NonZeroI64};
    ///
    /// let halved = NonZeroI64::right_or_else(10, |raw| raw).map(|n| n.value() / 2);
    /// assert_eq!(halved, Either::Right(5));
    /// ```
    #[inline]
    pub fn map<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Transform the left value
    #[inline]
    pub fn map_left<L2, F>(self, f: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Chain a computation on the right value
    #[inline]
    pub fn and_then<R2, F>(self, f: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => f(r),
        }
    }

    /// Collapse both sides into one value
    #[inline]
    pub fn fold<T, F, G>(self, left_fn: F, right_fn: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Either::Left(l) => left_fn(l),
            Either::Right(r) => right_fn(r),
        }
    }

    /// Exchange the sides
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Either::Left(l) => Either::Right(l),
            Either::Right(r) => Either::Left(r),
        }
    }

    /// The right value, or `default`
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Either::Left(_) => default,
            Either::Right(r) => r,
        }
    }

    /// Convert to `Result` (`Right` becomes `Ok`, `Left` becomes `Err`)
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Either::Left(l) => Err(l),
            Either::Right(r) => Ok(r),
        }
    }

    /// Create from `Result` (`Ok` becomes `Right`, `Err` becomes `Left`)
    #[inline]
    pub fn from_result(result: Result<R, L>) -> Self {
        match result {
            Ok(r) => Either::Right(r),
            Err(l) => Either::Left(l),
        }
    }

    /// Convert to `Validation` (`Right` becomes `Success`, `Left` becomes `Failure`)
    ///
    /// ```rust
    /// use anyvals::{Either, Validation};
    ///
    /// let left: Either<&str, i32> = Either::left("error");
    /// assert_eq!(left.into_validation(), Validation::Failure("error"));
    /// ```
    #[inline]
    pub fn into_validation(self) -> Validation<R, L> {
        match self {
            Either::Left(l) => Validation::Failure(l),
            Either::Right(r) => Validation::Success(r),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        Either::from_result(result)
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        either.into_result()
    }
}
