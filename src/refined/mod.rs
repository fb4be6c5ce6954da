//! Refined types: primitives that carry a proven invariant
//!
//! This module implements the "parse, don't validate" pattern for
//! numbers, digit characters and digit strings: a value is checked once,
//! when it is wrapped, and the wrapper's type then guarantees the check
//! held for as long as the value lives. There is no mutation API; every
//! "change" produces a new, re-checked value.
//!
//! # Quick Start
//!
//! ```rust
//! use anyvals::{PositiveI32, NonNegativeF64};
//!
//! // Validate at the boundary
//! let count = PositiveI32::try_parse(5).unwrap();
//! assert!(PositiveI32::try_parse(0).is_none());
//!
//! // -0.0 is accepted where zero is
//! let zero = NonNegativeF64::try_parse(-0.0).unwrap();
//! assert_eq!(zero.value(), 0.0);
//!
//! // Arithmetic delegates to the primitive
//! assert_eq!(count + 3_i32, 8);
//! ```
//!
//! # Choosing a constructor
//!
//! | Constructor          | Invalid input gives                          |
//! |----------------------|----------------------------------------------|
//! | `try_parse`          | `None`                                       |
//! | `new`/`try_validate` | `Err(ConstraintViolation)`                   |
//! | `parse_or_default`   | the supplied default                         |
//! | `pass_or_else`       | `PassFail::Fail(f(raw))`                     |
//! | `good_or_else`       | `Validation::Failure(f(raw))`                |
//! | `right_or_else`      | `Either::Left(f(raw))`                       |
//! | `assert_valid`       | a panic: the caller promised validity        |
//! | `from_literal`       | a panic, or a compile error in `const` code  |
//!
//! # Custom Predicates
//!
//! ```rust
//! use anyvals::refined::{Predicate, Refined};
//!
//! pub struct Even;
//!
//! impl Predicate<i64> for Even {
//!     const NAME: &'static str = "Even";
//!
//!     fn check(value: &i64) -> bool {
//!         value % 2 == 0
//!     }
//!
//!     fn description() -> &'static str {
//!         "even number"
//!     }
//!
//!     fn example() -> i64 {
//!         2
//!     }
//! }
//!
//! type EvenI64 = Refined<i64, Even>;
//!
//! assert!(EvenI64::try_parse(4).is_some());
//! assert!(EvenI64::try_parse(5).is_none());
//! ```

mod aliases;
#[cfg(feature = "proptest")]
mod arbitrary;
mod ops;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;
mod text;
mod validation;
mod widening;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::error::ConstraintViolation;

// Re-export core types
pub use aliases::*;
pub use ops::{Mirror, SumProof};
pub use predicates::numeric::{
    Finite, InRange, NanFree, Negative, NegativeFinite, NonNegative, NonNegativeFinite,
    NonPositive, NonPositiveFinite, NonZero, NonZeroFinite, Positive, PositiveFinite,
};
pub use predicates::string::Numeric;
pub use validation::{FieldError, ValidationFieldExt};
pub use widening::{FiniteCounterpart, Implies};

/// A primitive that refined types can wrap.
///
/// Supplies the short type name used in [`ConstraintViolation`] messages.
/// Implemented for `i32`, `i64`, `f32`, `f64`, `char` and `String`;
/// implement it for your own types to use them with custom predicates.
pub trait Scalar: fmt::Debug + Sized {
    /// Name shown in messages, e.g. `"i32"`
    const TYPE_NAME: &'static str;
}

macro_rules! impl_scalar {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Scalar for $ty {
                const TYPE_NAME: &'static str = $name;
            }
        )+
    };
}

impl_scalar!(
    i32 => "i32",
    i64 => "i64",
    f32 => "f32",
    f64 => "f64",
    char => "char",
    String => "String",
);

/// A constraint that values of type T can be checked against.
///
/// Predicates are stateless marker types: they only define the check.
/// The values themselves are stored in [`Refined<T, P>`].
pub trait Predicate<T>: Send + Sync + 'static {
    /// Short name of the constraint, e.g. `"Positive"`
    const NAME: &'static str;

    /// Returns `true` when the value satisfies the constraint
    fn check(value: &T) -> bool;

    /// Human-readable description of what this predicate requires,
    /// carried as [`ConstraintViolation::requirement`]
    fn description() -> &'static str;

    /// A value that satisfies the predicate, quoted in error messages
    fn example() -> T;
}

/// A value of type T that is guaranteed to satisfy predicate P.
///
/// `Refined` has the same memory layout as `T`: the predicate is a
/// zero-sized marker.
///
/// # Example
///
/// ```rust
/// use anyvals::refined::{Refined, Positive};
///
/// type PositiveI32 = Refined<i32, Positive>;
///
/// fn repeat(n: PositiveI32) -> usize {
///     // n is guaranteed > 0
///     n.value() as usize
/// }
///
/// assert_eq!(repeat(PositiveI32::assert_valid(3)), 3);
/// assert_eq!(std::mem::size_of::<PositiveI32>(), std::mem::size_of::<i32>());
/// ```
#[repr(transparent)]
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Wraps a value without checking it.
    ///
    /// Only for results whose validity is structurally proven, such as the
    /// sum of two positive floats.
    #[inline]
    pub(crate) const fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Get a reference to the inner value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// let n = PositiveI32::new(42).unwrap();
    /// assert_eq!(*n.get(), 42);
    /// ```
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Consume the refined value, returning the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the wrapped primitive.
    #[inline]
    pub fn value(&self) -> T
    where
        T: Copy,
    {
        self.value
    }

    /// Returns `true` when `value` satisfies `P`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::NonZeroF64;
    ///
    /// assert!(NonZeroF64::is_valid(f64::INFINITY));
    /// assert!(!NonZeroF64::is_valid(-0.0));
    /// assert!(!NonZeroF64::is_valid(f64::NAN));
    /// ```
    #[inline]
    pub fn is_valid(value: T) -> bool {
        P::check(&value)
    }

    /// Wraps `value` if it satisfies `P`, otherwise returns `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// assert_eq!(PositiveI32::try_parse(5).map(|n| n.value()), Some(5));
    /// assert!(PositiveI32::try_parse(0).is_none());
    /// ```
    #[inline]
    pub fn try_parse(value: T) -> Option<Self> {
        P::check(&value).then(|| Self::new_unchecked(value))
    }

    /// Wraps `value` if it satisfies `P`, otherwise returns `default`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI64;
    ///
    /// let fallback = PositiveI64::assert_valid(1);
    /// assert_eq!(PositiveI64::parse_or_default(7, fallback).value(), 7);
    /// assert_eq!(PositiveI64::parse_or_default(-7, fallback).value(), 1);
    /// ```
    #[inline]
    pub fn parse_or_default(value: T, default: Self) -> Self {
        Self::try_parse(value).unwrap_or(default)
    }
}

impl<T: Scalar, P: Predicate<T>> Refined<T, P> {
    /// Create a new refined value, checking the predicate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintViolation`] naming the predicate and the
    /// rejected value if the predicate fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::refined::{Refined, Positive};
    ///
    /// assert!(Refined::<i32, Positive>::new(42).is_ok());
    /// assert!(Refined::<i32, Positive>::new(-5).is_err());
    /// ```
    pub fn new(value: T) -> Result<Self, ConstraintViolation> {
        Self::checked("new", value)
    }

    /// Same check as [`new`](Self::new), for call sites that read better
    /// with the `try_` prefix.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintViolation`] if the predicate fails.
    pub fn try_validate(value: T) -> Result<Self, ConstraintViolation> {
        Self::checked("try_validate", value)
    }

    /// Wraps a value the caller knows to be valid.
    ///
    /// # Panics
    ///
    /// Panics with the [`ConstraintViolation`] message if `value` does not
    /// satisfy `P`. An invalid value here is a bug at the call site.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// let n = PositiveI32::assert_valid(5);
    /// assert_eq!(n.value(), 5);
    /// ```
    ///
    /// ```rust,should_panic
    /// use anyvals::PositiveI32;
    ///
    /// // panics: "assert_valid can only be invoked on valid Positive i32 values, ..."
    /// let _ = PositiveI32::assert_valid(0);
    /// ```
    #[track_caller]
    pub fn assert_valid(value: T) -> Self {
        match Self::checked("assert_valid", value) {
            Ok(refined) => refined,
            Err(violation) => abort(violation),
        }
    }

    /// Applies `f` to the inner value and re-wraps the result.
    ///
    /// # Panics
    ///
    /// Panics like [`assert_valid`](Self::assert_valid) if the result of `f`
    /// does not satisfy `P`. Use [`try_map`](Self::try_map) to get the
    /// failure as a value instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// let n = PositiveI32::assert_valid(41);
    /// assert_eq!(n.ensuring_valid(|x| x + 1).value(), 42);
    /// ```
    #[track_caller]
    pub fn ensuring_valid<F>(self, f: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        match Self::checked("ensuring_valid", f(self.value)) {
            Ok(refined) => refined,
            Err(violation) => abort(violation),
        }
    }

    /// Map the inner value, re-checking the predicate.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintViolation`] if the new value doesn't satisfy
    /// the predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::PositiveI32;
    ///
    /// let n = PositiveI32::new(42).unwrap();
    /// assert!(n.try_map(|x| x * 2).is_ok());
    /// assert!(n.try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, ConstraintViolation>
    where
        F: FnOnce(T) -> T,
    {
        Self::checked("try_map", f(self.value))
    }

    fn checked(operation: &'static str, value: T) -> Result<Self, ConstraintViolation> {
        if P::check(&value) {
            Ok(Self::new_unchecked(value))
        } else {
            Err(violation::<T, P>(operation, &value))
        }
    }
}

pub(crate) fn violation<T: Scalar, P: Predicate<T>>(
    operation: &'static str,
    value: &T,
) -> ConstraintViolation {
    let violation = ConstraintViolation::new(
        operation,
        P::NAME,
        T::TYPE_NAME,
        P::description(),
        value,
        &P::example(),
    );
    #[cfg(feature = "tracing")]
    tracing::debug!(
        constraint = violation.constraint,
        type_name = violation.type_name,
        requirement = violation.requirement,
        value = %violation.value,
        "{} rejected value",
        operation
    );
    violation
}

#[track_caller]
fn abort(violation: ConstraintViolation) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        constraint = violation.constraint,
        type_name = violation.type_name,
        value = %violation.value,
        "invariant violated: {}",
        violation
    );
    panic!("{}", violation)
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(P::NAME).field(&self.value).finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

// Equality and ordering ignore the predicate: a Positive 3 equals a NonZero 3.
impl<T, P, Q> PartialEq<Refined<T, Q>> for Refined<T, P>
where
    T: PartialEq,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn eq(&self, other: &Refined<T, Q>) -> bool {
        self.value == other.value
    }
}

impl<T, P, Q> PartialOrd<Refined<T, Q>> for Refined<T, P>
where
    T: PartialOrd,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn partial_cmp(&self, other: &Refined<T, Q>) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

macro_rules! impl_total_order {
    ($($ty:ty),+) => {
        $(
            impl<P: Predicate<$ty>> Eq for Refined<$ty, P> {}

            impl<P: Predicate<$ty>> Ord for Refined<$ty, P> {
                #[inline]
                fn cmp(&self, other: &Self) -> Ordering {
                    self.value.cmp(&other.value)
                }
            }

            impl<P: Predicate<$ty>> Hash for Refined<$ty, P> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.value.hash(state);
                }
            }
        )+
    };
}

impl_total_order!(i32, i64, char, String);

// NanFree predicates never admit NaN, so the float order is total here.
// -0.0 and 0.0 compare equal, so they must hash equal too.
macro_rules! impl_float_total_order {
    ($($ty:ty),+) => {
        $(
            impl<P: Predicate<$ty> + NanFree> Eq for Refined<$ty, P> {}

            impl<P: Predicate<$ty> + NanFree> Ord for Refined<$ty, P> {
                #[inline]
                fn cmp(&self, other: &Self) -> Ordering {
                    self.value
                        .partial_cmp(&other.value)
                        .unwrap_or(Ordering::Equal)
                }
            }

            impl<P: Predicate<$ty> + NanFree> Hash for Refined<$ty, P> {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    (self.value + 0.0).to_bits().hash(state);
                }
            }
        )+
    };
}

impl_float_total_order!(f32, f64);

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

// Read-only: there is deliberately no DerefMut.
impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
