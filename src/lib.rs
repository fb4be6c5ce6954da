//! # anyvals
//!
//! Numbers, digit characters and digit strings that carry a proven
//! constraint in their type.
//!
//! A [`PositiveI32`] is an `i32` that has been checked to be `> 0` exactly
//! once, when it was built. After that the type is the proof: functions
//! that take a `PositiveI32` never re-check, and values only change by
//! building new ones.
//!
//! ## Quick Example
//!
//! ```rust
//! use anyvals::{literal, NonNegativeF64, NumericString, PositiveI32, Validation};
//!
//! // Compile-time checked literal
//! const BATCH: PositiveI32 = literal!(PositiveI32, 25);
//!
//! // Runtime checks at the boundary
//! let zip = NumericString::try_parse("02134".to_string()).unwrap();
//! assert!(NonNegativeF64::try_parse(f64::NAN).is_none());
//!
//! // Accumulate every failure at once
//! let checked = PositiveI32::validate_vec(0).and(NumericString::validate_vec("12a".to_string()));
//! assert!(matches!(checked, Validation::Failure(ref errors) if errors.len() == 2));
//!
//! // Arithmetic gives the primitive
//! assert_eq!(BATCH * 4_i32, 100);
//! assert_eq!(zip.char_at(0).map(|c| c.as_digit()), Some(0));
//! ```
//!
//! ## Modules
//!
//! - [`refined`]: the [`Refined`] wrapper, predicates, aliases, operators
//!   and conversions
//! - [`validation`]: [`Validation`] and [`PassFail`] for error accumulation
//! - [`either`]: the right-biased [`Either`]
//! - [`error`]: [`ConstraintViolation`]
//! - [`testing`]: assertion macros and proptest support
//!
//! ## Features
//!
//! - `serde`: transparent `Serialize`, validating `Deserialize`
//! - `tracing`: debug events for rejected values, error events before
//!   invariant panics
//! - `proptest`: `Arbitrary` for every alias and for the result shapes

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod either;
pub mod error;
pub mod refined;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use either::Either;
pub use error::ConstraintViolation;
pub use refined::{
    FiniteF32, FiniteF64, NegativeF32, NegativeF64, NegativeFiniteF32, NegativeFiniteF64,
    NegativeI32, NegativeI64, NonNegativeF32, NonNegativeF64, NonNegativeFiniteF32,
    NonNegativeFiniteF64, NonNegativeI32, NonNegativeI64, NonPositiveF32, NonPositiveF64,
    NonPositiveFiniteF32, NonPositiveFiniteF64, NonPositiveI32, NonPositiveI64, NonZeroF32,
    NonZeroF64, NonZeroFiniteF32, NonZeroFiniteF64, NonZeroI32, NonZeroI64, NumericChar,
    NumericString, Percent, PositiveF32, PositiveF64, PositiveFiniteF32, PositiveFiniteF64,
    PositiveI32, PositiveI64, Predicate, Refined,
};
pub use semigroup::Semigroup;
pub use validation::{PassFail, Validation};

/// Builds a refined value from a literal, rejecting invalid literals at
/// compile time.
///
/// Expands to `Alias::from_literal(value)` inside an inline `const` block,
/// so the predicate runs during compilation. Works for every numeric
/// alias and [`NumericChar`]; building a [`NumericString`] allocates, so
/// use [`NumericString::from_literal`] at runtime instead.
///
/// # Example
///
/// ```rust
/// use anyvals::{literal, NegativeF64, NumericChar, Percent};
///
/// let rate = literal!(Percent, 15);
/// let offset = literal!(NegativeF64, -0.5);
/// let digit = literal!(NumericChar, '7');
/// assert_eq!((rate.value(), offset.value(), digit.as_digit()), (15, -0.5, 7));
/// ```
///
/// ```rust,compile_fail
/// use anyvals::{literal, PositiveI32};
///
/// let zero = literal!(PositiveI32, 0);
/// ```
#[macro_export]
macro_rules! literal {
    ($alias:ty, $value:expr) => {
        const { <$alias>::from_literal($value) }
    };
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::either::Either;
    pub use crate::error::ConstraintViolation;
    pub use crate::literal;
    pub use crate::refined::{FieldError, Predicate, Refined, ValidationFieldExt};
    pub use crate::refined::{
        NegativeF64, NegativeI32, NegativeI64, NonNegativeF64, NonNegativeI32, NonNegativeI64,
        NonZeroF64, NonZeroI32, NonZeroI64, NumericChar, NumericString, Percent, PositiveF64,
        PositiveI32, PositiveI64,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::{PassFail, Validation};
}
