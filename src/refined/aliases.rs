//! Type aliases for the supported refined types
//!
//! Names follow `<Constraint><Primitive>`: [`PositiveI32`],
//! [`NonNegativeI64`], [`NegativeFiniteF32`], [`FiniteF64`], ... plus the
//! text types [`NumericChar`] and [`NumericString`] and the range type
//! [`Percent`].
//!
//! Every numeric alias carries `MIN` and `MAX` constants, and the
//! non-finite float aliases carry the infinity they admit.
//!
//! # Example
//!
//! ```rust
//! use anyvals::refined::{NumericString, PositiveI32, NonNegativeI64, NegativeF64};
//!
//! let digits = NumericString::new("2024".to_string()).unwrap();
//! let age = PositiveI32::new(25).unwrap();
//! let balance = NonNegativeI64::new(1000).unwrap();
//!
//! assert_eq!(PositiveI32::MIN.value(), 1);
//! assert_eq!(NegativeF64::NEG_INFINITY.value(), f64::NEG_INFINITY);
//! ```

use super::predicates::numeric::{
    Finite, InRange, Negative, NegativeFinite, NonNegative, NonNegativeFinite, NonPositive,
    NonPositiveFinite, NonZero, NonZeroFinite, Positive, PositiveFinite,
};
use super::predicates::string::Numeric;
use super::Refined;

// ============================================================================
// Integer aliases
// ============================================================================

/// An i32 that is guaranteed to be positive (> 0)
pub type PositiveI32 = Refined<i32, Positive>;

/// An i32 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI32 = Refined<i32, NonNegative>;

/// An i32 that is guaranteed to be negative (< 0)
pub type NegativeI32 = Refined<i32, Negative>;

/// An i32 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveI32 = Refined<i32, NonPositive>;

/// An i32 that is guaranteed to be non-zero (!= 0)
pub type NonZeroI32 = Refined<i32, NonZero>;

/// An i64 that is guaranteed to be positive (> 0)
pub type PositiveI64 = Refined<i64, Positive>;

/// An i64 that is guaranteed to be non-negative (>= 0)
pub type NonNegativeI64 = Refined<i64, NonNegative>;

/// An i64 that is guaranteed to be negative (< 0)
pub type NegativeI64 = Refined<i64, Negative>;

/// An i64 that is guaranteed to be non-positive (<= 0)
pub type NonPositiveI64 = Refined<i64, NonPositive>;

/// An i64 that is guaranteed to be non-zero (!= 0)
pub type NonZeroI64 = Refined<i64, NonZero>;

// ============================================================================
// Float aliases
// ============================================================================

/// An f32 that is guaranteed to be positive (> 0, may be +inf)
pub type PositiveF32 = Refined<f32, Positive>;

/// An f32 that is guaranteed to be non-negative (>= 0, may be +inf)
pub type NonNegativeF32 = Refined<f32, NonNegative>;

/// An f32 that is guaranteed to be negative (< 0, may be -inf)
pub type NegativeF32 = Refined<f32, Negative>;

/// An f32 that is guaranteed to be non-positive (<= 0, may be -inf)
pub type NonPositiveF32 = Refined<f32, NonPositive>;

/// An f32 that is guaranteed to be non-zero (may be infinite)
pub type NonZeroF32 = Refined<f32, NonZero>;

/// An f32 that is guaranteed to be positive and finite
pub type PositiveFiniteF32 = Refined<f32, PositiveFinite>;

/// An f32 that is guaranteed to be non-negative and finite
pub type NonNegativeFiniteF32 = Refined<f32, NonNegativeFinite>;

/// An f32 that is guaranteed to be negative and finite
pub type NegativeFiniteF32 = Refined<f32, NegativeFinite>;

/// An f32 that is guaranteed to be non-positive and finite
pub type NonPositiveFiniteF32 = Refined<f32, NonPositiveFinite>;

/// An f32 that is guaranteed to be non-zero and finite
pub type NonZeroFiniteF32 = Refined<f32, NonZeroFinite>;

/// An f32 that is guaranteed to be finite
pub type FiniteF32 = Refined<f32, Finite>;

/// An f64 that is guaranteed to be positive (> 0, may be +inf)
pub type PositiveF64 = Refined<f64, Positive>;

/// An f64 that is guaranteed to be non-negative (>= 0, may be +inf)
pub type NonNegativeF64 = Refined<f64, NonNegative>;

/// An f64 that is guaranteed to be negative (< 0, may be -inf)
pub type NegativeF64 = Refined<f64, Negative>;

/// An f64 that is guaranteed to be non-positive (<= 0, may be -inf)
pub type NonPositiveF64 = Refined<f64, NonPositive>;

/// An f64 that is guaranteed to be non-zero (may be infinite)
pub type NonZeroF64 = Refined<f64, NonZero>;

/// An f64 that is guaranteed to be positive and finite
pub type PositiveFiniteF64 = Refined<f64, PositiveFinite>;

/// An f64 that is guaranteed to be non-negative and finite
pub type NonNegativeFiniteF64 = Refined<f64, NonNegativeFinite>;

/// An f64 that is guaranteed to be negative and finite
pub type NegativeFiniteF64 = Refined<f64, NegativeFinite>;

/// An f64 that is guaranteed to be non-positive and finite
pub type NonPositiveFiniteF64 = Refined<f64, NonPositiveFinite>;

/// An f64 that is guaranteed to be non-zero and finite
pub type NonZeroFiniteF64 = Refined<f64, NonZeroFinite>;

/// An f64 that is guaranteed to be finite
pub type FiniteF64 = Refined<f64, Finite>;

// ============================================================================
// Text and domain aliases
// ============================================================================

/// A character that is guaranteed to be an ASCII digit
pub type NumericChar = Refined<char, Numeric>;

/// A string that is guaranteed to contain only ASCII digits (possibly none)
pub type NumericString = Refined<String, Numeric>;

/// A percentage value (0-100 inclusive)
pub type Percent = Refined<i32, InRange<0, 100>>;

impl Percent {
    /// The smallest percentage, `0`
    pub const MIN: Self = Self::new_unchecked(0);

    /// The largest percentage, `100`
    pub const MAX: Self = Self::new_unchecked(100);
}

// ============================================================================
// Bounds
// ============================================================================

macro_rules! impl_bounds {
    ($($alias:ty => $min:expr, $max:expr;)+) => {
        $(
            impl $alias {
                /// The smallest value of this type
                pub const MIN: Self = Self::new_unchecked($min);

                /// The largest value of this type
                pub const MAX: Self = Self::new_unchecked($max);
            }
        )+
    };
}

impl_bounds! {
    PositiveI32 => 1, i32::MAX;
    NonNegativeI32 => 0, i32::MAX;
    NegativeI32 => i32::MIN, -1;
    NonPositiveI32 => i32::MIN, 0;
    NonZeroI32 => i32::MIN, i32::MAX;
    PositiveI64 => 1, i64::MAX;
    NonNegativeI64 => 0, i64::MAX;
    NegativeI64 => i64::MIN, -1;
    NonPositiveI64 => i64::MIN, 0;
    NonZeroI64 => i64::MIN, i64::MAX;
    NumericChar => '0', '9';
}

// Float MIN/MAX are the finite extremes; the smallest positive value is the
// smallest subnormal, not f32::MIN_POSITIVE.
macro_rules! impl_float_bounds {
    ($ty:ident, $pos:ty, $nonneg:ty, $neg:ty, $nonpos:ty, $nonzero:ty,
     $posf:ty, $nonnegf:ty, $negf:ty, $nonposf:ty, $nonzerof:ty, $finite:ty) => {
        impl_bounds! {
            $pos => $ty::from_bits(1), $ty::MAX;
            $nonneg => 0.0, $ty::MAX;
            $neg => $ty::MIN, -$ty::from_bits(1);
            $nonpos => $ty::MIN, 0.0;
            $nonzero => $ty::MIN, $ty::MAX;
            $posf => $ty::from_bits(1), $ty::MAX;
            $nonnegf => 0.0, $ty::MAX;
            $negf => $ty::MIN, -$ty::from_bits(1);
            $nonposf => $ty::MIN, 0.0;
            $nonzerof => $ty::MIN, $ty::MAX;
            $finite => $ty::MIN, $ty::MAX;
        }

        impl $pos {
            /// Positive infinity, which this type admits
            pub const INFINITY: Self = Self::new_unchecked($ty::INFINITY);
        }

        impl $nonneg {
            /// Positive infinity, which this type admits
            pub const INFINITY: Self = Self::new_unchecked($ty::INFINITY);
        }

        impl $neg {
            /// Negative infinity, which this type admits
            pub const NEG_INFINITY: Self = Self::new_unchecked($ty::NEG_INFINITY);
        }

        impl $nonpos {
            /// Negative infinity, which this type admits
            pub const NEG_INFINITY: Self = Self::new_unchecked($ty::NEG_INFINITY);
        }

        impl $nonzero {
            /// Positive infinity, which this type admits
            pub const INFINITY: Self = Self::new_unchecked($ty::INFINITY);

            /// Negative infinity, which this type admits
            pub const NEG_INFINITY: Self = Self::new_unchecked($ty::NEG_INFINITY);
        }
    };
}

impl_float_bounds!(
    f32,
    PositiveF32,
    NonNegativeF32,
    NegativeF32,
    NonPositiveF32,
    NonZeroF32,
    PositiveFiniteF32,
    NonNegativeFiniteF32,
    NegativeFiniteF32,
    NonPositiveFiniteF32,
    NonZeroFiniteF32,
    FiniteF32
);

impl_float_bounds!(
    f64,
    PositiveF64,
    NonNegativeF64,
    NegativeF64,
    NonPositiveF64,
    NonZeroF64,
    PositiveFiniteF64,
    NonNegativeFiniteF64,
    NegativeFiniteF64,
    NonPositiveFiniteF64,
    NonZeroFiniteF64,
    FiniteF64
);
