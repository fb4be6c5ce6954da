//! Numeric predicates for refined types
//!
//! Sign predicates, defined for `i32`, `i64`, `f32` and `f64`:
//! - [`Positive`]: value > 0
//! - [`NonNegative`]: value >= 0
//! - [`Negative`]: value < 0
//! - [`NonPositive`]: value <= 0
//! - [`NonZero`]: value != 0
//!
//! Finite predicates, defined for `f32` and `f64` only:
//! - [`PositiveFinite`], [`NonNegativeFinite`], [`NegativeFinite`],
//!   [`NonPositiveFinite`], [`NonZeroFinite`]: the sign predicate, and the value
//!   is neither infinite nor NaN
//! - [`Finite`]: the value is neither infinite nor NaN
//!
//! Range predicate, defined for `i32` and `i64`:
//! - [`InRange<MIN, MAX>`]: MIN <= value <= MAX
//!
//! NaN fails every float predicate. `-0.0` is treated as `0.0`: it passes
//! [`NonNegative`] and [`NonPositive`] and fails [`Positive`], [`Negative`]
//! and [`NonZero`]. Infinities pass the sign predicates of their sign and
//! fail every finite one.
//!
//! # Example
//!
//! ```rust
//! use anyvals::refined::{Refined, Positive, PositiveFinite, InRange};
//!
//! type PositiveF64 = Refined<f64, Positive>;
//! assert!(PositiveF64::is_valid(f64::INFINITY));
//! assert!(!PositiveF64::is_valid(f64::NAN));
//!
//! type PositiveFiniteF64 = Refined<f64, PositiveFinite>;
//! assert!(!PositiveFiniteF64::is_valid(f64::INFINITY));
//!
//! type Percent = Refined<i32, InRange<0, 100>>;
//! assert!(Percent::is_valid(100));
//! assert!(!Percent::is_valid(101));
//! ```

use super::super::{Predicate, Refined};

/// Value must be positive (> 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Positive;

/// Value must be non-negative (>= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegative;

/// Value must be negative (< 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct Negative;

/// Value must be non-positive (<= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPositive;

/// Value must be non-zero (!= 0)
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZero;

/// Value must be positive and finite
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveFinite;

/// Value must be non-negative and finite
#[derive(Debug, Clone, Copy, Default)]
pub struct NonNegativeFinite;

/// Value must be negative and finite
#[derive(Debug, Clone, Copy, Default)]
pub struct NegativeFinite;

/// Value must be non-positive and finite
#[derive(Debug, Clone, Copy, Default)]
pub struct NonPositiveFinite;

/// Value must be non-zero and finite
#[derive(Debug, Clone, Copy, Default)]
pub struct NonZeroFinite;

/// Value must be finite (neither infinite nor NaN)
#[derive(Debug, Clone, Copy, Default)]
pub struct Finite;

/// Value must be in range [MIN, MAX] (inclusive)
#[derive(Debug, Clone, Copy, Default)]
pub struct InRange<const MIN: i64, const MAX: i64>;

// Generates the runtime predicate and the const literal constructor from a
// single check expression, so the two can never disagree.
macro_rules! impl_numeric_predicate {
    ($pred:ident, $name:literal, $desc:literal, $ty:ty, $example:expr, |$v:ident| $check:expr) => {
        impl Predicate<$ty> for $pred {
            const NAME: &'static str = $name;

            #[inline]
            fn check(value: &$ty) -> bool {
                let $v = *value;
                $check
            }

            fn description() -> &'static str {
                $desc
            }

            fn example() -> $ty {
                $example
            }
        }

        impl Refined<$ty, $pred> {
            #[doc = concat!(
                "Wraps a literal, panicking if it is not a valid ",
                $name, " ", stringify!($ty), ".\n\n",
                "In a `const` context the panic is a compile error; see [`literal!`](crate::literal)."
            )]
            #[must_use]
            pub const fn from_literal(value: $ty) -> Self {
                let $v = value;
                if !($check) {
                    panic!(concat!(
                        "from_literal can only be invoked on valid ",
                        $name,
                        " ",
                        stringify!($ty),
                        " values"
                    ));
                }
                Self::new_unchecked(value)
            }
        }
    };
}

macro_rules! impl_sign_predicates {
    ($ty:ty, $zero:expr, $pos:expr, $neg:expr) => {
        impl_numeric_predicate!(Positive, "Positive", "positive number (> 0)", $ty, $pos, |v| v > $zero);
        impl_numeric_predicate!(NonNegative, "NonNegative", "non-negative number (>= 0)", $ty, $pos, |v| v >= $zero);
        impl_numeric_predicate!(Negative, "Negative", "negative number (< 0)", $ty, $neg, |v| v < $zero);
        impl_numeric_predicate!(NonPositive, "NonPositive", "non-positive number (<= 0)", $ty, $neg, |v| v <= $zero);
    };
}

impl_sign_predicates!(i32, 0, 42, -42);
impl_sign_predicates!(i64, 0, 42, -42);
impl_sign_predicates!(f32, 0.0, 42.0, -42.0);
impl_sign_predicates!(f64, 0.0, 42.0, -42.0);

impl_numeric_predicate!(NonZero, "NonZero", "non-zero number (!= 0)", i32, 42, |v| v != 0);
impl_numeric_predicate!(NonZero, "NonZero", "non-zero number (!= 0)", i64, 42, |v| v != 0);

macro_rules! impl_float_predicates {
    ($ty:ty) => {
        // NaN != 0.0 holds, so NaN must be excluded explicitly.
        impl_numeric_predicate!(NonZero, "NonZero", "non-zero number (!= 0)", $ty, 42.0, |v| v != 0.0 && !v.is_nan());
        impl_numeric_predicate!(PositiveFinite, "PositiveFinite", "finite positive number (> 0)", $ty, 42.0, |v| v > 0.0 && v.is_finite());
        impl_numeric_predicate!(NonNegativeFinite, "NonNegativeFinite", "finite non-negative number (>= 0)", $ty, 42.0, |v| v >= 0.0 && v.is_finite());
        impl_numeric_predicate!(NegativeFinite, "NegativeFinite", "finite negative number (< 0)", $ty, -42.0, |v| v < 0.0 && v.is_finite());
        impl_numeric_predicate!(NonPositiveFinite, "NonPositiveFinite", "finite non-positive number (<= 0)", $ty, -42.0, |v| v <= 0.0 && v.is_finite());
        impl_numeric_predicate!(NonZeroFinite, "NonZeroFinite", "finite non-zero number (!= 0)", $ty, 42.0, |v| v != 0.0 && v.is_finite());
        impl_numeric_predicate!(Finite, "Finite", "finite number", $ty, 42.0, |v| v.is_finite());
    };
}

impl_float_predicates!(f32);
impl_float_predicates!(f64);

mod sealed {
    pub trait Sealed {}
}

/// Float predicates that reject NaN.
///
/// Float wrappers get `Eq`, `Ord` and `Hash` only under these predicates,
/// since a wrapper that may hold NaN has no total order. The trait is
/// sealed: a custom float predicate keeps `PartialEq`/`PartialOrd` only.
///
/// ```rust,compile_fail
/// use anyvals::refined::{Predicate, Refined};
///
/// struct AnyF64;
///
/// impl Predicate<f64> for AnyF64 {
///     const NAME: &'static str = "AnyF64";
///     fn check(_: &f64) -> bool { true }
///     fn description() -> &'static str { "any f64" }
///     fn example() -> f64 { 0.0 }
/// }
///
/// let mut values = vec![Refined::<f64, AnyF64>::assert_valid(f64::NAN)];
/// values.sort();
/// ```
pub trait NanFree: sealed::Sealed {}

macro_rules! impl_nan_free {
    ($($pred:ident),+) => {
        $(
            impl sealed::Sealed for $pred {}
            impl NanFree for $pred {}
        )+
    };
}

impl_nan_free!(
    Positive,
    NonNegative,
    Negative,
    NonPositive,
    NonZero,
    PositiveFinite,
    NonNegativeFinite,
    NegativeFinite,
    NonPositiveFinite,
    NonZeroFinite,
    Finite
);

impl<const MIN: i64, const MAX: i64> InRange<MIN, MAX> {
    /// Returns `true` when `value` lies in `MIN..=MAX`.
    #[inline]
    pub const fn contains(value: i64) -> bool {
        value >= MIN && value <= MAX
    }
}

macro_rules! impl_in_range_literal {
    ($($ty:ty),+) => {
        $(
            impl<const MIN: i64, const MAX: i64> Refined<$ty, InRange<MIN, MAX>> {
                #[doc = concat!(
                    "Wraps a literal, panicking if it is outside `MIN..=MAX`.\n\n",
                    "In a `const` context the panic is a compile error; see [`literal!`](crate::literal)."
                )]
                #[must_use]
                pub const fn from_literal(value: $ty) -> Self {
                    if !InRange::<MIN, MAX>::contains(value as i64) {
                        panic!(concat!(
                            "from_literal can only be invoked on valid InRange ",
                            stringify!($ty),
                            " values"
                        ));
                    }
                    Self::new_unchecked(value)
                }
            }
        )+
    };
}

impl_in_range_literal!(i32, i64);

impl<const MIN: i64, const MAX: i64> Predicate<i32> for InRange<MIN, MAX> {
    const NAME: &'static str = "InRange";

    #[inline]
    fn check(value: &i32) -> bool {
        Self::contains(i64::from(*value))
    }

    fn description() -> &'static str {
        "value in range [MIN, MAX]"
    }

    fn example() -> i32 {
        i32::try_from(MIN).unwrap_or(if MIN < 0 { i32::MIN } else { i32::MAX })
    }
}

impl<const MIN: i64, const MAX: i64> Predicate<i64> for InRange<MIN, MAX> {
    const NAME: &'static str = "InRange";

    #[inline]
    fn check(value: &i64) -> bool {
        Self::contains(*value)
    }

    fn description() -> &'static str {
        "value in range [MIN, MAX]"
    }

    fn example() -> i64 {
        MIN
    }
}
