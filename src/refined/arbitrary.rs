//! Proptest `Arbitrary` for the refined aliases (feature-gated)
//!
//! Each strategy draws from the predicate's own domain, including the edge
//! values (`MIN`, `MAX`, infinities, both zeros) where the predicate admits
//! them, so no rejection sampling is needed.
//!
//! # Example
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use anyvals::PositiveI32;
//!
//! proptest! {
//!     #[test]
//!     fn positive_stays_positive(n in any::<PositiveI32>()) {
//!         prop_assert!(n.value() > 0);
//!     }
//! }
//! ```

use proptest::prelude::*;

use super::predicates::numeric::{InRange, Negative, NonNegative, NonPositive, NonZero, Positive};
use super::predicates::string::Numeric;
use super::{Predicate, Refined};

// The final filter only guards against a strategy drifting out of its
// predicate; it never rejects for the strategies below.
macro_rules! impl_arbitrary {
    ($($ty:ty, $pred:ty => $strategy:expr;)+) => {
        $(
            impl Arbitrary for Refined<$ty, $pred> {
                type Parameters = ();
                type Strategy = BoxedStrategy<Self>;

                fn arbitrary_with((): ()) -> Self::Strategy {
                    ($strategy)
                        .prop_filter_map(<$pred as Predicate<$ty>>::NAME, Self::try_parse)
                        .boxed()
                }
            }
        )+
    };
}

macro_rules! impl_integer_arbitrary {
    ($($ty:ident),+) => {
        $(
            impl_arbitrary! {
                $ty, Positive => 1..=$ty::MAX;
                $ty, NonNegative => 0..=$ty::MAX;
                $ty, Negative => $ty::MIN..=-1;
                $ty, NonPositive => $ty::MIN..=0;
                $ty, NonZero => prop_oneof![$ty::MIN..=-1, 1..=$ty::MAX];
            }
        )+
    };
}

impl_integer_arbitrary!(i32, i64);

impl<const MIN: i64, const MAX: i64> Arbitrary for Refined<i32, InRange<MIN, MAX>> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        let lo = MIN.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let hi = MAX.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        (lo..=hi)
            .prop_filter_map("InRange", Self::try_parse)
            .boxed()
    }
}

impl<const MIN: i64, const MAX: i64> Arbitrary for Refined<i64, InRange<MIN, MAX>> {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): ()) -> Self::Strategy {
        (MIN..=MAX)
            .prop_filter_map("InRange", Self::try_parse)
            .boxed()
    }
}

macro_rules! impl_float_arbitrary {
    ($module:ident, $ty:ident) => {
        mod $module {
            use proptest::num::$ty::{INFINITE, NEGATIVE, NORMAL, POSITIVE, SUBNORMAL, ZERO};
            use proptest::prelude::*;

            use crate::refined::predicates::numeric::{
                Finite, Negative, NegativeFinite, NonNegative, NonNegativeFinite, NonPositive,
                NonPositiveFinite, NonZero, NonZeroFinite, Positive, PositiveFinite,
            };
            use crate::refined::{Predicate, Refined};

            impl_arbitrary! {
                $ty, Positive => POSITIVE | NORMAL | SUBNORMAL | INFINITE;
                $ty, NonNegative => prop_oneof![
                    POSITIVE | NORMAL | SUBNORMAL | ZERO | INFINITE,
                    Just(-0.0 as $ty),
                ];
                $ty, Negative => NEGATIVE | NORMAL | SUBNORMAL | INFINITE;
                $ty, NonPositive => prop_oneof![
                    NEGATIVE | NORMAL | SUBNORMAL | ZERO | INFINITE,
                    Just(0.0 as $ty),
                ];
                $ty, NonZero => POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | INFINITE;
                $ty, PositiveFinite => POSITIVE | NORMAL | SUBNORMAL;
                $ty, NonNegativeFinite => prop_oneof![
                    POSITIVE | NORMAL | SUBNORMAL | ZERO,
                    Just(-0.0 as $ty),
                ];
                $ty, NegativeFinite => NEGATIVE | NORMAL | SUBNORMAL;
                $ty, NonPositiveFinite => prop_oneof![
                    NEGATIVE | NORMAL | SUBNORMAL | ZERO,
                    Just(0.0 as $ty),
                ];
                $ty, NonZeroFinite => POSITIVE | NEGATIVE | NORMAL | SUBNORMAL;
                $ty, Finite => POSITIVE | NEGATIVE | NORMAL | SUBNORMAL | ZERO;
            }
        }
    };
}

impl_float_arbitrary!(float32, f32);
impl_float_arbitrary!(float64, f64);

impl_arbitrary! {
    char, Numeric => (b'0'..=b'9').prop_map(char::from);
    String, Numeric => "[0-9]{0,24}";
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::refined::*;

    proptest! {
        #[test]
        fn positive_i32_is_positive(n in any::<PositiveI32>()) {
            prop_assert!(n.value() > 0);
        }

        #[test]
        fn non_zero_i64_is_non_zero(n in any::<NonZeroI64>()) {
            prop_assert_ne!(n.value(), 0);
        }

        #[test]
        fn percent_is_in_range(p in any::<Percent>()) {
            prop_assert!((0..=100).contains(&p.value()));
        }

        #[test]
        fn non_negative_f64_is_never_nan(x in any::<NonNegativeF64>()) {
            prop_assert!(!x.value().is_nan());
            prop_assert!(x.value() >= 0.0);
        }

        #[test]
        fn finite_f32_is_finite(x in any::<FiniteF32>()) {
            prop_assert!(x.value().is_finite());
        }

        #[test]
        fn numeric_string_is_digits(s in any::<NumericString>()) {
            prop_assert!(s.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
