//! Widening conversions
//!
//! A refined value can always be viewed under a weaker predicate, or
//! moved to a wider primitive, without a runtime check:
//!
//! ```rust
//! use anyvals::{NonNegativeI64, NonZeroF64, PositiveF64, PositiveFiniteF32, PositiveI32};
//! use anyvals::refined::NonZero;
//!
//! let n = PositiveI32::assert_valid(7);
//!
//! let weaker = n.widen::<NonZero>();
//! let wider: NonNegativeI64 = n.into();
//! let float: PositiveF64 = n.into();
//! let raw: i64 = n.into();
//!
//! assert_eq!((weaker.value(), wider.value(), float.value(), raw), (7, 7, 7.0, 7));
//!
//! let x: NonZeroF64 = PositiveFiniteF32::assert_valid(0.5).into();
//! assert_eq!(x.value(), 0.5);
//! ```
//!
//! Narrowing is never implicit: go through a constructor.

use super::aliases::{NonNegativeI32, Percent};
use super::predicates::numeric::{
    Finite, InRange, Negative, NegativeFinite, NonNegative, NonNegativeFinite, NonPositive,
    NonPositiveFinite, NonZero, NonZeroFinite, Positive, PositiveFinite,
};
use super::{Predicate, Refined};

/// Every value satisfying `Self` also satisfies `Q`.
///
/// Reflexive for every predicate. The non-trivial edges are:
///
/// | Predicate           | Implies                                                   |
/// |---------------------|-----------------------------------------------------------|
/// | `Positive`          | `NonNegative`, `NonZero`                                  |
/// | `Negative`          | `NonPositive`, `NonZero`                                  |
/// | `PositiveFinite`    | `Positive`, `NonNegative`, `NonZero`, `NonNegativeFinite`, `NonZeroFinite`, `Finite` |
/// | `NegativeFinite`    | `Negative`, `NonPositive`, `NonZero`, `NonPositiveFinite`, `NonZeroFinite`, `Finite` |
/// | `NonNegativeFinite` | `NonNegative`, `Finite`                                   |
/// | `NonPositiveFinite` | `NonPositive`, `Finite`                                   |
/// | `NonZeroFinite`     | `NonZero`, `Finite`                                       |
/// | `InRange<0, MAX>`   | `NonNegative`                                             |
pub trait Implies<Q> {}

impl<P> Implies<P> for P {}

macro_rules! impl_implies {
    ($($pred:ty => [$($weaker:ty),+];)+) => {
        $($(
            impl Implies<$weaker> for $pred {}
        )+)+
    };
}

impl_implies! {
    Positive => [NonNegative, NonZero];
    Negative => [NonPositive, NonZero];
    PositiveFinite => [Positive, NonNegative, NonZero, NonNegativeFinite, NonZeroFinite, Finite];
    NegativeFinite => [Negative, NonPositive, NonZero, NonPositiveFinite, NonZeroFinite, Finite];
    NonNegativeFinite => [NonNegative, Finite];
    NonPositiveFinite => [NonPositive, Finite];
    NonZeroFinite => [NonZero, Finite];
}

impl<const MAX: i64> Implies<NonNegative> for InRange<0, MAX> {}

/// The float predicate an integer predicate becomes once the value is a
/// float: every integer is finite.
pub trait FiniteCounterpart {
    /// The finite float predicate
    type Finite;
}

macro_rules! impl_finite_counterpart {
    ($($pred:ty => $finite:ty),+ $(,)?) => {
        $(
            impl FiniteCounterpart for $pred {
                type Finite = $finite;
            }
        )+
    };
}

impl_finite_counterpart!(
    Positive => PositiveFinite,
    NonNegative => NonNegativeFinite,
    Negative => NegativeFinite,
    NonPositive => NonPositiveFinite,
    NonZero => NonZeroFinite,
);

impl<const MIN: i64, const MAX: i64> FiniteCounterpart for InRange<MIN, MAX> {
    type Finite = Finite;
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Views the value under a weaker predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use anyvals::{NonNegativeF64, PositiveFiniteF64};
    /// use anyvals::refined::NonNegative;
    ///
    /// let x = PositiveFiniteF64::assert_valid(2.0);
    /// let y: NonNegativeF64 = x.widen::<NonNegative>();
    /// assert_eq!(y.value(), 2.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn widen<Q>(self) -> Refined<T, Q>
    where
        Q: Predicate<T>,
        P: Implies<Q>,
    {
        Refined::new_unchecked(self.value)
    }
}

impl<P, Q> From<Refined<i32, P>> for Refined<i64, Q>
where
    P: Predicate<i32> + Implies<Q>,
    Q: Predicate<i64>,
{
    #[inline]
    fn from(value: Refined<i32, P>) -> Self {
        Refined::new_unchecked(i64::from(value.value))
    }
}

impl<P, Q> From<Refined<f32, P>> for Refined<f64, Q>
where
    P: Predicate<f32> + Implies<Q>,
    Q: Predicate<f64>,
{
    #[inline]
    fn from(value: Refined<f32, P>) -> Self {
        Refined::new_unchecked(f64::from(value.value))
    }
}

impl<P, Q> From<Refined<i32, P>> for Refined<f64, Q>
where
    P: Predicate<i32> + FiniteCounterpart,
    P::Finite: Implies<Q>,
    Q: Predicate<f64>,
{
    #[inline]
    fn from(value: Refined<i32, P>) -> Self {
        Refined::new_unchecked(f64::from(value.value))
    }
}

impl From<Percent> for NonNegativeI32 {
    #[inline]
    fn from(value: Percent) -> Self {
        value.widen()
    }
}

// Rounding can change the magnitude of a large integer, never its sign or
// whether it is zero.
macro_rules! impl_lossy_float {
    ($method:ident, $float:ty, $($int:ty),+) => {
        $(
            impl<P: Predicate<$int>> Refined<$int, P> {
                #[doc = concat!("Converts to a refined `", stringify!($float), "`, rounding to the nearest representable value.")]
                ///
                /// The sign and non-zero-ness survive rounding, so the
                /// finite counterpart of the predicate still holds.
                #[inline]
                #[must_use]
                pub fn $method<Q>(self) -> Refined<$float, Q>
                where
                    P: FiniteCounterpart,
                    P::Finite: Implies<Q>,
                    Q: Predicate<$float>,
                {
                    Refined::new_unchecked(self.value as $float)
                }
            }
        )+
    };
}

impl_lossy_float!(to_f32, f32, i32, i64);
impl_lossy_float!(to_f64, f64, i64);

macro_rules! impl_into_primitive {
    ($($from:ty => [$($to:ty),+];)+) => {
        $($(
            impl<P: Predicate<$from>> From<Refined<$from, P>> for $to {
                #[inline]
                fn from(value: Refined<$from, P>) -> $to {
                    <$to>::from(value.value)
                }
            }
        )+)+
    };
}

impl_into_primitive! {
    i32 => [i32, i64, f64];
    i64 => [i64];
    f32 => [f32, f64];
    f64 => [f64];
    char => [char];
    String => [String];
}

#[cfg(test)]
mod tests {
    use crate::refined::*;

    #[test]
    fn test_widen_along_lattice() {
        let p = PositiveFiniteF32::assert_valid(1.5);
        let a: PositiveF32 = p.widen();
        let b: NonZeroFiniteF32 = p.widen();
        let c: FiniteF32 = p.widen();
        assert_eq!((a.value(), b.value(), c.value()), (1.5, 1.5, 1.5));

        let n = NegativeI64::assert_valid(-3);
        let d: NonPositiveI64 = n.widen();
        let e: NonZeroI64 = n.widen();
        assert_eq!((d.value(), e.value()), (-3, -3));
    }

    #[test]
    fn test_widen_keeps_negative_zero_bits() {
        let z = NonPositiveFiniteF64::assert_valid(-0.0);
        let w: NonPositiveF64 = z.widen();
        assert!(w.value().is_sign_negative());
    }

    #[test]
    fn test_int_to_long() {
        let wide: PositiveI64 = PositiveI32::MAX.into();
        assert_eq!(wide.value(), i64::from(i32::MAX));

        let weaker: NonZeroI64 = NegativeI32::MIN.into();
        assert_eq!(weaker.value(), i64::from(i32::MIN));
    }

    #[test]
    fn test_float_to_double() {
        let inf: PositiveF64 = PositiveF32::INFINITY.into();
        assert_eq!(inf.value(), f64::INFINITY);

        let tiny: NonNegativeF64 = PositiveF32::MIN.into();
        assert_eq!(tiny.value(), f64::from(f32::from_bits(1)));
    }

    #[test]
    fn test_int_to_double_is_finite() {
        let x: PositiveFiniteF64 = PositiveI32::assert_valid(42).into();
        assert_eq!(x.value(), 42.0);

        let y: NonPositiveF64 = NegativeI32::MIN.into();
        assert_eq!(y.value(), f64::from(i32::MIN));

        let pct: FiniteF64 = Percent::assert_valid(50).into();
        assert_eq!(pct.value(), 50.0);
    }

    #[test]
    fn test_percent_to_non_negative() {
        let n: NonNegativeI32 = Percent::MAX.into();
        assert_eq!(n.value(), 100);
    }

    #[test]
    fn test_lossy_conversions_keep_sign() {
        let big = PositiveI64::MAX.to_f32::<Positive>();
        assert!(big.value() > 0.0);

        let small = NegativeI64::MIN.to_f64::<NegativeFinite>();
        assert_eq!(small.value(), i64::MIN as f64);

        let nz = NonZeroI32::assert_valid(-1).to_f32::<NonZeroFinite>();
        assert_eq!(nz.value(), -1.0);
    }

    #[test]
    fn test_into_primitive() {
        let n = PositiveI32::assert_valid(3);
        let a: i32 = n.into();
        let b: i64 = n.into();
        let c: f64 = n.into();
        assert_eq!((a, b, c), (3, 3, 3.0));

        let d: f64 = NegativeF32::assert_valid(-0.25).into();
        assert_eq!(d, -0.25);

        let c: char = NumericChar::assert_valid('8').into();
        assert_eq!(c, '8');

        let s: String = NumericString::assert_valid("12".to_string()).into();
        assert_eq!(s, "12");
    }
}
