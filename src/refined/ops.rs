//! Operators on refined numbers
//!
//! Every operator unwraps to the primitive and delegates to the primitive
//! operator, so results are bit-for-bit what the primitive expression gives,
//! including overflow and division-by-zero panics, NaN and infinities.
//!
//! Mixed operands are promoted to the wider primitive along
//! `i32 < i64 < f32 < f64`, and the result is that primitive:
//!
//! ```rust
//! use anyvals::{PositiveI32, NegativeF64};
//!
//! let n = PositiveI32::assert_valid(3);
//! let x = NegativeF64::assert_valid(-0.5);
//!
//! let sum: i32 = n + n;
//! let wide: i64 = n * 10_i64;
//! let mixed: f64 = n + x;
//! assert_eq!((sum, wide, mixed), (6, 30, 2.5));
//! assert!(n < 4_i64);
//! ```
//!
//! Two results keep a refined type because their validity follows from the
//! operand types alone, with no runtime check:
//!
//! - negation mirrors the sign predicate (see [`Mirror`])
//! - [`plus`](crate::refined::Refined::plus) on non-finite float sign
//!   predicates (see [`SumProof`])

use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{
    Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Shl, Shr, Sub,
};

use super::predicates::numeric::{
    Finite, InRange, Negative, NegativeFinite, NonNegative, NonNegativeFinite, NonPositive,
    NonPositiveFinite, NonZero, NonZeroFinite, Positive, PositiveFinite,
};
use super::{Predicate, Refined};

// ============================================================================
// Arithmetic
// ============================================================================

macro_rules! impl_binary_op {
    ($trait:ident $method:ident $op:tt, $lhs:ty, $rhs:ty => $out:ty) => {
        impl<P: Predicate<$lhs>> $trait<$rhs> for Refined<$lhs, P> {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: $rhs) -> $out {
                (self.value as $out) $op (rhs as $out)
            }
        }

        impl<P: Predicate<$rhs>> $trait<Refined<$rhs, P>> for $lhs {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: Refined<$rhs, P>) -> $out {
                (self as $out) $op (rhs.value as $out)
            }
        }

        impl<P: Predicate<$lhs>, Q: Predicate<$rhs>> $trait<Refined<$rhs, Q>> for Refined<$lhs, P> {
            type Output = $out;

            #[inline]
            fn $method(self, rhs: Refined<$rhs, Q>) -> $out {
                (self.value as $out) $op (rhs.value as $out)
            }
        }
    };
}

macro_rules! impl_arithmetic {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl_binary_op!(Add add +, $lhs, $rhs => $out);
            impl_binary_op!(Sub sub -, $lhs, $rhs => $out);
            impl_binary_op!(Mul mul *, $lhs, $rhs => $out);
            impl_binary_op!(Div div /, $lhs, $rhs => $out);
            impl_binary_op!(Rem rem %, $lhs, $rhs => $out);
        )+
    };
}

impl_arithmetic! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

macro_rules! impl_bitwise {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl_binary_op!(BitAnd bitand &, $lhs, $rhs => $out);
            impl_binary_op!(BitOr bitor |, $lhs, $rhs => $out);
            impl_binary_op!(BitXor bitxor ^, $lhs, $rhs => $out);
        )+
    };
}

impl_bitwise! {
    i32, i32 => i32;
    i32, i64 => i64;
    i64, i32 => i64;
    i64, i64 => i64;
}

macro_rules! impl_integer_ops {
    ($ty:ty, $unsigned:ty) => {
        impl<P: Predicate<$ty>> Shl<u32> for Refined<$ty, P> {
            type Output = $ty;

            #[inline]
            fn shl(self, rhs: u32) -> $ty {
                self.value << rhs
            }
        }

        impl<P: Predicate<$ty>> Shl<i32> for Refined<$ty, P> {
            type Output = $ty;

            #[inline]
            fn shl(self, rhs: i32) -> $ty {
                self.value << rhs
            }
        }

        impl<P: Predicate<$ty>> Shr<u32> for Refined<$ty, P> {
            type Output = $ty;

            #[inline]
            fn shr(self, rhs: u32) -> $ty {
                self.value >> rhs
            }
        }

        impl<P: Predicate<$ty>> Shr<i32> for Refined<$ty, P> {
            type Output = $ty;

            #[inline]
            fn shr(self, rhs: i32) -> $ty {
                self.value >> rhs
            }
        }

        impl<P: Predicate<$ty>> Not for Refined<$ty, P> {
            type Output = $ty;

            #[inline]
            fn not(self) -> $ty {
                !self.value
            }
        }

        impl<P: Predicate<$ty>> Refined<$ty, P> {
            /// Logical (zero-filling) right shift, Java's `>>>`.
            ///
            /// # Example
            ///
            /// ```rust
            /// use anyvals::NegativeI32;
            ///
            /// let n = NegativeI32::assert_valid(-1);
            /// assert_eq!(n >> 28_u32, -1);
            /// assert_eq!(n.ushr(28), 15);
            /// ```
            #[inline]
            #[must_use]
            pub fn ushr(self, rhs: u32) -> $ty {
                ((self.value as $unsigned) >> rhs) as $ty
            }
        }
    };
}

impl_integer_ops!(i32, u32);
impl_integer_ops!(i64, u64);

// ============================================================================
// Comparison
// ============================================================================

macro_rules! impl_primitive_cmp {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl<P: Predicate<$lhs>> PartialEq<$rhs> for Refined<$lhs, P> {
                #[inline]
                fn eq(&self, other: &$rhs) -> bool {
                    (self.value as $out) == (*other as $out)
                }
            }

            impl<P: Predicate<$lhs>> PartialOrd<$rhs> for Refined<$lhs, P> {
                #[inline]
                fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                    (self.value as $out).partial_cmp(&(*other as $out))
                }
            }

            impl<P: Predicate<$rhs>> PartialEq<Refined<$rhs, P>> for $lhs {
                #[inline]
                fn eq(&self, other: &Refined<$rhs, P>) -> bool {
                    (*self as $out) == (other.value as $out)
                }
            }

            impl<P: Predicate<$rhs>> PartialOrd<Refined<$rhs, P>> for $lhs {
                #[inline]
                fn partial_cmp(&self, other: &Refined<$rhs, P>) -> Option<Ordering> {
                    (*self as $out).partial_cmp(&(other.value as $out))
                }
            }
        )+
    };
}

impl_primitive_cmp! {
    i32, i32 => i32;
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, i64 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f32 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

// Same-width wrapper comparisons are the generic impls in the parent module.
macro_rules! impl_cross_width_cmp {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl<P: Predicate<$lhs>, Q: Predicate<$rhs>> PartialEq<Refined<$rhs, Q>> for Refined<$lhs, P> {
                #[inline]
                fn eq(&self, other: &Refined<$rhs, Q>) -> bool {
                    (self.value as $out) == (other.value as $out)
                }
            }

            impl<P: Predicate<$lhs>, Q: Predicate<$rhs>> PartialOrd<Refined<$rhs, Q>> for Refined<$lhs, P> {
                #[inline]
                fn partial_cmp(&self, other: &Refined<$rhs, Q>) -> Option<Ordering> {
                    (self.value as $out).partial_cmp(&(other.value as $out))
                }
            }
        )+
    };
}

impl_cross_width_cmp! {
    i32, i64 => i64;
    i32, f32 => f32;
    i32, f64 => f64;
    i64, i32 => i64;
    i64, f32 => f32;
    i64, f64 => f64;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, f64 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, f32 => f64;
}

// ============================================================================
// Negation
// ============================================================================

/// The predicate satisfied by the negation of every float satisfying `Self`.
///
/// Drives unary `-` on refined floats: negating a `Positive` gives a
/// `Negative` without a runtime check.
///
/// ```rust
/// use anyvals::{NegativeF64, PositiveF64};
///
/// let p = PositiveF64::assert_valid(2.5);
/// let n: NegativeF64 = -p;
/// assert_eq!(n.value(), -2.5);
/// ```
pub trait Mirror {
    /// The mirrored predicate
    type Mirrored;
}

macro_rules! impl_mirror {
    ($($pred:ty => $mirrored:ty),+ $(,)?) => {
        $(
            impl Mirror for $pred {
                type Mirrored = $mirrored;
            }
        )+
    };
}

impl_mirror!(
    Positive => Negative,
    Negative => Positive,
    NonNegative => NonPositive,
    NonPositive => NonNegative,
    NonZero => NonZero,
    PositiveFinite => NegativeFinite,
    NegativeFinite => PositiveFinite,
    NonNegativeFinite => NonPositiveFinite,
    NonPositiveFinite => NonNegativeFinite,
    NonZeroFinite => NonZeroFinite,
    Finite => Finite,
);

macro_rules! impl_float_neg {
    ($($ty:ty),+) => {
        $(
            impl<P> Neg for Refined<$ty, P>
            where
                P: Predicate<$ty> + Mirror,
                P::Mirrored: Predicate<$ty>,
            {
                type Output = Refined<$ty, P::Mirrored>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Refined::new_unchecked(-self.value)
                }
            }
        )+
    };
}

impl_float_neg!(f32, f64);

// Integer negation only keeps a refined type where it cannot overflow:
// -MIN does not fit, so Negative, NonPositive and NonZero give the primitive.
macro_rules! impl_integer_neg {
    ($($ty:ty),+) => {
        $(
            impl Neg for Refined<$ty, Positive> {
                type Output = Refined<$ty, Negative>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Refined::new_unchecked(-self.value)
                }
            }

            impl Neg for Refined<$ty, NonNegative> {
                type Output = Refined<$ty, NonPositive>;

                #[inline]
                fn neg(self) -> Self::Output {
                    Refined::new_unchecked(-self.value)
                }
            }

            impl Neg for Refined<$ty, Negative> {
                type Output = $ty;

                #[inline]
                fn neg(self) -> $ty {
                    -self.value
                }
            }

            impl Neg for Refined<$ty, NonPositive> {
                type Output = $ty;

                #[inline]
                fn neg(self) -> $ty {
                    -self.value
                }
            }

            impl Neg for Refined<$ty, NonZero> {
                type Output = $ty;

                #[inline]
                fn neg(self) -> $ty {
                    -self.value
                }
            }

            impl<const MIN: i64, const MAX: i64> Neg for Refined<$ty, InRange<MIN, MAX>> {
                type Output = $ty;

                #[inline]
                fn neg(self) -> $ty {
                    -self.value
                }
            }
        )+
    };
}

impl_integer_neg!(i32, i64);

// ============================================================================
// Structural addition
// ============================================================================

/// The predicate satisfied by `a + b` whenever `a` satisfies `Self` and
/// `b` satisfies `Rhs`, for floats.
///
/// Only the non-finite sign predicates qualify: two finite values can sum
/// to infinity, and integers overflow.
pub trait SumProof<Rhs> {
    /// The predicate of the sum
    type Output;
}

macro_rules! impl_sum_proof {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl SumProof<$rhs> for $lhs {
                type Output = $out;
            }
        )+
    };
}

impl_sum_proof! {
    Positive, Positive => Positive;
    Positive, NonNegative => Positive;
    NonNegative, Positive => Positive;
    NonNegative, NonNegative => NonNegative;
    Negative, Negative => Negative;
    Negative, NonPositive => Negative;
    NonPositive, Negative => Negative;
    NonPositive, NonPositive => NonPositive;
}

macro_rules! impl_float_plus {
    ($($ty:ty),+) => {
        $(
            impl<P: Predicate<$ty>> Refined<$ty, P> {
                /// Adds two refined floats whose sum provably keeps a sign
                /// predicate, returning the refined sum.
                ///
                /// ```rust
                /// use anyvals::{NonNegativeF64, PositiveF64};
                ///
                /// let a = PositiveF64::assert_valid(1.5);
                /// let b = NonNegativeF64::assert_valid(0.0);
                /// let sum: PositiveF64 = a.plus(b);
                /// assert_eq!(sum.value(), 1.5);
                /// ```
                #[inline]
                #[must_use]
                pub fn plus<Q>(self, rhs: Refined<$ty, Q>) -> Refined<$ty, <P as SumProof<Q>>::Output>
                where
                    Q: Predicate<$ty>,
                    P: SumProof<Q>,
                    <P as SumProof<Q>>::Output: Predicate<$ty>,
                {
                    Refined::new_unchecked(self.value + rhs.value)
                }
            }

            // -0.0 is the additive identity that keeps a sum of -0.0 negative,
            // and it satisfies both predicates.
            impl Sum for Refined<$ty, NonNegative> {
                fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                    iter.fold(Self::new_unchecked(-0.0), |acc, x| acc.plus(x))
                }
            }

            impl Sum for Refined<$ty, NonPositive> {
                fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                    iter.fold(Self::new_unchecked(-0.0), |acc, x| acc.plus(x))
                }
            }
        )+
    };
}

impl_float_plus!(f32, f64);

#[cfg(test)]
mod tests {
    use crate::refined::*;

    #[test]
    fn test_same_width_arithmetic() {
        let three = PositiveI32::assert_valid(3);
        assert_eq!(three + three, 6_i32);
        assert_eq!(three - 5_i32, -2);
        assert_eq!(three * NegativeI32::assert_valid(-2), -6);
        assert_eq!(7_i32 / three, 2);
        assert_eq!(7_i32 % three, 1);
    }

    #[test]
    fn test_promotion() {
        let three = PositiveI32::assert_valid(3);
        let big: i64 = three + i64::MAX / 2;
        assert_eq!(big, 3 + i64::MAX / 2);

        let f: f32 = three / 2.0_f32;
        assert_eq!(f, 1.5);

        let d: f64 = PositiveF32::assert_valid(0.1) + 0.2_f64;
        assert_eq!(d, f64::from(0.1_f32) + 0.2);

        let l: f32 = PositiveI64::assert_valid(i64::MAX) * 1.0_f32;
        assert_eq!(l, i64::MAX as f32);
    }

    #[test]
    fn test_float_special_values_pass_through() {
        let inf = PositiveF64::INFINITY;
        assert!((inf - inf).is_nan());
        assert_eq!(NonZeroF64::assert_valid(1.0) / 0.0_f64, f64::INFINITY);
        assert!((NonZeroF64::assert_valid(1.0) % 0.0_f64).is_nan());
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics_like_primitive() {
        let zero = std::hint::black_box(0_i32);
        let _ = PositiveI32::assert_valid(1) / zero;
    }

    #[test]
    fn test_bitwise() {
        let n = PositiveI32::assert_valid(0b1100);
        assert_eq!(n & 0b1010_i32, 0b1000);
        assert_eq!(n | 0b0011_i32, 0b1111);
        assert_eq!(n ^ PositiveI32::assert_valid(0b0100), 0b1000);
        assert_eq!(n & 0xFF_i64, 0b1100_i64);
        assert_eq!(!n, !0b1100);
        assert_eq!(n << 2_u32, 0b110000);
        assert_eq!(n >> 2_i32, 0b11);
    }

    #[test]
    fn test_ushr() {
        let n = NegativeI64::assert_valid(-8);
        assert_eq!(n >> 1_u32, -4);
        assert_eq!(n.ushr(1), ((-8_i64 as u64) >> 1) as i64);
        assert_eq!(NegativeI32::assert_valid(-1).ushr(31), 1);
    }

    #[test]
    fn test_comparison_with_primitives() {
        let n = PositiveI32::assert_valid(5);
        assert!(n == 5_i32);
        assert!(5_i64 == n);
        assert!(n < 5.5_f64);
        assert!(n >= 5_i32);
        assert!(4_i32 < n);
    }

    #[test]
    fn test_cross_width_wrapper_comparison() {
        let a = PositiveI32::assert_valid(5);
        let b = PositiveI64::assert_valid(5);
        let c = PositiveF64::assert_valid(5.5);
        assert!(a == b);
        assert!(a < c);
        assert!(c > b);
    }

    #[test]
    fn test_float_neg_mirrors_predicate() {
        let p = PositiveF64::assert_valid(1.0);
        let n: NegativeF64 = -p;
        assert_eq!(n.value(), -1.0);

        let z: NonPositiveF32 = -NonNegativeF32::assert_valid(0.0);
        assert!(z.value().is_sign_negative());

        let nz: NonZeroFiniteF64 = -NonZeroFiniteF64::assert_valid(-3.0);
        assert_eq!(nz.value(), 3.0);

        let inf: NegativeF64 = -PositiveF64::INFINITY;
        assert_eq!(inf.value(), f64::NEG_INFINITY);

        let f: FiniteF32 = -FiniteF32::assert_valid(2.0);
        assert_eq!(f.value(), -2.0);
    }

    #[test]
    fn test_integer_neg() {
        let n: NegativeI32 = -PositiveI32::MAX;
        assert_eq!(n.value(), -i32::MAX);

        let z: NonPositiveI64 = -NonNegativeI64::assert_valid(0);
        assert_eq!(z.value(), 0);

        let back: i32 = -NegativeI32::assert_valid(-4);
        assert_eq!(back, 4);

        let pct: i32 = -Percent::assert_valid(40);
        assert_eq!(pct, -40);
    }

    #[test]
    fn test_plus_keeps_sign_predicate() {
        let a = PositiveF64::assert_valid(f64::from_bits(1));
        let b = PositiveF64::assert_valid(f64::from_bits(1));
        let sum: PositiveF64 = a.plus(b);
        assert!(sum.value() > 0.0);

        let z = NonNegativeF64::assert_valid(-0.0);
        let zz: NonNegativeF64 = z.plus(z);
        assert_eq!(zz.value(), 0.0);

        let n: NegativeF32 = NonPositiveF32::assert_valid(0.0).plus(NegativeF32::assert_valid(-1.0));
        assert_eq!(n.value(), -1.0);

        let inf: PositiveF64 = PositiveF64::INFINITY.plus(NonNegativeF64::INFINITY);
        assert!(inf.value().is_infinite());
    }

    #[test]
    fn test_sum() {
        let total: NonNegativeF64 = [1.0, 2.5, 0.5]
            .into_iter()
            .map(NonNegativeF64::assert_valid)
            .sum();
        assert_eq!(total.value(), 4.0);

        let empty: NonPositiveF32 = std::iter::empty::<NonPositiveF32>().sum();
        assert_eq!(empty.value(), 0.0);
    }

    #[test]
    fn test_sum_keeps_sign_of_zero_like_primitive() {
        let raws = [-0.0_f64, -0.0];
        let primitive: f64 = raws.iter().sum();
        let wrapped: NonNegativeF64 = raws.into_iter().map(NonNegativeF64::assert_valid).sum();
        assert_eq!(wrapped.value().to_bits(), primitive.to_bits());
        assert!(wrapped.value().is_sign_negative());

        let mixed: NonPositiveF64 = [-0.0, 0.0].into_iter().map(NonPositiveF64::assert_valid).sum();
        let mixed_primitive: f64 = [-0.0_f64, 0.0].iter().sum();
        assert_eq!(mixed.value().to_bits(), mixed_primitive.to_bits());
    }
}
