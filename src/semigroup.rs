//! Associative combination of errors
//!
//! [`Validation::and`](crate::Validation::and) and
//! [`PassFail::and`](crate::PassFail::and) keep every failure instead of
//! stopping at the first one. They merge two failures with
//! [`Semigroup::combine`], which must be associative:
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use anyvals::{PositiveI32, Semigroup};
//!
//! let a = PositiveI32::new(0).map_err(|e| vec![e]).unwrap_err();
//! let b = PositiveI32::new(-1).map_err(|e| vec![e]).unwrap_err();
//! assert_eq!(a.combine(b).len(), 2);
//!
//! // Tuples combine component-wise
//! let t1 = (vec![1], "a".to_string());
//! let t2 = (vec![2], "b".to_string());
//! assert_eq!(t1.combine(t2), (vec![1, 2], "ab".to_string()));
//! ```

/// A type that supports an associative binary operation
///
/// `combine` takes both values by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

macro_rules! impl_semigroup_tuple {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn combine(self, other: Self) -> Self {
                (
                    $(self.$idx.combine(other.$idx)),+
                )
            }
        }
    };
}

impl_semigroup_tuple!(0 T1, 1 T2);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3);
impl_semigroup_tuple!(0 T1, 1 T2, 2 T3, 3 T4);
