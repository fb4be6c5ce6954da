//! Test helpers for code built on refined values
//!
//! Assertion macros for the crate's result shapes, and proptest
//! `Arbitrary` impls for them behind the `proptest` feature (the refined
//! aliases get theirs from the same feature).
//!
//! # Examples
//!
//! ```rust
//! use anyvals::{assert_fail, assert_failure, assert_pass, assert_success};
//! use anyvals::{NumericString, PositiveI32};
//!
//! let n = assert_success!(PositiveI32::validate(42));
//! assert_eq!(n.value(), 42);
//!
//! let errors = assert_failure!(PositiveI32::validate_vec(0));
//! assert_eq!(errors.len(), 1);
//!
//! assert_pass!(NumericString::pass_or_else("123".to_string(), |s| s));
//! let raw = assert_fail!(NumericString::pass_or_else("12a".to_string(), |s| s));
//! assert_eq!(raw, "12a");
//! ```

/// Assert that a validation succeeds, evaluating to the success value.
///
/// # Panics
///
/// Panics with the `Debug` of the error on `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails, evaluating to the error.
///
/// # Panics
///
/// Panics with the `Debug` of the value on `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(e) => e,
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a check passes.
///
/// # Panics
///
/// Panics with the `Debug` of the error on `Fail`.
#[macro_export]
macro_rules! assert_pass {
    ($check:expr) => {
        match $check {
            $crate::PassFail::Pass => {}
            $crate::PassFail::Fail(e) => {
                panic!("Expected Pass, got Fail: {:?}", e);
            }
        }
    };
}

/// Assert that a check fails, evaluating to the error.
#[macro_export]
macro_rules! assert_fail {
    ($check:expr) => {
        match $check {
            $crate::PassFail::Fail(e) => e,
            $crate::PassFail::Pass => {
                panic!("Expected Fail, got Pass");
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::{PassFail, Validation};

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            any_with::<T>(t_params).prop_map(Validation::success),
            any_with::<E>(e_params).prop_map(Validation::failure),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl<E> Arbitrary for PassFail<E>
where
    E: Arbitrary + Clone + 'static,
{
    type Parameters = E::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(PassFail::Pass),
            any_with::<E>(args).prop_map(PassFail::Fail),
        ]
        .boxed()
    }
}
