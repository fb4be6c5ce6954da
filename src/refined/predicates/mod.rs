//! Predefined predicates
//!
//! - **Numeric constraints**: [`Positive`](numeric::Positive),
//!   [`NonNegative`](numeric::NonNegative), [`Negative`](numeric::Negative),
//!   [`NonPositive`](numeric::NonPositive), [`NonZero`](numeric::NonZero),
//!   their `Finite` forms, [`Finite`](numeric::Finite) and
//!   [`InRange`](numeric::InRange)
//! - **Digit constraints**: [`Numeric`](string::Numeric) for `char` and `String`
//!
//! # Example
//!
//! ```rust
//! use anyvals::refined::{Refined, Positive, Numeric, InRange};
//!
//! type PositiveI32 = Refined<i32, Positive>;
//! let age = PositiveI32::new(25).unwrap();
//!
//! type NumericString = Refined<String, Numeric>;
//! let zip = NumericString::new("02134".to_string()).unwrap();
//!
//! type Percent = Refined<i32, InRange<0, 100>>;
//! let pct = Percent::new(75).unwrap();
//! ```

pub mod numeric;
pub mod string;
