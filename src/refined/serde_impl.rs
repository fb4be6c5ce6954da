//! Serde support for refined types (feature-gated)
//!
//! Refined values serialize as their bare primitive. Deserializing runs the
//! predicate, so an invalid value in the input is a deserialization error
//! carrying the [`ConstraintViolation`](crate::ConstraintViolation) message.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use anyvals::{NumericString, PositiveI32};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Line {
//!     sku: NumericString,    // Validated on deserialize
//!     quantity: PositiveI32, // Validated on deserialize
//! }
//!
//! let line: Line = serde_json::from_str(r#"{"sku": "0042", "quantity": 3}"#).unwrap();
//!
//! let bad: Result<Line, _> = serde_json::from_str(r#"{"sku": "0042", "quantity": 0}"#);
//! assert!(bad.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Predicate, Refined, Scalar};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de> + Scalar,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value)
            .map_err(|violation| serde::de::Error::custom(violation.during("deserialize")))
    }
}
