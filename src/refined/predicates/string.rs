//! Digit predicates for characters and strings
//!
//! - [`Numeric`] for `char`: the character is an ASCII digit `'0'..='9'`
//! - [`Numeric`] for `String`: every character is an ASCII digit; the empty
//!   string is valid
//!
//! # Example
//!
//! ```rust
//! use anyvals::refined::{Refined, Numeric};
//!
//! type NumericString = Refined<String, Numeric>;
//! assert!(NumericString::new("0042".to_string()).is_ok());
//! assert!(NumericString::new(String::new()).is_ok());
//! assert!(NumericString::new("50a".to_string()).is_err());
//! ```

use super::super::{Predicate, Refined};

/// Value must consist of ASCII digits only
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Numeric {
    /// Returns `true` for `'0'..='9'`.
    #[inline]
    pub const fn accepts_char(value: char) -> bool {
        value.is_ascii_digit()
    }
}

impl Predicate<char> for Numeric {
    const NAME: &'static str = "Numeric";

    #[inline]
    fn check(value: &char) -> bool {
        Self::accepts_char(*value)
    }

    fn description() -> &'static str {
        "digit character ('0'..='9')"
    }

    fn example() -> char {
        '4'
    }
}

impl Predicate<String> for Numeric {
    const NAME: &'static str = "Numeric";

    #[inline]
    fn check(value: &String) -> bool {
        value.chars().all(Self::accepts_char)
    }

    fn description() -> &'static str {
        "string of digits ('0'..='9')"
    }

    fn example() -> String {
        "42".to_string()
    }
}

impl Refined<char, Numeric> {
    /// Wraps a character literal, panicking if it is not an ASCII digit.
    ///
    /// In a `const` context the panic is a compile error; see
    /// [`literal!`](crate::literal).
    #[must_use]
    pub const fn from_literal(value: char) -> Self {
        if !Numeric::accepts_char(value) {
            panic!("from_literal can only be invoked on valid Numeric char values");
        }
        Self::new_unchecked(value)
    }
}

impl Refined<String, Numeric> {
    /// Wraps a string slice, panicking if it contains a non-digit.
    ///
    /// Unlike the numeric `from_literal` constructors this is not `const`:
    /// building a `String` allocates.
    #[must_use]
    pub fn from_literal(value: &'static str) -> Self {
        Self::assert_valid(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type NumericChar = Refined<char, Numeric>;
    type NumericString = Refined<String, Numeric>;

    #[test]
    fn test_char_digits() {
        for c in '0'..='9' {
            assert!(NumericChar::is_valid(c), "{c} should be numeric");
        }
        assert!(!NumericChar::is_valid('a'));
        assert!(!NumericChar::is_valid(' '));
        assert!(!NumericChar::is_valid('/'));
        assert!(!NumericChar::is_valid(':'));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digit four is numeric to char::is_numeric, not to us
        assert!(!NumericChar::is_valid('\u{0664}'));
        assert!(!NumericString::is_valid("\u{0664}2".to_string()));
    }

    #[test]
    fn test_string_digits() {
        assert!(NumericString::is_valid("0".to_string()));
        assert!(NumericString::is_valid("1234567890".to_string()));
        assert!(NumericString::is_valid(String::new()));
        assert!(!NumericString::is_valid("12 3".to_string()));
        assert!(!NumericString::is_valid("-1".to_string()));
        assert!(!NumericString::is_valid("1.0".to_string()));
    }

    #[test]
    fn test_from_literal() {
        const SEVEN: NumericChar = NumericChar::from_literal('7');
        assert_eq!(*SEVEN.get(), '7');
        assert_eq!(NumericString::from_literal("007").get(), "007");
    }

    #[test]
    fn test_char_literal_agrees_with_check() {
        for c in ['/', '0', '5', '9', ':', 'x', '\u{0664}'] {
            let literal = std::panic::catch_unwind(|| NumericChar::from_literal(c));
            assert_eq!(literal.is_ok(), NumericChar::is_valid(c), "{c:?}");
        }
    }

    #[test]
    #[should_panic(expected = "Numeric String")]
    fn test_string_from_literal_panics() {
        let _ = NumericString::from_literal("4x");
    }
}
