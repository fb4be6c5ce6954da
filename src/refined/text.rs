//! Digit text helpers
//!
//! [`NumericString`] derefs to `String`, so every read-only query
//! (`len`, `chars`, `starts_with`, `parse`, ...) is available as-is. The
//! helpers here are the ones whose result is itself a digit value.

use super::aliases::{NonNegativeI32, NumericChar, NumericString};
use super::Refined;

impl NumericChar {
    /// The digit's numeric value, `0..=9`.
    ///
    /// ```rust
    /// use anyvals::NumericChar;
    ///
    /// assert_eq!(NumericChar::assert_valid('7').as_digit(), 7);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_digit(self) -> u32 {
        self.value as u32 - '0' as u32
    }

    /// The digit's numeric value as a refined `i32`.
    #[inline]
    #[must_use]
    pub fn to_non_negative_i32(self) -> NonNegativeI32 {
        Refined::new_unchecked(self.as_digit() as i32)
    }
}

impl NumericString {
    /// The character at byte index `index`, if any.
    ///
    /// Digits are ASCII, so byte and character indices agree.
    ///
    /// ```rust
    /// use anyvals::NumericString;
    ///
    /// let s = NumericString::from_literal("50");
    /// assert_eq!(s.char_at(0).map(|c| c.value()), Some('5'));
    /// assert!(s.char_at(2).is_none());
    /// ```
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<NumericChar> {
        self.value
            .as_bytes()
            .get(index)
            .map(|&b| Refined::new_unchecked(char::from(b)))
    }

    /// Appends another digit string.
    #[must_use]
    pub fn concat(&self, other: &NumericString) -> NumericString {
        let mut joined = String::with_capacity(self.value.len() + other.value.len());
        joined.push_str(&self.value);
        joined.push_str(&other.value);
        Refined::new_unchecked(joined)
    }

    /// The digits in `begin..end`, or `None` when the range is out of bounds
    /// or reversed.
    ///
    /// ```rust
    /// use anyvals::NumericString;
    ///
    /// let s = NumericString::from_literal("12345");
    /// assert_eq!(s.substring(1, 3).unwrap(), "23");
    /// assert!(s.substring(3, 1).is_none());
    /// assert!(s.substring(0, 6).is_none());
    /// ```
    #[must_use]
    pub fn substring(&self, begin: usize, end: usize) -> Option<NumericString> {
        self.value
            .get(begin..end)
            .map(|digits| Refined::new_unchecked(digits.to_string()))
    }

    /// The digits repeated `n` times.
    #[must_use]
    pub fn repeat(&self, n: usize) -> NumericString {
        Refined::new_unchecked(self.value.repeat(n))
    }

    /// The numeric value of each digit, in order.
    #[must_use]
    pub fn to_digits(&self) -> Vec<u32> {
        self.value.bytes().map(|b| u32::from(b - b'0')).collect()
    }

    /// Iterates over the digits as refined characters.
    pub fn digits(&self) -> impl Iterator<Item = NumericChar> + '_ {
        self.value
            .bytes()
            .map(|b| Refined::new_unchecked(char::from(b)))
    }
}

impl PartialEq<str> for NumericString {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for NumericString {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl PartialEq<String> for NumericString {
    fn eq(&self, other: &String) -> bool {
        &self.value == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        for (i, c) in ('0'..='9').enumerate() {
            let d = NumericChar::assert_valid(c);
            assert_eq!(d.as_digit(), i as u32);
            assert_eq!(d.to_non_negative_i32().value(), i as i32);
        }
    }

    #[test]
    fn test_char_at() {
        let s = NumericString::assert_valid("50".to_string());
        assert_eq!(s.char_at(0).map(|c| c.value()), Some('5'));
        assert_eq!(s.char_at(1).map(|c| c.value()), Some('0'));
        assert!(s.char_at(2).is_none());
    }

    #[test]
    fn test_concat_and_repeat() {
        let a = NumericString::from_literal("12");
        let b = NumericString::from_literal("34");
        assert_eq!(a.concat(&b), "1234");
        assert_eq!(a.repeat(3), "121212");
        assert_eq!(a.repeat(0), "");
    }

    #[test]
    fn test_substring() {
        let s = NumericString::from_literal("2024");
        assert_eq!(s.substring(0, 2).unwrap(), "20");
        assert_eq!(s.substring(4, 4).unwrap(), "");
        assert!(s.substring(2, 1).is_none());
        assert!(s.substring(0, 5).is_none());
    }

    #[test]
    fn test_to_digits() {
        let s = NumericString::from_literal("0907");
        assert_eq!(s.to_digits(), vec![0, 9, 0, 7]);
        let chars: String = s.digits().map(|c| c.value()).collect();
        assert_eq!(chars, "0907");
    }

    #[test]
    fn test_string_queries_through_deref() {
        let s = NumericString::from_literal("00123");
        assert_eq!(s.len(), 5);
        assert!(s.starts_with("00"));
        assert_eq!(s.parse::<u32>().unwrap(), 123);
        assert!(s == "00123".to_string());
    }
}
