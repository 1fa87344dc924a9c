//! Code points that may be surrogates.
//!
//! Unescaping can produce isolated surrogates (`\ud83d` on its own decodes to
//! U+D83D), which a Rust [`String`] cannot hold. [`CodePoint`] accepts every value
//! in `0..=0x10FFFF`, surrogates included, and [`CodePoints`] is the owned
//! sequence returned by [`unescape`](crate::unescape).
//!
//! ## Examples
//!
//! ```rust
//! use escapist::{unescape, CodePoint};
//!
//! let decoded = unescape(r"\ud83d").unwrap();
//! assert_eq!(decoded.as_slice(), &[CodePoint::from_u32(0xd83d).unwrap()]);
//! assert!(decoded.clone().into_string().is_err());
//! assert_eq!(decoded.to_string_lossy(), "\u{fffd}");
//! ```

use crate::{Error, Result};
use std::fmt::{self, Write};

/// Largest valid code point.
pub const MAX_CODE_POINT: u32 = 0x10ffff;

const HIGH_SURROGATE_START: u32 = 0xd800;
const HIGH_SURROGATE_END: u32 = 0xdbff;
const LOW_SURROGATE_START: u32 = 0xdc00;
const LOW_SURROGATE_END: u32 = 0xdfff;

/// Returns `true` iff `value` is a high (leading) surrogate.
#[inline]
#[must_use]
pub const fn is_high_surrogate(value: u32) -> bool {
    HIGH_SURROGATE_START <= value && value <= HIGH_SURROGATE_END
}

/// Returns `true` iff `value` is a low (trailing) surrogate.
#[inline]
#[must_use]
pub const fn is_low_surrogate(value: u32) -> bool {
    LOW_SURROGATE_START <= value && value <= LOW_SURROGATE_END
}

/// Combines a surrogate pair into the code point it encodes.
///
/// Returns `None` unless `high` is a high surrogate and `low` is a low surrogate.
///
/// # Examples
///
/// ```rust
/// use escapist::unicode::from_surrogate_pair;
///
/// let pile = from_surrogate_pair(0xd83d, 0xdca9).unwrap();
/// assert_eq!(pile.to_char(), Some('💩'));
/// assert!(from_surrogate_pair(0xdca9, 0xd83d).is_none());
/// ```
#[must_use]
pub fn from_surrogate_pair(high: u32, low: u32) -> Option<CodePoint> {
    if is_high_surrogate(high) && is_low_surrogate(low) {
        Some(CodePoint(
            ((high - HIGH_SURROGATE_START) << 10) + (low - LOW_SURROGATE_START) + 0x10000,
        ))
    } else {
        None
    }
}

/// A Unicode code point, surrogates included.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(u32);

impl CodePoint {
    /// Creates a code point, returning `None` for values above [`MAX_CODE_POINT`].
    #[inline]
    #[must_use]
    pub const fn from_u32(value: u32) -> Option<Self> {
        if value <= MAX_CODE_POINT {
            Some(CodePoint(value))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the `char` for this code point, or `None` if it is a surrogate.
    #[inline]
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_high_surrogate(self) -> bool {
        is_high_surrogate(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_low_surrogate(self) -> bool {
        is_low_surrogate(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_surrogate(self) -> bool {
        HIGH_SURROGATE_START <= self.0 && self.0 <= LOW_SURROGATE_END
    }
}

impl From<char> for CodePoint {
    fn from(ch: char) -> Self {
        CodePoint(u32::from(ch))
    }
}

impl From<CodePoint> for u32 {
    fn from(code_point: CodePoint) -> Self {
        code_point.0
    }
}

impl fmt::Debug for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

/// An owned sequence of code points produced by unescaping.
///
/// Compares equal to a `str` holding the same code points, so most callers can
/// treat it like text and only reach for [`CodePoints::into_string`] when they
/// need a `String`.
///
/// # Examples
///
/// ```rust
/// use escapist::unescape;
///
/// let decoded = unescape(r"caf\xe9").unwrap();
/// assert_eq!(decoded, "café");
/// assert_eq!(decoded.into_string().unwrap(), "café");
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePoints(Vec<CodePoint>);

impl CodePoints {
    #[must_use]
    pub fn new() -> Self {
        CodePoints(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        CodePoints(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, code_point: CodePoint) {
        self.0.push(code_point);
    }

    pub fn push_char(&mut self, ch: char) {
        self.0.push(CodePoint::from(ch));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CodePoint] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CodePoint> {
        self.0.iter()
    }

    /// Returns `true` if no surrogate is present, i.e. the sequence is valid text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        !self.0.iter().any(|cp| cp.is_surrogate())
    }

    /// Converts to a `String`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnpairedSurrogate`] for the first surrogate found.
    pub fn into_string(self) -> Result<String> {
        let mut text = String::with_capacity(self.0.len());
        for (index, code_point) in self.0.into_iter().enumerate() {
            match code_point.to_char() {
                Some(ch) => text.push(ch),
                None => return Err(Error::unpaired_surrogate(index, code_point.value())),
            }
        }
        Ok(text)
    }

    /// Converts to a `String`, replacing surrogates with U+FFFD.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        self.0
            .iter()
            .map(|cp| cp.to_char().unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }

    /// Encodes as UTF-16 code units. A surrogate is emitted as a single unit of the
    /// same value, so `\ud83dA` encodes to `[0xd83d, 0x41]`.
    #[must_use]
    pub fn to_utf16(&self) -> Vec<u16> {
        let mut units = Vec::with_capacity(self.0.len());
        let mut buf = [0u16; 2];
        for code_point in &self.0 {
            match code_point.to_char() {
                Some(ch) => units.extend_from_slice(ch.encode_utf16(&mut buf)),
                // Surrogates are below 0x10000 and always fit in one unit.
                None => units.push(code_point.value() as u16),
            }
        }
        units
    }
}

impl From<&str> for CodePoints {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl FromIterator<char> for CodePoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        CodePoints(iter.into_iter().map(CodePoint::from).collect())
    }
}

impl FromIterator<CodePoint> for CodePoints {
    fn from_iter<I: IntoIterator<Item = CodePoint>>(iter: I) -> Self {
        CodePoints(iter.into_iter().collect())
    }
}

impl IntoIterator for CodePoints {
    type Item = CodePoint;
    type IntoIter = std::vec::IntoIter<CodePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CodePoints {
    type Item = &'a CodePoint;
    type IntoIter = std::slice::Iter<'a, CodePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<str> for CodePoints {
    fn eq(&self, other: &str) -> bool {
        self.0.iter().copied().eq(other.chars().map(CodePoint::from))
    }
}

impl PartialEq<&str> for CodePoints {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for CodePoints {
    fn eq(&self, other: &String) -> bool {
        *self == **other
    }
}

impl fmt::Display for CodePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code_point in &self.0 {
            f.write_char(code_point.to_char().unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for CodePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        for code_point in &self.0 {
            match code_point.to_char() {
                Some(ch) => {
                    for escaped in ch.escape_debug() {
                        f.write_char(escaped)?;
                    }
                }
                None => write!(f, "\\u{{{:x}}}", code_point.value())?,
            }
        }
        f.write_char('"')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrogate_ranges() {
        assert!(is_high_surrogate(0xd800));
        assert!(is_high_surrogate(0xdbff));
        assert!(!is_high_surrogate(0xdc00));
        assert!(is_low_surrogate(0xdc00));
        assert!(is_low_surrogate(0xdfff));
        assert!(!is_low_surrogate(0xe000));
    }

    #[test]
    fn test_from_surrogate_pair() {
        assert_eq!(
            from_surrogate_pair(0xd800, 0xdc00),
            CodePoint::from_u32(0x10000)
        );
        assert_eq!(
            from_surrogate_pair(0xdbff, 0xdfff),
            CodePoint::from_u32(MAX_CODE_POINT)
        );
        assert_eq!(from_surrogate_pair(0xd83d, 0x41), None);
    }

    #[test]
    fn test_code_point_bounds() {
        assert!(CodePoint::from_u32(MAX_CODE_POINT).is_some());
        assert!(CodePoint::from_u32(MAX_CODE_POINT + 1).is_none());
        assert_eq!(CodePoint::from('A').value(), 0x41);
        assert_eq!(format!("{:?}", CodePoint::from('A')), "U+0041");
    }

    #[test]
    fn test_into_string_reports_first_surrogate() {
        let mut code_points = CodePoints::from("ab");
        code_points.push(CodePoint(0xdca9));
        code_points.push_char('c');

        let err = code_points.into_string().unwrap_err();
        assert_eq!(err, Error::unpaired_surrogate(2, 0xdca9));
    }

    #[test]
    fn test_lossy_and_utf16() {
        let mut code_points = CodePoints::new();
        code_points.push(CodePoint(0xd83d));
        code_points.push_char('💩');

        assert!(!code_points.is_text());
        assert_eq!(code_points.to_string_lossy(), "\u{fffd}💩");
        assert_eq!(code_points.to_string(), "\u{fffd}💩");
        assert_eq!(code_points.to_utf16(), vec![0xd83d, 0xd83d, 0xdca9]);
    }

    #[test]
    fn test_debug_shows_surrogates() {
        let mut code_points = CodePoints::from("a\n");
        code_points.push(CodePoint(0xd83d));
        assert_eq!(format!("{:?}", code_points), r#""a\n\u{d83d}""#);
    }

    #[test]
    fn test_str_equality() {
        let code_points = CodePoints::from("héllo");
        assert_eq!(code_points, "héllo");
        assert_ne!(code_points, "hello");
        assert_ne!(code_points, "héllo!");
        assert_eq!(code_points.len(), 5);
    }
}
