//! Leading whitespace removal for indented text literals.
//!
//! Handy for writing multi-line expected text inside indented code:
//!
//! ```rust
//! use escapist::strip_leading;
//!
//! let text = strip_leading(
//!     "first
//!      second
//!
//!      third",
//! );
//! assert_eq!(text, "first\nsecond\nthird");
//! ```

use std::fmt::{self, Write};

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn is_strippable(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{FEFF}'
}

/// Removes every run of whitespace that starts at the beginning of the text or
/// of a line.
///
/// A run continues across line breaks, so lines holding only whitespace are
/// removed along with their terminator.
#[must_use]
pub fn strip_leading(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    strip_into(text, &mut out);
    out
}

fn strip_into(text: &str, out: &mut String) {
    let mut line_start = true;
    for ch in text.chars() {
        if line_start && is_strippable(ch) {
            continue;
        }
        line_start = is_line_terminator(ch);
        out.push(ch);
    }
}

/// Strips each literal piece of an interpolated text and joins it with the
/// rendered values, which are left untouched.
///
/// `values[i]` goes between `strings[i]` and `strings[i + 1]`; values without
/// such a slot are ignored. Each piece is stripped as if it began a line.
///
/// # Examples
///
/// ```rust
/// use escapist::strip_leading_interpolated;
///
/// let name = "Ada";
/// let text = strip_leading_interpolated(&["name: ", ",\n    age: ", ""], &[&name, &36]);
/// assert_eq!(text, "name: Ada,\nage: 36");
/// ```
#[must_use]
pub fn strip_leading_interpolated(strings: &[&str], values: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (index, piece) in strings.iter().enumerate() {
        strip_into(piece, &mut out);
        if index + 1 < strings.len() {
            if let Some(value) = values.get(index) {
                // Writing to a String cannot fail.
                let _ = write!(out, "{}", value);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_each_line() {
        assert_eq!(strip_leading("  a\n\tb\n c"), "a\nb\nc");
    }

    #[test]
    fn test_keeps_inner_and_trailing_whitespace() {
        assert_eq!(strip_leading("a  b  \n  c d"), "a  b  \nc d");
    }

    #[test]
    fn test_blank_lines_are_removed() {
        assert_eq!(strip_leading("a\n   \n\n  b"), "a\nb");
        assert_eq!(strip_leading("\n\n  a"), "a");
        assert_eq!(strip_leading("   "), "");
    }

    #[test]
    fn test_other_line_terminators() {
        assert_eq!(strip_leading("a\r  b\u{2028} c"), "a\rb\u{2028}c");
    }

    #[test]
    fn test_interpolated_values_are_not_stripped() {
        let value = "\n  x";
        let text = strip_leading_interpolated(&["  a ", " b"], &[&value]);
        assert_eq!(text, "a \n  xb");
    }

    #[test]
    fn test_interpolated_ignores_extra_values() {
        let text = strip_leading_interpolated(&[" a"], &[&1, &2]);
        assert_eq!(text, "a");
        assert_eq!(strip_leading_interpolated(&[], &[&1]), "");
    }
}
