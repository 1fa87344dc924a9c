//! Error types for unescaping.
//!
//! Escaping never fails: any sequence of characters is valid input for
//! [`escape`](crate::escape). Unescaping fails when the text contains a malformed
//! Unicode (`\u`) or hexadecimal (`\x`) escape sequence, and converting decoded
//! code points to a [`String`] fails when an isolated surrogate is left over.
//!
//! ## Error Categories
//!
//! - **Invalid Unicode escapes**: `\u` not followed by exactly 4 hex digits or by
//!   `{` 1 to 6 hex digits `}`, or a braced value above `0x10FFFF`
//! - **Invalid hexadecimal escapes**: `\x` not followed by exactly 2 hex digits
//! - **Unpaired surrogates**: decoded output that cannot be represented as UTF-8
//!
//! ## Examples
//!
//! ```rust
//! use escapist::{unescape, Error};
//!
//! let err = unescape(r"tab\u001").unwrap_err();
//! assert!(matches!(err, Error::InvalidUnicodeEscape { line: 1, col: 4, .. }));
//! assert!(err.to_string().starts_with("Invalid Unicode escape sequence"));
//! ```

use thiserror::Error;

/// Failure kind reported by the escape-sequence interpreter.
///
/// The interpreter does not know where in a larger document it is working, so
/// it only reports which sub-grammar was malformed. [`Unescaper`](crate::Unescaper)
/// turns this into an [`Error`] carrying the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("Invalid Unicode escape sequence")]
    InvalidUnicode,

    #[error("Invalid hexadecimal escape sequence")]
    InvalidHex,
}

/// Represents all possible errors that can occur while unescaping text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `\u` sequence that is neither `\uXXXX` nor `\u{X..XXXXXX}`
    #[error("Invalid Unicode escape sequence at line {line}, column {col}: {sequence}")]
    InvalidUnicodeEscape {
        line: usize,
        col: usize,
        sequence: String,
    },

    /// `\x` sequence that is not `\xXX`
    #[error("Invalid hexadecimal escape sequence at line {line}, column {col}: {sequence}")]
    InvalidHexEscape {
        line: usize,
        col: usize,
        sequence: String,
    },

    /// A decoded surrogate that does not form a valid pair
    #[error("Unpaired surrogate U+{code_point:04X} at code point {index} cannot be represented as UTF-8")]
    UnpairedSurrogate { index: usize, code_point: u32 },
}

impl Error {
    /// Creates the located error matching an interpreter failure `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use escapist::{Error, EscapeError};
    ///
    /// let err = Error::escape(EscapeError::InvalidHex, 3, 7, r"\x1");
    /// assert!(err.to_string().contains("line 3, column 7"));
    /// assert_eq!(err.escape_error(), Some(EscapeError::InvalidHex));
    /// ```
    pub fn escape(kind: EscapeError, line: usize, col: usize, sequence: &str) -> Self {
        match kind {
            EscapeError::InvalidUnicode => Error::InvalidUnicodeEscape {
                line,
                col,
                sequence: sequence.to_string(),
            },
            EscapeError::InvalidHex => Error::InvalidHexEscape {
                line,
                col,
                sequence: sequence.to_string(),
            },
        }
    }

    /// Creates an unpaired surrogate error.
    pub fn unpaired_surrogate(index: usize, code_point: u32) -> Self {
        Error::UnpairedSurrogate { index, code_point }
    }

    /// Returns the interpreter failure kind behind this error, if any.
    #[must_use]
    pub fn escape_error(&self) -> Option<EscapeError> {
        match self {
            Error::InvalidUnicodeEscape { .. } => Some(EscapeError::InvalidUnicode),
            Error::InvalidHexEscape { .. } => Some(EscapeError::InvalidHex),
            Error::UnpairedSurrogate { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
