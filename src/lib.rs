//! # escapist
//!
//! Backslash escaping and unescaping of text.
//!
//! The crate has two independent entry points:
//!
//! - [`escape`] puts a `\` in front of every occurrence of a caller-chosen set of
//!   [`Specials`] that is not already escaped, and changes nothing else
//! - [`unescape`] decodes escape sequences back into the code points they stand for
//!
//! ## Escape Sequences
//!
//! | Sequence | Decodes to |
//! |----------|------------|
//! | `\0` `\n` `\r` `\v` `\t` `\b` `\f` | NUL, LF, CR, VT, TAB, BS, FF |
//! | `\uXXXX` | the code point `XXXX` (exactly 4 hex digits) |
//! | `\u{X}` .. `\u{XXXXXX}` | the code point (1 to 6 hex digits, at most `10FFFF`) |
//! | `\xXX` | the code point `XX` (exactly 2 hex digits) |
//! | `\` + any other code point | that code point |
//! | `\` at the end of the text | nothing |
//!
//! A Unicode escape for a high surrogate directly followed by a Unicode escape for
//! a low surrogate decodes to the single code point the pair encodes. Surrogates
//! that do not pair up are kept as they are, which is why [`unescape`] returns
//! [`CodePoints`] rather than a `String`.
//!
//! ## Quick Start
//!
//! ```rust
//! use escapist::{escape, unescape, Specials};
//!
//! let quotes = Specials::from("'\"");
//! let escaped = escape(r#"say "it's""#, &quotes);
//! assert_eq!(escaped, r#"say \"it\'s\""#);
//!
//! let text = unescape(&escaped).unwrap();
//! assert_eq!(text, r#"say "it's""#);
//!
//! let pile = unescape(r"\ud83d\udca9 \u{1F980}\n").unwrap();
//! assert_eq!(pile, "💩 🦀\n");
//! ```
//!
//! ## Errors
//!
//! Escaping never fails. Unescaping fails on a malformed `\u` or `\x` sequence and
//! returns no partial result:
//!
//! ```rust
//! use escapist::{unescape, Error};
//!
//! assert!(matches!(unescape(r"\u001"), Err(Error::InvalidUnicodeEscape { .. })));
//! assert!(matches!(unescape(r"\x1"), Err(Error::InvalidHexEscape { .. })));
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Escaping**: single pass, one code point of lookahead, available as a lazy
//!   iterator ([`Escape`])
//! - **Unescaping**: single pass, at most one extra escape sequence of lookahead for
//!   surrogate pairs
//! - Both are pure functions with no shared mutable state
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in [`escape`], [`unescape`] or [`unescape_to_string`] for any input

pub mod error;
pub mod escape;
pub mod interpret;
pub mod specials;
pub mod strip;
pub mod unescape;
pub mod unicode;

pub use error::{Error, EscapeError, Result};
pub use escape::{escape_into, Escape};
pub use interpret::{interpret, EscapeKind, Interpreted};
pub use specials::Specials;
pub use strip::{strip_leading, strip_leading_interpolated};
pub use unescape::Unescaper;
pub use unicode::{CodePoint, CodePoints};

/// The escape marker.
pub const ESCAPE: char = '\\';

/// Escapes every unescaped special code point in `text`.
///
/// A `\` already in front of a special leaves it alone. If `\` is itself special,
/// a `\` that escapes nothing gets escaped as well.
///
/// # Examples
///
/// ```rust
/// use escapist::{escape, Specials};
///
/// assert_eq!(escape("'", &Specials::from("'")), r"\'");
/// assert_eq!(escape(r"\\'", &Specials::from("'")), r"\\\'");
/// assert_eq!(escape(r"\", &Specials::from(['\\'])), r"\\");
/// ```
#[must_use]
pub fn escape(text: &str, specials: &Specials) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(text, specials, &mut out);
    out
}

/// Decodes every escape sequence in `text`.
///
/// # Examples
///
/// ```rust
/// use escapist::unescape;
///
/// assert_eq!(unescape(r"\0").unwrap(), "\0");
/// assert_eq!(unescape(r"\u{d83d}\u{dca9}").unwrap(), "💩");
/// assert_eq!(unescape(r"\").unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidUnicodeEscape`] or [`Error::InvalidHexEscape`] with the
/// line and column of the first malformed sequence.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn unescape(text: &str) -> Result<CodePoints> {
    Unescaper::new(text).unescape()
}

/// Decodes every escape sequence in `text` into a `String`.
///
/// # Examples
///
/// ```rust
/// use escapist::{unescape_to_string, Error};
///
/// assert_eq!(unescape_to_string(r"caf\xe9").unwrap(), "café");
/// assert!(matches!(
///     unescape_to_string(r"\ud83d"),
///     Err(Error::UnpairedSurrogate { index: 0, code_point: 0xd83d })
/// ));
/// ```
///
/// # Errors
///
/// Fails like [`unescape`], and with [`Error::UnpairedSurrogate`] if a decoded
/// surrogate does not pair up.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn unescape_to_string(text: &str) -> Result<String> {
    unescape(text)?.into_string()
}
