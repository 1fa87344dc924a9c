//! Unescaping.
//!
//! The [`Unescaper`] scans text left to right, copying ordinary code points and
//! handing every [`ESCAPE`] marker to [`interpret`]. It keeps the byte position
//! and the line/column of the scan in step with what the interpreter consumed,
//! so a malformed sequence is reported where it starts.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use escapist::{unescape, unescape_to_string};
//!
//! assert_eq!(unescape(r"a\tb").unwrap(), "a\tb");
//! assert_eq!(unescape_to_string(r"\u{1F980} \x41").unwrap(), "🦀 A");
//! ```
//!
//! A failed call returns no partial output.

use crate::interpret::{interpret, EscapeKind, Interpreted};
use crate::{CodePoints, Error, Result, ESCAPE};

/// Longest stretch of text quoted in an error.
const MAX_SEQUENCE_CONTEXT: usize = 12;

/// Scanner that decodes escape sequences.
///
/// Created via [`Unescaper::new`], consumed by [`Unescaper::unescape`].
pub struct Unescaper<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    output: CodePoints,
}

impl<'a> Unescaper<'a> {
    pub fn new(input: &'a str) -> Self {
        Unescaper {
            input,
            position: 0,
            line: 1,
            column: 1,
            output: CodePoints::with_capacity(input.len()),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Moves past a marker and the sequence the interpreter consumed after it.
    fn skip_escape(&mut self, interpreted: &Interpreted) {
        self.position += 1 + interpreted.consumed_units;
        let escaped_newline = interpreted.kind == EscapeKind::Unrecognized
            && interpreted.code_point.and_then(|cp| cp.to_char()) == Some('\n');
        if escaped_newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1 + interpreted.consumed_code_points;
        }
    }

    /// The text of the sequence starting at the current position, for errors.
    fn sequence_context(&self) -> &'a str {
        let rest = &self.input[self.position..];
        match rest.char_indices().nth(MAX_SEQUENCE_CONTEXT) {
            Some((end, _)) => &rest[..end],
            None => rest,
        }
    }

    /// Decodes the whole input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUnicodeEscape`] or [`Error::InvalidHexEscape`] at the
    /// first malformed sequence.
    pub fn unescape(mut self) -> Result<CodePoints> {
        while let Some(ch) = self.peek_char() {
            if ch == ESCAPE {
                let interpreted = interpret(self.input, self.position + ESCAPE.len_utf8())
                    .map_err(|kind| {
                        Error::escape(kind, self.line, self.column, self.sequence_context())
                    })?;
                if let Some(code_point) = interpreted.code_point {
                    self.output.push(code_point);
                }
                self.skip_escape(&interpreted);
            } else {
                self.next_char();
                self.output.push_char(ch);
            }
        }
        Ok(self.output)
    }
}
