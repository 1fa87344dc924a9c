//! Escaping of special code points.
//!
//! The escaper inserts one [`ESCAPE`] marker before every special code point that
//! is not already escaped, and changes nothing else. It runs in a single pass with
//! one code point of lookahead: a marker is held back as "pending" until the next
//! code point shows whether it already escapes something.
//!
//! ```rust
//! use escapist::{escape, Specials};
//!
//! let quotes = Specials::from("'");
//! assert_eq!(escape("it's", &quotes), r"it\'s");
//! // Already escaped quotes are left alone.
//! assert_eq!(escape(r"it\'s", &quotes), r"it\'s");
//! ```
//!
//! ## The marker as a special
//!
//! When the marker itself is special, a marker that does not escape the code point
//! after it (or that ends the text) is escaped. A marker followed by another marker
//! counts as an escaped marker and is left alone.
//!
//! Escaping twice gives the same result as escaping once when the marker is not
//! special, or when it is the only special. When the marker and some other code
//! point are both special this does not hold: `escape("a", {\, a})` is `\a`, and
//! escaping that again treats the `\` as a lone marker and gives `\\a`.

use crate::{Specials, ESCAPE};
use std::iter::{Fuse, FusedIterator};

/// Iterator adaptor that escapes the special code points of `I`.
///
/// Created by [`Escape::new`]; [`escape`](crate::escape) collects it into a
/// `String`.
///
/// # Examples
///
/// ```rust
/// use escapist::{Escape, Specials};
///
/// let specials = Specials::from("\"");
/// let escaped: String = Escape::new("say \"hi\"".chars(), &specials).collect();
/// assert_eq!(escaped, r#"say \"hi\""#);
/// ```
#[derive(Debug, Clone)]
pub struct Escape<'a, I> {
    chars: Fuse<I>,
    specials: &'a Specials,
    escape_is_special: bool,
    pending_escape: bool,
    buffered: Option<char>,
}

impl<'a, I> Escape<'a, I>
where
    I: Iterator<Item = char>,
{
    pub fn new(chars: I, specials: &'a Specials) -> Self {
        Escape {
            chars: chars.fuse(),
            specials,
            escape_is_special: specials.contains_escape(),
            pending_escape: false,
            buffered: None,
        }
    }

    /// Decides whether a marker goes in front of `ch`, updating the pending state.
    #[inline]
    fn needs_escape(&mut self, ch: char) -> bool {
        if self.pending_escape {
            self.pending_escape = false;
            // A pending marker followed by anything but a marker did not escape a
            // marker, so it has to be escaped itself.
            self.escape_is_special && ch != ESCAPE
        } else if ch == ESCAPE {
            self.pending_escape = true;
            false
        } else {
            self.specials.contains(ch)
        }
    }
}

impl<I> Iterator for Escape<'_, I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if let Some(ch) = self.buffered.take() {
            return Some(ch);
        }
        match self.chars.next() {
            Some(ch) => {
                if self.needs_escape(ch) {
                    self.buffered = Some(ch);
                    Some(ESCAPE)
                } else {
                    Some(ch)
                }
            }
            None => {
                let trailing = self.pending_escape && self.escape_is_special;
                self.pending_escape = false;
                trailing.then_some(ESCAPE)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.buffered.is_some());
        let (lower, upper) = self.chars.size_hint();
        // Every input char yields itself plus at most one marker, and a pending
        // marker may still add a trailing one.
        let upper = upper
            .and_then(|n| n.checked_mul(2))
            .and_then(|n| n.checked_add(buffered + 1));
        (lower.saturating_add(buffered), upper)
    }
}

impl<I> FusedIterator for Escape<'_, I> where I: Iterator<Item = char> {}

/// Escapes `text` into `out`, which is not cleared first.
pub fn escape_into(text: &str, specials: &Specials, out: &mut String) {
    out.reserve(text.len());
    out.extend(Escape::new(text.chars(), specials));
}
