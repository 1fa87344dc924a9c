//! The set of code points that must appear escaped.
//!
//! [`Specials`] is a thin wrapper around [`IndexSet`]. Duplicates are allowed on
//! input but collapse to one member, and equality ignores order, so a specials set
//! behaves as a set while still iterating in the order it was written.
//!
//! ## Configuration
//!
//! A specials set serializes as a plain sequence of one-character strings, so it
//! can be loaded from configuration:
//!
//! ```rust
//! use escapist::Specials;
//!
//! let specials: Specials = serde_json::from_str(r#"["'", "\"", "'"]"#).unwrap();
//! assert_eq!(specials.len(), 2);
//! assert_eq!(specials, Specials::from("\"'"));
//! ```

use crate::ESCAPE;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// An insertion-ordered set of special code points.
///
/// # Examples
///
/// ```rust
/// use escapist::{escape, Specials};
///
/// let specials = Specials::new().with('\'').with('"');
/// assert!(specials.contains('"'));
/// assert!(!specials.contains_escape());
/// assert_eq!(escape(r#"it's "fine""#, &specials), r#"it\'s \"fine\""#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Specials(IndexSet<char>);

impl Specials {
    #[must_use]
    pub fn new() -> Self {
        Specials(IndexSet::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Specials(IndexSet::with_capacity(capacity))
    }

    /// Adds `ch` and returns the set, for building a set inline.
    #[must_use]
    pub fn with(mut self, ch: char) -> Self {
        self.0.insert(ch);
        self
    }

    /// Adds `ch`, returning `false` if it was already special.
    pub fn insert(&mut self, ch: char) -> bool {
        self.0.insert(ch)
    }

    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(&ch)
    }

    /// Returns `true` if the escape marker itself is special.
    ///
    /// When it is, a marker that does not escape anything is escaped too.
    #[must_use]
    pub fn contains_escape(&self) -> bool {
        self.contains(ESCAPE)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the special code points, in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, char> {
        self.0.iter()
    }
}

impl From<&str> for Specials {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl From<&[char]> for Specials {
    fn from(chars: &[char]) -> Self {
        chars.iter().copied().collect()
    }
}

impl<const N: usize> From<[char; N]> for Specials {
    fn from(chars: [char; N]) -> Self {
        chars.into_iter().collect()
    }
}

impl FromIterator<char> for Specials {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Specials(IndexSet::from_iter(iter))
    }
}

impl Extend<char> for Specials {
    fn extend<T: IntoIterator<Item = char>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Specials {
    type Item = char;
    type IntoIter = indexmap::set::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
