//! Escape-sequence interpretation.
//!
//! [`interpret`] decodes the single escape sequence that starts right after an
//! [`ESCAPE`](crate::ESCAPE) marker. It is the building block of
//! [`Unescaper`](crate::Unescaper), and is public for callers that scan text
//! themselves.
//!
//! ## Grammar
//!
//! ```text
//! Escape        ::= '\' Sequence?
//! Sequence      ::= Control | Unicode | Latin | AnyChar
//! Control       ::= '0' | 'n' | 'r' | 'v' | 't' | 'b' | 'f'
//! Unicode       ::= 'u' Hex Hex Hex Hex
//!                 | 'u{' Hex{1,6} '}'
//! Latin         ::= 'x' Hex Hex
//! AnyChar       ::= any other code point, taken literally
//! ```
//!
//! A `Unicode` sequence that decodes to a high surrogate and is immediately
//! followed by a marker and another `Unicode` sequence decoding to a low
//! surrogate is combined with it into one code point. Surrogates that do not
//! pair up are decoded as themselves.
//!
//! Malformed `Unicode` and `Latin` sequences are hard failures. Any other
//! escaped code point is not an error: the marker is dropped and the code point
//! is kept.
//!
//! ## Positions
//!
//! Positions and unit counts are UTF-8 byte offsets into the text. Every escape
//! form except `AnyChar` is ASCII, so the two counts only differ when a
//! multi-byte code point is escaped literally.

use crate::error::EscapeError;
use crate::unicode::from_surrogate_pair;
use crate::CodePoint;

/// The control substitutions: the letter after the marker, and the code point
/// it stands for.
pub const SUBSTITUTIONS: [(char, char); 7] = [
    ('0', '\0'),
    ('n', '\n'),
    ('r', '\r'),
    ('v', '\u{000B}'),
    ('t', '\t'),
    ('b', '\u{0008}'),
    ('f', '\u{000C}'),
];

const MAX_FULL_DIGITS: usize = 6;

/// Returns the control code point that `letter` stands for after a marker.
///
/// # Examples
///
/// ```rust
/// use escapist::interpret::substitution;
///
/// assert_eq!(substitution('n'), Some('\n'));
/// assert_eq!(substitution('v'), Some('\u{000B}'));
/// assert_eq!(substitution('a'), None);
/// ```
#[inline]
#[must_use]
pub const fn substitution(letter: char) -> Option<char> {
    match letter {
        '0' => Some('\0'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        'v' => Some('\u{000B}'),
        't' => Some('\t'),
        'b' => Some('\u{0008}'),
        'f' => Some('\u{000C}'),
        _ => None,
    }
}

/// Which form of escape sequence was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeKind {
    /// `\n`, `\t`, ... (see [`SUBSTITUTIONS`])
    Control,
    /// `\uXXXX`
    ShortUnicode,
    /// `\u{X}` to `\u{XXXXXX}`
    FullUnicode,
    /// Two Unicode escapes forming a high/low surrogate pair, e.g. `\ud83d\udca9`
    SurrogatePair,
    /// `\xXX`
    Latin,
    /// Any other escaped code point, kept as is
    Unrecognized,
    /// A marker at the end of the text
    Dangling,
}

/// A decoded escape sequence.
///
/// The consumed counts cover everything after the leading marker, so the caller
/// advances by one more unit and one more code point for the marker itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpreted {
    pub kind: EscapeKind,
    /// The decoded code point; `None` only for [`EscapeKind::Dangling`].
    pub code_point: Option<CodePoint>,
    /// UTF-8 bytes consumed after the marker.
    pub consumed_units: usize,
    /// Code points consumed after the marker.
    pub consumed_code_points: usize,
}

impl Interpreted {
    fn ascii(kind: EscapeKind, code_point: CodePoint, len: usize) -> Self {
        Interpreted {
            kind,
            code_point: Some(code_point),
            consumed_units: len,
            consumed_code_points: len,
        }
    }

    fn dangling() -> Self {
        Interpreted {
            kind: EscapeKind::Dangling,
            code_point: None,
            consumed_units: 0,
            consumed_code_points: 0,
        }
    }
}

/// A matched Unicode escape and its length in (ASCII) bytes, not counting the
/// leading marker.
#[derive(Debug, Clone, Copy)]
struct UnicodeMatch {
    code_point: CodePoint,
    len: usize,
    full: bool,
}

/// Interprets the escape sequence starting at byte `position`, which must be
/// immediately after a marker.
///
/// # Errors
///
/// Returns [`EscapeError::InvalidUnicode`] for a malformed `\u` sequence and
/// [`EscapeError::InvalidHex`] for a malformed `\x` sequence.
///
/// # Panics
///
/// Panics if `position` is greater than `text.len()` or is not on a `char`
/// boundary.
///
/// # Examples
///
/// ```rust
/// use escapist::interpret::{interpret, EscapeKind};
///
/// let text = r"\ud83d\udca9!";
/// let pair = interpret(text, 1).unwrap();
/// assert_eq!(pair.kind, EscapeKind::SurrogatePair);
/// assert_eq!(pair.code_point.and_then(|cp| cp.to_char()), Some('💩'));
/// assert_eq!(pair.consumed_units, 11);
///
/// let plain = interpret(r"\é", 1).unwrap();
/// assert_eq!(plain.kind, EscapeKind::Unrecognized);
/// assert_eq!((plain.consumed_units, plain.consumed_code_points), (2, 1));
/// ```
pub fn interpret(text: &str, position: usize) -> Result<Interpreted, EscapeError> {
    let rest = &text[position..];
    let Some(first) = rest.chars().next() else {
        return Ok(Interpreted::dangling());
    };

    if let Some(control) = substitution(first) {
        return Ok(Interpreted::ascii(
            EscapeKind::Control,
            CodePoint::from(control),
            1,
        ));
    }

    let bytes = rest.as_bytes();
    match first {
        'u' => {
            let unicode = match_unicode(bytes).ok_or(EscapeError::InvalidUnicode)?;
            Ok(combine_surrogates(bytes, unicode))
        }
        'x' => {
            let value = hex_value(bytes.get(1..3)).ok_or(EscapeError::InvalidHex)?;
            // Two hex digits are at most 0xFF, always a valid code point.
            let code_point = CodePoint::from_u32(value).ok_or(EscapeError::InvalidHex)?;
            Ok(Interpreted::ascii(EscapeKind::Latin, code_point, 3))
        }
        other => Ok(Interpreted {
            kind: EscapeKind::Unrecognized,
            code_point: Some(CodePoint::from(other)),
            consumed_units: other.len_utf8(),
            consumed_code_points: 1,
        }),
    }
}

/// Looks one escape sequence past a high surrogate for its low half.
///
/// The lookahead never recurses: a combined pair cannot start another pair.
fn combine_surrogates(bytes: &[u8], high: UnicodeMatch) -> Interpreted {
    let kind = if high.full {
        EscapeKind::FullUnicode
    } else {
        EscapeKind::ShortUnicode
    };

    if high.code_point.is_high_surrogate() {
        let low = match bytes[high.len..].split_first() {
            Some((b'\\', sequence)) => match_unicode(sequence),
            _ => None,
        };
        let pair = low.and_then(|low| {
            from_surrogate_pair(high.code_point.value(), low.code_point.value())
                .map(|code_point| (code_point, low.len))
        });
        if let Some((code_point, low_len)) = pair {
            return Interpreted::ascii(
                EscapeKind::SurrogatePair,
                code_point,
                high.len + 1 + low_len,
            );
        }
    }

    Interpreted::ascii(kind, high.code_point, high.len)
}

/// Matches `u` followed by either 4 hex digits or `{` 1 to 6 hex digits `}`.
fn match_unicode(bytes: &[u8]) -> Option<UnicodeMatch> {
    let (&b'u', rest) = bytes.split_first()? else {
        return None;
    };

    if rest.first() == Some(&b'{') {
        let digits = rest[1..]
            .iter()
            .take(MAX_FULL_DIGITS + 1)
            .take_while(|b| b.is_ascii_hexdigit())
            .count();
        if digits == 0 || digits > MAX_FULL_DIGITS || rest.get(1 + digits) != Some(&b'}') {
            return None;
        }
        let code_point = CodePoint::from_u32(hex_value(rest.get(1..1 + digits))?)?;
        Some(UnicodeMatch {
            code_point,
            len: digits + 3,
            full: true,
        })
    } else {
        let code_point = CodePoint::from_u32(hex_value(rest.get(..4))?)?;
        Some(UnicodeMatch {
            code_point,
            len: 5,
            full: false,
        })
    }
}

/// Parses ASCII hex digits, returning `None` if any byte is not one.
fn hex_value(digits: Option<&[u8]>) -> Option<u32> {
    digits?.iter().try_fold(0u32, |acc, &b| {
        let digit = char::from(b).to_digit(16)?;
        Some((acc << 4) | digit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(text: &str) -> Result<Interpreted, EscapeError> {
        assert!(text.starts_with('\\'));
        interpret(text, 1)
    }

    fn cp(value: u32) -> Option<CodePoint> {
        CodePoint::from_u32(value)
    }

    #[test]
    fn test_substitution_table_matches_function() {
        for (letter, control) in SUBSTITUTIONS {
            assert_eq!(substitution(letter), Some(control));
        }
        assert_eq!(substitution('u'), None);
        assert_eq!(substitution('x'), None);
    }

    #[test]
    fn test_control() {
        let interpreted = decode(r"\t").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::Control);
        assert_eq!(interpreted.code_point, cp(0x09));
        assert_eq!(interpreted.consumed_units, 1);
    }

    #[test]
    fn test_short_unicode() {
        let interpreted = decode(r"\u00e9xyz").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::ShortUnicode);
        assert_eq!(interpreted.code_point, cp(0xe9));
        assert_eq!(interpreted.consumed_units, 5);
        assert_eq!(interpreted.consumed_code_points, 5);
    }

    #[test]
    fn test_short_unicode_reads_exactly_four_digits() {
        let interpreted = decode(r"\u00411").unwrap();
        assert_eq!(interpreted.code_point, cp(0x41));
        assert_eq!(interpreted.consumed_units, 5);
    }

    #[test]
    fn test_full_unicode() {
        let interpreted = decode(r"\u{1F4A9}").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::FullUnicode);
        assert_eq!(interpreted.code_point, cp(0x1f4a9));
        assert_eq!(interpreted.consumed_units, 8);

        let interpreted = decode(r"\u{000000}").unwrap();
        assert_eq!(interpreted.code_point, cp(0));
        assert_eq!(interpreted.consumed_units, 9);
    }

    #[test]
    fn test_malformed_unicode() {
        for text in [
            r"\u",
            r"\u001",
            r"\u00g1",
            r"\u{}",
            r"\u{1234567}",
            r"\u{12",
            r"\u{12g}",
            r"\u{110000}",
            r"\u{ffffff}",
            r"\u 1234",
        ] {
            assert_eq!(decode(text), Err(EscapeError::InvalidUnicode), "{}", text);
        }
    }

    #[test]
    fn test_latin() {
        let interpreted = decode(r"\xe9").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::Latin);
        assert_eq!(interpreted.code_point, cp(0xe9));
        assert_eq!(interpreted.consumed_units, 3);
    }

    #[test]
    fn test_malformed_latin() {
        for text in [r"\x", r"\x1", r"\xg0", r"\x{41}", "\\x4é"] {
            assert_eq!(decode(text), Err(EscapeError::InvalidHex), "{}", text);
        }
    }

    #[test]
    fn test_surrogate_pairs() {
        for text in [
            r"\ud83d\udca9",
            r"\u{d83d}\u{dca9}",
            r"\ud83d\u{dca9}",
            r"\u{d83d}\udca9",
        ] {
            let interpreted = decode(text).unwrap();
            assert_eq!(interpreted.kind, EscapeKind::SurrogatePair, "{}", text);
            assert_eq!(interpreted.code_point, cp(0x1f4a9));
            assert_eq!(interpreted.consumed_units, text.len() - 1);
        }
    }

    #[test]
    fn test_isolated_surrogates() {
        // High surrogate followed by something that is not a low surrogate escape.
        let interpreted = decode(r"\ud83d\u{d8}").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::ShortUnicode);
        assert_eq!(interpreted.code_point, cp(0xd83d));
        assert_eq!(interpreted.consumed_units, 5);

        let interpreted = decode(r"\ud83d\u0041").unwrap();
        assert_eq!(interpreted.code_point, cp(0xd83d));
        assert_eq!(interpreted.consumed_units, 5);

        let interpreted = decode(r"\ud83dx").unwrap();
        assert_eq!(interpreted.code_point, cp(0xd83d));

        // A low surrogate on its own never looks ahead.
        let interpreted = decode(r"\udca9\ud83d").unwrap();
        assert_eq!(interpreted.code_point, cp(0xdca9));
        assert_eq!(interpreted.consumed_units, 5);
    }

    #[test]
    fn test_malformed_lookahead_is_not_an_error() {
        let interpreted = decode(r"\ud83d\u12").unwrap();
        assert_eq!(interpreted.code_point, cp(0xd83d));
        assert_eq!(interpreted.consumed_units, 5);
    }

    #[test]
    fn test_unrecognized_and_dangling() {
        let interpreted = decode(r"\'").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::Unrecognized);
        assert_eq!(interpreted.code_point, cp(u32::from('\'')));

        let interpreted = decode("\\💩").unwrap();
        assert_eq!(interpreted.consumed_units, 4);
        assert_eq!(interpreted.consumed_code_points, 1);

        let interpreted = decode(r"\").unwrap();
        assert_eq!(interpreted.kind, EscapeKind::Dangling);
        assert_eq!(interpreted.code_point, None);
        assert_eq!(interpreted.consumed_units, 0);
    }

    #[test]
    fn test_interpret_mid_text() {
        let text = r"ab\nc";
        let interpreted = interpret(text, 3).unwrap();
        assert_eq!(interpreted.code_point, cp(0x0a));
    }
}
