//! Literal length extraction.
//!
//! An IMAP literal is announced by a `{N}` marker at the end of a line; the
//! next `N` bytes on the wire belong to the literal.

use crate::error::{Error, Result};

/// A literal announced by a `{N}` marker inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralFrame {
    /// Number of bytes in the literal.
    pub byte_count: u64,
    /// Byte offset in the line of the first character after the digit run.
    pub digits_end: usize,
    /// Whether the marker is a LITERAL+ `{N+}` marker.
    pub non_synchronizing: bool,
}

impl LiteralFrame {
    /// Returns the part of `line` following the digit run (normally starting with `}`).
    ///
    /// `line` must be the text the frame was parsed from.
    #[must_use]
    pub fn remainder<'a>(&self, line: &'a str) -> &'a str {
        line.get(self.digits_end..).unwrap_or_default()
    }
}

/// Extracts the literal length announced in `line`.
///
/// Looks for the first `{` and reads the run of decimal digits after it. An
/// empty digit run counts as zero, matching servers that send `{}`.
///
/// # Errors
///
/// Returns [`Error::LiteralNotFound`] if the line has no `{`, and
/// [`Error::LiteralTooLarge`] if the digits overflow a `u64`.
///
/// # Example
///
/// ```
/// use imap_keepalive::literal::literal_count;
///
/// let line = "* 12 FETCH (BODY[] {45}";
/// let frame = literal_count(line).unwrap();
/// assert_eq!(frame.byte_count, 45);
/// assert_eq!(frame.remainder(line), "}");
/// ```
pub fn literal_count(line: &str) -> Result<LiteralFrame> {
    let Some(open) = line.find('{') else {
        return Err(Error::LiteralNotFound {
            line: line.to_string(),
        });
    };

    let digits_start = open + 1;
    let digits_len = line[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let digits_end = digits_start + digits_len;
    let digits = &line[digits_start..digits_end];

    let byte_count = if digits.is_empty() {
        0
    } else {
        digits.parse().map_err(|_| Error::LiteralTooLarge {
            digits: digits.to_string(),
        })?
    };

    Ok(LiteralFrame {
        byte_count,
        digits_end,
        non_synchronizing: line[digits_end..].starts_with("+}"),
    })
}
