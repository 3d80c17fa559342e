//! IMAP quoted-string codec.
//!
//! Both directions are lenient: [`quote_string`] truncates rather than fails,
//! and [`unquote_string`] recovers what it can from unterminated input.
//!
//! # Example
//!
//! ```
//! use imap_keepalive::quote::{quote_string, unquote_string};
//!
//! let quoted = quote_string(r#"Lists/"rust""#, 1024);
//! assert_eq!(quoted, r#""Lists/\"rust\"""#);
//! assert_eq!(unquote_string(&quoted), r#"Lists/"rust""#);
//! ```

use std::borrow::Cow;

/// Characters that must be backslash-escaped inside a quoted string.
fn needs_escape(c: char) -> bool {
    c == '"' || c == '\\'
}

/// Quotes `src` according to IMAP rules: surrounds it with `"` and escapes `"` and `\`.
///
/// `capacity` is the size of the destination buffer including its terminator
/// slot. Two slots go to the surrounding quotes; each remaining source
/// character costs one slot, or two when escaped. Copying stops at the first
/// character that no longer fits, and the result is always closed, so the
/// smallest possible output is `""`.
#[must_use]
pub fn quote_string(src: &str, capacity: usize) -> String {
    let mut budget = capacity.saturating_sub(3);
    let mut quoted = String::with_capacity(src.len().min(budget) + 2);

    quoted.push('"');
    for c in src.chars() {
        let cost = if needs_escape(c) { 2 } else { 1 };
        if cost > budget {
            break;
        }
        if needs_escape(c) {
            quoted.push('\\');
        }
        quoted.push(c);
        budget -= cost;
    }
    quoted.push('"');

    quoted
}

/// Strips one layer of IMAP quoting from `text`.
///
/// Text that does not start with `"` is returned unchanged. Otherwise a `\`
/// takes the following character literally and the first unescaped `"` ends
/// the value. A missing closing quote is tolerated: everything after the
/// opening quote is kept.
#[must_use]
pub fn unquote_string(text: &str) -> Cow<'_, str> {
    let Some(body) = text.strip_prefix('"') else {
        return Cow::Borrowed(text);
    };

    let mut unquoted = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => break,
            // A trailing lone backslash escapes nothing and is dropped
            '\\' => unquoted.extend(chars.next()),
            _ => unquoted.push(c),
        }
    }

    Cow::Owned(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote_string("INBOX", 64), "\"INBOX\"");
        assert_eq!(quote_string("", 64), "\"\"");
    }

    #[test]
    fn test_quote_backslash() {
        assert_eq!(quote_string(r"test\text", 64), "\"test\\\\text\"");
    }

    #[test]
    fn test_quote_dquote() {
        assert_eq!(quote_string("test\"text", 64), "\"test\\\"text\"");
    }

    #[test]
    fn test_quote_truncates_but_stays_quoted() {
        // Two quotes plus terminator leave room for two characters
        assert_eq!(quote_string("abc", 5), "\"ab\"");
        assert_eq!(quote_string("abc", 6), "\"abc\"");
    }

    #[test]
    fn test_quote_never_splits_escape() {
        // The escaped quote needs two slots but only one is left
        assert_eq!(quote_string("ab\"c", 6), "\"ab\"");
        assert_eq!(quote_string("a\"b", 6), "\"a\\\"\"");
    }

    #[test]
    fn test_quote_tiny_capacity() {
        for capacity in 0..=3 {
            assert_eq!(quote_string("anything", capacity), "\"\"");
        }
    }

    #[test]
    fn test_quote_respects_capacity() {
        let src = r#"mixed "quotes" and \slashes\ throughout"#;
        for capacity in 3..64 {
            let quoted = quote_string(src, capacity);
            assert!(quoted.chars().count() < capacity, "capacity {capacity}");
            assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        }
    }

    #[test]
    fn test_unquote_not_quoted() {
        assert!(matches!(unquote_string("INBOX"), Cow::Borrowed("INBOX")));
        assert_eq!(unquote_string(""), "");
    }

    #[test]
    fn test_unquote_escapes() {
        assert_eq!(unquote_string(r#""a\"b\\c""#), r#"a"b\c"#);
        // Escaping an ordinary character just yields the character
        assert_eq!(unquote_string(r#""\x""#), "x");
    }

    #[test]
    fn test_unquote_stops_at_closing_quote() {
        assert_eq!(unquote_string(r#""Sent" (\HasNoChildren)"#), "Sent");
    }

    #[test]
    fn test_unquote_unterminated() {
        assert_eq!(unquote_string("\"Drafts"), "Drafts");
        assert_eq!(unquote_string("\"ends with \\"), "ends with ");
        assert_eq!(unquote_string("\""), "");
    }

    #[test]
    fn test_round_trip() {
        for s in ["", "plain", r"back\slash", r#"dq""dq"#, "Ünïcödé/目录"] {
            assert_eq!(unquote_string(&quote_string(s, 1024)), s);
        }
    }
}
