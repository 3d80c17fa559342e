//! Word-level helpers for scanning IMAP response lines.
//!
//! These never fail: a line that runs out of words simply yields an empty suffix.
//!
//! # Example
//!
//! ```
//! use imap_keepalive::words::{next_word, qualifier, word_case_match};
//!
//! let line = "a0042 NO [TRYCREATE] Mailbox does not exist";
//! assert_eq!(next_word(line), "NO [TRYCREATE] Mailbox does not exist");
//! assert_eq!(qualifier(line), "[TRYCREATE] Mailbox does not exist");
//! assert!(word_case_match("no", next_word(line), 128));
//! ```

use regex::Regex;
use std::sync::LazyLock;

/// Response code a server attaches when the target mailbox of a COPY/APPEND is missing.
static TRY_CREATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\[TRYCREATE\]").expect("valid regex"));

/// Whitespace as the C locale classifies it (includes vertical tab).
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Returns the suffix of `s` where the next word begins.
///
/// Skips the current run of non-whitespace, then any whitespace after it.
#[must_use]
pub fn next_word(s: &str) -> &str {
    let rest = s.trim_start_matches(|c: char| !is_space(c));
    rest.trim_start_matches(is_space)
}

/// Returns the human-readable qualifier of a tagged response.
///
/// Skips the tag and the status token (`OK`/`NO`/`BAD`).
#[must_use]
pub fn qualifier(line: &str) -> &str {
    next_word(next_word(line))
}

/// Returns `true` if the tagged response carries a `[TRYCREATE]` hint.
///
/// ```
/// use imap_keepalive::words::is_try_create;
///
/// assert!(is_try_create("a3 NO [TRYCREATE] No such mailbox"));
/// assert!(!is_try_create("a3 OK COPY completed"));
/// ```
#[must_use]
pub fn is_try_create(line: &str) -> bool {
    TRY_CREATE.is_match(qualifier(line))
}

/// Compares `candidate` case-insensitively with the first word of `word_list`.
///
/// The word is first copied into a scratch buffer of `scratch_capacity` slots
/// (one reserved for the terminator), so only its first `scratch_capacity - 1`
/// characters take part in the comparison.
#[must_use]
pub fn word_case_match(candidate: &str, word_list: &str, scratch_capacity: usize) -> bool {
    let keep = scratch_capacity.saturating_sub(1);
    let word = word_list.split(is_space).next().unwrap_or_default();
    let scratch: String = word.chars().take(keep).collect();

    candidate.eq_ignore_ascii_case(&scratch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_word_skips_word_and_whitespace() {
        assert_eq!(next_word("* 12 FETCH"), "12 FETCH");
        assert_eq!(next_word("tag \t\r\n OK"), "OK");
    }

    #[test]
    fn test_next_word_at_end() {
        assert_eq!(next_word("lonely"), "");
        assert_eq!(next_word(""), "");
        assert_eq!(next_word("trailing   "), "");
    }

    #[test]
    fn test_next_word_leading_whitespace() {
        // The current word is empty, so only the whitespace is skipped
        assert_eq!(next_word("  OK done"), "OK done");
    }

    #[test]
    fn test_qualifier() {
        assert_eq!(qualifier("a1 OK COPY completed"), "COPY completed");
        assert_eq!(qualifier("a1 OK"), "");
        assert_eq!(qualifier(""), "");
    }

    #[test]
    fn test_is_try_create() {
        assert!(is_try_create("a7 NO [TRYCREATE] Mailbox doesn't exist"));
        assert!(is_try_create("a7 NO [trycreate] lower-case server"));
        assert!(!is_try_create("a7 NO [ALERT] Quota exceeded"));
        // Only the qualifier is inspected, not the tag
        assert!(!is_try_create("[TRYCREATE] NO"));
    }

    #[test]
    fn test_word_case_match() {
        assert!(word_case_match("OK", "OK completed", 64));
        assert!(!word_case_match("NO", "OK completed", 64));
        assert!(word_case_match("fetch", "FETCH (FLAGS ())", 64));
        assert!(word_case_match("BYE", "BYE", 64));
    }

    #[test]
    fn test_word_case_match_truncates_scratch() {
        // Scratch holds three characters plus the terminator
        assert!(word_case_match("CAP", "CAPABILITY IMAP4rev1", 4));
        assert!(!word_case_match("CAPABILITY", "CAPABILITY IMAP4rev1", 4));
        assert!(word_case_match("", "OK", 0));
    }

    #[test]
    fn test_word_case_match_empty_list() {
        assert!(word_case_match("", "", 64));
        assert!(!word_case_match("OK", " OK", 64));
    }
}
