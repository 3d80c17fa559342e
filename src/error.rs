//! Error types for the imap-keepalive crate.
//!
//! All errors implement [`std::error::Error`] and carry the text that was rejected.
//! Only a missing literal marker is recoverable - see [`Error::is_recoverable`].

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding client text or waiting on a helper process.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    // ─────────────────────────────────────────────────────────────────────────
    // Mailbox locator errors (fatal to the parse call)
    // ─────────────────────────────────────────────────────────────────────────
    /// The locator does not start with `{` or is missing its closing `}`.
    #[error("malformed mailbox locator: {locator}")]
    MalformedLocator {
        /// The rejected locator text.
        locator: String,
    },

    /// The locator names no host (or none survived truncation).
    #[error("empty host in mailbox locator: {locator}")]
    EmptyHost {
        /// The rejected locator text.
        locator: String,
    },

    /// The `:port` part is not a non-zero port number.
    #[error("invalid port '{port}' in mailbox locator: {locator}")]
    InvalidPort {
        /// The rejected locator text.
        locator: String,
        /// The port token as written.
        port: String,
    },

    /// The `/transport` part names something other than `ssl`.
    #[error("unsupported transport '{transport}' in mailbox locator: {locator}")]
    UnsupportedTransport {
        /// The rejected locator text.
        locator: String,
        /// The transport token as written.
        transport: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Literal marker errors
    // ─────────────────────────────────────────────────────────────────────────
    /// The line contains no `{` and so introduces no literal (recoverable).
    #[error("no literal marker in line: {line}")]
    LiteralNotFound {
        /// The scanned line.
        line: String,
    },

    /// The announced literal length does not fit in a `u64`.
    #[error("literal length {digits} is out of range")]
    LiteralTooLarge {
        /// The digit run as written.
        digits: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Process / configuration errors
    // ─────────────────────────────────────────────────────────────────────────
    /// Waiting on the external process failed for a reason other than the timeout.
    #[error("failed to wait for external process")]
    ProcessWait {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration provided.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Returns `true` if the caller can carry on as if the input were simply absent.
    ///
    /// A line without a literal marker is an ordinary line; every other error
    /// means the input (or the process wait) must be rejected.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::LiteralNotFound { .. } => true,

            Error::MalformedLocator { .. }
            | Error::EmptyHost { .. }
            | Error::InvalidPort { .. }
            | Error::UnsupportedTransport { .. }
            | Error::LiteralTooLarge { .. }
            | Error::ProcessWait { .. }
            | Error::InvalidConfig { .. } => false,
        }
    }

    /// Returns the error category for logging purposes.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidConfig { .. } => ErrorCategory::Configuration,

            Error::MalformedLocator { .. }
            | Error::EmptyHost { .. }
            | Error::InvalidPort { .. }
            | Error::UnsupportedTransport { .. } => ErrorCategory::Locator,

            Error::LiteralNotFound { .. } | Error::LiteralTooLarge { .. } => {
                ErrorCategory::Literal
            }

            Error::ProcessWait { .. } => ErrorCategory::Process,
        }
    }
}

/// Error categories for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Configuration or validation errors.
    Configuration,
    /// Mailbox locator syntax errors.
    Locator,
    /// Literal marker errors.
    Literal,
    /// External process wait errors.
    Process,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Locator => write!(f, "locator"),
            ErrorCategory::Literal => write!(f, "literal"),
            ErrorCategory::Process => write!(f, "process"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_classification() {
        let err = Error::LiteralNotFound {
            line: "a1 OK done".into(),
        };
        assert!(err.is_recoverable());

        let err = Error::EmptyHost {
            locator: "{}INBOX".into(),
        };
        assert!(!err.is_recoverable());

        // Anything the process wait reports besides the timeout is fatal
        let err = Error::ProcessWait {
            source: std::io::Error::other("ECHILD"),
        };
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        let err = Error::InvalidPort {
            locator: "{host:abc}x".into(),
            port: "abc".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Locator);

        let err = Error::LiteralTooLarge {
            digits: "99999999999999999999999".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Literal);

        let err = Error::InvalidConfig {
            message: "zero".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(ErrorCategory::Process.to_string(), "process");
    }

    #[test]
    fn test_display_includes_context() {
        let err = Error::UnsupportedTransport {
            locator: "{host/foo}x".into(),
            transport: "foo".into(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported transport 'foo' in mailbox locator: {host/foo}x"
        );
    }
}
