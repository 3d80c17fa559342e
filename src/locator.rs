//! Mailbox locators: the `{host[:port][/ssl]}mailbox` notation for remote mailboxes.
//!
//! This module converts between the single-string locator stored in
//! configuration files and its parts, and normalizes user-entered mailbox
//! paths to the server's hierarchy delimiter.
//!
//! # Example
//!
//! ```
//! use imap_keepalive::locator::{MailboxLocator, Transport};
//!
//! let locator: MailboxLocator = "{imap.example.com:993/ssl}Work/Todo".parse().unwrap();
//! assert_eq!(locator.host, "imap.example.com");
//! assert_eq!(locator.port(), 993);
//! assert_eq!(locator.transport, Transport::Tls);
//! assert_eq!(locator.path, "Work/Todo");
//!
//! // Sibling mailbox on the same server
//! assert_eq!(locator.qualify("Archive", 1024), "{imap.example.com/ssl}Archive");
//! ```

use crate::config::{BufferLimits, IMAP_PORT, IMAP_SSL_PORT};
use crate::error::{Error, Result};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Mailbox name used when the user gives an empty path.
pub const INBOX: &str = "INBOX";

/// How the connection to the server is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transport {
    /// Plain TCP.
    #[default]
    Plain,
    /// TLS from the first byte (`/ssl`).
    Tls,
}

impl Transport {
    /// Returns the port used when the locator names none.
    #[must_use]
    pub fn default_port(self) -> u16 {
        match self {
            Transport::Plain => IMAP_PORT,
            Transport::Tls => IMAP_SSL_PORT,
        }
    }
}

/// A remote mailbox split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailboxLocator {
    /// Server hostname. Never empty.
    pub host: String,
    /// Port given explicitly in the locator, if any.
    pub explicit_port: Option<u16>,
    /// Connection transport.
    pub transport: Transport,
    /// Mailbox path on the server, exactly as written after the closing `}`.
    pub path: String,
}

impl MailboxLocator {
    /// Creates a locator from connection parameters.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        explicit_port: Option<u16>,
        transport: Transport,
        path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            explicit_port,
            transport,
            path: path.into(),
        }
    }

    /// Returns the port to connect to: the explicit one, else the transport default.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.explicit_port.unwrap_or(self.transport.default_port())
    }

    /// Returns the locator of mailbox `name` on the same server.
    ///
    /// Host, port and transport are kept, so the result parses back to the
    /// same connection. At most `capacity - 1` characters are produced.
    #[must_use]
    pub fn qualify(&self, name: &str, capacity: usize) -> String {
        let sibling = MailboxLocator {
            path: name.to_string(),
            ..self.clone()
        };
        truncate(sibling.to_string(), capacity)
    }
}

impl std::fmt::Display for MailboxLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}", self.host)?;
        if self.port() != self.transport.default_port() {
            write!(f, ":{}", self.port())?;
        }
        if self.transport == Transport::Tls {
            write!(f, "/ssl")?;
        }
        write!(f, "}}{}", self.path)
    }
}

impl FromStr for MailboxLocator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s, BufferLimits::default().host)
    }
}

/// Parses a locator of the form `{host[:port][/ssl]}mailbox`.
///
/// At most `host_capacity - 1` characters of the host are kept; the rest are
/// skipped. The mailbox path is returned unchanged.
///
/// # Errors
///
/// - [`Error::MalformedLocator`] if the text does not start with `{` or has no closing `}`
/// - [`Error::EmptyHost`] if no host characters were kept
/// - [`Error::InvalidPort`] if the port is not a number in `1..=65535`
/// - [`Error::UnsupportedTransport`] if the transport is anything but `ssl`
#[instrument(name = "locator::parse", level = "trace", skip_all, fields(locator = %locator))]
pub fn parse(locator: &str, host_capacity: usize) -> Result<MailboxLocator> {
    let malformed = || {
        debug!("Missing brace in mailbox locator");
        Error::MalformedLocator {
            locator: locator.to_string(),
        }
    };

    let rest = locator.strip_prefix('{').ok_or_else(malformed)?;

    // Skip over the entire host, but keep only what fits
    let host_end = rest.find(['}', ':', '/']).unwrap_or(rest.len());
    let host: String = rest[..host_end]
        .chars()
        .take(host_capacity.saturating_sub(1))
        .collect();
    if host.is_empty() {
        debug!("Empty host in mailbox locator");
        return Err(Error::EmptyHost {
            locator: locator.to_string(),
        });
    }
    let mut rest = &rest[host_end..];

    let mut explicit_port = None;
    if let Some(after) = rest.strip_prefix(':') {
        let end = after.find(['}', '/']).ok_or_else(malformed)?;
        let token = &after[..end];
        match token.parse::<u16>() {
            Ok(port) if port != 0 => explicit_port = Some(port),
            _ => {
                debug!(port = %token, "Bad port in mailbox locator");
                return Err(Error::InvalidPort {
                    locator: locator.to_string(),
                    port: token.to_string(),
                });
            }
        }
        rest = &after[end..];
    }

    let mut transport = Transport::Plain;
    if let Some(after) = rest.strip_prefix('/') {
        let end = after.find('}').ok_or_else(malformed)?;
        let token = &after[..end];
        if token != "ssl" {
            debug!(transport = %token, "Unsupported transport in mailbox locator");
            return Err(Error::UnsupportedTransport {
                locator: locator.to_string(),
                transport: token.to_string(),
            });
        }
        transport = Transport::Tls;
        rest = &after[end..];
    }

    let path = rest.strip_prefix('}').ok_or_else(malformed)?;

    Ok(MailboxLocator {
        host,
        explicit_port,
        transport,
        path: path.to_string(),
    })
}

/// Builds the locator `{host}base_path+name`, or `{host:port}base_path+name`
/// when `port` is not the standard IMAP port.
///
/// The result is cut to `capacity - 1` characters.
#[must_use]
pub fn qualify_path(
    host: &str,
    port: u16,
    base_path: &str,
    name: &str,
    capacity: usize,
) -> String {
    let qualified = if port == IMAP_PORT {
        format!("{{{host}}}{base_path}{name}")
    } else {
        format!("{{{host}:{port}}}{base_path}{name}")
    };

    truncate(qualified, capacity)
}

/// Rewrites a user-entered mailbox path to use the server's hierarchy `delimiter`.
///
/// Every run of `/` or `delimiter` characters becomes a single `delimiter`;
/// other characters are copied. An empty path names the [`INBOX`]. At most
/// `capacity - 1` characters are produced and the rest of the input is dropped.
///
/// ```
/// use imap_keepalive::locator::fix_path;
///
/// assert_eq!(fix_path("Lists//rust/./announce", '.', 1024), "Lists.rust.announce");
/// assert_eq!(fix_path("", '.', 1024), "INBOX");
/// ```
#[must_use]
pub fn fix_path(raw: &str, delimiter: char, capacity: usize) -> String {
    let limit = capacity.saturating_sub(1);
    if raw.is_empty() {
        return truncate(INBOX.to_string(), capacity);
    }

    let is_separator = |c: &char| *c == '/' || *c == delimiter;
    let mut fixed = String::with_capacity(raw.len().min(limit));
    let mut written = 0;
    let mut chars = raw.chars().peekable();

    while written < limit {
        let Some(c) = chars.next() else {
            break;
        };
        if is_separator(&c) {
            while chars.next_if(is_separator).is_some() {}
            fixed.push(delimiter);
        } else {
            fixed.push(c);
        }
        written += 1;
    }

    fixed
}

/// Cuts `s` to at most `capacity - 1` characters.
fn truncate(mut s: String, capacity: usize) -> String {
    let limit = capacity.saturating_sub(1);
    if let Some((cut, _)) = s.char_indices().nth(limit) {
        s.truncate(cut);
    }
    s
}
