//! # imap-keepalive
//!
//! Text codecs an IMAP client needs around its protocol engine, plus a way to
//! keep the session alive while the user is busy in an external program.
//!
//! This crate provides:
//! - Mailbox locators: parsing and formatting `{host[:port][/ssl]}mailbox`
//!   ([`locator`]), and normalizing hierarchy delimiters ([`locator::fix_path`])
//! - IMAP quoted strings ([`quote`])
//! - Literal length markers `{N}` ([`literal`])
//! - Word scanning helpers for response lines ([`words`])
//! - A timed wait on a helper process that polls the remote mailbox on every
//!   timeout ([`keepalive`])
//!
//! Nothing here performs network I/O; the codecs work on in-memory text and
//! the keepalive only waits on a process the caller already spawned.
//!
//! ## Quick Start
//!
//! ```
//! use imap_keepalive::locator::{fix_path, MailboxLocator};
//! use imap_keepalive::quote::quote_string;
//! use imap_keepalive::KeepaliveConfig;
//!
//! let config = KeepaliveConfig::default();
//! let locator: MailboxLocator = "{imap.example.com/ssl}Lists/rust".parse()?;
//!
//! // The server uses '.' as its hierarchy delimiter
//! let mailbox = fix_path(&locator.path, '.', config.limits.path);
//! assert_eq!(quote_string(&mailbox, config.limits.quoted), "\"Lists.rust\"");
//! # Ok::<(), imap_keepalive::Error>(())
//! ```
//!
//! ## Keeping the Session Alive
//!
//! ```no_run
//! use imap_keepalive::keepalive::wait_with_poll;
//! use imap_keepalive::session::SessionFlags;
//! use imap_keepalive::KeepaliveConfig;
//! use std::time::Duration;
//!
//! # async fn example() -> imap_keepalive::Result<()> {
//! let config = KeepaliveConfig::builder()
//!     .check_interval(Duration::from_secs(120))
//!     .build()?;
//! let mut flags = SessionFlags::default();
//! let mut pager = tokio::process::Command::new("less").arg("/tmp/message").spawn().unwrap();
//!
//! let outcome = wait_with_poll(
//!     &mut pager,
//!     &mut flags,
//!     |_: &SessionFlags| async { /* check the mailbox */ },
//!     config.check_interval,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Locator errors are fatal to the configuration that contained them; a
//! missing literal marker just means the line carries no literal. Use
//! [`Error::is_recoverable`] to tell them apart:
//!
//! ```
//! use imap_keepalive::literal::literal_count;
//!
//! match literal_count("a1 OK done") {
//!     Ok(frame) => println!("literal of {} bytes follows", frame.byte_count),
//!     Err(e) if e.is_recoverable() => println!("plain line"),
//!     Err(e) => eprintln!("bad line: {e}"),
//! }
//! ```
//!
//! ## Observability
//!
//! The crate uses `tracing`. The keepalive wait runs inside a
//! `keepalive::wait_with_poll` span and locator parsing inside a
//! `locator::parse` span (trace level). Rejected locators are logged at
//! debug level, and errors raised while the session is quiet at warn level.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
pub mod config;
pub mod error;
pub mod interaction;
pub mod keepalive;
pub mod literal;
pub mod locator;
pub mod quote;
pub mod session;
pub mod words;

// Re-exports for ergonomic API
pub use config::{BufferLimits, KeepaliveConfig, KeepaliveConfigBuilder};
pub use error::{Error, ErrorCategory, Result};
pub use keepalive::{wait_with_poll, ProcessHandle, RemotePoll, WaitOutcome};
pub use literal::{literal_count, LiteralFrame};
pub use locator::{MailboxLocator, Transport};
pub use session::{PassiveGuard, SessionFlags};
