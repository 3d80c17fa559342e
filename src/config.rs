//! Configuration for the keepalive wait and the bounded codecs.
//!
//! Use [`KeepaliveConfigBuilder`] to create a configuration with sensible defaults:
//!
//! ```
//! use imap_keepalive::KeepaliveConfig;
//! use std::time::Duration;
//!
//! let config = KeepaliveConfig::builder()
//!     .check_interval(Duration::from_secs(30))
//!     .build()
//!     .expect("valid config");
//!
//! assert_eq!(config.effective_check_interval(), Duration::from_secs(30));
//! ```

use crate::error::{Error, Result};
use std::time::Duration;

/// Standard IMAP port.
pub const IMAP_PORT: u16 = 143;

/// Standard IMAP-over-TLS port.
pub const IMAP_SSL_PORT: u16 = 993;

/// Check interval used when the configured one is zero.
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);

/// Configuration for the keepalive wait.
#[derive(Debug, Clone)]
pub struct KeepaliveConfig {
    /// How often the remote mailbox is polled while waiting on a helper process.
    /// Zero selects [`DEFAULT_CHECK_INTERVAL`].
    pub check_interval: Duration,
    /// Buffer capacities for the bounded codecs.
    pub limits: BufferLimits,
}

impl Default for KeepaliveConfig {
    fn default() -> Self {
        Self {
            check_interval: DEFAULT_CHECK_INTERVAL,
            limits: BufferLimits::default(),
        }
    }
}

impl KeepaliveConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> KeepaliveConfigBuilder {
        KeepaliveConfigBuilder::default()
    }

    /// Returns the poll interval to arm, falling back to 60 seconds for a zero interval.
    #[must_use]
    pub fn effective_check_interval(&self) -> Duration {
        effective_check_interval(self.check_interval)
    }
}

/// Resolves a configured check interval, mapping zero to [`DEFAULT_CHECK_INTERVAL`].
#[must_use]
pub fn effective_check_interval(configured: Duration) -> Duration {
    if configured.is_zero() {
        DEFAULT_CHECK_INTERVAL
    } else {
        configured
    }
}

/// Buffer capacities for the bounded operations.
///
/// Each capacity includes one terminator slot, so an operation produces at
/// most `capacity - 1` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferLimits {
    /// Capacity for the host part of a mailbox locator.
    pub host: usize,
    /// Capacity for normalized and qualified mailbox paths.
    pub path: usize,
    /// Capacity for quoted strings.
    pub quoted: usize,
    /// Scratch capacity for keyword matching.
    pub word: usize,
}

impl Default for BufferLimits {
    fn default() -> Self {
        Self {
            host: 128,
            path: 1024,
            quoted: 1024,
            word: 128,
        }
    }
}

/// Builder for [`KeepaliveConfig`].
#[derive(Debug, Default)]
pub struct KeepaliveConfigBuilder {
    check_interval: Option<Duration>,
    limits: Option<BufferLimits>,
}

impl KeepaliveConfigBuilder {
    /// Sets the mailbox check interval. Zero selects the 60 second default.
    #[must_use]
    pub fn check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = Some(interval);
        self
    }

    /// Sets all buffer capacities at once.
    #[must_use]
    pub fn limits(mut self, limits: BufferLimits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Sets the host capacity used when parsing locators.
    #[must_use]
    pub fn host_capacity(mut self, capacity: usize) -> Self {
        self.limits.get_or_insert_with(BufferLimits::default).host = capacity;
        self
    }

    /// Sets the capacity for normalized and qualified mailbox paths.
    #[must_use]
    pub fn path_capacity(mut self, capacity: usize) -> Self {
        self.limits.get_or_insert_with(BufferLimits::default).path = capacity;
        self
    }

    /// Sets the capacity for quoted strings.
    #[must_use]
    pub fn quoted_capacity(mut self, capacity: usize) -> Self {
        self.limits.get_or_insert_with(BufferLimits::default).quoted = capacity;
        self
    }

    /// Sets the scratch capacity for keyword matching.
    #[must_use]
    pub fn word_capacity(mut self, capacity: usize) -> Self {
        self.limits.get_or_insert_with(BufferLimits::default).word = capacity;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if any capacity is zero.
    pub fn build(self) -> Result<KeepaliveConfig> {
        let limits = self.limits.unwrap_or_default();

        for (name, capacity) in [
            ("host", limits.host),
            ("path", limits.path),
            ("quoted", limits.quoted),
            ("word", limits.word),
        ] {
            if capacity == 0 {
                return Err(Error::InvalidConfig {
                    message: format!("{name} capacity must be non-zero"),
                });
            }
        }

        Ok(KeepaliveConfig {
            check_interval: self.check_interval.unwrap_or(DEFAULT_CHECK_INTERVAL),
            limits,
        })
    }
}
