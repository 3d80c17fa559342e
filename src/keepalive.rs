//! Keeping a remote session alive while an external helper runs.
//!
//! While the user sits in a pager or editor, the client is blocked waiting
//! for that process. [`wait_with_poll`] waits with a timeout and, every time
//! the timeout lapses, polls the remote mailbox so the server does not drop
//! the connection.
//!
//! # Example
//!
//! ```no_run
//! use imap_keepalive::keepalive::wait_with_poll;
//! use imap_keepalive::session::SessionFlags;
//! use imap_keepalive::KeepaliveConfig;
//!
//! # async fn example() -> imap_keepalive::Result<()> {
//! let config = KeepaliveConfig::default();
//! let mut flags = SessionFlags::default();
//! let mut editor = tokio::process::Command::new("vi")
//!     .arg("/tmp/draft")
//!     .spawn()
//!     .expect("editor");
//!
//! let outcome = wait_with_poll(
//!     &mut editor,
//!     &mut flags,
//!     |_: &SessionFlags| async { /* NOOP the selected mailbox */ },
//!     config.check_interval,
//! )
//! .await?;
//! println!("editor exited with {}", outcome.exit_status);
//! # Ok(())
//! # }
//! ```

use crate::config::effective_check_interval;
use crate::error::{Error, Result};
use crate::session::{PassiveGuard, SessionFlags};
use std::future::Future;
use std::io;
use std::process::ExitStatus;
use std::time::Duration;
use tracing::{debug, instrument, trace, warn};

/// An already-spawned external process that can be waited on with a timeout.
pub trait ProcessHandle {
    /// Waits at most `timeout` for the process to finish.
    ///
    /// Returns `Ok(Some(status))` once it has finished and `Ok(None)` if the
    /// timeout lapsed first. Any other failure is returned as an error.
    fn wait_timeout(
        &mut self,
        timeout: Duration,
    ) -> impl Future<Output = io::Result<Option<i32>>> + Send;
}

impl ProcessHandle for tokio::process::Child {
    async fn wait_timeout(&mut self, timeout: Duration) -> io::Result<Option<i32>> {
        // Dropping the timed-out wait disarms its timer; the child keeps running
        match tokio::time::timeout(timeout, self.wait()).await {
            Ok(status) => status.map(|status| Some(exit_code(status))),
            Err(_) => Ok(None),
        }
    }
}

/// Converts an exit status to an integer, reporting signals as `128 + signal`.
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    status.code().unwrap_or(-1)
}

/// Collaborator that checks the remote mailbox for changes.
///
/// Implemented for any `FnMut(&SessionFlags) -> impl Future<Output = ()>`.
pub trait RemotePoll {
    /// Polls the remote mailbox once. Failures are the implementation's concern.
    fn poll_remote(&mut self, flags: &SessionFlags) -> impl Future<Output = ()> + Send;
}

impl<F, Fut> RemotePoll for F
where
    F: FnMut(&SessionFlags) -> Fut,
    Fut: Future<Output = ()> + Send,
{
    fn poll_remote(&mut self, flags: &SessionFlags) -> impl Future<Output = ()> + Send {
        self(flags)
    }
}

/// Result of a completed [`wait_with_poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitOutcome {
    /// Exit status of the external process.
    pub exit_status: i32,
    /// Number of timeouts that lapsed before the process finished.
    pub polls: u32,
}

/// Waits for `process` to finish, polling the remote mailbox every `check_interval`.
///
/// A zero interval selects the 60 second default. Each time the interval
/// lapses the poller runs once (unless an error message is on screen, see
/// [`SessionFlags::message_error`]) and the wait resumes with the same
/// interval.
///
/// For the duration of the call the session is marked passive and quiet; both
/// flags are restored when the call returns, fails, or is cancelled.
///
/// # Errors
///
/// Returns [`Error::ProcessWait`] if waiting on the process fails for a
/// reason other than the timeout.
#[instrument(
    name = "keepalive::wait_with_poll",
    skip_all,
    fields(check_interval_secs = check_interval.as_secs())
)]
pub async fn wait_with_poll<H, P>(
    process: &mut H,
    flags: &mut SessionFlags,
    mut poller: P,
    check_interval: Duration,
) -> Result<WaitOutcome>
where
    H: ProcessHandle,
    P: RemotePoll,
{
    let interval = effective_check_interval(check_interval);
    let guard = PassiveGuard::engage(flags);
    let mut polls = 0;

    loop {
        match process.wait_timeout(interval).await {
            Ok(Some(exit_status)) => {
                debug!(exit_status, polls, "External process finished");
                return Ok(WaitOutcome { exit_status, polls });
            }
            Ok(None) => {
                polls += 1;
                if guard.message_error {
                    trace!(polls, "Error message on screen, skipping poll");
                } else {
                    trace!(polls, "Polling remote mailbox");
                    poller.poll_remote(&guard).await;
                }
            }
            Err(source) => {
                warn!(error = %source, polls, "Waiting for external process failed");
                return Err(Error::ProcessWait { source });
            }
        }
    }
}
