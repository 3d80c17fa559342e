//! Session-scoped flags that silence the client during a background wait.

use std::ops::Deref;
use tracing::trace;

/// Flags owned by the caller's session object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// Treat the session as passive: do not reconnect or open new connections.
    pub passive: bool,
    /// Suppress prompts and error chatter; errors go to the log instead.
    pub keep_quiet: bool,
    /// An error message is currently shown to the user.
    pub message_error: bool,
}

/// Sets [`SessionFlags::passive`] and [`SessionFlags::keep_quiet`] for its lifetime.
///
/// On drop both flags go back to what they were before, whichever way the
/// guarded scope is left.
#[derive(Debug)]
pub struct PassiveGuard<'a> {
    flags: &'a mut SessionFlags,
    was_passive: bool,
    was_quiet: bool,
}

impl<'a> PassiveGuard<'a> {
    /// Marks the session passive and quiet until the guard is dropped.
    #[must_use]
    pub fn engage(flags: &'a mut SessionFlags) -> Self {
        let was_passive = flags.passive;
        let was_quiet = flags.keep_quiet;
        flags.passive = true;
        flags.keep_quiet = true;
        trace!(was_passive, was_quiet, "Session set passive");

        Self {
            flags,
            was_passive,
            was_quiet,
        }
    }
}

impl Deref for PassiveGuard<'_> {
    type Target = SessionFlags;

    fn deref(&self) -> &SessionFlags {
        self.flags
    }
}

impl Drop for PassiveGuard<'_> {
    fn drop(&mut self) {
        self.flags.passive = self.was_passive;
        self.flags.keep_quiet = self.was_quiet;
        trace!(
            passive = self.flags.passive,
            keep_quiet = self.flags.keep_quiet,
            "Session flags restored"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_sets_and_restores() {
        let mut flags = SessionFlags::default();
        {
            let guard = PassiveGuard::engage(&mut flags);
            assert!(guard.passive);
            assert!(guard.keep_quiet);
        }
        assert_eq!(flags, SessionFlags::default());
    }

    #[test]
    fn test_guard_keeps_prior_passive() {
        let mut flags = SessionFlags {
            passive: true,
            ..SessionFlags::default()
        };
        drop(PassiveGuard::engage(&mut flags));

        assert!(flags.passive);
        assert!(!flags.keep_quiet);
    }

    #[test]
    fn test_guard_keeps_prior_quiet() {
        let mut flags = SessionFlags {
            keep_quiet: true,
            ..SessionFlags::default()
        };
        drop(PassiveGuard::engage(&mut flags));

        assert!(flags.keep_quiet);
        assert!(!flags.passive);
    }

    #[test]
    fn test_guard_leaves_message_error_alone() {
        let mut flags = SessionFlags {
            message_error: true,
            ..SessionFlags::default()
        };
        drop(PassiveGuard::engage(&mut flags));

        assert!(flags.message_error);
    }

    #[test]
    fn test_guard_restores_on_unwind() {
        let mut flags = SessionFlags::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = PassiveGuard::engage(&mut flags);
            panic!("helper crashed");
        }));

        assert!(result.is_err());
        assert!(!flags.passive);
        assert!(!flags.keep_quiet);
    }
}
