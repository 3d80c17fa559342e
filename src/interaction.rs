//! User-facing collaborators: error display and yes/no prompts.
//!
//! The client supplies an [`Interaction`] implementation; the helpers here
//! consult [`SessionFlags`] so that nothing reaches the user while the session
//! is being kept quiet.
//!
//! # Example
//!
//! ```
//! use imap_keepalive::interaction::{continue_after_error, Interaction};
//! use imap_keepalive::session::SessionFlags;
//!
//! struct AlwaysYes;
//!
//! impl Interaction for AlwaysYes {
//!     fn report_error(&mut self, location: &str, message: &str) {
//!         eprintln!("{location} [{message}]");
//!     }
//!
//!     fn confirm(&mut self, _prompt: &str, _default_yes: bool) -> bool {
//!         true
//!     }
//! }
//!
//! let flags = SessionFlags::default();
//! assert!(continue_after_error(&flags, &mut AlwaysYes, "COPY failed", "a3 NO over quota"));
//! ```

use crate::session::SessionFlags;
use tracing::{debug, warn};

/// Prompt shown after an error when the caller may carry on.
pub const CONTINUE_PROMPT: &str = "Continue?";

/// Collaborator that talks to the user.
pub trait Interaction {
    /// Shows an error as `location [message]`.
    fn report_error(&mut self, location: &str, message: &str);

    /// Asks a yes/no question, returning the answer.
    fn confirm(&mut self, prompt: &str, default_yes: bool) -> bool;
}

/// Reports an error to the user, or only logs it while the session is quiet.
pub fn report_error(
    flags: &SessionFlags,
    ui: &mut dyn Interaction,
    location: &str,
    message: &str,
) {
    if flags.keep_quiet {
        warn!(location, message, "Error suppressed while session is quiet");
        return;
    }
    ui.report_error(location, message);
}

/// Asks the user a yes/no question; a quiet session takes the default answer.
pub fn confirm(
    flags: &SessionFlags,
    ui: &mut dyn Interaction,
    prompt: &str,
    default_yes: bool,
) -> bool {
    if flags.keep_quiet {
        debug!(prompt, default_yes, "Prompt suppressed, using default");
        return default_yes;
    }
    ui.confirm(prompt, default_yes)
}

/// Shows an error and asks whether to continue; the default answer is no.
pub fn continue_after_error(
    flags: &SessionFlags,
    ui: &mut dyn Interaction,
    location: &str,
    message: &str,
) -> bool {
    report_error(flags, ui, location, message);
    confirm(flags, ui, CONTINUE_PROMPT, false)
}
