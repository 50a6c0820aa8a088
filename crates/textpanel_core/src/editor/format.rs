//! Autoformat configuration and the one-shot format-on-mount timer.

use crate::host::FormatAction;
use crate::models::Format;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Delay between mount and the initial document format.
pub const DEFAULT_FORMAT_DELAY: Duration = Duration::from_millis(100);

/// Continuous formatting switches passed to the code surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoformatOptions {
    pub format_on_paste: bool,
    pub format_on_type: bool,
}

impl AutoformatOptions {
    /// Both switches on for [`Format::Auto`], both off otherwise.
    pub fn for_format(format: Format) -> Self {
        let enabled = format.is_auto();
        Self {
            format_on_paste: enabled,
            format_on_type: enabled,
        }
    }
}

/// Result of polling the one-shot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    /// Nothing armed for the current mount (or no mount).
    Idle,
    /// Armed, deadline not reached yet.
    Waiting,
    /// The format action ran.
    Formatted,
    /// The deadline passed but the action failed; the failure was swallowed.
    Suppressed,
}

enum Schedule {
    Unmounted,
    Armed {
        deadline: Instant,
        action: Box<dyn FormatAction>,
    },
    Settled,
}

/// Per-mount state of the initial format.
///
/// Armed at most once per mount and only when formatting was `auto` at mount
/// time; dropping back to [`Schedule::Unmounted`] discards a pending action.
pub(crate) struct MountFormat {
    schedule: Schedule,
}

impl Default for MountFormat {
    fn default() -> Self {
        Self {
            schedule: Schedule::Unmounted,
        }
    }
}

impl MountFormat {
    pub(crate) fn mount(
        &mut self,
        action: Box<dyn FormatAction>,
        format: Format,
        now: Instant,
        delay: Duration,
    ) {
        if !format.is_auto() {
            debug!("format-on-mount skipped (format = {:?})", format);
            self.schedule = Schedule::Settled;
            return;
        }
        let deadline = now + delay;
        debug!("format-on-mount armed for {:?}", delay);
        self.schedule = Schedule::Armed { deadline, action };
    }

    pub(crate) fn unmount(&mut self) {
        if matches!(self.schedule, Schedule::Armed { .. }) {
            debug!("pending format-on-mount dropped by unmount");
        }
        self.schedule = Schedule::Unmounted;
    }

    pub(crate) fn is_mounted(&self) -> bool {
        !matches!(self.schedule, Schedule::Unmounted)
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        match &self.schedule {
            Schedule::Armed { deadline, .. } => Some(*deadline),
            _ => None,
        }
    }

    pub(crate) fn poll(&mut self, now: Instant) -> FormatOutcome {
        match &self.schedule {
            Schedule::Armed { deadline, .. } if now < *deadline => return FormatOutcome::Waiting,
            Schedule::Armed { .. } => {}
            _ => return FormatOutcome::Idle,
        }
        let Schedule::Armed { mut action, .. } =
            std::mem::replace(&mut self.schedule, Schedule::Settled)
        else {
            return FormatOutcome::Idle;
        };
        match action.run() {
            Ok(()) => FormatOutcome::Formatted,
            Err(err) => {
                warn!("format-on-mount suppressed: {}", err);
                FormatOutcome::Suppressed
            }
        }
    }
}
