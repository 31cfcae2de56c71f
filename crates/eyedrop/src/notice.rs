//! Transient notices.
//!
//! Copying a color or selecting a duplicate raises a short-lived notice. A
//! [`NoticeTimer`] tracks at most one notice at a time. Arming it with a new
//! notice cancels the pending one. The timer does not read a clock; callers
//! pass the current [`Instant`] instead, which keeps it deterministic under
//! test.
//!
//! A notice goes through three states: it is *pending* for the configured
//! delay, then *visible* for the configured duration, and then gone.
//!
//! ```
//! # use std::time::{Duration, Instant};
//! # use eyedrop::notice::{Notice, NoticeTimer};
//! let start = Instant::now();
//! let mut timer = NoticeTimer::new(Duration::from_millis(10), Duration::from_millis(2_000));
//!
//! timer.arm(Notice::info("#ff0000 copied to clipboard"), start);
//! assert!(timer.is_pending());
//! assert!(timer.poll(start + Duration::from_millis(10)).is_some());
//! assert!(timer.poll(start + Duration::from_millis(2_010)).is_none());
//! ```

use core::time::Duration;
use std::time::Instant;

/// A notice for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    message: String,
    is_error: bool,
}

impl Notice {
    /// Create a new informational notice.
    pub fn info<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    /// Create a new error notice.
    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }

    /// Get the message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Determine whether the notice should be styled as an error.
    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

impl core::fmt::Display for Notice {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.message)
    }
}

// ====================================================================================================================

#[derive(Clone, Debug, Default)]
enum State {
    #[default]
    Idle,
    Pending {
        notice: Notice,
        show_at: Instant,
    },
    Visible {
        notice: Notice,
        hide_at: Instant,
    },
}

/// A timer for showing one notice at a time.
#[derive(Clone, Debug)]
pub struct NoticeTimer {
    delay: Duration,
    duration: Duration,
    state: State,
}

impl Default for NoticeTimer {
    /// Create a timer with a delay of 10ms and a duration of 2s.
    fn default() -> Self {
        Self::new(Duration::from_millis(10), Duration::from_millis(2_000))
    }
}

impl NoticeTimer {
    /// Create a new timer with the given delay before showing a notice and
    /// duration for showing it.
    pub const fn new(delay: Duration, duration: Duration) -> Self {
        Self {
            delay,
            duration,
            state: State::Idle,
        }
    }

    /// Get the delay before a notice becomes visible.
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Get the duration a notice stays visible.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Arm the timer with the given notice, starting at the given instant.
    ///
    /// If the timer already tracks a notice, that notice is cancelled and
    /// returned.
    pub fn arm(&mut self, notice: Notice, now: Instant) -> Option<Notice> {
        let cancelled = self.cancel();
        self.state = State::Pending {
            notice,
            show_at: now + self.delay,
        };
        cancelled
    }

    /// Advance the timer to the given instant and return the visible notice,
    /// if any.
    pub fn poll(&mut self, now: Instant) -> Option<&Notice> {
        match core::mem::take(&mut self.state) {
            State::Idle => {}
            State::Pending { notice, show_at } => {
                let hide_at = show_at + self.duration;
                if now < show_at {
                    self.state = State::Pending { notice, show_at };
                } else if now < hide_at {
                    self.state = State::Visible { notice, hide_at };
                }
            }
            State::Visible { notice, hide_at } => {
                if now < hide_at {
                    self.state = State::Visible { notice, hide_at };
                }
            }
        }

        match self.state {
            State::Visible { ref notice, .. } => Some(notice),
            _ => None,
        }
    }

    /// Cancel the tracked notice, whether pending or visible, and return it.
    pub fn cancel(&mut self) -> Option<Notice> {
        match core::mem::take(&mut self.state) {
            State::Idle => None,
            State::Pending { notice, .. } | State::Visible { notice, .. } => Some(notice),
        }
    }

    /// Get the tracked notice, whether pending or visible.
    pub fn notice(&self) -> Option<&Notice> {
        match self.state {
            State::Idle => None,
            State::Pending { ref notice, .. } | State::Visible { ref notice, .. } => Some(notice),
        }
    }

    /// Determine whether the timer tracks a notice that is not yet visible.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }

    /// Determine whether the timer tracks a visible notice.
    pub fn is_visible(&self) -> bool {
        matches!(self.state, State::Visible { .. })
    }

    /// Determine whether the timer tracks no notice.
    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }
}

// ====================================================================================================================
