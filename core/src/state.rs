use crate::Duration;
use std::fmt;

/// The countdown state. Exactly one variant is active per [`Timer`](crate::Timer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Editable; the duration is the value being composed on the keypad.
    Stopped(Duration),
    /// Counting down; the duration is the time remaining.
    Running(Duration),
    /// Frozen at the time remaining when paused.
    Paused(Duration),
}

impl TimerState {
    pub fn duration(&self) -> Duration {
        match *self {
            TimerState::Stopped(d) | TimerState::Running(d) | TimerState::Paused(d) => d,
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, TimerState::Stopped(_))
    }

    pub fn is_running(&self) -> bool {
        matches!(self, TimerState::Running(_))
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, TimerState::Paused(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimerState::Stopped(_) => "Stopped",
            TimerState::Running(_) => "Running",
            TimerState::Paused(_) => "Paused",
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        TimerState::Stopped(Duration::ZERO)
    }
}

impl fmt::Display for TimerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.label(), self.duration())
    }
}
