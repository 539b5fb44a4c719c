//! Transition Configuration
//!
//! Per-instance knobs, built with chained `with_*`/flag methods.

use std::time::Duration;

use crate::status::Phase;

/// Completion timer length per phase. `None` means no timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timeouts {
    pub appear: Option<Duration>,
    pub enter: Option<Duration>,
    pub exit: Option<Duration>,
}

impl Timeouts {
    /// Same duration for every phase
    pub fn uniform(ms: u64) -> Self {
        let d = Some(Duration::from_millis(ms));
        Self { appear: d, enter: d, exit: d }
    }

    pub fn for_phase(&self, phase: Phase) -> Option<Duration> {
        match phase {
            Phase::Appear => self.appear,
            Phase::Enter => self.enter,
            Phase::Exit => self.exit,
        }
    }
}

/// Behaviour of one lifecycle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    pub timeouts: Timeouts,
    /// Completion may also be signaled by the element's end event
    pub end_listener: bool,
    /// Run an enter transition on mount when initially visible
    pub appear: bool,
    /// Animate entering; when off, jump straight to entered
    pub enter: bool,
    /// Animate exiting; when off, jump straight to exited
    pub exit: bool,
    /// Do not mount until first entered
    pub mount_on_enter: bool,
    /// Drop the element once exited
    pub unmount_on_exit: bool,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timeouts: Timeouts::default(),
            end_listener: false,
            appear: false,
            enter: true,
            exit: true,
            mount_on_enter: false,
            unmount_on_exit: false,
        }
    }
}

impl TransitionConfig {
    pub fn with_timeout(mut self, ms: u64) -> Self {
        self.timeouts = Timeouts::uniform(ms);
        self
    }

    pub fn with_timeouts(mut self, timeouts: Timeouts) -> Self {
        self.timeouts = timeouts;
        self
    }

    pub fn with_end_listener(mut self) -> Self {
        self.end_listener = true;
        self
    }

    pub fn appear(mut self) -> Self {
        self.appear = true;
        self
    }

    pub fn mount_on_enter(mut self) -> Self {
        self.mount_on_enter = true;
        self
    }

    pub fn unmount_on_exit(mut self) -> Self {
        self.unmount_on_exit = true;
        self
    }

    pub fn without_enter(mut self) -> Self {
        self.enter = false;
        self
    }

    pub fn without_exit(mut self) -> Self {
        self.exit = false;
        self
    }

    /// Timer to arm for a phase once its active stage starts.
    ///
    /// Without an end listener there is nothing else that could complete the
    /// transition, so a missing duration becomes an immediate timer.
    pub fn completion_timer(&self, phase: Phase) -> Option<Duration> {
        match self.timeouts.for_phase(phase) {
            Some(d) => Some(d),
            None if self.end_listener => None,
            None => Some(Duration::ZERO),
        }
    }
}
