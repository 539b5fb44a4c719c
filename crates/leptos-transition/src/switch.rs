//! Switch Transition
//!
//! Coordinates the exit of the old child and the enter of the new one when the
//! key of the displayed child changes.

use std::fmt;
use std::str::FromStr;

use crate::error::TransitionError;

/// Ordering of the two lifecycles during a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwitchMode {
    /// Old child exits fully before the new one enters
    #[default]
    OutIn,
    /// New child enters first, then the old one exits
    InOut,
}

impl SwitchMode {
    pub const ALL: [SwitchMode; 2] = [SwitchMode::OutIn, SwitchMode::InOut];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutIn => "out-in",
            Self::InOut => "in-out",
        }
    }
}

impl fmt::Display for SwitchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwitchMode {
    type Err = TransitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "out-in" => Ok(Self::OutIn),
            "in-out" => Ok(Self::InOut),
            other => Err(TransitionError::UnknownSwitchMode(other.to_string())),
        }
    }
}

/// One rendered child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchEntry<K> {
    pub key: K,
    /// External flag for this child's lifecycle
    pub in_: bool,
    /// Added mid-session, so it enters on mount
    pub arrival: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchPhase {
    Idle,
    Leaving,
    Entering,
}

/// Rendered children of a switch and the progress of the current switch
#[derive(Debug, Clone)]
pub struct SwitchState<K> {
    mode: SwitchMode,
    /// Mode the in-flight switch started with
    active_mode: SwitchMode,
    entries: Vec<SwitchEntry<K>>,
    phase: SwitchPhase,
    /// Out-in: key waiting for the old child to exit
    incoming: Option<K>,
    /// Latest key requested while a switch was in flight
    queued: Option<K>,
}

impl<K: Clone + PartialEq> SwitchState<K> {
    pub fn new(mode: SwitchMode, key: K) -> Self {
        Self {
            mode,
            active_mode: mode,
            entries: vec![SwitchEntry { key, in_: true, arrival: false }],
            phase: SwitchPhase::Idle,
            incoming: None,
            queued: None,
        }
    }

    pub fn mode(&self) -> SwitchMode {
        self.mode
    }

    /// Takes effect from the next switch on
    pub fn set_mode(&mut self, mode: SwitchMode) {
        self.mode = mode;
    }

    pub fn phase(&self) -> SwitchPhase {
        self.phase
    }

    pub fn entries(&self) -> &[SwitchEntry<K>] {
        &self.entries
    }

    pub fn is_in(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key && e.in_)
    }

    /// Newest rendered child
    pub fn current(&self) -> Option<&K> {
        self.entries.last().map(|e| &e.key)
    }

    /// Key the in-flight switch is heading to
    fn heading(&self) -> Option<&K> {
        self.incoming.as_ref().or_else(|| self.current())
    }

    /// Key that will be displayed once everything settles
    pub fn target(&self) -> Option<&K> {
        self.queued.as_ref().or_else(|| self.heading())
    }

    pub fn set_key(&mut self, key: K) {
        if self.phase == SwitchPhase::Idle {
            if self.current() != Some(&key) {
                self.start(key);
            }
            return;
        }
        if self.heading() == Some(&key) {
            self.queued = None;
        } else {
            self.queued = Some(key);
        }
    }

    /// A child's lifecycle reached entered
    pub fn on_entered(&mut self, key: &K) {
        if self.phase != SwitchPhase::Entering || self.current() != Some(key) {
            return;
        }
        match self.active_mode {
            SwitchMode::OutIn => {
                self.phase = SwitchPhase::Idle;
                self.settle_queue();
            }
            SwitchMode::InOut => {
                let last = self.entries.len() - 1;
                for entry in &mut self.entries[..last] {
                    entry.in_ = false;
                }
                self.phase = SwitchPhase::Leaving;
            }
        }
    }

    /// A child's lifecycle reached exited
    pub fn on_exited(&mut self, key: &K) {
        if self.phase != SwitchPhase::Leaving {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|e| &e.key != key || e.in_);
        if self.entries.len() == before {
            return;
        }
        match self.active_mode {
            SwitchMode::OutIn => {
                if let Some(next) = self.incoming.take() {
                    self.entries.push(SwitchEntry { key: next, in_: true, arrival: true });
                }
                self.phase = SwitchPhase::Entering;
            }
            SwitchMode::InOut => {
                if self.entries.iter().all(|e| e.in_) {
                    self.phase = SwitchPhase::Idle;
                    self.settle_queue();
                }
            }
        }
    }

    fn start(&mut self, key: K) {
        self.active_mode = self.mode;
        match self.mode {
            SwitchMode::OutIn => {
                for entry in &mut self.entries {
                    entry.in_ = false;
                }
                self.incoming = Some(key);
                self.phase = SwitchPhase::Leaving;
            }
            SwitchMode::InOut => {
                self.entries.push(SwitchEntry { key, in_: true, arrival: true });
                self.phase = SwitchPhase::Entering;
            }
        }
    }

    fn settle_queue(&mut self) {
        if let Some(next) = self.queued.take() {
            if self.current() != Some(&next) {
                self.start(next);
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::tests::{advance, settle};
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Key(u8),
        Advance,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u8..3).prop_map(Op::Key), Just(Op::Advance)]
    }

    fn run(mode: SwitchMode, ops: &[Op]) -> (Option<u8>, usize) {
        let mut state = SwitchState::new(mode, 0u8);
        for op in ops {
            match op {
                Op::Key(k) => state.set_key(*k),
                Op::Advance => {
                    advance(&mut state);
                }
            }
        }
        settle(&mut state);
        (state.current().copied(), state.entries().len())
    }

    proptest! {
        /// Mode only changes ordering, never the child displayed in the end
        #[test]
        fn mode_never_changes_final_child(ops in prop::collection::vec(op(), 0..30)) {
            let last_key = ops.iter().rev().find_map(|op| match op {
                Op::Key(k) => Some(*k),
                Op::Advance => None,
            }).unwrap_or(0);

            let (out_in, out_in_len) = run(SwitchMode::OutIn, &ops);
            let (in_out, in_out_len) = run(SwitchMode::InOut, &ops);
            prop_assert_eq!(out_in, Some(last_key));
            prop_assert_eq!(in_out, Some(last_key));
            prop_assert_eq!(out_in_len, 1);
            prop_assert_eq!(in_out_len, 1);
        }
    }
}
