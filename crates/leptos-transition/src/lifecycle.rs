//! Visibility Lifecycle
//!
//! Pure enter/exit state machine. Every operation returns the [`Command`]s the
//! driver has to carry out (notify hooks, schedule the next tick, arm a
//! completion timer). Tokens tie scheduled work to the transition that asked
//! for it: once a transition is cancelled its token goes stale and late ticks
//! or completions are ignored.
//!
//! Interrupted transitions always settle: each started transition leaves
//! exactly one pending step, and each step either schedules the next one or
//! settles, so draining pending steps ends in `Entered` or `Exited`/`Unmounted`.

use std::time::Duration;

use crate::config::TransitionConfig;
use crate::status::{Hook, Phase, Stage, TransitionState, TransitionStatus};

/// Generation number of one started transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// What the lifecycle is waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStep {
    /// Next scheduling tick, to apply the active stage
    Tick,
    /// Completion timer or end event
    Completion,
}

/// Work the driver has to perform after a lifecycle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Notify(Hook),
    /// Call [`Lifecycle::tick`] with this token on the next tick
    ScheduleTick(TransitionToken),
    /// Call [`Lifecycle::complete`] after `timeout`, or on the end event when `None`
    AwaitCompletion {
        token: TransitionToken,
        timeout: Option<Duration>,
    },
    /// Any work scheduled for this token is void
    Cancel(TransitionToken),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    token: TransitionToken,
    step: PendingStep,
}

/// One enter/exit state machine bound to a single element
#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    config: TransitionConfig,
    status: TransitionStatus,
    phase: Option<Phase>,
    stage: Stage,
    target_in: bool,
    next_token: u64,
    pending: Option<Pending>,
    /// Enter to perform on mount, carrying the appearing flag
    enter_on_mount: Option<bool>,
    mounted: bool,
}

impl Lifecycle {
    pub fn new(config: TransitionConfig, in_: bool) -> Self {
        let (status, enter_on_mount) = match (in_, config.appear) {
            (true, true) => (TransitionStatus::Exited, Some(true)),
            (true, false) => (TransitionStatus::Entered, None),
            (false, _) if config.mount_on_enter || config.unmount_on_exit => {
                (TransitionStatus::Unmounted, None)
            }
            (false, _) => (TransitionStatus::Exited, None),
        };
        Self {
            config,
            status,
            phase: None,
            stage: Stage::Done,
            target_in: in_,
            next_token: 0,
            pending: None,
            enter_on_mount,
            mounted: false,
        }
    }

    /// Element added to an already-live group or switch: enters on mount
    pub fn arrival(config: TransitionConfig) -> Self {
        Self {
            status: TransitionStatus::Exited,
            enter_on_mount: Some(false),
            target_in: true,
            ..Self::new(config, true)
        }
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn status(&self) -> TransitionStatus {
        self.status
    }

    pub fn target_in(&self) -> bool {
        self.target_in
    }

    pub fn state(&self) -> TransitionState {
        TransitionState {
            status: self.status,
            phase: self.phase,
            stage: self.stage,
        }
    }

    pub fn pending(&self) -> Option<(TransitionToken, PendingStep)> {
        self.pending.map(|p| (p.token, p.step))
    }

    /// Element is in the tree; runs the appear or arrival enter once
    pub fn mount(&mut self) -> Vec<Command> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        match self.enter_on_mount.take() {
            Some(appearing) if self.target_in => {
                let mut commands = Vec::new();
                self.begin_enter(appearing, &mut commands);
                commands
            }
            _ => Vec::new(),
        }
    }

    /// External flag changed
    pub fn set_in(&mut self, in_: bool) -> Vec<Command> {
        if in_ == self.target_in {
            return Vec::new();
        }
        self.target_in = in_;
        // Flag flipped before mount: the appear/arrival enter no longer applies
        self.enter_on_mount = None;

        let mut commands = Vec::new();
        if let Some(pending) = self.pending.take() {
            log::trace!("[transition] cancel {:?} while {}", pending.step, self.status);
            commands.push(Command::Cancel(pending.token));
        }
        if in_ {
            self.begin_enter(false, &mut commands);
        } else {
            self.begin_exit(&mut commands);
        }
        commands
    }

    /// Next scheduling tick arrived for `token`
    pub fn tick(&mut self, token: TransitionToken) -> Vec<Command> {
        if self.pending != Some(Pending { token, step: PendingStep::Tick }) {
            return Vec::new();
        }
        let Some(phase) = self.phase else {
            return Vec::new();
        };
        self.stage = Stage::Active;
        self.pending = Some(Pending { token, step: PendingStep::Completion });

        let hook = match phase {
            Phase::Appear => Hook::Entering { appearing: true },
            Phase::Enter => Hook::Entering { appearing: false },
            Phase::Exit => Hook::Exiting,
        };
        vec![
            Command::Notify(hook),
            Command::AwaitCompletion {
                token,
                timeout: self.config.completion_timer(phase),
            },
        ]
    }

    /// Completion timer or end event fired for `token`
    pub fn complete(&mut self, token: TransitionToken) -> Vec<Command> {
        if self.pending != Some(Pending { token, step: PendingStep::Completion }) {
            return Vec::new();
        }
        self.pending = None;
        let mut commands = Vec::new();
        match self.phase {
            Some(Phase::Exit) => self.finish_exit(&mut commands),
            Some(phase) => self.finish_enter(phase == Phase::Appear, &mut commands),
            None => {}
        }
        commands
    }

    /// External end event: completes whatever completion is pending
    pub fn complete_current(&mut self) -> Vec<Command> {
        match self.pending {
            Some(Pending { token, step: PendingStep::Completion }) => self.complete(token),
            _ => Vec::new(),
        }
    }

    fn issue_token(&mut self) -> TransitionToken {
        self.next_token += 1;
        TransitionToken(self.next_token)
    }

    fn set_status(&mut self, status: TransitionStatus) {
        if self.status != status {
            log::debug!("[transition] {} -> {}", self.status, status);
            self.status = status;
        }
    }

    fn begin_enter(&mut self, appearing: bool, commands: &mut Vec<Command>) {
        let phase = if appearing { Phase::Appear } else { Phase::Enter };
        self.phase = Some(phase);

        if !self.config.enter && !appearing {
            self.finish_enter(false, commands);
            return;
        }

        let token = self.issue_token();
        self.set_status(TransitionStatus::Entering);
        self.stage = Stage::Base;
        self.pending = Some(Pending { token, step: PendingStep::Tick });
        commands.push(Command::Notify(Hook::Enter { appearing }));
        commands.push(Command::ScheduleTick(token));
    }

    fn begin_exit(&mut self, commands: &mut Vec<Command>) {
        if matches!(self.status, TransitionStatus::Unmounted | TransitionStatus::Exited) {
            // Flipped off before the appear/arrival enter ran: settle without animating
            self.finish_exit(commands);
            if self.config.mount_on_enter {
                self.set_status(TransitionStatus::Unmounted);
            }
            return;
        }
        self.phase = Some(Phase::Exit);

        if !self.config.exit {
            self.finish_exit(commands);
            return;
        }

        let token = self.issue_token();
        self.set_status(TransitionStatus::Exiting);
        self.stage = Stage::Base;
        self.pending = Some(Pending { token, step: PendingStep::Tick });
        commands.push(Command::Notify(Hook::Exit));
        commands.push(Command::ScheduleTick(token));
    }

    fn finish_enter(&mut self, appearing: bool, commands: &mut Vec<Command>) {
        self.set_status(TransitionStatus::Entered);
        self.stage = Stage::Done;
        commands.push(Command::Notify(Hook::Entered { appearing }));
    }

    fn finish_exit(&mut self, commands: &mut Vec<Command>) {
        self.set_status(TransitionStatus::Exited);
        self.stage = Stage::Done;
        commands.push(Command::Notify(Hook::Exited));
        if self.config.unmount_on_exit {
            self.set_status(TransitionStatus::Unmounted);
            self.phase = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed() -> TransitionConfig {
        TransitionConfig::default().with_timeout(300)
    }

    fn hooks(commands: &[Command]) -> Vec<Hook> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Notify(h) => Some(*h),
                _ => None,
            })
            .collect()
    }

    /// Run pending steps until the lifecycle settles
    fn drain(lc: &mut Lifecycle) -> Vec<Command> {
        let mut all = Vec::new();
        while let Some((token, step)) = lc.pending() {
            let cmds = match step {
                PendingStep::Tick => lc.tick(token),
                PendingStep::Completion => lc.complete(token),
            };
            all.extend(cmds);
        }
        all
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(Lifecycle::new(timed(), true).status(), TransitionStatus::Entered);
        assert_eq!(Lifecycle::new(timed(), false).status(), TransitionStatus::Exited);
        assert_eq!(
            Lifecycle::new(timed().unmount_on_exit(), false).status(),
            TransitionStatus::Unmounted
        );
        assert_eq!(
            Lifecycle::new(timed().mount_on_enter(), false).status(),
            TransitionStatus::Unmounted
        );
        assert_eq!(Lifecycle::new(timed().appear(), true).status(), TransitionStatus::Exited);
    }

    #[test]
    fn test_full_enter_exit_cycle() {
        let mut lc = Lifecycle::new(timed(), false);
        assert!(lc.mount().is_empty());

        let cmds = lc.set_in(true);
        assert_eq!(hooks(&cmds), vec![Hook::Enter { appearing: false }]);
        assert_eq!(lc.status(), TransitionStatus::Entering);
        assert_eq!(lc.state().stage, Stage::Base);

        let (token, step) = lc.pending().unwrap();
        assert_eq!(step, PendingStep::Tick);
        let cmds = lc.tick(token);
        assert_eq!(lc.state().stage, Stage::Active);
        assert!(cmds.contains(&Command::AwaitCompletion {
            token,
            timeout: Some(Duration::from_millis(300)),
        }));

        let cmds = lc.complete(token);
        assert_eq!(hooks(&cmds), vec![Hook::Entered { appearing: false }]);
        assert_eq!(lc.status(), TransitionStatus::Entered);

        lc.set_in(false);
        assert_eq!(lc.status(), TransitionStatus::Exiting);
        let cmds = drain(&mut lc);
        assert_eq!(hooks(&cmds), vec![Hook::Exiting, Hook::Exited]);
        assert_eq!(lc.status(), TransitionStatus::Exited);
    }

    #[test]
    fn test_appear_on_mount() {
        let mut lc = Lifecycle::new(timed().appear(), true);
        let cmds = lc.mount();
        assert_eq!(hooks(&cmds), vec![Hook::Enter { appearing: true }]);
        assert_eq!(lc.state().phase, Some(Phase::Appear));
        drain(&mut lc);
        assert_eq!(lc.status(), TransitionStatus::Entered);

        // Only once
        assert!(lc.mount().is_empty());
    }

    #[test]
    fn test_arrival_enters_without_appearing() {
        let mut lc = Lifecycle::arrival(timed());
        assert_eq!(lc.status(), TransitionStatus::Exited);
        let cmds = lc.mount();
        assert_eq!(hooks(&cmds), vec![Hook::Enter { appearing: false }]);
        assert_eq!(lc.state().phase, Some(Phase::Enter));
    }

    #[test]
    fn test_unmount_on_exit() {
        let mut lc = Lifecycle::new(timed().unmount_on_exit(), true);
        lc.set_in(false);
        drain(&mut lc);
        assert_eq!(lc.status(), TransitionStatus::Unmounted);
        assert!(!lc.state().is_mounted());

        lc.set_in(true);
        assert_eq!(lc.status(), TransitionStatus::Entering);
        assert!(lc.state().is_mounted());
    }

    #[test]
    fn test_interrupt_cancels_pending_and_reverses() {
        let mut lc = Lifecycle::new(timed(), false);
        lc.set_in(true);
        let (first, _) = lc.pending().unwrap();
        let cmds = lc.tick(first);
        assert!(!cmds.is_empty());

        let cmds = lc.set_in(false);
        assert_eq!(cmds[0], Command::Cancel(first));
        assert_eq!(lc.status(), TransitionStatus::Exiting);

        // Stale completion from the cancelled enter is ignored
        assert!(lc.complete(first).is_empty());
        assert_eq!(lc.status(), TransitionStatus::Exiting);

        drain(&mut lc);
        assert_eq!(lc.status(), TransitionStatus::Exited);
    }

    #[test]
    fn test_same_flag_is_noop() {
        let mut lc = Lifecycle::new(timed(), true);
        assert!(lc.set_in(true).is_empty());
        lc.set_in(false);
        let pending = lc.pending();
        assert!(lc.set_in(false).is_empty());
        assert_eq!(lc.pending(), pending);
    }

    #[test]
    fn test_end_listener_waits_for_external_event() {
        let mut lc = Lifecycle::new(TransitionConfig::default().with_end_listener(), false);
        lc.set_in(true);
        let (token, _) = lc.pending().unwrap();
        let cmds = lc.tick(token);
        assert!(cmds.contains(&Command::AwaitCompletion { token, timeout: None }));

        let cmds = lc.complete_current();
        assert_eq!(hooks(&cmds), vec![Hook::Entered { appearing: false }]);
        assert!(lc.complete_current().is_empty());
    }

    #[test]
    fn test_end_event_before_tick_is_ignored() {
        let mut lc = Lifecycle::new(TransitionConfig::default().with_end_listener(), false);
        lc.set_in(true);
        assert!(lc.complete_current().is_empty());
        assert_eq!(lc.status(), TransitionStatus::Entering);
    }

    #[test]
    fn test_disabled_enter_and_exit_jump() {
        let mut lc = Lifecycle::new(timed().without_enter().without_exit(), false);
        let cmds = lc.set_in(true);
        assert_eq!(hooks(&cmds), vec![Hook::Entered { appearing: false }]);
        assert_eq!(lc.status(), TransitionStatus::Entered);
        assert!(lc.pending().is_none());

        let cmds = lc.set_in(false);
        assert_eq!(hooks(&cmds), vec![Hook::Exited]);
        assert_eq!(lc.status(), TransitionStatus::Exited);
    }

    #[test]
    fn test_flip_before_mount_drops_appear() {
        let mut lc = Lifecycle::new(timed().appear(), true);
        let cmds = lc.set_in(false);
        assert_eq!(hooks(&cmds), vec![Hook::Exited]);
        assert!(lc.mount().is_empty());
        assert_eq!(lc.status(), TransitionStatus::Exited);
        assert_eq!(lc.state().phase, None);
    }

    #[test]
    fn test_arrival_removed_before_mount_reports_exited() {
        let mut lc = Lifecycle::arrival(timed());
        let mut cmds = lc.set_in(false);
        cmds.extend(lc.mount());
        assert_eq!(hooks(&cmds), vec![Hook::Exited]);
        assert_eq!(lc.status(), TransitionStatus::Exited);
        assert!(lc.pending().is_none());
    }

    #[test]
    fn test_flip_before_mount_unmounts_when_configured() {
        let mut lc = Lifecycle::new(timed().appear().unmount_on_exit(), true);
        let mut cmds = lc.set_in(false);
        cmds.extend(lc.mount());
        assert_eq!(hooks(&cmds), vec![Hook::Exited]);
        assert_eq!(lc.status(), TransitionStatus::Unmounted);

        let mut lc = Lifecycle::new(timed().appear().mount_on_enter(), true);
        lc.set_in(false);
        assert_eq!(lc.status(), TransitionStatus::Unmounted);
    }
}
