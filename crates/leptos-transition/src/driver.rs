//! Leptos Driver
//!
//! Runs a [`Lifecycle`] on the browser event loop: ticks on animation frames,
//! completion on `gloo_timers` timeouts or the element's end event.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::class_names::ClassNames;
use crate::config::TransitionConfig;
use crate::lifecycle::{Command, Lifecycle, TransitionToken};
use crate::status::{Hook, TransitionState, TransitionStatus};

/// Reactive handle to one running lifecycle
#[derive(Clone, Copy)]
pub struct TransitionHandle {
    machine: StoredValue<Lifecycle>,
    state: RwSignal<TransitionState>,
    class_names: StoredValue<ClassNames>,
    on_hook: Option<Callback<Hook>>,
    /// Armed completion timer; dropping it clears the timeout
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

/// Lifecycle operation requested by the flag effect, a frame, a timer or the end event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// First effect run, after the element is in the tree
    Mount(bool),
    Flag(bool),
    Tick(TransitionToken),
    Complete(TransitionToken),
    Done,
}

impl TransitionHandle {
    fn new(lifecycle: Lifecycle, class_names: ClassNames, on_hook: Option<Callback<Hook>>) -> Self {
        Self {
            state: RwSignal::new(lifecycle.state()),
            machine: StoredValue::new(lifecycle),
            class_names: StoredValue::new(class_names),
            on_hook,
            timer: StoredValue::new_local(None),
        }
    }

    pub fn state(&self) -> TransitionState {
        self.state.get()
    }

    pub fn status(&self) -> TransitionStatus {
        self.state.with(|s| s.status)
    }

    pub fn is_mounted(&self) -> bool {
        self.state.with(|s| s.is_mounted())
    }

    /// Class list for the current phase and stage
    pub fn class(&self) -> String {
        let state = self.state.get();
        self.class_names
            .try_with_value(|names| names.resolve(&state))
            .unwrap_or_default()
    }

    /// The element finished its visual transition (e.g. on `transitionend`)
    pub fn done(&self) {
        self.run(Step::Done);
    }

    fn run(&self, step: Step) {
        // Owner disposed: late ticks and timers land here
        let Some(commands) = self.machine.try_update_value(|m| match step {
            Step::Mount(in_) => {
                let mut commands = m.set_in(in_);
                commands.extend(m.mount());
                commands
            }
            Step::Flag(in_) => m.set_in(in_),
            Step::Tick(token) => m.tick(token),
            Step::Complete(token) => m.complete(token),
            Step::Done => m.complete_current(),
        }) else {
            return;
        };

        for command in commands {
            match command {
                Command::Notify(hook) => {
                    if let Some(on_hook) = self.on_hook {
                        on_hook.run(hook);
                    }
                }
                Command::ScheduleTick(token) => {
                    let handle = *self;
                    after_paint(move || handle.run(Step::Tick(token)));
                }
                Command::AwaitCompletion { token, timeout: Some(timeout) } => {
                    let handle = *self;
                    let timer = start_timer(timeout, move || handle.run(Step::Complete(token)));
                    // Replacing a fired timer is a no-op clear
                    self.timer.try_set_value(timer);
                }
                // Completed through `done()`
                Command::AwaitCompletion { timeout: None, .. } => {}
                Command::Cancel(_) => {
                    self.timer.try_update_value(|timer| timer.take());
                }
            }
        }

        if let Some(state) = self.machine.try_with_value(|m| m.state()) {
            self.state.try_set(state);
        }
    }
}

/// Runs `f` two frames from now, so the base stage is painted before the active one
#[cfg(target_arch = "wasm32")]
fn after_paint(f: impl FnOnce() + 'static) {
    request_animation_frame(move || request_animation_frame(f));
}

/// No frames outside the browser; ticks are delivered by hand
#[cfg(not(target_arch = "wasm32"))]
fn after_paint(_f: impl FnOnce() + 'static) {}

#[cfg(target_arch = "wasm32")]
fn start_timer(timeout: Duration, f: impl FnOnce() + 'static) -> Option<Timeout> {
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    Some(Timeout::new(millis, f))
}

#[cfg(not(target_arch = "wasm32"))]
fn start_timer(_timeout: Duration, _f: impl FnOnce() + 'static) -> Option<Timeout> {
    None
}

/// Lifecycle driven by `when`, created from its current value
pub fn use_transition(
    when: Signal<bool>,
    config: TransitionConfig,
    class_names: ClassNames,
    on_hook: Option<Callback<Hook>>,
) -> TransitionHandle {
    let lifecycle = Lifecycle::new(config, when.get_untracked());
    use_transition_with(lifecycle, when, class_names, on_hook)
}

/// Lifecycle driven by `when`, starting from an explicit machine
pub fn use_transition_with(
    lifecycle: Lifecycle,
    when: Signal<bool>,
    class_names: ClassNames,
    on_hook: Option<Callback<Hook>>,
) -> TransitionHandle {
    let handle = TransitionHandle::new(lifecycle, class_names, on_hook);

    // First run happens after the element is in the tree
    Effect::new(move |prev: Option<bool>| {
        let in_ = when.get();
        handle.run(if prev.is_none() { Step::Mount(in_) } else { Step::Flag(in_) });
        in_
    });

    handle
}
