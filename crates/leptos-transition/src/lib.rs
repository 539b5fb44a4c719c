//! Leptos Transition Utilities
//!
//! Enter/exit lifecycle for elements driven by a boolean flag, with CSS class
//! transitions, two-child switches and keyed list groups on top.
//! The state machines are plain Rust; only `driver` and `components` touch Leptos.

mod class_names;
mod components;
mod config;
mod driver;
mod error;
mod group;
mod lifecycle;
mod status;
mod switch;

pub use class_names::{ClassNameMap, ClassNames};
pub use components::{CssTransition, GroupSlot, SwitchSlot, SwitchTransition, Transition, TransitionGroup};
pub use config::{Timeouts, TransitionConfig};
pub use driver::{use_transition, use_transition_with, TransitionHandle};
pub use error::TransitionError;
pub use group::{GroupEntry, TransitionGroupState};
pub use lifecycle::{Command, Lifecycle, PendingStep, TransitionToken};
pub use status::{Hook, Phase, Stage, TransitionState, TransitionStatus};
pub use switch::{SwitchEntry, SwitchMode, SwitchPhase, SwitchState};
