//! Fade Component
//!
//! Text that fades in on mount and out of the tree when hidden.

use leptos::prelude::*;
use leptos_transition::{Transition, TransitionConfig, TransitionState, TransitionStatus};

const FADE_MS: u64 = 300;

/// Inline style for a fade snapshot
pub fn fade_style(state: TransitionState) -> String {
    let look = match state.visual_status() {
        TransitionStatus::Entering => "opacity: 0.5; color: blue;",
        TransitionStatus::Entered => "opacity: 1; color: red;",
        TransitionStatus::Exiting => "opacity: 0.5; color: black;",
        TransitionStatus::Exited | TransitionStatus::Unmounted => "opacity: 0;",
    };
    format!("transition: opacity {}ms ease-in-out; {}", FADE_MS, look)
}

#[component]
pub fn Fade(#[prop(into)] show: Signal<bool>) -> impl IntoView {
    let config = TransitionConfig::default()
        .with_timeout(FADE_MS)
        .appear()
        .unmount_on_exit();

    view! {
        <Transition when=show config=config let:t>
            <div style=move || fade_style(t.state())>"I'm a fade Transition!"</div>
        </Transition>
    }
}
