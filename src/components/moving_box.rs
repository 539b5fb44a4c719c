//! Moving Box Component
//!
//! Box that slides right when `go` is set. Completion comes from the
//! element's `transitionend`, not a timer.

use leptos::prelude::*;
use leptos_transition::{Hook, Transition, TransitionConfig};

use crate::dialog;

#[component]
pub fn MovingBox(#[prop(into)] go: Signal<bool>) -> impl IntoView {
    let on_hook = move |hook: Hook| {
        let message = match hook {
            Hook::Enter { .. } => "The box is going to move to the right",
            Hook::Exit => "The box is going to move to the left",
            _ => return,
        };
        if let Err(e) = dialog::alert(message) {
            log::error!("[BOX] {}", e);
        }
    };

    view! {
        <Transition
            when=go
            config=TransitionConfig::default().with_end_listener()
            on_hook=on_hook
            let:t
        >
            <div
                class=move || format!("box box-{}", t.state().visual_status())
                on:transitionend=move |_| t.done()
            ></div>
        </Transition>
    }
}
