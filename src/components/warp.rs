//! Warp Component
//!
//! CSS transition with a hand-written class name for every phase and stage.

use leptos::prelude::*;
use leptos_transition::{ClassNameMap, CssTransition, TransitionConfig};

fn warp_class_names() -> ClassNameMap {
    ClassNameMap {
        appear: "warp".into(),
        appear_active: "warp-active-appear".into(),
        appear_done: "warp-done-appear".into(),
        enter: "warp-enter".into(),
        enter_active: "warp-active-enter".into(),
        enter_done: "warp-done-enter".into(),
        exit: "warp-exit".into(),
        exit_active: "warp-active-exit".into(),
        exit_done: "warp-done-exit".into(),
    }
}

#[component]
pub fn Warp() -> impl IntoView {
    let (hide, set_hide) = signal(false);

    view! {
        <CssTransition
            when=Signal::derive(move || !hide.get())
            class_names=warp_class_names()
            config=TransitionConfig::default().with_timeout(200).unmount_on_exit()
            let:t
        >
            <div class=move || t.class()>"warp"</div>
        </CssTransition>
        <button style="margin: 2px;" on:click=move |_| set_hide.update(|h| *h = !*h)>
            {move || if hide.get() { "Show" } else { "Hide" }}
        </button>
    }
}
