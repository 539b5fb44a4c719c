//! Moving Box (CSS) Component
//!
//! Same slide as `MovingBox`, driven by `msg-*` classes and a 2s timer.

use leptos::prelude::*;
use leptos_transition::{
    ClassNames, CssTransition, Hook, Phase, Stage, TransitionConfig, TransitionState,
    TransitionStatus,
};

const MSG_PREFIX: &str = "msg";

#[component]
pub fn MovingBoxCss() -> impl IntoView {
    let (go, set_go) = signal(false);

    let on_hook = move |hook: Hook| match hook {
        Hook::Entering { appearing } => {
            let entering = TransitionState {
                status: TransitionStatus::Entering,
                phase: Some(if appearing { Phase::Appear } else { Phase::Enter }),
                stage: Stage::Active,
            };
            log::info!("[MSG] classes: {}", ClassNames::from(MSG_PREFIX).resolve(&entering));
        }
        Hook::Entered { .. } => log::info!("[MSG] entered"),
        _ => {}
    };

    view! {
        <div>
            <CssTransition
                when=go
                class_names=MSG_PREFIX
                config=TransitionConfig::default().with_timeout(2000)
                on_hook=on_hook
                let:t
            >
                <div class=move || format!("{} {}", MSG_PREFIX, t.class())></div>
            </CssTransition>
            <button on:click=move |_| set_go.update(|v| *v = !*v)>
                {move || if go.get() { "Left" } else { "Right" }}
            </button>
        </div>
    }
}
