//! Switch Transition Examples
//!
//! A button whose label swaps with a fade, plus a variant with a mode picker.

use leptos::prelude::*;
use leptos_transition::{SwitchMode, SwitchTransition, TransitionConfig};

const HELLO: &str = "Hello, world!";
const GOODBYE: &str = "Goodbye, world!";

pub fn switch_label(on: bool) -> &'static str {
    if on {
        GOODBYE
    } else {
        HELLO
    }
}

/// Label of the mode example, keyed the other way round
pub fn mode_label(key: bool) -> &'static str {
    switch_label(!key)
}

/// Out-in switch keyed by the label itself
#[component]
pub fn SwitchExample() -> impl IntoView {
    let (on, set_on) = signal(false);

    view! {
        <SwitchTransition
            key=Signal::derive(move || switch_label(on.get()))
            mode=SwitchMode::OutIn
            class_names="fade"
            config=TransitionConfig::default().with_end_listener()
            let:slot
        >
            <button
                class=move || slot.transition.class()
                on:click=move |_| set_on.update(|v| *v = !*v)
                on:transitionend=move |_| slot.transition.done()
            >
                {slot.key}
            </button>
        </SwitchTransition>
    }
}

/// Switch keyed by a boolean, with a radio pair for the mode
#[component]
pub fn SwitchModeExample() -> impl IntoView {
    let (mode, set_mode) = signal(SwitchMode::OutIn);
    let (on, set_on) = signal(true);

    let on_mode_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<SwitchMode>() {
            Ok(next) => set_mode.set(next),
            Err(e) => log::warn!("[SWITCH] {}", e),
        }
    };

    view! {
        <div class="mode-example">
            <div class="label">"Mode: "</div>
            <div class="modes">
                <form>
                    {SwitchMode::ALL
                        .iter()
                        .map(|m| {
                            let m = *m;
                            view! {
                                <input
                                    type="radio"
                                    name="mode"
                                    value=m.as_str()
                                    prop:checked=move || mode.get() == m
                                    on:change=on_mode_change
                                />
                                <label>{m.as_str()}</label>
                            }
                        })
                        .collect_view()}
                </form>
            </div>
            <div class="main">
                <SwitchTransition
                    key=Signal::derive(move || on.get())
                    mode=mode
                    class_names="example-btn"
                    config=TransitionConfig::default().with_end_listener()
                    let:slot
                >
                    <button
                        class=move || slot.transition.class()
                        on:click=move |_| set_on.update(|v| *v = !*v)
                        on:transitionend=move |_| slot.transition.done()
                    >
                        {mode_label(slot.key)}
                    </button>
                </SwitchTransition>
            </div>
        </div>
    }
}
