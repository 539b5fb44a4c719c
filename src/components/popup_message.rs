//! Popup Message Component
//!
//! Alert box that hides its opener while shown and brings it back shortly
//! after the box has left.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_transition::{CssTransition, Hook, TransitionConfig};

/// Delay before the "Show Message" button comes back
const BUTTON_RETURN_MS: u32 = 200;

#[component]
pub fn PopupMessage() -> impl IntoView {
    let (show_message, set_show_message) = signal(false);
    let (show_button, set_show_button) = signal(true);

    let toggle = move |_| set_show_message.update(|v| *v = !*v);

    let on_hook = move |hook: Hook| match hook {
        Hook::Enter { .. } => set_show_button.set(false),
        Hook::Exited => {
            Timeout::new(BUTTON_RETURN_MS, move || set_show_button.set(true)).forget();
        }
        _ => {}
    };

    view! {
        <div class="popup-msg">
            <Show when=move || show_button.get()>
                <button on:click=toggle>"Show Message"</button>
            </Show>
            <CssTransition
                when=show_message
                class_names="message-container"
                config=TransitionConfig::default().with_timeout(300).unmount_on_exit()
                on_hook=on_hook
                let:t
            >
                <div class=move || format!("message {}", t.class())>
                    <p>"Animated alert message"</p>
                    <p>"This alert message is being transitioned in and out of the DOM."</p>
                    <button on:click=toggle>"Close"</button>
                </div>
            </CssTransition>
        </div>
    }
}
