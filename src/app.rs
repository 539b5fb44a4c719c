//! Transition Demo App
//!
//! Root view: one section per transition primitive.

use leptos::prelude::*;

use crate::components::{
    Fade, MovingBox, MovingBoxCss, PopupMessage, SwitchExample, SwitchModeExample, TodoListView,
    Warp,
};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (show, set_show) = signal(true);
    let (go_move, set_go_move) = signal(false);

    view! {
        <div>
            <h1>"Transition"</h1>
            <Fade show=show />
            <button on:click=move |_| set_show.update(|v| *v = !*v)>
                {move || if show.get() { "Hide" } else { "Show" }}
            </button>
            <MovingBox go=go_move />
            <button on:click=move |_| set_go_move.update(|v| *v = !*v)>
                {move || if go_move.get() { "Left" } else { "Right" }}
            </button>

            <h1>"CSSTransition"</h1>
            <Warp />
            <MovingBoxCss />
            <PopupMessage />

            <h1>"SwitchTransition"</h1>
            <SwitchExample />
            <SwitchModeExample />

            <h1>"TransitionGroup"</h1>
            <TodoListView />
        </div>
    }
}
