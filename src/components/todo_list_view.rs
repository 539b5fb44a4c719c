//! To-do List Component
//!
//! Keyed list whose rows slide in when added and out when removed.

use leptos::prelude::*;
use leptos_transition::{TransitionConfig, TransitionGroup};

use crate::dialog;
use crate::todo::{TodoItem, TodoList};

const ITEM_MS: u64 = 500;

#[component]
pub fn TodoListView() -> impl IntoView {
    let list = RwSignal::new(TodoList::seeded());
    let items = Signal::derive(move || list.with(|l| l.items().to_vec()));

    let add_item = move |_| match dialog::prompt("Enter your task", "...task") {
        Ok(text) => {
            if let Some(id) = list.try_update(|l| l.add(text)).flatten() {
                log::info!("[TODO] added {}", id);
            }
        }
        Err(e) => log::error!("[TODO] {}", e),
    };

    view! {
        <div class="todo-list-container">
            <ul class="todo-list">
                <TransitionGroup
                    each=items
                    key=|item: &TodoItem| item.id
                    class_names="item"
                    config=TransitionConfig::default().with_timeout(ITEM_MS)
                    let:slot
                >
                    <li class=move || format!("item {}", slot.transition.class())>
                        <button on:click=move |_| {
                            list.update(|l| {
                                l.remove(slot.item.id);
                            });
                        }>"X"</button>
                        <span>{slot.item.text.clone()}</span>
                    </li>
                </TransitionGroup>
            </ul>
            <button on:click=add_item>"Add Item"</button>
        </div>
    }
}
