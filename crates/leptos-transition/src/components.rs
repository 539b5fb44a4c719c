//! Transition Components
//!
//! Children receive a [`TransitionHandle`] (or a slot carrying one) via `let:`.

use std::hash::Hash;
use std::sync::Arc;

use leptos::prelude::*;

use crate::class_names::ClassNames;
use crate::config::TransitionConfig;
use crate::driver::{use_transition, use_transition_with, TransitionHandle};
use crate::group::{GroupEntry, TransitionGroupState};
use crate::lifecycle::Lifecycle;
use crate::status::Hook;
use crate::switch::{SwitchEntry, SwitchMode, SwitchState};

/// Child of a [`SwitchTransition`]
#[derive(Clone)]
pub struct SwitchSlot<K> {
    pub key: K,
    pub transition: TransitionHandle,
}

/// Child of a [`TransitionGroup`]
#[derive(Clone)]
pub struct GroupSlot<T> {
    pub item: T,
    pub transition: TransitionHandle,
}

/// Renders children only while the lifecycle is mounted
fn render_mounted<F, IV>(handle: TransitionHandle, children: F) -> impl IntoView
where
    F: Fn(TransitionHandle) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let mounted = Memo::new(move |_| handle.is_mounted());
    move || mounted.get().then(|| children(handle))
}

fn lifecycle_for(config: TransitionConfig, arrival: bool) -> Lifecycle {
    if arrival {
        Lifecycle::arrival(config)
    } else {
        Lifecycle::new(config, true)
    }
}

/// Enter/exit lifecycle driven by `when`; children style themselves by status
#[component]
pub fn Transition<F, IV>(
    #[prop(into)] when: Signal<bool>,
    #[prop(optional)] config: TransitionConfig,
    #[prop(optional, into)] on_hook: Option<Callback<Hook>>,
    children: F,
) -> impl IntoView
where
    F: Fn(TransitionHandle) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let handle = use_transition(when, config, ClassNames::default(), on_hook);
    render_mounted(handle, children)
}

/// Lifecycle exposing phase/stage class names through `TransitionHandle::class`
#[component]
pub fn CssTransition<F, IV>(
    #[prop(into)] when: Signal<bool>,
    #[prop(into)] class_names: ClassNames,
    #[prop(optional)] config: TransitionConfig,
    #[prop(optional, into)] on_hook: Option<Callback<Hook>>,
    children: F,
) -> impl IntoView
where
    F: Fn(TransitionHandle) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let handle = use_transition(when, config, class_names, on_hook);
    render_mounted(handle, children)
}

/// Swaps between children identified by `key`, ordered by `mode`
#[component]
pub fn SwitchTransition<K, F, IV>(
    key: Signal<K>,
    #[prop(into)] mode: Signal<SwitchMode>,
    #[prop(optional)] config: TransitionConfig,
    #[prop(optional, into)] class_names: ClassNames,
    children: F,
) -> impl IntoView
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    F: Fn(SwitchSlot<K>) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let state = RwSignal::new(SwitchState::new(mode.get_untracked(), key.get_untracked()));
    Effect::new(move |_| {
        let next = key.get();
        state.update(|s| s.set_key(next));
    });
    Effect::new(move |_| {
        let next = mode.get();
        state.update(|s| s.set_mode(next));
    });

    let children = Arc::new(children);
    let class_names = StoredValue::new(class_names);

    view! {
        <For
            each=move || state.with(|s| s.entries().to_vec())
            key=|entry| entry.key.clone()
            children={move |entry: SwitchEntry<K>| {
                let in_key = entry.key.clone();
                let when = Signal::derive(move || state.with(|s| s.is_in(&in_key)));
                let hook_key = entry.key.clone();
                let on_hook = Callback::new(move |hook: Hook| match hook {
                    Hook::Entered { .. } => state.update(|s| s.on_entered(&hook_key)),
                    Hook::Exited => state.update(|s| s.on_exited(&hook_key)),
                    _ => {}
                });
                let handle = use_transition_with(
                    lifecycle_for(config, entry.arrival),
                    when,
                    class_names.get_value(),
                    Some(on_hook),
                );
                let children = children.clone();
                let key = entry.key;
                render_mounted(handle, move |transition| {
                    children(SwitchSlot { key: key.clone(), transition })
                })
            }}
        />
    }
}

/// Keyed list whose entries animate in when added and out when removed
#[component]
pub fn TransitionGroup<T, K, KF, F, IV>(
    #[prop(into)] each: Signal<Vec<T>>,
    key: KF,
    #[prop(optional)] config: TransitionConfig,
    #[prop(optional, into)] class_names: ClassNames,
    children: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    K: Clone + Eq + Hash + Send + Sync + 'static,
    KF: Fn(&T) -> K + Clone + Send + Sync + 'static,
    F: Fn(GroupSlot<T>) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let state = RwSignal::new(TransitionGroupState::new(each.get_untracked(), key.clone()));
    let reconcile_key = key.clone();
    Effect::new(move |prev: Option<()>| {
        let items = each.get();
        if prev.is_some() {
            state.update(|s| s.reconcile(items, &reconcile_key));
        }
    });

    let children = Arc::new(children);
    let class_names = StoredValue::new(class_names);

    view! {
        <For
            each=move || state.with(|s| s.entries().to_vec())
            key=|entry| entry.key.clone()
            children={move |entry: GroupEntry<K, T>| {
                let in_key = entry.key.clone();
                let when = Signal::derive(move || state.with(|s| s.is_in(&in_key)));
                let hook_key = entry.key.clone();
                let on_hook = Callback::new(move |hook: Hook| {
                    if hook == Hook::Exited {
                        state.update(|s| {
                            s.on_exited(&hook_key);
                        });
                    }
                });
                let handle = use_transition_with(
                    lifecycle_for(config, entry.arrival),
                    when,
                    class_names.get_value(),
                    Some(on_hook),
                );
                let children = children.clone();
                let item = entry.item;
                render_mounted(handle, move |transition| {
                    children(GroupSlot { item: item.clone(), transition })
                })
            }}
        />
    }
}
