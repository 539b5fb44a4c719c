//! Keyed Transition Group
//!
//! Arena of rendered entries keyed by a stable key. Reconciling against the
//! authoritative list keeps removed entries around (leaving) until their exit
//! lifecycle reports exited, so they can animate out in place.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupEntry<K, T> {
    pub key: K,
    pub item: T,
    /// External flag for this entry's lifecycle; false while leaving
    pub in_: bool,
    /// Added after the group was created, so it enters on mount
    pub arrival: bool,
}

#[derive(Debug, Clone)]
pub struct TransitionGroupState<K, T> {
    entries: Vec<GroupEntry<K, T>>,
}

impl<K, T> TransitionGroupState<K, T>
where
    K: Clone + Eq + Hash,
    T: Clone,
{
    /// Initial items are shown without animating
    pub fn new(items: Vec<T>, key_fn: impl Fn(&T) -> K) -> Self {
        let entries = items
            .into_iter()
            .map(|item| GroupEntry { key: key_fn(&item), item, in_: true, arrival: false })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[GroupEntry<K, T>] {
        &self.entries
    }

    pub fn is_in(&self, key: &K) -> bool {
        self.entries.iter().any(|e| &e.key == key && e.in_)
    }

    /// Entries still present in the authoritative list
    pub fn visible_len(&self) -> usize {
        self.entries.iter().filter(|e| e.in_).count()
    }

    /// Merge the authoritative list into the arena.
    ///
    /// Leaving entries keep their place right before the surviving entry that
    /// followed them; trailing leaving entries stay at the end.
    pub fn reconcile(&mut self, items: Vec<T>, key_fn: impl Fn(&T) -> K) {
        let next_keys: HashSet<K> = items.iter().map(&key_fn).collect();
        let mut previous: HashMap<K, GroupEntry<K, T>> = HashMap::new();
        let mut leaving_before: HashMap<K, Vec<GroupEntry<K, T>>> = HashMap::new();
        let mut run = Vec::new();

        for mut entry in self.entries.drain(..) {
            if next_keys.contains(&entry.key) {
                if !run.is_empty() {
                    leaving_before.insert(entry.key.clone(), std::mem::take(&mut run));
                }
                previous.insert(entry.key.clone(), entry);
            } else {
                if entry.in_ {
                    log::debug!("[group] entry leaving");
                }
                entry.in_ = false;
                run.push(entry);
            }
        }

        let mut merged = Vec::with_capacity(items.len() + run.len());
        for item in items {
            let key = key_fn(&item);
            if let Some(before) = leaving_before.remove(&key) {
                merged.extend(before);
            }
            let entry = match previous.remove(&key) {
                Some(prev) => GroupEntry { key, item, in_: true, arrival: prev.arrival },
                None => {
                    log::debug!("[group] entry arriving");
                    GroupEntry { key, item, in_: true, arrival: true }
                }
            };
            merged.push(entry);
        }
        merged.extend(run);
        self.entries = merged;
    }

    /// Exit lifecycle of `key` finished; drops it if it is still leaving
    pub fn on_exited(&mut self, key: &K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.key != key || e.in_);
        self.entries.len() != before
    }
}
