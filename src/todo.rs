//! To-do List Model
//!
//! Ordered items with stable random ids, used as transition group keys.

use uuid::Uuid;

/// Tasks the list starts with
pub const SEED_TASKS: &[&str] = &["Buy eggs", "Pay bills", "Invite friends over", "Fix the TV"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
}

impl TodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn seeded() -> Self {
        Self {
            items: SEED_TASKS.iter().map(|text| TodoItem::new(*text)).collect(),
        }
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    /// Append a task; cancelled or empty input adds nothing
    pub fn add(&mut self, text: Option<String>) -> Option<Uuid> {
        let text = text.filter(|t| !t.is_empty())?;
        let item = TodoItem::new(text);
        let id = item.id;
        self.items.push(item);
        Some(id)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded() {
        let list = TodoList::seeded();
        let texts: Vec<&str> = list.items().iter().map(|i| i.text.as_str()).collect();
        assert_eq!(texts, SEED_TASKS);
    }

    #[test]
    fn test_add_ignores_cancel_and_empty() {
        let mut list = TodoList::seeded();
        assert_eq!(list.add(None), None);
        assert_eq!(list.add(Some(String::new())), None);
        assert_eq!(list.items().len(), SEED_TASKS.len());
    }

    #[test]
    fn test_add_keeps_whitespace_text() {
        let mut list = TodoList::default();
        assert!(list.add(Some("  ".to_string())).is_some());
        assert_eq!(list.items()[0].text, "  ");
    }

    #[test]
    fn test_remove() {
        let mut list = TodoList::seeded();
        let id = list.items()[1].id;
        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert_eq!(list.items().len(), SEED_TASKS.len() - 1);
        assert!(list.items().iter().all(|i| i.text != "Pay bills"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// Non-empty text adds exactly one item with an id not seen before
        #[test]
        fn add_grows_by_one_with_fresh_id(text in ".{1,20}") {
            let mut list = TodoList::seeded();
            let before: HashSet<Uuid> = list.items().iter().map(|i| i.id).collect();

            let id = list.add(Some(text));
            prop_assert!(id.is_some());
            prop_assert_eq!(list.items().len(), before.len() + 1);
            prop_assert!(!before.contains(&id.unwrap()));
        }

        /// Removing one item leaves every other id untouched
        #[test]
        fn remove_drops_exactly_one(index in 0usize..4) {
            let mut list = TodoList::seeded();
            let ids: Vec<Uuid> = list.items().iter().map(|i| i.id).collect();

            prop_assert!(list.remove(ids[index]));
            let remaining: Vec<Uuid> = list.items().iter().map(|i| i.id).collect();
            let expected: Vec<Uuid> = ids.iter().copied().filter(|id| *id != ids[index]).collect();
            prop_assert_eq!(remaining, expected);
        }
    }
}
