use super::item::{Item, ItemId};

/// Ordered items plus the id counter that names them.
///
/// The counter starts at 0, advances once per accepted item and is never
/// rewound, not even by [`TodoList::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<Item>,
    next_id: u64,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unchecked item.
    ///
    /// Returns `None` without touching the list when `content` is empty or
    /// only whitespace. Accepted content is stored as given.
    pub fn add(&mut self, content: &str) -> Option<ItemId> {
        if content.trim().is_empty() {
            return None;
        }

        let id = ItemId::new(self.next_id);
        self.next_id += 1;
        self.items.push(Item::new(id, content));
        Some(id)
    }

    /// Flip `checked` on the item with `id`. Returns false if there is none.
    pub fn toggle_one(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_checked(!item.checked());
                true
            }
            None => false,
        }
    }

    /// Set every item's `checked` to `checked`.
    pub fn toggle_all(&mut self, checked: bool) {
        for item in &mut self.items {
            item.set_checked(checked);
        }
    }

    /// Drop every item. The id counter keeps running.
    pub fn clear(&mut self) {
        self.items = Vec::new();
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next accepted item will get.
    pub fn peek_next_id(&self) -> ItemId {
        ItemId::new(self.next_id)
    }
}
