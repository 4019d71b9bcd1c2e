use crate::domain::model::{Item, ItemDetails, ItemId};
use crate::domain::scenario::InventorySummary;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CATALOG: AtomicU64 = AtomicU64::new(1);

/// The owning collection of every item, in insertion order.
#[derive(Debug)]
pub struct Catalog {
    token: u64,
    items: Vec<Item>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            token: NEXT_CATALOG.fetch_add(1, Ordering::Relaxed),
            items: Vec::new(),
        }
    }

    /// Adds an item. Duplicate titles are allowed and kept apart by id.
    pub fn add_item(&mut self, details: ItemDetails) -> ItemId {
        let id = ItemId::new(self.token, self.items.len());
        tracing::debug!("Cataloged {} as {}", details.title, id);
        self.items.push(Item::new(id, details));
        id
    }

    /// Looks up an item by id. Ids issued by another catalog yield `None`.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        if id.catalog() != self.token {
            return None;
        }
        self.items.get(id.index())
    }

    /// Case-insensitive exact title match. The first item added wins.
    pub fn find_item(&self, title: &str) -> Option<&Item> {
        let wanted = title.to_lowercase();
        self.items
            .iter()
            .find(|item| item.title().to_lowercase() == wanted)
    }

    pub fn list_available(&self) -> Vec<&Item> {
        self.items.iter().filter(|item| item.is_available()).collect()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> InventorySummary {
        let available = self.list_available().len();
        InventorySummary {
            total: self.items.len(),
            available,
            on_loan: self.items.len() - available,
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Catalog with {} items", self.items.len())
    }
}
