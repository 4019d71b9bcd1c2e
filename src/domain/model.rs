use crate::utils::error::LoanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identity of an item: the issuing catalog plus the insertion index there.
///
/// Ids from different catalogs never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId {
    catalog: u64,
    index: usize,
}

impl ItemId {
    pub(crate) fn new(catalog: u64, index: usize) -> Self {
        Self { catalog, index }
    }

    pub fn catalog(self) -> u64 {
        self.catalog
    }

    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.catalog, self.index)
    }
}

/// Descriptive fields of an item. Immutable once the item is cataloged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub title: String,
    pub creator: String,
    pub year: i32,
}

impl ItemDetails {
    pub fn new(title: impl Into<String>, creator: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            creator: creator.into(),
            year,
        }
    }
}

/// A lendable unit. Only a [`Catalog`](crate::core::catalog::Catalog) creates items.
#[derive(Debug)]
pub struct Item {
    id: ItemId,
    details: ItemDetails,
    available: AtomicBool,
}

impl Item {
    pub(crate) fn new(id: ItemId, details: ItemDetails) -> Self {
        Self {
            id,
            details,
            available: AtomicBool::new(true),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }

    pub fn title(&self) -> &str {
        &self.details.title
    }

    pub fn creator(&self) -> &str {
        &self.details.creator
    }

    pub fn year(&self) -> i32 {
        self.details.year
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::Acquire)
    }

    /// Marks the item as on loan if it is currently available.
    ///
    /// The test and the flip happen as a single atomic operation, so of any
    /// number of concurrent callers at most one succeeds.
    pub fn checkout(&self) -> Result<(), LoanError> {
        self.available
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
            .map_err(|_| LoanError::CheckoutUnavailable {
                title: self.details.title.clone(),
            })
    }

    /// Marks the item as available. Calling this on an available item is a no-op.
    pub fn return_item(&self) {
        self.available.store(true, Ordering::Release);
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_available() { "Available" } else { "On loan" };
        write!(
            f,
            "'{}' by {} ({}) - {}",
            self.details.title, self.details.creator, self.details.year, status
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Borrower {
    name: String,
    held: Vec<ItemId>,
}

impl Borrower {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            held: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items currently on loan to this borrower, in checkout order.
    pub fn held_items(&self) -> &[ItemId] {
        &self.held
    }

    pub fn holds(&self, id: ItemId) -> bool {
        self.held.contains(&id)
    }

    pub fn checkout_item(&mut self, item: &Item) -> Result<(), LoanError> {
        item.checkout()?;
        self.held.push(item.id());
        Ok(())
    }

    /// Returns an item this borrower holds.
    ///
    /// Fails without touching the item or the held list when the item is
    /// not on loan to this borrower.
    pub fn return_item(&mut self, item: &Item) -> Result<(), LoanError> {
        let Some(pos) = self.held.iter().position(|id| *id == item.id()) else {
            return Err(LoanError::ReturnNotHeld {
                borrower: self.name.clone(),
                title: item.title().to_string(),
            });
        };

        item.return_item();
        self.held.remove(pos);
        Ok(())
    }
}

impl fmt::Display for Borrower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Borrower: {}, items on loan: {}", self.name, self.held.len())
    }
}
