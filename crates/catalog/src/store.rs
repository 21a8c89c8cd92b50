//! Storage port for the catalog.
//!
//! The catalog validates and computes; the store only persists rows. Status
//! derivation never happens inside a storage implementation: stores return
//! materialized items and the catalog annotates them after retrieval.

use thiserror::Error;

use stockroom_core::ItemId;

use crate::item::StockItem;

/// Storage operation error.
///
/// These are **infrastructure errors** (backend failures, corrupt rows) as
/// opposed to domain errors (validation, invariants).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("corrupt stored row: {0}")]
    Corrupt(String),
}

/// Row store for stock-keeping units.
///
/// Implementations must:
/// - return items from `all` in ascending id order
/// - apply each mutation as a single logical write, so an interrupted
///   process leaves the store consistent
/// - never inspect or derive business state (quantity checks and status
///   labels belong to the catalog)
pub trait StockStore {
    /// All items, ordered by ascending id.
    fn all(&self) -> Result<Vec<StockItem>, StoreError>;

    /// One item by id, if present.
    fn get(&self, id: ItemId) -> Result<Option<StockItem>, StoreError>;

    /// Insert a new item. The id must not already be present.
    fn insert(&mut self, item: &StockItem) -> Result<(), StoreError>;

    /// Overwrite the quantity on hand of an existing item.
    fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Result<(), StoreError>;

    /// Highest assigned id, or 0 when the store is empty.
    fn max_id(&self) -> Result<i64, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.max_id()? == 0)
    }
}

impl<S> StockStore for Box<S>
where
    S: StockStore + ?Sized,
{
    fn all(&self) -> Result<Vec<StockItem>, StoreError> {
        (**self).all()
    }

    fn get(&self, id: ItemId) -> Result<Option<StockItem>, StoreError> {
        (**self).get(id)
    }

    fn insert(&mut self, item: &StockItem) -> Result<(), StoreError> {
        (**self).insert(item)
    }

    fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Result<(), StoreError> {
        (**self).set_quantity(id, quantity)
    }

    fn max_id(&self) -> Result<i64, StoreError> {
        (**self).max_id()
    }

    fn is_empty(&self) -> Result<bool, StoreError> {
        (**self).is_empty()
    }
}

/// In-memory row store.
///
/// The default backing for a session without a database file; also intended
/// for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Kept sorted by ascending id.
    items: Vec<StockItem>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: ItemId) -> Result<usize, usize> {
        self.items.binary_search_by_key(&id, |item| item.id)
    }
}

impl StockStore for MemoryStore {
    fn all(&self) -> Result<Vec<StockItem>, StoreError> {
        Ok(self.items.clone())
    }

    fn get(&self, id: ItemId) -> Result<Option<StockItem>, StoreError> {
        Ok(self.position(id).ok().map(|idx| self.items[idx].clone()))
    }

    fn insert(&mut self, item: &StockItem) -> Result<(), StoreError> {
        match self.position(item.id) {
            Ok(_) => Err(StoreError::Backend(format!(
                "duplicate item id {}",
                item.id
            ))),
            Err(idx) => {
                self.items.insert(idx, item.clone());
                Ok(())
            }
        }
    }

    fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Result<(), StoreError> {
        let idx = self
            .position(id)
            .map_err(|_| StoreError::Backend(format!("no row for item id {id}")))?;
        self.items[idx].quantity_on_hand = quantity;
        Ok(())
    }

    fn max_id(&self) -> Result<i64, StoreError> {
        Ok(self.items.last().map(|item| item.id.get()).unwrap_or(0))
    }
}
