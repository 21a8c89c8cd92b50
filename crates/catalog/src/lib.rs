//! `stockroom-catalog` — the inventory ledger.
//!
//! This crate owns the collection of stock-keeping units: identifier
//! assignment, quantity invariants, and status derivation. It is implemented
//! purely as deterministic domain logic over the [`StockStore`] port; it has
//! no notion of users or roles.

pub mod catalog;
pub mod item;
pub mod store;

pub use catalog::{Catalog, CatalogError};
pub use item::{NewItem, StatusLabel, StockItem, StockLine};
pub use store::{MemoryStore, StockStore, StoreError};
