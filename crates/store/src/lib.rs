//! `stockroom-store` — persistent storage for the catalog.
//!
//! Implements the catalog's [`stockroom_catalog::StockStore`] port over
//! SQLite. One connection, synchronous, exclusively owned by the session.

pub mod sqlite;

pub use sqlite::SqliteStore;
