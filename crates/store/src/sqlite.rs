//! SQLite-backed row store.
//!
//! One table keyed by item id. Every statement is parameterized (values
//! never appear in query text) and every mutation is a single statement,
//! so an interrupted process leaves the file consistent. Stored rows are
//! untrusted: decoding fails closed on values that violate the domain
//! constraints.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension, Row};

use stockroom_catalog::{StockItem, StockStore, StoreError};
use stockroom_core::ItemId;

/// SQLite-backed implementation of the catalog's [`StockStore`] port.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Open (creating if absent) a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let connection = Connection::open(path).map_err(backend)?;
        tracing::debug!(path = %path.display(), "opened sqlite stock store");
        Self::with_connection(connection)
    }

    /// Open a store that lives only as long as the connection.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let connection = Connection::open_in_memory().map_err(backend)?;
        Self::with_connection(connection)
    }

    fn with_connection(connection: Connection) -> Result<Self, StoreError> {
        connection
            .execute(
                "CREATE TABLE IF NOT EXISTS stock_items (
                    id                INTEGER PRIMARY KEY,
                    name              TEXT    NOT NULL,
                    quantity_on_hand  INTEGER NOT NULL,
                    reorder_threshold INTEGER NOT NULL,
                    unit_price_cents  INTEGER NOT NULL
                )",
                [],
            )
            .map_err(backend)?;
        Ok(Self { connection })
    }
}

impl StockStore for SqliteStore {
    fn all(&self) -> Result<Vec<StockItem>, StoreError> {
        let mut statement = self
            .connection
            .prepare(
                "SELECT id, name, quantity_on_hand, reorder_threshold, unit_price_cents
                 FROM stock_items ORDER BY id ASC",
            )
            .map_err(backend)?;

        let rows = statement
            .query_map([], decode_row)
            .map_err(backend)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(backend)?;

        rows.into_iter().map(validate_decoded).collect()
    }

    fn get(&self, id: ItemId) -> Result<Option<StockItem>, StoreError> {
        let row = self
            .connection
            .query_row(
                "SELECT id, name, quantity_on_hand, reorder_threshold, unit_price_cents
                 FROM stock_items WHERE id = ?1",
                params![id.get()],
                decode_row,
            )
            .optional()
            .map_err(backend)?;

        row.map(validate_decoded).transpose()
    }

    fn insert(&mut self, item: &StockItem) -> Result<(), StoreError> {
        self.connection
            .execute(
                "INSERT INTO stock_items
                     (id, name, quantity_on_hand, reorder_threshold, unit_price_cents)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    item.id.get(),
                    item.name,
                    item.quantity_on_hand,
                    item.reorder_threshold,
                    item.unit_price_cents,
                ],
            )
            .map_err(backend)?;
        Ok(())
    }

    fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Result<(), StoreError> {
        let changed = self
            .connection
            .execute(
                "UPDATE stock_items SET quantity_on_hand = ?2 WHERE id = ?1",
                params![id.get(), quantity],
            )
            .map_err(backend)?;

        if changed == 0 {
            return Err(StoreError::Backend(format!("no row for item id {id}")));
        }
        Ok(())
    }

    fn max_id(&self) -> Result<i64, StoreError> {
        self.connection
            .query_row("SELECT COALESCE(MAX(id), 0) FROM stock_items", [], |row| {
                row.get(0)
            })
            .map_err(backend)
    }
}

/// Raw decoded row, validated separately so constraint failures map to
/// `Corrupt` rather than a backend error.
struct DecodedRow {
    id: i64,
    name: String,
    quantity_on_hand: i64,
    reorder_threshold: i64,
    unit_price_cents: i64,
}

fn decode_row(row: &Row<'_>) -> rusqlite::Result<DecodedRow> {
    Ok(DecodedRow {
        id: row.get(0)?,
        name: row.get(1)?,
        quantity_on_hand: row.get(2)?,
        reorder_threshold: row.get(3)?,
        unit_price_cents: row.get(4)?,
    })
}

fn validate_decoded(row: DecodedRow) -> Result<StockItem, StoreError> {
    let id = ItemId::new(row.id)
        .map_err(|_| StoreError::Corrupt(format!("non-positive item id {}", row.id)))?;
    if row.name.trim().is_empty() {
        return Err(StoreError::Corrupt(format!("empty name for item id {id}")));
    }
    if row.quantity_on_hand < 0 || row.reorder_threshold < 0 || row.unit_price_cents < 0 {
        return Err(StoreError::Corrupt(format!(
            "negative field for item id {id}"
        )));
    }
    Ok(StockItem {
        id,
        name: row.name,
        quantity_on_hand: row.quantity_on_hand,
        reorder_threshold: row.reorder_threshold,
        unit_price_cents: row.unit_price_cents,
    })
}

fn backend(error: rusqlite::Error) -> StoreError {
    StoreError::Backend(error.to_string())
}
