use serde::{Deserialize, Serialize};

use stockroom_core::ItemId;

/// One stock-keeping unit.
///
/// # Invariants
/// - `quantity_on_hand` never goes negative; a reduction that would drive it
///   below zero is rejected entirely (no partial application).
/// - Items are created only through [`crate::Catalog::ingest`], mutated only
///   through [`crate::Catalog::withdraw`], and never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: ItemId,
    pub name: String,
    pub quantity_on_hand: i64,
    /// Level at or below which the item is considered critical.
    pub reorder_threshold: i64,
    /// Informational only; carried in the smallest currency unit.
    pub unit_price_cents: i64,
}

impl StockItem {
    /// Derive the display status from the current quantity and threshold.
    pub fn status(&self) -> StatusLabel {
        StatusLabel::derive(self.quantity_on_hand, self.reorder_threshold)
    }
}

/// Payload for ingesting a new stock-keeping unit.
///
/// Field constraints are enforced by the catalog at ingest time (negative
/// values are rejected, never clamped).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub initial_quantity: i64,
    pub reorder_threshold: i64,
    pub unit_price_cents: i64,
}

/// Derived display classification of an item's stock level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    /// Quantity on hand is at or below the reorder threshold.
    Critical,
    /// Quantity on hand is below twice the reorder threshold.
    Warning,
    Normal,
}

impl StatusLabel {
    /// Status derivation rule.
    ///
    /// A threshold of zero makes `Warning` unreachable (quantities cannot be
    /// negative), so such an item is always `Critical` or `Normal`.
    pub fn derive(quantity_on_hand: i64, reorder_threshold: i64) -> Self {
        if quantity_on_hand <= reorder_threshold {
            Self::Critical
        } else if quantity_on_hand < reorder_threshold.saturating_mul(2) {
            Self::Warning
        } else {
            Self::Normal
        }
    }
}

impl core::fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatusLabel::Critical => write!(f, "CRITICAL (reorder)"),
            StatusLabel::Warning => write!(f, "WARNING"),
            StatusLabel::Normal => write!(f, "OK"),
        }
    }
}

/// Read-model row returned by [`crate::Catalog::list_all`]: an item annotated
/// with its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub item: StockItem,
    pub status: StatusLabel,
}
