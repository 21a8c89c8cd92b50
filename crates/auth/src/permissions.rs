use serde::{Deserialize, Serialize};

/// A catalog operation the gate can grant.
///
/// The operation set of this system is closed, so permissions are a closed
/// enum rather than opaque strings; the dispatch boundary checks exactly one
/// of these per command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// View stock levels and derived statuses.
    ListStock,
    /// Record a stock reduction (sale).
    WithdrawStock,
    /// Add a new stock-keeping unit.
    IngestItem,
}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Permission::ListStock => "stock.list",
            Permission::WithdrawStock => "stock.withdraw",
            Permission::IngestItem => "stock.ingest",
        };
        f.write_str(name)
    }
}
