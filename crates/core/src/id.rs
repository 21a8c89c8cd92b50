//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stock-keeping unit.
///
/// Ids are positive integers assigned monotonically by the catalog
/// (current maximum plus one) and are never reused within a process
/// lifetime. Prefer constructing via [`ItemId::new`], which enforces
/// positivity at the boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// Create an identifier from a raw value.
    ///
    /// Returns `InvalidInput` for zero or negative values.
    pub fn new(raw: i64) -> Result<Self, DomainError> {
        if raw <= 0 {
            return Err(DomainError::invalid_input(format!(
                "item id must be positive, got {raw}"
            )));
        }
        Ok(Self(raw))
    }

    /// The first id ever assigned in an empty catalog.
    pub fn first() -> Self {
        Self(1)
    }

    /// The id assigned after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|e| DomainError::invalid_input(format!("ItemId: {e}")))?;
        Self::new(raw)
    }
}
