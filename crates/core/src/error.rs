//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Every
/// variant is recoverable: the caller reports it and the session continues.
/// Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A quantity, threshold, price, or name argument violated its constraint.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation referenced an unknown item id.
    #[error("no item with id {0}")]
    NotFound(ItemId),

    /// A withdrawal would drive the quantity on hand below zero.
    /// The item state is left unchanged.
    #[error("insufficient stock: {available} on hand, {requested} requested")]
    InsufficientStock { available: i64, requested: i64 },

    /// Credentials matched no entry in the credential table.
    #[error("authentication failed")]
    AuthFailure,
}

impl DomainError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }

    pub fn insufficient_stock(available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            available,
            requested,
        }
    }
}
