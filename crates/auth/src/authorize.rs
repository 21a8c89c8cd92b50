use thiserror::Error;

use crate::permissions::Permission;
use crate::roles::Role;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: missing permission '{0}'")]
    Forbidden(Permission),
}

/// Authorize a role for one catalog operation.
///
/// Checked once at the dispatch boundary, before the operation is invoked.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, required: Permission) -> Result<(), AuthzError> {
    if role.permits(required) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden(required))
    }
}
