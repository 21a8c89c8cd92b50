use serde::{Deserialize, Serialize};

use crate::permissions::Permission;

/// Role bound to an authenticated session.
///
/// Authorization is purely additive: `Administrator` may perform every
/// operation `Cashier` may perform, plus ingest. No operation is reserved to
/// `Cashier` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Administrator,
    Cashier,
}

impl Role {
    /// The explicit permission set granted to this role.
    pub fn permissions(self) -> &'static [Permission] {
        match self {
            Role::Administrator => &[
                Permission::ListStock,
                Permission::WithdrawStock,
                Permission::IngestItem,
            ],
            Role::Cashier => &[Permission::ListStock, Permission::WithdrawStock],
        }
    }

    pub fn permits(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Role::Administrator => write!(f, "Administrator"),
            Role::Cashier => write!(f, "Cashier"),
        }
    }
}
