//! Credential table and session gate.
//!
//! Secrets are compared exactly and stored in the clear; lockout, rate
//! limiting, and hashing are out of scope for this system. The table is
//! constructed once at process start and never mutated afterwards.

use std::collections::HashMap;

use stockroom_core::{DomainError, DomainResult};

use crate::roles::Role;

#[derive(Debug, Clone)]
struct CredentialEntry {
    secret: String,
    role: Role,
}

/// Static mapping from username to secret and role.
#[derive(Debug, Clone)]
pub struct CredentialTable {
    entries: HashMap<String, CredentialEntry>,
}

impl CredentialTable {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Add an entry, replacing any previous entry for the same username.
    pub fn with_entry(
        mut self,
        username: impl Into<String>,
        secret: impl Into<String>,
        role: Role,
    ) -> Self {
        self.entries.insert(
            username.into(),
            CredentialEntry {
                secret: secret.into(),
                role,
            },
        );
        self
    }

    /// Exact-match lookup; case-sensitive on both username and secret.
    fn verify(&self, username: &str, secret: &str) -> Option<Role> {
        self.entries
            .get(username)
            .filter(|entry| entry.secret == secret)
            .map(|entry| entry.role)
    }
}

impl Default for CredentialTable {
    /// The fixed credential table this system ships with.
    fn default() -> Self {
        Self::empty()
            .with_entry("admin", "pass123", Role::Administrator)
            .with_entry("caja", "venta456", Role::Cashier)
    }
}

/// Authentication gate holding the credential table and the role bound to
/// the current session.
#[derive(Debug)]
pub struct AccessGate {
    table: CredentialTable,
    current: Option<Role>,
}

impl AccessGate {
    pub fn new(table: CredentialTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    /// Authenticate and bind the matched role to the session.
    ///
    /// # Errors
    /// `AuthFailure` when the credentials match no entry; the previously
    /// bound role (if any) is left untouched.
    pub fn authenticate(&mut self, username: &str, secret: &str) -> DomainResult<Role> {
        match self.table.verify(username, secret) {
            Some(role) => {
                self.current = Some(role);
                Ok(role)
            }
            None => Err(DomainError::AuthFailure),
        }
    }

    /// Role bound by the last successful [`Self::authenticate`] call;
    /// `None` before any success.
    pub fn current_role(&self) -> Option<Role> {
        self.current
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(CredentialTable::default())
    }
}
