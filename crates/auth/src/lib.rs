//! `stockroom-auth` — authentication/authorization boundary.
//!
//! This crate is intentionally decoupled from the catalog and from IO: it
//! maps credentials to roles and answers pure capability questions. The
//! session loop evaluates [`authorize`] at its dispatch boundary; the catalog
//! itself has no notion of roles.

pub mod authorize;
pub mod gate;
pub mod permissions;
pub mod roles;

pub use authorize::{authorize, AuthzError};
pub use gate::{AccessGate, CredentialTable};
pub use permissions::Permission;
pub use roles::Role;
