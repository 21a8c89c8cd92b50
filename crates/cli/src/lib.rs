//! `stockroom-cli` — the interactive session loop.
//!
//! Thin I/O glue around the core: it authenticates once through the access
//! gate, then repeatedly reads a command and a role-appropriate payload from
//! the console and dispatches to catalog operations, printing results.
//! Domain constraints stay in the catalog; this layer only parses.

pub mod input;
pub mod session;
