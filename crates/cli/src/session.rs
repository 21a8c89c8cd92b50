//! The interactive session: login once, then loop until "end session".
//!
//! The menu is built from the authenticated role's permission set and every
//! command passes the capability check at this dispatch boundary; the
//! catalog itself knows nothing about roles.

use std::io::{BufRead, Write};

use anyhow::Result;

use stockroom_auth::{authorize, AccessGate, Permission, Role};
use stockroom_catalog::{Catalog, NewItem, StockLine, StockStore};

use crate::input::{parse_menu_choice, parse_price_cents, prompt_line};

/// One dispatchable session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    ViewSummary,
    RecordSale,
    IngestItem,
    /// Stubbed: advanced charts are future work.
    Charts,
    EndSession,
}

impl MenuCommand {
    /// The permission checked at the dispatch boundary, if any.
    fn required_permission(self) -> Option<Permission> {
        match self {
            MenuCommand::ViewSummary => Some(Permission::ListStock),
            MenuCommand::RecordSale => Some(Permission::WithdrawStock),
            MenuCommand::IngestItem => Some(Permission::IngestItem),
            MenuCommand::Charts | MenuCommand::EndSession => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuCommand::ViewSummary => "View inventory summary",
            MenuCommand::RecordSale => "Record a sale (stock out)",
            MenuCommand::IngestItem => "Ingest a new item",
            MenuCommand::Charts => "Advanced charts (coming soon)",
            MenuCommand::EndSession => "End session",
        }
    }
}

const ALL_COMMANDS: [MenuCommand; 5] = [
    MenuCommand::ViewSummary,
    MenuCommand::RecordSale,
    MenuCommand::IngestItem,
    MenuCommand::Charts,
    MenuCommand::EndSession,
];

/// The menu for a role: every command the role is permitted to run.
///
/// One builder for all roles: the permission set decides, so there is no
/// per-role duplicated command list anywhere.
fn menu_entries(role: Role) -> Vec<MenuCommand> {
    ALL_COMMANDS
        .into_iter()
        .filter(|command| {
            command
                .required_permission()
                .is_none_or(|permission| role.permits(permission))
        })
        .collect()
}

/// An authenticated console session over a catalog.
pub struct Session<S: StockStore, R: BufRead, W: Write> {
    gate: AccessGate,
    catalog: Catalog<S>,
    input: R,
    output: W,
}

impl<S: StockStore, R: BufRead, W: Write> Session<S, R, W> {
    pub fn new(gate: AccessGate, catalog: Catalog<S>, input: R, output: W) -> Self {
        Self {
            gate,
            catalog,
            input,
            output,
        }
    }

    /// Run the session to completion.
    ///
    /// A failed login ends the process politely (the user re-runs to retry);
    /// everything after login loops until "end session" or end of input.
    pub fn run(&mut self) -> Result<()> {
        let Some(role) = self.login()? else {
            writeln!(self.output, "\nAuthentication failed. Session closed.")?;
            return Ok(());
        };

        writeln!(self.output, "\nAccess granted. Signed in as {role}.")?;
        tracing::info!(%role, "session authenticated");

        let entries = menu_entries(role);
        loop {
            self.render_menu(&entries)?;
            let Some(line) = self.prompt("Select an option: ")? else {
                break;
            };
            let Some(index) = parse_menu_choice(&line, entries.len()) else {
                writeln!(self.output, "Invalid option. Try again.")?;
                continue;
            };

            if self.dispatch(role, entries[index])? {
                break;
            }
        }

        writeln!(self.output, "Closing session. See you soon!")?;
        Ok(())
    }

    /// Check the capability, then run the command. Returns `true` when the
    /// session should end.
    fn dispatch(&mut self, role: Role, command: MenuCommand) -> Result<bool> {
        if let Some(required) = command.required_permission() {
            if let Err(err) = authorize(role, required) {
                writeln!(self.output, "{err}")?;
                return Ok(false);
            }
        }

        match command {
            MenuCommand::ViewSummary => self.view_summary()?,
            MenuCommand::RecordSale => self.record_sale()?,
            MenuCommand::IngestItem => self.ingest_item()?,
            MenuCommand::Charts => {
                writeln!(self.output, "Charts would use an external plotting library.")?;
            }
            MenuCommand::EndSession => return Ok(true),
        }
        Ok(false)
    }

    fn login(&mut self) -> Result<Option<Role>> {
        writeln!(self.output, "--- SIGN IN ---")?;
        let Some(username) = self.prompt("Username: ")? else {
            return Ok(None);
        };
        let Some(secret) = self.prompt("Password: ")? else {
            return Ok(None);
        };

        match self.gate.authenticate(&username, &secret) {
            Ok(role) => Ok(Some(role)),
            Err(err) => {
                tracing::warn!(%username, "login rejected: {err}");
                Ok(None)
            }
        }
    }

    fn render_menu(&mut self, entries: &[MenuCommand]) -> Result<()> {
        writeln!(self.output, "\n================================")?;
        writeln!(self.output, "       INVENTORY MAIN MENU")?;
        writeln!(self.output, "================================")?;
        for (n, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{}. {}", n + 1, entry.label())?;
        }
        Ok(())
    }

    fn view_summary(&mut self) -> Result<()> {
        let lines = match self.catalog.list_all() {
            Ok(lines) => lines,
            Err(err) => {
                writeln!(self.output, "Could not read the inventory: {err}")?;
                return Ok(());
            }
        };

        writeln!(self.output, "\n--- INVENTORY SUMMARY ---")?;
        writeln!(
            self.output,
            "{:<5} {:<25} {:<9} {:<6} STATUS",
            "ID", "Name", "On hand", "Min."
        )?;
        writeln!(self.output, "{}", "-".repeat(64))?;
        for StockLine { item, status } in lines {
            writeln!(
                self.output,
                "{:<5} {:<25} {:<9} {:<6} {status}",
                item.id, item.name, item.quantity_on_hand, item.reorder_threshold
            )?;
        }
        Ok(())
    }

    fn record_sale(&mut self) -> Result<()> {
        let Some(id_line) = self.prompt("Item id: ")? else {
            return Ok(());
        };
        let id = match id_line.parse() {
            Ok(id) => id,
            Err(err) => {
                writeln!(self.output, "Invalid input: {err}")?;
                return Ok(());
            }
        };

        let Some(quantity_line) = self.prompt("Quantity sold: ")? else {
            return Ok(());
        };
        let Ok(quantity) = quantity_line.parse::<i64>() else {
            writeln!(self.output, "Invalid input: quantity must be a number.")?;
            return Ok(());
        };

        match self.catalog.withdraw(id, quantity) {
            Ok(balance) => {
                tracing::info!(%id, quantity, balance, "sale recorded");
                writeln!(
                    self.output,
                    "Recorded sale of {quantity} units (id {id}, {balance} remaining)."
                )?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn ingest_item(&mut self) -> Result<()> {
        writeln!(self.output, "\n--- INGEST NEW ITEM ---")?;
        let Some(name) = self.prompt("Item name: ")? else {
            return Ok(());
        };

        let Some(quantity_line) = self.prompt("Initial stock: ")? else {
            return Ok(());
        };
        let Ok(initial_quantity) = quantity_line.parse::<i64>() else {
            writeln!(self.output, "Invalid input: stock must be a number.")?;
            return Ok(());
        };

        let Some(threshold_line) = self.prompt("Reorder threshold: ")? else {
            return Ok(());
        };
        let Ok(reorder_threshold) = threshold_line.parse::<i64>() else {
            writeln!(self.output, "Invalid input: threshold must be a number.")?;
            return Ok(());
        };

        let Some(price_line) = self.prompt("Unit price: ")? else {
            return Ok(());
        };
        let unit_price_cents = match parse_price_cents(&price_line) {
            Ok(cents) => cents,
            Err(err) => {
                writeln!(self.output, "Invalid input: {err}")?;
                return Ok(());
            }
        };

        match self.catalog.ingest(NewItem {
            name,
            initial_quantity,
            reorder_threshold,
            unit_price_cents,
        }) {
            Ok(item) => {
                tracing::info!(id = %item.id, name = %item.name, "item ingested");
                writeln!(
                    self.output,
                    "Item '{}' ingested with id {}.",
                    item.name, item.id
                )?;
            }
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        Ok(prompt_line(&mut self.input, &mut self.output, text)?)
    }
}
