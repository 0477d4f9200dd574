//! Contract between the app controller and its presentation adapters.

use crate::errors::{CommandError, ValidationError};
use crate::ledger::{BudgetSnapshot, Entry, EntryKind};

/// User input for one prospective entry, already coerced by the adapter.
///
/// Adapters own type coercion: kind discrimination and turning numeric text
/// into an `f64`. Unparsable numbers become NaN so that rejection happens
/// in exactly one place, the add-entry guard.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub kind: EntryKind,
    pub description: String,
    pub value: f64,
}

/// One user action, produced by [`Presenter::next_command`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Record a new entry.
    Add(EntryInput),
    /// Recompute and display the aggregate figures.
    Totals,
    /// Print the full ledger as pretty JSON.
    Dump,
    /// Leave the command loop.
    Quit,
}

/// Presentation adapter consumed by [`crate::app::App`].
///
/// Implementations own all user-facing I/O. Display methods only ever see
/// shared references, so they cannot mutate ledger state.
pub trait Presenter {
    /// Blocks until the user produces the next command.
    fn next_command(&mut self) -> Result<Command, CommandError>;

    /// Displays one freshly recorded entry.
    fn render_entry(&mut self, entry: &Entry);

    /// Displays the aggregate figures. An undefined percentage (the -1
    /// sentinel) renders as a placeholder rather than a number.
    fn display_totals(&mut self, snapshot: &BudgetSnapshot);

    /// Clears input affordances after a successful add.
    fn reset_input_fields(&mut self);

    /// Reports input rejected by the add-entry guard.
    fn show_invalid(&mut self, error: &ValidationError);

    /// Prints a JSON dump of the ledger.
    fn dump_json(&mut self, json: &str);
}
