//! Dialoguer-driven presenter: one form round per entry, colored output.

use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::output;
use crate::cli::presenter::{Command, EntryInput, Presenter};
use crate::errors::{CommandError, ValidationError};
use crate::ledger::{BudgetSnapshot, Entry, EntryKind};

const ACTIONS: &[&str] = &["Add entry", "Show totals", "Dump ledger as JSON", "Exit"];
const KINDS: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

pub struct InteractivePresenter {
    theme: ColorfulTheme,
}

impl InteractivePresenter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    fn entry_form(&self) -> Result<EntryInput, CommandError> {
        let kind_index = Select::with_theme(&self.theme)
            .with_prompt("Kind")
            .items(&KINDS)
            .default(0)
            .interact()?;

        // Empty and non-numeric answers are allowed through on purpose: the
        // add-entry guard owns rejection, same as for scripted input.
        let description: String = Input::with_theme(&self.theme)
            .with_prompt("Description")
            .allow_empty(true)
            .interact_text()?;

        let value_text: String = Input::with_theme(&self.theme)
            .with_prompt("Value")
            .allow_empty(true)
            .interact_text()?;
        let value = value_text.trim().parse::<f64>().unwrap_or(f64::NAN);

        Ok(EntryInput {
            kind: KINDS[kind_index],
            description,
            value,
        })
    }
}

impl Default for InteractivePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for InteractivePresenter {
    fn next_command(&mut self) -> Result<Command, CommandError> {
        let action = Select::with_theme(&self.theme)
            .with_prompt("Action")
            .items(ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => Ok(Command::Add(self.entry_form()?)),
            1 => Ok(Command::Totals),
            2 => Ok(Command::Dump),
            _ => Ok(Command::Quit),
        }
    }

    fn render_entry(&mut self, entry: &Entry) {
        let line = match entry.kind {
            EntryKind::Income => format!(
                "+ {}  {}",
                output::format_amount(entry.value),
                entry.description
            )
            .bright_green(),
            EntryKind::Expense => format!(
                "- {}  {}",
                output::format_amount(entry.value),
                entry.description
            )
            .bright_red(),
        };
        println!("{line}");
    }

    fn display_totals(&mut self, snapshot: &BudgetSnapshot) {
        output::section("Budget");
        output::info(output::totals_block(snapshot));
    }

    fn reset_input_fields(&mut self) {
        // prompts are recreated on the next round; a blank line stands in
        // for clearing the form
        println!();
    }

    fn show_invalid(&mut self, error: &ValidationError) {
        output::warning(format!("entry rejected: {error}"));
    }

    fn dump_json(&mut self, json: &str) {
        println!("{json}");
    }
}
