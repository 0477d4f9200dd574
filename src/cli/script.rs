//! Line-oriented presenter used when the CLI runs in script mode.
//!
//! Commands arrive one per line on the reader (stdin in production) and are
//! tokenized with shell-words, so descriptions containing spaces can be
//! quoted. Malformed lines produce a warning and the loop continues.

use std::io::BufRead;

use crate::cli::output;
use crate::cli::presenter::{Command, EntryInput, Presenter};
use crate::errors::{CommandError, ValidationError};
use crate::ledger::{BudgetSnapshot, Entry, EntryKind};

const ADD_USAGE: &str = "usage: add <income|expense> <description> <value>";

pub struct ScriptPresenter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPresenter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Presenter for ScriptPresenter<R> {
    fn next_command(&mut self) -> Result<Command, CommandError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                // end of script
                return Ok(Command::Quit);
            }
            match parse_line(line.trim()) {
                Ok(Some(command)) => return Ok(command),
                Ok(None) => continue,
                Err(message) => output::warning(message),
            }
        }
    }

    fn render_entry(&mut self, entry: &Entry) {
        output::success(format!(
            "Added {} #{}: {} ({})",
            entry.kind,
            entry.id,
            entry.description,
            output::format_amount(entry.value)
        ));
    }

    fn display_totals(&mut self, snapshot: &BudgetSnapshot) {
        output::section("Budget");
        output::info(output::totals_block(snapshot));
    }

    fn reset_input_fields(&mut self) {
        // script mode has no input affordances to clear
    }

    fn show_invalid(&mut self, error: &ValidationError) {
        output::warning(format!("entry rejected: {error}"));
    }

    fn dump_json(&mut self, json: &str) {
        output::info(json);
    }
}

fn parse_line(line: &str) -> Result<Option<Command>, String> {
    if line.is_empty() {
        return Ok(None);
    }

    let tokens = shell_words::split(line).map_err(|err| err.to_string())?;
    let Some((command, args)) = tokens.split_first() else {
        return Ok(None);
    };

    match command.to_ascii_lowercase().as_str() {
        "add" => parse_add(args).map(Some),
        "totals" => Ok(Some(Command::Totals)),
        "json" => Ok(Some(Command::Dump)),
        "exit" | "quit" => Ok(Some(Command::Quit)),
        other => Err(format!("unknown command `{other}`")),
    }
}

fn parse_add(args: &[String]) -> Result<Command, String> {
    let [kind, description, value] = args else {
        return Err(ADD_USAGE.to_string());
    };

    let kind = kind.parse::<EntryKind>().map_err(|err| err.to_string())?;
    // bad numeric text becomes NaN; the add-entry guard rejects it, not us
    let value = value.trim().parse::<f64>().unwrap_or(f64::NAN);

    Ok(Command::Add(EntryInput {
        kind,
        description: description.clone(),
        value,
    }))
}
