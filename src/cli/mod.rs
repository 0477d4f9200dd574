//! Presentation layer: the adapter contract plus the interactive and
//! scripted front ends.

pub mod interactive;
pub mod output;
pub mod presenter;
pub mod script;

pub use interactive::InteractivePresenter;
pub use presenter::{Command, EntryInput, Presenter};
pub use script::ScriptPresenter;

use std::io;

use crate::app::App;
use crate::errors::CommandError;
use crate::ledger::Ledger;

/// Environment variable that switches the CLI into script mode.
pub const SCRIPT_MODE_ENV: &str = "TALLY_CLI_SCRIPT";

/// Runs the CLI in the mode selected by the environment.
///
/// Script mode reads newline-delimited commands from stdin and keeps the
/// output plain so test harnesses see stable text; interactive mode runs
/// the dialoguer form loop.
pub fn run_cli() -> Result<(), CommandError> {
    if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        output::set_preferences(output::OutputPreferences { plain: true });
        let presenter = ScriptPresenter::new(io::stdin().lock());
        App::new(Ledger::new(), presenter).run()
    } else {
        let presenter = InteractivePresenter::new();
        App::new(Ledger::new(), presenter).run()
    }
}
