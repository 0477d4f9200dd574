//! App controller: wires presenter commands to ledger operations and
//! triggers display refreshes.

use crate::cli::presenter::{Command, EntryInput, Presenter};
use crate::errors::{CommandError, ValidationError};
use crate::ledger::Ledger;

/// Applies the add-entry guard: non-empty description, finite positive
/// value.
///
/// The ledger performs no validation of its own, so this must pass before
/// [`Ledger::add_entry`] is called. Adapters coerce unparsable numeric text
/// to NaN, which fails the finiteness check here.
pub fn validate_input(input: &EntryInput) -> Result<(), ValidationError> {
    if input.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if !input.value.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if input.value <= 0.0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(())
}

/// Runs the command loop over a ledger and a presentation adapter.
///
/// Both collaborators are passed in explicitly so tests can substitute a
/// recording presenter or a pre-seeded ledger.
pub struct App<P> {
    ledger: Ledger,
    presenter: P,
}

impl<P: Presenter> App<P> {
    pub fn new(ledger: Ledger, presenter: P) -> Self {
        Self { ledger, presenter }
    }

    /// Read-only access to the ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Consumes the app and returns its parts.
    pub fn into_parts(self) -> (Ledger, P) {
        (self.ledger, self.presenter)
    }

    /// Runs until the presenter yields [`Command::Quit`] or fails.
    pub fn run(&mut self) -> Result<(), CommandError> {
        // Paint the zeroed totals before the first command is read.
        self.presenter.display_totals(&self.ledger.snapshot());

        loop {
            match self.presenter.next_command()? {
                Command::Add(input) => self.add_entry(input),
                Command::Totals => self.refresh_totals(),
                Command::Dump => self.dump_ledger()?,
                Command::Quit => break,
            }
        }

        Ok(())
    }

    fn add_entry(&mut self, input: EntryInput) {
        if let Err(err) = validate_input(&input) {
            tracing::debug!(error = %err, "add entry rejected");
            self.presenter.show_invalid(&err);
            return;
        }

        let entry = self
            .ledger
            .add_entry(input.kind, input.description, input.value);
        tracing::debug!(id = entry.id, kind = %entry.kind, value = entry.value, "entry added");
        self.presenter.render_entry(entry);
        self.presenter.reset_input_fields();
        self.refresh_totals();
    }

    fn refresh_totals(&mut self) {
        self.ledger.recompute();
        self.presenter.display_totals(&self.ledger.snapshot());
    }

    fn dump_ledger(&mut self) -> Result<(), CommandError> {
        let json = serde_json::to_string_pretty(&self.ledger)?;
        self.presenter.dump_json(&json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::ledger::{BudgetSnapshot, Entry, EntryKind};

    #[derive(Default)]
    struct FakePresenter {
        script: VecDeque<Command>,
        rendered: Vec<Entry>,
        totals: Vec<BudgetSnapshot>,
        warnings: Vec<ValidationError>,
        resets: usize,
        dumps: Vec<String>,
    }

    impl FakePresenter {
        fn scripted(commands: Vec<Command>) -> Self {
            Self {
                script: commands.into(),
                ..Self::default()
            }
        }
    }

    impl Presenter for FakePresenter {
        fn next_command(&mut self) -> Result<Command, CommandError> {
            Ok(self.script.pop_front().unwrap_or(Command::Quit))
        }

        fn render_entry(&mut self, entry: &Entry) {
            self.rendered.push(entry.clone());
        }

        fn display_totals(&mut self, snapshot: &BudgetSnapshot) {
            self.totals.push(*snapshot);
        }

        fn reset_input_fields(&mut self) {
            self.resets += 1;
        }

        fn show_invalid(&mut self, error: &ValidationError) {
            self.warnings.push(error.clone());
        }

        fn dump_json(&mut self, json: &str) {
            self.dumps.push(json.to_string());
        }
    }

    fn add(kind: EntryKind, description: &str, value: f64) -> Command {
        Command::Add(EntryInput {
            kind,
            description: description.to_string(),
            value,
        })
    }

    #[test]
    fn accepted_entries_render_and_refresh_totals() {
        let presenter = FakePresenter::scripted(vec![
            add(EntryKind::Income, "Salary", 10.0),
            add(EntryKind::Income, "Bonus", 20.0),
            add(EntryKind::Expense, "Food", 5.0),
        ]);
        let mut app = App::new(Ledger::new(), presenter);
        app.run().unwrap();

        let (ledger, presenter) = app.into_parts();
        assert_eq!(ledger.entry_count(EntryKind::Income), 2);
        assert_eq!(ledger.entry_count(EntryKind::Expense), 1);
        assert_eq!(presenter.rendered.len(), 3);
        assert_eq!(presenter.resets, 3);
        // startup paint plus one refresh per accepted entry
        assert_eq!(presenter.totals.len(), 4);

        let last = presenter.totals.last().unwrap();
        assert_eq!(last.total_income, 30.0);
        assert_eq!(last.total_expense, 5.0);
        assert_eq!(last.budget, 25.0);
        assert_eq!(last.percentage, 17);
    }

    #[test]
    fn startup_paints_zeroed_totals() {
        let mut app = App::new(Ledger::new(), FakePresenter::scripted(vec![]));
        app.run().unwrap();

        let (_, presenter) = app.into_parts();
        assert_eq!(presenter.totals.len(), 1);
        assert_eq!(presenter.totals[0].budget, 0.0);
        assert_eq!(presenter.totals[0].percentage, -1);
    }

    #[test]
    fn invalid_input_never_reaches_the_ledger() {
        let presenter = FakePresenter::scripted(vec![
            add(EntryKind::Expense, "", 10.0),
            add(EntryKind::Expense, "   ", 10.0),
            add(EntryKind::Expense, "Food", 0.0),
            add(EntryKind::Expense, "Food", -3.0),
            add(EntryKind::Expense, "Food", f64::NAN),
            add(EntryKind::Income, "Salary", f64::INFINITY),
        ]);
        let mut app = App::new(Ledger::new(), presenter);
        app.run().unwrap();

        let (ledger, presenter) = app.into_parts();
        assert_eq!(ledger.entry_count(EntryKind::Income), 0);
        assert_eq!(ledger.entry_count(EntryKind::Expense), 0);
        assert!(presenter.rendered.is_empty());
        assert_eq!(presenter.resets, 0);
        // only the startup paint: rejected adds never refresh totals
        assert_eq!(presenter.totals.len(), 1);
        assert_eq!(
            presenter.warnings,
            vec![
                ValidationError::EmptyDescription,
                ValidationError::EmptyDescription,
                ValidationError::NotPositive,
                ValidationError::NotPositive,
                ValidationError::NotANumber,
                ValidationError::NotANumber,
            ]
        );
    }

    #[test]
    fn totals_command_recomputes_on_demand() {
        let mut ledger = Ledger::new();
        ledger.add_entry(EntryKind::Income, "Salary", 100.0);
        let mut app = App::new(ledger, FakePresenter::scripted(vec![Command::Totals]));
        app.run().unwrap();

        let (_, presenter) = app.into_parts();
        // the pre-seeded entry only shows up once recompute has run
        assert_eq!(presenter.totals[0].total_income, 0.0);
        assert_eq!(presenter.totals[1].total_income, 100.0);
        assert_eq!(presenter.totals[1].percentage, 0);
    }

    #[test]
    fn dump_emits_pretty_json() {
        let presenter = FakePresenter::scripted(vec![
            add(EntryKind::Income, "Salary", 1200.0),
            Command::Dump,
        ]);
        let mut app = App::new(Ledger::new(), presenter);
        app.run().unwrap();

        let (_, presenter) = app.into_parts();
        assert_eq!(presenter.dumps.len(), 1);
        assert!(presenter.dumps[0].contains("\"description\": \"Salary\""));
        assert!(presenter.dumps[0].contains("\"kind\": \"income\""));
    }

    #[test]
    fn guard_accepts_minimal_valid_input() {
        let input = EntryInput {
            kind: EntryKind::Expense,
            description: "Coffee".to_string(),
            value: 0.01,
        };
        assert_eq!(validate_input(&input), Ok(()));
    }
}
