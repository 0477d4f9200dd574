use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::ledger::{BudgetSnapshot, UNDEFINED_PERCENTAGE};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

/// Process-wide output switches.
///
/// Script mode sets `plain` so test harnesses see stable, uncolored text.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    pub plain: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let base = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Warning => format!("WARNING: {text}"),
        MessageKind::Error => format!("ERROR: {text}"),
        MessageKind::Info | MessageKind::Success => text,
    };

    if prefs.plain {
        return base;
    }

    match kind {
        MessageKind::Success => base.bright_green().to_string(),
        MessageKind::Warning => base.bright_yellow().to_string(),
        MessageKind::Error => base.bright_red().to_string(),
        MessageKind::Section => base.bold().to_string(),
        MessageKind::Info => base,
    }
}

fn emit(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    println!("{}", apply_style(kind, message, &prefs));
}

pub fn info(message: impl fmt::Display) {
    emit(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    emit(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    emit(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    emit(MessageKind::Error, message);
}

pub fn section(message: impl fmt::Display) {
    emit(MessageKind::Section, message);
}

/// Formats an entry or aggregate amount with two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Formats the spend percentage, using the `---` placeholder while it is
/// undefined.
pub fn format_percentage(percentage: i64) -> String {
    if percentage == UNDEFINED_PERCENTAGE {
        "---".to_string()
    } else {
        format!("{percentage}%")
    }
}

/// Renders the aggregate figures as an aligned block, shared by both front
/// ends.
pub fn totals_block(snapshot: &BudgetSnapshot) -> String {
    format!(
        "Available budget: {}\nTotal income:     {}\nTotal expenses:   {}\nSpent:            {}",
        format_amount(snapshot.budget),
        format_amount(snapshot.total_income),
        format_amount(snapshot.total_expense),
        format_percentage(snapshot.percentage),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: OutputPreferences = OutputPreferences { plain: true };

    #[test]
    fn warnings_and_errors_carry_labels() {
        assert_eq!(
            apply_style(MessageKind::Warning, "watch out", &PLAIN),
            "WARNING: watch out"
        );
        assert_eq!(
            apply_style(MessageKind::Error, "broken", &PLAIN),
            "ERROR: broken"
        );
        assert_eq!(apply_style(MessageKind::Info, "plain text", &PLAIN), "plain text");
    }

    #[test]
    fn sections_are_framed() {
        assert_eq!(
            apply_style(MessageKind::Section, " Budget ", &PLAIN),
            "=== Budget ==="
        );
    }

    #[test]
    fn amounts_use_two_decimals() {
        assert_eq!(format_amount(1200.0), "1200.00");
        assert_eq!(format_amount(0.5), "0.50");
        assert_eq!(format_amount(-10.0), "-10.00");
    }

    #[test]
    fn undefined_percentage_renders_placeholder() {
        assert_eq!(format_percentage(UNDEFINED_PERCENTAGE), "---");
        assert_eq!(format_percentage(0), "0%");
        assert_eq!(format_percentage(38), "38%");
    }

    #[test]
    fn totals_block_lines_up() {
        let snapshot = BudgetSnapshot {
            budget: 750.0,
            total_income: 1200.0,
            total_expense: 450.0,
            percentage: 38,
        };
        let block = totals_block(&snapshot);
        assert_eq!(
            block,
            "Available budget: 750.00\n\
             Total income:     1200.00\n\
             Total expenses:   450.00\n\
             Spent:            38%"
        );
    }
}
