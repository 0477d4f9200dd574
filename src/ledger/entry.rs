use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distinguishes the two entry partitions tracked by the ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Income => write!(f, "income"),
            EntryKind::Expense => write!(f, "expense"),
        }
    }
}

/// Error returned when parsing an [`EntryKind`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown entry kind `{0}` (expected `income` or `expense`)")]
pub struct ParseEntryKindError(String);

impl FromStr for EntryKind {
    type Err = ParseEntryKindError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(ParseEntryKindError(other.to_string())),
        }
    }
}

/// A single recorded income or expense.
///
/// Entries are immutable once created: the ledger assigns the id and only
/// ever hands entries out by shared reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub id: u64,
    pub kind: EntryKind,
    pub description: String,
    pub value: f64,
}

impl Entry {
    pub(crate) fn new(
        id: u64,
        kind: EntryKind,
        description: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            id,
            kind,
            description: description.into(),
            value,
        }
    }
}
