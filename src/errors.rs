use thiserror::Error;

/// Reasons the add-entry guard rejects input before the ledger sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("value must be a number")]
    NotANumber,
    #[error("value must be greater than zero")]
    NotPositive,
}

/// Failures surfaced by the CLI front ends.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Input(#[from] dialoguer::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
