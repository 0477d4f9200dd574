#![doc(test(attr(deny(warnings))))]

//! Tally keeps a session-local ledger of income and expense entries and
//! derives budget totals from it on demand. The `cli` module layers an
//! interactive form and a scripted line mode over the core; all state is
//! transient and lost when the process exits.

pub mod app;
pub mod cli;
pub mod errors;
pub mod ledger;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("tally=info".parse().unwrap());

        fmt().with_env_filter(filter).init();

        tracing::info!("Tally tracing initialized.");
    });
}
