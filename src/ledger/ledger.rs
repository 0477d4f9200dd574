use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryKind};

/// Sentinel carried by [`BudgetSnapshot::percentage`] while no income has
/// been recorded, making the share of income spent undefined.
pub const UNDEFINED_PERCENTAGE: i64 = -1;

/// Read-only view of the aggregate figures as of the last recomputation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetSnapshot {
    pub budget: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub percentage: i64,
}

/// In-memory store of income and expense entries plus derived totals.
///
/// Adding an entry does not update the totals by itself; callers trigger
/// [`Ledger::recompute`] when they want fresh aggregates. The ledger
/// performs no input validation: the add-entry guard runs upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
    total_income: f64,
    total_expense: f64,
    budget: f64,
    percentage: i64,
}

impl Ledger {
    /// Creates an empty ledger with zero totals and an undefined percentage.
    pub fn new() -> Self {
        Self {
            incomes: Vec::new(),
            expenses: Vec::new(),
            total_income: 0.0,
            total_expense: 0.0,
            budget: 0.0,
            percentage: UNDEFINED_PERCENTAGE,
        }
    }

    /// Appends a new entry to `kind`'s partition and returns it.
    ///
    /// Ids are per partition: 0 for the first entry, the last entry's id
    /// plus one afterwards. Ids are never reused.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        description: impl Into<String>,
        value: f64,
    ) -> &Entry {
        let partition = self.partition_mut(kind);
        let id = partition.last().map_or(0, |entry| entry.id + 1);
        let index = partition.len();
        partition.push(Entry::new(id, kind, description, value));
        &partition[index]
    }

    /// Recomputes both totals, the available budget, and the spend
    /// percentage from the stored entries.
    ///
    /// The percentage rounds with `f64::round` (half away from zero), which
    /// matches ordinary rounding on this non-negative domain.
    pub fn recompute(&mut self) {
        self.total_income = sum_values(&self.incomes);
        self.total_expense = sum_values(&self.expenses);
        self.budget = self.total_income - self.total_expense;
        self.percentage = if self.total_income > 0.0 {
            (self.total_expense / self.total_income * 100.0).round() as i64
        } else {
            UNDEFINED_PERCENTAGE
        };
    }

    /// Returns the aggregates as of the last [`Ledger::recompute`] call
    /// without triggering a recomputation.
    pub fn snapshot(&self) -> BudgetSnapshot {
        BudgetSnapshot {
            budget: self.budget,
            total_income: self.total_income,
            total_expense: self.total_expense,
            percentage: self.percentage,
        }
    }

    /// Entries recorded for `kind`, in insertion order.
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    pub fn entry_count(&self, kind: EntryKind) -> usize {
        self.entries(kind).len()
    }

    fn partition_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn sum_values(entries: &[Entry]) -> f64 {
    entries.iter().map(|entry| entry.value).sum()
}
