//! Income/expense aggregation over ledger entries.

use arcade_domain::{EntryKind, LedgerEntry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
/// Summed totals for a set of ledger entries.
pub struct LedgerTotals {
    pub income: f64,
    pub expenses: f64,
    pub net_profit_loss: f64,
}

/// Sums entry amounts by kind. Pure; an empty input yields all-zero totals.
/// Entry ordering is irrelevant to the sums.
pub fn totals<'a>(entries: impl IntoIterator<Item = &'a LedgerEntry>) -> LedgerTotals {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for entry in entries {
        match entry.kind {
            EntryKind::Income => income += entry.amount,
            EntryKind::Expense => expenses += entry.amount,
        }
    }
    LedgerTotals {
        income,
        expenses,
        net_profit_loss: income - expenses,
    }
}
