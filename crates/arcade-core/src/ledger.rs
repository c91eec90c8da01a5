//! CRUD and month filtering for the daily ledger.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use uuid::Uuid;

use arcade_domain::{month_bounds, Building, EntryDetail, EntryKind, LedgerEntry};

use crate::{totals, CoreError, LedgerTotals};

/// Mutation and query helpers for [`LedgerEntry`] collections.
pub struct LedgerService;

impl LedgerService {
    /// Records a new entry. `base_amount` excludes any water charge carried
    /// by the detail; the stored total folds it in.
    pub fn add_entry(
        building: &mut Building,
        kind: EntryKind,
        detail: EntryDetail,
        base_amount: f64,
        date: DateTime<Utc>,
    ) -> Result<Uuid, CoreError> {
        if base_amount <= 0.0 {
            return Err(CoreError::Validation(
                "entry amount must be positive".into(),
            ));
        }
        let entry = LedgerEntry::new(kind, detail, base_amount, date);
        let id = entry.id;
        building.entries.push(entry);
        building.touch();
        Ok(id)
    }

    /// Replaces kind, detail, and base amount of an existing entry,
    /// re-deriving the stored total from the new water charge.
    pub fn update_entry(
        building: &mut Building,
        id: Uuid,
        kind: EntryKind,
        detail: EntryDetail,
        base_amount: f64,
    ) -> Result<(), CoreError> {
        if base_amount <= 0.0 {
            return Err(CoreError::Validation(
                "entry amount must be positive".into(),
            ));
        }
        let entry = building.entry_mut(id).ok_or(CoreError::EntryNotFound(id))?;
        entry.kind = kind;
        entry.amount = base_amount + detail.water_charge();
        entry.detail = detail;
        building.touch();
        Ok(())
    }

    pub fn delete_entry(building: &mut Building, id: Uuid) -> Result<(), CoreError> {
        let before = building.entries.len();
        building.entries.retain(|entry| entry.id != id);
        if building.entries.len() == before {
            return Err(CoreError::EntryNotFound(id));
        }
        building.touch();
        Ok(())
    }

    /// Entries within the given calendar month, newest first.
    pub fn entries_in_month(building: &Building, year: i32, month: u32) -> Vec<&LedgerEntry> {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return Vec::new();
        };
        let (start, end) = month_bounds(first);
        let mut selected: Vec<&LedgerEntry> = building
            .entries
            .iter()
            .filter(|entry| {
                let day = entry.date.date_naive();
                day >= start && day <= end
            })
            .collect();
        selected.sort_by(|a, b| b.date.cmp(&a.date));
        selected
    }

    /// All entries newest first, with summed totals — the ledger listing.
    pub fn listing(building: &Building, month: Option<(i32, u32)>) -> (Vec<&LedgerEntry>, LedgerTotals) {
        let entries = match month {
            Some((year, month)) => Self::entries_in_month(building, year, month),
            None => {
                let mut all: Vec<&LedgerEntry> = building.entries.iter().collect();
                all.sort_by(|a, b| b.date.cmp(&a.date));
                all
            }
        };
        let summary = totals(entries.iter().copied());
        (entries, summary)
    }
}

/// Parses a `YYYY-MM` month filter.
pub fn parse_month(value: &str) -> Result<(i32, u32), CoreError> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| CoreError::Validation(format!("invalid month filter `{value}`, expected YYYY-MM")))?;
    let year: i32 = year
        .parse()
        .map_err(|_| CoreError::Validation(format!("invalid year in month filter `{value}`")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| CoreError::Validation(format!("invalid month in month filter `{value}`")))?;
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "month out of range in filter `{value}`"
        )));
    }
    Ok((year, month))
}

/// First day of the month containing `date`, as a (year, month) pair.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
