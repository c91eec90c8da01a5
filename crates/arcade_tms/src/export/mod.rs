//! Monthly ledger exports. Both file formats share the same row mapping
//! and land under `<export root>/<Month>, <Year>/`.

pub mod csv;
pub mod excel;

use std::path::{Path, PathBuf};

use arcade_core::{codec, totals, LedgerService, LedgerTotals};
use arcade_domain::{Building, EntryKind};

pub const COLUMN_HEADERS: [&str; 5] = ["Date", "Type", "Category / Source", "Details", "Amount (Rs)"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Case-insensitive month name lookup, 1-based.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_NAMES
        .iter()
        .position(|m| m.eq_ignore_ascii_case(name))
        .map(|idx| idx as u32 + 1)
}

/// One formatted export row, shared by the CSV and spreadsheet writers.
#[derive(Debug, Clone)]
pub struct ExportRow {
    pub date: String,
    pub kind: EntryKind,
    pub category: String,
    pub details: String,
    pub amount: f64,
}

/// Rows for the given month in ascending date order, plus the summed
/// totals for the footer.
pub fn month_rows(building: &Building, year: i32, month: u32) -> (Vec<ExportRow>, LedgerTotals) {
    let mut entries = LedgerService::entries_in_month(building, year, month);
    entries.sort_by(|a, b| a.date.cmp(&b.date));
    let summary = totals(entries.iter().copied());

    let rows = entries
        .iter()
        .map(|entry| {
            let (category, details) = codec::export_columns(&entry.detail);
            ExportRow {
                date: entry.date.format("%b %-d %Y %-I:%M %p").to_string(),
                kind: entry.kind,
                category,
                details,
                amount: entry.amount,
            }
        })
        .collect();
    (rows, summary)
}

/// `<export root>/<Month>, <Year>`
pub fn export_dir(export_root: &Path, month_name: &str, year: i32) -> PathBuf {
    export_root.join(format!("{month_name}, {year}"))
}

pub fn file_stem(month_name: &str, year: i32) -> String {
    format!("{month_name}_{year}_Ledger")
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_domain::{EntryDetail, LedgerEntry};
    use chrono::{TimeZone, Utc};

    #[test]
    fn month_number_is_case_insensitive() {
        assert_eq!(month_number("February"), Some(2));
        assert_eq!(month_number("february"), Some(2));
        assert_eq!(month_number("Smarch"), None);
    }

    #[test]
    fn rows_are_in_ascending_date_order() {
        let mut building = Building::new("JR Arcade");
        let later = Utc.with_ymd_and_hms(2026, 2, 20, 15, 45, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap();
        building.entries.push(LedgerEntry::new(
            EntryKind::Income,
            EntryDetail::rent(vec![5]),
            10_000.0,
            later,
        ));
        building.entries.push(LedgerEntry::new(
            EntryKind::Expense,
            EntryDetail::FreeText("Paint".into()),
            400.0,
            earlier,
        ));

        let (rows, summary) = month_rows(&building, 2026, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "Feb 2 2026 9:00 AM");
        assert_eq!(rows[1].date, "Feb 20 2026 3:45 PM");
        assert_eq!(rows[0].category, "Other");
        assert_eq!(rows[1].category, "Office Rent");
        assert!((summary.net_profit_loss - 9_600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn export_dir_matches_naming_scheme() {
        let dir = export_dir(Path::new("/tmp/exports"), "February", 2026);
        assert_eq!(dir, Path::new("/tmp/exports/February, 2026"));
        assert_eq!(file_stem("February", 2026), "February_2026_Ledger");
    }
}
