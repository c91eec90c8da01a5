use chrono::{TimeZone, Utc};
use tempfile::tempdir;

use arcade_domain::{Building, EntryDetail, EntryKind, LedgerEntry};
use arcade_tms::export::csv::export_month_csv;
use arcade_tms::export::excel::export_month_xlsx;

fn building_with_february_entries() -> Building {
    let mut building = Building::new("JR Arcade");
    building.entries.push(LedgerEntry::new(
        EntryKind::Income,
        EntryDetail::rent_with_water(vec![5, 6], 2000.0),
        10_000.0,
        Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap(),
    ));
    building.entries.push(LedgerEntry::new(
        EntryKind::Expense,
        EntryDetail::FreeText("Paint, brushes".into()),
        400.0,
        Utc.with_ymd_and_hms(2026, 2, 20, 15, 45, 0).unwrap(),
    ));
    // Out of range, must not appear in a February export.
    building.entries.push(LedgerEntry::new(
        EntryKind::Income,
        EntryDetail::FreeText("March income".into()),
        999.0,
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
    ));
    building
}

#[test]
fn csv_export_writes_rows_and_footer() {
    let dir = tempdir().expect("tempdir");
    let building = building_with_february_entries();

    let path = export_month_csv(&building, "February", 2026, dir.path()).expect("export");
    assert!(path.ends_with("February, 2026/February_2026_Ledger.csv"));

    let content = std::fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Type,Category / Source,Details,Amount (Rs)");
    assert_eq!(
        lines[1],
        "Feb 2 2026 9:00 AM,INCOME,Office Rent,Office(s) 5  6 | Water Charges: Rs. 2000,12000.00"
    );
    assert_eq!(lines[2], "Feb 20 2026 3:45 PM,EXPENSE,Other,Paint  brushes,400.00");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], ",,,Total Income:,12000.00");
    assert_eq!(lines[5], ",,,Total Expenses:,400.00");
    assert_eq!(lines[6], ",,,Net Profit/Loss:,11600.00");
    assert!(!content.contains("March income"));
}

#[test]
fn csv_export_accepts_lowercase_month_names() {
    let dir = tempdir().expect("tempdir");
    let building = building_with_february_entries();

    let path = export_month_csv(&building, "february", 2026, dir.path()).expect("export");
    assert!(path.ends_with("February, 2026/February_2026_Ledger.csv"));
}

#[test]
fn csv_export_rejects_unknown_month() {
    let dir = tempdir().expect("tempdir");
    let building = Building::new("JR Arcade");
    assert!(export_month_csv(&building, "Smarch", 2026, dir.path()).is_err());
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let dir = tempdir().expect("tempdir");
    let building = building_with_february_entries();

    let path = export_month_xlsx(&building, "February", 2026, dir.path()).expect("export");
    assert!(path.ends_with("February, 2026/February_2026_Ledger.xlsx"));

    // xlsx files are zip archives.
    let bytes = std::fs::read(&path).expect("read");
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn empty_month_still_produces_a_report() {
    let dir = tempdir().expect("tempdir");
    let building = Building::new("JR Arcade");

    let path = export_month_csv(&building, "January", 2026, dir.path()).expect("export");
    let content = std::fs::read_to_string(&path).expect("read");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Type,Category / Source,Details,Amount (Rs)");
    assert_eq!(lines[2], ",,,Total Income:,0.00");
}
