//! CSV rendition of the monthly ledger. Fields never carry embedded
//! commas (they are stripped from details), so the output stays readable
//! in plain text editors as well as spreadsheet tools.

use std::fs;
use std::path::{Path, PathBuf};

use csv::Writer;
use tracing::info;

use arcade_domain::Building;

use crate::errors::TmsError;
use crate::export::{export_dir, file_stem, month_number, month_rows, COLUMN_HEADERS, MONTH_NAMES};

pub fn export_month_csv(
    building: &Building,
    month_name: &str,
    year: i32,
    export_root: &Path,
) -> Result<PathBuf, TmsError> {
    let month = month_number(month_name)
        .ok_or_else(|| TmsError::InvalidInput(format!("unknown month name `{month_name}`")))?;
    let canonical = MONTH_NAMES[month as usize - 1];
    let (rows, summary) = month_rows(building, year, month);

    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(COLUMN_HEADERS)?;
    for row in &rows {
        let kind = row.kind.to_string();
        let details = row.details.replace(',', " ");
        let amount = format!("{:.2}", row.amount);
        writer.write_record([
            row.date.as_str(),
            kind.as_str(),
            row.category.as_str(),
            details.as_str(),
            amount.as_str(),
        ])?;
    }
    let mut output = into_bytes(writer)?;

    // Blank line between the table and the footer.
    output.push(b'\n');

    let mut footer = Writer::from_writer(Vec::new());
    let income = format!("{:.2}", summary.income);
    let expenses = format!("{:.2}", summary.expenses);
    let net = format!("{:.2}", summary.net_profit_loss);
    footer.write_record(["", "", "", "Total Income:", income.as_str()])?;
    footer.write_record(["", "", "", "Total Expenses:", expenses.as_str()])?;
    footer.write_record(["", "", "", "Net Profit/Loss:", net.as_str()])?;
    output.extend(into_bytes(footer)?);

    let dir = export_dir(export_root, canonical, year);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.csv", file_stem(canonical, year)));
    fs::write(&path, &output)?;

    info!(path = %path.display(), entries = rows.len(), "ledger CSV written");
    Ok(path)
}

fn into_bytes(writer: Writer<Vec<u8>>) -> Result<Vec<u8>, TmsError> {
    writer
        .into_inner()
        .map_err(|err| TmsError::Export(err.to_string()))
}
