//! Spreadsheet rendition of the monthly ledger, styled to match the
//! in-app table: dark header band, green income and red expense amounts.

use std::fs;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Color, DocProperties, Format, FormatAlign, Workbook};
use tracing::info;

use arcade_domain::{Building, EntryKind};

use crate::errors::TmsError;
use crate::export::{export_dir, file_stem, month_number, month_rows, COLUMN_HEADERS, MONTH_NAMES};

const HEADER_BG: Color = Color::RGB(0x1E293B);
const INCOME_COLOR: Color = Color::RGB(0x059669);
const EXPENSE_COLOR: Color = Color::RGB(0xDC2626);
const AMOUNT_NUM_FORMAT: &str = "Rs. #,##0.00";
const COLUMN_WIDTHS: [f64; 5] = [20.0, 15.0, 25.0, 30.0, 15.0];

pub fn export_month_xlsx(
    building: &Building,
    month_name: &str,
    year: i32,
    export_root: &Path,
) -> Result<PathBuf, TmsError> {
    let month = month_number(month_name)
        .ok_or_else(|| TmsError::InvalidInput(format!("unknown month name `{month_name}`")))?;
    let canonical = MONTH_NAMES[month as usize - 1];
    let (rows, summary) = month_rows(building, year, month);

    let dir = export_dir(export_root, canonical, year);
    fs::create_dir_all(&dir)?;
    let path = dir.join(format!("{}.xlsx", file_stem(canonical, year)));

    let mut workbook = Workbook::new();
    workbook.set_properties(&DocProperties::new().set_author("JR TMS Automated System"));
    let sheet = workbook.add_worksheet();
    sheet.set_name(format!("{canonical} {year} Ledger"))?;

    let header = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(HEADER_BG)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let centered = Format::new().set_align(FormatAlign::Center);
    let bold = Format::new().set_bold();
    let income_amount = Format::new()
        .set_bold()
        .set_font_color(INCOME_COLOR)
        .set_num_format(AMOUNT_NUM_FORMAT);
    let expense_amount = Format::new()
        .set_bold()
        .set_font_color(EXPENSE_COLOR)
        .set_num_format(AMOUNT_NUM_FORMAT);
    let plain_amount = Format::new().set_bold().set_num_format(AMOUNT_NUM_FORMAT);

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }
    for (col, title) in COLUMN_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &header)?;
    }

    let mut row_idx: u32 = 1;
    for row in &rows {
        sheet.write_string(row_idx, 0, &row.date)?;
        sheet.write_string_with_format(row_idx, 1, row.kind.to_string(), &centered)?;
        sheet.write_string(row_idx, 2, &row.category)?;
        sheet.write_string(row_idx, 3, &row.details)?;
        let amount_format = match row.kind {
            EntryKind::Income => &income_amount,
            EntryKind::Expense => &expense_amount,
        };
        sheet.write_number_with_format(row_idx, 4, row.amount, amount_format)?;
        row_idx += 1;
    }

    // Blank separator row, then the footer.
    row_idx += 1;
    sheet.write_string_with_format(row_idx, 3, "Total Income:", &bold)?;
    sheet.write_number_with_format(row_idx, 4, summary.income, &income_amount)?;
    row_idx += 1;
    sheet.write_string_with_format(row_idx, 3, "Total Expenses:", &bold)?;
    sheet.write_number_with_format(row_idx, 4, summary.expenses, &expense_amount)?;
    row_idx += 1;
    sheet.write_string_with_format(row_idx, 3, "Net Profit/Loss:", &bold)?;
    sheet.write_number_with_format(row_idx, 4, summary.net_profit_loss, &plain_amount)?;

    workbook.save(&path)?;
    info!(path = %path.display(), entries = rows.len(), "ledger spreadsheet written");
    Ok(path)
}
