//! Encoding and decoding of ledger entry details.
//!
//! The legacy data model packed category, office numbers, and an optional
//! water charge into one free-text description column, e.g.
//! `"Rent - Office 5, 6 - Water 2000"`. That string form survives only here:
//! [`encode`] produces it for display and exports, [`decode`] parses legacy
//! or hand-entered text back into a structured [`EntryDetail`].
//!
//! Known limitation carried over from the legacy encoding: free text that
//! happens to equal a preset category label decodes as that preset.

use arcade_domain::{EntryDetail, OfficeUtilitySub, PresetCategory, UtilityBillSub};

const RENT_PREFIX: &str = "Rent - Office ";
const WATER_SEPARATOR: &str = " - Water ";
const OFFICE_UTILITY_PREFIX: &str = "Office Utility - ";
const UTILITY_BILLS_PREFIX: &str = "Utility Bills - ";

/// Renders a structured detail into its legacy description string.
pub fn encode(detail: &EntryDetail) -> String {
    match detail {
        EntryDetail::Preset(preset) => preset.label().to_string(),
        EntryDetail::Rent {
            offices,
            water_charge,
        } => {
            let mut description = format!("{}{}", RENT_PREFIX, join_offices(offices));
            if let Some(water) = water_charge {
                description.push_str(WATER_SEPARATOR);
                description.push_str(&format_amount(*water));
            }
            description
        }
        EntryDetail::OfficeUtility(sub) => format!("{}{}", OFFICE_UTILITY_PREFIX, sub.label()),
        EntryDetail::UtilityBills(sub) => format!("{}{}", UTILITY_BILLS_PREFIX, sub.label()),
        EntryDetail::FreeText(text) => text.clone(),
    }
}

/// Parses a description string back into a structured detail.
///
/// Recognition order: rent prefix, office-utility prefix, utility-bills
/// prefix, exact preset match, free-text fallback. Never fails; unrecognized
/// text lands in [`EntryDetail::FreeText`].
pub fn decode(description: &str) -> EntryDetail {
    if let Some(stripped) = description.strip_prefix(RENT_PREFIX) {
        return decode_rent(stripped);
    }
    if let Some(sub) = description.strip_prefix(OFFICE_UTILITY_PREFIX) {
        return EntryDetail::OfficeUtility(OfficeUtilitySub::from_label(sub));
    }
    if let Some(sub) = description.strip_prefix(UTILITY_BILLS_PREFIX) {
        return EntryDetail::UtilityBills(UtilityBillSub::from_label(sub));
    }
    if let Some(preset) = PresetCategory::from_label(description) {
        return EntryDetail::Preset(preset);
    }
    EntryDetail::FreeText(description.to_string())
}

/// Category and details columns for the CSV/XLSX export rows. All three
/// presentation paths (table, CSV, spreadsheet) share this single mapping.
pub fn export_columns(detail: &EntryDetail) -> (String, String) {
    match detail {
        EntryDetail::Preset(preset) => (preset.label().to_string(), "-".to_string()),
        EntryDetail::Rent {
            offices,
            water_charge,
        } => {
            let details = match water_charge {
                Some(water) => format!(
                    "Office(s) {} | Water Charges: Rs. {}",
                    join_offices(offices),
                    format_amount(*water)
                ),
                None => format!("Office(s) {}", join_offices(offices)),
            };
            ("Office Rent".to_string(), details)
        }
        EntryDetail::OfficeUtility(sub) => ("Office Utility".to_string(), sub.label().to_string()),
        EntryDetail::UtilityBills(sub) => ("Utility Bills".to_string(), sub.label().to_string()),
        EntryDetail::FreeText(text) => ("Other".to_string(), text.clone()),
    }
}

/// Formats an amount the way the legacy descriptions did: no trailing
/// decimals for whole values.
pub fn format_amount(value: f64) -> String {
    if value.fract().abs() < f64::EPSILON {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

fn join_offices(offices: &[u32]) -> String {
    offices
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn decode_rent(stripped: &str) -> EntryDetail {
    let (office_part, water_part) = match stripped.split_once(WATER_SEPARATOR) {
        Some((offices, water)) => (offices, Some(water)),
        None => (stripped, None),
    };
    let offices: Vec<u32> = office_part
        .split(',')
        .filter_map(|n| n.trim().parse().ok())
        .collect();
    let water_charge = water_part
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|water| *water > 0.0);
    EntryDetail::Rent {
        offices,
        water_charge,
    }
}
