//! Ledger entries and their structured category detail.
//!
//! Historically the category, office list, and water charge were packed into
//! a single free-text description column and re-parsed by string prefix on
//! every read. The detail is now a tagged variant stored alongside the entry;
//! the legacy description string exists only at serialization boundaries
//! (see `arcade_core::codec`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{EntryKind, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Fixed expense/income categories recorded verbatim in the ledger.
pub enum PresetCategory {
    SnookerClub,
    Saloon,
    OfficeManagement,
    RepairingAndMaintenance,
    Tax,
    StaffSalary,
}

impl PresetCategory {
    pub const ALL: [PresetCategory; 6] = [
        PresetCategory::SnookerClub,
        PresetCategory::Saloon,
        PresetCategory::OfficeManagement,
        PresetCategory::RepairingAndMaintenance,
        PresetCategory::Tax,
        PresetCategory::StaffSalary,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PresetCategory::SnookerClub => "Snooker Club",
            PresetCategory::Saloon => "Saloon",
            PresetCategory::OfficeManagement => "Office Management",
            PresetCategory::RepairingAndMaintenance => "Repairing and Maintenance",
            PresetCategory::Tax => "Tax",
            PresetCategory::StaffSalary => "Staff Salary",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.label() == label)
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Sub-details of the "Office Utility" expense category.
pub enum OfficeUtilitySub {
    Tea,
    Meal,
    Cigarette,
    Water,
    Entertainment,
    Other(String),
}

impl OfficeUtilitySub {
    pub const FIXED: [&'static str; 5] = ["Tea", "Meal", "Cigarette", "Water", "Entertainment"];

    pub fn label(&self) -> &str {
        match self {
            OfficeUtilitySub::Tea => "Tea",
            OfficeUtilitySub::Meal => "Meal",
            OfficeUtilitySub::Cigarette => "Cigarette",
            OfficeUtilitySub::Water => "Water",
            OfficeUtilitySub::Entertainment => "Entertainment",
            OfficeUtilitySub::Other(text) => text,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Tea" => OfficeUtilitySub::Tea,
            "Meal" => OfficeUtilitySub::Meal,
            "Cigarette" => OfficeUtilitySub::Cigarette,
            "Water" => OfficeUtilitySub::Water,
            "Entertainment" => OfficeUtilitySub::Entertainment,
            other => OfficeUtilitySub::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Sub-details of the "Utility Bills" expense category.
pub enum UtilityBillSub {
    Electricity,
    Water,
    Other(String),
}

impl UtilityBillSub {
    pub const FIXED: [&'static str; 2] = ["Electricity Bill", "Water Bill"];

    pub fn label(&self) -> &str {
        match self {
            UtilityBillSub::Electricity => "Electricity Bill",
            UtilityBillSub::Water => "Water Bill",
            UtilityBillSub::Other(text) => text,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Electricity Bill" => UtilityBillSub::Electricity,
            "Water Bill" => UtilityBillSub::Water,
            other => UtilityBillSub::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Structured category detail carried by every ledger entry.
pub enum EntryDetail {
    Preset(PresetCategory),
    /// Rent collected for one or more offices. A water charge, when present,
    /// has already been folded into the entry's stored total amount.
    Rent {
        offices: Vec<u32>,
        water_charge: Option<f64>,
    },
    OfficeUtility(OfficeUtilitySub),
    UtilityBills(UtilityBillSub),
    FreeText(String),
}

impl EntryDetail {
    pub fn rent(offices: Vec<u32>) -> Self {
        EntryDetail::Rent {
            offices,
            water_charge: None,
        }
    }

    pub fn rent_with_water(offices: Vec<u32>, water_charge: f64) -> Self {
        EntryDetail::Rent {
            offices,
            water_charge: (water_charge > 0.0).then_some(water_charge),
        }
    }

    /// Water charge folded into the entry total, zero when absent.
    pub fn water_charge(&self) -> f64 {
        match self {
            EntryDetail::Rent {
                water_charge: Some(water),
                ..
            } => *water,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One income or expense record in the daily accounting log.
pub struct LedgerEntry {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub kind: EntryKind,
    pub detail: EntryDetail,
    /// Total amount. For rent entries this includes any water charge.
    pub amount: f64,
}

impl LedgerEntry {
    /// Builds an entry from a base amount, folding any water charge carried
    /// by the detail into the stored total.
    pub fn new(kind: EntryKind, detail: EntryDetail, base_amount: f64, date: DateTime<Utc>) -> Self {
        let amount = base_amount + detail.water_charge();
        Self {
            id: Uuid::new_v4(),
            date,
            kind,
            detail,
            amount,
        }
    }

    /// The amount with any water charge subtracted back out.
    pub fn base_amount(&self) -> f64 {
        self.amount - self.detail.water_charge()
    }
}

impl Identifiable for LedgerEntry {
    fn id(&self) -> Uuid {
        self.id
    }
}
