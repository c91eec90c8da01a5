//! Rent compliance scanner: which occupied offices have no paid-rent ledger
//! entry this month.
//!
//! Read-only derived computation, re-run on every request. With at most
//! fifteen offices there is nothing worth caching.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use arcade_domain::{month_bounds, month_label, Building, EntryDetail, EntryKind};

/// Day of month from which the unpaid report counts as an alert.
pub const ALERT_DAY: u32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
/// One tenant with at least one unpaid occupied office this month.
pub struct UnpaidTenantGroup {
    pub tenant_name: String,
    pub phone: String,
    pub unpaid_offices: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentComplianceReport {
    /// Human-readable month label, e.g. `"January 2026"`.
    pub month: String,
    pub unpaid_tenants: Vec<UnpaidTenantGroup>,
    pub total_unpaid_groups: usize,
    pub is_alert_day: bool,
}

pub struct RentComplianceScanner;

impl RentComplianceScanner {
    /// Cross-references occupied offices against the paid-rent entries of the
    /// month containing `today`. Does not mutate any record.
    pub fn scan(building: &Building, today: NaiveDate) -> RentComplianceReport {
        let paid = Self::paid_office_numbers(building, today);

        let mut groups: Vec<UnpaidTenantGroup> = Vec::new();
        let mut index_by_tenant: HashMap<Uuid, usize> = HashMap::new();

        for office in building.occupied_offices() {
            if paid.contains(&office.number) {
                continue;
            }
            let Some(tenant_id) = office.tenant_id else {
                continue;
            };
            let Some(tenant) = building.tenant(tenant_id) else {
                continue;
            };
            let index = *index_by_tenant.entry(tenant_id).or_insert_with(|| {
                groups.push(UnpaidTenantGroup {
                    tenant_name: tenant.name.clone(),
                    phone: tenant.phone.clone(),
                    unpaid_offices: Vec::new(),
                });
                groups.len() - 1
            });
            groups[index].unpaid_offices.push(office.number);
        }

        let total_unpaid_groups = groups.len();
        RentComplianceReport {
            month: month_label(today),
            unpaid_tenants: groups,
            total_unpaid_groups,
            is_alert_day: today.day() >= ALERT_DAY,
        }
    }

    /// Union of office numbers across this month's income rent entries.
    fn paid_office_numbers(building: &Building, today: NaiveDate) -> BTreeSet<u32> {
        let (start, end) = month_bounds(today);
        let mut paid = BTreeSet::new();
        for entry in &building.entries {
            if entry.kind != EntryKind::Income {
                continue;
            }
            let day = entry.date.date_naive();
            if day < start || day > end {
                continue;
            }
            if let EntryDetail::Rent { offices, .. } = &entry.detail {
                paid.extend(offices.iter().copied());
            }
        }
        paid
    }
}
