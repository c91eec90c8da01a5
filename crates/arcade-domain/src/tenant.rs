//! Tenant profiles: the lessee's business record, distinct from the login credential.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, NamedEntity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub phone: String,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    /// Date the last anniversary rent increase was applied. Guards against
    /// the increase firing twice in the same year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_increase_applied_on: Option<NaiveDate>,
}

impl TenantProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: Uuid,
        name: impl Into<String>,
        phone: impl Into<String>,
        monthly_rent: f64,
        security_deposit: f64,
        lease_start: NaiveDate,
        lease_end: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            phone: phone.into(),
            monthly_rent,
            security_deposit,
            lease_start,
            lease_end,
            last_increase_applied_on: None,
        }
    }

    /// True when `today` matches the lease-start month and day and at least
    /// one full year has elapsed. Month+day equality is literal: a February 29
    /// lease start only matches in leap years.
    pub fn is_lease_anniversary(&self, today: NaiveDate) -> bool {
        today.month() == self.lease_start.month()
            && today.day() == self.lease_start.day()
            && today.year() > self.lease_start.year()
    }

    /// True when an anniversary increase has already been recorded for the
    /// year of `today`.
    pub fn increase_applied_in_year(&self, today: NaiveDate) -> bool {
        self.last_increase_applied_on
            .map(|applied| applied.year() == today.year())
            .unwrap_or(false)
    }

    /// Multiplies the monthly rent by `factor` and records the application
    /// date. Returns the new rent.
    pub fn apply_rent_increase(&mut self, factor: f64, today: NaiveDate) -> f64 {
        self.monthly_rent *= factor;
        self.last_increase_applied_on = Some(today);
        self.monthly_rent
    }
}

impl Identifiable for TenantProfile {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for TenantProfile {
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(lease_start: NaiveDate) -> TenantProfile {
        TenantProfile::new(
            Uuid::new_v4(),
            "John Doe",
            "0300-1234567",
            1000.0,
            2000.0,
            lease_start,
            lease_start + chrono::Duration::days(365),
        )
    }

    #[test]
    fn anniversary_requires_full_year() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let t = tenant(start);
        assert!(!t.is_lease_anniversary(start));
        assert!(t.is_lease_anniversary(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        assert!(!t.is_lease_anniversary(NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()));
        assert!(!t.is_lease_anniversary(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()));
    }

    #[test]
    fn leap_day_lease_only_matches_leap_years() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let t = tenant(start);
        assert!(!t.is_lease_anniversary(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
        assert!(t.is_lease_anniversary(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()));
    }

    #[test]
    fn increase_records_application_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut t = tenant(start);
        let new_rent = t.apply_rent_increase(1.10, today);
        assert!((new_rent - 1100.0).abs() < f64::EPSILON);
        assert!(t.increase_applied_in_year(today));
        assert!(!t.increase_applied_in_year(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()));
    }
}
