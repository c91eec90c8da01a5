//! Periodic adjustment job: rent reminders on the 5th, anniversary rent
//! increases with their notifications.
//!
//! The job mutates the in-memory snapshot only; the caller persists once at
//! the end, so a failure anywhere leaves the stored state untouched.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use arcade_domain::{Building, Notification, PaymentKind};

use crate::codec::format_amount;

/// Day of month on which unpaid-rent reminder notifications go out.
pub const REMINDER_DAY: u32 = 5;

/// Multiplier applied to the monthly rent on each lease anniversary.
pub const RENT_INCREASE_FACTOR: f64 = 1.10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentOutcome {
    pub notifications_sent: usize,
    pub rent_increases: usize,
}

pub struct AdjustmentJob;

impl AdjustmentJob {
    /// Runs one daily pass at `now`.
    ///
    /// The anniversary increase is applied at most once per tenant per year,
    /// keyed on `last_increase_applied_on` — running the job twice on the
    /// same anniversary does not compound the raise.
    pub fn run(building: &mut Building, now: DateTime<Utc>) -> AdjustmentOutcome {
        let today = now.date_naive();
        let mut outcome = AdjustmentOutcome::default();

        if today.day() == REMINDER_DAY {
            outcome.notifications_sent = Self::send_rent_reminders(building, now);
        }
        outcome.rent_increases = Self::apply_anniversary_increases(building, now);

        if outcome != AdjustmentOutcome::default() {
            building.touch();
        }
        info!(
            notifications = outcome.notifications_sent,
            increases = outcome.rent_increases,
            "adjustment job finished"
        );
        outcome
    }

    fn send_rent_reminders(building: &mut Building, now: DateTime<Utc>) -> usize {
        let mut queued = Vec::new();
        for record in &building.payments {
            if record.kind != PaymentKind::Rent || !record.is_unpaid() {
                continue;
            }
            let Some(tenant) = building.tenant(record.tenant_id) else {
                continue;
            };
            let message = format!(
                "Reminder: Your rent payment of Rs. {} due on {} is still Unpaid. \
                 Please process your payment.",
                format_amount(record.amount),
                record.due_date.format("%-m/%-d/%Y"),
            );
            queued.push(Notification::new(tenant.user_id, message, now));
        }
        let sent = queued.len();
        building.notifications.extend(queued);
        sent
    }

    fn apply_anniversary_increases(building: &mut Building, now: DateTime<Utc>) -> usize {
        let today = now.date_naive();
        let mut queued = Vec::new();
        let mut increases = 0;
        for tenant in &mut building.tenants {
            if !tenant.is_lease_anniversary(today) || tenant.increase_applied_in_year(today) {
                continue;
            }
            let new_rent = tenant.apply_rent_increase(RENT_INCREASE_FACTOR, today);
            let message = format!(
                "Notice: It's your lease anniversary! Your rent has been adjusted by 10% \
                 to Rs. {new_rent:.2}.",
            );
            queued.push(Notification::new(tenant.user_id, message, now));
            increases += 1;
        }
        building.notifications.extend(queued);
        increases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_domain::{PaymentRecord, PaymentStatus, Role, TenantProfile, UserAccount};
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    fn building_with_tenant(lease_start: NaiveDate) -> (Building, Uuid) {
        let mut building = Building::new("JR Arcade");
        let user = UserAccount::new("johndoe", "hash", Role::Tenant);
        let user_id = user.id;
        building.users.push(user);
        let tenant = TenantProfile::new(
            user_id,
            "John Doe",
            "0300-1234567",
            1000.0,
            2000.0,
            lease_start,
            lease_start + chrono::Duration::days(730),
        );
        let tenant_id = tenant.id;
        building.tenants.push(tenant);
        (building, tenant_id)
    }

    #[test]
    fn anniversary_raises_rent_by_ten_percent() {
        let lease_start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();

        let outcome = AdjustmentJob::run(&mut building, now);
        assert_eq!(outcome.rent_increases, 1);
        let rent = building.tenant(tenant_id).unwrap().monthly_rent;
        assert!((rent - 1100.0).abs() < 1e-9);
        assert_eq!(building.notifications.len(), 1);
        assert!(building.notifications[0].message.contains("Rs. 1100.00"));
    }

    // The source system applied the raise again on a second same-day run;
    // the increase is now keyed on last_increase_applied_on instead.
    #[test]
    fn second_run_on_the_same_day_does_not_compound() {
        let lease_start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();

        AdjustmentJob::run(&mut building, now);
        let outcome = AdjustmentJob::run(&mut building, now);
        assert_eq!(outcome.rent_increases, 0);
        let rent = building.tenant(tenant_id).unwrap().monthly_rent;
        assert!((rent - 1100.0).abs() < 1e-9);
    }

    #[test]
    fn increase_fires_again_the_following_year() {
        let lease_start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);

        AdjustmentJob::run(&mut building, Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap());
        AdjustmentJob::run(&mut building, Utc.with_ymd_and_hms(2027, 1, 1, 8, 0, 0).unwrap());
        let rent = building.tenant(tenant_id).unwrap().monthly_rent;
        assert!((rent - 1210.0).abs() < 1e-9);
    }

    #[test]
    fn no_increase_before_a_full_year() {
        let lease_start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 8, 0, 0).unwrap();

        let outcome = AdjustmentJob::run(&mut building, now);
        assert_eq!(outcome.rent_increases, 0);
        let rent = building.tenant(tenant_id).unwrap().monthly_rent;
        assert!((rent - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn reminders_go_out_only_on_the_fifth() {
        let lease_start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);
        building.payments.push(PaymentRecord::new(
            tenant_id,
            PaymentKind::Rent,
            1000.0,
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        ));

        let fourth = Utc.with_ymd_and_hms(2026, 2, 4, 8, 0, 0).unwrap();
        assert_eq!(AdjustmentJob::run(&mut building, fourth).notifications_sent, 0);

        let fifth = Utc.with_ymd_and_hms(2026, 2, 5, 8, 0, 0).unwrap();
        let outcome = AdjustmentJob::run(&mut building, fifth);
        assert_eq!(outcome.notifications_sent, 1);
        let note = building.notifications.last().unwrap();
        assert!(note.message.contains("Rs. 1000"));
        assert!(note.message.contains("2/1/2026"));
        assert!(!note.read);
    }

    #[test]
    fn paid_and_non_rent_records_get_no_reminder() {
        let lease_start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (mut building, tenant_id) = building_with_tenant(lease_start);
        let mut paid = PaymentRecord::new(
            tenant_id,
            PaymentKind::Rent,
            1000.0,
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        );
        paid.status = PaymentStatus::Paid;
        building.payments.push(paid);
        building.payments.push(PaymentRecord::new(
            tenant_id,
            PaymentKind::Water,
            300.0,
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        ));

        let fifth = Utc.with_ymd_and_hms(2026, 2, 5, 8, 0, 0).unwrap();
        assert_eq!(AdjustmentJob::run(&mut building, fifth).notifications_sent, 0);
    }
}
