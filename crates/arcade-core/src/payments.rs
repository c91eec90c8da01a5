//! Payment record lifecycle. Status transitions write matching ledger
//! entries: UNPAID→PAID logs income, PAID→UNPAID logs a reversing expense.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use arcade_domain::{
    Building, EntryDetail, EntryKind, LedgerEntry, PaymentKind, PaymentRecord, PaymentStatus,
};

use crate::CoreError;

pub struct PaymentService;

impl PaymentService {
    pub fn create(
        building: &mut Building,
        tenant_id: Uuid,
        kind: PaymentKind,
        amount: f64,
        due_date: NaiveDate,
    ) -> Result<Uuid, CoreError> {
        if building.tenant(tenant_id).is_none() {
            return Err(CoreError::TenantNotFound(tenant_id));
        }
        if amount <= 0.0 {
            return Err(CoreError::Validation(
                "payment amount must be positive".into(),
            ));
        }
        let record = PaymentRecord::new(tenant_id, kind, amount, due_date);
        let id = record.id;
        building.payments.push(record);
        building.touch();
        Ok(id)
    }

    /// Transitions a payment's status, logging the corresponding ledger
    /// entry. A no-op transition writes nothing.
    pub fn set_status(
        building: &mut Building,
        payment_id: Uuid,
        status: PaymentStatus,
        now: DateTime<Utc>,
    ) -> Result<(), CoreError> {
        let record = building
            .payment(payment_id)
            .ok_or(CoreError::PaymentNotFound(payment_id))?
            .clone();

        let entry = match (record.status, status) {
            (PaymentStatus::Unpaid, PaymentStatus::Paid) => Some(LedgerEntry::new(
                EntryKind::Income,
                EntryDetail::FreeText(format!(
                    "{} Payment from Tenant ID {}",
                    record.kind, record.tenant_id
                )),
                record.amount,
                now,
            )),
            (PaymentStatus::Paid, PaymentStatus::Unpaid) => Some(LedgerEntry::new(
                EntryKind::Expense,
                EntryDetail::FreeText(format!(
                    "REVERSAL: {} Payment reversed for Tenant ID {}",
                    record.kind, record.tenant_id
                )),
                record.amount,
                now,
            )),
            _ => None,
        };

        let record = building
            .payment_mut(payment_id)
            .ok_or(CoreError::PaymentNotFound(payment_id))?;
        record.status = status;
        if let Some(entry) = entry {
            building.entries.push(entry);
        }
        building.touch();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_domain::{Role, TenantProfile, UserAccount};

    fn building_with_tenant() -> (Building, Uuid) {
        let mut building = Building::new("JR Arcade");
        let user = UserAccount::new("johndoe", "hash", Role::Tenant);
        let user_id = user.id;
        building.users.push(user);
        let tenant = TenantProfile::new(
            user_id,
            "John Doe",
            "0300-1234567",
            1500.0,
            3000.0,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
        );
        let tenant_id = tenant.id;
        building.tenants.push(tenant);
        (building, tenant_id)
    }

    #[test]
    fn paying_logs_an_income_entry() {
        let (mut building, tenant_id) = building_with_tenant();
        let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let id = PaymentService::create(&mut building, tenant_id, PaymentKind::Rent, 1500.0, due)
            .unwrap();

        PaymentService::set_status(&mut building, id, PaymentStatus::Paid, Utc::now()).unwrap();
        assert_eq!(building.entries.len(), 1);
        let entry = &building.entries[0];
        assert_eq!(entry.kind, EntryKind::Income);
        assert!((entry.amount - 1500.0).abs() < f64::EPSILON);
        assert!(matches!(
            &entry.detail,
            EntryDetail::FreeText(text) if text.starts_with("RENT Payment from Tenant ID")
        ));
    }

    #[test]
    fn unpaying_logs_a_reversing_expense() {
        let (mut building, tenant_id) = building_with_tenant();
        let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let id = PaymentService::create(&mut building, tenant_id, PaymentKind::Security, 3000.0, due)
            .unwrap();

        PaymentService::set_status(&mut building, id, PaymentStatus::Paid, Utc::now()).unwrap();
        PaymentService::set_status(&mut building, id, PaymentStatus::Unpaid, Utc::now()).unwrap();

        assert_eq!(building.entries.len(), 2);
        let reversal = &building.entries[1];
        assert_eq!(reversal.kind, EntryKind::Expense);
        assert!(matches!(
            &reversal.detail,
            EntryDetail::FreeText(text) if text.starts_with("REVERSAL: SECURITY Payment reversed")
        ));
    }

    #[test]
    fn same_status_update_writes_no_entry() {
        let (mut building, tenant_id) = building_with_tenant();
        let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let id = PaymentService::create(&mut building, tenant_id, PaymentKind::Rent, 1500.0, due)
            .unwrap();

        PaymentService::set_status(&mut building, id, PaymentStatus::Unpaid, Utc::now()).unwrap();
        assert!(building.entries.is_empty());
    }

    #[test]
    fn create_validates_tenant_and_amount() {
        let (mut building, tenant_id) = building_with_tenant();
        let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        assert!(matches!(
            PaymentService::create(&mut building, Uuid::new_v4(), PaymentKind::Rent, 100.0, due),
            Err(CoreError::TenantNotFound(_))
        ));
        assert!(matches!(
            PaymentService::create(&mut building, tenant_id, PaymentKind::Rent, 0.0, due),
            Err(CoreError::Validation(_))
        ));
    }
}
