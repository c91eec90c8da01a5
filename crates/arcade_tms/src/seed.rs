//! Snapshot seeding: admin account, the 15-office directory, and an
//! optional demo tenant for trying the system out.

use chrono::{NaiveDate, Utc};
use tracing::info;

use arcade_core::{CoreError, NewTenant, OfficeService, PaymentService, TenantService};
use arcade_domain::{
    Building, EntryDetail, EntryKind, LedgerEntry, Notification, PaymentKind, Role, UserAccount,
};

pub const ADMIN_USERNAME: &str = "admin";

/// Placeholder hash for seeded accounts. Real credentials are provisioned
/// by the external auth layer; `!` marks the account as locked until then.
const LOCKED_HASH: &str = "!";

/// What `seed` actually changed, for reporting back to the caller.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub offices_created: usize,
    pub admin_created: bool,
}

/// Idempotently prepares a snapshot: ensures the office directory exists
/// and that an admin account is present.
pub fn seed(building: &mut Building) -> SeedSummary {
    let mut summary = SeedSummary {
        offices_created: OfficeService::ensure_directory(building),
        ..SeedSummary::default()
    };

    if building.user_by_username(ADMIN_USERNAME).is_none() {
        building
            .users
            .push(UserAccount::new(ADMIN_USERNAME, LOCKED_HASH, Role::Admin));
        building.touch();
        summary.admin_created = true;
    }

    info!(
        offices_created = summary.offices_created,
        admin_created = summary.admin_created,
        "seed complete"
    );
    summary
}

/// Adds the demo tenant (John Doe in office 1) with a pending rent payment,
/// a welcome notification, and a deposit ledger entry. Skipped when the
/// username is already taken.
pub fn seed_demo_tenant(building: &mut Building) -> Result<bool, CoreError> {
    if building.user_by_username("johndoe").is_some() {
        return Ok(false);
    }

    let lease_start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    let lease_end = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
    let tenant_id = TenantService::create(
        building,
        NewTenant {
            username: "johndoe".into(),
            password_hash: LOCKED_HASH.into(),
            name: "John Doe".into(),
            phone: "555-0199".into(),
            office_numbers: vec![1],
            lease_start,
            lease_end,
            monthly_rent: 1500.0,
            security_deposit: 3000.0,
        },
    )?;

    let due = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    PaymentService::create(building, tenant_id, PaymentKind::Rent, 1500.0, due)?;

    let now = Utc::now();
    let user_id = building
        .tenant(tenant_id)
        .map(|t| t.user_id)
        .ok_or(CoreError::TenantNotFound(tenant_id))?;
    building.notifications.push(Notification::new(
        user_id,
        "Welcome to JR Arcade! Your lease starts on Jan 1st, 2026.",
        now,
    ));
    building.entries.push(LedgerEntry::new(
        EntryKind::Income,
        EntryDetail::FreeText("Security Deposit for Office 1 - John Doe".into()),
        3000.0,
        now,
    ));
    building.touch();

    info!(%tenant_id, "demo tenant seeded");
    Ok(true)
}
