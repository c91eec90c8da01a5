//! Tenant lifecycle: credential + profile + office assignment as one unit.
//!
//! Each mutation validates everything first and only then touches the
//! snapshot, so a rejected request leaves no partial state.

use chrono::NaiveDate;
use uuid::Uuid;

use arcade_domain::{Building, Role, TenantProfile, UserAccount};

use crate::CoreError;

/// Input for creating a tenant together with their login credential.
#[derive(Debug, Clone)]
pub struct NewTenant {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub office_numbers: Vec<u32>,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub monthly_rent: f64,
    pub security_deposit: f64,
}

/// Partial update for an existing tenant. `office_numbers = Some(..)`
/// replaces the full office assignment.
#[derive(Debug, Clone, Default)]
pub struct TenantUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub office_numbers: Option<Vec<u32>>,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub monthly_rent: Option<f64>,
    pub security_deposit: Option<f64>,
}

pub struct TenantService;

impl TenantService {
    pub fn create(building: &mut Building, new: NewTenant) -> Result<Uuid, CoreError> {
        if new.office_numbers.is_empty() {
            return Err(CoreError::Validation(
                "at least one office number must be provided".into(),
            ));
        }
        if building.user_by_username(&new.username).is_some() {
            return Err(CoreError::Validation(format!(
                "username `{}` already exists",
                new.username
            )));
        }
        Self::check_offices_free(building, &new.office_numbers, None)?;

        let user = UserAccount::new(new.username, new.password_hash, Role::Tenant);
        let user_id = user.id;
        building.users.push(user);

        let tenant = TenantProfile::new(
            user_id,
            new.name,
            new.phone,
            new.monthly_rent,
            new.security_deposit,
            new.lease_start,
            new.lease_end,
        );
        let tenant_id = tenant.id;
        building.tenants.push(tenant);

        for number in &new.office_numbers {
            if let Some(office) = building.office_by_number_mut(*number) {
                office.assign(tenant_id);
            }
        }
        building.touch();
        Ok(tenant_id)
    }

    pub fn update(building: &mut Building, id: Uuid, update: TenantUpdate) -> Result<(), CoreError> {
        if building.tenant(id).is_none() {
            return Err(CoreError::TenantNotFound(id));
        }
        if let Some(numbers) = &update.office_numbers {
            if numbers.is_empty() {
                return Err(CoreError::Validation(
                    "at least one office number must be provided".into(),
                ));
            }
            Self::check_offices_free(building, numbers, Some(id))?;
        }

        let tenant = building.tenant_mut(id).ok_or(CoreError::TenantNotFound(id))?;
        if let Some(name) = update.name {
            tenant.name = name;
        }
        if let Some(phone) = update.phone {
            tenant.phone = phone;
        }
        if let Some(lease_start) = update.lease_start {
            tenant.lease_start = lease_start;
        }
        if let Some(lease_end) = update.lease_end {
            tenant.lease_end = lease_end;
        }
        if let Some(monthly_rent) = update.monthly_rent {
            tenant.monthly_rent = monthly_rent;
        }
        if let Some(security_deposit) = update.security_deposit {
            tenant.security_deposit = security_deposit;
        }

        if let Some(numbers) = update.office_numbers {
            Self::release_offices_of(building, id);
            for number in numbers {
                if let Some(office) = building.office_by_number_mut(number) {
                    office.assign(id);
                }
            }
        }
        building.touch();
        Ok(())
    }

    /// Deletes the tenant, freeing their offices and dropping their payment
    /// records and login credential.
    pub fn remove(building: &mut Building, id: Uuid) -> Result<(), CoreError> {
        let tenant = building.tenant(id).ok_or(CoreError::TenantNotFound(id))?;
        let user_id = tenant.user_id;

        Self::release_offices_of(building, id);
        building.payments.retain(|p| p.tenant_id != id);
        building.tenants.retain(|t| t.id != id);
        building.users.retain(|u| u.id != user_id);
        building.touch();
        Ok(())
    }

    fn release_offices_of(building: &mut Building, tenant_id: Uuid) {
        for office in &mut building.offices {
            if office.tenant_id == Some(tenant_id) {
                office.release();
            }
        }
    }

    /// Rejects numbers that name no office or an office occupied by someone
    /// other than `allow_tenant`.
    fn check_offices_free(
        building: &Building,
        numbers: &[u32],
        allow_tenant: Option<Uuid>,
    ) -> Result<(), CoreError> {
        let mut occupied = Vec::new();
        for number in numbers {
            let office = building
                .office_by_number(*number)
                .ok_or(CoreError::OfficeNotFound(*number))?;
            if office.is_occupied && office.tenant_id != allow_tenant {
                occupied.push(office.number.to_string());
            }
        }
        if !occupied.is_empty() {
            return Err(CoreError::Validation(format!(
                "offices {} are already occupied",
                occupied.join(", ")
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OfficeService;

    fn seeded_building() -> Building {
        let mut building = Building::new("JR Arcade");
        OfficeService::ensure_directory(&mut building);
        building
    }

    fn new_tenant(username: &str, offices: Vec<u32>) -> NewTenant {
        NewTenant {
            username: username.into(),
            password_hash: "hash".into(),
            name: "John Doe".into(),
            phone: "0300-1234567".into(),
            office_numbers: offices,
            lease_start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            lease_end: NaiveDate::from_ymd_opt(2027, 1, 1).unwrap(),
            monthly_rent: 1500.0,
            security_deposit: 3000.0,
        }
    }

    #[test]
    fn create_assigns_offices_and_credential() {
        let mut building = seeded_building();
        let id = TenantService::create(&mut building, new_tenant("johndoe", vec![1, 2])).unwrap();

        let held: Vec<u32> = building.offices_of_tenant(id).iter().map(|o| o.number).collect();
        assert_eq!(held, vec![1, 2]);
        assert!(building.user_by_username("johndoe").is_some());
        let tenant = building.tenant(id).unwrap();
        assert!(building.user(tenant.user_id).is_some());
    }

    #[test]
    fn create_rejects_occupied_offices_without_mutating() {
        let mut building = seeded_building();
        TenantService::create(&mut building, new_tenant("first", vec![3])).unwrap();

        let err = TenantService::create(&mut building, new_tenant("second", vec![3, 4])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains('3')));
        assert_eq!(building.tenants.len(), 1);
        assert_eq!(building.users.len(), 1);
        assert!(!building.office_by_number(4).unwrap().is_occupied);
    }

    #[test]
    fn create_rejects_duplicate_username() {
        let mut building = seeded_building();
        TenantService::create(&mut building, new_tenant("johndoe", vec![1])).unwrap();
        let err = TenantService::create(&mut building, new_tenant("johndoe", vec![2])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn update_replaces_the_full_office_assignment() {
        let mut building = seeded_building();
        let id = TenantService::create(&mut building, new_tenant("johndoe", vec![1, 2])).unwrap();

        let update = TenantUpdate {
            office_numbers: Some(vec![2, 5]),
            monthly_rent: Some(1800.0),
            ..TenantUpdate::default()
        };
        TenantService::update(&mut building, id, update).unwrap();

        let held: Vec<u32> = building.offices_of_tenant(id).iter().map(|o| o.number).collect();
        assert_eq!(held, vec![2, 5]);
        assert!(!building.office_by_number(1).unwrap().is_occupied);
        assert!((building.tenant(id).unwrap().monthly_rent - 1800.0).abs() < f64::EPSILON);
    }

    #[test]
    fn update_rejects_offices_held_by_another_tenant() {
        let mut building = seeded_building();
        let _first = TenantService::create(&mut building, new_tenant("first", vec![1])).unwrap();
        let second = TenantService::create(&mut building, new_tenant("second", vec![2])).unwrap();

        let update = TenantUpdate {
            office_numbers: Some(vec![1]),
            ..TenantUpdate::default()
        };
        let err = TenantService::update(&mut building, second, update).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        // Holder keeps office 1; the failed update released nothing.
        let held: Vec<u32> = building.offices_of_tenant(second).iter().map(|o| o.number).collect();
        assert_eq!(held, vec![2]);
    }

    #[test]
    fn remove_frees_offices_and_drops_records() {
        let mut building = seeded_building();
        let id = TenantService::create(&mut building, new_tenant("johndoe", vec![1])).unwrap();

        TenantService::remove(&mut building, id).unwrap();
        assert!(building.tenants.is_empty());
        assert!(building.users.is_empty());
        assert!(!building.office_by_number(1).unwrap().is_occupied);
    }

    #[test]
    fn remove_unknown_tenant_is_not_found() {
        let mut building = seeded_building();
        let err = TenantService::remove(&mut building, Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::TenantNotFound(_)));
    }

    #[test]
    fn unknown_office_number_is_rejected() {
        let mut building = seeded_building();
        let err = TenantService::create(&mut building, new_tenant("johndoe", vec![16])).unwrap_err();
        assert!(matches!(err, CoreError::OfficeNotFound(16)));
    }
}
