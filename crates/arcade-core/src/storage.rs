use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use arcade_domain::Building;

use crate::CoreError;

/// Describes a persisted backup artifact for a building snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotBackupInfo {
    pub building: String,
    pub id: String,
    pub created_at: String,
    pub path: PathBuf,
}

/// Abstraction over persistence backends for building snapshots.
pub trait BuildingStorage: Send + Sync {
    fn save_building(&self, name: &str, building: &Building) -> Result<(), CoreError>;
    fn load_building(&self, name: &str) -> Result<Building, CoreError>;
    fn list_buildings(&self) -> Result<Vec<String>, CoreError>;
    fn delete_building(&self, name: &str) -> Result<(), CoreError>;
    fn save_building_to_path(&self, building: &Building, path: &Path) -> Result<(), CoreError>;
    fn load_building_from_path(&self, path: &Path) -> Result<Building, CoreError>;
    fn list_backups(&self, name: &str) -> Result<Vec<SnapshotBackupInfo>, CoreError>;
}

/// Detects dangling references and occupancy anomalies within a snapshot.
pub fn building_warnings(building: &Building) -> Vec<String> {
    let tenant_ids: HashSet<_> = building.tenants.iter().map(|t| t.id).collect();
    let user_ids: HashSet<_> = building.users.iter().map(|u| u.id).collect();
    let mut warnings = Vec::new();

    for office in &building.offices {
        if office.is_occupied != office.tenant_id.is_some() {
            warnings.push(format!(
                "office {} occupancy flag out of sync with tenant reference",
                office.number
            ));
        }
        if let Some(tenant_id) = office.tenant_id {
            if !tenant_ids.contains(&tenant_id) {
                warnings.push(format!(
                    "office {} references unknown tenant {}",
                    office.number, tenant_id
                ));
            }
        }
    }
    for tenant in &building.tenants {
        if !user_ids.contains(&tenant.user_id) {
            warnings.push(format!(
                "tenant {} references unknown user account {}",
                tenant.id, tenant.user_id
            ));
        }
    }
    for payment in &building.payments {
        if !tenant_ids.contains(&payment.tenant_id) {
            warnings.push(format!(
                "payment {} references unknown tenant {}",
                payment.id, payment.tenant_id
            ));
        }
    }
    warnings
}
