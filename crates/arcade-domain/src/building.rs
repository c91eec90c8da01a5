//! The building aggregate: the unit of persistence holding every record
//! collection for one property.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    entry::LedgerEntry, notification::Notification, office::Office, payment::PaymentRecord,
    tenant::TenantProfile, user::UserAccount,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub users: Vec<UserAccount>,
    #[serde(default)]
    pub offices: Vec<Office>,
    #[serde(default)]
    pub tenants: Vec<TenantProfile>,
    #[serde(default)]
    pub payments: Vec<PaymentRecord>,
    #[serde(default)]
    pub entries: Vec<LedgerEntry>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
}

impl Building {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            created_at: now,
            updated_at: now,
            users: Vec::new(),
            offices: Vec::new(),
            tenants: Vec::new(),
            payments: Vec::new(),
            entries: Vec::new(),
            notifications: Vec::new(),
        }
    }

    /// Bumps the modification timestamp. Call after any mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn office_by_number(&self, number: u32) -> Option<&Office> {
        self.offices.iter().find(|o| o.number == number)
    }

    pub fn office_by_number_mut(&mut self, number: u32) -> Option<&mut Office> {
        self.offices.iter_mut().find(|o| o.number == number)
    }

    /// Occupied offices that carry a tenant reference, ordered by number.
    pub fn occupied_offices(&self) -> Vec<&Office> {
        let mut occupied: Vec<&Office> = self
            .offices
            .iter()
            .filter(|o| o.is_occupied && o.tenant_id.is_some())
            .collect();
        occupied.sort_by_key(|o| o.number);
        occupied
    }

    pub fn tenant(&self, id: Uuid) -> Option<&TenantProfile> {
        self.tenants.iter().find(|t| t.id == id)
    }

    pub fn tenant_mut(&mut self, id: Uuid) -> Option<&mut TenantProfile> {
        self.tenants.iter_mut().find(|t| t.id == id)
    }

    pub fn user(&self, id: Uuid) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn user_by_username(&self, username: &str) -> Option<&UserAccount> {
        self.users.iter().find(|u| u.username == username)
    }

    pub fn payment(&self, id: Uuid) -> Option<&PaymentRecord> {
        self.payments.iter().find(|p| p.id == id)
    }

    pub fn payment_mut(&mut self, id: Uuid) -> Option<&mut PaymentRecord> {
        self.payments.iter_mut().find(|p| p.id == id)
    }

    pub fn entry(&self, id: Uuid) -> Option<&LedgerEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entry_mut(&mut self, id: Uuid) -> Option<&mut LedgerEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Offices currently assigned to the given tenant, ordered by number.
    pub fn offices_of_tenant(&self, tenant_id: Uuid) -> Vec<&Office> {
        let mut held: Vec<&Office> = self
            .offices
            .iter()
            .filter(|o| o.tenant_id == Some(tenant_id))
            .collect();
        held.sort_by_key(|o| o.number);
        held
    }
}
