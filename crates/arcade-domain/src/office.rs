//! Office units: the leasable physical rooms of the building.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// Number of offices in the building directory.
pub const OFFICE_COUNT: u32 = 15;

/// Offices per floor; floor is derived as `ceil(number / OFFICES_PER_FLOOR)`.
pub const OFFICES_PER_FLOOR: u32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Office {
    pub id: Uuid,
    pub number: u32,
    pub floor: u32,
    pub is_occupied: bool,
    /// Invariant: `is_occupied` is true iff this is `Some`.
    pub tenant_id: Option<Uuid>,
}

impl Office {
    pub fn new(number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            floor: floor_for(number),
            is_occupied: false,
            tenant_id: None,
        }
    }

    /// Assigns the office to a tenant, flipping the occupancy flag.
    pub fn assign(&mut self, tenant_id: Uuid) {
        self.tenant_id = Some(tenant_id);
        self.is_occupied = true;
    }

    /// Releases the office back to vacancy.
    pub fn release(&mut self) {
        self.tenant_id = None;
        self.is_occupied = false;
    }
}

impl Identifiable for Office {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Derives the floor an office sits on from its number.
pub fn floor_for(number: u32) -> u32 {
    number.div_ceil(OFFICES_PER_FLOOR)
}

/// Builds the full default office directory (numbers 1..=15, vacant).
pub fn default_directory() -> Vec<Office> {
    (1..=OFFICE_COUNT).map(Office::new).collect()
}
