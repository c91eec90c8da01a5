//! Office directory management.

use arcade_domain::{default_directory, Building, Office};

/// Directory-level helpers for [`Office`] records.
pub struct OfficeService;

impl OfficeService {
    /// Creates the 15-office directory when none exists yet. Returns the
    /// number of offices created (zero when already seeded).
    pub fn ensure_directory(building: &mut Building) -> usize {
        if !building.offices.is_empty() {
            return 0;
        }
        building.offices = default_directory();
        building.touch();
        building.offices.len()
    }

    /// Offices ordered by number, for listings.
    pub fn list(building: &Building) -> Vec<&Office> {
        let mut offices: Vec<&Office> = building.offices.iter().collect();
        offices.sort_by_key(|o| o.number);
        offices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_directory_seeds_once() {
        let mut building = Building::new("JR Arcade");
        assert_eq!(OfficeService::ensure_directory(&mut building), 15);
        assert_eq!(OfficeService::ensure_directory(&mut building), 0);
        assert_eq!(building.offices.len(), 15);
    }

    #[test]
    fn list_is_ordered_by_number() {
        let mut building = Building::new("JR Arcade");
        OfficeService::ensure_directory(&mut building);
        building.offices.reverse();
        let numbers: Vec<u32> = OfficeService::list(&building).iter().map(|o| o.number).collect();
        assert_eq!(numbers, (1..=15).collect::<Vec<u32>>());
    }
}
