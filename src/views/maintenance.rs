//! Página de mantenimiento
//!
//! Los registros de mantenimiento pertenecen a la página (no al estado
//! compartido); el nombre del vehículo se resuelve contra el estado.

use super::{matches_search, Filter, Listing};
use crate::models::{MaintenanceRecord, MaintenanceStatus, MaintenanceType};
use crate::seed;
use crate::state::AppState;

pub const EMPTY_MESSAGE: &str = "No maintenance records found";
pub const UNKNOWN_VEHICLE: &str = "Unknown Vehicle";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceStats {
    pub total: usize,
    pub overdue: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceRow<'a> {
    pub record: &'a MaintenanceRecord,
    pub vehicle_name: String,
}

#[derive(Debug, Clone)]
pub struct MaintenancePage {
    pub search: String,
    pub status: Filter<MaintenanceStatus>,
    pub kind: Filter<MaintenanceType>,
    records: Vec<MaintenanceRecord>,
}

impl Default for MaintenancePage {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: Filter::All,
            kind: Filter::All,
            records: seed::maintenance_records(),
        }
    }
}

impl MaintenancePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, MaintenanceStatus::from_str);
    }

    pub fn set_type_filter(&mut self, value: &str) {
        self.kind = Filter::parse(value, MaintenanceType::from_str);
    }

    pub fn all_records(&self) -> &[MaintenanceRecord] {
        &self.records
    }

    pub fn records<'a>(&'a self, state: &AppState) -> Listing<MaintenanceRow<'a>> {
        let rows = self
            .records
            .iter()
            .filter(|r| self.status.matches(&r.status) && self.kind.matches(&r.kind))
            .map(|record| MaintenanceRow {
                record,
                vehicle_name: state
                    .vehicle(&record.vehicle_id)
                    .map(|v| v.display_name())
                    .unwrap_or_else(|| UNKNOWN_VEHICLE.to_string()),
            })
            .filter(|row| matches_search(&self.search, &[&row.record.description, &row.vehicle_name]))
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn stats(&self) -> MaintenanceStats {
        let count = |status: MaintenanceStatus| self.records.iter().filter(|r| r.status == status).count();
        MaintenanceStats {
            total: self.records.len(),
            overdue: count(MaintenanceStatus::Overdue),
            in_progress: count(MaintenanceStatus::InProgress),
            completed: count(MaintenanceStatus::Completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_stats() {
        assert_eq!(
            MaintenancePage::new().stats(),
            MaintenanceStats {
                total: 4,
                overdue: 1,
                in_progress: 1,
                completed: 1
            }
        );
    }

    #[test]
    fn test_search_by_vehicle_name() {
        let state = state();
        let mut page = MaintenancePage::new();
        page.search = "ford transit".to_string();

        let listing = page.records(&state);
        assert_eq!(listing.len(), 2);
        assert!(listing.rows.iter().all(|row| row.vehicle_name == "Ford Transit"));
    }

    #[test]
    fn test_status_and_type_filters_combine() {
        let state = state();
        let mut page = MaintenancePage::new();

        page.set_type_filter("scheduled");
        assert_eq!(page.records(&state).len(), 2);

        page.set_status_filter("overdue");
        let listing = page.records(&state);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.rows[0].record.description, "Tire Rotation");

        page.set_type_filter("repair");
        assert_eq!(page.records(&state).empty_state(), Some("No maintenance records found"));
    }

    #[test]
    fn test_unknown_vehicle_name() {
        let state = state();
        let mut page = MaintenancePage::new();
        page.records[0].vehicle_id = "99".to_string();

        let listing = page.records(&state);
        assert_eq!(listing.rows[0].vehicle_name, UNKNOWN_VEHICLE);
    }
}
