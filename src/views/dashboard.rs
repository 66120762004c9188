//! Dashboard: resumen de estado y de la flota
//!
//! Todo se calcula a partir de las colecciones del estado en cada llamada.

use serde::Serialize;

use super::trips::TripRow;
use super::Listing;
use crate::models::{DriverStatus, TripStatus, VehicleStatus};
use crate::state::AppState;
use crate::utils::format::{format_number, miles_to_kilometers};

pub const NO_UPCOMING_TRIPS: &str = "No upcoming trips scheduled.";
pub const NO_RECENT_TRIPS: &str = "No recent trips available";

const UPCOMING_LIMIT: usize = 3;
const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusOverview {
    pub active_trips: usize,
    pub scheduled_trips: usize,
    pub total_trips: usize,
    pub total_distance: f64,
    pub active_vehicles: usize,
    pub active_drivers: usize,
    /// Conductores activos que no están en un viaje activo
    pub available_drivers: usize,
}

impl StatusOverview {
    pub fn total_distance_km(&self) -> f64 {
        miles_to_kilometers(self.total_distance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_vehicles: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
    pub average_mileage: u32,
    /// Porcentaje de vehículos activos, con un decimal
    pub active_percentage: f64,
}

impl FleetSummary {
    pub fn health_score(&self) -> u32 {
        self.active_percentage.round() as u32
    }

    pub fn average_mileage_label(&self) -> String {
        format!("{} mi", format_number(i64::from(self.average_mileage)))
    }
}

pub fn status_overview(state: &AppState) -> StatusOverview {
    let trips_with = |status: TripStatus| state.trips().iter().filter(|t| t.status == status).count();
    let active_trips = trips_with(TripStatus::Active);
    let active_drivers = state
        .drivers()
        .iter()
        .filter(|d| d.status == DriverStatus::Active)
        .count();

    StatusOverview {
        active_trips,
        scheduled_trips: trips_with(TripStatus::Scheduled),
        total_trips: state.trips().len(),
        total_distance: state.trips().iter().map(|t| t.distance).sum(),
        active_vehicles: state
            .vehicles()
            .iter()
            .filter(|v| v.status == VehicleStatus::Active)
            .count(),
        active_drivers,
        available_drivers: active_drivers.saturating_sub(active_trips),
    }
}

pub fn fleet_summary(state: &AppState) -> FleetSummary {
    let vehicles = state.vehicles();
    let with_status = |status: VehicleStatus| vehicles.iter().filter(|v| v.status == status).count();
    let active = with_status(VehicleStatus::Active);

    let (average_mileage, active_percentage) = if vehicles.is_empty() {
        (0, 0.0)
    } else {
        let total_mileage: u64 = vehicles.iter().map(|v| u64::from(v.mileage)).sum();
        let average = (total_mileage as f64 / vehicles.len() as f64).round() as u32;
        let share = active as f64 / vehicles.len() as f64 * 100.0;
        (average, (share * 10.0).round() / 10.0)
    };

    FleetSummary {
        total_vehicles: vehicles.len(),
        active,
        maintenance: with_status(VehicleStatus::Maintenance),
        inactive: with_status(VehicleStatus::Inactive),
        average_mileage,
        active_percentage,
    }
}

/// Próximos viajes programados (como mucho tres) y cuántos quedan fuera
pub fn upcoming_trips(state: &AppState) -> (Listing<TripRow<'_>>, usize) {
    let scheduled: Vec<TripRow<'_>> = state
        .trips()
        .iter()
        .filter(|t| t.status == TripStatus::Scheduled)
        .map(|trip| TripRow {
            trip,
            vehicle: state.vehicle(&trip.vehicle_id),
            driver: state.driver(&trip.driver_id),
        })
        .collect();

    let more = scheduled.len().saturating_sub(UPCOMING_LIMIT);
    let rows = scheduled.into_iter().take(UPCOMING_LIMIT).collect();
    (Listing::new(rows, NO_UPCOMING_TRIPS), more)
}

pub fn recent_trips(state: &AppState) -> Listing<TripRow<'_>> {
    let rows = state
        .trips()
        .iter()
        .take(RECENT_LIMIT)
        .map(|trip| TripRow {
            trip,
            vehicle: state.vehicle(&trip.vehicle_id),
            driver: state.driver(&trip.driver_id),
        })
        .collect();
    Listing::new(rows, NO_RECENT_TRIPS)
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
    fn test_status_overview() {
        let overview = status_overview(&state());
        assert_eq!(overview.active_trips, 1);
        assert_eq!(overview.scheduled_trips, 1);
        assert_eq!(overview.total_trips, 3);
        assert_eq!(overview.total_distance, 618.0);
        assert_eq!(overview.active_vehicles, 2);
        assert_eq!(overview.active_drivers, 2);
        assert_eq!(overview.available_drivers, 1);
        assert!((overview.total_distance_km() - 994.57).abs() < 0.01);
    }

    #[test]
    fn test_fleet_summary() {
        let summary = fleet_summary(&state());
        assert_eq!(summary.total_vehicles, 3);
        assert_eq!(summary.maintenance, 1);
        assert_eq!(summary.average_mileage, 43333);
        assert_eq!(summary.active_percentage, 66.7);
        assert_eq!(summary.health_score(), 67);
        assert_eq!(summary.average_mileage_label(), "43,333 mi");
    }

    #[test]
    fn test_upcoming_trips() {
        let state = state();
        let (listing, more) = upcoming_trips(&state);
        assert_eq!(listing.len(), 1);
        assert_eq!(more, 0);
        assert_eq!(listing.rows[0].trip.destination, "San Diego");
        assert_eq!(listing.empty_state(), None);
        assert_eq!(recent_trips(&state).len(), 3);
    }
}
