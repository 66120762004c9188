//! Página de viajes

use super::{matches_search, Filter, Listing};
use crate::models::{Driver, Trip, TripStatus, Vehicle};
use crate::state::AppState;

pub const EMPTY_MESSAGE: &str = "No trips found";

/// Viaje con su vehículo y conductor. Una referencia que no existe queda en `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRow<'a> {
    pub trip: &'a Trip,
    pub vehicle: Option<&'a Vehicle>,
    pub driver: Option<&'a Driver>,
}

#[derive(Debug, Clone, Default)]
pub struct TripsPage {
    pub search: String,
    pub status: Filter<TripStatus>,
}

impl TripsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, TripStatus::from_str);
    }

    pub fn trips<'a>(&self, state: &'a AppState) -> Listing<TripRow<'a>> {
        let rows = state
            .trips()
            .iter()
            .filter(|t| self.status.matches(&t.status))
            .filter(|t| matches_search(&self.search, &[&t.origin, &t.destination]))
            .map(|trip| TripRow {
                trip,
                vehicle: state.vehicle(&trip.vehicle_id),
                driver: state.driver(&trip.driver_id),
            })
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_trip_rows_join_vehicle_and_driver() {
        let state = AppState::new(Arc::new(MemoryStorage::new()));
        let listing = TripsPage::new().trips(&state);

        assert_eq!(listing.len(), 3);
        let row = &listing.rows[1];
        assert_eq!(row.vehicle.map(|v| v.make.as_str()), Some("Isuzu"));
        assert_eq!(row.driver.map(|d| d.name.as_str()), Some("Jane Smith"));
    }

    #[test]
    fn test_status_and_search() {
        let state = AppState::new(Arc::new(MemoryStorage::new()));
        let mut page = TripsPage::new();

        page.set_status_filter("scheduled");
        let listing = page.trips(&state);
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.rows[0].trip.destination, "San Diego");

        page.set_status_filter("all");
        page.search = "boston".to_string();
        assert_eq!(page.trips(&state).rows[0].trip.id, "1");

        page.search = "miami".to_string();
        assert_eq!(page.trips(&state).empty_state(), Some("No trips found"));
    }
}
