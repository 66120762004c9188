//! Página de conductores

use super::{matches_search, Filter, Listing};
use crate::models::{Driver, DriverStatus, Vehicle};
use crate::state::AppState;

pub const EMPTY_MESSAGE: &str = "No drivers found";

/// Fila de la tabla: conductor y su vehículo asignado (si se resuelve)
#[derive(Debug, Clone, PartialEq)]
pub struct DriverRow<'a> {
    pub driver: &'a Driver,
    pub vehicle: Option<&'a Vehicle>,
}

#[derive(Debug, Clone, Default)]
pub struct DriversPage {
    pub search: String,
    pub status: Filter<DriverStatus>,
}

impl DriversPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, DriverStatus::from_str);
    }

    pub fn drivers<'a>(&self, state: &'a AppState) -> Listing<DriverRow<'a>> {
        let rows = state
            .drivers()
            .iter()
            .filter(|d| self.status.matches(&d.status))
            .filter(|d| matches_search(&self.search, &[&d.name, &d.license, &d.phone]))
            .map(|driver| DriverRow {
                driver,
                vehicle: driver.assigned_vehicle.as_deref().and_then(|id| state.vehicle(id)),
            })
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }
}
