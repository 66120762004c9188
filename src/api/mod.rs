//! API simulada
//!
//! Imita una API REST guardando arrays JSON en el almacenamiento local, con
//! retardos artificiales que se pueden desactivar desde la configuración.

pub mod reports;
pub mod resources;

use std::time::Duration;

use log::{debug, info};

use crate::config::EnvironmentConfig;
use crate::models::{Driver, Trip, Vehicle};
use crate::storage::SharedStorage;
use crate::utils::errors::AppResult;

pub use reports::ReportsApi;
pub use resources::{CollectionApi, Resource, ResourceApi};

pub const GET_ALL_DELAY_MS: u64 = 800;
pub const GET_BY_ID_DELAY_MS: u64 = 500;
pub const WRITE_DELAY_MS: u64 = 1000;
pub const REPORT_DELAY_MS: u64 = 1500;

/// Latencia de red simulada
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub async fn wait(&self, millis: u64) {
        if self.enabled {
            debug!("⏳ Latencia simulada: {} ms", millis);
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

/// Colecciones cargadas de una sola vez
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub trips: Vec<Trip>,
}

/// Punto de entrada de la API simulada
pub struct MockApi {
    pub vehicles: CollectionApi<Vehicle>,
    pub drivers: CollectionApi<Driver>,
    pub trips: CollectionApi<Trip>,
    pub reports: ReportsApi,
}

impl MockApi {
    pub fn new(storage: SharedStorage, latency: Latency) -> Self {
        Self {
            vehicles: CollectionApi::new(storage.clone(), latency),
            drivers: CollectionApi::new(storage.clone(), latency),
            trips: CollectionApi::new(storage, latency),
            reports: ReportsApi::new(latency),
        }
    }

    pub fn from_config(config: &EnvironmentConfig, storage: SharedStorage) -> Self {
        info!(
            "🛰️ API simulada inicializada (latencia {})",
            if config.mock_api_latency { "activada" } else { "desactivada" }
        );
        Self::new(storage, Latency::new(config.mock_api_latency))
    }

    /// Cargar vehículos, conductores y viajes en paralelo
    pub async fn snapshot(&self) -> AppResult<FleetSnapshot> {
        let (vehicles, drivers, trips) = futures::try_join!(
            self.vehicles.get_all(),
            self.drivers.get_all(),
            self.trips.get_all()
        )?;

        Ok(FleetSnapshot {
            vehicles,
            drivers,
            trips,
        })
    }

    /// Guardar colecciones iniciales en las claves que aún no existen
    pub fn seed_missing(
        &self,
        vehicles: &[Vehicle],
        drivers: &[Driver],
        trips: &[Trip],
    ) -> AppResult<()> {
        self.vehicles.seed_if_missing(vehicles)?;
        self.drivers.seed_if_missing(drivers)?;
        self.trips.seed_if_missing(trips)
    }
}
