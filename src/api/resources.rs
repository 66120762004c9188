//! Recursos CRUD de la API simulada
//!
//! Cada colección se guarda como un array JSON bajo su propia clave del
//! almacenamiento local (`vehicles`, `drivers`, `trips`).

use std::marker::PhantomData;

use async_trait::async_trait;
use log::{info, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use validator::Validate;

use super::{Latency, GET_ALL_DELAY_MS, GET_BY_ID_DELAY_MS, WRITE_DELAY_MS};
use crate::models::{
    new_record_id, CreateDriverRequest, CreateTripRequest, CreateVehicleRequest, Driver, Record, Trip,
    UpdateDriverRequest, UpdateTripRequest, UpdateVehicleRequest, Vehicle,
};
use crate::storage::{read_json, write_json, SharedStorage};
use crate::utils::errors::{not_found_error, AppResult};

/// Registro expuesto por la API, con sus requests de creación y actualización
pub trait Resource: Record + Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Nombre usado en los mensajes de error
    const NAME: &'static str;

    type Create: Serialize + Validate + Send + Sync + 'static;
    type Update: Serialize + Validate + Send + Sync + 'static;
}

impl Resource for Vehicle {
    const NAME: &'static str = "Vehicle";
    type Create = CreateVehicleRequest;
    type Update = UpdateVehicleRequest;
}

impl Resource for Driver {
    const NAME: &'static str = "Driver";
    type Create = CreateDriverRequest;
    type Update = UpdateDriverRequest;
}

impl Resource for Trip {
    const NAME: &'static str = "Trip";
    type Create = CreateTripRequest;
    type Update = UpdateTripRequest;
}

/// Operaciones CRUD de un recurso
#[async_trait]
pub trait ResourceApi<R: Resource>: Send + Sync {
    async fn get_all(&self) -> AppResult<Vec<R>>;

    /// `None` si no existe
    async fn get_by_id(&self, id: &str) -> AppResult<Option<R>>;

    async fn create(&self, request: R::Create) -> AppResult<R>;

    /// Actualización parcial: solo se sobrescriben los campos presentes
    async fn update(&self, id: &str, updates: R::Update) -> AppResult<R>;

    /// Eliminar un id ausente no es un error
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// Colección respaldada por el almacenamiento local
pub struct CollectionApi<R> {
    storage: SharedStorage,
    latency: Latency,
    _marker: PhantomData<fn() -> R>,
}

impl<R: Resource> CollectionApi<R> {
    pub fn new(storage: SharedStorage, latency: Latency) -> Self {
        Self {
            storage,
            latency,
            _marker: PhantomData,
        }
    }

    fn load(&self) -> AppResult<Vec<R>> {
        Ok(read_json::<Vec<R>>(self.storage.as_ref(), R::COLLECTION)?.unwrap_or_default())
    }

    fn save(&self, items: &[R]) -> AppResult<()> {
        write_json(self.storage.as_ref(), R::COLLECTION, items)
    }

    /// Escribir la colección inicial si la clave no existe todavía
    pub fn seed_if_missing(&self, items: &[R]) -> AppResult<()> {
        if self.storage.get_item(R::COLLECTION)?.is_none() {
            info!("🌱 Cargando {} registros iniciales en '{}'", items.len(), R::COLLECTION);
            self.save(items)?;
        }
        Ok(())
    }
}

fn merge_fields(target: &mut Value, updates: Value) {
    if let (Value::Object(target), Value::Object(updates)) = (target, updates) {
        for (key, value) in updates {
            target.insert(key, value);
        }
    }
}

#[async_trait]
impl<R: Resource> ResourceApi<R> for CollectionApi<R> {
    async fn get_all(&self) -> AppResult<Vec<R>> {
        self.latency.wait(GET_ALL_DELAY_MS).await;
        self.load()
    }

    async fn get_by_id(&self, id: &str) -> AppResult<Option<R>> {
        self.latency.wait(GET_BY_ID_DELAY_MS).await;
        Ok(self.load()?.into_iter().find(|item| item.id() == id))
    }

    async fn create(&self, request: R::Create) -> AppResult<R> {
        self.latency.wait(WRITE_DELAY_MS).await;
        request.validate()?;

        let mut value = serde_json::to_value(&request)?;
        if let Value::Object(fields) = &mut value {
            fields.insert("id".to_string(), Value::String(new_record_id()));
        }
        let created: R = serde_json::from_value(value)?;

        let mut items = self.load()?;
        items.push(created.clone());
        self.save(&items)?;

        info!("➕ {} creado: {}", R::NAME, created.id());
        Ok(created)
    }

    async fn update(&self, id: &str, updates: R::Update) -> AppResult<R> {
        self.latency.wait(WRITE_DELAY_MS).await;
        updates.validate()?;

        let mut items = self.load()?;
        let Some(position) = items.iter().position(|item| item.id() == id) else {
            warn!("⚠️ {} no encontrado para actualizar: {}", R::NAME, id);
            return Err(not_found_error(R::NAME, id));
        };

        let mut value = serde_json::to_value(&items[position])?;
        merge_fields(&mut value, serde_json::to_value(&updates)?);
        let mut updated: R = serde_json::from_value(value)?;
        updated.set_id(id.to_string());

        items[position] = updated.clone();
        self.save(&items)?;

        info!("✏️ {} actualizado: {}", R::NAME, id);
        Ok(updated)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.latency.wait(WRITE_DELAY_MS).await;

        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id() != id);
        self.save(&items)?;

        info!("🗑️ {} eliminado: {} ({} registros)", R::NAME, id, before - items.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{VehicleStatus, TripStatus};
    use crate::storage::MemoryStorage;
    use crate::utils::errors::AppError;

    fn vehicles_api() -> CollectionApi<Vehicle> {
        CollectionApi::new(Arc::new(MemoryStorage::new()), Latency::disabled())
    }

    fn transit() -> CreateVehicleRequest {
        CreateVehicleRequest {
            make: "Ford".to_string(),
            model: "Transit".to_string(),
            year: 2022,
            vin: "WBA3A5G59DNP26082".to_string(),
            status: VehicleStatus::Active,
            driver: Some("John Doe".to_string()),
            mileage: 45000,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let api = vehicles_api();
        let first = api.create(transit()).await.unwrap();
        let second = api.create(transit()).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(api.get_all().await.unwrap().len(), 2);
        assert_eq!(api.get_by_id(&first.id).await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_create_rejects_missing_fields() {
        let api = vehicles_api();
        let mut request = transit();
        request.vin = String::new();

        assert!(matches!(api.create(request).await, Err(AppError::Validation(_))));
        assert!(api.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_only_present_fields() {
        let api = vehicles_api();
        let created = api.create(transit()).await.unwrap();

        let updated = api
            .update(
                &created.id,
                UpdateVehicleRequest {
                    status: Some(VehicleStatus::Maintenance),
                    mileage: Some(45500),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.status, VehicleStatus::Maintenance);
        assert_eq!(updated.mileage, 45500);
        assert_eq!(updated.make, "Ford");
        assert_eq!(updated.driver.as_deref(), Some("John Doe"));
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let api = vehicles_api();
        let result = api.update("missing", UpdateVehicleRequest::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_and_get_missing() {
        let api = vehicles_api();
        let created = api.create(transit()).await.unwrap();

        api.delete(&created.id).await.unwrap();
        api.delete(&created.id).await.unwrap();

        assert_eq!(api.get_by_id(&created.id).await.unwrap(), None);
        assert!(api.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_trip_round_trip_through_storage() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let api: CollectionApi<Trip> = CollectionApi::new(storage.clone(), Latency::disabled());

        let trip = api
            .create(CreateTripRequest {
                vehicle_id: "1".to_string(),
                driver_id: "1".to_string(),
                origin: "New York".to_string(),
                destination: "Boston".to_string(),
                status: TripStatus::Scheduled,
                start_time: "2024-01-15T08:00:00Z".parse().unwrap(),
                distance: 215.0,
            })
            .await
            .unwrap();

        let raw = storage.get_item("trips").unwrap().unwrap();
        assert!(raw.contains("\"vehicleId\":\"1\""));
        assert!(raw.contains(&trip.id));
    }

    #[tokio::test]
    async fn test_seed_if_missing_keeps_existing_data() {
        let api = vehicles_api();
        api.create(transit()).await.unwrap();

        api.seed_if_missing(&crate::seed::vehicles()).unwrap();
        assert_eq!(api.get_all().await.unwrap().len(), 1);
    }
}
