//! Almacenamiento local
//!
//! Sustituto del `localStorage` del navegador: un almacén clave/valor de
//! strings. Hay una implementación en memoria (por defecto y para tests) y
//! otra respaldada por un archivo JSON.

pub mod file_storage;
pub mod memory_storage;

use std::sync::Arc;

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use crate::config::EnvironmentConfig;
use crate::utils::errors::AppResult;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

/// Preferencia de tema ("light" | "dark")
pub const THEME_KEY: &str = "theme";
/// Token del usuario autenticado
pub const AUTH_TOKEN_KEY: &str = "fleetpro_auth_token";

/// Operaciones del almacenamiento local
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// Almacenamiento compartido entre el estado, la API y la autenticación
pub type SharedStorage = Arc<dyn LocalStorage>;

/// Leer un valor JSON; una clave ausente devuelve `None`
pub fn read_json<T: DeserializeOwned>(storage: &dyn LocalStorage, key: &str) -> AppResult<Option<T>> {
    match storage.get_item(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Guardar un valor serializado como JSON
pub fn write_json<T: Serialize + ?Sized>(storage: &dyn LocalStorage, key: &str, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    storage.set_item(key, &raw)
}

/// Crear el almacenamiento indicado por la configuración
pub fn storage_from_config(config: &EnvironmentConfig) -> AppResult<SharedStorage> {
    match &config.storage_path {
        Some(path) => {
            info!("💾 Usando almacenamiento en archivo: {}", path.display());
            Ok(Arc::new(FileStorage::open(path)?))
        }
        None => {
            info!("🧠 Usando almacenamiento en memoria");
            Ok(Arc::new(MemoryStorage::new()))
        }
    }
}
