//! Almacenamiento respaldado por un archivo JSON
//!
//! El archivo contiene un objeto `{ clave: valor }`. Se lee completo al abrir
//! y se reescribe entero en cada escritura. La copia en memoria solo cambia
//! cuando el archivo se escribió bien.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info, warn};

use super::LocalStorage;
use crate::utils::errors::{storage_error, AppError, AppResult};

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: Mutex<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Abrir (o crear al primer guardado) el archivo de almacenamiento
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();

        let items = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| AppError::Storage(format!("Error reading {}: {}", path.display(), e)))?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw)?
            }
        } else {
            info!("📂 Archivo de almacenamiento no existe todavía: {}", path.display());
            BTreeMap::new()
        };

        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    fn persist(&self, items: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| AppError::Storage(format!("Error creating {}: {}", parent.display(), e)))?;
            }
        }

        let raw = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, raw)
            .and_then(|_| fs::rename(&tmp, &self.path))
            .map_err(|e| {
                warn!("⚠️ No se pudo escribir {}: {}", self.path.display(), e);
                AppError::Storage(format!("Error writing {}: {}", self.path.display(), e))
            })?;

        debug!("💾 Almacenamiento guardado en {} ({} claves)", self.path.display(), items.len());
        Ok(())
    }
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self.items.lock().map_err(|_| storage_error("file storage lock poisoned"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self.items.lock().map_err(|_| storage_error("file storage lock poisoned"))?;
        let mut updated = items.clone();
        updated.insert(key.to_string(), value.to_string());
        self.persist(&updated)?;
        *items = updated;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.lock().map_err(|_| storage_error("file storage lock poisoned"))?;
        if !items.contains_key(key) {
            return Ok(());
        }
        let mut updated = items.clone();
        updated.remove(key);
        self.persist(&updated)?;
        *items = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("fleet-console-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path();
        {
            let storage = FileStorage::open(&path).unwrap();
            storage.set_item("theme", "dark").unwrap();
            storage.set_item("vehicles", "[]").unwrap();
        }

        let reopened = FileStorage::open(&path).unwrap();
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get_item("vehicles").unwrap().as_deref(), Some("[]"));

        reopened.remove_item("theme").unwrap();
        let again = FileStorage::open(&path).unwrap();
        assert_eq!(again.get_item("theme").unwrap(), None);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_failed_write_leaves_memory_unchanged() {
        // El padre es un archivo normal, así que no se puede crear el directorio
        let blocker = temp_path();
        fs::write(&blocker, "{}").unwrap();
        let storage = FileStorage::open(blocker.join("storage.json")).unwrap();

        assert!(matches!(storage.set_item("theme", "dark"), Err(AppError::Storage(_))));
        assert_eq!(storage.get_item("theme").unwrap(), None);

        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_failed_remove_keeps_the_value() {
        let path = temp_path();
        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("theme", "dark").unwrap();

        // Un directorio en la ruta del temporal hace fallar la escritura
        let tmp = path.with_extension("tmp");
        fs::create_dir(&tmp).unwrap();

        assert!(storage.remove_item("theme").is_err());
        assert_eq!(storage.get_item("theme").unwrap().as_deref(), Some("dark"));

        let _ = fs::remove_dir(&tmp);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let path = temp_path();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(FileStorage::open(&path), Err(AppError::Serialization(_))));
        let _ = fs::remove_file(&path);
    }
}
