use std::collections::BTreeMap;
use std::sync::Mutex;

use log::debug;

use super::LocalStorage;
use crate::utils::errors::{storage_error, AppResult};

/// Almacenamiento en memoria; se pierde al terminar el proceso
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self.items.lock().map_err(|_| storage_error("memory storage lock poisoned"))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let mut items = self.items.lock().map_err(|_| storage_error("memory storage lock poisoned"))?;
        items.insert(key.to_string(), value.to_string());
        debug!("💾 SET {} ({} bytes)", key, value.len());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let mut items = self.items.lock().map_err(|_| storage_error("memory storage lock poisoned"))?;
        items.remove(key);
        debug!("🗑️ REMOVE {}", key);
        Ok(())
    }
}
