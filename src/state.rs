//! Estado compartido de la aplicación
//!
//! Un único contenedor con la navegación, las preferencias de interfaz y las
//! colecciones de la flota. Las vistas lo leen por referencia y lo modifican
//! solo a través de sus mutadores, que nunca fallan.

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::models::{new_record_id, Driver, JobCard, Part, Supplier, Trip, Vehicle};
use crate::seed;
use crate::storage::{SharedStorage, THEME_KEY};

/// Clase aplicada a la raíz del documento en modo oscuro
pub const DARK_CLASS: &str = "dark";

/// Pestaña inicial antes de iniciar sesión
pub const LOGIN_TAB: &str = "login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Solo "dark" selecciona el tema oscuro; cualquier otro valor es claro
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub struct AppState {
    storage: SharedStorage,
    active_tab: String,
    sidebar_open: bool,
    expanded_fleet_section: bool,
    theme: Theme,
    is_authenticated: bool,
    show_job_card_modal: bool,
    vehicles: Vec<Vehicle>,
    drivers: Vec<Driver>,
    trips: Vec<Trip>,
    job_cards: Vec<JobCard>,
    parts: Vec<Part>,
    suppliers: Vec<Supplier>,
    root_classes: BTreeSet<String>,
}

impl AppState {
    /// Crear el estado con los datos de ejemplo y el tema guardado
    pub fn new(storage: SharedStorage) -> Self {
        let stored_theme = match storage.get_item(THEME_KEY) {
            Ok(value) => value,
            Err(e) => {
                warn!("⚠️ No se pudo leer el tema guardado: {}", e);
                None
            }
        };
        let theme = Theme::from_stored(stored_theme.as_deref());

        let mut state = Self {
            storage,
            active_tab: LOGIN_TAB.to_string(),
            sidebar_open: true,
            expanded_fleet_section: false,
            theme,
            is_authenticated: false,
            show_job_card_modal: false,
            vehicles: seed::vehicles(),
            drivers: seed::drivers(),
            trips: seed::trips(),
            job_cards: Vec::new(),
            parts: seed::parts(),
            suppliers: seed::suppliers(),
            root_classes: BTreeSet::new(),
        };
        state.apply_theme();

        info!("🚀 Estado inicializado (tema {})", state.theme.as_str());
        state
    }

    pub fn active_tab(&self) -> &str {
        &self.active_tab
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn expanded_fleet_section(&self) -> bool {
        self.expanded_fleet_section
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn show_job_card_modal(&self) -> bool {
        self.show_job_card_modal
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn job_cards(&self) -> &[JobCard] {
        &self.job_cards
    }

    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn suppliers(&self) -> &[Supplier] {
        &self.suppliers
    }

    /// Clases de la raíz del documento
    pub fn root_classes(&self) -> &BTreeSet<String> {
        &self.root_classes
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// Cambiar de pestaña. No se valida: una pestaña desconocida muestra el Dashboard.
    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
        debug!("🧭 Pestaña activa: {}", self.active_tab);
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.is_authenticated = authenticated;
    }

    pub fn set_show_job_card_modal(&mut self, show: bool) {
        self.show_job_card_modal = show;
    }

    pub fn toggle_fleet_section(&mut self) {
        self.expanded_fleet_section = !self.expanded_fleet_section;
    }

    /// Alternar el tema, guardarlo y actualizar la clase de la raíz
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.set_item(THEME_KEY, self.theme.as_str()) {
            warn!("⚠️ No se pudo guardar el tema: {}", e);
        }
        self.apply_theme();
        info!("🎨 Tema cambiado a {}", self.theme.as_str());
    }

    fn apply_theme(&mut self) {
        match self.theme {
            Theme::Dark => {
                self.root_classes.insert(DARK_CLASS.to_string());
            }
            Theme::Light => {
                self.root_classes.remove(DARK_CLASS);
            }
        }
    }

    /// Agregar un repuesto con un id nuevo; devuelve el id asignado
    pub fn add_part(&mut self, mut part: Part) -> String {
        part.id = new_record_id();
        let id = part.id.clone();
        info!("📦 Repuesto agregado: {} ({})", part.name, id);
        self.parts.push(part);
        id
    }

    /// Reemplazar el repuesto con el mismo id; si no existe no hace nada
    pub fn update_part(&mut self, part: Part) {
        if let Some(existing) = self.parts.iter_mut().find(|p| p.id == part.id) {
            *existing = part;
        }
    }

    pub fn delete_part(&mut self, part_id: &str) {
        self.parts.retain(|p| p.id != part_id);
    }

    /// Agregar un job card con un id nuevo; devuelve el id asignado
    pub fn add_job_card(&mut self, mut job_card: JobCard) -> String {
        job_card.id = new_record_id();
        let id = job_card.id.clone();
        info!("🛠️ Job card creado para vehículo {}: {}", job_card.vehicle_id, id);
        self.job_cards.push(job_card);
        id
    }

    pub fn update_job_card(&mut self, job_card: JobCard) {
        if let Some(existing) = self.job_cards.iter_mut().find(|c| c.id == job_card.id) {
            *existing = job_card;
        }
    }

    /// Cerrar sesión desde la barra lateral
    pub fn logout(&mut self) {
        self.is_authenticated = false;
        self.active_tab = LOGIN_TAB.to_string();
        info!("👋 Sesión cerrada, volviendo a login");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{LocalStorage, MemoryStorage};
    use crate::utils::errors::{storage_error, AppResult};

    fn state() -> (AppState, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (AppState::new(storage.clone()), storage)
    }

    #[test]
    fn test_initial_state() {
        let (state, _) = state();
        assert_eq!(state.active_tab(), "login");
        assert!(state.sidebar_open());
        assert!(!state.expanded_fleet_section());
        assert!(!state.is_authenticated());
        assert_eq!(state.theme(), Theme::Light);
        assert!(state.root_classes().is_empty());
        assert_eq!(state.vehicles().len(), 3);
        assert!(state.job_cards().is_empty());
        assert_eq!(state.suppliers().len(), 2);
    }

    #[test]
    fn test_stored_dark_theme_is_applied() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(THEME_KEY, "dark").unwrap();
        let state = AppState::new(storage);
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.root_classes().contains(DARK_CLASS));

        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(THEME_KEY, "purple").unwrap();
        assert_eq!(AppState::new(storage).theme(), Theme::Light);
    }

    #[test]
    fn test_add_part_assigns_new_id() {
        let (mut state, _) = state();
        let mut part = state.parts()[0].clone();
        part.name = "Air Filter".to_string();

        let id = state.add_part(part);
        assert_eq!(state.parts().len(), 3);
        assert_ne!(id, "P001");
        assert_eq!(state.parts().iter().filter(|p| p.id == id).count(), 1);
    }

    #[test]
    fn test_delete_part_removes_only_that_id() {
        let (mut state, _) = state();
        state.delete_part("P001");
        assert_eq!(state.parts().len(), 1);
        assert!(state.parts().iter().all(|p| p.id != "P001"));

        state.delete_part("missing");
        assert_eq!(state.parts().len(), 1);
    }

    #[test]
    fn test_update_part_replaces_by_id() {
        let (mut state, _) = state();
        let untouched = state.parts()[0].clone();
        let mut part = state.parts()[1].clone();
        part.quantity = 2;
        state.update_part(part.clone());

        assert_eq!(state.parts().len(), 2);
        assert_eq!(state.parts()[0], untouched);
        assert_eq!(state.parts()[1], part);

        let before = state.parts().to_vec();
        part.id = "missing".to_string();
        part.quantity = 99;
        state.update_part(part);
        assert_eq!(state.parts(), before.as_slice());
    }

    #[test]
    fn test_toggle_theme_twice_restores_state() {
        let (mut state, storage) = state();

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.root_classes().contains(DARK_CLASS));
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("dark"));

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Light);
        assert!(!state.root_classes().contains(DARK_CLASS));
        assert_eq!(storage.get_item(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    struct BrokenStorage;

    impl LocalStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> AppResult<Option<String>> {
            Err(storage_error("unavailable"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(storage_error("unavailable"))
        }

        fn remove_item(&self, _key: &str) -> AppResult<()> {
            Err(storage_error("unavailable"))
        }
    }

    #[test]
    fn test_storage_failures_do_not_break_theme() {
        let mut state = AppState::new(Arc::new(BrokenStorage));
        assert_eq!(state.theme(), Theme::Light);

        state.toggle_theme();
        assert_eq!(state.theme(), Theme::Dark);
        assert!(state.root_classes().contains(DARK_CLASS));
    }

    #[test]
    fn test_job_cards() {
        let (mut state, _) = state();
        let id = state.add_job_card(JobCard::new("1", "Engine overheating during long trips"));
        assert_eq!(state.job_cards().len(), 1);

        let mut card = state.job_cards()[0].clone();
        assert_eq!(card.id, id);
        card.description = "Engine overheating".to_string();
        state.update_job_card(card);
        assert_eq!(state.job_cards()[0].description, "Engine overheating");
    }

    #[test]
    fn test_navigation_flags() {
        let (mut state, _) = state();
        state.set_active_tab("nowhere");
        assert_eq!(state.active_tab(), "nowhere");

        state.toggle_fleet_section();
        assert!(state.expanded_fleet_section());
        state.set_sidebar_open(false);
        assert!(!state.sidebar_open());
        state.set_show_job_card_modal(true);
        assert!(state.show_job_card_modal());

        state.set_authenticated(true);
        state.set_active_tab("parts");
        state.logout();
        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab(), "login");
    }
}
