//! Vistas de la consola
//!
//! Cada página guarda su estado de filtros, deriva las filas filtradas con un
//! predicado lineal sobre la colección completa y recalcula sus estadísticas
//! en cada llamada. El mensaje de lista vacía aparece si y solo si no quedan
//! filas.

pub mod auth;
pub mod compliance;
pub mod dashboard;
pub mod drivers;
pub mod fleet;
pub mod fuel;
pub mod job_cards;
pub mod maintenance;
pub mod notifications;
pub mod parts;
pub mod reports;
pub mod router;
pub mod settings;
pub mod support;
pub mod trips;
pub mod users;

pub use router::{route, AppShell, MenuItem, Screen, Tab, View};

/// Filtro de selección: "all", un valor concreto o un valor que no existe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    All,
    Only(T),
    /// Valor sin correspondencia; no selecciona ninguna fila
    Unknown(String),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::All
    }
}

impl<T: PartialEq> Filter<T> {
    /// "all" selecciona todo; un valor desconocido no selecciona nada
    pub fn parse(value: &str, from_str: impl Fn(&str) -> Option<T>) -> Self {
        match value {
            "all" => Filter::All,
            other => match from_str(other) {
                Some(value) => Filter::Only(value),
                None => Filter::Unknown(other.to_string()),
            },
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(expected) => expected == value,
            Filter::Unknown(_) => false,
        }
    }
}

/// Búsqueda sin distinguir mayúsculas sobre varios campos; vacía coincide siempre
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&query))
}

/// Filas visibles de una tabla y su mensaje de lista vacía
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub rows: Vec<T>,
    empty_message: &'static str,
}

impl<T> Listing<T> {
    pub fn new(rows: Vec<T>, empty_message: &'static str) -> Self {
        Self { rows, empty_message }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn empty_state(&self) -> Option<&'static str> {
        self.rows.is_empty().then_some(self.empty_message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::VehicleStatus;

    #[test]
    fn test_filter_parse() {
        assert_eq!(Filter::parse("all", VehicleStatus::from_str), Filter::All);
        assert_eq!(
            Filter::parse("maintenance", VehicleStatus::from_str),
            Filter::Only(VehicleStatus::Maintenance)
        );
        assert!(Filter::Only(VehicleStatus::Active).matches(&VehicleStatus::Active));
        assert!(!Filter::Only(VehicleStatus::Active).matches(&VehicleStatus::Inactive));
    }

    #[test]
    fn test_unknown_filter_value_matches_nothing() {
        let filter = Filter::parse("retired", VehicleStatus::from_str);
        assert_eq!(filter, Filter::Unknown("retired".to_string()));
        assert!(!filter.matches(&VehicleStatus::Active));
        assert!(!filter.matches(&VehicleStatus::Maintenance));
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("", &["anything"]));
        assert!(matches_search("TRANS", &["Ford", "Transit"]));
        assert!(!matches_search("volvo", &["Ford", "Transit"]));
    }

    #[test]
    fn test_listing_empty_state() {
        let empty: Listing<u8> = Listing::new(vec![], "No vehicles found");
        assert_eq!(empty.empty_state(), Some("No vehicles found"));
        assert_eq!(Listing::new(vec![1u8], "No vehicles found").empty_state(), None);
    }
}
