//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y sus variantes para CRUD operations.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use crate::utils::validation::validate_not_empty;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleStatus {
    Active,
    Maintenance,
    Inactive,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [Self::Active, Self::Maintenance, Self::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "active",
            VehicleStatus::Maintenance => "maintenance",
            VehicleStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

/// Vehículo de la flota
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub status: VehicleStatus,
    /// Nombre del conductor (desnormalizado, no es una referencia)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,
    pub mileage: u32,
}

impl Vehicle {
    /// "Make Model", como se muestra en tablas y búsquedas
    pub fn display_name(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}

impl Record for Vehicle {
    const COLLECTION: &'static str = "vehicles";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Request para crear un nuevo vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_not_empty")]
    pub make: String,

    #[validate(custom = "validate_not_empty")]
    pub model: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(custom = "validate_not_empty")]
    pub vin: String,

    pub status: VehicleStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    pub mileage: u32,
}

/// Request para actualizar un vehículo existente (actualización parcial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_through_str() {
        for status in VehicleStatus::ALL {
            assert_eq!(VehicleStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(VehicleStatus::from_str("retired"), None);
    }

    #[test]
    fn test_vehicle_json_shape() {
        let vehicle = Vehicle {
            id: "2".to_string(),
            make: "Mercedes".to_string(),
            model: "Sprinter".to_string(),
            year: 2021,
            vin: "WBA3A5G59DNP26083".to_string(),
            status: VehicleStatus::Maintenance,
            driver: None,
            mileage: 62000,
        };
        let json = serde_json::to_value(&vehicle).unwrap();
        assert_eq!(json["status"], "maintenance");
        assert!(json.get("driver").is_none());
        assert_eq!(vehicle.display_name(), "Mercedes Sprinter");
    }

    #[test]
    fn test_create_request_requires_fields() {
        let request = CreateVehicleRequest {
            make: " ".to_string(),
            model: "Transit".to_string(),
            year: 2022,
            vin: "WBA3A5G59DNP26082".to_string(),
            status: VehicleStatus::Active,
            driver: None,
            mileage: 0,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("make"));
    }
}
