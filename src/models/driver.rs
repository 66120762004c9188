//! Modelo de Driver

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use crate::utils::validation::validate_not_empty;

/// Estado del conductor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DriverStatus {
    Active,
    Inactive,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(DriverStatus::Active),
            "inactive" => Some(DriverStatus::Inactive),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub license: String,
    pub phone: String,
    pub status: DriverStatus,
    /// Id del vehículo asignado (referencia blanda)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle: Option<String>,
}

impl Record for Driver {
    const COLLECTION: &'static str = "drivers";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Request para crear un nuevo conductor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_empty")]
    pub name: String,

    #[validate(custom = "validate_not_empty")]
    pub license: String,

    #[validate(custom = "validate_not_empty")]
    pub phone: String,

    pub status: DriverStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle: Option<String>,
}

/// Request para actualizar un conductor (actualización parcial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DriverStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_vehicle: Option<String>,
}
