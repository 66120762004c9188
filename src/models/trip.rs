//! Modelo de Trip

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Record;
use crate::utils::validation::validate_not_empty;

/// Estado del viaje
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TripStatus {
    Active,
    Completed,
    Scheduled,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Active => "active",
            TripStatus::Completed => "completed",
            TripStatus::Scheduled => "scheduled",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(TripStatus::Active),
            "completed" => Some(TripStatus::Completed),
            "scheduled" => Some(TripStatus::Scheduled),
            _ => None,
        }
    }
}

/// Viaje; `vehicle_id` y `driver_id` son referencias blandas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    pub status: TripStatus,
    pub start_time: DateTime<Utc>,
    pub distance: f64,
}

impl Record for Trip {
    const COLLECTION: &'static str = "trips";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Request para crear un nuevo viaje
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_id: String,

    #[validate(custom = "validate_not_empty")]
    pub driver_id: String,

    #[validate(custom = "validate_not_empty")]
    pub origin: String,

    #[validate(custom = "validate_not_empty")]
    pub destination: String,

    pub status: TripStatus,

    pub start_time: DateTime<Utc>,

    pub distance: f64,
}

/// Request para actualizar un viaje (actualización parcial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TripStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}
