//! Modelo de FuelRecord

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Carga de combustible
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub id: String,
    pub vehicle_id: String,
    pub date: DateTime<Utc>,
    pub gallons: f64,
    pub cost: Decimal,
    pub odometer: u32,
    pub location: String,
    pub fuel_type: String,
}
