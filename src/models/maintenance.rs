//! Modelo de MaintenanceRecord

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceType {
    Scheduled,
    Repair,
    Inspection,
}

impl MaintenanceType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(MaintenanceType::Scheduled),
            "repair" => Some(MaintenanceType::Repair),
            "inspection" => Some(MaintenanceType::Inspection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl MaintenanceStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(MaintenanceStatus::Pending),
            "in-progress" => Some(MaintenanceStatus::InProgress),
            "completed" => Some(MaintenanceStatus::Completed),
            "overdue" => Some(MaintenanceStatus::Overdue),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: String,
    pub vehicle_id: String,
    #[serde(rename = "type")]
    pub kind: MaintenanceType,
    pub description: String,
    pub status: MaintenanceStatus,
    pub scheduled_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    pub mileage: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
