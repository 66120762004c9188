//! Modelo de JobCard
//!
//! Orden de trabajo de mantenimiento ligada a un vehículo. Una sola forma de
//! registro: campos básicos más el detalle opcional que captura el formulario
//! (tipo, técnico, fechas, odómetro, prioridad y departamento).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Record;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum JobCardStatus {
    Open,
    InProgress,
    Completed,
}

impl JobCardStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobCardStatus::Open => "open",
            JobCardStatus::InProgress => "in-progress",
            JobCardStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "open" => Some(JobCardStatus::Open),
            "in-progress" => Some(JobCardStatus::InProgress),
            "completed" => Some(JobCardStatus::Completed),
            _ => None,
        }
    }
}

/// Tipo de trabajo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JobType {
    #[default]
    Scheduled,
    Emergency,
    Breakdown,
}

impl JobType {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Scheduled => "scheduled",
            JobType::Emergency => "emergency",
            JobType::Breakdown => "breakdown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum JobPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Departamento del taller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Department {
    Mechanical,
    Electrical,
    Body,
    Tires,
    Welding,
}

impl Department {
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Mechanical => "mechanical",
            Department::Electrical => "electrical",
            Department::Body => "body",
            Department::Tires => "tires",
            Department::Welding => "welding",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "mechanical" => Some(Department::Mechanical),
            "electrical" => Some(Department::Electrical),
            "body" => Some(Department::Body),
            "tires" => Some(Department::Tires),
            "welding" => Some(Department::Welding),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobCard {
    pub id: String,
    pub vehicle_id: String,
    pub description: String,
    pub status: JobCardStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician_assigned: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_in: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_out: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<JobPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl JobCard {
    /// Job card básico, sin detalle de taller
    pub fn new(vehicle_id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            vehicle_id: vehicle_id.into(),
            description: description.into(),
            status: JobCardStatus::Open,
            created_at: Utc::now(),
            updated_at: None,
            job_type: None,
            technician_assigned: None,
            date_in: None,
            date_out: None,
            odometer: None,
            priority: None,
            department: None,
        }
    }
}

impl Record for JobCard {
    const COLLECTION: &'static str = "jobCards";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
