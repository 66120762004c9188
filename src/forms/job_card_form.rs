//! Formulario de Job Card
//!
//! Se abre para un vehículo concreto; el odómetro se completa con su
//! kilometraje actual y la fecha de entrada con el día de hoy.

use chrono::{NaiveDate, Utc};
use log::info;
use validator::Validate;

use super::{optional_date, optional_text, required_date};
use crate::models::{Department, JobCard, JobCardStatus, JobPriority, JobType, Vehicle};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, Validate)]
pub struct JobCardForm {
    #[validate(custom = "validate_not_empty")]
    pub vehicle_id: String,

    pub job_type: JobType,

    #[validate(custom = "validate_not_empty")]
    pub description: String,

    #[validate(custom = "validate_not_empty")]
    pub technician_assigned: String,

    #[validate(custom = "validate_not_empty")]
    pub date_in: String,

    pub date_out: String,

    #[validate(custom = "validate_not_empty")]
    pub odometer: String,

    pub priority: Option<JobPriority>,
    pub department: Option<Department>,
}

impl JobCardForm {
    pub fn for_vehicle(vehicle: &Vehicle, today: NaiveDate) -> Self {
        Self {
            vehicle_id: vehicle.id.clone(),
            job_type: JobType::default(),
            description: String::new(),
            technician_assigned: String::new(),
            date_in: today.format("%Y-%m-%d").to_string(),
            date_out: String::new(),
            odometer: vehicle.mileage.to_string(),
            priority: None,
            department: None,
        }
    }

    /// Construir el job card (estado `open`, sin id todavía)
    pub fn build(&self) -> AppResult<JobCard> {
        self.validate()?;

        let odometer = self
            .odometer
            .trim()
            .parse::<u32>()
            .map_err(|_| validation_error("odometer", "odometer must be a whole number"))?;

        Ok(JobCard {
            job_type: Some(self.job_type),
            technician_assigned: optional_text(&self.technician_assigned),
            date_in: Some(required_date("date_in", &self.date_in)?),
            date_out: optional_date("date_out", &self.date_out)?,
            odometer: Some(odometer),
            priority: self.priority,
            department: self.department,
            status: JobCardStatus::Open,
            created_at: Utc::now(),
            ..JobCard::new(self.vehicle_id.trim(), self.description.trim())
        })
    }

    /// Validar, construir y entregar el job card al callback
    pub fn submit<F>(&self, on_submit: F) -> AppResult<()>
    where
        F: FnOnce(JobCard),
    {
        let job_card = self.build()?;
        info!("🧾 Job card enviado para vehículo {}", job_card.vehicle_id);
        on_submit(job_card);
        Ok(())
    }
}
