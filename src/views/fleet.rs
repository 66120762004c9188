//! Página de vehículos (Fleet Management)

use chrono::NaiveDate;

use super::{matches_search, Filter, Listing};
use crate::forms::JobCardForm;
use crate::models::{Vehicle, VehicleStatus};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};

pub const EMPTY_MESSAGE: &str = "No vehicles found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VehicleStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    pub inactive: usize,
}

#[derive(Debug, Clone, Default)]
pub struct VehiclesPage {
    pub search: String,
    pub status: Filter<VehicleStatus>,
    job_card_form: Option<JobCardForm>,
}

impl VehiclesPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, VehicleStatus::from_str);
    }

    /// Búsqueda por marca, modelo o VIN
    pub fn vehicles<'a>(&self, state: &'a AppState) -> Listing<&'a Vehicle> {
        let rows = state
            .vehicles()
            .iter()
            .filter(|v| self.status.matches(&v.status))
            .filter(|v| matches_search(&self.search, &[&v.make, &v.model, &v.vin]))
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn stats(state: &AppState) -> VehicleStats {
        let count = |status: VehicleStatus| state.vehicles().iter().filter(|v| v.status == status).count();
        VehicleStats {
            total: state.vehicles().len(),
            active: count(VehicleStatus::Active),
            maintenance: count(VehicleStatus::Maintenance),
            inactive: count(VehicleStatus::Inactive),
        }
    }

    /// Abrir el formulario de job card para un vehículo
    pub fn open_job_card(&mut self, state: &mut AppState, vehicle_id: &str, today: NaiveDate) -> AppResult<()> {
        let vehicle = state
            .vehicle(vehicle_id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle_id))?;
        self.job_card_form = Some(JobCardForm::for_vehicle(vehicle, today));
        state.set_show_job_card_modal(true);
        Ok(())
    }

    pub fn job_card_form(&self) -> Option<&JobCardForm> {
        self.job_card_form.as_ref()
    }

    pub fn job_card_form_mut(&mut self) -> Option<&mut JobCardForm> {
        self.job_card_form.as_mut()
    }

    pub fn close_job_card(&mut self, state: &mut AppState) {
        self.job_card_form = None;
        state.set_show_job_card_modal(false);
    }

    /// Enviar el formulario abierto: el job card se agrega al estado y el
    /// modal se cierra. Con errores de validación el modal sigue abierto.
    pub fn submit_job_card(&mut self, state: &mut AppState) -> AppResult<String> {
        let form = self
            .job_card_form
            .as_ref()
            .ok_or_else(|| bad_request_error("No job card form is open"))?;

        let mut created_id = String::new();
        form.submit(|job_card| created_id = state.add_job_card(job_card))?;

        self.close_job_card(state);
        Ok(created_id)
    }
}
