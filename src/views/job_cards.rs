//! Página de job cards

use super::maintenance::UNKNOWN_VEHICLE;
use super::{matches_search, Filter, Listing};
use crate::models::{Department, JobCard, JobCardStatus};
use crate::state::AppState;

pub const EMPTY_MESSAGE: &str = "No job cards found";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobCardStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCardRow<'a> {
    pub job_card: &'a JobCard,
    pub vehicle_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct JobCardsPage {
    pub search: String,
    pub department: Filter<Department>,
    pub status: Filter<JobCardStatus>,
}

impl JobCardsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_department_filter(&mut self, value: &str) {
        self.department = Filter::parse(value, Department::from_str);
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, JobCardStatus::from_str);
    }

    /// Un job card sin departamento solo aparece con el filtro "all"
    pub fn job_cards<'a>(&self, state: &'a AppState) -> Listing<JobCardRow<'a>> {
        let rows = state
            .job_cards()
            .iter()
            .filter(|card| match (&self.department, card.department) {
                (Filter::All, _) => true,
                (Filter::Only(wanted), Some(department)) => *wanted == department,
                (Filter::Only(_), None) => false,
                (Filter::Unknown(_), _) => false,
            })
            .filter(|card| self.status.matches(&card.status))
            .map(|job_card| JobCardRow {
                job_card,
                vehicle_name: state
                    .vehicle(&job_card.vehicle_id)
                    .map(|v| v.display_name())
                    .unwrap_or_else(|| UNKNOWN_VEHICLE.to_string()),
            })
            .filter(|row| matches_search(&self.search, &[&row.vehicle_name, &row.job_card.id]))
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn stats(state: &AppState) -> JobCardStats {
        let count = |status: JobCardStatus| state.job_cards().iter().filter(|c| c.status == status).count();
        JobCardStats {
            total: state.job_cards().len(),
            open: count(JobCardStatus::Open),
            in_progress: count(JobCardStatus::InProgress),
            completed: count(JobCardStatus::Completed),
        }
    }

    /// Cambiar el estado de un job card existente
    pub fn set_status(state: &mut AppState, job_card_id: &str, status: JobCardStatus) {
        let Some(mut card) = state.job_cards().iter().find(|c| c.id == job_card_id).cloned() else {
            return;
        };
        card.status = status;
        card.updated_at = Some(chrono::Utc::now());
        state.update_job_card(card);
    }
}
