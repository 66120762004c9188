//! Página de combustible

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::{matches_search, Listing};
use crate::models::FuelRecord;
use crate::seed;
use crate::state::AppState;
use crate::utils::format::{format_currency, gallons_to_liters};

pub const EMPTY_MESSAGE: &str = "No fuel records found";

/// Ventana de fechas relativa al día de hoy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateWindow {
    #[default]
    All,
    Week,
    Month,
    Quarter,
}

impl DateWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            DateWindow::All => "all",
            DateWindow::Week => "week",
            DateWindow::Month => "month",
            DateWindow::Quarter => "quarter",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "all" => Some(DateWindow::All),
            "week" => Some(DateWindow::Week),
            "month" => Some(DateWindow::Month),
            "quarter" => Some(DateWindow::Quarter),
            _ => None,
        }
    }

    fn max_days(&self) -> Option<i64> {
        match self {
            DateWindow::All => None,
            DateWindow::Week => Some(7),
            DateWindow::Month => Some(30),
            DateWindow::Quarter => Some(90),
        }
    }

    /// Días completos transcurridos desde el registro hasta hoy
    pub fn contains(&self, record: &FuelRecord, today: NaiveDate) -> bool {
        match self.max_days() {
            None => true,
            Some(max) => (today - record.date.date_naive()).num_days() <= max,
        }
    }
}

/// Totales de la página (sobre todos los registros, sin filtros)
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStats {
    pub total_cost: Decimal,
    pub total_gallons: f64,
    pub average_cost_per_gallon: Decimal,
    pub records: usize,
}

impl FuelStats {
    pub fn total_cost_label(&self) -> String {
        format_currency(self.total_cost)
    }

    pub fn total_gallons_label(&self) -> String {
        format!("{:.1}", self.total_gallons)
    }

    pub fn average_cost_label(&self) -> String {
        format_currency(self.average_cost_per_gallon)
    }

    pub fn total_liters(&self) -> f64 {
        gallons_to_liters(self.total_gallons)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelRow<'a> {
    pub record: &'a FuelRecord,
    pub vehicle_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FuelPage {
    pub search: String,
    pub window: DateWindow,
    records: Vec<FuelRecord>,
}

impl Default for FuelPage {
    fn default() -> Self {
        Self {
            search: String::new(),
            window: DateWindow::All,
            records: seed::fuel_records(),
        }
    }
}

impl FuelPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Una ventana desconocida no restringe por fecha
    pub fn set_date_filter(&mut self, value: &str) {
        self.window = DateWindow::from_str(value).unwrap_or_default();
    }

    /// Búsqueda por nombre de vehículo o estación, dentro de la ventana de fechas
    pub fn records<'a>(&'a self, state: &AppState, today: NaiveDate) -> Listing<FuelRow<'a>> {
        let rows = self
            .records
            .iter()
            .filter(|r| self.window.contains(r, today))
            .map(|record| FuelRow {
                record,
                vehicle_name: state.vehicle(&record.vehicle_id).map(|v| v.display_name()),
            })
            .filter(|row| {
                let name = row.vehicle_name.as_deref().unwrap_or_default();
                matches_search(&self.search, &[name, &row.record.location])
            })
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn stats(&self) -> FuelStats {
        let total_cost: Decimal = self.records.iter().map(|r| r.cost).sum();
        let total_gallons: f64 = self.records.iter().map(|r| r.gallons).sum();

        let average_cost_per_gallon = Decimal::from_f64(total_gallons)
            .filter(|gallons| !gallons.is_zero())
            .map(|gallons| (total_cost / gallons).round_dp(2))
            .unwrap_or(Decimal::ZERO);

        FuelStats {
            total_cost,
            total_gallons,
            average_cost_per_gallon,
            records: self.records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStorage::new()))
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_stats() {
        let stats = FuelPage::new().stats();
        assert_eq!(stats.records, 3);
        assert_eq!(stats.total_cost, Decimal::new(26670, 2));
        assert_eq!(stats.total_cost_label(), "$266.70");
        assert_eq!(stats.total_gallons_label(), "76.2");
        assert_eq!(stats.average_cost_label(), "$3.50");
        assert!((stats.total_liters() - 288.45).abs() < 0.01);
    }

    #[test]
    fn test_week_window_relative_to_today() {
        let state = state();
        let mut page = FuelPage::new();
        page.set_date_filter("week");

        assert_eq!(page.records(&state, day(21)).len(), 2);
        assert_eq!(page.records(&state, day(20)).len(), 3);

        page.set_date_filter("all");
        assert_eq!(page.records(&state, day(31)).len(), 3);

        page.set_date_filter("decade");
        assert_eq!(page.window, DateWindow::All);
        assert_eq!(page.records(&state, day(31)).len(), 3);
    }

    #[test]
    fn test_search_over_vehicle_and_location() {
        let state = state();
        let mut page = FuelPage::new();

        page.search = "sprinter".to_string();
        assert_eq!(page.records(&state, day(15)).rows[0].record.id, "2");

        page.search = "exxon".to_string();
        assert_eq!(page.records(&state, day(15)).rows[0].record.id, "3");

        page.search = "chevron".to_string();
        assert_eq!(page.records(&state, day(15)).empty_state(), Some("No fuel records found"));
    }
}
