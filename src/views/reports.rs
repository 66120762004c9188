//! Reportes y analítica
//!
//! Cambiar el tipo de reporte o el rango de fechas descarta los datos
//! cargados; `load` vuelve a pedirlos a la API simulada.

use log::{error, info};

use crate::api::reports::ReportsApi;
use crate::models::report::{ReportData, ReportKind};
use crate::utils::format::{days_between, random_color};

pub const EMPTY_MESSAGE: &str = "No report data available for the selected criteria.";
pub const DEFAULT_START_DATE: &str = "2024-01-01";
pub const DEFAULT_END_DATE: &str = "2024-01-31";

#[derive(Debug, Clone)]
pub struct ReportsPage {
    active: ReportKind,
    start_date: String,
    end_date: String,
    data: Option<ReportData>,
    loading: bool,
    error: Option<String>,
}

impl Default for ReportsPage {
    fn default() -> Self {
        Self {
            active: ReportKind::Fleet,
            start_date: DEFAULT_START_DATE.to_string(),
            end_date: DEFAULT_END_DATE.to_string(),
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl ReportsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ReportKind {
        self.active
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn data(&self) -> Option<&ReportData> {
        self.data.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Días cubiertos por el rango (`None` si alguna fecha es inválida)
    pub fn range_days(&self) -> Option<i64> {
        days_between(&self.start_date, &self.end_date)
    }

    /// Un color por serie del gráfico del reporte cargado
    pub fn chart_colors(&self) -> Vec<String> {
        let series = match &self.data {
            Some(ReportData::FleetUtilization(report)) => report.mileage_data.len(),
            Some(ReportData::FuelConsumption(report)) => report.consumption_by_vehicle.len(),
            Some(ReportData::MaintenanceCosts(report)) => report.cost_by_vehicle.len(),
            None => 0,
        };
        (0..series).map(|_| random_color()).collect()
    }

    pub fn select(&mut self, kind: ReportKind) {
        if self.active != kind {
            self.active = kind;
            self.data = None;
        }
    }

    pub fn set_date_range(&mut self, start: impl Into<String>, end: impl Into<String>) {
        self.start_date = start.into();
        self.end_date = end.into();
        self.data = None;
    }

    /// Cargar el reporte activo. Un error deja la página sin datos.
    pub async fn load(&mut self, api: &ReportsApi) {
        self.loading = true;
        self.error = None;

        match api.generate(self.active, &self.start_date, &self.end_date).await {
            Ok(data) => {
                info!("📊 Reporte {} cargado", self.active.as_str());
                self.data = Some(data);
            }
            Err(e) => {
                error!("❌ Error cargando el reporte {}: {}", self.active.as_str(), e);
                self.data = None;
                self.error = Some(e.user_message());
            }
        }

        self.loading = false;
    }

    pub fn empty_state(&self) -> Option<&'static str> {
        (!self.loading && self.data.is_none()).then_some(EMPTY_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Latency;

    fn api() -> ReportsApi {
        ReportsApi::new(Latency::disabled())
    }

    #[tokio::test]
    async fn test_load_default_report() {
        let mut page = ReportsPage::new();
        assert_eq!(page.empty_state(), Some(EMPTY_MESSAGE));

        page.load(&api()).await;
        assert!(matches!(page.data(), Some(ReportData::FleetUtilization(_))));
        assert_eq!(page.empty_state(), None);
        assert!(!page.is_loading());
        assert_eq!(page.range_days(), Some(30));

        let colors = page.chart_colors();
        assert_eq!(colors.len(), 3);
        assert!(colors.iter().all(|c| c.len() == 7 && c.starts_with('#')));
    }

    #[tokio::test]
    async fn test_switching_report_clears_data() {
        let mut page = ReportsPage::new();
        page.load(&api()).await;

        page.select(ReportKind::Maintenance);
        assert!(page.data().is_none());

        page.load(&api()).await;
        assert!(matches!(page.data(), Some(ReportData::MaintenanceCosts(_))));
    }

    #[tokio::test]
    async fn test_invalid_range_shows_empty_state() {
        let mut page = ReportsPage::new();
        page.set_date_range("2024-02-01", "2024-01-01");
        page.load(&api()).await;

        assert!(page.data().is_none());
        assert_eq!(page.empty_state(), Some(EMPTY_MESSAGE));
        assert_eq!(page.error(), Some("Start date must be on or before end date (YYYY-MM-DD)"));
    }
}
