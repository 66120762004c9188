//! Generadores de reportes
//!
//! Datos fijos de demostración; el rango de fechas solo se valida y se
//! devuelve como periodo del reporte.

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

use super::{Latency, REPORT_DELAY_MS};
use crate::models::report::{
    FleetUtilizationReport, FuelConsumptionReport, MaintenanceCostReport, MileagePoint, ReportData, ReportKind,
    ReportPeriod, VehicleConsumption, VehicleCost,
};
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::validation::validate_date_range;

pub struct ReportsApi {
    latency: Latency,
}

fn period(start: &str, end: &str) -> AppResult<ReportPeriod> {
    let (start, end) = validate_date_range(start, end)
        .map_err(|_| bad_request_error("Start date must be on or before end date (YYYY-MM-DD)"))?;
    Ok(ReportPeriod { start, end })
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

impl ReportsApi {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    /// Utilización de la flota
    pub async fn fleet_utilization(&self, start: &str, end: &str) -> AppResult<FleetUtilizationReport> {
        self.latency.wait(REPORT_DELAY_MS).await;
        let period = period(start, end)?;
        info!("📊 Reporte de utilización {} → {}", period.start, period.end);

        Ok(FleetUtilizationReport {
            period,
            total_vehicles: 15,
            active_vehicles: 12,
            utilization_rate: 0.8,
            mileage_data: vec![
                MileagePoint { date: day(2024, 1, 1), mileage: 12500 },
                MileagePoint { date: day(2024, 1, 8), mileage: 14200 },
                MileagePoint { date: day(2024, 1, 15), mileage: 16800 },
            ],
        })
    }

    /// Consumo de combustible
    pub async fn fuel_consumption(&self, start: &str, end: &str) -> AppResult<FuelConsumptionReport> {
        self.latency.wait(REPORT_DELAY_MS).await;
        let period = period(start, end)?;
        info!("⛽ Reporte de combustible {} → {}", period.start, period.end);

        Ok(FuelConsumptionReport {
            period,
            total_consumption: 2580.0,
            average_mpg: 8.2,
            cost_per_mile: Decimal::new(42, 2),
            consumption_by_vehicle: [("1", 850.0), ("2", 920.0), ("3", 810.0)]
                .into_iter()
                .map(|(vehicle_id, consumption)| VehicleConsumption {
                    vehicle_id: vehicle_id.to_string(),
                    consumption,
                })
                .collect(),
        })
    }

    /// Costos de mantenimiento
    pub async fn maintenance_costs(&self, start: &str, end: &str) -> AppResult<MaintenanceCostReport> {
        self.latency.wait(REPORT_DELAY_MS).await;
        let period = period(start, end)?;
        info!("🔧 Reporte de mantenimiento {} → {}", period.start, period.end);

        Ok(MaintenanceCostReport {
            period,
            total_cost: Decimal::from(12500),
            preventative_cost: Decimal::from(4200),
            repair_cost: Decimal::from(8300),
            cost_by_vehicle: [("1", 3200), ("2", 5800), ("3", 3500)]
                .into_iter()
                .map(|(vehicle_id, cost)| VehicleCost {
                    vehicle_id: vehicle_id.to_string(),
                    cost: Decimal::from(cost),
                })
                .collect(),
        })
    }

    /// Reporte para el selector de la pantalla. Los tipos sin generador propio
    /// (conductores, cumplimiento) muestran la utilización de la flota.
    pub async fn generate(&self, kind: ReportKind, start: &str, end: &str) -> AppResult<ReportData> {
        match kind {
            ReportKind::Fuel => self.fuel_consumption(start, end).await.map(ReportData::FuelConsumption),
            ReportKind::Maintenance => self.maintenance_costs(start, end).await.map(ReportData::MaintenanceCosts),
            ReportKind::Fleet | ReportKind::Driver | ReportKind::Compliance => {
                self.fleet_utilization(start, end).await.map(ReportData::FleetUtilization)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    fn api() -> ReportsApi {
        ReportsApi::new(Latency::disabled())
    }

    #[tokio::test]
    async fn test_fleet_utilization() {
        let report = api().fleet_utilization("2024-01-01", "2024-01-31").await.unwrap();
        assert_eq!(report.total_vehicles, 15);
        assert_eq!(report.active_vehicles, 12);
        assert_eq!(report.mileage_data.len(), 3);
        assert_eq!(report.period.end, day(2024, 1, 31));
    }

    #[tokio::test]
    async fn test_maintenance_costs_add_up() {
        let report = api().maintenance_costs("2024-01-01", "2024-01-31").await.unwrap();
        assert_eq!(report.preventative_cost + report.repair_cost, report.total_cost);
        let by_vehicle: Decimal = report.cost_by_vehicle.iter().map(|c| c.cost).sum();
        assert_eq!(by_vehicle, report.total_cost);
    }

    #[tokio::test]
    async fn test_fuel_consumption_by_vehicle() {
        let report = api().fuel_consumption("2024-01-01", "2024-01-31").await.unwrap();
        let total: f64 = report.consumption_by_vehicle.iter().map(|c| c.consumption).sum();
        assert!((total - report.total_consumption).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_inverted_range_is_bad_request() {
        let result = api().fuel_consumption("2024-02-01", "2024-01-01").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_generate_falls_back_to_fleet_utilization() {
        let data = api().generate(ReportKind::Driver, "2024-01-01", "2024-01-31").await.unwrap();
        assert!(matches!(data, ReportData::FleetUtilization(_)));

        let data = api().generate(ReportKind::Maintenance, "2024-01-01", "2024-01-31").await.unwrap();
        assert!(matches!(data, ReportData::MaintenanceCosts(_)));
    }
}
