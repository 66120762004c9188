//! Modelos de Reportes
//!
//! Resultados de los generadores de reportes de la API simulada.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tipos de reporte disponibles en la pantalla de Reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    #[default]
    Fleet,
    Fuel,
    Maintenance,
    Driver,
    Compliance,
}

impl ReportKind {
    pub const ALL: [ReportKind; 5] = [
        Self::Fleet,
        Self::Fuel,
        Self::Maintenance,
        Self::Driver,
        Self::Compliance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Fleet => "fleet",
            ReportKind::Fuel => "fuel",
            ReportKind::Maintenance => "maintenance",
            ReportKind::Driver => "driver",
            ReportKind::Compliance => "compliance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportKind::Fleet => "Fleet Utilization",
            ReportKind::Fuel => "Fuel Consumption",
            ReportKind::Maintenance => "Maintenance Costs",
            ReportKind::Driver => "Driver Performance",
            ReportKind::Compliance => "Compliance Status",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MileagePoint {
    pub date: NaiveDate,
    pub mileage: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FleetUtilizationReport {
    pub period: ReportPeriod,
    pub total_vehicles: u32,
    pub active_vehicles: u32,
    pub utilization_rate: f64,
    pub mileage_data: Vec<MileagePoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleConsumption {
    pub vehicle_id: String,
    pub consumption: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumptionReport {
    pub period: ReportPeriod,
    pub total_consumption: f64,
    pub average_mpg: f64,
    pub cost_per_mile: Decimal,
    pub consumption_by_vehicle: Vec<VehicleConsumption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCost {
    pub vehicle_id: String,
    pub cost: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceCostReport {
    pub period: ReportPeriod,
    pub total_cost: Decimal,
    pub preventative_cost: Decimal,
    pub repair_cost: Decimal,
    pub cost_by_vehicle: Vec<VehicleCost>,
}

/// Reporte cargado en la pantalla de Reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReportData {
    FleetUtilization(FleetUtilizationReport),
    FuelConsumption(FuelConsumptionReport),
    MaintenanceCosts(MaintenanceCostReport),
}
