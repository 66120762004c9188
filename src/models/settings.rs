//! Preferencias de la consola (pantalla de Settings)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub company_name: String,
    pub time_zone: String,
    pub date_format: String,
    pub distance_unit: String,
    pub fuel_unit: String,
    pub currency_code: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "FleetPro Inc.".to_string(),
            time_zone: "America/New_York".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            distance_unit: "miles".to_string(),
            fuel_unit: "gallons".to_string(),
            currency_code: "USD".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub app_notifications: bool,
    pub maintenance_alerts: bool,
    pub fuel_alerts: bool,
    pub driver_alerts: bool,
    pub weekly_reports: bool,
    pub monthly_reports: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            app_notifications: true,
            maintenance_alerts: true,
            fuel_alerts: true,
            driver_alerts: true,
            weekly_reports: true,
            monthly_reports: true,
        }
    }
}
