//! Página de configuración
//!
//! Los campos se editan por nombre, igual que los inputs del formulario
//! (`companyName`, `emailNotifications`, ...).

use log::info;

use crate::models::auth::ChangePasswordRequest;
use crate::models::settings::{GeneralSettings, NotificationSettings};
use crate::services::AuthService;
use crate::utils::errors::{bad_request_error, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Notifications,
    Security,
    Users,
    Billing,
}

impl SettingsTab {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "general" => Some(SettingsTab::General),
            "notifications" => Some(SettingsTab::Notifications),
            "security" => Some(SettingsTab::Security),
            "users" => Some(SettingsTab::Users),
            "billing" => Some(SettingsTab::Billing),
            _ => None,
        }
    }
}

/// Formulario de cambio de contraseña de la pestaña Security
#[derive(Debug, Clone, Default)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SettingsPage {
    pub tab: SettingsTab,
    pub general: GeneralSettings,
    pub notifications: NotificationSettings,
    pub password: PasswordForm,
}

impl SettingsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, value: &str) {
        if let Some(tab) = SettingsTab::from_str(value) {
            self.tab = tab;
        }
    }

    pub fn set_general(&mut self, name: &str, value: impl Into<String>) -> AppResult<()> {
        let field = match name {
            "companyName" => &mut self.general.company_name,
            "timeZone" => &mut self.general.time_zone,
            "dateFormat" => &mut self.general.date_format,
            "distanceUnit" => &mut self.general.distance_unit,
            "fuelUnit" => &mut self.general.fuel_unit,
            "currencyCode" => &mut self.general.currency_code,
            other => return Err(bad_request_error(&format!("Unknown setting '{}'", other))),
        };
        *field = value.into();
        Ok(())
    }

    pub fn set_notification(&mut self, name: &str, checked: bool) -> AppResult<()> {
        let flag = match name {
            "emailNotifications" => &mut self.notifications.email_notifications,
            "appNotifications" => &mut self.notifications.app_notifications,
            "maintenanceAlerts" => &mut self.notifications.maintenance_alerts,
            "fuelAlerts" => &mut self.notifications.fuel_alerts,
            "driverAlerts" => &mut self.notifications.driver_alerts,
            "weeklyReports" => &mut self.notifications.weekly_reports,
            "monthlyReports" => &mut self.notifications.monthly_reports,
            other => return Err(bad_request_error(&format!("Unknown setting '{}'", other))),
        };
        *flag = checked;
        Ok(())
    }

    /// "Save Changes": no hay backend, solo se registra
    pub fn save(&self) {
        info!(
            "⚙️ Configuración guardada para {} ({}, {})",
            self.general.company_name, self.general.time_zone, self.general.currency_code
        );
    }

    pub async fn update_password(&mut self, auth: &AuthService) -> AppResult<()> {
        if self.password.new_password != self.password.confirm_password {
            return Err(bad_request_error("New passwords do not match"));
        }

        let request = ChangePasswordRequest {
            current_password: self.password.current_password.clone(),
            new_password: self.password.new_password.clone(),
        };
        auth.change_password(&request).await?;

        self.password = PasswordForm::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::EnvironmentConfig;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_set_fields_by_name() {
        let mut page = SettingsPage::new();
        page.set_general("companyName", "Acme Logistics").unwrap();
        page.set_notification("weeklyReports", false).unwrap();

        assert_eq!(page.general.company_name, "Acme Logistics");
        assert!(!page.notifications.weekly_reports);
        assert!(page.notifications.monthly_reports);

        assert!(page.set_general("logo", "x").is_err());
        assert!(page.set_notification("smsAlerts", true).is_err());
    }

    #[test]
    fn test_select_tab_ignores_unknown() {
        let mut page = SettingsPage::new();
        page.select_tab("security");
        assert_eq!(page.tab, SettingsTab::Security);
        page.select_tab("integrations");
        assert_eq!(page.tab, SettingsTab::Security);
    }

    #[tokio::test]
    async fn test_update_password() {
        let auth = AuthService::new(&EnvironmentConfig::for_tests(), Arc::new(MemoryStorage::new())).unwrap();
        let mut page = SettingsPage::new();

        page.password.current_password = "password123".to_string();
        page.password.new_password = "n3w-password".to_string();
        page.password.confirm_password = "other".to_string();
        let err = page.update_password(&auth).await.unwrap_err();
        assert_eq!(err.user_message(), "New passwords do not match");

        page.password.confirm_password = "n3w-password".to_string();
        page.update_password(&auth).await.unwrap();
        assert!(page.password.new_password.is_empty());
    }
}
