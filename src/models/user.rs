//! Modelo de User (usuarios de la consola)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roles del sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    Administrator,
    Manager,
    Dispatcher,
    Driver,
    Maintenance,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "administrator",
            UserRole::Manager => "manager",
            UserRole::Dispatcher => "dispatcher",
            UserRole::Driver => "driver",
            UserRole::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "administrator" => Some(UserRole::Administrator),
            "manager" => Some(UserRole::Manager),
            "dispatcher" => Some(UserRole::Dispatcher),
            "driver" => Some(UserRole::Driver),
            "maintenance" => Some(UserRole::Maintenance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub phone: String,
    pub last_login: DateTime<Utc>,
}
