//! Modelo de Notification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationType {
    Alert,
    Reminder,
    Info,
    Success,
}

impl NotificationType {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "alert" => Some(NotificationType::Alert),
            "reminder" => Some(NotificationType::Reminder),
            "info" => Some(NotificationType::Info),
            "success" => Some(NotificationType::Success),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}
