//! Página de notificaciones

use log::debug;

use super::Listing;
use crate::models::{Notification, NotificationType};
use crate::seed;
use crate::utils::format::{format_date, truncate_text};

pub const EMPTY_MESSAGE: &str = "No notifications found matching the selected filter.";

const PREVIEW_LENGTH: usize = 60;

/// Fecha de la notificación como se muestra en la lista
pub fn timestamp_label(notification: &Notification) -> String {
    format_date(&notification.timestamp.to_rfc3339())
}

/// Mensaje recortado para la vista compacta
pub fn message_preview(notification: &Notification) -> String {
    truncate_text(&notification.message, PREVIEW_LENGTH)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Type(NotificationType),
    Unknown(String),
}

impl NotificationFilter {
    /// "all", "unread" o un tipo; cualquier otro valor no selecciona nada
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => NotificationFilter::All,
            "unread" => NotificationFilter::Unread,
            other => match NotificationType::from_str(other) {
                Some(kind) => NotificationFilter::Type(kind),
                None => NotificationFilter::Unknown(other.to_string()),
            },
        }
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::Type(kind) => notification.kind == *kind,
            NotificationFilter::Unknown(_) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCounts {
    pub total: usize,
    pub unread: usize,
    pub alerts: usize,
    pub reminders: usize,
}

#[derive(Debug, Clone)]
pub struct NotificationsPage {
    pub filter: NotificationFilter,
    notifications: Vec<Notification>,
}

impl Default for NotificationsPage {
    fn default() -> Self {
        Self {
            filter: NotificationFilter::All,
            notifications: seed::notifications(),
        }
    }
}

impl NotificationsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_filter(&mut self, value: &str) {
        self.filter = NotificationFilter::parse(value);
    }

    pub fn notifications(&self) -> Listing<&Notification> {
        let rows = self.notifications.iter().filter(|n| self.filter.matches(n)).collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn mark_as_read(&mut self, id: &str) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        self.notifications.iter_mut().for_each(|n| n.read = true);
        debug!("🔔 Todas las notificaciones marcadas como leídas");
    }

    pub fn delete(&mut self, id: &str) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn counts(&self) -> NotificationCounts {
        let of_kind = |kind: NotificationType| self.notifications.iter().filter(|n| n.kind == kind).count();
        NotificationCounts {
            total: self.notifications.len(),
            unread: self.notifications.iter().filter(|n| !n.read).count(),
            alerts: of_kind(NotificationType::Alert),
            reminders: of_kind(NotificationType::Reminder),
        }
    }
}
