//! Página de cumplimiento normativo

use std::collections::HashMap;

use chrono::NaiveDate;

use super::{Filter, Listing};
use crate::models::{ComplianceItem, ComplianceStatus};
use crate::seed;
use crate::utils::format::days_since;

pub const EMPTY_MESSAGE: &str = "No compliance documents found matching the selected filter.";

#[derive(Debug, Clone)]
pub struct CompliancePage {
    pub status: Filter<ComplianceStatus>,
    items: Vec<ComplianceItem>,
}

impl Default for CompliancePage {
    fn default() -> Self {
        Self {
            status: Filter::All,
            items: seed::compliance_items(),
        }
    }
}

impl CompliancePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status_filter(&mut self, value: &str) {
        self.status = Filter::parse(value, ComplianceStatus::from_str);
    }

    pub fn items(&self) -> Listing<&ComplianceItem> {
        let rows = self.items.iter().filter(|i| self.status.matches(&i.status)).collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    /// Cantidad de documentos por estado (todos los estados aparecen)
    pub fn counts(&self) -> HashMap<ComplianceStatus, usize> {
        let mut counts: HashMap<ComplianceStatus, usize> =
            ComplianceStatus::ALL.into_iter().map(|status| (status, 0)).collect();
        for item in &self.items {
            *counts.entry(item.status).or_default() += 1;
        }
        counts
    }

    pub fn expiring(&self) -> Vec<&ComplianceItem> {
        self.with_status(ComplianceStatus::Expiring)
    }

    pub fn non_compliant(&self) -> Vec<&ComplianceItem> {
        self.with_status(ComplianceStatus::NonCompliant)
    }

    /// Días hasta el vencimiento (negativo si ya venció); `None` sin fecha
    pub fn days_until_expiry(item: &ComplianceItem, today: NaiveDate) -> Option<i64> {
        let expiration = item.expiration_date?;
        days_since(&expiration.format("%Y-%m-%d").to_string(), today).map(|days| -days)
    }

    fn with_status(&self, status: ComplianceStatus) -> Vec<&ComplianceItem> {
        self.items.iter().filter(|i| i.status == status).collect()
    }
}
