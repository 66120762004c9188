//! Inventario de repuestos
//!
//! Además de la tabla filtrada, la página abre los formularios de orden de
//! compra y de salida de repuestos y guarda lo que se envía.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{matches_search, Listing};
use crate::forms::{PartIssueForm, PurchaseOrderForm};
use crate::models::{Part, PartIssue, PurchaseOrder};
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult};
use crate::utils::format::{format_currency, group_by};

pub const EMPTY_MESSAGE: &str = "No parts found";

#[derive(Debug, Clone, PartialEq)]
pub struct PartsStats {
    pub total_parts: usize,
    pub low_stock: usize,
    pub categories: usize,
    pub inventory_value: Decimal,
}

impl PartsStats {
    pub fn inventory_value_label(&self) -> String {
        format_currency(self.inventory_value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartsPage {
    pub search: String,
    /// `None` es "all"
    pub category: Option<String>,
    pub low_stock_only: bool,
    purchase_order_form: Option<PurchaseOrderForm>,
    part_issue_form: Option<PartIssueForm>,
    purchase_orders: Vec<PurchaseOrder>,
    part_issues: Vec<PartIssue>,
}

impl PartsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.category = match value {
            "all" | "" => None,
            other => Some(other.to_string()),
        };
    }

    /// Categorías distintas, en orden de aparición
    pub fn categories(state: &AppState) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for part in state.parts() {
            if !categories.contains(&part.category.as_str()) {
                categories.push(&part.category);
            }
        }
        categories
    }

    /// Repuestos agrupados por categoría, en orden alfabético
    pub fn by_category(state: &AppState) -> BTreeMap<String, Vec<&Part>> {
        group_by(state.parts(), |p| p.category.clone())
    }

    pub fn parts<'a>(&self, state: &'a AppState) -> Listing<&'a Part> {
        let rows = state
            .parts()
            .iter()
            .filter(|p| self.category.as_deref().map_or(true, |c| p.category == c))
            .filter(|p| !self.low_stock_only || p.is_low_stock())
            .filter(|p| matches_search(&self.search, &[&p.name, &p.part_number]))
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn stats(state: &AppState) -> PartsStats {
        PartsStats {
            total_parts: state.parts().len(),
            low_stock: state.parts().iter().filter(|p| p.is_low_stock()).count(),
            categories: Self::categories(state).len(),
            inventory_value: state.parts().iter().map(Part::stock_value).sum(),
        }
    }

    pub fn open_purchase_order(&mut self, today: NaiveDate) -> &mut PurchaseOrderForm {
        self.purchase_order_form.insert(PurchaseOrderForm::new(today))
    }

    pub fn purchase_order_form_mut(&mut self) -> Option<&mut PurchaseOrderForm> {
        self.purchase_order_form.as_mut()
    }

    pub fn submit_purchase_order(&mut self) -> AppResult<String> {
        let form = self
            .purchase_order_form
            .as_ref()
            .ok_or_else(|| bad_request_error("No purchase order form is open"))?;

        let mut created_id = String::new();
        let orders = &mut self.purchase_orders;
        form.submit(|order| {
            created_id = order.id.clone();
            orders.push(order);
        })?;

        self.purchase_order_form = None;
        Ok(created_id)
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.purchase_orders
    }

    pub fn open_part_issue(&mut self, today: NaiveDate) -> &mut PartIssueForm {
        self.part_issue_form.insert(PartIssueForm::new(today))
    }

    pub fn part_issue_form_mut(&mut self) -> Option<&mut PartIssueForm> {
        self.part_issue_form.as_mut()
    }

    pub fn submit_part_issue(&mut self) -> AppResult<String> {
        let form = self
            .part_issue_form
            .as_ref()
            .ok_or_else(|| bad_request_error("No part issue form is open"))?;

        let mut created_id = String::new();
        let issues = &mut self.part_issues;
        form.submit(|issue| {
            created_id = issue.id.clone();
            issues.push(issue);
        })?;

        self.part_issue_form = None;
        Ok(created_id)
    }

    pub fn part_issues(&self) -> &[PartIssue] {
        &self.part_issues
    }

    pub fn close_forms(&mut self) {
        self.purchase_order_form = None;
        self.part_issue_form = None;
    }
}
