//! Órdenes de compra y salidas de repuestos
//!
//! Se construyen en los formularios y se entregan al callback del llamador;
//! el estado compartido no las guarda.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PurchaseOrderStatus {
    #[default]
    Pending,
    Approved,
    Received,
    Cancelled,
}

/// Línea de pedido (orden de compra o salida de repuestos)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub part_id: String,
    pub part_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    /// `None` si el producto no cabe en un `Decimal`
    pub fn subtotal(&self) -> Option<Decimal> {
        Decimal::from(self.quantity).checked_mul(self.unit_price)
    }
}

/// Suma de cantidad × precio unitario de todas las líneas; `None` si desborda
pub fn line_items_total(items: &[LineItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.subtotal()?))
}

pub type PurchaseOrderItem = LineItem;
pub type PartIssueItem = LineItem;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub id: String,
    pub supplier: String,
    pub order_date: NaiveDate,
    pub expected_delivery: NaiveDate,
    pub status: PurchaseOrderStatus,
    pub items: Vec<PurchaseOrderItem>,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PartIssue {
    pub id: String,
    pub issue_date: NaiveDate,
    pub issued_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_card_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    pub items: Vec<PartIssueItem>,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_items_total() {
        let items = vec![
            LineItem {
                part_id: "P001".to_string(),
                part_name: "Oil Filter".to_string(),
                quantity: 3,
                unit_price: Decimal::new(899, 2),
            },
            LineItem {
                part_id: "P002".to_string(),
                part_name: "Brake Pad Set".to_string(),
                quantity: 2,
                unit_price: Decimal::new(4550, 2),
            },
        ];
        assert_eq!(line_items_total(&items), Some(Decimal::new(11797, 2)));
        assert_eq!(line_items_total(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_overflowing_total_is_none() {
        let item = LineItem {
            part_id: "P001".to_string(),
            part_name: "Oil Filter".to_string(),
            quantity: u32::MAX,
            unit_price: Decimal::MAX,
        };
        assert_eq!(item.subtotal(), None);
        assert_eq!(line_items_total(&[item]), None);
    }
}
