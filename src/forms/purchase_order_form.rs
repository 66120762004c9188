//! Formulario de orden de compra

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use validator::Validate;

use super::{optional_text, required_date, LineItems};
use crate::models::{new_record_id, PurchaseOrder, PurchaseOrderStatus};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, Validate)]
pub struct PurchaseOrderForm {
    #[validate(custom = "validate_not_empty")]
    pub supplier: String,

    #[validate(custom = "validate_not_empty")]
    pub order_date: String,

    #[validate(custom = "validate_not_empty")]
    pub expected_delivery: String,

    pub items: LineItems,

    pub notes: String,
}

impl PurchaseOrderForm {
    /// Formulario vacío con la fecha de pedido de hoy
    pub fn new(today: NaiveDate) -> Self {
        Self {
            supplier: String::new(),
            order_date: today.format("%Y-%m-%d").to_string(),
            expected_delivery: String::new(),
            items: LineItems::new(),
            notes: String::new(),
        }
    }

    pub fn total(&self) -> AppResult<Decimal> {
        self.items.total()
    }

    /// Construir la orden en estado `pending`
    pub fn build(&self) -> AppResult<PurchaseOrder> {
        self.validate()?;
        self.items.validate()?;

        Ok(PurchaseOrder {
            id: new_record_id(),
            supplier: self.supplier.trim().to_string(),
            order_date: required_date("order_date", &self.order_date)?,
            expected_delivery: required_date("expected_delivery", &self.expected_delivery)?,
            status: PurchaseOrderStatus::Pending,
            total: self.total()?,
            items: self.items.items().to_vec(),
            notes: optional_text(&self.notes),
        })
    }

    pub fn submit<F>(&self, on_submit: F) -> AppResult<()>
    where
        F: FnOnce(PurchaseOrder),
    {
        let order = self.build()?;
        info!("🛒 Orden de compra para {} por {}", order.supplier, order.total);
        on_submit(order);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn form() -> PurchaseOrderForm {
        let mut form = PurchaseOrderForm::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        form.supplier = "AutoParts Inc".to_string();
        form.expected_delivery = "2024-01-22".to_string();
        form
    }

    #[test]
    fn test_order_total_and_status() {
        let parts = seed::parts();
        let mut form = form();
        form.items.add();
        form.items.select_part(0, "P001", &parts);
        form.items.set_quantity(0, 10);
        form.items.add();
        form.items.select_part(1, "P002", &parts);
        form.items.set_quantity(1, 2);

        let mut submitted = None;
        form.submit(|order| submitted = Some(order)).unwrap();

        let order = submitted.unwrap();
        assert_eq!(order.status, PurchaseOrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(18090, 2));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.notes, None);
        assert!(!order.id.is_empty());
    }

    #[test]
    fn test_supplier_is_required() {
        let mut form = form();
        form.supplier = String::new();
        let mut called = false;
        assert!(form.submit(|_| called = true).is_err());
        assert!(!called);
    }

    #[test]
    fn test_expected_delivery_must_be_a_date() {
        let mut form = form();
        form.expected_delivery = "soon".to_string();
        assert!(form.build().is_err());
    }
}
