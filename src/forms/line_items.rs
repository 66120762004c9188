//! Líneas de repuestos compartidas por la orden de compra y la salida de repuestos

use rust_decimal::Decimal;

use crate::models::{line_items_total, LineItem, Part};
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_price;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItems {
    items: Vec<LineItem>,
}

impl LineItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Agregar una línea vacía con cantidad 1
    pub fn add(&mut self) {
        self.items.push(LineItem {
            quantity: 1,
            ..LineItem::default()
        });
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Elegir el repuesto de una línea; si existe en el inventario se copian
    /// su nombre y su precio unitario
    pub fn select_part(&mut self, index: usize, part_id: &str, parts: &[Part]) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.part_id = part_id.to_string();
        if let Some(part) = parts.iter().find(|p| p.id == part_id) {
            item.part_name = part.name.clone();
            item.unit_price = part.unit_price;
        }
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = quantity;
        }
    }

    pub fn set_unit_price(&mut self, index: usize, unit_price: Decimal) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = unit_price;
        }
    }

    /// Σ cantidad × precio unitario
    pub fn total(&self) -> AppResult<Decimal> {
        line_items_total(&self.items).ok_or_else(|| validation_error("items", "order total is too large"))
    }

    /// Cada línea necesita repuesto, cantidad y precio
    pub fn validate(&self) -> AppResult<()> {
        for item in &self.items {
            if item.part_id.trim().is_empty() {
                return Err(validation_error("items", "each line needs a part"));
            }
            if item.quantity == 0 {
                return Err(validation_error("items", "each line needs a quantity"));
            }
            if validate_price(&item.unit_price).is_err() {
                return Err(validation_error("items", "unit price cannot be negative"));
            }
        }
        self.total().map(|_| ())
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_selecting_a_part_fills_name_and_price() {
        let parts = seed::parts();
        let mut lines = LineItems::new();
        lines.add();
        lines.select_part(0, "P002", &parts);
        lines.set_quantity(0, 2);

        let item = &lines.items()[0];
        assert_eq!(item.part_name, "Brake Pad Set");
        assert_eq!(item.unit_price, Decimal::new(4550, 2));
        assert_eq!(lines.total().unwrap(), Decimal::new(9100, 2));
    }

    #[test]
    fn test_huge_price_is_rejected_instead_of_overflowing() {
        let mut lines = LineItems::new();
        lines.add();
        lines.select_part(0, "P001", &seed::parts());
        lines.set_quantity(0, u32::MAX);
        lines.set_unit_price(0, Decimal::MAX);

        assert!(lines.total().is_err());
        assert!(lines.validate().is_err());
    }

    #[test]
    fn test_unknown_part_keeps_manual_values() {
        let mut lines = LineItems::new();
        lines.add();
        lines.set_unit_price(0, Decimal::new(1000, 2));
        lines.select_part(0, "X999", &seed::parts());

        assert_eq!(lines.items()[0].part_id, "X999");
        assert_eq!(lines.items()[0].unit_price, Decimal::new(1000, 2));
    }

    #[test]
    fn test_remove_and_validate() {
        let mut lines = LineItems::new();
        lines.add();
        lines.add();
        assert!(lines.validate().is_err());

        lines.remove(1);
        lines.remove(7);
        lines.select_part(0, "P001", &seed::parts());
        assert_eq!(lines.len(), 1);
        assert!(lines.validate().is_ok());
    }
}
