//! Modelos de inventario: Part y Supplier

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Record;

/// Repuesto del inventario
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: String,
    pub name: String,
    pub part_number: String,
    pub category: String,
    pub quantity: u32,
    pub min_quantity: u32,
    pub supplier: String,
    pub unit_price: Decimal,
    pub location: String,
    pub last_ordered: NaiveDate,
}

impl Part {
    /// Stock bajo: cantidad igual o menor al mínimo configurado (derivado, no se guarda)
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_quantity
    }

    /// Valor del stock de este repuesto
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

impl Record for Part {
    const COLLECTION: &'static str = "parts";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rating: f32,
}

impl Record for Supplier {
    const COLLECTION: &'static str = "suppliers";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(quantity: u32, min_quantity: u32) -> Part {
        Part {
            id: "P001".to_string(),
            name: "Oil Filter".to_string(),
            part_number: "OF-123456".to_string(),
            category: "Filters".to_string(),
            quantity,
            min_quantity,
            supplier: "AutoParts Inc".to_string(),
            unit_price: Decimal::new(899, 2),
            location: "Shelf A3".to_string(),
            last_ordered: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        }
    }

    #[test]
    fn test_low_stock_is_inclusive() {
        assert!(part(5, 5).is_low_stock());
        assert!(part(4, 5).is_low_stock());
        assert!(!part(6, 5).is_low_stock());
    }

    #[test]
    fn test_stock_value() {
        assert_eq!(part(32, 10).stock_value(), Decimal::new(28768, 2));
    }
}
