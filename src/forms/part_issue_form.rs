//! Formulario de salida de repuestos del inventario

use chrono::NaiveDate;
use log::info;
use validator::Validate;

use super::{optional_text, required_date, LineItems};
use crate::models::{new_record_id, PartIssue};
use crate::utils::errors::AppResult;
use crate::utils::validation::validate_not_empty;

#[derive(Debug, Clone, Validate)]
pub struct PartIssueForm {
    #[validate(custom = "validate_not_empty")]
    pub issue_date: String,

    #[validate(custom = "validate_not_empty")]
    pub issued_to: String,

    pub job_card_id: String,
    pub vehicle_id: String,

    pub items: LineItems,

    pub notes: String,
}

impl PartIssueForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            issue_date: today.format("%Y-%m-%d").to_string(),
            issued_to: String::new(),
            job_card_id: String::new(),
            vehicle_id: String::new(),
            items: LineItems::new(),
            notes: String::new(),
        }
    }

    pub fn build(&self) -> AppResult<PartIssue> {
        self.validate()?;
        self.items.validate()?;

        Ok(PartIssue {
            id: new_record_id(),
            issue_date: required_date("issue_date", &self.issue_date)?,
            issued_to: self.issued_to.trim().to_string(),
            job_card_id: optional_text(&self.job_card_id),
            vehicle_id: optional_text(&self.vehicle_id),
            total: self.items.total()?,
            items: self.items.items().to_vec(),
            notes: optional_text(&self.notes),
        })
    }

    pub fn submit<F>(&self, on_submit: F) -> AppResult<()>
    where
        F: FnOnce(PartIssue),
    {
        let issue = self.build()?;
        info!("📤 Salida de {} líneas para {}", issue.items.len(), issue.issued_to);
        on_submit(issue);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::seed;

    #[test]
    fn test_issue_links_are_optional() {
        let mut form = PartIssueForm::new(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        form.issued_to = "Tim Tire".to_string();
        form.vehicle_id = "1".to_string();
        form.items.add();
        form.items.select_part(0, "P001", &seed::parts());
        form.items.set_quantity(0, 2);

        let mut submitted = None;
        form.submit(|issue| submitted = Some(issue)).unwrap();

        let issue = submitted.unwrap();
        assert_eq!(issue.job_card_id, None);
        assert_eq!(issue.vehicle_id.as_deref(), Some("1"));
        assert_eq!(issue.total, Decimal::new(1798, 2));
    }

    #[test]
    fn test_issued_to_is_required() {
        let form = PartIssueForm::new(NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert!(form.build().is_err());
    }
}
