//! Formularios
//!
//! Cada formulario guarda los valores tal como se escriben, valida solo los
//! campos requeridos y al enviarse construye el registro y lo entrega al
//! callback del llamador.

pub mod job_card_form;
pub mod line_items;
pub mod part_issue_form;
pub mod purchase_order_form;

pub use job_card_form::JobCardForm;
pub use line_items::LineItems;
pub use part_issue_form::PartIssueForm;
pub use purchase_order_form::PurchaseOrderForm;

use chrono::NaiveDate;

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_date;

/// Fecha requerida de un campo `<input type="date">`
pub(crate) fn required_date(field: &'static str, value: &str) -> AppResult<NaiveDate> {
    validate_date(value.trim()).map_err(|_| validation_error(field, "a date in YYYY-MM-DD format is required"))
}

/// Fecha opcional: vacío es `None`
pub(crate) fn optional_date(field: &'static str, value: &str) -> AppResult<Option<NaiveDate>> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        required_date(field, value).map(Some)
    }
}

/// Texto opcional: vacío es `None`
pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
