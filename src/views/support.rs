//! Centro de soporte: preguntas frecuentes, tickets y formulario de contacto

use std::collections::BTreeSet;

use chrono::Utc;
use log::info;
use validator::Validate;

use super::{matches_search, Filter, Listing};
use crate::models::support::{FaqCategory, FaqItem, SupportTicket, TicketPriority, TicketStatus};
use crate::seed;
use crate::utils::errors::AppResult;
use crate::utils::format::format_day;
use crate::utils::validation::validate_not_empty;

pub const NO_FAQS: &str = "No FAQs found matching your search criteria.";
pub const NO_TICKETS: &str = "You don't have any support tickets yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SupportTab {
    #[default]
    Help,
    Tickets,
    Contact,
}

impl SupportTab {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "help" => Some(SupportTab::Help),
            "tickets" => Some(SupportTab::Tickets),
            "contact" => Some(SupportTab::Contact),
            _ => None,
        }
    }
}

/// Fechas de creación y última actualización de un ticket ("Jan 14, 2024")
pub fn ticket_dates(ticket: &SupportTicket) -> (String, String) {
    (
        format_day(&ticket.created.to_rfc3339()),
        format_day(&ticket.last_update.to_rfc3339()),
    )
}

/// Formulario "Contact Support"
#[derive(Debug, Clone, Default, Validate)]
pub struct ContactForm {
    #[validate(custom = "validate_not_empty")]
    pub subject: String,

    pub category: String,

    #[validate(custom = "validate_not_empty")]
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SupportPage {
    pub tab: SupportTab,
    pub search: String,
    pub category: Filter<FaqCategory>,
    pub contact: ContactForm,
    expanded_faqs: BTreeSet<String>,
    faqs: Vec<FaqItem>,
    tickets: Vec<SupportTicket>,
}

impl Default for SupportPage {
    fn default() -> Self {
        Self {
            tab: SupportTab::Help,
            search: String::new(),
            category: Filter::All,
            contact: ContactForm::default(),
            expanded_faqs: BTreeSet::new(),
            faqs: seed::faqs(),
            tickets: seed::tickets(),
        }
    }
}

impl SupportPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_tab(&mut self, value: &str) {
        if let Some(tab) = SupportTab::from_str(value) {
            self.tab = tab;
        }
    }

    pub fn set_category_filter(&mut self, value: &str) {
        self.category = Filter::parse(value, FaqCategory::from_str);
    }

    pub fn faqs(&self) -> Listing<&FaqItem> {
        let rows = self
            .faqs
            .iter()
            .filter(|f| self.category.matches(&f.category))
            .filter(|f| matches_search(&self.search, &[&f.question, &f.answer]))
            .collect();
        Listing::new(rows, NO_FAQS)
    }

    pub fn toggle_faq(&mut self, id: &str) {
        if !self.expanded_faqs.remove(id) {
            self.expanded_faqs.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_faqs.contains(id)
    }

    pub fn tickets(&self) -> Listing<&SupportTicket> {
        Listing::new(self.tickets.iter().collect(), NO_TICKETS)
    }

    /// Enviar el formulario de contacto: abre un ticket nuevo y limpia el formulario
    pub fn submit_contact(&mut self) -> AppResult<String> {
        self.contact.validate()?;

        let number = self
            .tickets
            .iter()
            .filter_map(|t| t.id.strip_prefix("T-").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(1000)
            + 1;
        let now = Utc::now();
        let ticket = SupportTicket {
            id: format!("T-{}", number),
            title: self.contact.subject.trim().to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::Medium,
            created: now,
            last_update: now,
        };

        info!("🎫 Ticket de soporte {} creado", ticket.id);
        let id = ticket.id.clone();
        self.tickets.insert(0, ticket);
        self.contact = ContactForm::default();
        Ok(id)
    }
}
