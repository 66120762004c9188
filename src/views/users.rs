//! Gestión de usuarios

use super::{matches_search, Filter, Listing};
use crate::models::{User, UserRole, UserStatus};
use crate::seed;
use crate::utils::format::format_date;

pub const EMPTY_MESSAGE: &str = "No users found matching the selected criteria.";

pub fn last_login_label(user: &User) -> String {
    format_date(&user.last_login.to_rfc3339())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCounts {
    pub total: usize,
    pub active: usize,
    pub administrators: usize,
    pub drivers: usize,
}

#[derive(Debug, Clone)]
pub struct UsersPage {
    pub search: String,
    pub role: Filter<UserRole>,
    users: Vec<User>,
}

impl Default for UsersPage {
    fn default() -> Self {
        Self {
            search: String::new(),
            role: Filter::All,
            users: seed::users(),
        }
    }
}

impl UsersPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_role_filter(&mut self, value: &str) {
        self.role = Filter::parse(value, UserRole::from_str);
    }

    pub fn users(&self) -> Listing<&User> {
        let rows = self
            .users
            .iter()
            .filter(|u| self.role.matches(&u.role))
            .filter(|u| matches_search(&self.search, &[&u.name, &u.email]))
            .collect();
        Listing::new(rows, EMPTY_MESSAGE)
    }

    pub fn counts(&self) -> UserCounts {
        let with_role = |role: UserRole| self.users.iter().filter(|u| u.role == role).count();
        UserCounts {
            total: self.users.len(),
            active: self.users.iter().filter(|u| u.status == UserStatus::Active).count(),
            administrators: with_role(UserRole::Administrator),
            drivers: with_role(UserRole::Driver),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(
            UsersPage::new().counts(),
            UserCounts {
                total: 6,
                active: 5,
                administrators: 1,
                drivers: 1
            }
        );
    }

    #[test]
    fn test_role_filter_and_search() {
        let mut page = UsersPage::new();
        page.set_role_filter("manager");
        assert_eq!(page.users().len(), 2);

        page.search = "emily".to_string();
        let listing = page.users();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.rows[0].status, UserStatus::Inactive);

        page.set_role_filter("dispatcher");
        assert_eq!(page.users().empty_state(), Some(EMPTY_MESSAGE));
    }

    #[test]
    fn test_search_over_email() {
        let mut page = UsersPage::new();
        page.search = "@FLEETPRO.COM".to_string();
        assert_eq!(page.users().len(), 6);
        assert_eq!(last_login_label(page.users().rows[1]), "Jan 14, 2024, 4:45 PM");
    }
}
