//! Pantallas de inicio de sesión y de registro
//!
//! Estas pantallas no pasan por `AuthService`: el login compara contra su propio
//! par de demostración y el registro no crea ninguna cuenta.

use log::{info, warn};

use crate::api::Latency;
use crate::state::{AppState, LOGIN_TAB};

/// Par de demostración que acepta la pantalla de login
pub const LOGIN_DEMO_EMAIL: &str = "admin@example.com";
pub const LOGIN_DEMO_PASSWORD: &str = "password";

pub const LOGIN_ERROR: &str = "Invalid email or password";
pub const SIGNUP_REQUIRED: &str = "All fields are required.";
pub const SIGNUP_SUCCESS: &str = "Account created! Please log in.";
pub const SIGNUP_TAB: &str = "signup";

/// Espera antes de volver a login después de registrarse
const SIGNUP_REDIRECT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    pub show_password: bool,
    error: Option<String>,
}

impl LoginPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Iniciar sesión. Con éxito se entra al dashboard; cualquier fallo
    /// muestra el mismo mensaje.
    pub fn submit(&mut self, state: &mut AppState) -> bool {
        if self.email == LOGIN_DEMO_EMAIL && self.password == LOGIN_DEMO_PASSWORD {
            info!("🔓 Sesión iniciada: {}", self.email);
            state.set_authenticated(true);
            state.set_active_tab("dashboard");
            self.error = None;
            true
        } else {
            warn!("🔒 Inicio de sesión fallido para {}", self.email);
            self.error = Some(LOGIN_ERROR.to_string());
            false
        }
    }

    pub fn go_to_signup(&self, state: &mut AppState) {
        state.set_active_tab(SIGNUP_TAB);
    }
}

#[derive(Debug, Clone)]
pub struct SignUpPage {
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    error: Option<String>,
    success: Option<String>,
    latency: Latency,
}

impl SignUpPage {
    pub fn new(latency: Latency) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            show_password: false,
            error: None,
            success: None,
            latency,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Validar el formulario; tras el mensaje de éxito se vuelve a login
    pub async fn submit(&mut self, state: &mut AppState) -> bool {
        if [&self.name, &self.email, &self.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            self.error = Some(SIGNUP_REQUIRED.to_string());
            self.success = None;
            return false;
        }

        info!("📝 Cuenta de demostración para {}", self.email.trim());
        self.success = Some(SIGNUP_SUCCESS.to_string());
        self.error = None;

        self.latency.wait(SIGNUP_REDIRECT_DELAY_MS).await;
        state.set_active_tab(LOGIN_TAB);
        true
    }

    pub fn go_to_login(&self, state: &mut AppState) {
        state.set_active_tab(LOGIN_TAB);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::{DEFAULT_DEMO_EMAIL, DEFAULT_DEMO_PASSWORD};
    use crate::storage::MemoryStorage;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_login_enters_dashboard() {
        let mut state = state();
        let mut page = LoginPage::new();
        page.email = "admin@example.com".to_string();
        page.password = "password".to_string();

        assert!(page.submit(&mut state));
        assert!(state.is_authenticated());
        assert_eq!(state.active_tab(), "dashboard");
        assert_eq!(page.error(), None);
    }

    #[test]
    fn test_wrong_credentials_show_error() {
        let mut state = state();
        let mut page = LoginPage::new();
        page.email = "admin@example.com".to_string();
        page.password = "Password".to_string();

        assert!(!page.submit(&mut state));
        assert!(!state.is_authenticated());
        assert_eq!(state.active_tab(), "login");
        assert_eq!(page.error(), Some(LOGIN_ERROR));
    }

    #[test]
    fn test_login_page_ignores_service_credentials() {
        let mut state = state();
        let mut page = LoginPage::new();
        page.email = DEFAULT_DEMO_EMAIL.to_string();
        page.password = DEFAULT_DEMO_PASSWORD.to_string();

        assert!(!page.submit(&mut state));
        assert_eq!(page.error(), Some(LOGIN_ERROR));

        page.email = LOGIN_DEMO_EMAIL.to_string();
        page.password = LOGIN_DEMO_PASSWORD.to_string();
        assert!(page.submit(&mut state));
        assert_eq!(page.error(), None);
    }

    #[tokio::test]
    async fn test_signup_requires_all_fields() {
        let mut state = state();
        let mut page = SignUpPage::new(Latency::disabled());
        page.name = "Dana".to_string();
        page.email = "dana@fleetpro.com".to_string();

        assert!(!page.submit(&mut state).await);
        assert_eq!(page.error(), Some(SIGNUP_REQUIRED));
        assert_eq!(page.success(), None);
    }

    #[tokio::test]
    async fn test_signup_success_returns_to_login() {
        let mut state = state();
        page_navigation(&mut state);

        let mut page = SignUpPage::new(Latency::disabled());
        page.name = "Dana".to_string();
        page.email = "dana@fleetpro.com".to_string();
        page.password = "secret".to_string();

        assert!(page.submit(&mut state).await);
        assert_eq!(page.success(), Some(SIGNUP_SUCCESS));
        assert_eq!(state.active_tab(), "login");
    }

    fn page_navigation(state: &mut AppState) {
        LoginPage::new().go_to_signup(state);
        assert_eq!(state.active_tab(), "signup");
    }
}
