//! Router de vistas
//!
//! Traduce la pestaña activa (un string libre del estado) a la vista que se
//! muestra. Cualquier valor desconocido muestra el Dashboard.

use crate::state::AppState;

/// Pestañas con vista propia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Fleet,
    Drivers,
    Trips,
    Maintenance,
    Fuel,
    Reports,
    Compliance,
    Notifications,
    Users,
    Settings,
    Support,
    JobCards,
    Parts,
}

impl Tab {
    pub const ALL: [Tab; 14] = [
        Tab::Dashboard,
        Tab::Fleet,
        Tab::Drivers,
        Tab::Trips,
        Tab::Maintenance,
        Tab::Fuel,
        Tab::Reports,
        Tab::Compliance,
        Tab::Notifications,
        Tab::Users,
        Tab::Settings,
        Tab::Support,
        Tab::JobCards,
        Tab::Parts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Fleet => "fleet",
            Tab::Drivers => "drivers",
            Tab::Trips => "trips",
            Tab::Maintenance => "maintenance",
            Tab::Fuel => "fuel",
            Tab::Reports => "reports",
            Tab::Compliance => "compliance",
            Tab::Notifications => "notifications",
            Tab::Users => "users",
            Tab::Settings => "settings",
            Tab::Support => "support",
            Tab::JobCards => "jobcards",
            Tab::Parts => "parts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.as_str() == s)
    }

    /// Texto del menú lateral
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Fleet => "Vehicles",
            Tab::Drivers => "Drivers",
            Tab::Trips => "Trips & Dispatch",
            Tab::Maintenance => "Maintenance & Repairs",
            Tab::Fuel => "Fuel Management",
            Tab::Reports => "Reports & Analytics",
            Tab::Compliance => "Compliance & Documents",
            Tab::Notifications => "Notifications & Alerts",
            Tab::Users => "User Management",
            Tab::Settings => "Settings",
            Tab::Support => "Support / Help Center",
            Tab::JobCards => "Job Cards",
            Tab::Parts => "Parts Inventory",
        }
    }
}

/// Vista a mostrar en el área de contenido
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View(pub Tab);

impl View {
    pub fn tab(&self) -> Tab {
        self.0
    }

    pub fn title(&self) -> &'static str {
        match self.0 {
            Tab::Fleet => "Fleet Management",
            Tab::JobCards => "Job Card Management",
            other => other.label(),
        }
    }
}

/// Vista para la pestaña activa (sin validación previa)
pub fn route(active_tab: &str) -> View {
    View(Tab::from_str(active_tab).unwrap_or(Tab::Dashboard))
}

/// Entrada del menú lateral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub tab: Tab,
    pub active: bool,
}

/// Pantalla completa: autenticación o consola con barra lateral
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login,
    SignUp,
    Console { view: View, sidebar_open: bool },
}

/// Diseño general de la aplicación
pub struct AppShell;

impl AppShell {
    const MAIN_MENU: [Tab; 11] = [
        Tab::Dashboard,
        Tab::Drivers,
        Tab::Trips,
        Tab::Maintenance,
        Tab::Fuel,
        Tab::Reports,
        Tab::Compliance,
        Tab::Notifications,
        Tab::Users,
        Tab::Settings,
        Tab::Support,
    ];

    const FLEET_MENU: [Tab; 3] = [Tab::Fleet, Tab::JobCards, Tab::Parts];

    /// Qué se dibuja para el estado actual. Sin sesión solo existen las
    /// pantallas de login y registro.
    pub fn screen(state: &AppState) -> Screen {
        if !state.is_authenticated() {
            return match state.active_tab() {
                "signup" => Screen::SignUp,
                _ => Screen::Login,
            };
        }

        Screen::Console {
            view: route(state.active_tab()),
            sidebar_open: state.sidebar_open(),
        }
    }

    pub fn main_menu(state: &AppState) -> Vec<MenuItem> {
        Self::menu(state, &Self::MAIN_MENU)
    }

    /// Sub-menú de flota; vacío mientras la sección está plegada
    pub fn fleet_menu(state: &AppState) -> Vec<MenuItem> {
        if state.expanded_fleet_section() {
            Self::menu(state, &Self::FLEET_MENU)
        } else {
            Vec::new()
        }
    }

    fn menu(state: &AppState, tabs: &[Tab]) -> Vec<MenuItem> {
        tabs.iter()
            .map(|tab| MenuItem {
                tab: *tab,
                active: state.active_tab() == tab.as_str(),
            })
            .collect()
    }

    /// Encabezado de la sección de flota: con la barra plegada navega a
    /// Vehicles, con la barra abierta despliega o pliega la sección
    pub fn click_fleet_header(state: &mut AppState) {
        if state.sidebar_open() {
            state.toggle_fleet_section();
        } else {
            state.set_active_tab(Tab::Fleet.as_str());
        }
    }

    pub fn toggle_sidebar(state: &mut AppState) {
        let open = state.sidebar_open();
        state.set_sidebar_open(!open);
    }

    pub fn select(state: &mut AppState, tab: Tab) {
        state.set_active_tab(tab.as_str());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::MemoryStorage;

    fn state() -> AppState {
        AppState::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_route_known_tabs() {
        for tab in Tab::ALL {
            assert_eq!(route(tab.as_str()).tab(), tab);
        }
    }

    #[test]
    fn test_route_unknown_falls_back_to_dashboard() {
        assert_eq!(route("login").tab(), Tab::Dashboard);
        assert_eq!(route("signup").tab(), Tab::Dashboard);
        assert_eq!(route("").tab(), Tab::Dashboard);
        assert_eq!(route("Fleet").tab(), Tab::Dashboard);
    }

    #[test]
    fn test_screen_requires_authentication() {
        let mut state = state();
        assert_eq!(AppShell::screen(&state), Screen::Login);

        state.set_active_tab("signup");
        assert_eq!(AppShell::screen(&state), Screen::SignUp);

        state.set_active_tab("parts");
        assert_eq!(AppShell::screen(&state), Screen::Login);

        state.set_authenticated(true);
        assert_eq!(
            AppShell::screen(&state),
            Screen::Console {
                view: View(Tab::Parts),
                sidebar_open: true
            }
        );
    }

    #[test]
    fn test_fleet_menu_follows_section_toggle() {
        let mut state = state();
        assert!(AppShell::fleet_menu(&state).is_empty());

        AppShell::click_fleet_header(&mut state);
        let menu = AppShell::fleet_menu(&state);
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[1].tab.label(), "Job Cards");

        AppShell::toggle_sidebar(&mut state);
        AppShell::click_fleet_header(&mut state);
        assert_eq!(state.active_tab(), "fleet");
        assert!(AppShell::fleet_menu(&state).iter().any(|item| item.active));
    }

    #[test]
    fn test_main_menu_marks_active_tab() {
        let mut state = state();
        AppShell::select(&mut state, Tab::Fuel);
        let active: Vec<_> = AppShell::main_menu(&state)
            .into_iter()
            .filter(|item| item.active)
            .collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].tab, Tab::Fuel);
    }
}
