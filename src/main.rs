use anyhow::Result;
use dotenvy::dotenv;
use tracing::{error, info};

use fleet_console::api::MockApi;
use fleet_console::services::AuthService;
use fleet_console::storage::storage_from_config;
use fleet_console::views::dashboard::{fleet_summary, status_overview};
use fleet_console::views::{route, AppShell};
use fleet_console::{AppState, EnvironmentConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 FleetPro - Consola de gestión de flota");
    info!("========================================");

    let config = match EnvironmentConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ Configuración inválida: {}", e);
            return Err(anyhow::anyhow!("Error de configuración: {}", e));
        }
    };
    info!("⚙️ Entorno: {}", config.environment);

    let storage = storage_from_config(&config)?;
    let api = MockApi::from_config(&config, storage.clone());
    let auth = AuthService::new(&config, storage.clone())?;

    let state = AppState::new(storage);
    api.seed_missing(state.vehicles(), state.drivers(), state.trips())?;
    let snapshot = api.snapshot().await?;
    info!(
        "📦 API simulada: {} vehículos, {} conductores, {} viajes",
        snapshot.vehicles.len(),
        snapshot.drivers.len(),
        snapshot.trips.len()
    );

    match auth.current_user() {
        Some(user) => info!("👤 Sesión activa: {} ({})", user.name, user.role),
        None => info!("🔑 Sin sesión, se muestra la pantalla de login"),
    }

    let overview = status_overview(&state);
    let summary = fleet_summary(&state);
    info!("📊 Resumen de estado: {}", serde_json::to_string(&overview)?);
    info!("🚛 Resumen de flota: {}", serde_json::to_string(&summary)?);
    info!(
        "🧭 Pantalla inicial: {:?} (vista por defecto: {})",
        AppShell::screen(&state),
        route(state.active_tab()).title()
    );

    Ok(())
}
