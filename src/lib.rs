//! Consola de gestión de flota
//!
//! Núcleo de la consola FleetPro: estado compartido, vistas de cada página,
//! formularios, API simulada sobre almacenamiento local y autenticación demo.

pub mod api;
pub mod config;
pub mod forms;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
pub mod views;

pub use config::EnvironmentConfig;
pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
