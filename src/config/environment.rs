//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno. Todas las variables tienen
//! un valor por defecto pensado para la demo; un valor presente pero inválido
//! es un error de configuración.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_DEMO_EMAIL: &str = "admin@fleetpro.com";
pub const DEFAULT_DEMO_PASSWORD: &str = "password123";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    /// Archivo JSON del almacenamiento local; `None` usa memoria
    pub storage_path: Option<PathBuf>,
    pub jwt_secret: String,
    /// Duración del token en segundos
    pub jwt_expiration: u64,
    /// Simular la latencia de red en la API y la autenticación
    pub mock_api_latency: bool,
    pub demo_email: String,
    pub demo_password: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            storage_path: None,
            jwt_secret: "fleetpro-demo-secret-change-me".to_string(),
            jwt_expiration: 24 * 60 * 60,
            mock_api_latency: true,
            demo_email: DEFAULT_DEMO_EMAIL.to_string(),
            demo_password: DEFAULT_DEMO_PASSWORD.to_string(),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde el entorno (después de `dotenvy::dotenv()`)
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("FLEET_ENVIRONMENT").unwrap_or(defaults.environment),
            storage_path: env::var("FLEET_STORAGE_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            jwt_secret: env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            jwt_expiration: parse_var("JWT_EXPIRATION", defaults.jwt_expiration)?,
            mock_api_latency: parse_var("MOCK_API_LATENCY", defaults.mock_api_latency)?,
            demo_email: env::var("DEMO_EMAIL").unwrap_or(defaults.demo_email),
            demo_password: env::var("DEMO_PASSWORD").unwrap_or(defaults.demo_password),
        })
    }

    /// Configuración para tests: sin latencia y almacenamiento en memoria
    pub fn for_tests() -> Self {
        Self {
            environment: "test".to_string(),
            mock_api_latency: false,
            ..Self::default()
        }
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} must be a valid value, got '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
        assert!(config.storage_path.is_none());
        assert_eq!(config.demo_email, DEFAULT_DEMO_EMAIL);
    }

    #[test]
    fn test_parse_var_invalid_value() {
        env::set_var("FLEET_TEST_BAD_NUMBER", "abc");
        let result: AppResult<u64> = parse_var("FLEET_TEST_BAD_NUMBER", 10);
        assert!(matches!(result, Err(AppError::Config(_))));
        env::remove_var("FLEET_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_parse_var_missing_uses_default() {
        let result: AppResult<bool> = parse_var("FLEET_TEST_MISSING_FLAG", true);
        assert!(result.unwrap());
    }

    #[test]
    fn test_for_tests_disables_latency() {
        let config = EnvironmentConfig::for_tests();
        assert!(!config.mock_api_latency);
        assert_eq!(config.environment, "test");
    }
}
