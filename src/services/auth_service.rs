use bcrypt::{hash, verify, DEFAULT_COST};
use log::{info, warn};
use validator::Validate;

use crate::api::Latency;
use crate::config::EnvironmentConfig;
use crate::models::auth::{AuthUser, ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest};
use crate::services::jwt_service::JwtService;
use crate::storage::{SharedStorage, AUTH_TOKEN_KEY};
use crate::utils::errors::{bad_request_error, AppError, AppResult};

const LOGIN_DELAY_MS: u64 = 800;
const REGISTER_DELAY_MS: u64 = 1000;
const RESET_PASSWORD_DELAY_MS: u64 = 800;
const CHANGE_PASSWORD_DELAY_MS: u64 = 1000;

/// Coste de bcrypt fuera de producción
const DEMO_HASH_COST: u32 = 4;

#[derive(Debug, Clone)]
struct DemoAccount {
    user: AuthUser,
    password_hash: String,
}

/// Servicio de autenticación
///
/// Solo existe una cuenta: el usuario demo configurado. El token firmado se
/// guarda en el almacenamiento local bajo `fleetpro_auth_token`.
pub struct AuthService {
    jwt_service: JwtService,
    storage: SharedStorage,
    latency: Latency,
    demo_account: DemoAccount,
}

impl AuthService {
    pub fn new(config: &EnvironmentConfig, storage: SharedStorage) -> AppResult<Self> {
        let cost = if config.is_production() { DEFAULT_COST } else { DEMO_HASH_COST };
        let password_hash =
            hash(&config.demo_password, cost).map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        Ok(Self {
            jwt_service: JwtService::from_environment(config),
            storage,
            latency: Latency::new(config.mock_api_latency),
            demo_account: DemoAccount {
                user: AuthUser {
                    id: "1".to_string(),
                    name: "Admin User".to_string(),
                    email: config.demo_email.clone(),
                    role: "administrator".to_string(),
                },
                password_hash,
            },
        })
    }

    /// Inicia sesión con el par de credenciales demo
    pub async fn login(&self, request: &LoginRequest) -> AppResult<LoginResponse> {
        self.latency.wait(LOGIN_DELAY_MS).await;

        if request.validate().is_err() {
            return Err(bad_request_error("Email and password are required"));
        }

        let password_ok = verify(&request.password, &self.demo_account.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if request.email != self.demo_account.user.email || !password_ok {
            warn!("🔒 Login rechazado para {}", request.email);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let user = self.demo_account.user.clone();
        let token = self.jwt_service.generate_token(&user)?;
        self.storage.set_item(AUTH_TOKEN_KEY, &token)?;

        info!("✅ Login exitoso: {}", user.email);
        Ok(LoginResponse { token, user })
    }

    /// Registro simulado: no crea ninguna cuenta
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        self.latency.wait(REGISTER_DELAY_MS).await;

        if [&request.name, &request.email, &request.password]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(bad_request_error("Name, email, and password are required"));
        }
        request.validate()?;

        info!("📝 Registro recibido para {}", request.email);
        Ok(())
    }

    /// Cierra la sesión eliminando el token guardado
    pub fn logout(&self) -> AppResult<()> {
        self.storage.remove_item(AUTH_TOKEN_KEY)?;
        info!("👋 Sesión cerrada");
        Ok(())
    }

    /// Usuario del token guardado. Un token expirado o inválido se elimina.
    pub fn current_user(&self) -> Option<AuthUser> {
        let token = match self.storage.get_item(AUTH_TOKEN_KEY) {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(e) => {
                warn!("⚠️ No se pudo leer el token: {}", e);
                return None;
            }
        };

        match self.jwt_service.get_user(&token) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("🔑 Token descartado: {}", e);
                if let Err(e) = self.storage.remove_item(AUTH_TOKEN_KEY) {
                    warn!("⚠️ No se pudo eliminar el token: {}", e);
                }
                None
            }
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    /// Verifica si el usuario actual tiene alguno de los roles indicados
    pub fn has_role(&self, roles: &[&str]) -> bool {
        self.current_user()
            .map(|user| roles.iter().any(|role| *role == user.role))
            .unwrap_or(false)
    }

    pub async fn reset_password(&self, email: &str) -> AppResult<()> {
        self.latency.wait(RESET_PASSWORD_DELAY_MS).await;

        if email.trim().is_empty() {
            return Err(bad_request_error("Email is required"));
        }

        info!("📧 Solicitud de restablecimiento de contraseña para {}", email);
        Ok(())
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> AppResult<()> {
        self.latency.wait(CHANGE_PASSWORD_DELAY_MS).await;

        if request.validate().is_err() {
            return Err(bad_request_error("Current password and new password are required"));
        }

        info!("🔐 Contraseña actualizada");
        Ok(())
    }
}
