use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::EnvironmentConfig;
use crate::models::auth::{AuthUser, TokenClaims};
use crate::utils::errors::{AppError, AppResult};

/// Configuración JWT
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub token_duration: Duration,
}

impl JwtConfig {
    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            algorithm: Algorithm::HS256,
            token_duration: Duration::seconds(config.jwt_expiration as i64),
        }
    }
}

/// Servicio JWT: firma y decodifica el token de sesión del usuario demo
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    pub fn from_environment(config: &EnvironmentConfig) -> Self {
        Self::new(JwtConfig::from_environment(config))
    }

    /// Genera un token para el usuario
    pub fn generate_token(&self, user: &AuthUser) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + self.config.token_duration;

        let claims = TokenClaims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Jwt(format!("Error generating token: {}", e)))
    }

    /// Valida y decodifica un token (la firma y la expiración se verifican)
    pub fn validate_token(&self, token: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(self.config.algorithm);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::Jwt(format!("Invalid token: {}", e)))
    }

    /// Obtiene el usuario contenido en el token
    pub fn get_user(&self, token: &str) -> AppResult<AuthUser> {
        self.validate_token(token).map(AuthUser::from)
    }
}
