use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::{validate_email, validate_not_empty};

/// Usuario autenticado
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Claims del JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl From<TokenClaims> for AuthUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Request de login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(custom = "validate_not_empty")]
    pub email: String,
    #[validate(custom = "validate_not_empty")]
    pub password: String,
}

/// Response de login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// Request de registro
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(custom = "validate_not_empty")]
    pub name: String,
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_not_empty")]
    pub password: String,
}

/// Request de cambio de contraseña
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(custom = "validate_not_empty")]
    pub current_password: String,
    #[validate(custom = "validate_not_empty")]
    pub new_password: String,
}
