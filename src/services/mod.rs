//! Servicios
//!
//! Autenticación simulada del usuario demo y manejo de tokens JWT.

pub mod auth_service;
pub mod jwt_service;

pub use auth_service::AuthService;
pub use jwt_service::{JwtConfig, JwtService};
