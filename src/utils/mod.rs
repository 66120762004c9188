//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y formato de datos para las vistas.

pub mod errors;
pub mod format;
pub mod validation;
