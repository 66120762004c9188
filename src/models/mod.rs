//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos de la consola. Los nombres
//! de campo se serializan en camelCase para conservar el formato JSON que
//! guarda el almacenamiento local.

pub mod auth;
pub mod compliance;
pub mod driver;
pub mod fuel;
pub mod job_card;
pub mod maintenance;
pub mod notification;
pub mod part;
pub mod purchase_order;
pub mod report;
pub mod settings;
pub mod support;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use compliance::*;
pub use driver::*;
pub use fuel::*;
pub use job_card::*;
pub use maintenance::*;
pub use notification::*;
pub use part::*;
pub use purchase_order::*;
pub use trip::*;
pub use user::*;
pub use vehicle::*;

/// Registro identificado por un string único dentro de su colección
pub trait Record {
    /// Nombre de la colección (también clave del almacenamiento local)
    const COLLECTION: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// Genera un identificador nuevo para un registro
pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
