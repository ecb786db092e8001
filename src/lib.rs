// Biblioteca raíz del crate `onid`.
// Catálogo territorial, agregación de estadísticas, almacén de registros y la
// API HTTP del tablero de infraestructura deportiva.
pub mod api_json;
pub mod config;
pub mod error;
pub mod estadisticas;
pub mod models;
pub mod registro;
pub mod server;
pub mod server_handlers;
pub mod territorio;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use error::{OnidError, Result};
