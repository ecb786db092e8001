pub mod db;
pub mod queries;
pub mod insertions;

pub use db::{init_db, open_and_init, open_connection, ConexionRegistro};
pub use insertions::insertar_academia;
pub use queries::listar_academias;
