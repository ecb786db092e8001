use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errores del backend ONID.
///
/// `NotFound` e `InvalidInput` vienen del catálogo territorial y de la
/// validación de entradas; `Storage` agrupa cualquier fallo del almacén de
/// registros y se reporta al cliente como un mensaje opaco.
#[derive(Error, Debug)]
pub enum OnidError {
    #[error("{nivel} '{nombre}' no existe{}", sufijo_sugerencia(.sugerencia))]
    NotFound {
        nivel: &'static str,
        nombre: String,
        sugerencia: Option<String>,
    },

    #[error("entrada inválida: {0}")]
    InvalidInput(String),

    #[error("error de almacenamiento: {0}")]
    Storage(String),

    #[error("configuración inválida: {0}")]
    Config(String),
}

fn sufijo_sugerencia(sugerencia: &Option<String>) -> String {
    match sugerencia {
        Some(s) => format!(" (¿quiso decir '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, OnidError>;

impl OnidError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        OnidError::InvalidInput(msg.into())
    }
}

impl From<rusqlite::Error> for OnidError {
    fn from(e: rusqlite::Error) -> Self {
        OnidError::Storage(e.to_string())
    }
}

impl From<postgres::Error> for OnidError {
    fn from(e: postgres::Error) -> Self {
        OnidError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for OnidError {
    fn from(e: serde_json::Error) -> Self {
        OnidError::InvalidInput(e.to_string())
    }
}

impl ResponseError for OnidError {
    fn status_code(&self) -> StatusCode {
        match self {
            OnidError::NotFound { .. } => StatusCode::NOT_FOUND,
            OnidError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            OnidError::Storage(_) | OnidError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let msg = match self {
            // el detalle del almacén queda en los logs
            OnidError::Storage(detalle) => {
                error!("storage error: {}", detalle);
                "no se pudo completar la operación con el registro".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({"error": msg}))
    }
}
