use std::env;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{OnidError, Result};

const DEFAULT_BIND: &str = "127.0.0.1:8080";
const DEFAULT_DB_PATH: &str = "data/onid.db";

/// Destino del almacén de registros, derivado de `ONID_DB_URL` / `ONID_DB_PATH`.
#[derive(Debug, Clone, PartialEq)]
pub enum DbDestino {
    Sqlite(PathBuf),
    /// URL completa (postgres://...)
    Postgres(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub db: DbDestino,
    /// `None` acepta cualquier origen.
    pub cors_origin: Option<String>,
}

impl Config {
    /// Lee la configuración desde el entorno (cargando `.env` si existe).
    pub fn load() -> Result<Self> {
        let _ = dotenv::dotenv();

        let bind = var_or("ONID_BIND", DEFAULT_BIND);
        let db = match env::var("ONID_DB_URL") {
            Ok(url) => parse_db_url(&url)?,
            Err(_) => DbDestino::Sqlite(PathBuf::from(var_or("ONID_DB_PATH", DEFAULT_DB_PATH))),
        };
        let cors_origin = match var_or("ONID_CORS_ORIGIN", "*").trim() {
            "" | "*" => None,
            o => Some(o.to_string()),
        };

        Ok(Config { bind, db, cors_origin })
    }

    /// Configuración con SQLite en la ruta dada; usada por tests y herramientas.
    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Config {
            bind: DEFAULT_BIND.to_string(),
            db: DbDestino::Sqlite(path.into()),
            cors_origin: None,
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) => v,
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

/// Acepta sqlite://, file:// y postgres:// (o postgresql://).
pub fn parse_db_url(url: &str) -> Result<DbDestino> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        Ok(DbDestino::Sqlite(PathBuf::from(path)))
    } else if let Some(path) = url.strip_prefix("file://") {
        Ok(DbDestino::Sqlite(PathBuf::from(path)))
    } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
        Ok(DbDestino::Postgres(url.to_string()))
    } else {
        warn!("ONID_DB_URL uses unsupported scheme: {url}");
        Err(OnidError::Config(format!("ONID_DB_URL uses unsupported scheme: {}", url)))
    }
}
