use rusqlite::Connection;
use std::fmt;
use std::fs;

// Postgres client for remote DB support
use postgres::{Client, NoTls};
use tracing::{debug, info};

use crate::config::DbDestino;
use crate::error::{OnidError, Result};

/// Conexión al almacén de registros: SQLite local o Postgres.
/// Para Postgres guardamos la URL y realizamos operaciones en un hilo separado
/// para no bloquear ni anidar runtimes dentro del runtime de actix.
pub enum ConexionRegistro {
    Sqlite(Connection),
    /// Contiene la URL completa (postgres://...)
    PostgresConfig(String),
}

impl fmt::Debug for ConexionRegistro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConexionRegistro::Sqlite(_) => write!(f, "ConexionRegistro::Sqlite(..)"),
            ConexionRegistro::PostgresConfig(_) => write!(f, "ConexionRegistro::PostgresConfig(..)"),
        }
    }
}

const CREATE_SQLITE: &str = "CREATE TABLE IF NOT EXISTS academias (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    creado_en TEXT NOT NULL,
    nombre TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL,
    deporte TEXT NOT NULL,
    infraestructura TEXT NOT NULL,
    usos TEXT NOT NULL,
    hombres INTEGER,
    mujeres INTEGER,
    usuarios INTEGER,
    hombres_0_12 INTEGER,
    hombres_13_29 INTEGER,
    hombres_30_mas INTEGER,
    mujeres_0_12 INTEGER,
    mujeres_13_29 INTEGER,
    mujeres_30_mas INTEGER,
    departamento TEXT,
    municipio TEXT,
    distrito TEXT,
    responsable TEXT,
    objetivos TEXT
)";

const CREATE_POSTGRES: &str = "CREATE TABLE IF NOT EXISTS academias (
    id BIGSERIAL PRIMARY KEY,
    creado_en TEXT NOT NULL,
    nombre TEXT NOT NULL,
    lat DOUBLE PRECISION NOT NULL,
    lng DOUBLE PRECISION NOT NULL,
    deporte TEXT NOT NULL,
    infraestructura TEXT NOT NULL,
    usos TEXT NOT NULL,
    hombres BIGINT,
    mujeres BIGINT,
    usuarios BIGINT,
    hombres_0_12 BIGINT,
    hombres_13_29 BIGINT,
    hombres_30_mas BIGINT,
    mujeres_0_12 BIGINT,
    mujeres_13_29 BIGINT,
    mujeres_30_mas BIGINT,
    departamento TEXT,
    municipio TEXT,
    distrito TEXT,
    responsable TEXT,
    objetivos TEXT
)";

/// Abre una conexión según el destino configurado. Para SQLite crea el
/// directorio padre si no existe.
pub fn open_connection(destino: &DbDestino) -> Result<ConexionRegistro> {
    match destino {
        DbDestino::Sqlite(path) => {
            if let Some(dir) = path.parent() {
                if !dir.as_os_str().is_empty() && !dir.exists() {
                    fs::create_dir_all(dir).map_err(|e| OnidError::Storage(format!("failed to create db dir: {}", e)))?;
                }
            }
            debug!("opening sqlite registry at {}", path.display());
            Ok(ConexionRegistro::Sqlite(Connection::open(path)?))
        }
        // Para Postgres sólo guardamos la URL; la conexión real se abre en
        // el sitio de cada operación.
        DbDestino::Postgres(url) => Ok(ConexionRegistro::PostgresConfig(url.clone())),
    }
}

/// Ejecuta `op` con un cliente Postgres en un hilo dedicado.
pub(crate) fn con_postgres<T, F>(url: &str, op: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&mut Client) -> Result<T> + Send + 'static,
{
    let url = url.to_string();
    let handle = std::thread::spawn(move || -> Result<T> {
        let mut client = Client::connect(&url, NoTls)?;
        op(&mut client)
    });
    match handle.join() {
        Ok(res) => res,
        Err(e) => Err(OnidError::Storage(format!("thread join error: {:?}", e))),
    }
}

/// Crea la tabla `academias` si no existe.
pub fn init_db(conn: &ConexionRegistro) -> Result<()> {
    match conn {
        ConexionRegistro::Sqlite(c) => {
            c.execute(CREATE_SQLITE, [])?;
        }
        ConexionRegistro::PostgresConfig(url) => {
            con_postgres(url, |client| {
                client.batch_execute(CREATE_POSTGRES)?;
                Ok(())
            })?;
        }
    }
    info!("registry table ready ({:?})", conn);
    Ok(())
}

/// Abre el almacén configurado y asegura el esquema.
pub fn open_and_init(destino: &DbDestino) -> Result<ConexionRegistro> {
    let conn = open_connection(destino)?;
    init_db(&conn)?;
    Ok(conn)
}
