pub mod academias;
pub mod docs;
pub mod estadisticas;
pub mod territorio;

pub use academias::*;
pub use docs::*;
pub use estadisticas::*;
pub use territorio::*;

use actix_web::web;
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{OnidError, Result};
use crate::models::Academia;
use crate::registro;
use crate::territorio::{catalogo, CatalogoTerritorial, FiltroTerritorial};

/// Estado compartido por los handlers: configuración y catálogo (solo lectura).
#[derive(Debug, Clone)]
pub struct EstadoApp {
    pub config: Config,
    pub catalogo: Arc<CatalogoTerritorial>,
}

impl EstadoApp {
    /// Usa el catálogo del Censo 2024 y prepara el esquema del almacén.
    pub fn nuevo(config: Config) -> Result<Self> {
        Self::con_catalogo(config, catalogo())
    }

    pub fn con_catalogo(config: Config, catalogo: Arc<CatalogoTerritorial>) -> Result<Self> {
        registro::open_and_init(&config.db)?;
        Ok(EstadoApp { config, catalogo })
    }
}

pub(crate) type Query = web::Query<HashMap<String, String>>;

/// Carga la instantánea completa de registros en el pool bloqueante.
pub(crate) async fn cargar_academias(estado: &EstadoApp) -> Result<Vec<Academia>> {
    let destino = estado.config.db.clone();
    web::block(move || {
        let conn = registro::open_connection(&destino)?;
        registro::listar_academias(&conn)
    })
    .await
    .map_err(|e| OnidError::Storage(format!("blocking error: {}", e)))?
}

/// Filtro de la query, ya validado contra el catálogo.
pub(crate) fn filtro_validado(estado: &EstadoApp, query: &Query) -> Result<FiltroTerritorial> {
    let filtro = crate::api_json::filtro_desde_query(query);
    estado.catalogo.validar_filtro(&filtro)?;
    Ok(filtro)
}

pub(crate) fn param_requerido<'a>(query: &'a Query, nombre: &str) -> Result<&'a str> {
    query
        .get(nombre)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| OnidError::invalid(format!("{} query parameter is required", nombre)))
}
