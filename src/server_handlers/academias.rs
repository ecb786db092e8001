use actix_web::{web, HttpResponse};
use tracing::info;

use crate::api_json::{a_geojson, parse_nueva_academia};
use crate::error::{OnidError, Result};
use crate::estadisticas::filtrar_por_territorio;
use crate::registro;
use crate::server_handlers::{cargar_academias, filtro_validado, EstadoApp, Query};

/// GET /academias?departamento=..&municipio=..&distrito=..
pub async fn listar_academias_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let filtradas = filtrar_por_territorio(&academias, &filtro);
    Ok(HttpResponse::Ok().json(filtradas))
}

/// GET /academias/geojson: capa de puntos para el mapa.
pub async fn geojson_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let filtradas = filtrar_por_territorio(&academias, &filtro);
    Ok(HttpResponse::Ok()
        .content_type("application/geo+json")
        .json(a_geojson(&filtradas)))
}

/// POST /academias
/// Valida el formulario contra el catálogo y guarda el registro. Responde 201
/// con la fila almacenada (incluye `id`).
pub async fn crear_academia_handler(
    estado: web::Data<EstadoApp>,
    body: web::Json<serde_json::Value>,
) -> Result<HttpResponse> {
    let body_value = body.into_inner();
    let json_str = serde_json::to_string(&body_value)
        .map_err(|e| OnidError::invalid(format!("invalid JSON body: {}", e)))?;
    let nueva = parse_nueva_academia(&json_str)?;
    let validada = nueva.validar(&estado.catalogo)?;

    let destino = estado.config.db.clone();
    let guardada = web::block(move || {
        let conn = registro::open_connection(&destino)?;
        registro::insertar_academia(&conn, validada)
    })
    .await
    .map_err(|e| OnidError::Storage(format!("blocking error: {}", e)))??;

    info!("POST /academias -> id {}", guardada.id);
    Ok(HttpResponse::Created().json(guardada))
}
