use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::{OnidError, Result};
use crate::estadisticas::{
    contar_por, filtrar_por_territorio, piramide_edad_genero, resumir, sumar_campo, CampoConteo, CampoNumerico,
};
use crate::server_handlers::{cargar_academias, filtro_validado, param_requerido, EstadoApp, Query};

/// GET /estadisticas?departamento=..&municipio=..&distrito=..
/// Resumen del tablero: totales, cobertura, conteos por categoría y pirámide.
pub async fn resumen_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let resumen = resumir(&estado.catalogo, &academias, &filtro)?;
    Ok(HttpResponse::Ok().json(resumen))
}

/// GET /estadisticas/conteo?campo=deporte&limit=8
pub async fn conteo_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let campo: CampoConteo = param_requerido(&query, "campo")?.parse()?;
    let limit = match query.get("limit").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        Some(s) => Some(
            s.parse::<usize>()
                .map_err(|_| OnidError::invalid(format!("limit debe ser un entero no negativo: '{}'", s)))?,
        ),
        None => None,
    };
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let filtradas = filtrar_por_territorio(&academias, &filtro);
    let mut conteos = contar_por(&filtradas, campo);
    if let Some(lim) = limit {
        conteos.truncate(lim);
    }
    Ok(HttpResponse::Ok().json(json!({"filtro": filtro, "total": filtradas.len(), "conteos": conteos})))
}

/// GET /estadisticas/suma?campo=hombres
pub async fn suma_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let nombre = param_requerido(&query, "campo")?;
    let campo: CampoNumerico = nombre.parse()?;
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let filtradas = filtrar_por_territorio(&academias, &filtro);
    let suma = sumar_campo(&filtradas, campo);
    Ok(HttpResponse::Ok().json(json!({"filtro": filtro, "campo": nombre, "suma": suma})))
}

/// GET /estadisticas/piramide
pub async fn piramide_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let filtro = filtro_validado(&estado, &query)?;
    let academias = cargar_academias(&estado).await?;
    let filtradas = filtrar_por_territorio(&academias, &filtro);
    Ok(HttpResponse::Ok().json(json!({"filtro": filtro, "piramide": piramide_edad_genero(&filtradas)})))
}
