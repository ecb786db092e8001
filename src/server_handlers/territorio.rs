use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::error::Result;
use crate::server_handlers::{filtro_validado, param_requerido, EstadoApp, Query};

/// GET /territorio
pub async fn territorio_handler(estado: web::Data<EstadoApp>) -> HttpResponse {
    HttpResponse::Ok().json(estado.catalogo.as_ref())
}

/// GET /territorio/departamentos
pub async fn departamentos_handler(estado: web::Data<EstadoApp>) -> HttpResponse {
    HttpResponse::Ok().json(estado.catalogo.listar_departamentos())
}

/// GET /territorio/municipios?departamento=San%20Salvador
pub async fn municipios_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let dep = param_requerido(&query, "departamento")?;
    let municipios = estado.catalogo.listar_municipios(dep)?;
    Ok(HttpResponse::Ok().json(municipios))
}

/// GET /territorio/distritos?departamento=..&municipio=..
pub async fn distritos_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let dep = param_requerido(&query, "departamento")?;
    let mun = param_requerido(&query, "municipio")?;
    let distritos = estado.catalogo.listar_distritos(dep, mun)?;
    Ok(HttpResponse::Ok().json(distritos))
}

/// GET /territorio/poblacion?departamento=..&municipio=..&distrito=..
pub async fn poblacion_handler(estado: web::Data<EstadoApp>, query: Query) -> Result<HttpResponse> {
    let filtro = filtro_validado(&estado, &query)?;
    let poblacion = estado.catalogo.resolver_poblacion(
        filtro.departamento.as_deref(),
        filtro.municipio.as_deref(),
        filtro.distrito.as_deref(),
    )?;
    Ok(HttpResponse::Ok().json(json!({"filtro": filtro, "poblacion": poblacion})))
}
