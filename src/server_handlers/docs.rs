use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::models::{Deporte, DesgloseEdad, NuevaAcademia, TipoInfraestructura, Uso, CENTRO_MAPA};

/// GET /catalogos: opciones de los selectores del formulario.
pub async fn catalogos_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "deportes": Deporte::TODOS,
        "infraestructuras": TipoInfraestructura::TODOS,
        "usos": Uso::TODOS,
        "por_defecto": {
            "deporte": Deporte::default(),
            "infraestructura": TipoInfraestructura::default(),
            "usos": Uso::default(),
        },
        "centro_mapa": {"lat": CENTRO_MAPA.0, "lng": CENTRO_MAPA.1},
    }))
}

pub async fn help_handler() -> impl Responder {
    let example = NuevaAcademia {
        nombre: "Cancha Municipal El Zonte".to_string(),
        lat: Some(13.4936),
        lng: Some(-89.4411),
        deporte: Deporte::Futbol,
        infraestructura: TipoInfraestructura::CanchaSintetica,
        usos: Uso::Comunitario,
        hombres: 0,
        mujeres: 0,
        edades: Some(DesgloseEdad {
            hombres_0_12: 12,
            hombres_13_29: 20,
            hombres_30_mas: 8,
            mujeres_0_12: 10,
            mujeres_13_29: 11,
            mujeres_30_mas: 4,
        }),
        departamento: Some("La Libertad".to_string()),
        municipio: Some("La Libertad Costa".to_string()),
        distrito: Some("Chiltiupán".to_string()),
        responsable: Some("Alcaldía / INDES".to_string()),
        objetivos: None,
    };

    let help = json!({
        "description": "API del registro nacional de infraestructura deportiva. Los filtros territoriales (departamento, municipio, distrito) son opcionales en todas las consultas GET.",
        "endpoints": {
            "GET /catalogos": "deportes, tipos de infraestructura y usos",
            "GET /territorio": "catálogo territorial completo",
            "GET /territorio/departamentos": "lista de departamentos",
            "GET /territorio/municipios?departamento=": "municipios de un departamento",
            "GET /territorio/distritos?departamento=&municipio=": "distritos de un municipio",
            "GET /territorio/poblacion": "población de referencia para el filtro",
            "GET /academias": "registros filtrados",
            "GET /academias/geojson": "registros como FeatureCollection",
            "POST /academias": "nuevo registro (ver 'post_example')",
            "GET /estadisticas": "resumen del tablero",
            "GET /estadisticas/conteo?campo=deporte": "conteo por campo (deporte, infraestructura, usos, departamento, municipio, distrito, responsable)",
            "GET /estadisticas/suma?campo=hombres": "suma de un campo numérico",
            "GET /estadisticas/piramide": "pirámide de edad y género",
        },
        "post_example": example,
        "note": "Si se envía 'edades', hombres y mujeres se calculan a partir de las franjas. La cobertura bajo el nivel de departamento es 'N/A' porque el censo sólo publica población por departamento. 'lat' y 'lng' son obligatorios: sin punto marcado en el mapa el registro se rechaza con 400 (el tablero web usaba el centro de San Salvador por defecto).",
    });

    HttpResponse::Ok().json(help)
}

pub async fn root_redirect_handler() -> impl Responder {
    HttpResponse::Found()
        .append_header((actix_web::http::header::LOCATION, "/help"))
        .finish()
}
