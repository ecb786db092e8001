use std::collections::HashMap;

use serde_json::{json, Value};

use crate::error::Result;
use crate::models::{Academia, NuevaAcademia, CENTRO_MAPA};
use crate::territorio::FiltroTerritorial;

pub fn parse_nueva_academia(json_str: &str) -> Result<NuevaAcademia> {
    Ok(serde_json::from_str::<NuevaAcademia>(json_str)?)
}

/// Extrae el filtro territorial de los parámetros de query
/// (`departamento`, `municipio`, `distrito`). Valores vacíos no filtran.
pub fn filtro_desde_query(qm: &HashMap<String, String>) -> FiltroTerritorial {
    FiltroTerritorial::nuevo(
        qm.get("departamento").map(String::as_str),
        qm.get("municipio").map(String::as_str),
        qm.get("distrito").map(String::as_str),
    )
}

/// GeoJSON `FeatureCollection` con un punto por registro, en el orden
/// recibido. Las coordenadas GeoJSON van como `[lng, lat]`.
pub fn a_geojson(academias: &[&Academia]) -> Value {
    let features: Vec<Value> = academias
        .iter()
        .map(|a| {
            json!({
                "type": "Feature",
                "geometry": {"type": "Point", "coordinates": [a.lng, a.lat]},
                "properties": {
                    "id": a.id,
                    "nombre": a.nombre,
                    "deporte": a.deporte,
                    "infraestructura": a.infraestructura,
                    "usos": a.usos,
                    "usuarios": a.usuarios,
                },
            })
        })
        .collect();
    json!({
        "type": "FeatureCollection",
        "centro": {"lat": CENTRO_MAPA.0, "lng": CENTRO_MAPA.1},
        "features": features,
    })
}
