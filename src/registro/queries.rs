use rusqlite::types::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::Academia;
use crate::registro::db::{con_postgres, ConexionRegistro};

pub(crate) const COLUMNAS: &str = "id, creado_en, nombre, lat, lng, deporte, infraestructura, usos, \
    hombres, mujeres, usuarios, \
    hombres_0_12, hombres_13_29, hombres_30_mas, mujeres_0_12, mujeres_13_29, mujeres_30_mas, \
    departamento, municipio, distrito, responsable, objetivos";

/// Fila tal como sale de la base, antes de validar las etiquetas.
#[derive(Debug)]
struct FilaAcademia {
    id: i64,
    creado_en: Option<String>,
    nombre: String,
    lat: f64,
    lng: f64,
    deporte: String,
    infraestructura: String,
    usos: String,
    conteos: [Option<i64>; 9],
    departamento: Option<String>,
    municipio: Option<String>,
    distrito: Option<String>,
    responsable: Option<String>,
    objetivos: Option<String>,
}

// Conteos negativos o nulos cuentan como 0 (o ausentes, para las franjas).
fn conteo(v: Option<i64>) -> Option<u64> {
    v.map(|n| u64::try_from(n).unwrap_or(0))
}

impl FilaAcademia {
    fn into_academia(self) -> Result<Academia> {
        let [h, m, u, h0, h13, h30, m0, m13, m30] = self.conteos;
        Ok(Academia {
            id: self.id,
            nombre: self.nombre,
            lat: self.lat,
            lng: self.lng,
            deporte: self.deporte.parse()?,
            infraestructura: self.infraestructura.parse()?,
            usos: self.usos.parse()?,
            hombres: conteo(h).unwrap_or(0),
            mujeres: conteo(m).unwrap_or(0),
            usuarios: conteo(u).unwrap_or(0),
            hombres_0_12: conteo(h0),
            hombres_13_29: conteo(h13),
            hombres_30_mas: conteo(h30),
            mujeres_0_12: conteo(m0),
            mujeres_13_29: conteo(m13),
            mujeres_30_mas: conteo(m30),
            departamento: self.departamento,
            municipio: self.municipio,
            distrito: self.distrito,
            responsable: self.responsable,
            objetivos: self.objetivos,
            creado_en: self.creado_en,
        })
    }
}

// Conteo escrito por otra herramienta como texto o real: cuenta como 0.
fn conteo_sqlite(id: i64, columna: usize, v: Value) -> Option<i64> {
    match v {
        Value::Integer(n) => Some(n),
        Value::Null => None,
        otro => {
            debug!("academia {}: columna {} no entera ({:?}), se toma 0", id, columna, otro);
            Some(0)
        }
    }
}

fn convertir(filas: Vec<FilaAcademia>) -> Vec<Academia> {
    let mut out = Vec::with_capacity(filas.len());
    for fila in filas {
        let id = fila.id;
        match fila.into_academia() {
            Ok(a) => out.push(a),
            Err(e) => warn!("skipping academia {}: {}", id, e),
        }
    }
    out
}

/// Todos los registros, ordenados por id.
pub fn listar_academias(conn: &ConexionRegistro) -> Result<Vec<Academia>> {
    let sql = format!("SELECT {} FROM academias ORDER BY id", COLUMNAS);
    match conn {
        ConexionRegistro::Sqlite(c) => {
            let mut stmt = c.prepare(&sql)?;
            let rows_iter = stmt.query_map([], |row| {
                let id: i64 = row.get(0)?;
                let mut conteos = [None; 9];
                for (i, slot) in conteos.iter_mut().enumerate() {
                    *slot = conteo_sqlite(id, 8 + i, row.get::<_, Value>(8 + i)?);
                }
                Ok(FilaAcademia {
                    id,
                    creado_en: row.get(1)?,
                    nombre: row.get(2)?,
                    lat: row.get(3)?,
                    lng: row.get(4)?,
                    deporte: row.get(5)?,
                    infraestructura: row.get(6)?,
                    usos: row.get(7)?,
                    conteos,
                    departamento: row.get(17)?,
                    municipio: row.get(18)?,
                    distrito: row.get(19)?,
                    responsable: row.get(20)?,
                    objetivos: row.get(21)?,
                })
            })?;
            let mut filas = Vec::new();
            for r in rows_iter {
                filas.push(r?);
            }
            Ok(convertir(filas))
        }
        ConexionRegistro::PostgresConfig(url) => {
            let filas = con_postgres(url, move |client| {
                let rows = client.query(sql.as_str(), &[])?;
                let mut filas = Vec::with_capacity(rows.len());
                for r in rows.iter() {
                    let mut conteos = [None; 9];
                    for (i, slot) in conteos.iter_mut().enumerate() {
                        // columnas de otro tipo (tabla creada fuera de onid) cuentan como 0
                        *slot = r.try_get::<_, Option<i64>>(8 + i).unwrap_or(Some(0));
                    }
                    filas.push(FilaAcademia {
                        id: r.try_get(0)?,
                        creado_en: r.try_get(1)?,
                        nombre: r.try_get(2)?,
                        lat: r.try_get(3)?,
                        lng: r.try_get(4)?,
                        deporte: r.try_get(5)?,
                        infraestructura: r.try_get(6)?,
                        usos: r.try_get(7)?,
                        conteos,
                        departamento: r.try_get(17)?,
                        municipio: r.try_get(18)?,
                        distrito: r.try_get(19)?,
                        responsable: r.try_get(20)?,
                        objetivos: r.try_get(21)?,
                    });
                }
                Ok(filas)
            })?;
            Ok(convertir(filas))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conteos_negativos_son_cero() {
        assert_eq!(conteo(Some(-3)), Some(0));
        assert_eq!(conteo(Some(12)), Some(12));
        assert_eq!(conteo(None), None);
    }

    #[test]
    fn conteos_no_enteros_son_cero() {
        assert_eq!(conteo_sqlite(1, 8, Value::Text("doce".into())), Some(0));
        assert_eq!(conteo_sqlite(1, 8, Value::Real(2.5)), Some(0));
        assert_eq!(conteo_sqlite(1, 8, Value::Integer(4)), Some(4));
        assert_eq!(conteo_sqlite(1, 11, Value::Null), None);
    }
}
