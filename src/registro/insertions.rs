use chrono::Utc;
use rusqlite::params;
use tracing::info;

use crate::error::{OnidError, Result};
use crate::models::{Academia, AcademiaValidada};
use crate::registro::db::{con_postgres, ConexionRegistro};

fn entero(n: u64) -> Result<i64> {
    i64::try_from(n).map_err(|_| OnidError::invalid(format!("conteo demasiado grande: {}", n)))
}

/// Inserta un registro validado y devuelve la fila almacenada con el `id`
/// asignado por la base.
pub fn insertar_academia(conn: &ConexionRegistro, nueva: AcademiaValidada) -> Result<Academia> {
    let ts = Utc::now().to_rfc3339();
    let bandas: [Option<i64>; 6] = match nueva.edades {
        Some(e) => [
            Some(entero(e.hombres_0_12)?),
            Some(entero(e.hombres_13_29)?),
            Some(entero(e.hombres_30_mas)?),
            Some(entero(e.mujeres_0_12)?),
            Some(entero(e.mujeres_13_29)?),
            Some(entero(e.mujeres_30_mas)?),
        ],
        None => [None; 6],
    };
    let hombres = entero(nueva.hombres)?;
    let mujeres = entero(nueva.mujeres)?;
    let usuarios = entero(nueva.usuarios)?;

    let id = match conn {
        ConexionRegistro::Sqlite(c) => {
            c.execute(
                "INSERT INTO academias (
                    creado_en, nombre, lat, lng, deporte, infraestructura, usos,
                    hombres, mujeres, usuarios,
                    hombres_0_12, hombres_13_29, hombres_30_mas,
                    mujeres_0_12, mujeres_13_29, mujeres_30_mas,
                    departamento, municipio, distrito, responsable, objetivos
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20, ?21)",
                params![
                    ts,
                    nueva.nombre,
                    nueva.lat,
                    nueva.lng,
                    nueva.deporte.etiqueta(),
                    nueva.infraestructura.etiqueta(),
                    nueva.usos.etiqueta(),
                    hombres,
                    mujeres,
                    usuarios,
                    bandas[0],
                    bandas[1],
                    bandas[2],
                    bandas[3],
                    bandas[4],
                    bandas[5],
                    nueva.departamento,
                    nueva.municipio,
                    nueva.distrito,
                    nueva.responsable,
                    nueva.objetivos,
                ],
            )?;
            c.last_insert_rowid()
        }
        ConexionRegistro::PostgresConfig(url) => {
            let fila = nueva.clone();
            let ts_s = ts.clone();
            con_postgres(url, move |client| {
                let row = client.query_one(
                    "INSERT INTO academias (
                        creado_en, nombre, lat, lng, deporte, infraestructura, usos,
                        hombres, mujeres, usuarios,
                        hombres_0_12, hombres_13_29, hombres_30_mas,
                        mujeres_0_12, mujeres_13_29, mujeres_30_mas,
                        departamento, municipio, distrito, responsable, objetivos
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
                    RETURNING id",
                    &[
                        &ts_s,
                        &fila.nombre,
                        &fila.lat,
                        &fila.lng,
                        &fila.deporte.etiqueta(),
                        &fila.infraestructura.etiqueta(),
                        &fila.usos.etiqueta(),
                        &hombres,
                        &mujeres,
                        &usuarios,
                        &bandas[0],
                        &bandas[1],
                        &bandas[2],
                        &bandas[3],
                        &bandas[4],
                        &bandas[5],
                        &fila.departamento,
                        &fila.municipio,
                        &fila.distrito,
                        &fila.responsable,
                        &fila.objetivos,
                    ],
                )?;
                Ok(row.try_get::<_, i64>(0)?)
            })?
        }
    };

    info!("academia {} registrada: {} ({}/{}/{})", id, nueva.nombre, nueva.departamento, nueva.municipio, nueva.distrito);
    Ok(nueva.into_academia(id, Some(ts)))
}
