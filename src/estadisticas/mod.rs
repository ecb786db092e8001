//! Agregación de registros para el tablero: filtrado territorial, conteos por
//! categoría, sumas, tasa de cobertura y pirámide de edad/género.
//!
//! Todas las funciones son puras: reciben el catálogo y la instantánea de
//! registros como argumentos y no leen estado global.

use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{OnidError, Result};
use crate::models::{Academia, Deporte, TipoInfraestructura, Uso};
use crate::territorio::{CatalogoTerritorial, FiltroTerritorial};

/// Etiqueta para valores ausentes en `contar_por`.
pub const SIN_VALOR: &str = "undefined";

/// Campos categóricos por los que se puede contar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoConteo {
    Deporte,
    Infraestructura,
    Usos,
    Departamento,
    Municipio,
    Distrito,
    Responsable,
}

impl FromStr for CampoConteo {
    type Err = OnidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "deporte" => Ok(CampoConteo::Deporte),
            "infraestructura" => Ok(CampoConteo::Infraestructura),
            "usos" => Ok(CampoConteo::Usos),
            "departamento" => Ok(CampoConteo::Departamento),
            "municipio" => Ok(CampoConteo::Municipio),
            "distrito" => Ok(CampoConteo::Distrito),
            "responsable" => Ok(CampoConteo::Responsable),
            otro => Err(OnidError::invalid(format!("campo de conteo desconocido: '{}'", otro))),
        }
    }
}

impl CampoConteo {
    fn valor(&self, a: &Academia) -> Option<String> {
        match self {
            CampoConteo::Deporte => Some(a.deporte.to_string()),
            CampoConteo::Infraestructura => Some(a.infraestructura.to_string()),
            CampoConteo::Usos => Some(a.usos.to_string()),
            CampoConteo::Departamento => a.departamento.clone(),
            CampoConteo::Municipio => a.municipio.clone(),
            CampoConteo::Distrito => a.distrito.clone(),
            CampoConteo::Responsable => a.responsable.clone(),
        }
    }

    /// Vocabulario completo del campo, si es un campo enumerado.
    fn vocabulario(&self) -> Option<Vec<&'static str>> {
        match self {
            CampoConteo::Deporte => Some(Deporte::TODOS.iter().map(|d| d.etiqueta()).collect()),
            CampoConteo::Infraestructura => Some(TipoInfraestructura::TODOS.iter().map(|d| d.etiqueta()).collect()),
            CampoConteo::Usos => Some(Uso::TODOS.iter().map(|d| d.etiqueta()).collect()),
            _ => None,
        }
    }
}

/// Campos numéricos sumables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampoNumerico {
    Hombres,
    Mujeres,
    Usuarios,
    Hombres0a12,
    Hombres13a29,
    Hombres30Mas,
    Mujeres0a12,
    Mujeres13a29,
    Mujeres30Mas,
}

impl FromStr for CampoNumerico {
    type Err = OnidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "hombres" => Ok(CampoNumerico::Hombres),
            "mujeres" => Ok(CampoNumerico::Mujeres),
            "usuarios" => Ok(CampoNumerico::Usuarios),
            "hombres_0_12" => Ok(CampoNumerico::Hombres0a12),
            "hombres_13_29" => Ok(CampoNumerico::Hombres13a29),
            "hombres_30_mas" => Ok(CampoNumerico::Hombres30Mas),
            "mujeres_0_12" => Ok(CampoNumerico::Mujeres0a12),
            "mujeres_13_29" => Ok(CampoNumerico::Mujeres13a29),
            "mujeres_30_mas" => Ok(CampoNumerico::Mujeres30Mas),
            otro => Err(OnidError::invalid(format!("campo numérico desconocido: '{}'", otro))),
        }
    }
}

impl CampoNumerico {
    fn valor(&self, a: &Academia) -> u64 {
        match self {
            CampoNumerico::Hombres => a.hombres,
            CampoNumerico::Mujeres => a.mujeres,
            CampoNumerico::Usuarios => a.usuarios,
            CampoNumerico::Hombres0a12 => a.hombres_0_12.unwrap_or(0),
            CampoNumerico::Hombres13a29 => a.hombres_13_29.unwrap_or(0),
            CampoNumerico::Hombres30Mas => a.hombres_30_mas.unwrap_or(0),
            CampoNumerico::Mujeres0a12 => a.mujeres_0_12.unwrap_or(0),
            CampoNumerico::Mujeres13a29 => a.mujeres_13_29.unwrap_or(0),
            CampoNumerico::Mujeres30Mas => a.mujeres_30_mas.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conteo {
    pub nombre: String,
    pub cantidad: usize,
}

/// Registros que coinciden con cada nivel entregado del filtro, en el orden
/// original. Coincidencia exacta; los niveles ausentes no restringen.
pub fn filtrar_por_territorio<'a>(academias: &'a [Academia], filtro: &FiltroTerritorial) -> Vec<&'a Academia> {
    let coincide = |esperado: &Option<String>, actual: &Option<String>| match esperado {
        None => true,
        Some(e) => actual.as_deref() == Some(e.as_str()),
    };
    academias
        .iter()
        .filter(|a| {
            coincide(&filtro.departamento, &a.departamento)
                && coincide(&filtro.municipio, &a.municipio)
                && coincide(&filtro.distrito, &a.distrito)
        })
        .collect()
}

// Orden descendente por cantidad; `sort_by` es estable, así que los empates
// conservan el orden de primera aparición.
fn ordenar(mut conteos: Vec<Conteo>) -> Vec<Conteo> {
    conteos.sort_by(|a, b| b.cantidad.cmp(&a.cantidad));
    conteos
}

/// Conteo por valor distinto del campo. Los valores ausentes se agrupan bajo
/// `"undefined"`. La suma de todas las cantidades es `academias.len()`.
pub fn contar_por(academias: &[&Academia], campo: CampoConteo) -> Vec<Conteo> {
    let mut indice: HashMap<String, usize> = HashMap::new();
    let mut conteos: Vec<Conteo> = Vec::new();
    for a in academias {
        let nombre = campo.valor(a).unwrap_or_else(|| SIN_VALOR.to_string());
        match indice.get(&nombre) {
            Some(&i) => conteos[i].cantidad += 1,
            None => {
                indice.insert(nombre.clone(), conteos.len());
                conteos.push(Conteo { nombre, cantidad: 1 });
            }
        }
    }
    ordenar(conteos)
}

/// Como `contar_por`, pero para campos enumerados parte del vocabulario
/// completo e incluye las categorías sin registros. Para campos libres es
/// igual a `contar_por`.
pub fn contar_catalogo(academias: &[&Academia], campo: CampoConteo) -> Vec<Conteo> {
    let Some(vocabulario) = campo.vocabulario() else {
        return contar_por(academias, campo);
    };
    let conteos = vocabulario
        .into_iter()
        .map(|etiqueta| Conteo {
            nombre: etiqueta.to_string(),
            cantidad: academias
                .iter()
                .filter(|a| campo.valor(a).as_deref() == Some(etiqueta))
                .count(),
        })
        .collect();
    ordenar(conteos)
}

/// Suma saturada: filas antiguas con conteos enormes no desbordan.
pub fn sumar_campo(academias: &[&Academia], campo: CampoNumerico) -> u64 {
    academias.iter().fold(0u64, |acc, a| acc.saturating_add(campo.valor(a)))
}

/// Tasa de cobertura: beneficiarios / población de referencia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TasaCobertura {
    /// Porcentaje redondeado a dos decimales.
    Porcentaje(f64),
    /// La población de referencia es desconocida (0).
    NoAplica,
}

impl fmt::Display for TasaCobertura {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TasaCobertura::Porcentaje(p) => write!(f, "{:.2}%", p),
            TasaCobertura::NoAplica => f.write_str("N/A"),
        }
    }
}

impl Serialize for TasaCobertura {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn tasa_cobertura(total_beneficiarios: u64, poblacion_referencia: u64) -> TasaCobertura {
    if poblacion_referencia == 0 {
        return TasaCobertura::NoAplica;
    }
    let pct = total_beneficiarios as f64 / poblacion_referencia as f64 * 100.0;
    TasaCobertura::Porcentaje((pct * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FranjaEdad {
    #[serde(rename = "0-12")]
    De0a12,
    #[serde(rename = "13-29")]
    De13a29,
    #[serde(rename = "30+")]
    De30Mas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FranjaPiramide {
    pub franja: FranjaEdad,
    pub hombres: u64,
    pub mujeres: u64,
}

/// Siempre tres franjas, en orden ascendente de edad.
pub fn piramide_edad_genero(academias: &[&Academia]) -> [FranjaPiramide; 3] {
    let fila = |franja: FranjaEdad, h: CampoNumerico, m: CampoNumerico| FranjaPiramide {
        franja,
        hombres: sumar_campo(academias, h),
        mujeres: sumar_campo(academias, m),
    };
    [
        fila(FranjaEdad::De0a12, CampoNumerico::Hombres0a12, CampoNumerico::Mujeres0a12),
        fila(FranjaEdad::De13a29, CampoNumerico::Hombres13a29, CampoNumerico::Mujeres13a29),
        fila(FranjaEdad::De30Mas, CampoNumerico::Hombres30Mas, CampoNumerico::Mujeres30Mas),
    ]
}

/// Vista agregada del tablero para un filtro territorial.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenEstadistico {
    pub filtro: FiltroTerritorial,
    pub total_infraestructuras: usize,
    pub hombres: u64,
    pub mujeres: u64,
    pub usuarios: u64,
    pub poblacion_referencia: u64,
    pub cobertura: TasaCobertura,
    pub por_deporte: Vec<Conteo>,
    pub por_infraestructura: Vec<Conteo>,
    pub por_uso: Vec<Conteo>,
    pub piramide: [FranjaPiramide; 3],
}

pub fn resumir(
    catalogo: &CatalogoTerritorial,
    academias: &[Academia],
    filtro: &FiltroTerritorial,
) -> Result<ResumenEstadistico> {
    let filtro = filtro.clone().normalizado();
    let poblacion_referencia = catalogo.resolver_poblacion(
        filtro.departamento.as_deref(),
        filtro.municipio.as_deref(),
        filtro.distrito.as_deref(),
    )?;
    let filtradas = filtrar_por_territorio(academias, &filtro);

    let hombres = sumar_campo(&filtradas, CampoNumerico::Hombres);
    let mujeres = sumar_campo(&filtradas, CampoNumerico::Mujeres);

    Ok(ResumenEstadistico {
        filtro,
        total_infraestructuras: filtradas.len(),
        hombres,
        mujeres,
        usuarios: sumar_campo(&filtradas, CampoNumerico::Usuarios),
        poblacion_referencia,
        cobertura: tasa_cobertura(hombres.saturating_add(mujeres), poblacion_referencia),
        por_deporte: contar_catalogo(&filtradas, CampoConteo::Deporte),
        por_infraestructura: contar_catalogo(&filtradas, CampoConteo::Infraestructura),
        por_uso: contar_catalogo(&filtradas, CampoConteo::Usos),
        piramide: piramide_edad_genero(&filtradas),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cobertura_formato() {
        assert_eq!(tasa_cobertura(1, 3).to_string(), "33.33%");
        assert_eq!(tasa_cobertura(2, 3).to_string(), "66.67%");
        assert_eq!(tasa_cobertura(0, 10).to_string(), "0.00%");
        assert_eq!(tasa_cobertura(7, 0).to_string(), "N/A");
    }

    #[test]
    fn cobertura_serializa_como_texto() {
        let v = serde_json::to_value(tasa_cobertura(50, 1000)).unwrap();
        assert_eq!(v, serde_json::json!("5.00%"));
    }

    #[test]
    fn campos_desconocidos() {
        assert!(matches!("color".parse::<CampoConteo>(), Err(OnidError::InvalidInput(_))));
        assert!(matches!("edad".parse::<CampoNumerico>(), Err(OnidError::InvalidInput(_))));
    }
}
