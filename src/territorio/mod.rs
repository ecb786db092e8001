//! Catálogo territorial de El Salvador: Departamento → Municipio → Distrito.
//!
//! El catálogo se carga una sola vez y es de solo lectura. Las búsquedas
//! validan cada nivel contra su padre: un municipio sólo tiene sentido dentro
//! de su departamento y un distrito dentro de su municipio. Los nombres
//! desconocidos se rechazan aquí con `OnidError::NotFound` en vez de
//! propagarse hacia la agregación.

mod censos;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::{Arc, OnceLock};
use strsim::jaro_winkler;

use crate::error::{OnidError, Result};

/// Similitud mínima para ofrecer una sugerencia en los errores `NotFound`.
const UMBRAL_SUGERENCIA: f64 = 0.85;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distrito {
    pub nombre: String,
    #[serde(default)]
    pub poblacion: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Municipio {
    pub nombre: String,
    #[serde(default)]
    pub poblacion: Option<u64>,
    pub distritos: Vec<Distrito>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departamento {
    pub nombre: String,
    pub poblacion: u64,
    pub municipios: Vec<Municipio>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogoTerritorial {
    pub departamentos: Vec<Departamento>,
}

/// Filtro territorial opcional de tres niveles. Los campos ausentes (o en
/// blanco) actúan como comodín.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiltroTerritorial {
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub distrito: Option<String>,
}

impl FiltroTerritorial {
    pub fn nuevo(departamento: Option<&str>, municipio: Option<&str>, distrito: Option<&str>) -> Self {
        FiltroTerritorial {
            departamento: departamento.map(str::to_string),
            municipio: municipio.map(str::to_string),
            distrito: distrito.map(str::to_string),
        }
        .normalizado()
    }

    /// Recorta espacios y convierte cadenas vacías en `None`; el selector
    /// "Seleccione..." del formulario envía "".
    pub fn normalizado(self) -> Self {
        let limpiar = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };
        FiltroTerritorial {
            departamento: limpiar(self.departamento),
            municipio: limpiar(self.municipio),
            distrito: limpiar(self.distrito),
        }
    }

    pub fn es_vacio(&self) -> bool {
        self.departamento.is_none() && self.municipio.is_none() && self.distrito.is_none()
    }
}

// Nombres no vacíos y únicos dentro de un mismo padre.
fn nombres_unicos<'a>(nivel: &str, padre: &str, nombres: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut vistos = HashSet::new();
    let mut alguno = false;
    for nombre in nombres {
        alguno = true;
        if nombre.trim().is_empty() {
            return Err(OnidError::invalid(format!("{} sin nombre en '{}'", nivel, padre)));
        }
        if !vistos.insert(nombre) {
            return Err(OnidError::invalid(format!("{} '{}' repetido en '{}'", nivel, nombre, padre)));
        }
    }
    if !alguno {
        return Err(OnidError::invalid(format!("'{}' no tiene ningún {}", padre, nivel)));
    }
    Ok(())
}

fn sugerir<'a>(buscado: &str, candidatos: impl Iterator<Item = &'a str>) -> Option<String> {
    let buscado = buscado.to_lowercase();
    candidatos
        .map(|c| (jaro_winkler(&buscado, &c.to_lowercase()), c))
        .filter(|(score, _)| *score >= UMBRAL_SUGERENCIA)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c.to_string())
}

impl CatalogoTerritorial {
    /// Catálogo del Censo 2024 (14 departamentos, 44 municipios, 262 distritos).
    pub fn censo_2024() -> Self {
        let departamentos = censos::CENSOS_2024
            .iter()
            .map(|(dep, poblacion, municipios)| Departamento {
                nombre: dep.to_string(),
                poblacion: *poblacion,
                municipios: municipios
                    .iter()
                    .map(|(mun, distritos)| Municipio {
                        nombre: mun.to_string(),
                        poblacion: None,
                        distritos: distritos
                            .iter()
                            .map(|d| Distrito { nombre: d.to_string(), poblacion: None })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        CatalogoTerritorial { departamentos }
    }

    pub fn from_json(json_str: &str) -> Result<Self> {
        let catalogo: CatalogoTerritorial = serde_json::from_str(json_str)?;
        catalogo.verificar()?;
        Ok(catalogo)
    }

    /// Cada nivel tiene al menos un hijo y los nombres no se repiten bajo el
    /// mismo padre.
    fn verificar(&self) -> Result<()> {
        nombres_unicos("departamento", "catálogo", self.departamentos.iter().map(|d| d.nombre.as_str()))?;
        for dep in &self.departamentos {
            nombres_unicos("municipio", &dep.nombre, dep.municipios.iter().map(|m| m.nombre.as_str()))?;
            for mun in &dep.municipios {
                nombres_unicos("distrito", &mun.nombre, mun.distritos.iter().map(|d| d.nombre.as_str()))?;
            }
        }
        Ok(())
    }

    pub fn departamento(&self, nombre: &str) -> Result<&Departamento> {
        self.departamentos
            .iter()
            .find(|d| d.nombre == nombre)
            .ok_or_else(|| OnidError::NotFound {
                nivel: "departamento",
                nombre: nombre.to_string(),
                sugerencia: sugerir(nombre, self.departamentos.iter().map(|d| d.nombre.as_str())),
            })
    }

    pub fn municipio(&self, departamento: &str, municipio: &str) -> Result<&Municipio> {
        let dep = self.departamento(departamento)?;
        dep.municipios
            .iter()
            .find(|m| m.nombre == municipio)
            .ok_or_else(|| OnidError::NotFound {
                nivel: "municipio",
                nombre: municipio.to_string(),
                sugerencia: sugerir(municipio, dep.municipios.iter().map(|m| m.nombre.as_str())),
            })
    }

    pub fn distrito(&self, departamento: &str, municipio: &str, distrito: &str) -> Result<&Distrito> {
        let mun = self.municipio(departamento, municipio)?;
        mun.distritos
            .iter()
            .find(|d| d.nombre == distrito)
            .ok_or_else(|| OnidError::NotFound {
                nivel: "distrito",
                nombre: distrito.to_string(),
                sugerencia: sugerir(distrito, mun.distritos.iter().map(|d| d.nombre.as_str())),
            })
    }

    pub fn listar_departamentos(&self) -> Vec<&str> {
        self.departamentos.iter().map(|d| d.nombre.as_str()).collect()
    }

    pub fn listar_municipios(&self, departamento: &str) -> Result<Vec<&str>> {
        let dep = self.departamento(departamento)?;
        Ok(dep.municipios.iter().map(|m| m.nombre.as_str()).collect())
    }

    pub fn listar_distritos(&self, departamento: &str, municipio: &str) -> Result<Vec<&str>> {
        let mun = self.municipio(departamento, municipio)?;
        Ok(mun.distritos.iter().map(|d| d.nombre.as_str()).collect())
    }

    pub fn poblacion_nacional(&self) -> u64 {
        self.departamentos.iter().fold(0u64, |acc, d| acc.saturating_add(d.poblacion))
    }

    /// Población de referencia para la tasa de cobertura.
    ///
    /// - sin departamento: total nacional;
    /// - sólo departamento: la cifra censal del departamento;
    /// - con municipio (con o sin distrito): 0. El censo sólo está tabulado
    ///   por departamento, así que bajo ese nivel la cobertura queda "N/A".
    ///
    /// Los nombres que se entreguen se validan igualmente.
    pub fn resolver_poblacion(
        &self,
        departamento: Option<&str>,
        municipio: Option<&str>,
        distrito: Option<&str>,
    ) -> Result<u64> {
        let filtro = FiltroTerritorial::nuevo(departamento, municipio, distrito);
        self.validar_filtro(&filtro)?;
        match (&filtro.departamento, &filtro.municipio) {
            (None, _) => Ok(self.poblacion_nacional()),
            (Some(dep), None) => Ok(self.departamento(dep)?.poblacion),
            (Some(_), Some(_)) => Ok(0),
        }
    }

    pub fn validar_ubicacion(&self, departamento: &str, municipio: &str, distrito: &str) -> Result<()> {
        self.distrito(departamento, municipio, distrito).map(|_| ())
    }

    /// Verifica que cada nivel entregado exista bajo su padre. Un nivel sin su
    /// padre (municipio sin departamento, distrito sin municipio) es inválido.
    pub fn validar_filtro(&self, filtro: &FiltroTerritorial) -> Result<()> {
        match (&filtro.departamento, &filtro.municipio, &filtro.distrito) {
            (None, None, None) => Ok(()),
            (Some(dep), None, None) => self.departamento(dep).map(|_| ()),
            (Some(dep), Some(mun), None) => self.municipio(dep, mun).map(|_| ()),
            (Some(dep), Some(mun), Some(dist)) => self.validar_ubicacion(dep, mun, dist),
            (None, Some(_), _) => Err(OnidError::invalid("municipio requiere departamento")),
            (_, None, Some(_)) => Err(OnidError::invalid("distrito requiere municipio")),
        }
    }
}

static CATALOGO: OnceLock<Arc<CatalogoTerritorial>> = OnceLock::new();

/// Catálogo por defecto (Censo 2024), construido en el primer uso.
pub fn catalogo() -> Arc<CatalogoTerritorial> {
    Arc::clone(CATALOGO.get_or_init(|| Arc::new(CatalogoTerritorial::censo_2024())))
}
