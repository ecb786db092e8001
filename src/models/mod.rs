// Estructuras de datos principales del registro de infraestructura deportiva

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{OnidError, Result};
use crate::territorio::CatalogoTerritorial;

/// Centro por defecto del mapa (San Salvador).
pub const CENTRO_MAPA: (f64, f64) = (13.6929, -89.2182);

/// Tope por conteo individual (total o franja) en un registro nuevo.
pub const MAX_CONTEO: u64 = 1_000_000;

// Define un vocabulario cerrado: cada variante se serializa con su etiqueta
// en español, que es también la que se guarda en la base de datos.
macro_rules! vocabulario {
    ($(#[$meta:meta])* $nombre:ident { $($variante:ident => $etiqueta:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $nombre {
            $(
                #[serde(rename = $etiqueta)]
                $variante,
            )+
        }

        impl $nombre {
            pub const TODOS: &'static [$nombre] = &[$($nombre::$variante),+];

            pub fn etiqueta(&self) -> &'static str {
                match self {
                    $($nombre::$variante => $etiqueta,)+
                }
            }
        }

        impl fmt::Display for $nombre {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.etiqueta())
            }
        }

        impl FromStr for $nombre {
            type Err = OnidError;

            fn from_str(s: &str) -> Result<Self> {
                let s = s.trim();
                $nombre::TODOS
                    .iter()
                    .copied()
                    .find(|v| v.etiqueta() == s)
                    .ok_or_else(|| OnidError::invalid(format!("{} desconocido: '{}'", stringify!($nombre), s)))
            }
        }
    };
}

vocabulario! {
    /// Deporte principal practicado en la infraestructura.
    Deporte {
        Futbol => "Fútbol",
        Baloncesto => "Baloncesto",
        Natacion => "Natación",
        ArtesMarciales => "Artes Marciales",
        Voleibol => "Voleibol",
        Atletismo => "Atletismo",
        Patinaje => "Patinaje",
        Beisbol => "Béisbol",
        Softbol => "Softbol",
        Otros => "Otros",
    }
}

vocabulario! {
    TipoInfraestructura {
        Estadio => "Estadio",
        CanchaSintetica => "Cancha Sintética",
        CanchaNatural => "Cancha Natural",
        GimnasioTechado => "Gimnasio Techado",
        ComplejoDeportivo => "Complejo Deportivo",
        EspacioPublico => "Espacio Público",
        Pista => "Pista",
        Piscinas => "Piscinas",
        CanchaBaloncesto => "Cancha de Baloncesto",
    }
}

vocabulario! {
    /// Modelo de uso principal.
    Uso {
        Recreativo => "Recreativo",
        Entrenamiento => "Entrenamiento",
        AltoRendimiento => "Alto Rendimiento",
        CompetenciaLocal => "Competencia Local",
        Escolar => "Escolar",
        Comunitario => "Comunitario",
        Privado => "Privado",
    }
}

impl Default for Deporte {
    fn default() -> Self {
        Deporte::Futbol
    }
}

impl Default for TipoInfraestructura {
    fn default() -> Self {
        TipoInfraestructura::CanchaNatural
    }
}

impl Default for Uso {
    fn default() -> Self {
        Uso::Recreativo
    }
}

/// Registro de una infraestructura deportiva tal como queda almacenado.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Academia {
    pub id: i64,
    pub nombre: String,
    pub lat: f64,
    pub lng: f64,
    pub deporte: Deporte,
    pub infraestructura: TipoInfraestructura,
    pub usos: Uso,
    #[serde(default)]
    pub hombres: u64,
    #[serde(default)]
    pub mujeres: u64,
    #[serde(default)]
    pub usuarios: u64,
    #[serde(default)]
    pub hombres_0_12: Option<u64>,
    #[serde(default)]
    pub hombres_13_29: Option<u64>,
    #[serde(default)]
    pub hombres_30_mas: Option<u64>,
    #[serde(default)]
    pub mujeres_0_12: Option<u64>,
    #[serde(default)]
    pub mujeres_13_29: Option<u64>,
    #[serde(default)]
    pub mujeres_30_mas: Option<u64>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub distrito: Option<String>,
    #[serde(default)]
    pub responsable: Option<String>,
    #[serde(default)]
    pub objetivos: Option<String>,
    #[serde(default)]
    pub creado_en: Option<String>,
}

impl Academia {
    /// Desglose por edades, si el registro lo trae completo o parcial.
    pub fn desglose(&self) -> Option<DesgloseEdad> {
        let bandas = [
            self.hombres_0_12,
            self.hombres_13_29,
            self.hombres_30_mas,
            self.mujeres_0_12,
            self.mujeres_13_29,
            self.mujeres_30_mas,
        ];
        if bandas.iter().all(Option::is_none) {
            return None;
        }
        Some(DesgloseEdad {
            hombres_0_12: self.hombres_0_12.unwrap_or(0),
            hombres_13_29: self.hombres_13_29.unwrap_or(0),
            hombres_30_mas: self.hombres_30_mas.unwrap_or(0),
            mujeres_0_12: self.mujeres_0_12.unwrap_or(0),
            mujeres_13_29: self.mujeres_13_29.unwrap_or(0),
            mujeres_30_mas: self.mujeres_30_mas.unwrap_or(0),
        })
    }
}

/// Conteos por género y franja de edad (0–12, 13–29, 30+).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesgloseEdad {
    pub hombres_0_12: u64,
    pub hombres_13_29: u64,
    pub hombres_30_mas: u64,
    pub mujeres_0_12: u64,
    pub mujeres_13_29: u64,
    pub mujeres_30_mas: u64,
}

impl DesgloseEdad {
    /// `None` si la suma desborda.
    pub fn total_hombres(&self) -> Option<u64> {
        self.hombres_0_12.checked_add(self.hombres_13_29)?.checked_add(self.hombres_30_mas)
    }

    pub fn total_mujeres(&self) -> Option<u64> {
        self.mujeres_0_12.checked_add(self.mujeres_13_29)?.checked_add(self.mujeres_30_mas)
    }

    fn franjas(&self) -> [(&'static str, u64); 6] {
        [
            ("hombres_0_12", self.hombres_0_12),
            ("hombres_13_29", self.hombres_13_29),
            ("hombres_30_mas", self.hombres_30_mas),
            ("mujeres_0_12", self.mujeres_0_12),
            ("mujeres_13_29", self.mujeres_13_29),
            ("mujeres_30_mas", self.mujeres_30_mas),
        ]
    }
}

/// Datos enviados por el formulario de registro.
///
/// # Estructura del JSON esperado:
/// ```json
/// {
///   "nombre": "Cancha Municipal El Zonte",
///   "lat": 13.4936,
///   "lng": -89.4411,
///   "deporte": "Fútbol",
///   "infraestructura": "Cancha Sintética",
///   "usos": "Comunitario",
///   "hombres": 40,
///   "mujeres": 25,
///   "edades": null,
///   "departamento": "La Libertad",
///   "municipio": "La Libertad Costa",
///   "distrito": "Chiltiupán",
///   "responsable": "Alcaldía / INDES",
///   "objetivos": ""
/// }
/// ```
///
/// Si llega `edades`, los totales `hombres`/`mujeres` se recalculan a partir
/// de las franjas y los valores enviados se ignoran.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NuevaAcademia {
    pub nombre: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(default)]
    pub deporte: Deporte,
    #[serde(default)]
    pub infraestructura: TipoInfraestructura,
    #[serde(default)]
    pub usos: Uso,
    #[serde(default)]
    pub hombres: u64,
    #[serde(default)]
    pub mujeres: u64,
    #[serde(default)]
    pub edades: Option<DesgloseEdad>,
    #[serde(default)]
    pub departamento: Option<String>,
    #[serde(default)]
    pub municipio: Option<String>,
    #[serde(default)]
    pub distrito: Option<String>,
    #[serde(default)]
    pub responsable: Option<String>,
    #[serde(default)]
    pub objetivos: Option<String>,
}

/// Registro listo para insertar: ubicación verificada contra el catálogo y
/// totales consistentes con el desglose.
#[derive(Debug, Clone, PartialEq)]
pub struct AcademiaValidada {
    pub nombre: String,
    pub lat: f64,
    pub lng: f64,
    pub deporte: Deporte,
    pub infraestructura: TipoInfraestructura,
    pub usos: Uso,
    pub hombres: u64,
    pub mujeres: u64,
    pub usuarios: u64,
    pub edades: Option<DesgloseEdad>,
    pub departamento: String,
    pub municipio: String,
    pub distrito: String,
    pub responsable: Option<String>,
    pub objetivos: Option<String>,
}

fn acotar(campo: &str, valor: u64) -> Result<u64> {
    if valor > MAX_CONTEO {
        return Err(OnidError::invalid(format!("{} fuera de rango: {} (máximo {})", campo, valor, MAX_CONTEO)));
    }
    Ok(valor)
}

fn no_vacio(s: &Option<String>) -> Option<String> {
    s.as_deref().map(str::trim).filter(|t| !t.is_empty()).map(str::to_string)
}

impl NuevaAcademia {
    pub fn validar(&self, catalogo: &CatalogoTerritorial) -> Result<AcademiaValidada> {
        let nombre = self.nombre.trim();
        if nombre.is_empty() {
            return Err(OnidError::invalid("nombre es requerido"));
        }

        let (lat, lng) = match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => (lat, lng),
            _ => return Err(OnidError::invalid("debe marcar en el mapa la ubicación de la infraestructura (lat/lng)")),
        };
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(OnidError::invalid(format!("latitud fuera de rango: {}", lat)));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(OnidError::invalid(format!("longitud fuera de rango: {}", lng)));
        }

        let (departamento, municipio, distrito) = match (
            no_vacio(&self.departamento),
            no_vacio(&self.municipio),
            no_vacio(&self.distrito),
        ) {
            (Some(dep), Some(mun), Some(dist)) => (dep, mun, dist),
            _ => return Err(OnidError::invalid("faltan datos de ubicación (departamento/municipio/distrito)")),
        };
        catalogo.validar_ubicacion(&departamento, &municipio, &distrito)?;

        let (hombres, mujeres) = match &self.edades {
            Some(e) => {
                for (campo, valor) in e.franjas() {
                    acotar(campo, valor)?;
                }
                let desborde = || OnidError::invalid("la suma de las franjas de edad desborda");
                (
                    e.total_hombres().ok_or_else(desborde)?,
                    e.total_mujeres().ok_or_else(desborde)?,
                )
            }
            None => (acotar("hombres", self.hombres)?, acotar("mujeres", self.mujeres)?),
        };
        let usuarios = hombres
            .checked_add(mujeres)
            .ok_or_else(|| OnidError::invalid("usuarios desborda"))?;

        Ok(AcademiaValidada {
            nombre: nombre.to_string(),
            lat,
            lng,
            deporte: self.deporte,
            infraestructura: self.infraestructura,
            usos: self.usos,
            hombres,
            mujeres,
            usuarios,
            edades: self.edades,
            departamento,
            municipio,
            distrito,
            responsable: no_vacio(&self.responsable),
            objetivos: no_vacio(&self.objetivos),
        })
    }
}

impl AcademiaValidada {
    /// Construye el registro almacenado una vez que el almacén asignó `id`.
    pub fn into_academia(self, id: i64, creado_en: Option<String>) -> Academia {
        let e = self.edades;
        Academia {
            id,
            nombre: self.nombre,
            lat: self.lat,
            lng: self.lng,
            deporte: self.deporte,
            infraestructura: self.infraestructura,
            usos: self.usos,
            hombres: self.hombres,
            mujeres: self.mujeres,
            usuarios: self.usuarios,
            hombres_0_12: e.map(|e| e.hombres_0_12),
            hombres_13_29: e.map(|e| e.hombres_13_29),
            hombres_30_mas: e.map(|e| e.hombres_30_mas),
            mujeres_0_12: e.map(|e| e.mujeres_0_12),
            mujeres_13_29: e.map(|e| e.mujeres_13_29),
            mujeres_30_mas: e.map(|e| e.mujeres_30_mas),
            departamento: Some(self.departamento),
            municipio: Some(self.municipio),
            distrito: Some(self.distrito),
            responsable: self.responsable,
            objetivos: self.objetivos,
            creado_en,
        }
    }
}
