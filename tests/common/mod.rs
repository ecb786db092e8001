#![allow(dead_code)]

use onid::models::{Academia, Deporte, TipoInfraestructura, Uso};

pub fn academia(id: i64, ubicacion: Option<(&str, &str, &str)>, hombres: u64, mujeres: u64) -> Academia {
    let (departamento, municipio, distrito) = match ubicacion {
        Some((d, m, x)) => (Some(d.to_string()), Some(m.to_string()), Some(x.to_string())),
        None => (None, None, None),
    };
    Academia {
        id,
        nombre: format!("Infraestructura {}", id),
        lat: 13.6929,
        lng: -89.2182,
        deporte: Deporte::Futbol,
        infraestructura: TipoInfraestructura::CanchaNatural,
        usos: Uso::Recreativo,
        hombres,
        mujeres,
        usuarios: hombres + mujeres,
        hombres_0_12: None,
        hombres_13_29: None,
        hombres_30_mas: None,
        mujeres_0_12: None,
        mujeres_13_29: None,
        mujeres_30_mas: None,
        departamento,
        municipio,
        distrito,
        responsable: None,
        objetivos: None,
        creado_en: None,
    }
}

/// Cinco registros repartidos en tres departamentos.
pub fn muestra() -> Vec<Academia> {
    let mut v = vec![
        academia(1, Some(("San Salvador", "San Salvador Centro", "Mejicanos")), 10, 5),
        academia(2, Some(("San Salvador", "San Salvador Este", "Soyapango")), 20, 0),
        academia(3, Some(("Santa Ana", "Santa Ana Centro", "Santa Ana")), 0, 15),
        academia(4, Some(("San Salvador", "San Salvador Centro", "San Salvador")), 7, 3),
        academia(5, None, 1, 1),
    ];
    v[1].deporte = Deporte::Baloncesto;
    v[1].infraestructura = TipoInfraestructura::GimnasioTechado;
    v[2].deporte = Deporte::Baloncesto;
    v[2].usos = Uso::Escolar;
    v[3].responsable = Some("Alcaldía".to_string());
    v
}
