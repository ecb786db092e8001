mod common;

use common::{academia, muestra};
use onid::estadisticas::*;
use onid::models::Academia;
use onid::territorio::{CatalogoTerritorial, FiltroTerritorial};

fn refs(v: &[Academia]) -> Vec<&Academia> {
    v.iter().collect()
}

#[test]
fn test_filtro_vacio_es_identidad() {
    let datos = muestra();
    let out = filtrar_por_territorio(&datos, &FiltroTerritorial::default());
    assert_eq!(out.len(), datos.len());
    let ids: Vec<i64> = out.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_filtro_por_niveles() {
    let datos = muestra();
    let dep = filtrar_por_territorio(&datos, &FiltroTerritorial::nuevo(Some("San Salvador"), None, None));
    assert_eq!(dep.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 4]);

    let mun = filtrar_por_territorio(
        &datos,
        &FiltroTerritorial::nuevo(Some("San Salvador"), Some("San Salvador Centro"), None),
    );
    assert_eq!(mun.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 4]);

    let dist = filtrar_por_territorio(
        &datos,
        &FiltroTerritorial::nuevo(Some("San Salvador"), Some("San Salvador Centro"), Some("Mejicanos")),
    );
    assert_eq!(dist.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1]);

    // sin coincidencias parciales
    let parcial = filtrar_por_territorio(&datos, &FiltroTerritorial::nuevo(Some("San"), None, None));
    assert!(parcial.is_empty());
}

#[test]
fn test_contar_por_vacio() {
    let vacio: Vec<&Academia> = Vec::new();
    for campo in [
        CampoConteo::Deporte,
        CampoConteo::Infraestructura,
        CampoConteo::Usos,
        CampoConteo::Departamento,
        CampoConteo::Municipio,
        CampoConteo::Distrito,
        CampoConteo::Responsable,
    ] {
        assert!(contar_por(&vacio, campo).is_empty());
    }
}

#[test]
fn test_contar_por_suma_el_total() {
    let datos = muestra();
    let r = refs(&datos);
    for campo in [CampoConteo::Deporte, CampoConteo::Departamento, CampoConteo::Responsable] {
        let total: usize = contar_por(&r, campo).iter().map(|c| c.cantidad).sum();
        assert_eq!(total, datos.len());
    }
}

#[test]
fn test_contar_por_orden_y_undefined() {
    let datos = muestra();
    let r = refs(&datos);

    let por_dep = contar_por(&r, CampoConteo::Departamento);
    assert_eq!(
        por_dep,
        vec![
            Conteo { nombre: "San Salvador".into(), cantidad: 3 },
            Conteo { nombre: "Santa Ana".into(), cantidad: 1 },
            Conteo { nombre: SIN_VALOR.into(), cantidad: 1 },
        ]
    );

    // Fútbol en 1, 4 y 5; Baloncesto en 2 y 3
    let por_deporte = contar_por(&r, CampoConteo::Deporte);
    assert_eq!(por_deporte[0], Conteo { nombre: "Fútbol".into(), cantidad: 3 });
    assert_eq!(por_deporte[1], Conteo { nombre: "Baloncesto".into(), cantidad: 2 });

    let por_resp = contar_por(&r, CampoConteo::Responsable);
    assert_eq!(por_resp[0], Conteo { nombre: "undefined".into(), cantidad: 4 });
    assert_eq!(por_resp[1], Conteo { nombre: "Alcaldía".into(), cantidad: 1 });
}

#[test]
fn test_contar_por_empates_en_orden_de_aparicion() {
    let datos = vec![
        academia(1, Some(("Santa Ana", "Santa Ana Centro", "Santa Ana")), 0, 0),
        academia(2, Some(("La Paz", "La Paz Este", "Zacatecoluca")), 0, 0),
        academia(3, Some(("Cabañas", "Cabañas Oeste", "Ilobasco")), 0, 0),
    ];
    let r = refs(&datos);
    let nombres: Vec<String> = contar_por(&r, CampoConteo::Departamento).into_iter().map(|c| c.nombre).collect();
    assert_eq!(nombres, vec!["Santa Ana", "La Paz", "Cabañas"]);
    // determinista
    let otra: Vec<String> = contar_por(&r, CampoConteo::Departamento).into_iter().map(|c| c.nombre).collect();
    assert_eq!(nombres, otra);
}

#[test]
fn test_contar_catalogo_incluye_ceros() {
    let datos = muestra();
    let r = refs(&datos);
    let por_uso = contar_catalogo(&r, CampoConteo::Usos);
    assert_eq!(por_uso.len(), 7);
    assert_eq!(por_uso[0], Conteo { nombre: "Recreativo".into(), cantidad: 4 });
    assert_eq!(por_uso[1], Conteo { nombre: "Escolar".into(), cantidad: 1 });
    assert!(por_uso[2..].iter().all(|c| c.cantidad == 0));
    // los ceros conservan el orden del vocabulario
    assert_eq!(por_uso[2].nombre, "Entrenamiento");
}

#[test]
fn test_escenario_sumas_y_cobertura() {
    let datos = vec![
        academia(1, None, 10, 5),
        academia(2, None, 20, 0),
        academia(3, None, 0, 15),
    ];
    let r = refs(&datos);
    assert_eq!(sumar_campo(&r, CampoNumerico::Hombres), 30);
    assert_eq!(sumar_campo(&r, CampoNumerico::Mujeres), 20);
    assert_eq!(sumar_campo(&r, CampoNumerico::Usuarios), 50);
    assert_eq!(tasa_cobertura(50, 1000).to_string(), "5.00%");
    // franjas ausentes suman 0
    assert_eq!(sumar_campo(&r, CampoNumerico::Hombres0a12), 0);
}

#[test]
fn test_cobertura_sin_poblacion() {
    assert_eq!(tasa_cobertura(500, 0), TasaCobertura::NoAplica);
    assert_eq!(tasa_cobertura(500, 0).to_string(), "N/A");
    assert_eq!(tasa_cobertura(0, 0).to_string(), "N/A");
}

#[test]
fn test_piramide_siempre_tres_franjas() {
    let vacio: Vec<&Academia> = Vec::new();
    let p = piramide_edad_genero(&vacio);
    assert_eq!(p.iter().map(|f| f.franja).collect::<Vec<_>>(), vec![FranjaEdad::De0a12, FranjaEdad::De13a29, FranjaEdad::De30Mas]);
    assert!(p.iter().all(|f| f.hombres == 0 && f.mujeres == 0));

    let mut a = academia(1, None, 17, 9);
    a.hombres_0_12 = Some(5);
    a.hombres_13_29 = Some(10);
    a.hombres_30_mas = Some(2);
    a.mujeres_0_12 = Some(4);
    a.mujeres_13_29 = Some(5);
    a.mujeres_30_mas = Some(0);
    let mut b = academia(2, None, 3, 0);
    b.hombres_30_mas = Some(3);
    let datos = vec![a, b];
    let p = piramide_edad_genero(&refs(&datos));
    assert_eq!((p[0].hombres, p[0].mujeres), (5, 4));
    assert_eq!((p[1].hombres, p[1].mujeres), (10, 5));
    assert_eq!((p[2].hombres, p[2].mujeres), (5, 0));
}

#[test]
fn test_resumen_por_departamento() {
    let cat = CatalogoTerritorial::censo_2024();
    let datos = muestra();
    let filtro = FiltroTerritorial::nuevo(Some("San Salvador"), None, None);
    let r = resumir(&cat, &datos, &filtro).expect("filtro válido");
    assert_eq!(r.total_infraestructuras, 3);
    assert_eq!(r.hombres, 37);
    assert_eq!(r.mujeres, 8);
    assert_eq!(r.poblacion_referencia, 1_563_371);
    assert_eq!(r.cobertura.to_string(), "0.00%");
    assert_eq!(r.por_deporte.len(), 10);
    assert_eq!(r.por_infraestructura.len(), 9);
    assert_eq!(r.por_uso.len(), 7);
}

#[test]
fn test_resumen_bajo_departamento_es_na() {
    let cat = CatalogoTerritorial::censo_2024();
    let datos = muestra();
    let filtro = FiltroTerritorial::nuevo(Some("San Salvador"), Some("San Salvador Centro"), None);
    let r = resumir(&cat, &datos, &filtro).unwrap();
    assert_eq!(r.total_infraestructuras, 2);
    assert_eq!(r.poblacion_referencia, 0);
    assert_eq!(r.cobertura, TasaCobertura::NoAplica);
}

#[test]
fn test_resumen_nacional() {
    let cat = CatalogoTerritorial::censo_2024();
    let datos = muestra();
    let r = resumir(&cat, &datos, &FiltroTerritorial::default()).unwrap();
    assert_eq!(r.total_infraestructuras, 5);
    assert_eq!(r.poblacion_referencia, 5_922_921);
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["cobertura"], "0.00%");
    assert_eq!(json["piramide"][2]["franja"], "30+");
}

#[test]
fn test_resumen_rechaza_territorio_desconocido() {
    let cat = CatalogoTerritorial::censo_2024();
    let datos = muestra();
    let filtro = FiltroTerritorial::nuevo(Some("Gotham"), None, None);
    assert!(resumir(&cat, &datos, &filtro).is_err());
}

#[test]
fn test_sumas_saturan_con_conteos_enormes() {
    let datos = vec![
        academia(1, None, u64::MAX, 0),
        academia(2, None, u64::MAX, 0),
        academia(3, None, 5, 0),
    ];
    let r = refs(&datos);
    assert_eq!(sumar_campo(&r, CampoNumerico::Hombres), u64::MAX);

    let cat = CatalogoTerritorial::censo_2024();
    let resumen = resumir(&cat, &datos, &FiltroTerritorial::default()).unwrap();
    assert_eq!(resumen.hombres, u64::MAX);
}

#[test]
fn test_resumen_normaliza_el_filtro() {
    let cat = CatalogoTerritorial::censo_2024();
    let datos = muestra();
    let filtro = FiltroTerritorial {
        departamento: Some(" San Salvador ".to_string()),
        municipio: Some("  ".to_string()),
        distrito: None,
    };
    let r = resumir(&cat, &datos, &filtro).unwrap();
    assert_eq!(r.total_infraestructuras, 3);
    assert_eq!(r.poblacion_referencia, 1_563_371);
    assert_eq!(r.filtro.departamento.as_deref(), Some("San Salvador"));
    assert_eq!(r.filtro.municipio, None);
}
