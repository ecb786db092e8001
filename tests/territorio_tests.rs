use onid::territorio::{catalogo, CatalogoTerritorial, FiltroTerritorial};
use onid::OnidError;

#[test]
fn test_cascada_nunca_vacia() {
    let cat = CatalogoTerritorial::censo_2024();
    let deps = cat.listar_departamentos();
    assert_eq!(deps.len(), 14);
    for d in deps {
        let muns = cat.listar_municipios(d).expect("departamento del catálogo");
        assert!(!muns.is_empty(), "{} sin municipios", d);
        for m in muns {
            let dists = cat.listar_distritos(d, m).expect("municipio del catálogo");
            assert!(!dists.is_empty(), "{}/{} sin distritos", d, m);
        }
    }
}

#[test]
fn test_tamano_del_censo() {
    let cat = CatalogoTerritorial::censo_2024();
    let municipios: usize = cat.departamentos.iter().map(|d| d.municipios.len()).sum();
    let distritos: usize = cat
        .departamentos
        .iter()
        .flat_map(|d| d.municipios.iter())
        .map(|m| m.distritos.len())
        .sum();
    assert_eq!(municipios, 44);
    assert_eq!(distritos, 262);
}

#[test]
fn test_orden_de_departamentos() {
    let cat = catalogo();
    let deps = cat.listar_departamentos();
    assert_eq!(deps.first(), Some(&"Ahuachapán"));
    assert_eq!(deps.last(), Some(&"La Unión"));
    assert_eq!(
        cat.listar_municipios("Ahuachapán").unwrap(),
        vec!["Ahuachapán Centro", "Ahuachapán Norte", "Ahuachapán Sur"]
    );
}

#[test]
fn test_resolver_poblacion() {
    let cat = CatalogoTerritorial::censo_2024();
    assert_eq!(cat.resolver_poblacion(None, None, None).unwrap(), 5_922_921);
    assert_eq!(cat.resolver_poblacion(Some("San Salvador"), None, None).unwrap(), 1_563_371);
    // el censo no baja de departamento
    assert_eq!(cat.resolver_poblacion(Some("San Salvador"), Some("San Salvador Centro"), None).unwrap(), 0);
    assert_eq!(
        cat.resolver_poblacion(Some("San Salvador"), Some("San Salvador Centro"), Some("Mejicanos")).unwrap(),
        0
    );
}

#[test]
fn test_poblacion_nacional_es_suma_de_departamentos() {
    let cat = CatalogoTerritorial::censo_2024();
    let suma: u64 = cat.departamentos.iter().map(|d| d.poblacion).sum();
    assert_eq!(cat.resolver_poblacion(None, None, None).unwrap(), suma);
}

#[test]
fn test_claves_desconocidas() {
    let cat = CatalogoTerritorial::censo_2024();
    assert!(matches!(cat.listar_municipios("Atlántida"), Err(OnidError::NotFound { nivel: "departamento", .. })));
    assert!(matches!(
        cat.listar_distritos("San Salvador", "Santa Ana Centro"),
        Err(OnidError::NotFound { nivel: "municipio", .. })
    ));
    assert!(matches!(
        cat.resolver_poblacion(Some("Narnia"), None, None),
        Err(OnidError::NotFound { .. })
    ));
    // distrito de otro municipio
    assert!(matches!(
        cat.validar_ubicacion("San Salvador", "San Salvador Centro", "Soyapango"),
        Err(OnidError::NotFound { nivel: "distrito", .. })
    ));
}

#[test]
fn test_nombres_repetidos_entre_padres() {
    // "El Rosario" existe en Cuscatlán Sur, La Paz Centro y Morazán Norte
    let cat = CatalogoTerritorial::censo_2024();
    assert!(cat.validar_ubicacion("Cuscatlán", "Cuscatlán Sur", "El Rosario").is_ok());
    assert!(cat.validar_ubicacion("La Paz", "La Paz Centro", "El Rosario").is_ok());
    assert!(cat.validar_ubicacion("Morazán", "Morazán Norte", "El Rosario").is_ok());
    assert!(cat.validar_ubicacion("Morazán", "Morazán Sur", "El Rosario").is_err());
}

#[test]
fn test_validar_filtro() {
    let cat = CatalogoTerritorial::censo_2024();
    assert!(cat.validar_filtro(&FiltroTerritorial::default()).is_ok());
    assert!(cat.validar_filtro(&FiltroTerritorial::nuevo(Some("Sonsonate"), Some("Sonsonate Oeste"), None)).is_ok());

    let sin_padre = FiltroTerritorial::nuevo(None, Some("Sonsonate Oeste"), None);
    assert!(matches!(cat.validar_filtro(&sin_padre), Err(OnidError::InvalidInput(_))));

    let salto = FiltroTerritorial::nuevo(Some("Sonsonate"), None, Some("Acajutla"));
    assert!(matches!(cat.validar_filtro(&salto), Err(OnidError::InvalidInput(_))));
}

#[test]
fn test_filtro_normaliza_vacios() {
    let f = FiltroTerritorial::nuevo(Some("  "), Some(""), None);
    assert!(f.es_vacio());
    let f = FiltroTerritorial::nuevo(Some(" La Paz "), None, None);
    assert_eq!(f.departamento.as_deref(), Some("La Paz"));
}

#[test]
fn test_catalogo_desde_json() {
    let json = r#"{
        "departamentos": [
            {"nombre": "Norte", "poblacion": 1000, "municipios": [
                {"nombre": "Norte Centro", "poblacion": 600, "distritos": [{"nombre": "Uno"}, {"nombre": "Dos", "poblacion": 100}]}
            ]},
            {"nombre": "Sur", "poblacion": 500, "municipios": [
                {"nombre": "Sur Centro", "distritos": [{"nombre": "Tres"}]}
            ]}
        ]
    }"#;
    let cat = CatalogoTerritorial::from_json(json).expect("catálogo válido");
    assert_eq!(cat.resolver_poblacion(None, None, None).unwrap(), 1500);
    assert_eq!(cat.resolver_poblacion(Some("Norte"), None, None).unwrap(), 1000);
    // aun con población municipal cargada, bajo departamento se mantiene 0
    assert_eq!(cat.resolver_poblacion(Some("Norte"), Some("Norte Centro"), None).unwrap(), 0);
    assert_eq!(cat.listar_distritos("Norte", "Norte Centro").unwrap(), vec!["Uno", "Dos"]);

    assert!(CatalogoTerritorial::from_json(r#"{"departamentos": []}"#).is_err());
}

#[test]
fn test_catalogo_json_rechaza_estructura_invalida() {
    let invalidos = [
        // departamento repetido, el primero sin municipios
        r#"{"departamentos": [
            {"nombre": "A", "poblacion": 1, "municipios": []},
            {"nombre": "A", "poblacion": 2, "municipios": [{"nombre": "A1", "distritos": [{"nombre": "x"}]}]}
        ]}"#,
        // municipio repetido
        r#"{"departamentos": [
            {"nombre": "A", "poblacion": 1, "municipios": [
                {"nombre": "A1", "distritos": [{"nombre": "x"}]},
                {"nombre": "A1", "distritos": [{"nombre": "y"}]}
            ]}
        ]}"#,
        // municipio sin distritos
        r#"{"departamentos": [
            {"nombre": "A", "poblacion": 1, "municipios": [{"nombre": "A1", "distritos": []}]}
        ]}"#,
        // distrito repetido
        r#"{"departamentos": [
            {"nombre": "A", "poblacion": 1, "municipios": [{"nombre": "A1", "distritos": [{"nombre": "x"}, {"nombre": "x"}]}]}
        ]}"#,
        // nombre en blanco
        r#"{"departamentos": [
            {"nombre": " ", "poblacion": 1, "municipios": [{"nombre": "A1", "distritos": [{"nombre": "x"}]}]}
        ]}"#,
    ];
    for json in invalidos {
        assert!(
            matches!(CatalogoTerritorial::from_json(json), Err(OnidError::InvalidInput(_))),
            "debió rechazarse: {}",
            json
        );
    }

    // el mismo nombre de distrito bajo padres distintos es válido
    let ok = r#"{"departamentos": [
        {"nombre": "A", "poblacion": 1, "municipios": [
            {"nombre": "A1", "distritos": [{"nombre": "x"}]},
            {"nombre": "A2", "distritos": [{"nombre": "x"}]}
        ]}
    ]}"#;
    assert!(CatalogoTerritorial::from_json(ok).is_ok());
}
