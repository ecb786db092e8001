// Censo de Población y Vivienda 2024, tabulado por departamento.
// Estructura: (departamento, población, [(municipio, [distritos])]).
// Las poblaciones de municipio y distrito no están publicadas en esta tabla.

pub(crate) type TablaMunicipio = (&'static str, &'static [&'static str]);
pub(crate) type TablaDepartamento = (&'static str, u64, &'static [TablaMunicipio]);

pub(crate) static CENSOS_2024: &[TablaDepartamento] = &[
    (
        "Ahuachapán",
        348880,
        &[
            ("Ahuachapán Centro", &["Ahuachapán", "Apaneca", "Concepción de Ataco", "Tacuba"]),
            ("Ahuachapán Norte", &["Atiquizaya", "El Refugio", "San Lorenzo", "Turín"]),
            ("Ahuachapán Sur", &["Guaymango", "Jujutla", "San Francisco Menéndez", "San Pedro Puxtla"]),
        ],
    ),
    (
        "Santa Ana",
        552938,
        &[
            ("Santa Ana Centro", &["Santa Ana"]),
            ("Santa Ana Este", &["Coatepeque", "El Congo"]),
            ("Santa Ana Norte", &["Masahuat", "Metapán", "Santa Rosa Guachipilín", "Texistepeque"]),
            ("Santa Ana Oeste", &["Candelaria de La Frontera", "Chalchuapa", "El Porvenir", "San Antonio Pajonal", "San Sebastián Salitrillo", "Santiago de La Frontera"]),
        ],
    ),
    (
        "Sonsonate",
        470455,
        &[
            ("Sonsonate Centro", &["Nahulingo", "San Antonio del Monte", "Santo Domingo de Guzmán", "Sonsonate", "Sonzacate"]),
            ("Sonsonate Este", &["Armenia", "Caluco", "Cuisnahuat", "Izalco", "San Julián", "Santa Isabel Ishuatán"]),
            ("Sonsonate Norte", &["Juayúa", "Nahuizalco", "Salcoatitán", "Santa Catarina Masahuat"]),
            ("Sonsonate Oeste", &["Acajutla"]),
        ],
    ),
    (
        "Chalatenango",
        185930,
        &[
            ("Chalatenango Centro", &["Agua Caliente", "Dulce Nombre de María", "El Paraíso", "La Reina", "Nueva Concepción", "San Fernando", "San Francisco Morazán", "San Rafael", "Santa Rita", "Tejutla"]),
            ("Chalatenango Norte", &["Citalá", "La Palma", "San Ignacio"]),
            ("Chalatenango Sur", &["Arcatao", "Azacualpa", "Cancasque", "Chalatenango", "Comalapa", "Concepción Quezaltepeque", "El Carrizal", "La Laguna", "Las Flores", "Las Vueltas", "Nombre de Jesús", "Nueva Trinidad", "Ojos de Agua", "Potonico", "San Antonio de La Cruz", "San Antonio Los Ranchos", "San Francisco Lempa", "San Isidro Labrador", "San Luis del Carmen", "San Miguel de Mercedes"]),
        ],
    ),
    (
        "La Libertad",
        765879,
        &[
            ("La Libertad Centro", &["Ciudad Arce", "San Juan Opico"]),
            ("La Libertad Costa", &["Chiltiupán", "Jicalapa", "La Libertad", "Tamanique", "Teotepeque"]),
            ("La Libertad Este", &["Antiguo Cuscatlán", "Huizúcar", "Nuevo Cuscatlán", "San José Villanueva", "Zaragoza"]),
            ("La Libertad Norte", &["Quezaltepeque", "San Matías", "San Pablo Tacachico"]),
            ("La Libertad Oeste", &["Colón", "Jayaque", "Sacacoyo", "Talnique", "Tepecoyo"]),
            ("La Libertad Sur", &["Comasagua", "Santa Tecla"]),
        ],
    ),
    (
        "San Salvador",
        1563371,
        &[
            ("San Salvador Centro", &["Ayutuxtepeque", "Ciudad Delgado", "Cuscatancingo", "Mejicanos", "San Salvador"]),
            ("San Salvador Este", &["Ilopango", "San Martín", "Soyapango", "Tonacatepeque"]),
            ("San Salvador Norte", &["Aguilares", "El Paisnal", "Guazapa"]),
            ("San Salvador Oeste", &["Apopa", "Nejapa"]),
            ("San Salvador Sur", &["Panchimalco", "Rosario de Mora", "San Marcos", "Santiago Texacuangos", "Santo Tomás"]),
        ],
    ),
    (
        "Cuscatlán",
        244901,
        &[
            ("Cuscatlán Norte", &["Oratorio de Concepción", "San Bartolomé Perulapía", "San José Guayabal", "San Pedro Perulapán", "Suchitoto"]),
            ("Cuscatlán Sur", &["Candelaria", "Cojutepeque", "El Carmen", "El Rosario", "Monte San Juan", "San Cristobal", "San Rafael Cedros", "San Ramón", "Santa Cruz Analquito", "Santa Cruz Michapa", "Tenancingo"]),
        ],
    ),
    (
        "La Paz",
        318374,
        &[
            ("La Paz Centro", &["El Rosario", "Jerusalén", "Mercedes La Ceiba", "Paraíso de Osorio", "San Antonio Masahuat", "San Emigdio", "San Juan Tepezontes", "San Luis La Herradura", "San Miguel Tepezontes", "San Pedro Nonualco", "Santa María Ostuma", "Santiago Nonualco"]),
            ("La Paz Este", &["San Juan Nonualco", "San Rafael Obrajuelo", "Zacatecoluca"]),
            ("La Paz Oeste", &["Cuyultitán", "Olocuilta", "San Francisco Chinameca", "San Juan Talpa", "San Luis Talpa", "San Pedro Masahuat", "Tapalhuaca"]),
        ],
    ),
    (
        "Cabañas",
        143049,
        &[
            ("Cabañas Este", &["Villa Dolores", "Guacotecti", "San Isidro", "Sensuntepeque", "Victoria"]),
            ("Cabañas Oeste", &["Cinquera", "Ilobasco", "Jutiapa", "Tejutepeque"]),
        ],
    ),
    (
        "San Vicente",
        161857,
        &[
            ("San Vicente Norte", &["Apastepeque", "San Esteban Catarina", "San Ildefonso", "San Lorenzo", "San Sebastián", "Santa Clara", "Santo Domingo"]),
            ("San Vicente Sur", &["Guadalupe", "San Cayetano Istepeque", "San Vicente", "Tecoluca", "Tepetitán", "Verapaz"]),
        ],
    ),
    (
        "Usulután",
        325494,
        &[
            ("Usulután Este", &["California", "Concepción Batres", "Ereguayquín", "Jucuarán", "Ozatlán", "San Dionisio", "Santa Elena", "Santa María", "Tecapán", "Usulután"]),
            ("Usulután Norte", &["Alegría", "Berlín", "El Triunfo", "Estanzuelas", "Jucuapa", "Mercedes Umaña", "Nueva Granada", "San Buena Ventura", "Santiago de María"]),
            ("Usulután Oeste", &["Jiquilisco", "Puerto El Triunfo", "San Agustín", "San Francisco Javier"]),
        ],
    ),
    (
        "San Miguel",
        447634,
        &[
            ("San Miguel Centro", &["Chirilagua", "Comacarán", "Moncagua", "Quelepa", "San Miguel", "Uluazapa"]),
            ("San Miguel Norte", &["Carolina", "Chapeltique", "Ciudad Barrios", "Nuevo Edén de San Juan", "San Antonio", "San Gerardo", "San Luis de La Reina", "Sesori"]),
            ("San Miguel Oeste", &["Chinameca", "El Tránsito", "Lolotique", "Nueva Guadalupe", "San Jorge", "San Rafael Oriente"]),
        ],
    ),
    (
        "Morazán",
        169784,
        &[
            ("Morazán Norte", &["Arambala", "Cacaopera", "Corinto", "El Rosario", "Joateca", "Jocoaitique", "Meanguera", "Perquín", "San Fernando", "San Isidro", "Torola"]),
            ("Morazán Sur", &["Chilanga", "Delicias de Concepción", "El Divisadero", "Gualococti", "Guatajiagua", "Jocoro", "Lolotiquillo", "Osicala", "San Carlos", "San Francisco Gotera", "San Simón", "Sensembra", "Sociedad", "Yamabal", "Yoloaiquín"]),
        ],
    ),
    (
        "La Unión",
        224375,
        &[
            ("La Unión Norte", &["Anamorós", "Bolívar", "Concepción de Oriente", "El Sauce", "Lislique", "Nueva Esparta", "Pasaquina", "Polorós", "San José", "Santa Rosa de Lima"]),
            ("La Unión Sur", &["Conchagua", "El Carmen", "Intipucá", "La Unión", "Meanguera del Golfo", "San Alejo", "Yayantique", "Yucuaiquín"]),
        ],
    ),
];
