use actix_cors::Cors;
use actix_web::{http::Method, middleware, web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use crate::server_handlers::*;

/// Registra todas las rutas de la API.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_redirect_handler))
        .route("/help", web::get().to(help_handler))
        .route("/catalogos", web::get().to(catalogos_handler))
        .route("/territorio", web::get().to(territorio_handler))
        .route("/territorio/departamentos", web::get().to(departamentos_handler))
        .route("/territorio/municipios", web::get().to(municipios_handler))
        .route("/territorio/distritos", web::get().to(distritos_handler))
        .route("/territorio/poblacion", web::get().to(poblacion_handler))
        .route("/academias", web::get().to(listar_academias_handler))
        .route("/academias", web::post().to(crear_academia_handler))
        .route("/academias/geojson", web::get().to(geojson_handler))
        .route("/estadisticas", web::get().to(resumen_handler))
        .route("/estadisticas/conteo", web::get().to(conteo_handler))
        .route("/estadisticas/suma", web::get().to(suma_handler))
        .route("/estadisticas/piramide", web::get().to(piramide_handler));
}

fn cors(origin: Option<&str>) -> Cors {
    let base = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_any_header()
        .max_age(3600);
    match origin {
        Some(o) => base.allowed_origin(o),
        None => base.allow_any_origin(),
    }
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let estado = EstadoApp::nuevo(config.clone()).map_err(|e| std::io::Error::other(e.to_string()))?;
    let datos = web::Data::new(estado);

    info!("Iniciando servidor en http://{}", config.bind);
    let origin = config.cors_origin.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(datos.clone())
            .wrap(cors(origin.as_deref()))
            .wrap(middleware::Logger::default())
            .configure(configurar_rutas)
    })
    .bind(&config.bind)?
    .run()
    .await
}
