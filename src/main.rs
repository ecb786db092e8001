// --- ONID: registro de infraestructura deportiva - Archivo principal ---

use onid::config::Config;
use onid::run_server;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== ONID: Registro de Infraestructura Deportiva (API) ===");
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    run_server(config).await
}
