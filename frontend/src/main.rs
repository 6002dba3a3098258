use std::net::SocketAddr;

use medicine_core::MedicineClient;
use medicine_frontend::{server, Config, PageController, ReqwestTransport};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let controller = PageController::new(MedicineClient::new(&config.api_url), ReqwestTransport::default());
    let app = server::router(controller);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(api_url = %config.api_url, "serving medicines page on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
