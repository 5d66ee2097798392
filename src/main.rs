use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use renskrift::application::services::CleaningService;
use renskrift::infrastructure::language::WhatlangDetector;
use renskrift::infrastructure::observability::{TracingConfig, init_tracing};
use renskrift::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env().map_err(anyhow::Error::msg)?;

    init_tracing(
        &TracingConfig {
            environment: settings.environment.to_string(),
            json_format: settings.logging.json_format,
        },
        settings.server.port,
    );

    let detector = Arc::new(WhatlangDetector);
    let cleaning_service = Arc::new(CleaningService::new(detector));

    let state = AppState { cleaning_service };
    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
