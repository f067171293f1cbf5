use engine_gateway::application::GatewayService;
use engine_gateway::config::Config;
use engine_gateway::infrastructure::metrics::init_metrics;
use engine_gateway::infrastructure::process::ProcessEngineRunner;
use engine_gateway::interface::api::{build_router, AppState};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting engine gateway");

    // Load configuration
    let config = Config::load()?;
    info!("Configuration loaded: {:?}", config);

    let engine_path = config.engine.resolve_path()?;
    if !engine_path.is_file() {
        warn!(
            "Engine {} does not exist yet; /run will answer 500 until it does",
            engine_path.display()
        );
    }
    info!("Engine: {}", engine_path.display());
    match config.engine.timeout() {
        Some(limit) => info!("Engine wait limit: {:?}", limit),
        None => info!("Engine wait limit: none"),
    }

    let runner = ProcessEngineRunner::new(engine_path).with_timeout(config.engine.timeout());
    let gateway = GatewayService::new(Arc::new(runner))
        .with_max_concurrent(config.engine.max_concurrent);

    // Initialize metrics exporter
    info!("Initializing Prometheus metrics exporter");
    let prometheus_handle = init_metrics()?;

    let app = build_router(AppState::new(Arc::new(gateway)), prometheus_handle);

    let addr = config.bind_address()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server running on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
