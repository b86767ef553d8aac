use ordering_service::config::OrderingConfig;
use ordering_service::observability::init_tracing;
use ordering_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("ordering-service", "info");

    let config = OrderingConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
