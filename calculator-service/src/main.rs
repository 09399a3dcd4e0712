use calculator_service::{config::CalculatorConfig, services::init_metrics, startup::Application};
use service_core::error::AppError;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load configuration - fail fast if invalid
    let config = CalculatorConfig::load()?;

    init_tracing(
        &config.service_name,
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    )?;

    init_metrics()?;

    tracing::info!(
        service = %config.service_name,
        version = env!("CARGO_PKG_VERSION"),
        port = config.common.port,
        openapi = config.openapi_enabled,
        "Starting calculator service"
    );

    let application = Application::build(config).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to start calculator service");
        e
    })?;

    application.run_until_stopped().await
}
