pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;

use axum::{
    http::{header, Method},
    middleware::from_fn,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware, security_headers::security_headers_middleware,
    tracing::{request_id_middleware, REQUEST_ID_HEADER},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::config::CalculatorConfig;

pub const OPENAPI_PATH: &str = "/.well-known/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::root::root,
        handlers::health::health_check,
        handlers::arithmetic::add,
        handlers::arithmetic::subtract,
        handlers::arithmetic::multiply,
        handlers::arithmetic::divide,
    ),
    components(
        schemas(
            dtos::OperationRequest,
            dtos::OperationResponse,
            dtos::HealthResponse,
        )
    ),
    tags(
        (name = "Arithmetic", description = "Binary operations on two JSON numbers"),
        (name = "Observability", description = "Service health and discovery"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: CalculatorConfig,
}

impl AppState {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }
}

async fn openapi_document() -> Result<impl IntoResponse, AppError> {
    let document = ApiDoc::openapi()
        .to_pretty_json()
        .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], document))
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics))
        .route("/add", post(handlers::add))
        .route("/subtract", post(handlers::subtract))
        .route("/multiply", post(handlers::multiply))
        .route("/divide", post(handlers::divide));

    if state.config.openapi_enabled {
        app = app.route(OPENAPI_PATH, get(openapi_document));
    }

    app.with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(
            |request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            },
        ))
        .layer(from_fn(request_id_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
