use axum::extract::State;

use crate::{AppState, OPENAPI_PATH};

/// Greeting for liveness checks and discovery
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "Observability"
)]
pub async fn root(State(state): State<AppState>) -> String {
    if state.config.openapi_enabled {
        format!(
            "{} is running. API document at {}",
            state.config.service_name, OPENAPI_PATH
        )
    } else {
        format!("{} is running.", state.config.service_name)
    }
}
