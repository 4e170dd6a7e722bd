use axum::extract::State;
use axum::http::StatusCode;

use crate::state::AppState;

/// Handler for `GET /readyz` — readiness check. The service is ready only
/// when the store answers a ping; an unreachable or unconfigured store turns
/// traffic away here instead of failing mid-registration.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    match state.db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "store unreachable");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
