use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
///
/// Readiness (`/readyz`) is service-specific: each service wires its own
/// handler that checks the dependencies it actually needs.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
