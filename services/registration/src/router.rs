use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use padron_core::health::healthz;
use padron_core::middleware::request_id_layer;

use crate::handlers::{
    events::user_events, health::readyz, registration::register_user, schema::get_schema,
    user::get_users,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Registration
        .route("/users", post(register_user))
        // Read views
        .route("/users", get(get_users))
        .route("/users/events", get(user_events))
        .route("/schema", get(get_schema))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
