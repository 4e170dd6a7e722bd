use sea_orm::Database;
use tracing::info;

use padron_registration::config::RegistrationConfig;
use padron_registration::infra::events::UserChangeFeed;
use padron_registration::router::build_router;
use padron_registration::state::AppState;

#[tokio::main]
async fn main() {
    padron_core::tracing::init_tracing();

    let config = RegistrationConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState {
        db,
        changes: UserChangeFeed::default(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.registration_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("registration service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
