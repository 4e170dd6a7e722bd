use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;

use padron_registration::infra::events::UserChangeFeed;
use padron_registration::router::build_router;
use padron_registration::state::AppState;

/// A server whose store is never reached — enough for the routes that do not
/// touch the database and for rejections that happen before it.
fn test_server() -> TestServer {
    let state = AppState {
        db: DatabaseConnection::default(),
        changes: UserChangeFeed::default(),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn healthz_returns_200() {
    let server = test_server();
    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn schema_describes_the_four_tables() {
    let server = test_server();
    let response = server.get("/schema").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let tables: serde_json::Value = response.json();
    let names: Vec<_> = tables
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["countries", "contacts", "document_types", "users"]
    );
}

#[tokio::test]
async fn invalid_payload_is_rejected_before_the_store() {
    let server = test_server();
    let response = server
        .post("/users")
        .json(&serde_json::json!({
            "name": "Ana",
            "lastName": "Ruiz",
            "email": "a@x.com",
            "password": "short",
            "documentType": "DNI",
            "documentNumber": "123",
            "countryCode": "ES",
            "countryName": "España",
            "phone": "+34000"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["kind"], "INVALID_FIELD");
    assert_eq!(body["message"], "invalid password");
}
