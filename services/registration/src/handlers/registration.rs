use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::types::Registrant;
use crate::error::RegistrationError;
use crate::state::AppState;
use crate::usecase::register::RegisterUserUseCase;

// ── POST /users ──────────────────────────────────────────────────────────────

/// Registration form payload. Field names follow the form's camelCase keys.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub document_type: String,
    pub document_number: String,
    #[serde(default)]
    pub address: Option<String>,
    pub country_code: String,
    pub country_name: String,
    pub phone: String,
    #[serde(default)]
    pub cell_phone: Option<String>,
    #[serde(default)]
    pub emergency_name: Option<String>,
    #[serde(default)]
    pub emergency_phone: Option<String>,
}

#[derive(Serialize)]
pub struct RegistrationResponse {
    pub user_id: String,
    pub country_id: String,
    pub contact_id: String,
    pub document_type_id: String,
    #[serde(serialize_with = "padron_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), RegistrationError> {
    let usecase = RegisterUserUseCase {
        repo: state.registration_repo(),
        changes: state.changes.clone(),
    };
    let receipt = usecase
        .execute(Registrant {
            name: body.name,
            lastname: body.last_name,
            email: body.email,
            password: body.password,
            document_type: body.document_type,
            document_number: body.document_number,
            address: blank_to_none(body.address),
            country_code: body.country_code,
            country_name: body.country_name,
            phone: body.phone,
            cell_phone: blank_to_none(body.cell_phone),
            emergency_name: blank_to_none(body.emergency_name),
            emergency_phone: blank_to_none(body.emergency_phone),
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse {
            user_id: receipt.user_id.to_string(),
            country_id: receipt.country_id.to_string(),
            contact_id: receipt.contact_id.to_string(),
            document_type_id: receipt.document_type_id.to_string(),
            created_at: receipt.created_at,
        }),
    ))
}

/// The form submits optional fields as empty strings; store them as NULL.
fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
