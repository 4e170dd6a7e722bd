use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use padron_core::pagination::PageRequest;

use crate::domain::types::UserSortBy;
use crate::error::RegistrationError;
use crate::state::AppState;
use crate::usecase::user::ListUsersUseCase;

// ── GET /users ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub document_type: String,
    pub document_number: String,
    #[serde(serialize_with = "padron_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct UserListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

pub async fn get_users(
    State(state): State<AppState>,
    axum::extract::Query(query): axum::extract::Query<UserListQuery>,
) -> Result<Json<Vec<UserResponse>>, RegistrationError> {
    let sort_by = query
        .sort_by
        .as_deref()
        .map(UserSortBy::from_kebab_case)
        .unwrap_or(Some(UserSortBy::default()))
        .unwrap_or_default();

    let page = PageRequest {
        per_page: query.per_page.unwrap_or(25),
        page: query.page.unwrap_or(1),
    };

    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute(sort_by, page).await?;
    let items = users
        .into_iter()
        .map(|user| UserResponse {
            id: user.id.to_string(),
            name: user.name,
            lastname: user.lastname,
            email: user.email,
            document_type: user.document_type,
            document_number: user.document_number,
            created_at: user.created_at,
        })
        .collect();
    Ok(Json(items))
}
