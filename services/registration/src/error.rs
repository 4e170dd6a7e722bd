use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Registration service error variants.
///
/// The insert-step variants name the first step of the write sequence that
/// failed; the whole submission is rolled back, so none of them leave partial
/// rows behind.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("invalid {0}")]
    InvalidField(&'static str),
    #[error("a user with this email or document number already exists")]
    DuplicateRegistration,
    #[error("duplicate check failed")]
    CheckFailed(#[source] anyhow::Error),
    #[error("country insert failed")]
    CountryInsertFailed(#[source] anyhow::Error),
    #[error("contact insert failed")]
    ContactInsertFailed(#[source] anyhow::Error),
    #[error("document type insert failed")]
    DocumentInsertFailed(#[source] anyhow::Error),
    #[error("user insert failed")]
    UserInsertFailed(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl RegistrationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidField(_) => "INVALID_FIELD",
            Self::DuplicateRegistration => "DUPLICATE_REGISTRATION",
            Self::CheckFailed(_) => "CHECK_FAILED",
            Self::CountryInsertFailed(_) => "COUNTRY_INSERT_FAILED",
            Self::ContactInsertFailed(_) => "CONTACT_INSERT_FAILED",
            Self::DocumentInsertFailed(_) => "DOCUMENT_INSERT_FAILED",
            Self::UserInsertFailed(_) => "USER_INSERT_FAILED",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidField(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateRegistration => StatusCode::CONFLICT,
            Self::CheckFailed(_)
            | Self::CountryInsertFailed(_)
            | Self::ContactInsertFailed(_)
            | Self::DocumentInsertFailed(_)
            | Self::UserInsertFailed(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status
        // for all requests. 4xx are expected client errors.
        match &self {
            Self::CheckFailed(e)
            | Self::CountryInsertFailed(e)
            | Self::ContactInsertFailed(e)
            | Self::DocumentInsertFailed(e)
            | Self::UserInsertFailed(e)
            | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "store operation failed");
            }
            Self::InvalidField(_) | Self::DuplicateRegistration => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
