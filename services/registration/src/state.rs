use sea_orm::DatabaseConnection;

use crate::infra::db::{DbRegistrationRepository, DbUserRepository};
use crate::infra::events::UserChangeFeed;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub changes: UserChangeFeed,
}

impl AppState {
    pub fn registration_repo(&self) -> DbRegistrationRepository {
        DbRegistrationRepository {
            db: self.db.clone(),
        }
    }

    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }
}
