use padron_core::pagination::PageRequest;

use crate::domain::repository::UserRepository;
use crate::domain::types::{UserSortBy, UserSummary};
use crate::error::RegistrationError;

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(
        &self,
        sort_by: UserSortBy,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, RegistrationError> {
        self.repo.list(sort_by, page).await
    }
}
