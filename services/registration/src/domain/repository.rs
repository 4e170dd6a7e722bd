#![allow(async_fn_in_trait)]

use uuid::Uuid;

use padron_core::pagination::PageRequest;

use crate::domain::types::{RegistrationRecord, UserSortBy, UserSummary};
use crate::error::RegistrationError;

/// Write port for the registration workflow.
pub trait RegistrationRepository: Send + Sync {
    /// Duplicate pre-check: ids of users whose email or document number
    /// matches the submission. A store failure here maps to `CheckFailed`,
    /// never to an empty result.
    async fn find_conflicts(
        &self,
        email: &str,
        document_number: &str,
    ) -> Result<Vec<Uuid>, RegistrationError>;

    /// Persist the four rows of one registration as a single atomic unit,
    /// in dependency order: country, contact, document type, user. The
    /// error names the first step that failed; nothing from the submission
    /// survives a failure.
    async fn create(&self, record: &RegistrationRecord) -> Result<(), RegistrationError>;
}

/// Read port for the registered-users listing.
pub trait UserRepository: Send + Sync {
    async fn list(
        &self,
        sort_by: UserSortBy,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, RegistrationError>;
}
