use anyhow::Context as _;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::password;
use crate::domain::repository::RegistrationRepository;
use crate::domain::types::{
    Registrant, RegistrationReceipt, RegistrationRecord, validate_registrant,
};
use crate::error::RegistrationError;
use crate::infra::events::{UserChange, UserChangeFeed};

// ── RegisterUser ─────────────────────────────────────────────────────────────

/// The registration workflow: validate, run the duplicate pre-check, then
/// persist country, contact, document type and user as one unit. The first
/// failure aborts the submission; nothing is retried. A successful commit
/// publishes a change event for the listing read path.
pub struct RegisterUserUseCase<R: RegistrationRepository> {
    pub repo: R,
    pub changes: UserChangeFeed,
}

impl<R: RegistrationRepository> RegisterUserUseCase<R> {
    pub async fn execute(
        &self,
        registrant: Registrant,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        validate_registrant(&registrant)?;

        let conflicts = self
            .repo
            .find_conflicts(&registrant.email, &registrant.document_number)
            .await?;
        if !conflicts.is_empty() {
            return Err(RegistrationError::DuplicateRegistration);
        }

        let password_hash = password::hash(&registrant.password).context("hash password")?;
        let now = Utc::now();
        let record = RegistrationRecord {
            user_id: Uuid::now_v7(),
            country_id: Uuid::now_v7(),
            contact_id: Uuid::now_v7(),
            document_type_id: Uuid::now_v7(),
            name: registrant.name,
            lastname: registrant.lastname,
            email: registrant.email,
            password_hash,
            document_type: registrant.document_type,
            document_number: registrant.document_number,
            address: registrant.address,
            country_code: registrant.country_code,
            country_name: registrant.country_name,
            phone: registrant.phone,
            cell_phone: registrant.cell_phone,
            emergency_name: registrant.emergency_name,
            emergency_phone: registrant.emergency_phone,
            created_at: now,
        };

        self.repo.create(&record).await?;

        self.changes.publish(UserChange {
            user_id: record.user_id,
        });

        Ok(RegistrationReceipt {
            user_id: record.user_id,
            country_id: record.country_id,
            contact_id: record.contact_id,
            document_type_id: record.document_type_id,
            created_at: now,
        })
    }
}
