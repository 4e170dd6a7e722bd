use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use padron_core::pagination::{PageRequest, Sort};
use padron_registration_schema::{contacts, countries, document_types, users};

use crate::domain::repository::{RegistrationRepository, UserRepository};
use crate::domain::types::{RegistrationRecord, UserSortBy, UserSummary};
use crate::error::RegistrationError;

// ── Registration repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationRepository {
    pub db: DatabaseConnection,
}

impl RegistrationRepository for DbRegistrationRepository {
    async fn find_conflicts(
        &self,
        email: &str,
        document_number: &str,
    ) -> Result<Vec<Uuid>, RegistrationError> {
        let models = users::Entity::find()
            .filter(
                Condition::any()
                    .add(users::Column::Email.eq(email))
                    .add(users::Column::DocumentNumber.eq(document_number)),
            )
            .all(&self.db)
            .await
            .map_err(|e| {
                RegistrationError::CheckFailed(anyhow::Error::new(e).context("duplicate check"))
            })?;
        Ok(models.into_iter().map(|m| m.id).collect())
    }

    async fn create(&self, record: &RegistrationRecord) -> Result<(), RegistrationError> {
        let result = self
            .db
            .transaction::<_, (), RegistrationError>(|txn| {
                let record = record.clone();
                Box::pin(async move {
                    countries::ActiveModel {
                        id: Set(record.country_id),
                        country_code: Set(record.country_code.clone()),
                        country_name: Set(record.country_name.clone()),
                    }
                    .insert(txn)
                    .await
                    .map_err(|e| {
                        RegistrationError::CountryInsertFailed(
                            anyhow::Error::new(e).context("insert country"),
                        )
                    })?;

                    contacts::ActiveModel {
                        id: Set(record.contact_id),
                        address: Set(record.address.clone()),
                        country_id: Set(record.country_id),
                        phone: Set(record.phone.clone()),
                        cell_phone: Set(record.cell_phone.clone()),
                        emergency_name: Set(record.emergency_name.clone()),
                        emergency_phone: Set(record.emergency_phone.clone()),
                    }
                    .insert(txn)
                    .await
                    .map_err(|e| {
                        RegistrationError::ContactInsertFailed(
                            anyhow::Error::new(e).context("insert contact"),
                        )
                    })?;

                    document_types::ActiveModel {
                        id: Set(record.document_type_id),
                        name: Set(record.document_type.clone()),
                        document: Set(record.document_number.clone()),
                    }
                    .insert(txn)
                    .await
                    .map_err(|e| {
                        RegistrationError::DocumentInsertFailed(
                            anyhow::Error::new(e).context("insert document type"),
                        )
                    })?;

                    users::ActiveModel {
                        id: Set(record.user_id),
                        name: Set(record.name.clone()),
                        lastname: Set(record.lastname.clone()),
                        email: Set(record.email.clone()),
                        password: Set(record.password_hash.clone()),
                        document_number: Set(record.document_number.clone()),
                        document_type: Set(record.document_type.clone()),
                        document_type_id: Set(record.document_type_id),
                        contact_id: Set(record.contact_id),
                        created_at: Set(record.created_at),
                        updated_at: Set(record.created_at),
                    }
                    .insert(txn)
                    .await
                    .map_err(|e| {
                        RegistrationError::UserInsertFailed(
                            anyhow::Error::new(e).context("insert user"),
                        )
                    })?;

                    Ok(())
                })
            })
            .await;

        result.map_err(|e| match e {
            TransactionError::Transaction(e) => e,
            TransactionError::Connection(e) => {
                RegistrationError::Internal(anyhow::Error::new(e).context("registration transaction"))
            }
        })
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(
        &self,
        sort_by: UserSortBy,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, RegistrationError> {
        let page = page.clamped();
        let query = match sort_by {
            UserSortBy::CreatedAt(Sort::Desc) => {
                users::Entity::find().order_by_desc(users::Column::CreatedAt)
            }
            UserSortBy::CreatedAt(Sort::Asc) => {
                users::Entity::find().order_by_asc(users::Column::CreatedAt)
            }
        };
        let models = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_summary_from_model).collect())
    }
}

fn user_summary_from_model(model: users::Model) -> UserSummary {
    UserSummary {
        id: model.id,
        name: model.name,
        lastname: model.lastname,
        email: model.email,
        document_type: model.document_type,
        document_number: model.document_number,
        created_at: model.created_at,
    }
}
