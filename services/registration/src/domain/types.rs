use chrono::{DateTime, Utc};
use uuid::Uuid;

use padron_core::pagination::Sort;

use crate::error::RegistrationError;

/// A validated registration submission. `password` is still plaintext here;
/// it is hashed before anything is persisted.
#[derive(Debug, Clone)]
pub struct Registrant {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    pub document_type: String,
    pub document_number: String,
    pub address: Option<String>,
    pub country_code: String,
    pub country_name: String,
    pub phone: String,
    pub cell_phone: Option<String>,
    pub emergency_name: Option<String>,
    pub emergency_phone: Option<String>,
}

/// One registration ready to persist: the four row ids are generated up
/// front so the user row can reference its country, contact and document
/// siblings, and so the caller learns every id from the same submission.
#[derive(Debug, Clone)]
pub struct RegistrationRecord {
    pub user_id: Uuid,
    pub country_id: Uuid,
    pub contact_id: Uuid,
    pub document_type_id: Uuid,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub document_type: String,
    pub document_number: String,
    pub address: Option<String>,
    pub country_code: String,
    pub country_name: String,
    pub phone: String,
    pub cell_phone: Option<String>,
    pub emergency_name: Option<String>,
    pub emergency_phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Ids of the rows committed by one successful registration.
#[derive(Debug, Clone)]
pub struct RegistrationReceipt {
    pub user_id: Uuid,
    pub country_id: Uuid,
    pub contact_id: Uuid,
    pub document_type_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Listing row for the registered-users view.
#[derive(Debug, Clone)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub document_type: String,
    pub document_number: String,
    pub created_at: DateTime<Utc>,
}

/// Sort options for the user listing.
#[derive(Debug, Clone, Copy)]
pub enum UserSortBy {
    CreatedAt(Sort),
}

impl Default for UserSortBy {
    fn default() -> Self {
        Self::CreatedAt(Sort::Desc)
    }
}

impl UserSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "created-at-desc" => Some(Self::CreatedAt(Sort::Desc)),
            "created-at-asc" => Some(Self::CreatedAt(Sort::Asc)),
            _ => None,
        }
    }
}

/// Validate a submission against the form rules: names at least 2 chars,
/// well-formed email, password at least 6 chars, remaining required fields
/// non-blank. Errors name the offending form field.
pub fn validate_registrant(registrant: &Registrant) -> Result<(), RegistrationError> {
    if registrant.name.trim().chars().count() < 2 {
        return Err(RegistrationError::InvalidField("name"));
    }
    if registrant.lastname.trim().chars().count() < 2 {
        return Err(RegistrationError::InvalidField("lastName"));
    }
    if !valid_email(&registrant.email) {
        return Err(RegistrationError::InvalidField("email"));
    }
    if registrant.password.chars().count() < 6 {
        return Err(RegistrationError::InvalidField("password"));
    }
    if registrant.document_type.trim().is_empty() {
        return Err(RegistrationError::InvalidField("documentType"));
    }
    if registrant.document_number.trim().is_empty() {
        return Err(RegistrationError::InvalidField("documentNumber"));
    }
    if registrant.country_code.trim().is_empty() {
        return Err(RegistrationError::InvalidField("countryCode"));
    }
    if registrant.country_name.trim().is_empty() {
        return Err(RegistrationError::InvalidField("countryName"));
    }
    if registrant.phone.trim().is_empty() {
        return Err(RegistrationError::InvalidField("phone"));
    }
    Ok(())
}

fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
