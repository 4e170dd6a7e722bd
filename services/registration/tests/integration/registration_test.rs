use std::sync::Arc;

use padron_registration::domain::password;
use padron_registration::error::RegistrationError;

use crate::helpers::{FailStep, MemoryStore, register_usecase, test_registrant};

#[tokio::test]
async fn should_create_one_row_in_each_table() {
    let store = MemoryStore::new();
    let usecase = register_usecase(store.clone());
    let mut rx = usecase.changes.subscribe();

    let receipt = usecase
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();

    let tables = store.tables();
    assert_eq!(tables.countries, vec![receipt.country_id]);
    assert_eq!(tables.contacts, vec![receipt.contact_id]);
    assert_eq!(tables.document_types, vec![receipt.document_type_id]);
    assert_eq!(tables.users.len(), 1);

    let user = &tables.users[0];
    assert_eq!(user.id, receipt.user_id);
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.document_number, "123");
    assert_eq!(user.document_type, "DNI");
    assert_eq!(user.contact_id, receipt.contact_id);
    assert_eq!(user.document_type_id, receipt.document_type_id);

    // Stored credential is a salted hash, never the submitted password.
    assert!(user.password_hash.starts_with("$argon2"));
    assert!(password::verify("secret1", &user.password_hash).unwrap());

    // The commit notified the change feed.
    assert_eq!(rx.try_recv().unwrap().user_id, receipt.user_id);
}

#[tokio::test]
async fn should_reject_resubmission_of_the_same_payload() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();

    let result = register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateRegistration)
    ));
    let tables = store.tables();
    assert_eq!(tables.countries.len(), 1);
    assert_eq!(tables.contacts.len(), 1);
    assert_eq!(tables.document_types.len(), 1);
    assert_eq!(tables.users.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_email_even_with_new_document() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();

    let result = register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "999"))
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateRegistration)
    ));
    assert_eq!(store.tables().users.len(), 1);
}

#[tokio::test]
async fn should_reject_duplicate_document_even_with_new_email() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();

    let result = register_usecase(store.clone())
        .execute(test_registrant("b@x.com", "123"))
        .await;

    assert!(matches!(
        result,
        Err(RegistrationError::DuplicateRegistration)
    ));
    assert_eq!(store.tables().users.len(), 1);
}

#[tokio::test]
async fn should_abort_without_writes_when_the_check_fails() {
    let store = MemoryStore::failing_at(FailStep::Check);
    let result = register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await;

    assert!(matches!(result, Err(RegistrationError::CheckFailed(_))));
    let tables = store.tables();
    assert!(tables.countries.is_empty());
    assert!(tables.users.is_empty());
}

#[tokio::test]
async fn should_leave_no_rows_behind_when_an_insert_step_fails() {
    let cases = [
        (FailStep::Country, "COUNTRY_INSERT_FAILED"),
        (FailStep::Contact, "CONTACT_INSERT_FAILED"),
        (FailStep::Document, "DOCUMENT_INSERT_FAILED"),
        (FailStep::User, "USER_INSERT_FAILED"),
    ];
    for (step, kind) in cases {
        let store = MemoryStore::failing_at(step);
        let err = register_usecase(store.clone())
            .execute(test_registrant("a@x.com", "123"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), kind);
        let tables = store.tables();
        assert!(tables.countries.is_empty(), "{kind} left a country row");
        assert!(tables.contacts.is_empty(), "{kind} left a contact row");
        assert!(
            tables.document_types.is_empty(),
            "{kind} left a document type row"
        );
        assert!(tables.users.is_empty(), "{kind} left a user row");
    }
}

/// Two in-flight submissions with the same email can both pass the duplicate
/// check before either writes; the check alone cannot close this race. In the
/// real store the unique index on `users.email` makes the second transaction
/// fail instead.
#[tokio::test]
async fn should_let_concurrent_submissions_race_past_the_check() {
    let barrier = Arc::new(tokio::sync::Barrier::new(2));
    let store = MemoryStore::with_check_barrier(barrier);

    let first = register_usecase(store.clone());
    let second = register_usecase(store.clone());
    let (a, b) = tokio::join!(
        first.execute(test_registrant("a@x.com", "123")),
        second.execute(test_registrant("a@x.com", "999")),
    );

    a.unwrap();
    b.unwrap();
    let tables = store.tables();
    assert_eq!(tables.users.len(), 2);
    assert!(tables.users.iter().all(|u| u.email == "a@x.com"));
}
