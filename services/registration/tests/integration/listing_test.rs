use padron_core::pagination::PageRequest;
use padron_registration::domain::types::UserSortBy;

use crate::helpers::{MemoryStore, list_usecase, register_usecase, test_registrant};

#[tokio::test]
async fn should_list_newest_registrations_first() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();
    register_usecase(store.clone())
        .execute(test_registrant("b@x.com", "456"))
        .await
        .unwrap();

    let users = list_usecase(store)
        .execute(UserSortBy::default(), PageRequest::default())
        .await
        .unwrap();

    let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["b@x.com", "a@x.com"]);
}

#[tokio::test]
async fn should_list_oldest_first_when_asked() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();
    register_usecase(store.clone())
        .execute(test_registrant("b@x.com", "456"))
        .await
        .unwrap();

    let sort_by = UserSortBy::from_kebab_case("created-at-asc").unwrap();
    let users = list_usecase(store)
        .execute(sort_by, PageRequest::default())
        .await
        .unwrap();

    let emails: Vec<_> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["a@x.com", "b@x.com"]);
}

#[tokio::test]
async fn should_paginate_the_listing() {
    let store = MemoryStore::new();
    register_usecase(store.clone())
        .execute(test_registrant("a@x.com", "123"))
        .await
        .unwrap();
    register_usecase(store.clone())
        .execute(test_registrant("b@x.com", "456"))
        .await
        .unwrap();

    let page = PageRequest {
        per_page: 1,
        page: 2,
    };
    let users = list_usecase(store)
        .execute(UserSortBy::default(), page)
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "a@x.com");
}

#[tokio::test]
async fn should_return_empty_listing_for_empty_store() {
    let users = list_usecase(MemoryStore::new())
        .execute(UserSortBy::default(), PageRequest::default())
        .await
        .unwrap();
    assert!(users.is_empty());
}
