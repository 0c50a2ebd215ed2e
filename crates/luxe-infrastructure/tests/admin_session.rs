//! Session guard scenarios against the in-memory admin store.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use luxe_core::domain::AdminKey;
use luxe_core::error::{AuthFailure, DomainError};
use luxe_core::repositories::AdminStore;
use luxe_core::services::{AdminAuthService, AdminPolicy};
use luxe_infrastructure::{memory_stores, seeded_memory_stores, MemoryAdminStore};
use luxe_security::PasswordService;

const PASSWORD: &str = "correct-horse";

fn setup() -> (Arc<MemoryAdminStore>, AdminAuthService) {
    let store = Arc::new(MemoryAdminStore::with_password_hash(PasswordService::hash(PASSWORD)));
    let service = AdminAuthService::new(store.clone(), AdminPolicy::default());
    (store, service)
}

fn failure(err: DomainError) -> AuthFailure {
    match err {
        DomainError::Unauthorized(f) => f,
        other => panic!("expected Unauthorized, got {:?}", other),
    }
}

#[tokio::test]
async fn test_second_login_supersedes_first() {
    let (_, auth) = setup();

    let first = auth.login(PASSWORD).await.unwrap();
    let second = auth.login(PASSWORD).await.unwrap();
    assert_ne!(first.token, second.token);

    let err = auth.authorize(&first.token).await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::InvalidSession);
    assert!(auth.authorize(&second.token).await.is_ok());
}

#[tokio::test]
async fn test_login_sets_expiry_a_day_out() {
    let (_, auth) = setup();
    let before = Utc::now();
    let session = auth.login(PASSWORD).await.unwrap();

    let delta = session.expires_at - before;
    assert!(delta >= Duration::hours(24) - Duration::seconds(1));
    assert!(delta <= Duration::hours(24) + Duration::seconds(5));
}

#[tokio::test]
async fn test_only_stored_token_authorizes() {
    let (_, auth) = setup();
    let session = auth.login(PASSWORD).await.unwrap();

    for candidate in ["", "x", &session.token[..63], format!("{}0", session.token).as_str()] {
        let err = auth.authorize(candidate).await.unwrap_err();
        assert_eq!(failure(err), AuthFailure::InvalidSession);
    }
}

#[tokio::test]
async fn test_past_expiry_rejected_with_matching_token() {
    let (store, auth) = setup();
    let session = auth.login(PASSWORD).await.unwrap();

    let past = (Utc::now() - Duration::minutes(1)).to_rfc3339();
    store
        .set(AdminKey::Session, json!({ "token": session.token, "expiresAt": past }))
        .await
        .unwrap();

    let err = auth.authorize(&session.token).await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::SessionExpired);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let (store, auth) = setup();
    let session = auth.login(PASSWORD).await.unwrap();
    let current = auth.authorize(&session.token).await.unwrap();

    auth.logout(&current).await.unwrap();

    assert!(store.get(AdminKey::Session).await.unwrap().is_none());
    let err = auth.authorize(&session.token).await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::NoActiveSession);
}

#[tokio::test]
async fn test_change_password_length_boundary() {
    let (_, auth) = setup();
    let session = auth.login(PASSWORD).await.unwrap();

    let err = auth
        .change_password(&session, PASSWORD, "123456789")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(auth.authorize(&session.token).await.is_ok());

    auth.change_password(&session, PASSWORD, "1234567890").await.unwrap();
    assert!(auth.authorize(&session.token).await.is_err());

    let err = auth.login(PASSWORD).await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::InvalidPassword);
    assert!(auth.login("1234567890").await.is_ok());
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let (_, auth) = setup();
    let session = auth.login(PASSWORD).await.unwrap();

    let err = auth.login("not-the-password").await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::InvalidPassword);
    assert!(auth.authorize(&session.token).await.is_ok());
}

#[tokio::test]
async fn test_login_without_credential() {
    let auth = AdminAuthService::new(Arc::new(MemoryAdminStore::default()), AdminPolicy::default());
    let err = auth.login(PASSWORD).await.unwrap_err();
    assert!(matches!(err, DomainError::AdminPasswordNotInitialized));
}

#[tokio::test]
async fn test_seeded_memory_stores_accept_login() {
    let stores = seeded_memory_stores(PasswordService::hash(PASSWORD));
    let auth = AdminAuthService::new(stores.admin.clone(), AdminPolicy::default());
    let session = auth.login(PASSWORD).await.unwrap();
    assert!(auth.authorize(&session.token).await.is_ok());

    let unseeded = AdminAuthService::new(memory_stores().admin, AdminPolicy::default());
    let err = unseeded.login(PASSWORD).await.unwrap_err();
    assert!(matches!(err, DomainError::AdminPasswordNotInitialized));
}

#[tokio::test]
async fn test_corrupt_expiry_denies_access() {
    let (store, auth) = setup();
    store
        .set(AdminKey::Session, json!({ "token": "t1", "expiresAt": 12345 }))
        .await
        .unwrap();

    let err = auth.authorize("t1").await.unwrap_err();
    assert_eq!(failure(err), AuthFailure::InvalidSessionExpiry);
}
