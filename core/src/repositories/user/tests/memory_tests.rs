//! Unit tests for the in-memory user repository

use crate::domain::entities::UserRecord;
use crate::errors::DomainError;
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

#[tokio::test]
async fn test_get_or_create_returns_empty_record_for_new_id() {
    let repo = InMemoryUserRepository::new();

    let record = repo.get_or_create("never-seen").await.unwrap();

    assert_eq!(record.id, "never-seen");
    assert!(record.check_id.is_none());
    assert!(record.verification_result.is_none());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_get_or_create_returns_existing_record() {
    let repo = InMemoryUserRepository::new();

    let mut record = repo.get_or_create("user-1").await.unwrap();
    record.set_check_id("chk_1");
    repo.save(record).await.unwrap();

    let again = repo.get_or_create("user-1").await.unwrap();
    assert_eq!(again.check_id.as_deref(), Some("chk_1"));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_save_rejects_empty_id() {
    let repo = InMemoryUserRepository::new();

    let result = repo.save(UserRecord::new("")).await;

    assert!(matches!(result, Err(DomainError::InvalidRecord)));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_find_does_not_create() {
    let repo = InMemoryUserRepository::new();

    assert!(repo.find("ghost").await.unwrap().is_none());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_clones_share_storage() {
    let repo = InMemoryUserRepository::new();
    let handle = repo.clone();

    repo.get_or_create("shared").await.unwrap();

    assert!(handle.find("shared").await.unwrap().is_some());
}

#[tokio::test]
async fn test_separate_stores_are_isolated() {
    let first = InMemoryUserRepository::new();
    let second = InMemoryUserRepository::new();

    first.get_or_create("user-1").await.unwrap();

    assert!(second.find("user-1").await.unwrap().is_none());
}
