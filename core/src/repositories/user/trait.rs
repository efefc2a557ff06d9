//! User record repository trait defining the interface for record persistence.
//!
//! The trait is async-first so a durable implementation can replace the
//! in-memory store without touching the adapters.

use async_trait::async_trait;

use crate::domain::entities::UserRecord;
use crate::errors::DomainError;

/// Repository trait for `UserRecord` persistence operations
///
/// # Example
/// ```no_run
/// # use ir_core::repositories::UserRepository;
/// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
/// let mut record = repo.get_or_create("user-1").await?;
/// record.set_check_id("chk_123");
/// repo.save(record).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return the record for `id`, inserting an empty one if absent
    ///
    /// Lookup and insertion happen as a single atomic step.
    async fn get_or_create(&self, id: &str) -> Result<UserRecord, DomainError>;

    /// Persist a record, replacing any previous version
    ///
    /// # Returns
    /// * `Err(DomainError::InvalidRecord)` - The record id is empty
    async fn save(&self, record: UserRecord) -> Result<(), DomainError>;

    /// Find a record without creating it
    async fn find(&self, id: &str) -> Result<Option<UserRecord>, DomainError>;

    /// Number of records held
    async fn count(&self) -> Result<usize, DomainError>;
}
