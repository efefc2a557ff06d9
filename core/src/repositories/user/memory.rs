//! In-memory implementation of UserRepository
//!
//! Records live for the lifetime of the process; nothing is evicted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::UserRecord;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Process-lifetime user record store
///
/// Each operation is serialized by the lock, but sequences of operations are
/// not: two polls for the same user may both miss the cache and both call the
/// vendor.
#[derive(Clone)]
pub struct InMemoryUserRepository {
    records: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_or_create(&self, id: &str) -> Result<UserRecord, DomainError> {
        let mut records = self.records.write().await;
        let record = records
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::debug!(event = "user_record_created", "Created empty user record");
                UserRecord::new(id)
            });
        Ok(record.clone())
    }

    async fn save(&self, record: UserRecord) -> Result<(), DomainError> {
        if record.id.is_empty() {
            return Err(DomainError::InvalidRecord);
        }

        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<UserRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let records = self.records.read().await;
        Ok(records.len())
    }
}
