//! User record tracking a user's progress through the ID check.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{IdCheckData, VerificationResult};
use crate::errors::DomainError;

/// User record keyed by a caller-supplied identifier
///
/// A record moves one way through `no check id -> has check id -> has result`.
/// The verification result is never set while the check id is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque caller-supplied identifier
    pub id: String,

    /// Permanent vendor check identifier obtained by token exchange
    pub check_id: Option<String>,

    /// Vendor verification result, cached after the first successful poll
    pub verification_result: Option<VerificationResult>,

    /// Timestamp when the record was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates an empty record for `id`
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            check_id: None,
            verification_result: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Stores the vendor check id, replacing any previous one
    pub fn set_check_id(&mut self, check_id: impl Into<String>) {
        self.check_id = Some(check_id.into());
        self.updated_at = Utc::now();
    }

    /// Caches a verification result
    ///
    /// Fails with `MissingCheckId` when no check id is on file.
    pub fn cache_result(&mut self, result: VerificationResult) -> Result<(), DomainError> {
        if self.check_id.is_none() {
            return Err(DomainError::MissingCheckId);
        }
        self.verification_result = Some(result);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn has_check_id(&self) -> bool {
        self.check_id.is_some()
    }

    pub fn has_result(&self) -> bool {
        self.verification_result.is_some()
    }

    /// Projection of the cached result, if any
    pub fn cached_id_check_data(&self) -> Option<IdCheckData> {
        self.verification_result.as_ref().map(VerificationResult::id_check_data)
    }
}
