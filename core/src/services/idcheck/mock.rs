//! Scripted vendor for tests and local development

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::traits::{IdCheckVendor, VendorError, VendorReply};

/// What the mock vendor answers with
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// A 2xx response with this JSON body
    Reply(Value),
    /// A non-2xx response
    HttpStatus(u16),
    /// A transport failure
    Unavailable,
    /// A 2xx response whose body is not JSON
    InvalidBody,
}

impl MockOutcome {
    fn into_result(self) -> Result<VendorReply, VendorError> {
        match self {
            MockOutcome::Reply(body) => Ok(VendorReply::new(body)),
            MockOutcome::HttpStatus(status) => Err(VendorError::Http { status }),
            MockOutcome::Unavailable => Err(VendorError::Unavailable("connection refused".to_string())),
            MockOutcome::InvalidBody => Err(VendorError::InvalidBody("expected value at line 1".to_string())),
        }
    }
}

/// Mock vendor answering every call with a configurable outcome
///
/// Defaults: exchange returns `{"check_id": "chk_mock_0001"}`, result polling
/// returns `{"error": "NOT_VERIFIED"}`.
pub struct MockIdCheckVendor {
    exchange_outcome: Mutex<MockOutcome>,
    result_outcome: Mutex<MockOutcome>,
    exchange_calls: AtomicUsize,
    result_calls: AtomicUsize,
    exchange_tokens: Mutex<Vec<String>>,
    check_ids: Mutex<Vec<String>>,
}

impl MockIdCheckVendor {
    pub fn new() -> Self {
        Self {
            exchange_outcome: Mutex::new(MockOutcome::Reply(json!({ "check_id": "chk_mock_0001" }))),
            result_outcome: Mutex::new(MockOutcome::Reply(json!({
                "error": "NOT_VERIFIED",
                "error_message": "user has not completed the ID check"
            }))),
            exchange_calls: AtomicUsize::new(0),
            result_calls: AtomicUsize::new(0),
            exchange_tokens: Mutex::new(Vec::new()),
            check_ids: Mutex::new(Vec::new()),
        }
    }

    pub fn with_exchange_outcome(self, outcome: MockOutcome) -> Self {
        self.set_exchange_outcome(outcome);
        self
    }

    pub fn with_result_outcome(self, outcome: MockOutcome) -> Self {
        self.set_result_outcome(outcome);
        self
    }

    pub fn set_exchange_outcome(&self, outcome: MockOutcome) {
        *self.exchange_outcome.lock().unwrap() = outcome;
    }

    pub fn set_result_outcome(&self, outcome: MockOutcome) {
        *self.result_outcome.lock().unwrap() = outcome;
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn result_calls(&self) -> usize {
        self.result_calls.load(Ordering::SeqCst)
    }

    /// Tokens passed to `exchange_token`, in call order
    pub fn exchange_tokens(&self) -> Vec<String> {
        self.exchange_tokens.lock().unwrap().clone()
    }

    /// Check ids passed to `fetch_result`, in call order
    pub fn check_ids(&self) -> Vec<String> {
        self.check_ids.lock().unwrap().clone()
    }
}

impl Default for MockIdCheckVendor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdCheckVendor for MockIdCheckVendor {
    async fn exchange_token(&self, exchange_token: &str) -> Result<VendorReply, VendorError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        self.exchange_tokens.lock().unwrap().push(exchange_token.to_string());
        let outcome = self.exchange_outcome.lock().unwrap().clone();
        outcome.into_result()
    }

    async fn fetch_result(&self, check_id: &str) -> Result<VendorReply, VendorError> {
        self.result_calls.fetch_add(1, Ordering::SeqCst);
        self.check_ids.lock().unwrap().push(check_id.to_string());
        let outcome = self.result_outcome.lock().unwrap().clone();
        outcome.into_result()
    }
}
