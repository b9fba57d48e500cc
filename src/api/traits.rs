//! Trait abstraction for the admissions backend to enable mocking in tests

use super::error::SubmitError;
use super::types::{AdmissionPayload, AdmissionReceipt};
use async_trait::async_trait;

/// Operations the form needs from the backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AdmissionApi: Send + Sync {
    /// Check whether the backend answers on its root endpoint
    async fn check_connection(&self) -> bool;

    /// Create an admission record. Issues exactly one request.
    async fn create_admission(
        &self,
        payload: AdmissionPayload,
    ) -> Result<AdmissionReceipt, SubmitError>;
}
