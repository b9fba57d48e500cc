//! Admission form state machine
//!
//! Plain data plus transition functions, independent of any rendering
//! surface. A submit moves `Idle | Succeeded | Failed` to `Submitting`, and
//! each accepted submit leaves `Submitting` exactly once through
//! [`AdmissionForm::finish`].

use super::fields::{AdmissionFields, FieldName};
use super::submission::{SubmissionStatus, FALLBACK_ERROR_MESSAGE, NETWORK_ERROR_MESSAGE};
use crate::api::{AdmissionApi, AdmissionPayload, AdmissionReceipt, SubmitError};
use std::fmt;
use thiserror::Error;

/// Result of one request to the backend
pub type SubmitOutcome = Result<AdmissionReceipt, SubmitError>;

/// Called after every change to the fields or the status
pub type ChangeListener = Box<dyn FnMut(&AdmissionFields, &SubmissionStatus) + Send>;

/// Why a submit intent was not dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("{} is required", .0.label())]
    MissingField(FieldName),
}

/// The admission form: its fields and where it is in the submit cycle
#[derive(Default)]
pub struct AdmissionForm {
    fields: AdmissionFields,
    status: SubmissionStatus,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for AdmissionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdmissionForm")
            .field("fields", &self.fields)
            .field("status", &self.status)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl AdmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &AdmissionFields {
        &self.fields
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether a submit intent would currently be dispatched
    pub fn can_submit(&self) -> bool {
        !self.status.is_submitting()
    }

    /// Register the change listener, replacing any previous one
    pub fn set_listener(&mut self, listener: ChangeListener) {
        self.listener = Some(listener);
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.fields, &self.status);
        }
    }

    /// Replace a field's value. Never touches the status.
    pub fn update_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.fields.set(name, value.into());
        self.notify();
    }

    /// Append a character to a field
    pub fn push_char(&mut self, name: FieldName, c: char) {
        self.fields.push_char(name, c);
        self.notify();
    }

    /// Remove the last character from a field
    pub fn pop_char(&mut self, name: FieldName) {
        self.fields.pop_char(name);
        self.notify();
    }

    /// Start a submission.
    ///
    /// On success the form is `Submitting` and the caller must send the
    /// returned payload exactly once and hand the outcome to [`Self::finish`].
    pub fn begin_submit(&mut self) -> Result<AdmissionPayload, SubmitRejected> {
        if self.status.is_submitting() {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if let Some(missing) = self.fields.first_missing() {
            return Err(SubmitRejected::MissingField(missing));
        }

        self.status = SubmissionStatus::Submitting;
        self.notify();
        Ok(self.fields.to_payload())
    }

    /// Apply the outcome of the in-flight request.
    ///
    /// Returns false, changing nothing, when no submission is in flight.
    pub fn finish(&mut self, outcome: SubmitOutcome) -> bool {
        if !self.status.is_submitting() {
            tracing::warn!("Ignoring submission outcome with no request in flight");
            return false;
        }

        self.status = match outcome {
            Ok(_) => {
                self.fields.clear();
                SubmissionStatus::Succeeded
            }
            Err(SubmitError::Application { detail, .. }) => SubmissionStatus::Failed(
                detail.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            ),
            Err(SubmitError::Transport(_)) => {
                SubmissionStatus::Failed(NETWORK_ERROR_MESSAGE.to_string())
            }
        };
        self.notify();
        true
    }

    /// Run a whole submission against `api`: begin, one request, finish.
    #[allow(dead_code)]
    pub async fn submit<A>(&mut self, api: &A) -> Result<(), SubmitRejected>
    where
        A: AdmissionApi + ?Sized,
    {
        let payload = self.begin_submit()?;
        let outcome = api.create_admission(payload).await;
        self.finish(outcome);
        Ok(())
    }
}
