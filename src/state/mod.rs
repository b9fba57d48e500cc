//! Application state module

mod fields;
mod form;
mod submission;

pub use fields::{AdmissionFields, FieldName};
pub use form::{AdmissionForm, SubmitOutcome, SubmitRejected};
pub use submission::{BannerKind, SubmissionStatus};
