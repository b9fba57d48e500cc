//! Admissions backend client

mod client;
mod error;
mod traits;
mod types;

pub use client::AdmissionClient;
pub use error::SubmitError;
pub use traits::AdmissionApi;
pub use types::{AdmissionPayload, AdmissionReceipt};

#[cfg(test)]
pub use traits::MockAdmissionApi;
