//! Admission checks for project create and update payloads.

pub mod request;
pub mod rules;
pub mod validator;

pub use request::{CreateRequest, ProjectFields, RequestKind, UpdateRequest};
pub use validator::{validate_create_request, validate_update_request, RequestValidator};

use thiserror::Error;

/// A request field broke a contract. Never worth retrying: the input is at fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}
