//! Result shape of the notification actions, shared by the endpoints and the form models.

use crate::validation::FieldErrors;
use amia_derive::api_model;

/// Generic message shown for provider failures.
pub const DELIVERY_FAILED: &str = "Failed to send the email";
/// Generic message shown for anything else that went wrong on the server.
pub const UNEXPECTED_FAILURE: &str = "An unexpected error occurred";
/// Message shown when the server rejected the submitted fields.
pub const INVALID_SUBMISSION: &str = "Some fields are missing or invalid";

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Outcome of a form submission.
pub struct ActionResponse {
    /// Whether the notification email was accepted by the provider
    pub success: bool,
    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Per-field validation messages
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub fields: FieldErrors,
    /// Receipt for an accepted submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SubmissionReceipt>,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
/// Identifiers of an accepted submission. `id` is the provider's message id.
pub struct SubmissionReceipt {
    /// Server-side reference used in logs
    pub reference: String,
    /// Provider message id
    pub id: String,
}

impl ActionResponse {
    #[must_use]
    pub fn delivered(receipt: SubmissionReceipt) -> Self {
        Self { success: true, error: None, fields: FieldErrors::new(), data: Some(receipt) }
    }

    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()), fields: FieldErrors::new(), data: None }
    }

    #[must_use]
    pub fn rejected(fields: FieldErrors) -> Self {
        Self { success: false, error: Some(INVALID_SUBMISSION.to_owned()), fields, data: None }
    }
}
