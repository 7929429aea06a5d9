//! Page state of the question form: one screen, all fields validated together.

use crate::model::{QuestionField, QuestionRequest};
use amia_kernel::action::ActionResponse;
use amia_kernel::validation::FieldErrors;

/// Alert shown when the notification could not be sent.
pub const SUBMIT_FAILED: &str = "There was a problem sending your question. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, Default)]
pub struct QuestionForm {
    data: QuestionRequest,
    errors: FieldErrors,
    status: FormStatus,
    alert: Option<String>,
}

impl QuestionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn data(&self) -> &QuestionRequest {
        &self.data
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn set(&mut self, field: QuestionField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Validates every field. Returns the payload to send when all of them pass.
    ///
    /// Returns `None`, without touching the errors, while a submission is in flight
    /// or already done.
    pub fn submit(&mut self) -> Option<QuestionRequest> {
        if self.status != FormStatus::Editing {
            return None;
        }

        self.errors = self.data.field_errors();
        if !self.errors.is_empty() {
            return None;
        }

        self.status = FormStatus::Submitting;
        self.alert = None;
        Some(self.data.clone())
    }

    /// Applies the server's answer to a submission.
    pub fn finish(&mut self, response: &ActionResponse) {
        if self.status != FormStatus::Submitting {
            return;
        }
        if response.success {
            self.status = FormStatus::Submitted;
            self.alert = None;
            return;
        }

        self.status = FormStatus::Editing;
        self.alert = Some(SUBMIT_FAILED.to_owned());
        if !response.fields.is_empty() {
            self.errors = response.fields.clone();
        }
    }

    /// The send call itself failed.
    pub fn abort(&mut self) {
        if self.status == FormStatus::Submitting {
            self.status = FormStatus::Editing;
            self.alert = Some(SUBMIT_FAILED.to_owned());
        }
    }
}
