//! Step-by-step state of the demo request page.
//!
//! One field per step, in [`DemoField`] order. `next` validates only the field of the
//! current step; the last step hands the finished [`DemoRequest`] back to the caller,
//! which sends it and reports the outcome through [`DemoWizard::finish`].

use crate::model::{DemoField, DemoRequest};
use amia_kernel::action::ActionResponse;
use amia_kernel::validation::FieldErrors;

/// Index of the industry step.
pub const LAST_STEP: usize = DemoField::Industry.index();

/// Alert shown when the notification could not be sent.
pub const SUBMIT_FAILED: &str = "There was a problem sending your request. Please try again.";

/// Which way the last step transition went, for the slide animation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Result of pressing "next".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given step.
    Moved(usize),
    /// The current field failed its rule; the message is in [`DemoWizard::errors`].
    Blocked(DemoField),
    /// Every step passed. Send this payload, then call [`DemoWizard::finish`].
    Submit(DemoRequest),
    /// A submission is in flight or already done.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct DemoWizard {
    step: usize,
    data: DemoRequest,
    errors: FieldErrors,
    direction: Direction,
    status: SubmissionStatus,
    alert: Option<String>,
}

impl DemoWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn step(&self) -> usize {
        self.step
    }

    /// Field asked on the current step.
    #[must_use]
    pub const fn field(&self) -> DemoField {
        match DemoField::from_index(self.step) {
            Some(field) => field,
            None => DemoField::Industry,
        }
    }

    /// Fill ratio of the progress bar, from `0.0` to `1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.step as f32 / LAST_STEP as f32
    }

    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step == LAST_STEP
    }

    #[must_use]
    pub const fn data(&self) -> &DemoRequest {
        &self.data
    }

    #[must_use]
    pub const fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Pending alert after a failed send.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Text input on any step.
    pub fn set(&mut self, field: DemoField, value: impl Into<String>) {
        self.data.set(field, value);
    }

    /// Option card click on a select step.
    pub fn select(&mut self, field: DemoField, value: &str) {
        self.data.set(field, value);
    }

    pub fn next(&mut self) -> Advance {
        if self.status != SubmissionStatus::Editing {
            return Advance::Ignored;
        }

        let field = self.field();
        self.errors.clear();
        if !self.data.check_field(field, &mut self.errors) {
            return Advance::Blocked(field);
        }

        self.direction = Direction::Forward;
        if self.step < LAST_STEP {
            self.step += 1;
            Advance::Moved(self.step)
        } else {
            self.status = SubmissionStatus::Submitting;
            self.alert = None;
            Advance::Submit(self.data.clone())
        }
    }

    /// Goes one step back. Returns `false` on the first step or while submitting.
    pub fn back(&mut self) -> bool {
        if self.step == 0 || self.status != SubmissionStatus::Editing {
            return false;
        }
        self.direction = Direction::Backward;
        self.step -= 1;
        true
    }

    /// Applies the server's answer to a [`Advance::Submit`].
    ///
    /// Success shows the confirmation. Failure keeps the form and its data, raises the
    /// alert, and, if the server rejected specific fields, jumps to the first of them.
    /// Ignored unless a submission is in flight.
    pub fn finish(&mut self, response: &ActionResponse) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        if response.success {
            self.status = SubmissionStatus::Submitted;
            self.alert = None;
            return;
        }

        self.status = SubmissionStatus::Editing;
        self.alert = Some(SUBMIT_FAILED.to_owned());
        if !response.fields.is_empty() {
            self.errors = response.fields.clone();
            if let Some(first) = self.errors.fields().filter_map(DemoField::from_key).min() {
                self.direction = Direction::Backward;
                self.step = first.index();
            }
        }
    }

    /// The send call itself failed (network error, unreadable response).
    pub fn abort(&mut self) {
        if self.status == SubmissionStatus::Submitting {
            self.status = SubmissionStatus::Editing;
            self.alert = Some(SUBMIT_FAILED.to_owned());
        }
    }
}
