use amia_derive::api_model;
use amia_kernel::validation::{FieldErrors, ValidationError};

pub const NAME_REQUIRED: &str = "Please enter your name";
pub const EMAIL_REQUIRED: &str = "Please enter your email";
pub const EMAIL_INVALID: &str = "Please enter a valid email";
pub const QUESTION_REQUIRED: &str = "Please enter your question";

#[api_model]
#[derive(Clone, Default, PartialEq, Eq)]
/// A visitor's question from the FAQ page.
pub struct QuestionRequest {
    /// Full name
    pub name: String,
    /// Contact address, used as the reply-to of the notification
    pub email: String,
    /// Free-form question text
    pub question: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionField {
    Name,
    Email,
    Question,
}

impl QuestionField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Question];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Question => "question",
        }
    }
}

impl QuestionRequest {
    #[must_use]
    pub fn get(&self, field: QuestionField) -> &str {
        match field {
            QuestionField::Name => &self.name,
            QuestionField::Email => &self.email,
            QuestionField::Question => &self.question,
        }
    }

    pub fn set(&mut self, field: QuestionField, value: impl Into<String>) {
        let slot = match field {
            QuestionField::Name => &mut self.name,
            QuestionField::Email => &mut self.email,
            QuestionField::Question => &mut self.question,
        };
        *slot = value.into();
    }

    /// Collects the messages of every failing field.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check_required(QuestionField::Name.key(), &self.name, NAME_REQUIRED);
        errors.check_email(QuestionField::Email.key(), &self.email, EMAIL_REQUIRED, EMAIL_INVALID);
        errors.check_required(QuestionField::Question.key(), &self.question, QUESTION_REQUIRED);
        errors
    }

    /// # Errors
    /// Returns [`ValidationError::Invalid`] with one message per failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.field_errors().into_result()
    }
}
