//! Questions feature slice: the FAQ page's "ask us" form and `POST /api/questions`.

pub mod email;
#[cfg(feature = "server")]
mod error;
pub mod form;
#[cfg(feature = "server")]
mod handler;
pub mod model;

pub use crate::form::{FormStatus, QuestionForm};
pub use crate::model::{QuestionField, QuestionRequest};

#[cfg(feature = "server")]
pub use crate::error::{QuestionsError, QuestionsErrorExt};

#[cfg(feature = "server")]
use amia_kernel::{domain::config::ApiConfig, domain::registry::InitializedSlice, server::ApiState};

/// Questions feature state
#[amia_derive::amia_slice(QUESTIONS)]
pub struct Questions {
    pub sender: String,
    pub recipient: String,
}

/// Initialize the questions feature.
///
/// # Errors
/// Returns [`QuestionsError::Config`] if the sender or the recipient is unusable.
#[cfg(feature = "server")]
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, QuestionsError> {
    let notifications = &config.notifications;
    if notifications.question_sender.trim().is_empty() {
        return Err(QuestionsError::Config {
            message: "notifications.question_sender is empty".into(),
            context: None,
        });
    }
    if !amia_kernel::validation::is_valid_email(&notifications.recipient) {
        return Err(QuestionsError::Config {
            message: "notifications.recipient is not an address".into(),
            context: Some(notifications.recipient.clone().into()),
        });
    }

    let slice = Questions::new(QuestionsInner {
        sender: notifications.question_sender.clone(),
        recipient: notifications.recipient.clone(),
    });

    tracing::info!("Questions server slice initialized");

    Ok(InitializedSlice::new(slice))
}

/// Routes of this feature.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<ApiState> {
    utoipa_axum::router::OpenApiRouter::new()
        .routes(utoipa_axum::routes!(handler::submit_question))
}
