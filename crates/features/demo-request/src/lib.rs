//! Demo request feature slice.
//!
//! * [`model`]: the five-field payload, its rules and the option catalogs.
//! * [`wizard`]: page state for the one-field-per-step form.
//! * [`email`]: the notification sent for each accepted request.
//! * With `server`: `POST /api/demo-request` and `GET /api/demo-request/options`.

pub mod email;
#[cfg(feature = "server")]
mod error;
#[cfg(feature = "server")]
mod handler;
pub mod model;
pub mod wizard;

pub use crate::model::{DemoField, DemoOptions, DemoRequest, SelectOption};
pub use crate::wizard::{Advance, DemoWizard, Direction, SubmissionStatus};

#[cfg(feature = "server")]
pub use crate::error::{DemoRequestError, DemoRequestErrorExt};

#[cfg(feature = "server")]
use amia_kernel::{domain::config::ApiConfig, domain::registry::InitializedSlice, server::ApiState};

/// Demo request feature state
#[amia_derive::amia_slice(DEMO_REQUEST)]
pub struct DemoRequests {
    /// `From` header of the notification
    pub sender: String,
    /// Inbox receiving the notifications
    pub recipient: String,
}

/// Initialize the demo request feature.
///
/// # Errors
/// Returns [`DemoRequestError::Config`] if the sender or the recipient is blank.
#[cfg(feature = "server")]
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, DemoRequestError> {
    let notifications = &config.notifications;
    if notifications.demo_request_sender.trim().is_empty() {
        return Err(DemoRequestError::Config {
            message: "notifications.demo_request_sender is empty".into(),
            context: None,
        });
    }
    if !amia_kernel::validation::is_valid_email(&notifications.recipient) {
        return Err(DemoRequestError::Config {
            message: format!("notifications.recipient is not an address: {:?}", notifications.recipient)
                .into(),
            context: None,
        });
    }

    let slice = DemoRequests::new(DemoRequestsInner {
        sender: notifications.demo_request_sender.clone(),
        recipient: notifications.recipient.clone(),
    });

    tracing::info!(recipient = %slice.recipient, "Demo request slice initialized");

    Ok(InitializedSlice::new(slice))
}

/// Routes of this feature.
#[cfg(feature = "server")]
pub fn router() -> utoipa_axum::router::OpenApiRouter<ApiState> {
    use utoipa_axum::routes;

    utoipa_axum::router::OpenApiRouter::new()
        .routes(routes!(handler::submit_demo_request))
        .routes(routes!(handler::demo_options))
}
