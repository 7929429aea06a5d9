//! # Mailer
//!
//! Delivers the site's notification emails. A [`Mailer`] wraps one transport:
//!
//! * [`ResendClient`]: the Resend HTTP API (`POST /emails`, bearer auth).
//! * [`Outbox`]: keeps messages in memory and logs them; used in development and tests.
//!
//! Every send is a single attempt. There are no retries, idempotency keys or batching.
//!
//! ```rust
//! # use amia_mailer::{Email, Mailer, Outbox};
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), amia_mailer::MailerError> {
//! let outbox = Outbox::new();
//! let mailer = Mailer::outbox(outbox.clone());
//!
//! let email = Email::new("Site <noreply@example.com>", "team@example.com", "Hello", "<p>Hi</p>")
//!     .reply_to("visitor@example.com");
//! mailer.send(&email).await?;
//!
//! assert_eq!(outbox.len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
mod message;
mod outbox;
mod resend;

pub use crate::error::{MailerError, MailerErrorExt};
pub use crate::message::{Delivery, Email};
pub use crate::outbox::Outbox;
pub use crate::resend::ResendClient;

use amia_domain::config::{MailConfig, MailTransport};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone)]
enum Transport {
    Resend(ResendClient),
    Outbox(Outbox),
}

/// Cheap-to-clone handle to the configured email transport.
#[derive(Debug, Clone)]
pub struct Mailer {
    transport: Transport,
}

impl Mailer {
    /// Builds the transport selected by `config.transport`.
    ///
    /// # Errors
    /// Returns [`MailerError::Config`] if the Resend transport is selected without an API key.
    pub fn from_config(config: &MailConfig) -> Result<Self, MailerError> {
        match config.transport {
            MailTransport::Resend => {
                let api_key = config.api_key.as_deref().ok_or_else(|| MailerError::Config {
                    message: "mail.api_key is required for the resend transport".into(),
                    context: Some("Set AMIA__MAIL__API_KEY or use transport = \"outbox\"".into()),
                })?;
                let client = ResendClient::new(
                    &config.endpoint,
                    api_key,
                    Duration::from_secs(config.timeout_secs.max(1)),
                )?;
                info!(endpoint = %config.endpoint, "Mail transport: resend");
                Ok(Self::resend(client))
            },
            MailTransport::Outbox => {
                warn!("Mail transport: outbox, emails are logged and never sent");
                Ok(Self::outbox(Outbox::new()))
            },
        }
    }

    #[must_use]
    pub const fn resend(client: ResendClient) -> Self {
        Self { transport: Transport::Resend(client) }
    }

    #[must_use]
    pub const fn outbox(outbox: Outbox) -> Self {
        Self { transport: Transport::Outbox(outbox) }
    }

    /// Sends `email` once.
    ///
    /// # Errors
    /// Propagates the transport's [`MailerError`].
    pub async fn send(&self, email: &Email) -> Result<Delivery, MailerError> {
        match &self.transport {
            Transport::Resend(client) => client.send(email).await,
            Transport::Outbox(outbox) => outbox.deliver(email),
        }
    }

    /// Short transport name for logs and health output.
    #[must_use]
    pub const fn transport_name(&self) -> &'static str {
        match self.transport {
            Transport::Resend(_) => "resend",
            Transport::Outbox(_) => "outbox",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resend_transport_requires_api_key() {
        let err = Mailer::from_config(&MailConfig::default()).expect_err("missing key");
        assert!(matches!(err, MailerError::Config { .. }));
    }

    #[test]
    fn transport_is_selected_from_config() {
        let outbox = MailConfig { transport: MailTransport::Outbox, ..MailConfig::default() };
        assert_eq!(Mailer::from_config(&outbox).unwrap().transport_name(), "outbox");

        let resend = MailConfig { api_key: Some("re_test".to_owned()), ..MailConfig::default() };
        assert_eq!(Mailer::from_config(&resend).unwrap().transport_name(), "resend");
    }

    #[tokio::test]
    async fn failing_outbox_rejects_and_records_nothing() {
        let outbox = Outbox::failing("provider down");
        let mailer = Mailer::outbox(outbox.clone());
        let email = Email::new("a@example.com", "b@example.com", "subject", "<p>body</p>");

        let err = mailer.send(&email).await.expect_err("should fail");
        assert!(matches!(err, MailerError::Rejected { status: 503, .. }));
        assert_eq!(outbox.len(), 0);
    }

    #[tokio::test]
    async fn outbox_assigns_sequential_ids() {
        let outbox = Outbox::new();
        let mailer = Mailer::outbox(outbox.clone());
        let email = Email::new("a@example.com", "b@example.com", "subject", "<p>body</p>");

        assert_eq!(mailer.send(&email).await.unwrap().id, "outbox-1");
        assert_eq!(mailer.send(&email).await.unwrap().id, "outbox-2");
        assert_eq!(outbox.last(), Some(email));
    }
}
