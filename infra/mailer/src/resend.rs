use crate::error::{MailerError, MailerErrorExt};
use crate::message::{Delivery, Email};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_ERROR_BODY_CHARS: usize = 2 * 1024;

/// Client for the Resend `POST /emails` endpoint.
#[derive(Clone)]
pub struct ResendClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient").field("endpoint", &self.endpoint).finish_non_exhaustive()
    }
}

/// Error body returned by the provider, e.g. `{"statusCode":422,"name":"validation_error","message":"..."}`.
#[derive(Debug, Deserialize)]
struct ProviderError {
    #[serde(default)]
    name: Option<String>,
    message: String,
}

impl ResendClient {
    /// Creates a client for `endpoint` (base URL, no trailing slash required).
    ///
    /// # Errors
    /// Returns [`MailerError::Config`] when the key is blank and
    /// [`MailerError::Transport`] when the HTTP client cannot be built.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, MailerError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(MailerError::Config {
                message: "Resend API key is empty".into(),
                context: None,
            });
        }

        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("amia-mailer/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Building HTTP client")?;

        let endpoint = endpoint.into().trim_end_matches('/').to_owned();
        Ok(Self { http, endpoint, api_key })
    }

    /// Sends one message. A single attempt; the caller decides what a failure means.
    ///
    /// # Errors
    /// [`MailerError::Transport`] on network failure or an unreadable success body,
    /// [`MailerError::Rejected`] on any non-2xx status.
    #[instrument(skip_all, fields(subject = %email.subject))]
    pub async fn send(&self, email: &Email) -> Result<Delivery, MailerError> {
        let response = self
            .http
            .post(format!("{}/emails", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await
            .context("Sending email request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected {
                status: status.as_u16(),
                message: rejection_message(&body).into(),
                context: None,
            });
        }

        let delivery = response.json::<Delivery>().await.context("Decoding provider receipt")?;
        debug!(id = %delivery.id, "Provider accepted email");
        Ok(delivery)
    }
}

/// Prefers the provider's structured message; falls back to a capped raw body.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<ProviderError>(body) {
        Ok(ProviderError { name: Some(name), message }) => format!("{name}: {message}"),
        Ok(ProviderError { name: None, message }) => message,
        Err(_) if body.trim().is_empty() => "empty response body".to_owned(),
        Err(_) => body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_a_config_error() {
        let err = ResendClient::new("https://api.resend.com", "  ", Duration::from_secs(1))
            .expect_err("blank key");
        assert!(matches!(err, MailerError::Config { .. }));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client =
            ResendClient::new("https://api.resend.com/", "re_test", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.endpoint, "https://api.resend.com");
    }

    #[test]
    fn debug_does_not_print_key() {
        let client =
            ResendClient::new("https://api.resend.com", "re_test_key", Duration::from_secs(1))
                .unwrap();
        assert!(!format!("{client:?}").contains("re_test_key"));
    }

    #[test]
    fn rejection_message_prefers_structured_body() {
        let body = r#"{"statusCode":403,"name":"invalid_api_key","message":"API key is invalid"}"#;
        assert_eq!(rejection_message(body), "invalid_api_key: API key is invalid");
        assert_eq!(rejection_message(""), "empty response body");
        assert_eq!(rejection_message("gateway timeout"), "gateway timeout");
        assert_eq!(rejection_message(&"x".repeat(5000)).len(), MAX_ERROR_BODY_CHARS);
    }
}
