use crate::error::MailerError;
use crate::message::{Delivery, Email};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::info;

/// In-memory transport: records every message instead of sending it.
///
/// Clones share the same mailbox. A failing outbox rejects every message, which
/// lets callers exercise their delivery-error path without a network.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    sent: Arc<Mutex<Vec<Email>>>,
    failure: Option<Arc<str>>,
}

impl Outbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An outbox that rejects every message with `reason`.
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self { sent: Arc::default(), failure: Some(reason.into()) }
    }

    pub(crate) fn deliver(&self, email: &Email) -> Result<Delivery, MailerError> {
        if let Some(reason) = &self.failure {
            return Err(MailerError::Rejected {
                status: 503,
                message: reason.to_string().into(),
                context: Some("outbox".into()),
            });
        }

        let mut sent = self.sent.lock();
        sent.push(email.clone());
        let id = format!("outbox-{}", sent.len());
        info!(id = %id, to = ?email.to, subject = %email.subject, "Email kept in outbox");
        Ok(Delivery { id })
    }

    /// Messages recorded so far, oldest first.
    #[must_use]
    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sent.lock().is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<Email> {
        self.sent.lock().last().cloned()
    }
}
