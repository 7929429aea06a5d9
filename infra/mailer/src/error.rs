use std::borrow::Cow;

/// Delivery failures. None of them are retried.
#[amia_derive::amia_error]
pub enum MailerError {
    /// The provider could not be reached or its response could not be read.
    #[error("Mail transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The provider answered with a non-success status.
    #[error("Mail provider rejected the message with status {status}{}: {message}", format_context(.context))]
    Rejected { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The transport is misconfigured (missing API key, bad endpoint).
    #[error("Mailer configuration error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal mailer error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
