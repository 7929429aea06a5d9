use amia_kernel::server::ApiStateError;
use amia_kernel::validation::ValidationError;
use amia_mailer::MailerError;
use std::borrow::Cow;

/// A specialized [`DemoRequestError`] enum of this crate.
#[amia_derive::amia_error]
pub enum DemoRequestError {
    /// Missing or unusable notification settings.
    #[error("Demo request config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    /// The submitted payload failed a field rule.
    #[error("Demo request rejected{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },
    /// The email provider did not accept the notification.
    #[error("Demo request delivery failed{}: {source}", format_context(.context))]
    Delivery { source: MailerError, context: Option<Cow<'static, str>> },
    /// The slice is not registered in the application state.
    #[error("Demo request state error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },
    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal demo request error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
