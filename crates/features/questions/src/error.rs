use amia_kernel::server::ApiStateError;
use amia_kernel::validation::ValidationError;
use amia_mailer::MailerError;
use std::borrow::Cow;

/// A specialized [`QuestionsError`] enum of this crate.
#[amia_derive::amia_error]
pub enum QuestionsError {
    #[error("Questions config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
    #[error("Question rejected{}: {source}", format_context(.context))]
    Validation { source: ValidationError, context: Option<Cow<'static, str>> },
    #[error("Question delivery failed{}: {source}", format_context(.context))]
    Delivery { source: MailerError, context: Option<Cow<'static, str>> },
    #[error("Questions state error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },
    #[error("Internal questions error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
