use std::borrow::Cow;

/// Failure to build one of the enabled feature slices.
#[amia_derive::amia_error]
pub enum BootstrapError {
    #[error("Demo request bootstrap failed{}: {source}", format_context(.context))]
    DemoRequest {
        source: crate::features::demo_request::DemoRequestError,
        context: Option<Cow<'static, str>>,
    },
    #[error("Questions bootstrap failed{}: {source}", format_context(.context))]
    Questions { source: crate::features::questions::QuestionsError, context: Option<Cow<'static, str>> },
}
