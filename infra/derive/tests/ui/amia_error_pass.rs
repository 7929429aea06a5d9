use amia_derive::amia_error;
use std::borrow::Cow;

#[amia_error]
pub enum MailError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: MailError = "outbox closed".into();
    assert!(matches!(err, MailError::Internal { .. }));

    let io = std::io::Error::other("socket reset");
    let err: MailError = io.into();
    assert!(matches!(err, MailError::Io { context: None, .. }));
}
