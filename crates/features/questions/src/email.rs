use crate::model::QuestionRequest;
use amia_kernel::security::html::escape_html;

#[must_use]
pub fn subject(request: &QuestionRequest) -> String {
    format!("Nueva pregunta de {}", request.name.trim())
}

/// HTML body: who asked, then the question. Every value is escaped.
#[must_use]
pub fn html_body(request: &QuestionRequest) -> String {
    format!(
        "<h1>Nueva pregunta recibida</h1>\n\
         <p><strong>Nombre:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <h2>Pregunta:</h2>\n\
         <p>{question}</p>\n",
        name = escape_html(&request.name),
        email = escape_html(&request.email),
        question = escape_html(&request.question),
    )
}

#[cfg(feature = "server")]
#[must_use]
pub fn compose(request: &QuestionRequest, sender: &str, recipient: &str) -> amia_mailer::Email {
    amia_mailer::Email::new(sender, recipient, subject(request), html_body(request))
        .reply_to(request.email.trim())
}
