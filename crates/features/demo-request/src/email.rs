//! Notification email sent to the sales inbox for every accepted demo request.

use crate::model::{DemoField, DemoRequest};
use amia_kernel::security::html::escape_html;

/// Row labels of the field list, in [`DemoField`] order.
const LABELS: [(DemoField, &str); 5] = [
    (DemoField::Name, "Nombre"),
    (DemoField::Email, "Email"),
    (DemoField::CompanySize, "Tamaño de empresa"),
    (DemoField::Country, "País"),
    (DemoField::Industry, "Industria"),
];

#[must_use]
pub fn subject(request: &DemoRequest) -> String {
    format!("Nueva solicitud de demo de {}", request.name.trim())
}

/// HTML body with one list item per collected field. Every value is escaped.
#[must_use]
pub fn html_body(request: &DemoRequest) -> String {
    let items: String = LABELS
        .iter()
        .map(|&(field, label)| {
            format!("  <li><strong>{label}:</strong> {}</li>\n", escape_html(request.get(field)))
        })
        .collect();

    format!(
        "<h1>Nueva solicitud de demo</h1>\n\
         <p>Se ha recibido una nueva solicitud de demo con los siguientes datos:</p>\n\
         <ul>\n{items}</ul>\n\
         <p>Por favor, contacta al cliente lo antes posible.</p>\n"
    )
}

/// Full message from `sender` to `recipient`, replying to the prospect.
#[cfg(feature = "server")]
#[must_use]
pub fn compose(request: &DemoRequest, sender: &str, recipient: &str) -> amia_mailer::Email {
    amia_mailer::Email::new(sender, recipient, subject(request), html_body(request))
        .reply_to(request.email.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_names_the_prospect() {
        let request = DemoRequest { name: " Ana Torres ".to_owned(), ..DemoRequest::default() };
        assert_eq!(subject(&request), "Nueva solicitud de demo de Ana Torres");
    }

    #[test]
    fn labels_follow_wizard_order() {
        for (position, (field, _)) in LABELS.iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }
}
