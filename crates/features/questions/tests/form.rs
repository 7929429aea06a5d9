use amia_kernel::action::{ActionResponse, SubmissionReceipt};
use amia_questions::email::html_body;
use amia_questions::{FormStatus, QuestionField, QuestionForm, QuestionRequest};
use proptest::prelude::*;

fn filled_form() -> QuestionForm {
    let mut form = QuestionForm::new();
    form.set(QuestionField::Name, "Luis Pérez");
    form.set(QuestionField::Email, "luis@example.com");
    form.set(QuestionField::Question, "Can the platform run on-premises?");
    form
}

proptest! {
    #[test]
    fn any_blank_field_blocks_submission(index in 0usize..3, blank in "[ \n]{0,3}") {
        let field = QuestionField::ALL[index];
        let mut form = filled_form();
        form.set(field, blank);

        prop_assert!(form.submit().is_none());
        prop_assert_eq!(form.errors().len(), 1);
        prop_assert!(form.errors().contains(field.key()));
        prop_assert_eq!(form.status(), FormStatus::Editing);
    }
}

#[test]
fn submit_returns_the_entered_fields() {
    let mut form = filled_form();
    let payload = form.submit().expect("valid form");

    assert_eq!(payload.name, "Luis Pérez");
    assert_eq!(payload.question, "Can the platform run on-premises?");
    assert_eq!(form.status(), FormStatus::Submitting);
    assert!(form.submit().is_none());
}

#[test]
fn invalid_email_is_rejected_before_submission() {
    let mut form = filled_form();
    form.set(QuestionField::Email, "luis at example.com");
    assert!(form.submit().is_none());
    assert_eq!(form.errors().get("email"), Some(amia_questions::model::EMAIL_INVALID));
}

#[test]
fn success_and_failure_lifecycle() {
    let mut form = filled_form();
    form.submit();
    form.finish(&ActionResponse::failed("Failed to send the email"));
    assert_eq!(form.status(), FormStatus::Editing);
    assert!(form.alert().is_some());
    assert_eq!(form.data().email, "luis@example.com");

    form.submit();
    form.finish(&ActionResponse::delivered(SubmissionReceipt {
        reference: "Q7K".to_owned(),
        id: "msg_2".to_owned(),
    }));
    assert_eq!(form.status(), FormStatus::Submitted);
    assert!(form.alert().is_none());
}

#[test]
fn abort_restores_editing() {
    let mut form = filled_form();
    form.submit();
    form.abort();
    assert_eq!(form.status(), FormStatus::Editing);
    assert!(form.alert().is_some());
}

#[test]
fn email_body_escapes_the_question() {
    let request = QuestionRequest {
        name: "Luis".to_owned(),
        email: "luis@example.com".to_owned(),
        question: "Is <b>bold</b> & safe?".to_owned(),
    };
    let html = html_body(&request);

    assert!(html.contains("<p><strong>Nombre:</strong> Luis</p>"));
    assert!(html.contains("<p><strong>Email:</strong> luis@example.com</p>"));
    assert!(html.contains("<h2>Pregunta:</h2>"));
    assert!(html.contains("<p>Is &lt;b&gt;bold&lt;/b&gt; &amp; safe?</p>"));
}

#[test]
fn answer_without_a_submission_in_flight_is_ignored() {
    let mut form = filled_form();
    form.finish(&ActionResponse::delivered(SubmissionReceipt {
        reference: "Q7K".to_owned(),
        id: "msg_2".to_owned(),
    }));
    assert_eq!(form.status(), FormStatus::Editing);

    form.submit();
    form.finish(&ActionResponse::delivered(SubmissionReceipt {
        reference: "Q7K".to_owned(),
        id: "msg_2".to_owned(),
    }));
    form.finish(&ActionResponse::failed("Failed to send the email"));
    assert_eq!(form.status(), FormStatus::Submitted);
    assert!(form.alert().is_none());
}
