#![cfg(feature = "server")]

use amia_kernel::domain::config::ApiConfig;
use amia_kernel::server::ApiState;
use amia_mailer::{Mailer, Outbox};
use amia_questions::{Questions, init, router};
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(outbox: &Outbox, config: ApiConfig) -> Router {
    let state = ApiState::builder()
        .register_slice(init(&config).expect("slice init"))
        .config(config)
        .mailer(Mailer::outbox(outbox.clone()))
        .build()
        .expect("state");
    router().with_state(state).split_for_parts().0
}

async fn ask(app: Router, payload: &Value) -> (StatusCode, Value) {
    let request = Request::post("/api/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

fn question() -> Value {
    json!({
        "name": "Luis",
        "email": "luis@example.com",
        "question": "Do you offer a trial?"
    })
}

#[tokio::test]
async fn question_is_mailed_to_configured_recipient() {
    let mut config = ApiConfig::default();
    config.notifications.recipient = "faq@example.com".to_owned();
    let outbox = Outbox::new();

    let (status, body) = ask(app(&outbox, config), &question()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "outbox-1");

    let sent = outbox.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["faq@example.com".to_owned()]);
    assert_eq!(sent[0].from, "AMIA Preguntas <onboarding@resend.dev>");
    assert_eq!(sent[0].subject, "Nueva pregunta de Luis");
    assert_eq!(sent[0].reply_to.as_deref(), Some("luis@example.com"));
    assert!(sent[0].html.contains("<p>Do you offer a trial?</p>"));
}

#[tokio::test]
async fn blank_question_is_unprocessable() {
    let outbox = Outbox::new();
    let mut payload = question();
    payload["question"] = json!("");

    let (status, body) = ask(app(&outbox, ApiConfig::default()), &payload).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["fields"]["question"], "Please enter your question");
    assert!(outbox.is_empty());
}

#[tokio::test]
async fn provider_failure_is_bad_gateway() {
    let outbox = Outbox::failing("quota exceeded");
    let (status, body) = ask(app(&outbox, ApiConfig::default()), &question()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body, json!({ "success": false, "error": "Failed to send the email" }));
}

#[test]
fn init_creates_slice() {
    let slice = init(&ApiConfig::default()).expect("init should succeed");
    assert_eq!(slice.id, std::any::TypeId::of::<Questions>());
}

#[test]
fn init_rejects_blank_sender() {
    let mut config = ApiConfig::default();
    config.notifications.question_sender = " ".to_owned();
    assert!(init(&config).is_err());
}
