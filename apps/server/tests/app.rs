use amia::domain::config::ApiConfig;
use amia::domain::features::FeatureSet;
use amia_mailer::{Mailer, Outbox};
use amia_server::Server;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::fs;
use tempfile::TempDir;
use tower::ServiceExt;

struct Site {
    _dir: TempDir,
    outbox: Outbox,
    app: Router,
}

fn site(features: FeatureSet) -> Site {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("index.html"), "<h1>AMIA</h1>").expect("write index");

    let mut cfg = ApiConfig::default();
    cfg.storage.static_dir = dir.path().to_path_buf();
    cfg.features = features;

    let outbox = Outbox::new();
    let server = Server::builder()
        .config(cfg)
        .mailer(Mailer::outbox(outbox.clone()))
        .build()
        .expect("server should build");

    Site { app: server.app(), outbox, _dir: dir }
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn serves_static_site_and_health() {
    let site = site(FeatureSet::ALL);

    let (status, body) =
        send(site.app.clone(), Request::get("/").body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<h1>AMIA</h1>");

    let (status, body) =
        send(site.app, Request::get("/health").body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("\"mail\":\"outbox\""));
    assert!(body.contains("\"features\":[\"demo_request\",\"questions\"]"));
}

#[tokio::test]
async fn both_forms_reach_the_outbox() {
    let site = site(FeatureSet::ALL);

    let demo = serde_json::json!({
        "name": "Ana", "email": "ana@example.com", "companySize": "1-10",
        "country": "pe", "industry": "education"
    });
    let (status, body) = send(site.app.clone(), post_json("/api/demo-request", &demo)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(body["data"]["id"], "outbox-1");

    let question = serde_json::json!({
        "name": "Luis", "email": "luis@example.com", "question": "Pricing?"
    });
    let (status, body) = send(site.app, post_json("/api/questions", &question)).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body).expect("json body");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "outbox-2");

    let subjects: Vec<String> = site.outbox.sent().into_iter().map(|m| m.subject).collect();
    assert_eq!(subjects, ["Nueva solicitud de demo de Ana", "Nueva pregunta de Luis"]);
}

#[tokio::test]
async fn disabled_feature_has_no_endpoint() {
    let site = site(FeatureSet::QUESTIONS);
    let demo = serde_json::json!({
        "name": "Ana", "email": "ana@example.com", "companySize": "1-10",
        "country": "pe", "industry": "education"
    });

    let (status, _) = send(site.app.clone(), post_json("/api/demo-request", &demo)).await;
    assert!(matches!(status, StatusCode::NOT_FOUND | StatusCode::METHOD_NOT_ALLOWED));
    assert!(site.outbox.is_empty());

    let (_, body) =
        send(site.app, Request::get("/health").body(Body::empty()).expect("request")).await;
    assert!(body.contains("\"features\":[\"questions\"]"));
}

#[tokio::test]
async fn api_reference_is_served() {
    let site = site(FeatureSet::ALL);
    let (status, body) =
        send(site.app, Request::get("/docs").body(Body::empty()).expect("request")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/demo-request"));
}

#[test]
fn resend_transport_without_key_fails_build() {
    let err = Server::builder().config(ApiConfig::default()).build().expect_err("no api key");
    assert!(format!("{err:#}").contains("api_key"));
}

#[test]
fn missing_tls_files_fail_build() {
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(amia::domain::config::SslConfig {
        cert: "/nonexistent/cert.pem".into(),
        key: "/nonexistent/key.pem".into(),
    });
    let err = Server::builder()
        .config(cfg)
        .mailer(Mailer::outbox(Outbox::new()))
        .build()
        .expect_err("missing cert");
    assert!(err.to_string().contains("SSL certificate not found"));
}
