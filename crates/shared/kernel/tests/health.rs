#![cfg(feature = "server")]

use amia_kernel::domain::config::ApiConfig;
use amia_kernel::domain::features::FeatureSet;
use amia_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use amia_kernel::server::{ApiState, system_router};
use amia_mailer::{Mailer, Outbox};
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

#[derive(Debug)]
struct QuestionsStub;

impl FeatureSlice for QuestionsStub {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn feature(&self) -> FeatureSet {
        FeatureSet::QUESTIONS
    }
}

fn state() -> ApiState {
    ApiState::builder()
        .config(ApiConfig::default())
        .mailer(Mailer::outbox(Outbox::new()))
        .build()
        .expect("state should build")
}

#[tokio::test]
async fn health_reports_transport_and_mounted_features() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .mailer(Mailer::outbox(Outbox::new()))
        .register_slice(InitializedSlice::new(QuestionsStub))
        .build()
        .expect("state should build");
    assert_eq!(state.features(), FeatureSet::QUESTIONS);

    let (router, _) = system_router().with_state(state).split_for_parts();

    let response = router
        .oneshot(Request::get("/health").body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(json["status"], "up");
    assert_eq!(json["mail"], "outbox");
    assert_eq!(json["features"], serde_json::json!(["questions"]));
}

#[test]
fn state_requires_mailer() {
    let err = ApiState::builder().config(ApiConfig::default()).build().expect_err("no mailer");
    assert!(err.to_string().contains("Mailer not provided"));
}

#[test]
fn missing_slice_is_reported() {
    #[derive(Debug)]
    struct Unregistered;

    impl FeatureSlice for Unregistered {
        fn as_any(&self) -> &dyn std::any::Any {
            self
        }

        fn feature(&self) -> FeatureSet {
            FeatureSet::DEMO_REQUEST
        }
    }

    let state = state();
    assert!(state.get_slice::<Unregistered>().is_none());
    assert!(state.try_get_slice::<Unregistered>().is_err());
    assert_eq!(state.slice_ids().count(), 0);
    assert!(state.features().is_empty());
}
