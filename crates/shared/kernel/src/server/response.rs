use crate::action::ActionResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// An [`ActionResponse`] paired with the HTTP status it is sent with.
///
/// Every outcome of a form endpoint, failures included, carries the same JSON body
/// so the page can read `success`/`error` without inspecting the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionReply(pub StatusCode, pub ActionResponse);

impl ActionReply {
    #[must_use]
    pub const fn ok(body: ActionResponse) -> Self {
        Self(StatusCode::OK, body)
    }

    #[must_use]
    pub const fn unprocessable(body: ActionResponse) -> Self {
        Self(StatusCode::UNPROCESSABLE_ENTITY, body)
    }

    #[must_use]
    pub const fn bad_gateway(body: ActionResponse) -> Self {
        Self(StatusCode::BAD_GATEWAY, body)
    }

    #[must_use]
    pub const fn internal(body: ActionResponse) -> Self {
        Self(StatusCode::INTERNAL_SERVER_ERROR, body)
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.0
    }

    #[must_use]
    pub const fn body(&self) -> &ActionResponse {
        &self.1
    }
}

impl IntoResponse for ActionReply {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}
