use crate::email;
use crate::error::DemoRequestError;
use crate::model::{DemoOptions, DemoRequest};
use crate::DemoRequests;
use amia_derive::api_handler;
use amia_domain::constants::DEMO_REQUEST_TAG;
use amia_kernel::action::{ActionResponse, DELIVERY_FAILED, SubmissionReceipt, UNEXPECTED_FAILURE};
use amia_kernel::safe_nanoid;
use amia_kernel::server::{ActionReply, ApiState};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{error, info, warn};

#[api_handler(
    post,
    path = "/api/demo-request",
    request_body = DemoRequest,
    responses(
        (status = OK, description = "Notification sent", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid or malformed payload", body = ActionResponse),
        (status = BAD_GATEWAY, description = "Email provider rejected the message", body = ActionResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ActionResponse),
    ),
    tag = DEMO_REQUEST_TAG,
)]
pub(crate) async fn submit_demo_request(
    State(state): State<ApiState>,
    payload: Result<Json<DemoRequest>, JsonRejection>,
) -> ActionReply {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Malformed demo request payload");
            return ActionReply::unprocessable(ActionResponse::failed(rejection.body_text()));
        },
    };

    match deliver(&state, &request).await {
        Ok(receipt) => ActionReply::ok(ActionResponse::delivered(receipt)),
        Err(DemoRequestError::Validation { source, .. }) => {
            warn!(fields = %source.fields(), "Demo request failed validation");
            ActionReply::unprocessable(ActionResponse::rejected(source.fields().clone()))
        },
        Err(err @ DemoRequestError::Delivery { .. }) => {
            error!("Error sending demo request email: {err}");
            ActionReply::bad_gateway(ActionResponse::failed(DELIVERY_FAILED))
        },
        Err(err) => {
            error!("Unexpected demo request failure: {err}");
            ActionReply::internal(ActionResponse::failed(UNEXPECTED_FAILURE))
        },
    }
}

#[api_handler(
    get,
    path = "/api/demo-request/options",
    responses((status = OK, description = "Options of the select steps", body = DemoOptions)),
    tag = DEMO_REQUEST_TAG,
)]
pub(crate) async fn demo_options() -> Json<DemoOptions> {
    Json(DemoOptions::catalog())
}

/// Validates `request` and sends one notification email for it.
async fn deliver(
    state: &ApiState,
    request: &DemoRequest,
) -> Result<SubmissionReceipt, DemoRequestError> {
    request.validate()?;

    let slice = state.try_get_slice::<DemoRequests>()?;
    let reference = safe_nanoid!();
    let message = email::compose(request, &slice.sender, &slice.recipient);

    let delivery = state.mailer.send(&message).await?;
    info!(
        reference = %reference,
        delivery_id = %delivery.id,
        company_size = %request.company_size,
        country = %request.country,
        "Demo request delivered"
    );

    Ok(SubmissionReceipt { reference, id: delivery.id })
}
