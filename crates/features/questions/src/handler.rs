use crate::Questions;
use crate::email;
use crate::error::QuestionsError;
use crate::model::QuestionRequest;
use amia_derive::api_handler;
use amia_domain::constants::QUESTIONS_TAG;
use amia_kernel::action::{ActionResponse, DELIVERY_FAILED, SubmissionReceipt, UNEXPECTED_FAILURE};
use amia_kernel::safe_nanoid;
use amia_kernel::server::{ActionReply, ApiState};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::{error, info, warn};

#[api_handler(
    post,
    path = "/api/questions",
    request_body = QuestionRequest,
    responses(
        (status = OK, description = "Notification sent", body = ActionResponse),
        (status = UNPROCESSABLE_ENTITY, description = "Invalid or malformed payload", body = ActionResponse),
        (status = BAD_GATEWAY, description = "Email provider rejected the message", body = ActionResponse),
        (status = INTERNAL_SERVER_ERROR, description = "Unexpected failure", body = ActionResponse),
    ),
    tag = QUESTIONS_TAG,
)]
pub(crate) async fn submit_question(
    State(state): State<ApiState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> ActionReply {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "Malformed question payload");
            return ActionReply::unprocessable(ActionResponse::failed(rejection.body_text()));
        },
    };

    match deliver(&state, &request).await {
        Ok(receipt) => ActionReply::ok(ActionResponse::delivered(receipt)),
        Err(QuestionsError::Validation { source, .. }) => {
            warn!(fields = %source.fields(), "Question failed validation");
            ActionReply::unprocessable(ActionResponse::rejected(source.fields().clone()))
        },
        Err(err @ QuestionsError::Delivery { .. }) => {
            error!("Error sending question email: {err}");
            ActionReply::bad_gateway(ActionResponse::failed(DELIVERY_FAILED))
        },
        Err(err) => {
            error!("Unexpected question failure: {err}");
            ActionReply::internal(ActionResponse::failed(UNEXPECTED_FAILURE))
        },
    }
}

async fn deliver(
    state: &ApiState,
    request: &QuestionRequest,
) -> Result<SubmissionReceipt, QuestionsError> {
    request.validate()?;

    let slice = state.try_get_slice::<Questions>()?;
    let message = email::compose(request, &slice.sender, &slice.recipient);
    let reference = safe_nanoid!();

    let delivery = state.mailer.send(&message).await?;
    info!(reference = %reference, delivery_id = %delivery.id, "Question delivered");

    Ok(SubmissionReceipt { reference, id: delivery.id })
}
