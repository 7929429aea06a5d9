use super::health;
use super::state::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Routes that exist regardless of the enabled features.
pub fn system_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::<ApiState>::new().routes(routes!(health::health_handler))
}
