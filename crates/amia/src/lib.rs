//! Facade crate for the AMIA site features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `amia` with the desired feature flags (`server`/`client`).
//! - Call `amia::init` (server) to build the slices enabled in the config, then
//!   `amia::server::router` to mount their routes.

pub use amia_domain as domain;
pub use amia_kernel as kernel;

#[cfg(feature = "server")]
use amia_domain::{config::ApiConfig, features::FeatureSet, registry::InitializedSlice};

#[cfg(feature = "server")]
mod error;

#[cfg(feature = "server")]
pub use crate::error::{BootstrapError, BootstrapErrorExt};

#[cfg(feature = "server")]
pub mod server {
    use amia_domain::features::FeatureSet;
    use amia_kernel::server::ApiState;
    use utoipa_axum::router::OpenApiRouter;

    pub use amia_kernel::server::system_router;

    /// System routes plus the routes of every feature in `features`.
    pub fn router(features: FeatureSet) -> OpenApiRouter<ApiState> {
        let mut router = system_router();
        if features.contains(FeatureSet::DEMO_REQUEST) {
            router = router.merge(crate::features::demo_request::router());
        }
        if features.contains(FeatureSet::QUESTIONS) {
            router = router.merge(crate::features::questions::router());
        }
        router
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use amia_demo_request as demo_request;
    pub use amia_landing as landing;
    pub use amia_questions as questions;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "server")]
        "demo_request",
        #[cfg(feature = "server")]
        "questions",
        #[cfg(feature = "client")]
        "landing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize the features enabled in `config.features`.
///
/// # Errors
/// Returns an error if any feature initialization fails.
#[cfg(feature = "server")]
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, BootstrapError> {
    let mut slices = Vec::new();

    if config.features.contains(FeatureSet::DEMO_REQUEST) {
        slices.push(features::demo_request::init(config)?);
    }

    if config.features.contains(FeatureSet::QUESTIONS) {
        slices.push(features::questions::init(config)?);
    }

    if slices.is_empty() {
        tracing::warn!("No form features enabled; only system routes will be served");
    }

    Ok(slices)
}
