//! String constants shared between configuration, routing and documentation.

/// Prefix for environment overrides (`AMIA__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "AMIA";

// Feature names, as written in `features = [...]` in the config file.
pub const DEMO_REQUEST: &str = "demo_request";
pub const QUESTIONS: &str = "questions";

// OpenAPI tags.
pub const SYSTEM_TAG: &str = "System";
pub const DEMO_REQUEST_TAG: &str = "Demo requests";
pub const QUESTIONS_TAG: &str = "Questions";
