//! Common imports for feature crates.

pub use crate::action::{ActionResponse, SubmissionReceipt};
pub use crate::safe_nanoid;
pub use crate::security::html::escape_html;
pub use crate::validation::{FieldErrors, ValidationError, is_valid_email};
pub use amia_domain::config::ApiConfig;
pub use amia_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ActionReply, ApiState};
