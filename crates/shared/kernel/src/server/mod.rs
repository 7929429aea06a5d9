//! Axum plumbing shared by every feature router: the application state, the
//! action reply type and the system routes.

pub mod health;
pub mod response;
pub mod router;
pub mod state;

pub use response::ActionReply;
pub use router::system_router;
pub use state::{ApiState, ApiStateBuilder, ApiStateError};
