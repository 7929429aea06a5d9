//! Kernel utilities shared across the form features.
//! Keep this crate lightweight: config loading, field validation, HTML escaping,
//! the action result shape, and (with `server`) the Axum state and system routes.
//!
//! ## Reference IDs
//! Use `safe_nanoid!` for short, unambiguous submission references:
//! ```rust
//! # use amia_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use amia_kernel::config::load_config;
//! use amia_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server"))?;
//! ```
pub mod action;
pub mod config;
pub mod prelude;
pub mod security;
#[cfg(feature = "server")]
pub mod server;
pub mod validation;

/// Alphabet without visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use amia_domain as domain;
pub use nanoid::nanoid;

/// Generates an unambiguous `NanoID` (12 characters by default).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
