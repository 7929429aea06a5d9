//! # Domain Models
//!
//! Pure types shared by every AMIA crate, with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod features;
pub mod registry;
pub mod theme;
