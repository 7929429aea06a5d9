//! Interaction models of the landing and FAQ pages.
//!
//! Pure state machines driven by the page: no DOM, no timers. The page feeds in
//! animation frames, intersection ratios, clicks and elapsed time, and renders
//! what the models report.

pub mod faq;
pub mod particles;
pub mod reveal;
pub mod sparks;

pub use amia_domain::theme::Theme;
pub use faq::{FaqAccordion, FaqAction, FaqClick, FaqItem};
pub use particles::{Link, Particle, ParticleConfig, ParticleField, Viewport};
pub use reveal::{Reveal, RevealConfig, RevealDirection, RevealStyle};
pub use sparks::{Spark, SparkConfig, SparkField};
