//! Slice registry for the form features.
//! Each slice is the state one form endpoint needs (sender, recipient), tagged with
//! the [`FeatureSet`] flag it serves so the server can report what is mounted.

use crate::features::FeatureSet;
use std::any::{Any, TypeId};
use std::fmt::Debug;

/// Feature state shared across request handlers.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;

    /// The feature flag this slice serves.
    fn feature(&self) -> FeatureSet;
}

/// A feature's state, keyed by its concrete type.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub feature: FeatureSet,
    pub state: Box<dyn FeatureSlice>,
}

impl InitializedSlice {
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), feature: state.feature(), state: Box::new(state) }
    }
}
