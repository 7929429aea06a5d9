use crate::constants::{DEMO_REQUEST, QUESTIONS};
use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

bitflags! {
    /// Form features served by this deployment.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct FeatureSet: u32 {
        const DEMO_REQUEST = 1 << 0;
        const QUESTIONS = 1 << 1;

        const ALL = Self::DEMO_REQUEST.bits() | Self::QUESTIONS.bits();
    }
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<&str> for FeatureSet {
    fn from(s: &str) -> Self {
        match s.trim() {
            DEMO_REQUEST => Self::DEMO_REQUEST,
            QUESTIONS => Self::QUESTIONS,
            "all" | "*" => Self::ALL,
            _ => Self::empty(),
        }
    }
}

impl FeatureSet {
    /// Names of the enabled features, in declaration order.
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        [(Self::DEMO_REQUEST, DEMO_REQUEST), (Self::QUESTIONS, QUESTIONS)]
            .into_iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
            .collect()
    }
}

impl Serialize for FeatureSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.names())
    }
}

/// Accepts either a list of names (`["demo_request"]`) or a single name (`"all"`).
impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FeatureVisitor;

        impl<'de> Visitor<'de> for FeatureVisitor {
            type Value = FeatureSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a feature name or a list of feature names")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<FeatureSet, E> {
                Ok(v.split(',').map(FeatureSet::from).fold(FeatureSet::empty(), |acc, f| acc | f))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FeatureSet, A::Error> {
                let mut set = FeatureSet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= FeatureSet::from(name.as_str());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_any(FeatureVisitor)
    }
}
