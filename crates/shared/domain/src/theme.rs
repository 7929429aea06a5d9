use serde::{Deserialize, Serialize};

/// Colour scheme preference of a visitor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl Theme {
    /// Resolves `System` against the preference reported by the platform.
    #[must_use]
    pub const fn resolve(self, prefers_dark: bool) -> Self {
        match self {
            Self::System if prefers_dark => Self::Dark,
            Self::System => Self::Light,
            other => other,
        }
    }

    /// The toggle button flips the *resolved* theme, so `System` always leaves system mode.
    #[must_use]
    pub const fn toggled(self, prefers_dark: bool) -> Self {
        match self.resolve(prefers_dark) {
            Self::Dark => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self, prefers_dark: bool) -> bool {
        matches!(self.resolve(prefers_dark), Self::Dark)
    }
}
