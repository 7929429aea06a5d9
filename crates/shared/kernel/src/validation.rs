//! Field validation shared by the browser-side form models and the server endpoints.
//!
//! Both sides run the same rules: required fields must be non-blank after trimming,
//! and email fields must contain a match for [`EMAIL_PATTERN`].

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

/// Loose address check: something, `@`, something, `.`, something, no whitespace.
/// Unanchored, so it only has to match somewhere in the value.
pub const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(EMAIL_PATTERN).unwrap()
});

#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Inline error messages keyed by wire field name (`companySize`, `email`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_owned(), message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Records `message` when `value` is blank. Returns `true` if the value passed.
    pub fn check_required(&mut self, field: &str, value: &str, message: &str) -> bool {
        if value.trim().is_empty() {
            self.insert(field, message);
            return false;
        }
        true
    }

    /// Required check followed by the address pattern. Returns `true` if the value passed.
    pub fn check_email(&mut self, field: &str, value: &str, missing: &str, invalid: &str) -> bool {
        if !self.check_required(field, value, missing) {
            return false;
        }
        if !is_valid_email(value) {
            self.insert(field, invalid);
            return false;
        }
        true
    }

    /// `Ok` when nothing was recorded.
    ///
    /// # Errors
    /// Returns [`ValidationError::Invalid`] carrying every recorded message.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Invalid { fields: self, context: None })
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields().collect();
        f.write_str(&names.join(", "))
    }
}

#[amia_derive::amia_error]
pub enum ValidationError {
    /// One or more fields failed their rule.
    #[error("Invalid fields{}: {fields}", format_context(.context))]
    Invalid { fields: FieldErrors, context: Option<Cow<'static, str>> },
}

impl ValidationError {
    #[must_use]
    pub const fn fields(&self) -> &FieldErrors {
        match self {
            Self::Invalid { fields, .. } => fields,
        }
    }
}
