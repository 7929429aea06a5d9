//! FAQ accordion: hover previews an answer, click pins it, one pinned item at most.
//!
//! Some entries are shortcuts instead of questions. Clicking them opens a mail draft
//! or another page rather than expanding an answer.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::form_urlencoded::byte_serialize;

/// Pause between the entrance of consecutive items.
pub const STAGGER: Duration = Duration::from_millis(300);

pub const MAIL_SUBJECT: &str = "Tengo una duda";
pub const MAIL_BODY: &str = "Hola, tengo una duda sobre los servicios de AMIA.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FaqAction {
    /// Expands the answer in place.
    Answer,
    /// Opens a mail draft to this address.
    Mail { address: String },
    /// Navigates to another page of the site.
    Page { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    pub action: FaqAction,
}

impl FaqItem {
    pub fn answer(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self { question: question.into(), answer: answer.into(), action: FaqAction::Answer }
    }

    pub fn mail(question: impl Into<String>, answer: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            action: FaqAction::Mail { address: address.into() },
        }
    }

    pub fn page(question: impl Into<String>, answer: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            action: FaqAction::Page { url: url.into() },
        }
    }
}

/// What the page should do after a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaqClick {
    Opened(usize),
    Closed(usize),
    /// Follow this `mailto:` link.
    Mail(String),
    Navigate(String),
    /// Index out of range.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct FaqAccordion {
    items: Vec<FaqItem>,
    open: Option<usize>,
    hovered: Option<usize>,
    section_visible: bool,
}

impl FaqAccordion {
    #[must_use]
    pub const fn new(items: Vec<FaqItem>) -> Self {
        Self { items, open: None, hovered: None, section_visible: false }
    }

    #[must_use]
    pub fn items(&self) -> &[FaqItem] {
        &self.items
    }

    #[must_use]
    pub const fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn click(&mut self, index: usize) -> FaqClick {
        let Some(item) = self.items.get(index) else {
            return FaqClick::Ignored;
        };

        match &item.action {
            FaqAction::Mail { address } => FaqClick::Mail(mailto(address)),
            FaqAction::Page { url } => FaqClick::Navigate(url.clone()),
            FaqAction::Answer if self.open == Some(index) => {
                self.open = None;
                FaqClick::Closed(index)
            },
            FaqAction::Answer => {
                self.open = Some(index);
                FaqClick::Opened(index)
            },
        }
    }

    /// Pointer entered (`Some`) or left (`None`) an item.
    pub fn hover(&mut self, index: Option<usize>) {
        self.hovered = index.filter(|i| *i < self.items.len());
    }

    /// The answer shows while hovered or pinned.
    #[must_use]
    pub fn is_answer_visible(&self, index: usize) -> bool {
        self.hovered == Some(index) || self.open == Some(index)
    }

    /// The section scrolled into view. Returns `true` the first time only.
    pub fn reveal_section(&mut self) -> bool {
        !std::mem::replace(&mut self.section_visible, true)
    }

    #[must_use]
    pub const fn is_section_visible(&self) -> bool {
        self.section_visible
    }

    /// Entrance delay of item `index`, counted from the section reveal.
    #[must_use]
    pub fn entrance_delay(index: usize) -> Duration {
        STAGGER.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Whether item `index` has made its entrance `elapsed` after the section reveal.
    #[must_use]
    pub fn is_item_shown(&self, index: usize, elapsed: Duration) -> bool {
        self.section_visible && index < self.items.len() && elapsed >= Self::entrance_delay(index)
    }
}

/// `mailto:` link with the canned subject and body.
#[must_use]
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}?subject={}&body={}", encode(MAIL_SUBJECT), encode(MAIL_BODY))
}

/// Text copied to the clipboard when no mail client opens.
#[must_use]
pub fn clipboard_text(address: &str) -> String {
    format!("Email: {address}\nAsunto: {MAIL_SUBJECT}\n\n{MAIL_BODY}")
}

/// Percent-encodes a `mailto:` header value. Spaces become `%20`, not `+`.
fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_encodes_spaces_and_accents() {
        let link = mailto("hola@example.com");
        assert!(link.starts_with("mailto:hola@example.com?subject=Tengo%20una%20duda&body="));
        assert!(!link.contains(' '));
        assert!(!link.contains('+'));
    }

    #[test]
    fn entrance_is_staggered() {
        assert_eq!(FaqAccordion::entrance_delay(0), Duration::ZERO);
        assert_eq!(FaqAccordion::entrance_delay(3), Duration::from_millis(900));
    }
}
