//! Fade-and-slide entrance of page sections as they scroll into view.

use serde::{Deserialize, Serialize};

/// Direction the element travels while appearing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealDirection {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// Hidden offset `(x, y)` for a travel distance, in CSS pixels.
    #[must_use]
    pub fn offset(self, distance: f32) -> (f32, f32) {
        match self {
            Self::Up => (0.0, distance),
            Self::Down => (0.0, -distance),
            Self::Left => (distance, 0.0),
            Self::Right => (-distance, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Seconds before the transition starts.
    pub delay: f32,
    pub direction: RevealDirection,
    pub distance: f32,
    /// Transition length in seconds.
    pub duration: f32,
    /// Visible fraction of the element that triggers the reveal.
    pub threshold: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { delay: 0.0, direction: RevealDirection::Up, distance: 50.0, duration: 0.8, threshold: 0.1 }
    }
}

impl RevealConfig {
    #[must_use]
    pub const fn delay(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }

    #[must_use]
    pub const fn direction(mut self, direction: RevealDirection) -> Self {
        self.direction = direction;
        self
    }
}

/// One-shot reveal: once visible, it stays visible.
#[derive(Debug, Clone, Default)]
pub struct Reveal {
    config: RevealConfig,
    visible: bool,
}

/// Inline style of a revealing element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealStyle {
    pub opacity: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub duration: f32,
    pub delay: f32,
}

impl RevealStyle {
    /// CSS declarations for the element's `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: translate({}px, {}px); \
             transition: opacity {d}s ease-out, transform {d}s ease-out; transition-delay: {}s",
            self.opacity,
            self.translate_x,
            self.translate_y,
            self.delay,
            d = self.duration,
        )
    }
}

impl Reveal {
    #[must_use]
    pub const fn new(config: RevealConfig) -> Self {
        Self { config, visible: false }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Feeds an intersection ratio from the viewport observer.
    ///
    /// Returns `true` only on the call that made the element visible.
    pub fn observe(&mut self, intersection_ratio: f32) -> bool {
        if self.visible {
            return false;
        }
        if intersection_ratio > 0.0 && intersection_ratio >= self.config.threshold {
            self.visible = true;
            return true;
        }
        false
    }

    #[must_use]
    pub fn style(&self) -> RevealStyle {
        let (translate_x, translate_y) =
            if self.visible { (0.0, 0.0) } else { self.config.direction.offset(self.config.distance) };
        RevealStyle {
            opacity: if self.visible { 1.0 } else { 0.0 },
            translate_x,
            translate_y,
            duration: self.config.duration,
            delay: self.config.delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_offsets_follow_direction() {
        assert_eq!(RevealDirection::Up.offset(50.0), (0.0, 50.0));
        assert_eq!(RevealDirection::Down.offset(50.0), (0.0, -50.0));
        assert_eq!(RevealDirection::Left.offset(50.0), (50.0, 0.0));
        assert_eq!(RevealDirection::Right.offset(50.0), (-50.0, 0.0));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut reveal = Reveal::default();
        assert!(!reveal.observe(0.05));
        assert!(!reveal.is_visible());
        assert_eq!(reveal.style().opacity, 0.0);
        assert_eq!(reveal.style().translate_y, 50.0);
    }

    #[test]
    fn css_carries_timing() {
        let reveal = Reveal::new(RevealConfig::default().delay(0.2).direction(RevealDirection::Left));
        let css = reveal.style().to_css();
        assert!(css.contains("translate(50px, 0px)"));
        assert!(css.contains("opacity 0.8s ease-out"));
        assert!(css.contains("transition-delay: 0.2s"));
    }
}
