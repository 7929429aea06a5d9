//! Drifting particle background shared by the landing and form pages.
//!
//! Particles move in a straight line and bounce off the canvas edges; pairs closer
//! than [`ParticleConfig::link_distance`] are joined by a line that fades with distance.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tunables of the field. The defaults reproduce the site's background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: usize,
    /// Radius range, `[min, max)`.
    pub size: (f32, f32),
    /// Each velocity component is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f32,
    /// Opacity range, `[min, max)`.
    pub opacity: (f32, f32),
    pub link_distance: f32,
    /// Alpha of a link between two particles at distance zero.
    pub link_alpha: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            size: (1.0, 4.0),
            max_speed: 1.0,
            opacity: (0.2, 0.7),
            link_distance: 100.0,
            link_alpha: 0.1,
        }
    }
}

/// Element size in CSS pixels plus the screen's device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self { width, height, device_pixel_ratio }
    }

    /// Ratio used for the backing store; unusable values fall back to 1.
    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        if self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio
        } else {
            1.0
        }
    }

    /// Canvas backing store size in device pixels, kept finite.
    #[must_use]
    pub fn backing_size(&self) -> (f32, f32) {
        let ratio = self.pixel_ratio();
        let scale = |side: f32| (side.max(0.0) * ratio).min(f32::MAX);
        (scale(self.width), scale(self.height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed_x: f32,
    pub speed_y: f32,
    pub opacity: f32,
}

impl Particle {
    fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, config: &ParticleConfig) -> Self {
        Self {
            x: sample(rng, 0.0, width),
            y: sample(rng, 0.0, height),
            size: sample(rng, config.size.0, config.size.1),
            speed_x: sample(rng, -config.max_speed, config.max_speed),
            speed_y: sample(rng, -config.max_speed, config.max_speed),
            opacity: sample(rng, config.opacity.0, config.opacity.1),
        }
    }

    /// Moves one step, then points any velocity component whose coordinate left
    /// `[0, width]` / `[0, height]` back inside.
    fn update(&mut self, width: f32, height: f32) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x > width {
            self.speed_x = -self.speed_x.abs();
        } else if self.x < 0.0 {
            self.speed_x = self.speed_x.abs();
        }
        if self.y > height {
            self.speed_y = -self.speed_y.abs();
        } else if self.y < 0.0 {
            self.speed_y = self.speed_y.abs();
        }
    }
}

/// `[low, high)`, or `low` for an empty, NaN or unbounded range.
pub(crate) fn sample<R: Rng>(rng: &mut R, low: f32, high: f32) -> f32 {
    if high > low && (high - low).is_finite() { rng.random_range(low..high) } else { low }
}

/// A line between particles `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Joins every pair closer than `max`; alpha falls linearly from `alpha` to zero.
pub(crate) fn link_pairs(particles: &[Particle], max: f32, alpha: f32) -> Vec<Link> {
    let mut links = Vec::new();
    for (a, p) in particles.iter().enumerate() {
        for (b, q) in particles.iter().enumerate().skip(a + 1) {
            let distance = (p.x - q.x).hypot(p.y - q.y);
            if distance < max {
                links.push(Link { a, b, alpha: alpha * (1.0 - distance / max) });
            }
        }
    }
    links
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    config: ParticleConfig,
    viewport: Viewport,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    running: bool,
}

impl ParticleField {
    /// Scatters `config.count` particles over the backing store of `viewport`.
    pub fn new<R: Rng>(viewport: Viewport, config: ParticleConfig, rng: &mut R) -> Self {
        let (width, height) = viewport.backing_size();
        let particles =
            (0..config.count).map(|_| Particle::spawn(rng, width, height, &config)).collect();
        Self { config, viewport, width, height, particles, running: true }
    }

    /// Default field seeded from the thread-local generator.
    #[must_use]
    pub fn with_defaults(viewport: Viewport) -> Self {
        Self::new(viewport, ParticleConfig::default(), &mut rand::rng())
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub const fn config(&self) -> &ParticleConfig {
        &self.config
    }

    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Bounds particles bounce within, in device pixels.
    #[must_use]
    pub const fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// One animation frame. Does nothing once stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.update(width, height);
        }
    }

    /// Lines to draw this frame, each pair once.
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        link_pairs(&self.particles, self.config.link_distance, self.config.link_alpha)
    }

    /// Applies a new element size or pixel ratio. Particles keep their positions and
    /// bounce back in if the canvas shrank around them.
    pub fn resize(&mut self, viewport: Viewport) {
        let (width, height) = viewport.backing_size();
        debug!(width, height, ratio = viewport.pixel_ratio(), "Particle canvas resized");
        self.viewport = viewport;
        self.width = width;
        self.height = height;
    }

    /// Ends the animation, as when the page unmounts.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
