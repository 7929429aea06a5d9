//! Hover-gated sparks behind the call-to-action button.
//!
//! While the button is hovered, sparks appear one at a time at random spots, drift
//! in a straight line, and start fading once their lifetime runs out. A faded spark
//! is removed. Leaving the button clears the canvas.

use crate::particles::{Link, Particle, Viewport, link_pairs, sample};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SparkConfig {
    pub max_sparks: usize,
    /// Chance that a hovered frame spawns a spark.
    pub spawn_chance: f64,
    pub size: (f32, f32),
    pub max_speed: f32,
    pub opacity: (f32, f32),
    /// Frames a spark lives at full opacity, `[min, max)`.
    pub lifetime: (u32, u32),
    /// Opacity lost per frame once the lifetime is over.
    pub fade_step: f32,
    pub link_distance: f32,
    pub link_alpha: f32,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            max_sparks: 100,
            spawn_chance: 0.1,
            size: (1.0, 4.0),
            max_speed: 1.0,
            opacity: (0.2, 0.8),
            lifetime: (50, 150),
            fade_step: 0.02,
            link_distance: 100.0,
            link_alpha: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Spark {
    pub particle: Particle,
    pub age: u32,
    pub lifetime: u32,
}

impl Spark {
    fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, config: &SparkConfig) -> Self {
        let (min_life, max_life) = config.lifetime;
        Self {
            particle: Particle {
                x: sample(rng, 0.0, width),
                y: sample(rng, 0.0, height),
                size: sample(rng, config.size.0, config.size.1),
                speed_x: sample(rng, -config.max_speed, config.max_speed),
                speed_y: sample(rng, -config.max_speed, config.max_speed),
                opacity: sample(rng, config.opacity.0, config.opacity.1),
            },
            age: 0,
            lifetime: if max_life > min_life { rng.random_range(min_life..max_life) } else { min_life },
        }
    }

    /// Moves one frame. Returns `false` once the spark has faded out.
    fn update(&mut self, fade_step: f32) -> bool {
        let p = &mut self.particle;
        p.x += p.speed_x;
        p.y += p.speed_y;
        self.age = self.age.saturating_add(1);
        if self.age >= self.lifetime {
            p.opacity -= fade_step;
        }
        p.opacity > 0.0
    }
}

#[derive(Debug, Clone)]
pub struct SparkField {
    config: SparkConfig,
    width: f32,
    height: f32,
    hovered: bool,
    sparks: Vec<Spark>,
}

impl SparkField {
    #[must_use]
    pub fn new(viewport: Viewport, config: SparkConfig) -> Self {
        let (width, height) = viewport.backing_size();
        Self { config, width, height, hovered: false, sparks: Vec::new() }
    }

    /// Hover state of the button. Leaving it drops every spark.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        if !hovered {
            self.sparks.clear();
        }
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn resize(&mut self, viewport: Viewport) {
        (self.width, self.height) = viewport.backing_size();
    }

    /// One animation frame: maybe spawn, move, fade, and drop faded sparks.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if !self.hovered {
            return;
        }
        let chance = self.config.spawn_chance;
        let chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        if self.sparks.len() < self.config.max_sparks && rng.random_bool(chance) {
            self.sparks.push(Spark::spawn(rng, self.width, self.height, &self.config));
        }
        let fade_step = self.config.fade_step;
        self.sparks.retain_mut(|spark| spark.update(fade_step));
    }

    /// Lines between nearby sparks, indexed into [`SparkField::sparks`].
    #[must_use]
    pub fn links(&self) -> Vec<Link> {
        let particles: Vec<Particle> = self.sparks.iter().map(|s| s.particle).collect();
        link_pairs(&particles, self.config.link_distance, self.config.link_alpha)
    }
}
