//! Zombie construction-time configuration, loadable from YAML.

use std::path::Path;

use anyhow::{Context, Result};
use horde_core::{AgentRng, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("patrol route must contain at least one waypoint")]
    EmptyPatrol,

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("`{field}` has min {min:?} greater than max {max:?}")]
    InvalidBounds {
        field: &'static str,
        min: Vec2,
        max: Vec2,
    },

    #[error("`{field}` must be finite with a finite span, got min {min:?} max {max:?}")]
    NonFiniteBounds {
        field: &'static str,
        min: Vec2,
        max: Vec2,
    },

    #[error("failed to parse zombie config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Main zombie configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieConfig {
    /// Spawn position; random within `spawn_bounds` when absent
    pub spawn: Option<Vec2>,

    /// Fixed patrol route, visited in order and then repeated
    #[serde(default = "default_patrol")]
    pub patrol: Vec<Vec2>,

    /// Radius (meters) within which the player is noticed
    #[serde(default = "default_detect_radius")]
    pub detect_radius_m: f32,

    /// Radius (meters) below which a move counts as arrived
    #[serde(default = "default_arrival_radius")]
    pub arrival_radius_m: f32,

    /// Running speed in km/h
    #[serde(default = "default_speed_kmph")]
    pub speed_kmph: f32,

    /// What the zombie does when it is not pursuing
    #[serde(default)]
    pub roaming: Roaming,

    #[serde(default = "default_bounds")]
    pub spawn_bounds: Bounds,

    /// Area random wander targets are drawn from
    #[serde(default = "default_bounds")]
    pub wander_bounds: Bounds,

    /// Target held before the tree picks its first one
    #[serde(default = "default_initial_target")]
    pub initial_target: Vec2,

    /// Global seed; OS entropy when absent
    pub seed: Option<u64>,
}

/// Lower-priority branch of the tree, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Roaming {
    /// Pick a random point in `wander_bounds`, walk there, repeat.
    #[default]
    Wander,
    /// Walk the patrol route.
    Patrol,
    /// Walk to a fixed point. Both coordinates are required; a missing one
    /// surfaces as an invalid-argument error on the first update.
    Goto { x: Option<f32>, y: Option<f32> },
}

impl Roaming {
    pub fn label(&self) -> &'static str {
        match self {
            Roaming::Wander => "wander",
            Roaming::Patrol => "patrol",
            Roaming::Goto { .. } => "move to target location",
        }
    }
}

/// Axis-aligned rectangle in scene units, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Uniform random point inside the rectangle.
    pub fn sample(&self, rng: &mut AgentRng) -> Vec2 {
        Vec2::new(
            rng.gen_range(self.min.x..=self.max.x),
            rng.gen_range(self.min.y..=self.max.y),
        )
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        let span = self.max - self.min;
        let finite = [self.min.x, self.min.y, self.max.x, self.max.y, span.x, span.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(ConfigError::NonFiniteBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return Err(ConfigError::InvalidBounds {
                field,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

fn default_patrol() -> Vec<Vec2> {
    [
        (43.0, 274.0),
        (1118.0, 274.0),
        (1050.0, 494.0),
        (575.0, 804.0),
        (235.0, 991.0),
        (575.0, 804.0),
        (1050.0, 494.0),
    ]
    .into_iter()
    .map(Vec2::from)
    .collect()
}
fn default_detect_radius() -> f32 {
    7.0
}
fn default_arrival_radius() -> f32 {
    0.5
}
fn default_speed_kmph() -> f32 {
    10.0
}
fn default_bounds() -> Bounds {
    Bounds::new(Vec2::new(100.0, 100.0), Vec2::new(1180.0, 924.0))
}
fn default_initial_target() -> Vec2 {
    Vec2::new(900.0, 900.0)
}

impl Default for ZombieConfig {
    fn default() -> Self {
        Self {
            spawn: None,
            patrol: default_patrol(),
            detect_radius_m: default_detect_radius(),
            arrival_radius_m: default_arrival_radius(),
            speed_kmph: default_speed_kmph(),
            roaming: Roaming::default(),
            spawn_bounds: default_bounds(),
            wander_bounds: default_bounds(),
            initial_target: default_initial_target(),
            seed: None,
        }
    }
}

impl ZombieConfig {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Invalid zombie config in {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ZombieConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.patrol.is_empty() {
            return Err(ConfigError::EmptyPatrol);
        }
        for (field, value) in [
            ("detect_radius_m", self.detect_radius_m),
            ("arrival_radius_m", self.arrival_radius_m),
            ("speed_kmph", self.speed_kmph),
        ] {
            // `!(v > 0)` also rejects NaN.
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        self.spawn_bounds.validate("spawn_bounds")?;
        self.wander_bounds.validate("wander_bounds")?;
        Ok(())
    }
}
