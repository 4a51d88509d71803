//! Zombie agent driven by a behavior tree.
//!
//! Each frame the game loop calls [`Zombie::update`]; the tree picks between
//! pursuing the player and roaming (wander, patrol or a fixed destination),
//! and the chosen callbacks move the zombie with the steering model from
//! `horde-steer`. A renderer reads [`Zombie::snapshot`] afterwards.

#![forbid(unsafe_code)]

pub mod behavior;
pub mod config;
pub mod render;
pub mod zombie;

pub use behavior::{build_tree, World};
pub use config::{Bounds, ConfigError, Roaming, ZombieConfig};
pub use render::{AnimationState, BoundingBox, RenderSnapshot};
pub use zombie::{Zombie, ZombieState, BALL_COLLISION_GROUP};
