//! Frame-driven primitives shared by the horde decision engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod math;
pub mod rng;
pub mod tick;
pub mod world;

pub use error::{Error, Result};
pub use math::Vec2;
pub use rng::AgentRng;
pub use tick::TickContext;
pub use world::{PlayerSnapshot, WorldView};
