//! Steering and proximity model for frame-driven agents.
//!
//! Positions live in scene units (pixels). Speeds and radii are configured in
//! physical units and converted with [`units::PIXELS_PER_METER`], the single
//! scale shared by movement and distance checks.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod steering;
pub mod units;

pub use steering::{move_slightly_toward, within_distance, Step};
pub use units::{kmph_to_pps, meters_to_pixels, PIXELS_PER_METER};
