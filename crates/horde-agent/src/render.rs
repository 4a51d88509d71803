//! Read-only state handed to the renderer each frame.

use horde_core::Vec2;
use serde::Serialize;

/// Sprite sheet the renderer should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationState {
    Walk,
    Idle,
}

impl AnimationState {
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Walk => "Walk",
            AnimationState::Idle => "Idle",
        }
    }
}

/// `(left, bottom, right, top)` box consumed by the collision collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

impl BoundingBox {
    pub fn around(center: Vec2, half_extent: f32) -> Self {
        Self {
            left: center.x - half_extent,
            bottom: center.y - half_extent,
            right: center.x + half_extent,
            top: center.y + half_extent,
        }
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.bottom <= other.top
            && other.bottom <= self.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub position: Vec2,
    pub facing: f32,
    pub animation: AnimationState,
    /// Index into the animation's frames.
    pub frame: u32,
    pub score: u32,
    pub target: Vec2,
    pub bounding_box: BoundingBox,
}

impl RenderSnapshot {
    /// Whether the sprite should be drawn flipped horizontally (facing left).
    pub fn mirrored(&self) -> bool {
        self.facing.cos() < 0.0
    }
}
