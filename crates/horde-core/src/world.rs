use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Read-only world access needed by agent conditions.
///
/// The engine only ever reads the distinguished player actor. Implementors are
/// free to store it however they like; the methods may be called any number of
/// times per frame.
pub trait WorldView {
    fn player_position(&self) -> Vec2;
    fn player_score(&self) -> u32;
}

/// A plain copy of the player's observable state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub score: u32,
}

impl PlayerSnapshot {
    pub fn new(position: Vec2, score: u32) -> Self {
        Self { position, score }
    }
}

impl WorldView for PlayerSnapshot {
    fn player_position(&self) -> Vec2 {
        self.position
    }

    fn player_score(&self) -> u32 {
        self.score
    }
}
