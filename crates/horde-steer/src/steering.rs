use horde_core::Vec2;

use crate::units::meters_to_pixels;

/// Result of one steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vec2,
    /// Heading toward the target in radians, counter-clockwise from +x.
    pub facing: f32,
}

/// Advance `current` toward `target` by `speed * dt` scene units.
///
/// Memoryless: the heading is recomputed from scratch every call, so a moving
/// target is re-aimed at each frame. The step never carries the agent past the
/// target; when the remaining distance is shorter than the step the agent
/// lands exactly on it.
pub fn move_slightly_toward(current: Vec2, target: Vec2, speed: f32, dt: f32) -> Step {
    let delta = target - current;
    let facing = delta.angle();
    let step = speed.max(0.0) * dt.max(0.0);

    let position = if step * step >= delta.length_squared() {
        target
    } else {
        current + Vec2::from_angle(facing) * step
    };

    Step { position, facing }
}

/// `true` when `a` and `b` are strictly closer than `radius_m` meters.
///
/// Compares squared distances, so no square root is taken.
pub fn within_distance(a: Vec2, b: Vec2, radius_m: f32) -> bool {
    let radius = meters_to_pixels(radius_m);
    a.distance_squared(b) < radius * radius
}
