//! Facing direction for mobile entities.
//!
//! The direction only selects a draw-time rotation of the current sprite;
//! it is never applied to velocities or positions. Movement math stays in
//! the controller and movement systems.

use bevy_ecs::prelude::Component;

/// The four facing directions. Sprites are authored facing left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Rotation applied to the sprite when drawing, in counterclockwise
    /// degrees (270 CCW turns left-facing art to point up).
    ///
    /// A fixed lookup keyed by the enum, not derived from any movement
    /// vector: left-facing art is drawn as-is and the other entries turn
    /// it by quarter steps. The renderer converts to its own handedness.
    pub fn rotation_degrees(self) -> f32 {
        match self {
            Direction::Left => 0.0,
            Direction::Up => 270.0,
            Direction::Right => 180.0,
            Direction::Down => 90.0,
        }
    }
}

/// Current facing of a mob.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Facing {
    pub direction: Direction,
}

impl Facing {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }
}
