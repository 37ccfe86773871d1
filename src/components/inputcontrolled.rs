//! Input-controlled movement component.
//!
//! The [`player_controller`](crate::systems::player_controller) system
//! reads this together with the shared input state to recompute an
//! entity's velocity every tick.

use bevy_ecs::prelude::Component;

/// Movement speeds for a keyboard-driven entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Pixels per tick along a single axis.
    pub movement_speed: f32,
    /// Per-axis speed when both axes are active, precomputed as
    /// `movement_speed / sqrt(2)` so diagonal motion keeps the same
    /// total magnitude.
    pub diagonal_movement_speed: f32,
}

impl InputControlled {
    pub fn new(movement_speed: f32) -> Self {
        Self {
            movement_speed,
            diagonal_movement_speed: movement_speed * std::f32::consts::FRAC_1_SQRT_2,
        }
    }
}
