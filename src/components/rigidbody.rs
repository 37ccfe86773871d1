//! Kinematic body component.
//!
//! The [`RigidBody`] component stores the velocity applied to an entity's
//! [`MapPosition`](super::mapposition::MapPosition) once per tick by the
//! movement system. Controllers recompute it fresh every tick rather than
//! accumulating it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity in world pixels per tick.
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    pub velocity: Vector2,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Create a RigidBody at rest.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
        }
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Translate the velocity by a delta vector.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.velocity.x += dx;
        self.velocity.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_rigidbody_new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
    }

    #[test]
    fn test_set_velocity() {
        let mut rb = RigidBody::new();
        rb.set_velocity(Vector2 { x: 100.0, y: 200.0 });
        assert!(approx_eq(rb.velocity().x, 100.0));
        assert!(approx_eq(rb.velocity().y, 200.0));
    }

    #[test]
    fn test_translate() {
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 10.0, y: 20.0 };
        rb.translate(5.0, -3.0);
        assert!(approx_eq(rb.velocity.x, 15.0));
        assert!(approx_eq(rb.velocity.y, 17.0));
    }
}
