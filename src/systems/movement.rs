//! Position integration.
//!
//! One tick advances every positioned body by its velocity exactly once.
//! The runtime is tick-based: velocities are expressed in pixels per tick,
//! so no delta-time scaling is applied. The add runs unconditionally; a
//! zero velocity is a no-op add.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;

pub fn movement(mut query: Query<(&mut MapPosition, &RigidBody)>) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos = position.pos + rigidbody.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Vector2;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(movement);
        schedule.run(world);
    }

    #[test]
    fn test_movement_adds_velocity_once_per_tick() {
        let mut world = World::new();
        let mut rb = RigidBody::new();
        rb.velocity = Vector2 { x: 10.0, y: -2.5 };
        let entity = world.spawn((MapPosition::new(100.0, 100.0), rb)).id();

        tick(&mut world);
        tick(&mut world);

        let pos = world.get::<MapPosition>(entity).unwrap();
        assert!(approx_eq(pos.pos.x, 120.0));
        assert!(approx_eq(pos.pos.y, 95.0));
    }

    #[test]
    fn test_zero_velocity_leaves_position_unchanged() {
        let mut world = World::new();
        let entity = world
            .spawn((MapPosition::new(3.0, 4.0), RigidBody::new()))
            .id();

        tick(&mut world);

        let pos = world.get::<MapPosition>(entity).unwrap();
        assert!(approx_eq(pos.pos.x, 3.0));
        assert!(approx_eq(pos.pos.y, 4.0));
    }
}
