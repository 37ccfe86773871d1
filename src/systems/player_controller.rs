//! Input-to-velocity controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState)
//! and recomputes velocity and facing for entities carrying an
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! component. Velocity is rebuilt from scratch every tick from the held
//! keys; facing only changes on discrete key-press edges.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::facing::{Direction, Facing};
use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Update each controlled entity's velocity and facing from input.
///
/// Each axis resolves to -1/0/+1 with left winning over right and up over
/// down when both keys of a pair are held. When both axes are active the
/// precomputed diagonal speed applies per axis, keeping the total
/// magnitude equal to the single-axis speed.
pub fn player_controller(
    mut query: Query<(&InputControlled, &mut RigidBody, &mut Facing)>,
    input: Res<InputState>,
) {
    for (control, mut rigidbody, mut facing) in query.iter_mut() {
        let axis_x = if input.move_left.active {
            -1.0
        } else if input.move_right.active {
            1.0
        } else {
            0.0
        };
        let axis_y = if input.move_up.active {
            -1.0
        } else if input.move_down.active {
            1.0
        } else {
            0.0
        };

        let speed = if axis_x != 0.0 && axis_y != 0.0 {
            control.diagonal_movement_speed
        } else {
            control.movement_speed
        };
        rigidbody.velocity = Vector2 {
            x: axis_x * speed,
            y: axis_y * speed,
        };

        // Facing follows press edges, not held state. Checks run in a
        // fixed order so simultaneous presses resolve deterministically:
        // the last matching write wins.
        if input.move_left.just_pressed {
            facing.direction = Direction::Left;
        }
        if input.move_right.just_pressed {
            facing.direction = Direction::Right;
        }
        if input.move_up.just_pressed {
            facing.direction = Direction::Up;
        }
        if input.move_down.just_pressed {
            facing.direction = Direction::Down;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn make_world() -> (World, Entity) {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        let entity = world
            .spawn((
                InputControlled::new(1.0),
                RigidBody::new(),
                Facing::default(),
            ))
            .id();
        (world, entity)
    }

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(player_controller);
        schedule.run(world);
    }

    #[test]
    fn test_single_axis_velocity_is_exact() {
        let (mut world, entity) = make_world();
        world.resource_mut::<InputState>().move_right.active = true;
        tick(&mut world);

        let rb = world.get::<RigidBody>(entity).unwrap();
        assert_eq!(rb.velocity.x, 1.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_diagonal_velocity_keeps_unit_magnitude() {
        let (mut world, entity) = make_world();
        {
            let mut input = world.resource_mut::<InputState>();
            input.move_right.active = true;
            input.move_down.active = true;
        }
        tick(&mut world);

        let v = world.get::<RigidBody>(entity).unwrap().velocity;
        assert!(approx_eq(v.x, std::f32::consts::FRAC_1_SQRT_2));
        assert!(approx_eq(v.y, std::f32::consts::FRAC_1_SQRT_2));
        assert!(approx_eq((v.x * v.x + v.y * v.y).sqrt(), 1.0));
    }

    #[test]
    fn test_left_wins_over_right_when_both_held() {
        let (mut world, entity) = make_world();
        {
            let mut input = world.resource_mut::<InputState>();
            input.move_left.active = true;
            input.move_right.active = true;
        }
        tick(&mut world);

        let rb = world.get::<RigidBody>(entity).unwrap();
        assert_eq!(rb.velocity.x, -1.0);
    }

    #[test]
    fn test_velocity_resets_when_keys_released() {
        let (mut world, entity) = make_world();
        world.resource_mut::<InputState>().move_up.active = true;
        tick(&mut world);
        world.resource_mut::<InputState>().move_up.active = false;
        tick(&mut world);

        let rb = world.get::<RigidBody>(entity).unwrap();
        assert_eq!(rb.velocity.x, 0.0);
        assert_eq!(rb.velocity.y, 0.0);
    }

    #[test]
    fn test_facing_changes_only_on_press_edges() {
        let (mut world, entity) = make_world();
        // Held without a press edge: facing keeps its default.
        world.resource_mut::<InputState>().move_right.active = true;
        tick(&mut world);
        assert_eq!(
            world.get::<Facing>(entity).unwrap().direction,
            Direction::Left
        );

        world.resource_mut::<InputState>().move_right.just_pressed = true;
        tick(&mut world);
        assert_eq!(
            world.get::<Facing>(entity).unwrap().direction,
            Direction::Right
        );
    }

    #[test]
    fn test_simultaneous_press_edges_resolve_in_fixed_order() {
        let (mut world, entity) = make_world();
        {
            let mut input = world.resource_mut::<InputState>();
            input.move_left.just_pressed = true;
            input.move_down.just_pressed = true;
        }
        tick(&mut world);
        // Down is checked after left, so it wins.
        assert_eq!(
            world.get::<Facing>(entity).unwrap().direction,
            Direction::Down
        );
    }
}
