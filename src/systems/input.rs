//! Input polling.
//!
//! [`update_input_state`] reads hardware input from Raylib once per frame
//! and writes the results into the world's
//! [`InputState`](crate::resources::input::InputState) resource. It runs
//! outside the schedule because it needs the raylib handle, which the main
//! loop owns; everything downstream only sees the resource.

use bevy_ecs::prelude::*;
use raylib::RaylibHandle;

use crate::resources::input::{BoolState, InputState};

fn poll(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
    state.just_released = rl.is_key_released(state.key_binding);
}

/// Poll Raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(world: &mut World, rl: &RaylibHandle) {
    let mut input = world.resource_mut::<InputState>();
    poll(&mut input.move_left, rl);
    poll(&mut input.move_up, rl);
    poll(&mut input.move_right, rl);
    poll(&mut input.move_down, rl);
    poll(&mut input.action_fire, rl);
    poll(&mut input.action_quit, rl);
}
