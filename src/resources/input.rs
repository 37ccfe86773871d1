//! Per-frame keyboard input resource.
//!
//! Captures the subset of keyboard state the game cares about and exposes
//! it to systems via the [`InputState`] resource: the four movement
//! directions on the arrow keys, the fire action on space, and quit on
//! escape. Systems read this resource instead of polling hardware, which
//! keeps controllers testable without a window.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was just released this frame.
    pub just_released: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub move_left: BoolState,
    pub move_up: BoolState,
    pub move_right: BoolState,
    pub move_down: BoolState,
    pub action_fire: BoolState,
    pub action_quit: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            move_left: BoolState::bound_to(KeyboardKey::KEY_LEFT),
            move_up: BoolState::bound_to(KeyboardKey::KEY_UP),
            move_right: BoolState::bound_to(KeyboardKey::KEY_RIGHT),
            move_down: BoolState::bound_to(KeyboardKey::KEY_DOWN),
            action_fire: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            action_quit: BoolState::bound_to(KeyboardKey::KEY_ESCAPE),
        }
    }
}
