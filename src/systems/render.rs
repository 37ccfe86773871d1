//! Rendering.
//!
//! Draws one frame: clear to white, then every sprite-bearing entity
//! sorted by [`ZIndex`] (painter's algorithm, tiles below mobs). A mob's
//! [`Facing`] selects a quarter-turn rotation applied around the sprite
//! center at draw time only; positions and velocities are untouched by it.
//! Facing angles are counterclockwise; the draw call negates them for
//! raylib's clockwise convention.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::texturestore::TextureStore;

/// Angle passed to the draw call for an optional facing.
///
/// The facing table is in counterclockwise degrees while raylib rotates
/// clockwise, so the angle is negated here.
fn draw_rotation(facing: Option<Facing>) -> f32 {
    facing
        .map(|f| -f.direction.rotation_degrees())
        .unwrap_or(0.0)
}

/// Draw the current world state. Called once per tick by the main loop
/// after the update schedule has run.
pub fn render_frame(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &TextureStore,
) {
    // Collect and z-sort before touching the draw handle.
    let mut to_draw: Vec<(Sprite, MapPosition, ZIndex, Option<Facing>)> = {
        let mut query = world.query::<(&Sprite, &MapPosition, &ZIndex, Option<&Facing>)>();
        query
            .iter(world)
            .map(|(sprite, position, z, facing)| {
                (sprite.clone(), *position, *z, facing.copied())
            })
            .collect()
    };
    to_draw.sort_by_key(|(_, _, z, _)| *z);

    let mut d = rl.begin_drawing(thread);
    d.clear_background(Color::WHITE);

    for (sprite, position, _z, facing) in to_draw.iter() {
        if let Some(tex) = textures.frame(&sprite.seq_key, sprite.frame) {
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: sprite.width,
                height: sprite.height,
            };
            // Rotate around the sprite center so the quarter-turn facing
            // transform keeps square sprites in place.
            let origin = Vector2 {
                x: sprite.width * 0.5,
                y: sprite.height * 0.5,
            };
            let dest = Rectangle {
                x: position.pos.x + origin.x,
                y: position.pos.y + origin.y,
                width: sprite.width,
                height: sprite.height,
            };
            d.draw_texture_pro(tex, src, dest, origin, draw_rotation(*facing), Color::WHITE);
        }
    }
}
