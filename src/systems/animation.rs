//! Animation system.
//!
//! Advances every [`Animation`] cursor once per tick and mirrors the
//! resulting frame index into the entity's [`Sprite`] so the renderer
//! picks up the new frame. Entities without an `Animation` component
//! (room tiles) simply keep drawing frame 0.

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;

pub fn animation(mut query: Query<(&mut Animation, &mut Sprite)>) {
    for (mut anim, mut sprite) in query.iter_mut() {
        anim.advance();
        sprite.frame = anim.frame_index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(world: &mut World) {
        let mut schedule = Schedule::default();
        schedule.add_systems(animation);
        schedule.run(world);
    }

    #[test]
    fn test_sprite_frame_follows_animation_cursor() {
        let mut world = World::new();
        let entity = world
            .spawn((Animation::new(4).with_hold(1), Sprite::new("player", 36.0, 36.0)))
            .id();

        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 1);
        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 2);
    }

    #[test]
    fn test_frame_stays_put_during_hold() {
        let mut world = World::new();
        let entity = world
            .spawn((Animation::new(4), Sprite::new("player", 36.0, 36.0)))
            .id();

        for _ in 0..3 {
            tick(&mut world);
            assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 0);
        }
        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 1);
    }

    #[test]
    fn test_entities_without_animation_are_untouched() {
        let mut world = World::new();
        let entity = world.spawn(Sprite::new("tile_wall", 36.0, 36.0)).id();

        tick(&mut world);
        assert_eq!(world.get::<Sprite>(entity).unwrap().frame, 0);
    }
}
