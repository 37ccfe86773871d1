//! End-to-end pipeline tests, headless.
//!
//! Exercises the full startup path (slice sheet, decode room, spawn
//! entities) and the per-tick update path (input to velocity to position,
//! animation advance) against synthetic rasters, without opening a window.

use bevy_ecs::prelude::*;
use image::{Rgba, RgbaImage};

use tilebound::components::animation::Animation;
use tilebound::components::facing::{Direction, Facing};
use tilebound::components::inputcontrolled::InputControlled;
use tilebound::components::mapposition::MapPosition;
use tilebound::components::rigidbody::RigidBody;
use tilebound::components::sprite::Sprite;
use tilebound::components::zindex::ZIndex;
use tilebound::game;
use tilebound::grid::GridGeometry;
use tilebound::resources::input::InputState;
use tilebound::room::{Room, TileSprites, TileType};
use tilebound::sheet::{SheetLayout, SliceRequest, SpriteSheet};
use tilebound::systems::animation::animation;
use tilebound::systems::movement::movement;
use tilebound::systems::player_controller::player_controller;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

// ==================== FIXTURES ====================

/// 48x24 sheet: player walk row on top, tile strip below.
fn sheet_image() -> RgbaImage {
    RgbaImage::from_fn(48, 24, |x, y| Rgba([x as u8, y as u8, 0, 255]))
}

/// 3x3 map with one wall, one entrance and one exit on the diagonal.
fn map_image() -> RgbaImage {
    let mut map = RgbaImage::from_pixel(3, 3, Rgba([0, 0, 0, 0]));
    map.put_pixel(0, 0, Rgba([51, 0, 0, 255]));
    map.put_pixel(1, 1, Rgba([102, 0, 0, 255]));
    map.put_pixel(2, 2, Rgba([153, 0, 0, 255]));
    map
}

/// Run the startup slicing path and decode the fixture map.
fn build_room() -> Room {
    let geometry = GridGeometry::new(12, 3);
    let mut sheet = SpriteSheet::new(sheet_image());
    let row = SliceRequest::new(SheetLayout::Blocks {
        tile_size: 12,
        count: 4,
    });
    let _player = sheet.slice(&row).unwrap();
    let tiles = TileSprites::from_strip(sheet.slice(&row).unwrap()).unwrap();
    Room::decode(&map_image(), &tiles, &geometry).unwrap()
}

/// World holding an input resource and a fully equipped player entity.
fn make_world() -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(InputState::default());
    let player = world
        .spawn((
            MapPosition::new(100.0, 100.0),
            ZIndex(0),
            Sprite::new("player", 36.0, 36.0),
            Animation::new(4),
            Facing::default(),
            RigidBody::new(),
            InputControlled::new(1.0),
        ))
        .id();
    (world, player)
}

/// One main-loop tick: controller, movement, animation, tracker reset.
fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(player_controller);
    schedule.add_systems(movement.after(player_controller));
    schedule.add_systems(animation);
    schedule.run(world);
    world.clear_trackers();
}

// ==================== STARTUP PIPELINE ====================

#[test]
fn sliced_sheet_decodes_into_spawnable_room() {
    let room = build_room();
    assert_eq!(room.len(), 3);
    assert_eq!(room.get((0, 0)).unwrap().tile_type(), TileType::Wall);
    assert_eq!(room.get((1, 1)).unwrap().tile_type(), TileType::Entrance);
    assert_eq!(room.get((2, 2)).unwrap().tile_type(), TileType::Exit);

    let mut world = World::new();
    game::spawn_room(&mut world, &room);

    let mut query = world.query::<(&Sprite, &MapPosition, &ZIndex)>();
    let tiles: Vec<_> = query.iter(&world).collect();
    assert_eq!(tiles.len(), 3);
    for (sprite, _, z) in &tiles {
        // Tiles draw below mobs and carry the scaled frame size.
        assert_eq!(**z, ZIndex(-1));
        assert!(approx_eq(sprite.width, 36.0));
        assert!(approx_eq(sprite.height, 36.0));
    }

    let exit = tiles
        .iter()
        .find(|(sprite, _, _)| sprite.seq_key == "tile_exit")
        .unwrap();
    assert!(approx_eq(exit.1.pos.x, 72.0));
    assert!(approx_eq(exit.1.pos.y, 72.0));
}

#[test]
fn stacked_map_sheet_selects_room_by_cross_offset() {
    // Two 12x12 rooms stacked vertically.
    let mut maps = RgbaImage::from_pixel(12, 24, Rgba([0, 0, 0, 0]));
    maps.put_pixel(0, 0, Rgba([51, 0, 0, 255]));
    maps.put_pixel(5, 17, Rgba([153, 0, 0, 255]));

    let geometry = GridGeometry::new(12, 3);
    let mut sheet = SpriteSheet::new(sheet_image());
    let row = SliceRequest::new(SheetLayout::Blocks {
        tile_size: 12,
        count: 4,
    });
    let _player = sheet.slice(&row).unwrap();
    let tiles = TileSprites::from_strip(sheet.slice(&row).unwrap()).unwrap();

    let mut map_sheet = SpriteSheet::new(maps);
    let request = SliceRequest::new(SheetLayout::Blocks {
        tile_size: 12,
        count: 1,
    })
    .with_cross_start(12)
    .with_scale(1);
    let map = map_sheet.slice(&request).unwrap();

    let room = Room::decode(map.frame(0).image(), &tiles, &geometry).unwrap();
    // Only the second room's exit is visible, at its room-local cell.
    assert_eq!(room.len(), 1);
    assert_eq!(room.get((5, 5)).unwrap().tile_type(), TileType::Exit);
}

// ==================== UPDATE PIPELINE ====================

#[test]
fn held_key_moves_player_one_speed_per_tick() {
    let (mut world, player) = make_world();
    world.resource_mut::<InputState>().move_right.active = true;

    for _ in 0..10 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert!(approx_eq(pos.pos.x, 110.0));
    assert!(approx_eq(pos.pos.y, 100.0));
}

#[test]
fn diagonal_walk_covers_same_distance_as_single_axis() {
    let (mut world, player) = make_world();
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_right.active = true;
        input.move_down.active = true;
    }

    for _ in 0..4 {
        tick(&mut world);
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    let dx = pos.pos.x - 100.0;
    let dy = pos.pos.y - 100.0;
    assert!(approx_eq(dx, dy));
    assert!(approx_eq((dx * dx + dy * dy).sqrt(), 4.0));
}

#[test]
fn press_edge_turns_player_and_release_stops_motion() {
    let (mut world, player) = make_world();
    {
        let mut input = world.resource_mut::<InputState>();
        input.move_up.active = true;
        input.move_up.just_pressed = true;
    }
    tick(&mut world);

    let facing = world.get::<Facing>(player).unwrap();
    assert_eq!(facing.direction, Direction::Up);
    assert!(approx_eq(facing.direction.rotation_degrees(), 270.0));

    // The edge flag only lives one frame; held state keeps moving.
    world.resource_mut::<InputState>().move_up.just_pressed = false;
    tick(&mut world);
    assert!(approx_eq(
        world.get::<MapPosition>(player).unwrap().pos.y,
        98.0
    ));

    // Releasing zeroes the velocity next tick.
    world.resource_mut::<InputState>().move_up.active = false;
    tick(&mut world);
    tick(&mut world);
    assert!(approx_eq(
        world.get::<MapPosition>(player).unwrap().pos.y,
        98.0
    ));
    // Facing survives the release.
    assert_eq!(
        world.get::<Facing>(player).unwrap().direction,
        Direction::Up
    );
}

#[test]
fn walk_cycle_wraps_while_moving() {
    let (mut world, player) = make_world();
    world.resource_mut::<InputState>().move_right.active = true;

    // Four frames at the default four-tick hold: one full cycle in 16.
    for expected in [1usize, 2, 3, 0] {
        for _ in 0..4 {
            tick(&mut world);
        }
        assert_eq!(world.get::<Sprite>(player).unwrap().frame, expected);
    }
    assert!(approx_eq(
        world.get::<MapPosition>(player).unwrap().pos.x,
        116.0
    ));
}
