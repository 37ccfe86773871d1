//! Binary entry point.
//!
//! Loads configuration, slices the sprite sheet, decodes the selected
//! room, opens the window, and runs the fixed-tick loop: poll input, run
//! the update schedule, draw.

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use tilebound::game::{self, GameAssets};
use tilebound::resources::gameconfig::GameConfig;
use tilebound::resources::input::InputState;
use tilebound::systems::animation::animation;
use tilebound::systems::input::update_input_state;
use tilebound::systems::movement::movement;
use tilebound::systems::player_controller::player_controller;
use tilebound::systems::render::render_frame;

#[derive(Parser, Debug)]
#[command(version, about = "A minimal tile-based 2D game runtime")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Room map of the map sheet to load, overriding the configured one.
    #[arg(long, value_name = "INDEX")]
    room: Option<u32>,

    /// Sprite sheet image, overriding the configured path.
    #[arg(long, value_name = "PATH")]
    sprite_sheet: Option<PathBuf>,

    /// Level map sheet image, overriding the configured path.
    #[arg(long, value_name = "PATH")]
    map_sheet: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("Using default configuration: {}", e);
    }
    if let Some(room) = cli.room {
        config.room_index = room;
    }
    if let Some(path) = cli.sprite_sheet {
        config.sprite_sheet = path;
    }
    if let Some(path) = cli.map_sheet {
        config.map_sheet = path;
    }

    let assets = match game::load_assets(&config) {
        Ok(assets) => assets,
        Err(e) => {
            error!("Failed to load assets: {}", e);
            std::process::exit(1);
        }
    };

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Tilebound")
        .build();
    rl.set_target_fps(config.target_fps);
    // Escape is handled through the input state so quitting goes through
    // the same binding layer as movement.
    rl.set_exit_key(None);

    let textures = match game::upload_textures(&mut rl, &thread, &assets.sprites) {
        Ok(textures) => textures,
        Err(e) => {
            error!("Failed to upload textures: {}", e);
            std::process::exit(1);
        }
    };

    let mut world = World::new();
    world.insert_resource(InputState::default());
    game::spawn_room(&mut world, &assets.room);
    game::spawn_player(&mut world, &config, &assets);

    let GameAssets { sprites, room, .. } = assets;
    world.insert_resource(sprites);
    world.insert_resource(room);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(player_controller);
    update.add_systems(movement.after(player_controller));
    update.add_systems(animation);
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    info!("Entering main loop");
    while !rl.window_should_close() {
        update_input_state(&mut world, &rl);
        if world.resource::<InputState>().action_quit.just_pressed {
            info!("Quit requested");
            break;
        }

        update.run(&mut world);
        world.clear_trackers();

        render_frame(&mut world, &mut rl, &thread, &textures);
    }
}
