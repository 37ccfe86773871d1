//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//! Grid parameters are fixed after startup; the rest of the runtime reads
//! them through the immutable [`GridGeometry`] this resource derives.
//!
//! # Configuration File Format
//!
//! ```ini
//! [grid]
//! tile_size = 12
//! scale_factor = 3
//!
//! [window]
//! width = 1080
//! height = 1080
//! target_fps = 60
//!
//! [assets]
//! sprite_sheet = assets/sprite_sheet.png
//! map_sheet = assets/level_maps.png
//! room_index = 0
//!
//! [player]
//! start_x = 100.0
//! start_y = 100.0
//! speed = 1.0
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::grid::GridGeometry;

/// Default safe values for startup
const DEFAULT_TILE_SIZE: u32 = 12;
const DEFAULT_SCALE_FACTOR: u32 = 3;
const DEFAULT_WINDOW_WIDTH: u32 = 1080;
const DEFAULT_WINDOW_HEIGHT: u32 = 1080;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_SPRITE_SHEET: &str = "assets/sprite_sheet.png";
const DEFAULT_MAP_SHEET: &str = "assets/level_maps.png";
const DEFAULT_PLAYER_START: f32 = 100.0;
const DEFAULT_PLAYER_SPEED: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores grid geometry, window settings and asset locations. Values not
/// present in the configuration file keep their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Source-sheet tile edge in pixels.
    pub tile_size: u32,
    /// Integer upscale applied to sliced sprites.
    pub scale_factor: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the sprite sheet image.
    pub sprite_sheet: PathBuf,
    /// Path to the level map sheet image.
    pub map_sheet: PathBuf,
    /// Which stacked room map of the map sheet to decode.
    pub room_index: u32,
    /// Player spawn position in world pixels.
    pub player_start: (f32, f32),
    /// Player movement speed in pixels per tick.
    pub player_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            scale_factor: DEFAULT_SCALE_FACTOR,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            sprite_sheet: PathBuf::from(DEFAULT_SPRITE_SHEET),
            map_sheet: PathBuf::from(DEFAULT_MAP_SHEET),
            room_index: 0,
            player_start: (DEFAULT_PLAYER_START, DEFAULT_PLAYER_START),
            player_speed: DEFAULT_PLAYER_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// The immutable grid geometry derived from the current settings.
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.tile_size, self.scale_factor)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [grid] section
        if let Some(tile_size) = config.getuint("grid", "tile_size").ok().flatten() {
            self.tile_size = tile_size as u32;
        }
        if let Some(scale) = config.getuint("grid", "scale_factor").ok().flatten() {
            self.scale_factor = scale as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [assets] section
        if let Some(sheet) = config.get("assets", "sprite_sheet") {
            self.sprite_sheet = PathBuf::from(sheet);
        }
        if let Some(map) = config.get("assets", "map_sheet") {
            self.map_sheet = PathBuf::from(map);
        }
        if let Some(index) = config.getuint("assets", "room_index").ok().flatten() {
            self.room_index = index as u32;
        }

        // [player] section
        if let Some(x) = config.getfloat("player", "start_x").ok().flatten() {
            self.player_start.0 = x as f32;
        }
        if let Some(y) = config.getfloat("player", "start_y").ok().flatten() {
            self.player_start.1 = y as f32;
        }
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        info!(
            "Loaded config: tile {}x{} scale {}, {}x{} window, fps={}, sheet={:?}, map={:?} room {}",
            self.tile_size,
            self.tile_size,
            self.scale_factor,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.sprite_sheet,
            self.map_sheet,
            self.room_index
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("grid", "tile_size", Some(self.tile_size.to_string()));
        config.set("grid", "scale_factor", Some(self.scale_factor.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set(
            "assets",
            "sprite_sheet",
            Some(self.sprite_sheet.display().to_string()),
        );
        config.set(
            "assets",
            "map_sheet",
            Some(self.map_sheet.display().to_string()),
        );
        config.set("assets", "room_index", Some(self.room_index.to_string()));

        config.set("player", "start_x", Some(self.player_start.0.to_string()));
        config.set("player", "start_y", Some(self.player_start.1.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
