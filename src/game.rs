//! High-level game setup.
//!
//! Everything that happens once at startup lives here: loading the two
//! source images, slicing the sprite sheet into sequences, decoding the
//! room, uploading textures, and spawning the tile and player entities.
//! After [`load_assets`] succeeds, no steady-state operation can fail.

use std::fmt;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::*;
use image::RgbaImage;
use log::info;
use raylib::prelude::*;

use crate::components::animation::Animation;
use crate::components::facing::Facing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite as SpriteComponent;
use crate::components::zindex::ZIndex;
use crate::resources::gameconfig::GameConfig;
use crate::resources::spritestore::SpriteStore;
use crate::resources::texturestore::TextureStore;
use crate::room::{Room, RoomError, TileSprites, TileType};
use crate::sheet::{SheetError, SheetLayout, SliceRequest, SpriteSheet};

/// Sequence key of the player animation.
pub const PLAYER_SEQ_KEY: &str = "player";
/// Frames in the player's walk row of the sprite sheet.
pub const PLAYER_FRAMES: u32 = 4;

/// Sequence key of a tile type's sprite.
pub fn tile_seq_key(tile_type: TileType) -> &'static str {
    match tile_type {
        TileType::Wall => "tile_wall",
        TileType::Floor => "tile_floor",
        TileType::Entrance => "tile_entrance",
        TileType::Exit => "tile_exit",
    }
}

/// Startup failures. All abort the process with a diagnostic.
#[derive(Debug)]
pub enum AssetError {
    /// A source image is missing or corrupt.
    Load {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Slicing parameters exceeded a sheet extent.
    Sheet(SheetError),
    /// Room generation hit an unknown map color.
    Room(RoomError),
    /// The tile strip of the sheet has fewer frames than tile types.
    TileStripTooShort { found: usize },
    /// Uploading a sprite to the GPU failed.
    Upload(String),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Load { path, source } => {
                write!(f, "failed to load image {:?}: {}", path, source)
            }
            AssetError::Sheet(e) => write!(f, "sprite sheet slicing failed: {}", e),
            AssetError::Room(e) => write!(f, "room generation failed: {}", e),
            AssetError::TileStripTooShort { found } => write!(
                f,
                "tile strip carries {} frames, need one per tile type ({})",
                found,
                TileType::ALL.len()
            ),
            AssetError::Upload(e) => write!(f, "texture upload failed: {}", e),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Load { source, .. } => Some(source),
            AssetError::Sheet(e) => Some(e),
            AssetError::Room(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SheetError> for AssetError {
    fn from(e: SheetError) -> Self {
        AssetError::Sheet(e)
    }
}

impl From<RoomError> for AssetError {
    fn from(e: RoomError) -> Self {
        AssetError::Room(e)
    }
}

fn load_rgba(path: &Path) -> Result<RgbaImage, AssetError> {
    image::open(path)
        .map(|img| img.to_rgba8())
        .map_err(|source| AssetError::Load {
            path: path.to_path_buf(),
            source,
        })
}

/// Everything produced by startup asset processing.
pub struct GameAssets {
    pub sprites: SpriteStore,
    pub room: Room,
    pub player_frames: usize,
    /// Scaled player frame size in world pixels.
    pub player_size: (u32, u32),
}

/// Load and slice the sprite sheet, then decode the selected room map.
///
/// Sheet layout: the first row is the player walk animation, the second
/// row carries one sprite per tile type in strip order. The map sheet
/// stacks square room maps vertically; `config.room_index` picks one.
pub fn load_assets(config: &GameConfig) -> Result<GameAssets, AssetError> {
    let geometry = config.geometry();

    let mut sheet = SpriteSheet::new(load_rgba(&config.sprite_sheet)?);
    let row = SliceRequest::new(SheetLayout::Blocks {
        tile_size: config.tile_size,
        count: PLAYER_FRAMES,
    })
    .with_scale(config.scale_factor);

    let player = sheet.slice(&row)?;
    let tile_strip = sheet.slice(&row)?;
    let found = tile_strip.len();
    let tiles =
        TileSprites::from_strip(tile_strip).ok_or(AssetError::TileStripTooShort { found })?;

    let mut maps = SpriteSheet::new(load_rgba(&config.map_sheet)?);
    let map = maps.slice(
        &SliceRequest::new(SheetLayout::Blocks {
            tile_size: config.tile_size,
            count: 1,
        })
        .with_cross_start(config.room_index * config.tile_size)
        .with_scale(1),
    )?;

    let room = Room::decode(map.frame(0).image(), &tiles, &geometry)?;
    info!("Decoded room {} with {} tiles", config.room_index, room.len());

    let player_frames = player.len();
    let player_size = player.frame_size();

    let mut sprites = SpriteStore::default();
    sprites.insert(PLAYER_SEQ_KEY, player);
    for tile_type in TileType::ALL {
        sprites.insert(tile_seq_key(tile_type), tiles.sequence(tile_type).clone());
    }

    Ok(GameAssets {
        sprites,
        room,
        player_frames,
        player_size,
    })
}

/// Upload every stored sprite frame as a GPU texture.
///
/// Frames are routed through an in-memory PNG, which raylib decodes into
/// an `Image` it can upload without touching the filesystem.
pub fn upload_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    sprites: &SpriteStore,
) -> Result<TextureStore, AssetError> {
    let mut store = TextureStore::new();
    for (key, sequence) in sprites.iter() {
        let mut frames = Vec::with_capacity(sequence.len());
        for sprite in sequence.frames() {
            let mut png = Vec::new();
            sprite
                .image()
                .write_with_encoder(image::codecs::png::PngEncoder::new(std::io::Cursor::new(
                    &mut png,
                )))
                .map_err(|e| AssetError::Upload(e.to_string()))?;
            let img = Image::load_image_from_mem(".png", &png)
                .map_err(|e| AssetError::Upload(e.to_string()))?;
            let texture = rl
                .load_texture_from_image(thread, &img)
                .map_err(|e| AssetError::Upload(e.to_string()))?;
            frames.push(texture);
        }
        store.insert(key, frames);
    }
    Ok(store)
}

/// Spawn one entity per decoded tile, below the mobs in draw order.
pub fn spawn_room(world: &mut World, room: &Room) {
    for tile in room.tiles().values() {
        let (x, y) = tile.origin();
        let (width, height) = tile.size();
        world.spawn((
            MapPosition::new(x, y),
            ZIndex(-1),
            SpriteComponent::new(tile_seq_key(tile.tile_type()), width as f32, height as f32),
        ));
    }
}

/// Spawn the player at the configured start position.
pub fn spawn_player(world: &mut World, config: &GameConfig, assets: &GameAssets) -> Entity {
    let (width, height) = assets.player_size;
    world
        .spawn((
            MapPosition::new(config.player_start.0, config.player_start.1),
            ZIndex(0),
            SpriteComponent::new(PLAYER_SEQ_KEY, width as f32, height as f32),
            Animation::new(assets.player_frames),
            Facing::default(),
            RigidBody::new(),
            InputControlled::new(config.player_speed),
        ))
        .id()
}
