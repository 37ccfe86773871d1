//! Room generation from color-coded map images.
//!
//! A level map is a tiny raster where each fully-opaque pixel stands for one
//! grid cell; its `(R, G)` pair selects a [`TileType`] through a fixed
//! lookup table. `(0, 0)` is the reserved background key and the blue
//! channel is ignored, which keeps the table injective. Any other unknown
//! key aborts generation with [`RoomError::UnrecognizedColor`].

use std::fmt;

use bevy_ecs::prelude::Resource;
use image::RgbaImage;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::grid::{GridGeometry, GridPos};
use crate::sheet::SpriteSequence;

/// Semantic category of a room cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    Wall,
    Floor,
    Entrance,
    Exit,
}

impl TileType {
    pub const ALL: [TileType; 4] = [
        TileType::Wall,
        TileType::Floor,
        TileType::Entrance,
        TileType::Exit,
    ];

    /// Look a map-pixel `(R, G)` key up in the fixed color table.
    pub fn from_color_key(r: u8, g: u8) -> Option<TileType> {
        match (r, g) {
            (51, 0) => Some(TileType::Wall),
            (204, 0) => Some(TileType::Floor),
            (102, 0) => Some(TileType::Entrance),
            (153, 0) => Some(TileType::Exit),
            _ => None,
        }
    }

    /// The `(R, G)` key bound to this tile type.
    pub fn color_key(self) -> (u8, u8) {
        match self {
            TileType::Wall => (51, 0),
            TileType::Floor => (204, 0),
            TileType::Entrance => (102, 0),
            TileType::Exit => (153, 0),
        }
    }

    /// Position of this type's sprite in the tile strip of the sheet.
    pub fn strip_index(self) -> usize {
        match self {
            TileType::Wall => 0,
            TileType::Floor => 1,
            TileType::Entrance => 2,
            TileType::Exit => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TileType::Wall => "wall",
            TileType::Floor => "floor",
            TileType::Entrance => "entrance",
            TileType::Exit => "exit",
        }
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Room generation failures. Fatal; a room never half-builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomError {
    /// A fully-opaque map pixel whose `(R, G)` key is neither in the color
    /// table nor the reserved `(0, 0)` background.
    UnrecognizedColor { color: [u8; 4], x: u32, y: u32 },
}

impl fmt::Display for RoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomError::UnrecognizedColor { color, x, y } => write!(
                f,
                "unrecognized tile color rgba({}, {}, {}, {}) at map pixel ({}, {})",
                color[0], color[1], color[2], color[3], x, y
            ),
        }
    }
}

impl std::error::Error for RoomError {}

/// One sprite sequence per [`TileType`], indexed by strip position.
pub struct TileSprites {
    sequences: [SpriteSequence; 4],
}

impl TileSprites {
    /// Split a sliced tile strip into one length-1 sequence per type.
    ///
    /// The strip must carry at least one frame per variant, in
    /// [`TileType::strip_index`] order. Returns `None` when it is short.
    pub fn from_strip(strip: SpriteSequence) -> Option<Self> {
        let mut frames = strip.into_frames();
        if frames.len() < TileType::ALL.len() {
            return None;
        }
        frames.truncate(TileType::ALL.len());
        let mut iter = frames.into_iter().map(SpriteSequence::single);
        // Length checked above; the iterator yields exactly four items.
        Some(Self {
            sequences: [
                iter.next()?,
                iter.next()?,
                iter.next()?,
                iter.next()?,
            ],
        })
    }

    pub fn sequence(&self, tile_type: TileType) -> &SpriteSequence {
        &self.sequences[tile_type.strip_index()]
    }

    /// Scaled pixel size of the sprite bound to `tile_type`.
    pub fn frame_size(&self, tile_type: TileType) -> (u32, u32) {
        self.sequence(tile_type).frame_size()
    }
}

/// An immutable tile placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    tile_type: TileType,
    origin: (f32, f32),
    width: u32,
    height: u32,
    cells: SmallVec<[GridPos; 4]>,
}

impl Tile {
    /// Place a tile of `tile_type` at `cell`, deriving its pixel origin and
    /// the full set of grid cells its bounding box overlaps (end cell
    /// inclusive).
    pub fn new(
        tile_type: TileType,
        cell: GridPos,
        size: (u32, u32),
        geometry: &GridGeometry,
    ) -> Self {
        let origin = geometry.from_grid(cell);
        let (width, height) = size;
        let start = geometry.to_grid(origin.0, origin.1);
        let end = geometry.to_grid(
            origin.0 + width as f32 - 1.0,
            origin.1 + height as f32 - 1.0,
        );

        let mut cells = SmallVec::new();
        for x in start.0..=end.0 {
            for y in start.1..=end.1 {
                cells.push((x, y));
            }
        }

        Self {
            tile_type,
            origin,
            width,
            height,
            cells,
        }
    }

    pub fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// Top-left corner in world pixels.
    pub fn origin(&self) -> (f32, f32) {
        self.origin
    }

    /// Scaled sprite size in world pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// All grid cells this tile occupies.
    pub fn cells(&self) -> &[GridPos] {
        &self.cells
    }
}

/// A decoded room: a sparse grid-cell to tile mapping, immutable once built.
#[derive(Debug, Resource)]
pub struct Room {
    tiles: FxHashMap<GridPos, Tile>,
}

impl Room {
    /// Decode a map raster into a room.
    ///
    /// Scans every pixel; only fully-opaque ones count. `(0, 0)` keys are
    /// background and skipped silently, table hits are recorded, anything
    /// else aborts with the offending color and coordinate. Tile pixel
    /// origins come from converting the map-pixel position out of grid
    /// space, and sprite sizes from the per-type sequence in `sprites`.
    pub fn decode(
        map: &RgbaImage,
        sprites: &TileSprites,
        geometry: &GridGeometry,
    ) -> Result<Room, RoomError> {
        let mut placements: FxHashMap<GridPos, TileType> = FxHashMap::default();

        for (x, y, pixel) in map.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a != 255 {
                continue;
            }
            if (r, g) == (0, 0) {
                continue;
            }
            match TileType::from_color_key(r, g) {
                Some(tile_type) => {
                    placements.insert((x as i32, y as i32), tile_type);
                }
                None => {
                    return Err(RoomError::UnrecognizedColor {
                        color: [r, g, b, a],
                        x,
                        y,
                    });
                }
            }
        }

        let tiles = placements
            .into_iter()
            .map(|(cell, tile_type)| {
                let size = sprites.frame_size(tile_type);
                (cell, Tile::new(tile_type, cell, size, geometry))
            })
            .collect();

        Ok(Room { tiles })
    }

    pub fn tiles(&self) -> &FxHashMap<GridPos, Tile> {
        &self.tiles
    }

    pub fn get(&self, cell: GridPos) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
