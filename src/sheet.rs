//! Sprite-sheet slicing.
//!
//! A [`SpriteSheet`] wraps an already-decoded RGBA raster and cuts it into
//! ordered [`SpriteSequence`]s. Sprites abut along a traversal axis
//! ([`SliceAxis`]); an internal cross-axis cursor remembers how much of the
//! sheet previous slices consumed, so consecutive calls walk down (or
//! across) the sheet without the caller tracking offsets.
//!
//! Layout modes are mutually exclusive per request: uniform square blocks,
//! a uniform-row strip, or an explicit per-sprite dimension list. Regions
//! that fall outside the sheet are a hard [`SheetError::OutOfBounds`].

use std::fmt;

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Default blocky upscale applied to sliced sprites.
pub const DEFAULT_SCALE: u32 = 3;

/// An immutable sprite raster, produced once at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// A non-empty, ordered run of sprites forming one animation.
///
/// A single standalone sprite is a sequence of length 1; there is no
/// "maybe a list" case anywhere downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSequence {
    frames: Vec<Sprite>,
}

impl SpriteSequence {
    /// Build a sequence from frames. Returns `None` if `frames` is empty.
    pub fn new(frames: Vec<Sprite>) -> Option<Self> {
        if frames.is_empty() {
            None
        } else {
            Some(Self { frames })
        }
    }

    /// Wrap one sprite as a length-1 sequence.
    pub fn single(frame: Sprite) -> Self {
        Self {
            frames: vec![frame],
        }
    }

    /// Number of frames; always at least 1.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Sprite] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> &Sprite {
        &self.frames[index]
    }

    /// Dimensions of the first frame.
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frames[0].width(), self.frames[0].height())
    }

    pub fn into_frames(self) -> Vec<Sprite> {
        self.frames
    }
}

/// Which axis sprites abut along when slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceAxis {
    /// Sprites run left-to-right; the cross cursor advances downward.
    #[default]
    Rows,
    /// Transposed: sprites run top-to-bottom; the cursor advances rightward.
    Columns,
}

/// How one slice request partitions its region of the sheet.
///
/// Dimensions are always given in image space `(width, height)`; the
/// traversal axis decides which component sprites abut along.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetLayout {
    /// `count` square sprites of `tile_size` edge.
    Blocks { tile_size: u32, count: u32 },
    /// `count` sprites of a fixed `width` x `height`.
    Strip {
        width: u32,
        height: u32,
        count: u32,
    },
    /// One `(width, height)` entry per sprite.
    Explicit(Vec<(u32, u32)>),
}

impl SheetLayout {
    fn dimensions(&self) -> Vec<(u32, u32)> {
        match self {
            SheetLayout::Blocks { tile_size, count } => {
                vec![(*tile_size, *tile_size); *count as usize]
            }
            SheetLayout::Strip {
                width,
                height,
                count,
            } => vec![(*width, *height); *count as usize],
            SheetLayout::Explicit(entries) => entries.clone(),
        }
    }
}

/// Parameters for one [`SpriteSheet::slice`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    pub layout: SheetLayout,
    /// Offset along the traversal axis where the first sprite starts.
    pub start: u32,
    /// Cross-axis offset of this row. `None` uses the sheet's running cursor.
    pub cross_start: Option<u32>,
    /// Advance the running cursor past this row when done.
    pub advance_cursor: bool,
    /// Integer upscale factor; values below 2 leave sprites unscaled.
    pub scale: u32,
}

impl SliceRequest {
    pub fn new(layout: SheetLayout) -> Self {
        Self {
            layout,
            start: 0,
            cross_start: None,
            advance_cursor: true,
            scale: DEFAULT_SCALE,
        }
    }

    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    pub fn with_cross_start(mut self, cross_start: u32) -> Self {
        self.cross_start = Some(cross_start);
        self
    }

    pub fn keep_cursor(mut self) -> Self {
        self.advance_cursor = false;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }
}

/// Slicing failures. All are configuration bugs and fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetError {
    /// A requested region exceeds the sheet extent.
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },
    /// The layout describes zero sprites; sequences must be non-empty.
    EmptyLayout,
}

impl fmt::Display for SheetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetError::OutOfBounds {
                x,
                y,
                width,
                height,
                sheet_width,
                sheet_height,
            } => write!(
                f,
                "sprite region {}x{} at ({}, {}) exceeds sheet extent {}x{}",
                width, height, x, y, sheet_width, sheet_height
            ),
            SheetError::EmptyLayout => write!(f, "slice layout describes zero sprites"),
        }
    }
}

impl std::error::Error for SheetError {}

/// A source raster plus slicing state.
pub struct SpriteSheet {
    image: RgbaImage,
    axis: SliceAxis,
    cursor: u32,
}

impl SpriteSheet {
    pub fn new(image: RgbaImage) -> Self {
        Self::with_axis(image, SliceAxis::default())
    }

    pub fn with_axis(image: RgbaImage, axis: SliceAxis) -> Self {
        Self {
            image,
            axis,
            cursor: 0,
        }
    }

    /// Current cross-axis cursor, in unscaled sheet pixels.
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// Cut one run of sprites out of the sheet.
    ///
    /// Walks the traversal axis starting at `request.start`, extracting one
    /// region per layout entry at the row given by `request.cross_start`
    /// (or the running cursor). When `advance_cursor` is set, the cursor
    /// moves past the row's cross extent so the next call starts below
    /// (`Rows`) or to the right (`Columns`) of this one.
    pub fn slice(&mut self, request: &SliceRequest) -> Result<SpriteSequence, SheetError> {
        let dimensions = request.layout.dimensions();
        if dimensions.is_empty() {
            return Err(SheetError::EmptyLayout);
        }

        let cross_pos = request.cross_start.unwrap_or(self.cursor);
        let mut main_pos = request.start;
        let mut frames = Vec::with_capacity(dimensions.len());

        for &(width, height) in &dimensions {
            let (x, y) = match self.axis {
                SliceAxis::Rows => (main_pos, cross_pos),
                SliceAxis::Columns => (cross_pos, main_pos),
            };
            self.check_bounds(x, y, width, height)?;

            let mut sprite = imageops::crop_imm(&self.image, x, y, width, height).to_image();
            if request.scale > 1 {
                sprite = imageops::resize(
                    &sprite,
                    width * request.scale,
                    height * request.scale,
                    FilterType::Nearest,
                );
            }
            frames.push(Sprite::new(sprite));

            main_pos += match self.axis {
                SliceAxis::Rows => width,
                SliceAxis::Columns => height,
            };
        }

        if request.advance_cursor {
            self.cursor += dimensions
                .iter()
                .map(|&(width, height)| match self.axis {
                    SliceAxis::Rows => height,
                    SliceAxis::Columns => width,
                })
                .max()
                .unwrap_or(0);
        }

        // dimensions is non-empty, checked above
        Ok(SpriteSequence { frames })
    }

    fn check_bounds(&self, x: u32, y: u32, width: u32, height: u32) -> Result<(), SheetError> {
        let (sheet_width, sheet_height) = (self.image.width(), self.image.height());
        // checked_add keeps huge caller offsets from wrapping past the bound.
        let fits =
            |pos: u32, extent: u32, limit: u32| pos.checked_add(extent).is_some_and(|end| end <= limit);
        if !fits(x, width, sheet_width) || !fits(y, height, sheet_height) {
            return Err(SheetError::OutOfBounds {
                x,
                y,
                width,
                height,
                sheet_width,
                sheet_height,
            });
        }
        Ok(())
    }
}
