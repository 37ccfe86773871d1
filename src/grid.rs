//! Grid-space math.
//!
//! World positions are measured in pixels; rooms address their tiles in
//! whole-tile grid units. [`GridGeometry`] owns the conversion factor
//! (`tile_size * scale_factor`) and is immutable after construction, so
//! every consumer sees the same geometry for the lifetime of the process.

/// A coordinate in whole-tile grid units.
pub type GridPos = (i32, i32);

/// Immutable grid geometry shared by the slicer, the room decoder and
/// entity spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    tile_size: u32,
    scale_factor: u32,
}

impl GridGeometry {
    pub fn new(tile_size: u32, scale_factor: u32) -> Self {
        Self {
            tile_size,
            scale_factor,
        }
    }

    /// Source-sheet tile edge in pixels, before scaling.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn scale_factor(&self) -> u32 {
        self.scale_factor
    }

    /// Edge of one grid cell in world pixels.
    pub fn grid_size(&self) -> u32 {
        self.tile_size * self.scale_factor
    }

    /// Convert a world-pixel position to the grid cell containing it.
    ///
    /// Uses floor division, so negative pixel positions fall into negative
    /// cells (`-1.0` is in cell `-1`, not cell `0`).
    pub fn to_grid(&self, x: f32, y: f32) -> GridPos {
        let size = self.grid_size() as f32;
        (x.div_euclid(size) as i32, y.div_euclid(size) as i32)
    }

    /// Convert a grid cell to the world-pixel position of its top-left corner.
    pub fn from_grid(&self, cell: GridPos) -> (f32, f32) {
        let size = self.grid_size() as f32;
        (cell.0 as f32 * size, cell.1 as f32 * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> GridGeometry {
        GridGeometry::new(12, 3)
    }

    #[test]
    fn test_grid_size_is_tile_times_scale() {
        assert_eq!(geometry().grid_size(), 36);
    }

    #[test]
    fn test_from_grid_scales_both_axes() {
        let g = geometry();
        assert_eq!(g.from_grid((0, 0)), (0.0, 0.0));
        assert_eq!(g.from_grid((2, 5)), (72.0, 180.0));
    }

    #[test]
    fn test_to_grid_truncates_within_cell() {
        let g = geometry();
        assert_eq!(g.to_grid(0.0, 0.0), (0, 0));
        assert_eq!(g.to_grid(35.9, 35.9), (0, 0));
        assert_eq!(g.to_grid(36.0, 71.9), (1, 1));
    }

    #[test]
    fn test_round_trip_non_negative_cells() {
        let g = geometry();
        for x in 0..20 {
            for y in 0..20 {
                let (px, py) = g.from_grid((x, y));
                assert_eq!(g.to_grid(px, py), (x, y));
            }
        }
    }

    #[test]
    fn test_negative_pixels_floor_into_negative_cells() {
        let g = geometry();
        assert_eq!(g.to_grid(-1.0, -36.0), (-1, -1));
        assert_eq!(g.to_grid(-37.0, -0.5), (-2, -1));
    }
}
