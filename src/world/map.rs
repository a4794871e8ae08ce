//! Map data structure
//!
//! The 2D grid a dungeon is painted into, plus the surface trait the
//! generator writes through.

use super::tile::Tile;
use super::Position;
use crate::world::generation::Region;

/// A paintable grid of cells.
///
/// The generator only ever marks cells blocked or passable; hosts with their
/// own tile storage implement this to receive a layout directly.
pub trait TileSurface {
    fn width(&self) -> i32;

    fn height(&self) -> i32;

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width() && y >= 0 && y < self.height()
    }

    /// Mark a cell as blocking (wall/earth) or passable (floor)
    fn set_blocked(&mut self, x: i32, y: i32, blocked: bool);

    /// Reset every cell to the same state
    fn fill_blocked(&mut self, blocked: bool) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set_blocked(x, y, blocked);
            }
        }
    }
}

/// A dense dungeon map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Tile>,
}

impl Map {
    /// Create a new map filled with walls
    pub fn new(width: i32, height: i32) -> Self {
        let cells = (width.max(0) * height.max(0)) as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::default(); cells],
        }
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    pub fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Convert 1D index to 2D coordinates
    #[inline]
    pub fn idx_to_xy(&self, idx: usize) -> (i32, i32) {
        let idx = idx as i32;
        (idx % self.width, idx / self.width)
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn point_in_map(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Check that both corners of a region land on the map
    ///
    /// The far corner is the exclusive `(x2, y2)` edge, so a region touching
    /// the right or bottom border does not fit.
    pub fn room_in_map(&self, region: &Region) -> bool {
        self.point_in_map(region.x, region.y) && self.point_in_map(region.x2(), region.y2())
    }

    /// Get tile at position
    pub fn get_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        if self.point_in_map(x, y) {
            Some(&self.tiles[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Get mutable tile at position
    pub fn get_tile_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        if self.point_in_map(x, y) {
            let idx = self.xy_to_idx(x, y);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    /// Check if a position can be walked on
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(false, |t| t.is_walkable())
    }

    /// Check if a position blocks line of sight
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get_tile(x, y).map_or(true, |t| !t.is_transparent())
    }

    /// Get all walkable positions (for spawning)
    pub fn passable_positions(&self) -> Vec<Position> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_walkable())
            .map(|(idx, _)| {
                let (x, y) = self.idx_to_xy(idx);
                Position::new(x, y)
            })
            .collect()
    }

    /// Render with `#` for blocked and `.` for open tiles
    pub fn render(&self) -> String {
        self.render_with('#', '.')
    }

    /// Render one line per row using the given glyphs
    pub fn render_with(&self, block: char, open: char) -> String {
        let mut output = String::with_capacity(self.tiles.len() + self.height.max(0) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                output.push(self.tiles[self.xy_to_idx(x, y)].glyph(block, open));
            }
            output.push('\n');
        }
        output
    }
}

impl TileSurface for Map {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.point_in_map(x, y)
    }

    fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(tile) = self.get_tile_mut(x, y) {
            tile.block(blocked);
        }
    }
}
