//! Tile definitions
//!
//! A cell of the dungeon with independent movement and sight blocking.

/// A single tile in the map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub blocks_movement: bool,
    pub blocks_sight: bool,
}

impl Tile {
    pub fn new(blocks_movement: bool, blocks_sight: bool) -> Self {
        Self {
            blocks_movement,
            blocks_sight,
        }
    }

    /// Solid rock or wall
    pub fn wall() -> Self {
        Self::new(true, true)
    }

    /// Open floor
    pub fn floor() -> Self {
        Self::new(false, false)
    }

    /// Set both blocking flags at once
    pub fn block(&mut self, blocked: bool) {
        self.blocks_movement = blocked;
        self.blocks_sight = blocked;
    }

    pub fn is_walkable(&self) -> bool {
        !self.blocks_movement
    }

    pub fn is_transparent(&self) -> bool {
        !self.blocks_sight
    }

    /// Glyph used by the text renderer
    pub fn glyph(&self, block: char, open: char) -> char {
        if self.blocks_sight {
            block
        } else {
            open
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::wall()
    }
}
