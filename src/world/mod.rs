//! World module
//!
//! Contains the map, tiles, and procedural generation.

pub mod map;
pub mod tile;
pub mod generation;

pub use map::{Map, TileSurface};
pub use tile::Tile;

/// A cell coordinate on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
