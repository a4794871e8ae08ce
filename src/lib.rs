//! BSP dungeon generator
//!
//! Cuts a map into a tree of regions, drops a room into every leaf and
//! chains the rooms together with L-shaped corridors.
//!
//! ```
//! use bsp_dungeon::{generate, GeneratorOptions};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let dungeon = generate(80, 25, GeneratorOptions::default().with_fill(true), &mut rng)?;
//! assert_eq!(dungeon.render().lines().count(), 25);
//! # Ok::<(), bsp_dungeon::GenerationError>(())
//! ```

pub mod error;
pub mod world;

// Re-export commonly used types
pub use error::{ConfigError, GenerationError};
pub use world::generation::{
    generate, Corridor, Dungeon, DungeonBuilder, GeneratorOptions, Layout, Region, Room,
};
pub use world::{Map, Position, Tile, TileSurface};
