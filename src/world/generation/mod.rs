//! Procedural map generation
//!
//! Binary space partitioning dungeons: the map is cut into a tree of
//! regions, each leaf gets a room, and rooms are chained together by
//! corridors in tree order.

pub mod region;
pub mod bsp;
pub mod rooms;
pub mod corridors;
pub mod options;

pub use bsp::{collect_rooms, Partition, PartitionNode, SplitAxis};
pub use corridors::{plan_corridors, route_corridors, Corridor, Segment};
pub use options::{GeneratorOptions, DEFAULT_MIN_LEAF_SIZE};
pub use region::Region;
pub use rooms::{carve_room, Room, RoomPlacement};

use rand::Rng;

use crate::error::GenerationError;
use crate::world::{Map, Position, TileSurface};

/// What a generation run placed on the surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Rooms in traversal order
    pub rooms: Vec<Room>,
    /// One corridor per consecutive pair of rooms
    pub corridors: Vec<Corridor>,
}

impl Layout {
    /// First room in traversal order, a natural start point
    pub fn first_room(&self) -> Option<&Room> {
        self.rooms.first()
    }

    /// Last room in traversal order, a natural exit point
    pub fn last_room(&self) -> Option<&Room> {
        self.rooms.last()
    }
}

/// A generated map together with its layout
#[derive(Debug, Clone)]
pub struct Dungeon {
    pub map: Map,
    pub layout: Layout,
}

impl Dungeon {
    /// Text view: `#` for blocked tiles, `.` for open ones
    pub fn render(&self) -> String {
        self.map.render()
    }
}

/// Runs the split, place, paint and route pipeline
#[derive(Debug, Clone, Copy, Default)]
pub struct DungeonBuilder {
    options: GeneratorOptions,
}

impl DungeonBuilder {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generate onto a fresh map of the given size
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: i32,
        height: i32,
        rng: &mut R,
    ) -> Result<Dungeon, GenerationError> {
        if width < 1 || height < 1 {
            return Err(GenerationError::InvalidDimension { width, height });
        }
        let mut map = Map::new(width, height);
        let layout = self.generate_into(&mut map, rng)?;
        Ok(Dungeon { map, layout })
    }

    /// Repaint an existing surface with a new dungeon
    ///
    /// Every cell ends up blocked except room interiors and corridors. Each
    /// call builds a new tree; nothing from earlier runs is reused.
    pub fn generate_into<S, R>(&self, surface: &mut S, rng: &mut R) -> Result<Layout, GenerationError>
    where
        S: TileSurface + ?Sized,
        R: Rng + ?Sized,
    {
        self.options.validate()?;
        let (width, height) = (surface.width(), surface.height());
        if width < 1 || height < 1 {
            return Err(GenerationError::InvalidDimension { width, height });
        }
        let bounds = Region::new(0, 0, width, height);

        let mut tree = Partition::new(bounds);
        if !tree.split(self.options.min_leaf_size, rng) {
            log::debug!(
                "{}x{} is too small to split at min_leaf_size {}",
                width,
                height,
                self.options.min_leaf_size
            );
        }
        log::debug!(
            "Partitioned {}x{} into {} leaves, depth {}",
            width,
            height,
            tree.leaf_count(),
            tree.depth()
        );

        let placement = RoomPlacement::from_fill(self.options.fill);
        let tree = tree.place_rooms(placement, &bounds, rng)?;
        let rooms = collect_rooms(&tree);

        let corridors = plan_corridors(&rooms, rng);

        // Nothing is written until every cell is known to be addressable
        for room in &rooms {
            check_in_bounds(surface, room.region.cells())?;
        }
        for corridor in &corridors {
            check_in_bounds(surface, corridor.cells())?;
        }

        surface.fill_blocked(true);
        for room in &rooms {
            carve_room(surface, room)?;
        }
        for corridor in &corridors {
            corridor.carve(surface)?;
        }

        log::info!(
            "Generated {}x{} dungeon ({:?}): {} rooms, {} corridors",
            width,
            height,
            placement,
            rooms.len(),
            corridors.len()
        );
        Ok(Layout { rooms, corridors })
    }
}

fn check_in_bounds<S, I>(surface: &S, cells: I) -> Result<(), GenerationError>
where
    S: TileSurface + ?Sized,
    I: IntoIterator<Item = Position>,
{
    match cells.into_iter().find(|c| !surface.in_bounds(c.x, c.y)) {
        Some(cell) => Err(GenerationError::OutOfBounds {
            x: cell.x,
            y: cell.y,
        }),
        None => Ok(()),
    }
}

/// Generate a dungeon of the given size with the given options
pub fn generate<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    options: GeneratorOptions,
    rng: &mut R,
) -> Result<Dungeon, GenerationError> {
    DungeonBuilder::new(options).generate(width, height, rng)
}
