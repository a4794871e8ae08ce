//! Rooms and room placement
//!
//! Every terminal region of the partition tree receives exactly one room,
//! shaped by the selected placement policy.

use rand::Rng;

use super::region::Region;
use crate::error::GenerationError;
use crate::world::{Position, TileSurface};

/// Largest inset applied on the top/left side in jittered mode
const MAX_JITTER: i32 = 3;

/// A rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub region: Region,
}

impl Room {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn center(&self) -> Position {
        self.region.center()
    }

    pub fn width(&self) -> i32 {
        self.region.width
    }

    pub fn height(&self) -> i32 {
        self.region.height
    }
}

/// How a room is shaped inside its region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPlacement {
    /// The room covers its whole region, reaching one tile up and left into
    /// the neighbouring region so adjacent rooms share a wall
    Fill,
    /// The room is inset by a random margin on every side
    Jittered,
}

impl RoomPlacement {
    pub fn from_fill(fill: bool) -> Self {
        if fill {
            RoomPlacement::Fill
        } else {
            RoomPlacement::Jittered
        }
    }

    /// Create the room for a terminal region
    ///
    /// `bounds` is the root region; fill mode only grows a room across an
    /// edge that is not the outer edge of the map.
    pub fn place<R: Rng + ?Sized>(
        self,
        region: &Region,
        bounds: &Region,
        rng: &mut R,
    ) -> Result<Room, GenerationError> {
        let room = match self {
            RoomPlacement::Fill => fill_room(region, bounds)?,
            RoomPlacement::Jittered => jittered_room(region, rng)?,
        };
        log::debug!("{:?} room {:?} in region {:?}", self, room.region, region);
        Ok(room)
    }
}

fn fill_room(region: &Region, bounds: &Region) -> Result<Room, GenerationError> {
    let (mut x, mut y, mut width, mut height) = (region.x, region.y, region.width, region.height);
    if x > bounds.x {
        x -= 1;
        width += 1;
    }
    if y > bounds.y {
        y -= 1;
        height += 1;
    }
    Ok(Room::new(Region::try_new(x, y, width, height)?))
}

/// Regions of at least 7 tiles per side draw from the full jitter ranges;
/// smaller ones have the ranges narrowed so the room keeps at least one tile.
fn jittered_room<R: Rng + ?Sized>(region: &Region, rng: &mut R) -> Result<Room, GenerationError> {
    let dx = rng.gen_range(0..=MAX_JITTER.min(region.width - 1));
    let dy = rng.gen_range(0..=MAX_JITTER.min(region.height - 1));
    let width = rng.gen_range((region.width - MAX_JITTER).max(dx + 1)..=region.width) - dx;
    let height = rng.gen_range((region.height - MAX_JITTER).max(dy + 1)..=region.height) - dy;
    Ok(Room::new(Region::try_new(
        region.x + dx,
        region.y + dy,
        width,
        height,
    )?))
}

/// Paint a room: its outer ring becomes wall, everything inside becomes floor
pub fn carve_room<S: TileSurface + ?Sized>(
    surface: &mut S,
    room: &Room,
) -> Result<(), GenerationError> {
    let region = &room.region;
    for y in region.y..region.y2() {
        for x in region.x..region.x2() {
            if !surface.in_bounds(x, y) {
                return Err(GenerationError::OutOfBounds { x, y });
            }
            surface.set_blocked(x, y, region.is_border(x, y));
        }
    }
    Ok(())
}
