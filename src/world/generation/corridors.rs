//! Corridor routing
//!
//! Each room is joined to the room before it by an L-shaped tunnel through
//! both centers. Only consecutive rooms are linked, so the room order decides
//! the corridor layout.

use rand::Rng;

use super::rooms::Room;
use crate::error::GenerationError;
use crate::world::{Position, TileSurface};

/// A straight, inclusive run of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// Columns `x1..=x2` (either order) along row `y`
    Horizontal { x1: i32, x2: i32, y: i32 },
    /// Rows `y1..=y2` (either order) along column `x`
    Vertical { y1: i32, y2: i32, x: i32 },
}

impl Segment {
    /// Cells covered, lowest coordinate first
    pub fn cells(&self) -> Vec<Position> {
        match *self {
            Segment::Horizontal { x1, x2, y } => {
                (x1.min(x2)..=x1.max(x2)).map(|x| Position::new(x, y)).collect()
            }
            Segment::Vertical { y1, y2, x } => {
                (y1.min(y2)..=y1.max(y2)).map(|y| Position::new(x, y)).collect()
            }
        }
    }

    /// Mark every cell passable
    pub fn carve<S: TileSurface + ?Sized>(&self, surface: &mut S) -> Result<(), GenerationError> {
        for cell in self.cells() {
            if !surface.in_bounds(cell.x, cell.y) {
                return Err(GenerationError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                });
            }
            surface.set_blocked(cell.x, cell.y, false);
        }
        Ok(())
    }
}

/// An L-shaped tunnel between two room centers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    pub from: Position,
    pub to: Position,
    /// Where the two segments meet
    pub elbow: Position,
    pub segments: [Segment; 2],
}

impl Corridor {
    /// Horizontal along the start row, then vertical down the end column
    pub fn horizontal_first(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            elbow: Position::new(to.x, from.y),
            segments: [
                Segment::Horizontal {
                    x1: from.x,
                    x2: to.x,
                    y: from.y,
                },
                Segment::Vertical {
                    y1: from.y,
                    y2: to.y,
                    x: to.x,
                },
            ],
        }
    }

    /// Vertical along the start column, then horizontal across the end row
    pub fn vertical_first(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            elbow: Position::new(from.x, to.y),
            segments: [
                Segment::Vertical {
                    y1: from.y,
                    y2: to.y,
                    x: from.x,
                },
                Segment::Horizontal {
                    x1: from.x,
                    x2: to.x,
                    y: to.y,
                },
            ],
        }
    }

    pub fn cells(&self) -> Vec<Position> {
        self.segments.iter().flat_map(Segment::cells).collect()
    }

    pub fn carve<S: TileSurface + ?Sized>(&self, surface: &mut S) -> Result<(), GenerationError> {
        for segment in &self.segments {
            segment.carve(surface)?;
        }
        Ok(())
    }
}

/// Pick an L-shape for each consecutive pair of rooms without painting
///
/// Fewer than two rooms produce no corridors.
pub fn plan_corridors<R: Rng + ?Sized>(rooms: &[Room], rng: &mut R) -> Vec<Corridor> {
    rooms
        .windows(2)
        .map(|pair| {
            let prev_center = pair[0].center();
            let new_center = pair[1].center();
            if rng.gen_bool(0.5) {
                Corridor::horizontal_first(prev_center, new_center)
            } else {
                Corridor::vertical_first(prev_center, new_center)
            }
        })
        .collect()
}

/// Join each room to the previous one and paint the tunnels
pub fn route_corridors<S, R>(
    surface: &mut S,
    rooms: &[Room],
    rng: &mut R,
) -> Result<Vec<Corridor>, GenerationError>
where
    S: TileSurface + ?Sized,
    R: Rng + ?Sized,
{
    let corridors = plan_corridors(rooms, rng);
    for corridor in &corridors {
        corridor.carve(surface)?;
        log::trace!(
            "corridor {:?} -> {:?} via {:?}",
            corridor.from,
            corridor.to,
            corridor.elbow
        );
    }
    Ok(corridors)
}
