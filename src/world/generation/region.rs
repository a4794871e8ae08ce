//! Axis-aligned rectangles used by the partition tree

use crate::error::GenerationError;
use crate::world::Position;

/// A rectangular area of the map
///
/// `x2`/`y2` are exclusive edges: a region of width 3 at `x = 2` covers
/// columns 2, 3 and 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        debug_assert!(width >= 1 && height >= 1, "empty region {}x{}", width, height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a region, rejecting non-positive sizes
    pub fn try_new(x: i32, y: i32, width: i32, height: i32) -> Result<Self, GenerationError> {
        if width < 1 || height < 1 {
            return Err(GenerationError::DegenerateGeometry {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    #[inline]
    pub fn x2(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn y2(&self) -> i32 {
        self.y + self.height
    }

    /// Approximate center, rounded toward the origin
    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }

    /// Overlap test that also counts touching edges
    pub fn intersects(&self, other: &Region) -> bool {
        self.x <= other.x2() && self.x2() >= other.x && self.y <= other.y2() && self.y2() >= other.y
    }

    /// Whether `other` lies entirely inside this region
    pub fn contains(&self, other: &Region) -> bool {
        other.x >= self.x && other.y >= self.y && other.x2() <= self.x2() && other.y2() <= self.y2()
    }

    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x2() && y >= self.y && y < self.y2()
    }

    /// Every cell, row by row
    pub fn cells(&self) -> Vec<Position> {
        (self.y..self.y2())
            .flat_map(|y| (self.x..self.x2()).map(move |x| Position::new(x, y)))
            .collect()
    }

    /// Whether a cell lies on the outermost ring of the region
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.contains_point(x, y)
            && (x == self.x || x == self.x2() - 1 || y == self.y || y == self.y2() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let region = Region::new(2, 3, 5, 4);
        assert_eq!(region.x2(), 7);
        assert_eq!(region.y2(), 7);
        assert_eq!(region.center(), Position::new(4, 5));
        assert_eq!(region.area(), 20);
    }

    #[test]
    fn test_try_new_rejects_empty() {
        assert!(Region::try_new(0, 0, 1, 1).is_ok());
        assert_eq!(
            Region::try_new(4, 5, 0, 3),
            Err(GenerationError::DegenerateGeometry {
                x: 4,
                y: 5,
                width: 0,
                height: 3
            })
        );
        assert!(Region::try_new(0, 0, 3, -1).is_err());
    }

    #[test]
    fn test_intersects_counts_touching_edges() {
        let a = Region::new(0, 0, 5, 5);
        assert!(a.intersects(&Region::new(5, 0, 3, 3)));
        assert!(!a.intersects(&Region::new(6, 0, 3, 3)));
        assert!(a.intersects(&Region::new(1, 1, 1, 1)));
    }

    #[test]
    fn test_contains() {
        let outer = Region::new(0, 0, 10, 10);
        assert!(outer.contains(&Region::new(0, 0, 10, 10)));
        assert!(outer.contains(&Region::new(3, 3, 2, 2)));
        assert!(!outer.contains(&Region::new(8, 8, 3, 2)));
        assert!(outer.contains_point(9, 9));
        assert!(!outer.contains_point(10, 9));
    }

    #[test]
    fn test_cells_row_by_row() {
        let cells = Region::new(1, 2, 2, 2).cells();
        assert_eq!(
            cells,
            vec![
                Position::new(1, 2),
                Position::new(2, 2),
                Position::new(1, 3),
                Position::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_border_cells() {
        let region = Region::new(1, 1, 3, 3);
        assert!(region.is_border(1, 1));
        assert!(region.is_border(3, 2));
        assert!(!region.is_border(2, 2));
        assert!(!region.is_border(0, 0));
    }
}
