//! Binary space partitioning tree
//!
//! A region is split in two along one axis, and each half is split again,
//! until the halves get too small. Splitting, room placement and room
//! collection all walk the tree depth-first, left child before right child,
//! so neighbouring leaves in that order are usually neighbours on the map.

use rand::Rng;

use super::region::Region;
use super::rooms::{Room, RoomPlacement};
use crate::error::GenerationError;

/// Axis a region is cut along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Top and bottom children
    Horizontal,
    /// Left and right children
    Vertical,
}

/// A node of the partition tree
///
/// `T` is what a leaf carries: `()` while the tree is being shaped, then a
/// [`Room`] once rooms have been placed. A node is either a leaf or a branch,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionNode<T = Room> {
    Leaf {
        region: Region,
        room: T,
    },
    Branch {
        region: Region,
        left: Box<PartitionNode<T>>,
        right: Box<PartitionNode<T>>,
    },
}

/// A tree that has been split but has no rooms yet
pub type Partition = PartitionNode<()>;

impl<T> PartitionNode<T> {
    pub fn region(&self) -> &Region {
        match self {
            PartitionNode::Leaf { region, .. } | PartitionNode::Branch { region, .. } => region,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, PartitionNode::Leaf { .. })
    }

    pub fn children(&self) -> Option<(&PartitionNode<T>, &PartitionNode<T>)> {
        match self {
            PartitionNode::Leaf { .. } => None,
            PartitionNode::Branch { left, right, .. } => Some((left, right)),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            PartitionNode::Leaf { .. } => 1,
            PartitionNode::Branch { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of levels below this node (0 for a leaf)
    pub fn depth(&self) -> usize {
        match self {
            PartitionNode::Leaf { .. } => 0,
            PartitionNode::Branch { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Terminal regions in traversal order
    pub fn leaf_regions(&self) -> Vec<Region> {
        let mut regions = Vec::with_capacity(self.leaf_count());
        self.visit_leaves(&mut |region, _| regions.push(*region));
        regions
    }

    fn visit_leaves<'a, F: FnMut(&'a Region, &'a T)>(&'a self, visit: &mut F) {
        match self {
            PartitionNode::Leaf { region, room } => visit(region, room),
            PartitionNode::Branch { left, right, .. } => {
                left.visit_leaves(visit);
                right.visit_leaves(visit);
            }
        }
    }
}

impl PartitionNode<()> {
    /// Create an unsplit root
    pub fn new(region: Region) -> Self {
        PartitionNode::Leaf { region, room: () }
    }

    /// Try to split this node, then split both children, left first
    ///
    /// Returns whether this node was split. Only a leaf can be split; calling
    /// this on a branch does nothing.
    pub fn split<R: Rng + ?Sized>(&mut self, min_leaf_size: i32, rng: &mut R) -> bool {
        debug_assert!(min_leaf_size >= 1, "min_leaf_size must be positive");
        let region = match self {
            PartitionNode::Leaf { region, .. } => *region,
            PartitionNode::Branch { .. } => return false,
        };

        let Some((first, second)) = split_region(&region, min_leaf_size, rng) else {
            return false;
        };

        let mut left = Partition::new(first);
        let mut right = Partition::new(second);
        left.split(min_leaf_size, rng);
        right.split(min_leaf_size, rng);

        *self = PartitionNode::Branch {
            region,
            left: Box::new(left),
            right: Box::new(right),
        };
        true
    }

    /// Give every leaf its room, left first
    ///
    /// `bounds` is the region of the whole map.
    pub fn place_rooms<R: Rng + ?Sized>(
        self,
        placement: RoomPlacement,
        bounds: &Region,
        rng: &mut R,
    ) -> Result<PartitionNode<Room>, GenerationError> {
        match self {
            PartitionNode::Leaf { region, .. } => {
                let room = placement.place(&region, bounds, rng)?;
                Ok(PartitionNode::Leaf { region, room })
            }
            PartitionNode::Branch {
                region,
                left,
                right,
            } => {
                let left = left.place_rooms(placement, bounds, rng)?;
                let right = right.place_rooms(placement, bounds, rng)?;
                Ok(PartitionNode::Branch {
                    region,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            }
        }
    }
}

impl PartitionNode<Room> {
    /// All rooms in traversal order
    pub fn rooms(&self) -> Vec<Room> {
        collect_rooms(self)
    }
}

/// Flatten the rooms of a placed tree, depth-first and left before right
pub fn collect_rooms(tree: &PartitionNode<Room>) -> Vec<Room> {
    let mut rooms = Vec::with_capacity(tree.leaf_count());
    tree.visit_leaves(&mut |_, room| rooms.push(*room));
    rooms
}

/// Pick the axis to cut along
///
/// A region noticeably wider than tall is cut vertically, one noticeably
/// taller than wide horizontally, anything close to square at random.
pub fn choose_axis<R: Rng + ?Sized>(region: &Region, rng: &mut R) -> SplitAxis {
    // width > 1.25 * height, kept in integers
    if region.width * 4 > region.height * 5 {
        SplitAxis::Vertical
    } else if region.height * 4 > region.width * 5 {
        SplitAxis::Horizontal
    } else if rng.gen_bool(0.5) {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    }
}

/// Cut a region in two, or `None` if the chosen axis is too short
///
/// The axis is committed before the size check: a near-square region that
/// picks its short side stays whole even if the other side would fit.
pub fn split_region<R: Rng + ?Sized>(
    region: &Region,
    min_leaf_size: i32,
    rng: &mut R,
) -> Option<(Region, Region)> {
    let axis = choose_axis(region, rng);
    let length = match axis {
        SplitAxis::Horizontal => region.height,
        SplitAxis::Vertical => region.width,
    };

    let split_max = length - min_leaf_size;
    if split_max < min_leaf_size {
        return None;
    }
    let split = rng.gen_range(min_leaf_size..=split_max);

    let halves = match axis {
        SplitAxis::Horizontal => (
            Region::new(region.x, region.y, region.width, split),
            Region::new(region.x, region.y + split, region.width, region.height - split),
        ),
        SplitAxis::Vertical => (
            Region::new(region.x, region.y, split, region.height),
            Region::new(region.x + split, region.y, region.width - split, region.height),
        ),
    };
    Some(halves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn overlaps(a: &Region, b: &Region) -> bool {
        a.x < b.x2() && b.x < a.x2() && a.y < b.y2() && b.y < a.y2()
    }

    fn assert_tiles<T>(node: &PartitionNode<T>) {
        if let Some((left, right)) = node.children() {
            let parent = node.region();
            let (a, b) = (left.region(), right.region());
            assert!(parent.contains(a) && parent.contains(b));
            assert!(!overlaps(a, b), "{:?} overlaps {:?}", a, b);
            assert_eq!(a.area() + b.area(), parent.area());
            assert_tiles(left);
            assert_tiles(right);
        }
    }

    fn split_tree(width: i32, height: i32, min_leaf_size: i32, seed: u64) -> Partition {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut root = Partition::new(Region::new(0, 0, width, height));
        root.split(min_leaf_size, &mut rng);
        root
    }

    #[test]
    fn test_children_tile_parent() {
        for seed in 0..50 {
            let tree = split_tree(80, 25, 9, seed);
            assert!(!tree.is_leaf());
            assert_tiles(&tree);
        }
    }

    #[test]
    fn test_leaves_respect_min_size() {
        for seed in 0..50 {
            let tree = split_tree(120, 60, 10, seed);
            for region in tree.leaf_regions() {
                assert!(region.width >= 10 && region.height >= 10, "{:?}", region);
            }
        }
    }

    #[test]
    fn test_split_terminates_with_min_size_one() {
        for seed in 0..5 {
            let tree = split_tree(40, 17, 1, seed);
            assert_tiles(&tree);
            let total: i32 = tree.leaf_regions().iter().map(Region::area).sum();
            assert_eq!(total, 40 * 17);
        }
    }

    #[test]
    fn test_small_region_is_not_split() {
        // 20 - 11 = 9 is below the minimum on either axis
        let mut rng = StdRng::seed_from_u64(0);
        let mut root = Partition::new(Region::new(0, 0, 20, 20));
        assert!(!root.split(11, &mut rng));
        assert!(root.is_leaf());
        assert_eq!(root.leaf_count(), 1);
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn test_split_on_branch_is_noop() {
        let mut tree = split_tree(80, 25, 11, 4);
        let before = tree.clone();
        let mut rng = StdRng::seed_from_u64(99);
        assert!(!tree.split(11, &mut rng));
        assert_eq!(tree, before);
    }

    #[test]
    fn test_long_axis_is_forced() {
        let mut rng = StdRng::seed_from_u64(5);
        let wide = Region::new(0, 0, 40, 10);
        let tall = Region::new(0, 0, 10, 40);
        for _ in 0..20 {
            assert_eq!(choose_axis(&wide, &mut rng), SplitAxis::Vertical);
            assert_eq!(choose_axis(&tall, &mut rng), SplitAxis::Horizontal);
        }
        // Exactly 1.25 is still "near square"
        let edge = Region::new(0, 0, 25, 20);
        let axes: Vec<_> = (0..64).map(|_| choose_axis(&edge, &mut rng)).collect();
        assert!(axes.contains(&SplitAxis::Vertical));
        assert!(axes.contains(&SplitAxis::Horizontal));
    }

    #[test]
    fn test_split_offset_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let region = Region::new(3, 4, 50, 12);
        for _ in 0..200 {
            let (left, right) = split_region(&region, 11, &mut rng).unwrap();
            assert!((11..=39).contains(&left.width));
            assert_eq!(left.x, 3);
            assert_eq!(right.x, left.x2());
            assert_eq!(left.height, 12);
            assert_eq!(right.height, 12);
        }
    }

    #[test]
    fn test_every_leaf_gets_one_room() {
        let bounds = Region::new(0, 0, 80, 25);
        for fill in [true, false] {
            let mut rng = StdRng::seed_from_u64(21);
            let mut root = Partition::new(bounds);
            root.split(9, &mut rng);
            let leaves = root.leaf_count();

            let placed = root
                .place_rooms(RoomPlacement::from_fill(fill), &bounds, &mut rng)
                .unwrap();
            assert_eq!(placed.leaf_count(), leaves);
            assert_eq!(placed.rooms().len(), leaves);
            assert_tiles(&placed);
        }
    }

    #[test]
    fn test_rooms_follow_leaf_order() {
        let bounds = Region::new(0, 0, 100, 40);
        let mut rng = StdRng::seed_from_u64(8);
        let mut root = Partition::new(bounds);
        root.split(10, &mut rng);
        let regions = root.leaf_regions();

        let placed = root
            .place_rooms(RoomPlacement::Jittered, &bounds, &mut rng)
            .unwrap();
        let rooms = collect_rooms(&placed);
        assert_eq!(rooms.len(), regions.len());
        for (room, region) in rooms.iter().zip(&regions) {
            assert!(region.contains(&room.region));
        }
    }

    #[test]
    fn test_fill_rooms_reach_one_tile_into_neighbours() {
        let bounds = Region::new(0, 0, 80, 25);
        let mut rng = StdRng::seed_from_u64(2);
        let mut root = Partition::new(bounds);
        root.split(11, &mut rng);
        let placed = root.place_rooms(RoomPlacement::Fill, &bounds, &mut rng).unwrap();

        placed.visit_leaves(&mut |region, room| {
            let grown = Region::new(
                (region.x - 1).max(0),
                (region.y - 1).max(0),
                region.x2() - (region.x - 1).max(0),
                region.y2() - (region.y - 1).max(0),
            );
            assert!(grown.contains(&room.region));
            assert!(room.region.contains(region));
        });
    }
}
