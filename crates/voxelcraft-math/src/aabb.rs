use glam::Vec3;

use crate::BlockCoord;

/// Axis-Aligned Bounding Box in continuous (f32) space.
///
/// Invariant: min.x <= max.x, min.y <= max.y, min.z <= max.z.
/// The constructor enforces this by swapping components if needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create an AABB from two corners. Automatically sorts
    /// components so that min <= max on every axis.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create an AABB from a center point and half-extents.
    pub fn from_center_half_extents(center: Vec3, half: Vec3) -> Self {
        Self::new(center - half, center + half)
    }

    /// The unit cube occupied by a block.
    pub fn unit_cell(coord: BlockCoord) -> Self {
        Self {
            min: coord.min_corner(),
            max: coord.max_corner(),
        }
    }

    /// Returns true if the point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    /// Returns true if the interiors of the two boxes overlap.
    ///
    /// Boxes that only share a face, edge or corner do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Returns the box moved by `offset`.
    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Returns the center point of the AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the size along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Every block cell the box could overlap: `floor(min)..=floor(max)` on each axis.
    pub fn block_range(&self) -> BlockRange {
        BlockRange::new(
            BlockCoord::containing(self.min),
            BlockCoord::containing(self.max),
        )
    }
}

/// Inclusive box of block coordinates, iterated x-fastest then y then z.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockRange {
    pub min: BlockCoord,
    pub max: BlockCoord,
}

impl BlockRange {
    pub fn new(min: BlockCoord, max: BlockCoord) -> Self {
        Self { min, max }
    }

    /// Number of cells covered by the range.
    pub fn len(&self) -> usize {
        let span = |lo: i32, hi: i32| (i64::from(hi) - i64::from(lo) + 1).max(0) as usize;
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y) * span(self.min.z, self.max.z)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = BlockCoord> + '_ {
        let (min, max) = (self.min, self.max);
        (min.z..=max.z).flat_map(move |z| {
            (min.y..=max.y)
                .flat_map(move |y| (min.x..=max.x).map(move |x| BlockCoord::new(x, y, z)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vec3::new(x, y, z), Vec3::new(x + 1.0, y + 1.0, z + 1.0))
    }

    #[test]
    fn test_constructor_auto_sorts() {
        let aabb = Aabb::new(Vec3::splat(10.0), Vec3::ZERO);
        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_from_center_half_extents() {
        let aabb =
            Aabb::from_center_half_extents(Vec3::new(0.5, 0.5, 1.75), Vec3::new(0.3, 0.3, 0.75));
        assert!((aabb.min - Vec3::new(0.2, 0.2, 1.0)).length() < 1e-6);
        assert!((aabb.max - Vec3::new(0.8, 0.8, 2.5)).length() < 1e-6);
    }

    #[test]
    fn test_intersects_overlapping() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(0.5, 0.5, 0.5);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_disjoint() {
        let a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(3.0, 0.0, 0.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_touching_faces_do_not_intersect() {
        let a = unit_at(0.0, 0.0, 0.0);
        assert!(!a.intersects(&unit_at(1.0, 0.0, 0.0)));
        assert!(!a.intersects(&unit_at(0.0, 0.0, 1.0)));
        assert!(!a.intersects(&unit_at(1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_contains_point_on_edge() {
        let aabb = unit_at(0.0, 0.0, 0.0);
        assert!(aabb.contains_point(Vec3::ZERO));
        assert!(aabb.contains_point(Vec3::ONE));
        assert!(!aabb.contains_point(Vec3::new(1.5, 0.5, 0.5)));
    }

    #[test]
    fn test_unit_cell_matches_coord() {
        let cell = Aabb::unit_cell(BlockCoord::new(2, 3, -1));
        assert_eq!(cell.min, Vec3::new(2.0, 3.0, -1.0));
        assert_eq!(cell.max, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(cell.size(), Vec3::ONE);
    }

    #[test]
    fn test_translated_and_center() {
        let aabb = unit_at(0.0, 0.0, 0.0).translated(Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(aabb.center(), Vec3::new(0.5, 0.5, 2.5));
        assert_eq!(aabb.half_extents(), Vec3::splat(0.5));
    }

    #[test]
    fn test_block_range_covers_floor_to_floor() {
        let aabb = Aabb::new(Vec3::new(0.2, -0.3, 1.0), Vec3::new(0.8, 0.3, 2.5));
        let range = aabb.block_range();
        assert_eq!(range.min, BlockCoord::new(0, -1, 1));
        assert_eq!(range.max, BlockCoord::new(0, 0, 2));
        assert_eq!(range.len(), 4);

        let cells: Vec<_> = range.iter().collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&BlockCoord::new(0, -1, 1)));
        assert!(cells.contains(&BlockCoord::new(0, 0, 2)));
    }

    #[test]
    fn test_empty_block_range() {
        let range = BlockRange::new(BlockCoord::new(1, 0, 0), BlockCoord::new(0, 0, 0));
        assert!(range.is_empty());
        assert_eq!(range.iter().count(), 0);
    }
}
