use glam::{IVec3, Vec3};
use std::fmt;
use std::ops::{Add, Sub};

/// Integer address of a unit voxel cell.
///
/// The cell at `(x, y, z)` covers `[x, x+1) × [y, y+1) × [z, z+1)`.
/// Z is the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockCoord {
    /// Creates a new BlockCoord with the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the cell containing `point`, flooring each component.
    ///
    /// Points exactly on a cell boundary belong to the cell above/right of it.
    pub fn containing(point: Vec3) -> Self {
        Self::new(
            point.x.floor() as i32,
            point.y.floor() as i32,
            point.z.floor() as i32,
        )
    }

    /// Returns the coordinate shifted by `delta` cells.
    pub fn offset(self, delta: IVec3) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.z + delta.z)
    }

    /// Minimum corner of the cell in continuous space.
    pub fn min_corner(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    /// Maximum corner of the cell in continuous space.
    pub fn max_corner(self) -> Vec3 {
        self.min_corner() + Vec3::ONE
    }

    /// Geometric center of the cell.
    pub fn center(self) -> Vec3 {
        self.min_corner() + Vec3::splat(0.5)
    }

    /// Returns true if `point` lies inside the closed unit cube of this cell.
    pub fn contains_point(self, point: Vec3) -> bool {
        let min = self.min_corner();
        let max = self.max_corner();
        point.x >= min.x
            && point.x <= max.x
            && point.y >= min.y
            && point.y <= max.y
            && point.z >= min.z
            && point.z <= max.z
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for BlockCoord {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockCoord> for IVec3 {
    fn from(c: BlockCoord) -> IVec3 {
        c.as_ivec3()
    }
}

impl From<(i32, i32, i32)> for BlockCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl Add<IVec3> for BlockCoord {
    type Output = BlockCoord;

    fn add(self, rhs: IVec3) -> Self::Output {
        self.offset(rhs)
    }
}

impl Sub<BlockCoord> for BlockCoord {
    type Output = IVec3;

    fn sub(self, rhs: BlockCoord) -> Self::Output {
        IVec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for BlockCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing_floors_positive() {
        assert_eq!(
            BlockCoord::containing(Vec3::new(2.5, 3.99, 0.0)),
            BlockCoord::new(2, 3, 0)
        );
    }

    #[test]
    fn test_containing_floors_negative() {
        // Truncation would give 0 here; flooring must give -1.
        assert_eq!(
            BlockCoord::containing(Vec3::new(-0.25, -1.0, -3.5)),
            BlockCoord::new(-1, -1, -4)
        );
    }

    #[test]
    fn test_boundary_point_belongs_to_upper_cell() {
        assert_eq!(
            BlockCoord::containing(Vec3::new(1.0, 1.0, 1.0)),
            BlockCoord::new(1, 1, 1)
        );
    }

    #[test]
    fn test_offset_and_sub_are_inverse() {
        let a = BlockCoord::new(4, -2, 7);
        let b = a + IVec3::new(0, 0, 1);
        assert_eq!(b, BlockCoord::new(4, -2, 8));
        assert_eq!(b - a, IVec3::Z);
    }

    #[test]
    fn test_corners_and_center() {
        let c = BlockCoord::new(-1, 0, 2);
        assert_eq!(c.min_corner(), Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(c.max_corner(), Vec3::new(0.0, 1.0, 3.0));
        assert_eq!(c.center(), Vec3::new(-0.5, 0.5, 2.5));
    }

    #[test]
    fn test_contains_point_is_closed() {
        let c = BlockCoord::new(0, 0, 0);
        assert!(c.contains_point(Vec3::ZERO));
        assert!(c.contains_point(Vec3::ONE));
        assert!(c.contains_point(Vec3::new(0.5, 1.0, 0.2)));
        assert!(!c.contains_point(Vec3::new(1.01, 0.5, 0.5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(BlockCoord::new(1, -2, 3).to_string(), "(1, -2, 3)");
    }
}
