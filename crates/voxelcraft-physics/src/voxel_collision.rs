//! AABB-versus-voxel collision queries.
//!
//! The actor's box is tested against every unit cell it could touch
//! (`floor(min)..=floor(max)` per axis). Overlap is open-interval: boxes that
//! only share a face are not colliding, which is what lets an actor rest
//! exactly on top of a block.

use glam::Vec3;
use voxelcraft_math::{Aabb, BlockCoord};
use voxelcraft_voxel::VoxelWorld;

use crate::player_physics::ActorState;

/// Read-only occupancy lookup used by collision and raycasts.
pub trait BlockQuery {
    /// Returns `true` if a solid block fills `coord`.
    fn is_solid(&self, coord: BlockCoord) -> bool;

    /// A view of this world with one extra solid cell, without touching the world itself.
    fn with_block(&self, extra: BlockCoord) -> WithBlock<'_, Self>
    where
        Self: Sized,
    {
        WithBlock { base: self, extra }
    }
}

impl BlockQuery for VoxelWorld {
    fn is_solid(&self, coord: BlockCoord) -> bool {
        self.is_occupied(coord)
    }
}

/// Hypothetical world: `base` plus a single additional solid cell.
///
/// Borrowing `base` immutably guarantees no reader ever observes the extra cell
/// in the real world.
#[derive(Clone, Copy, Debug)]
pub struct WithBlock<'a, W: ?Sized> {
    pub base: &'a W,
    pub extra: BlockCoord,
}

impl<W: BlockQuery + ?Sized> BlockQuery for WithBlock<'_, W> {
    fn is_solid(&self, coord: BlockCoord) -> bool {
        coord == self.extra || self.base.is_solid(coord)
    }
}

/// Returns `true` if a box centred at `center` with `half_extents` overlaps any solid cell.
pub fn intersects<W: BlockQuery + ?Sized>(world: &W, center: Vec3, half_extents: Vec3) -> bool {
    let actor = Aabb::from_center_half_extents(center, half_extents);
    actor
        .block_range()
        .iter()
        .any(|coord| world.is_solid(coord) && actor.intersects(&Aabb::unit_cell(coord)))
}

/// Returns `true` if filling `candidate` would put a block inside the actor.
pub fn placement_blocked_by_actor<W: BlockQuery>(
    world: &W,
    actor: &ActorState,
    candidate: BlockCoord,
) -> bool {
    intersects(&world.with_block(candidate), actor.position, actor.half_extents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxelcraft_voxel::BlockType;

    const HALF: Vec3 = Vec3::new(0.3, 0.3, 0.75);

    fn world_with(blocks: &[(i32, i32, i32)]) -> VoxelWorld {
        let mut world = VoxelWorld::new();
        for &(x, y, z) in blocks {
            world.set(BlockCoord::new(x, y, z), BlockType::Stone);
        }
        world
    }

    #[test]
    fn test_empty_space_never_intersects() {
        let world = world_with(&[]);
        for center in [
            Vec3::ZERO,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::new(-7.3, 12.9, -40.0),
        ] {
            assert!(!intersects(&world, center, HALF));
        }
    }

    #[test]
    fn test_enclosed_by_empty_cells_with_distant_blocks() {
        let world = world_with(&[(5, 5, 5), (-5, 0, 0)]);
        assert!(!intersects(&world, Vec3::new(0.5, 0.5, 1.0), HALF));
    }

    #[test]
    fn test_overlap_detected() {
        let world = world_with(&[(0, 0, 0)]);
        assert!(intersects(&world, Vec3::new(0.5, 0.5, 1.5), HALF));
    }

    #[test]
    fn test_resting_on_top_face_is_not_collision() {
        let world = world_with(&[(0, 0, 0)]);
        // Bottom of the box is exactly at z = 1.0, the block's top face.
        assert!(!intersects(&world, Vec3::new(0.5, 0.5, 1.75), HALF));
    }

    #[test]
    fn test_touching_side_face_is_not_collision() {
        let world = world_with(&[(1, 0, 0)]);
        let half = Vec3::new(0.25, 0.25, 0.75);
        // Max x of the box is exactly 1.0.
        assert!(!intersects(&world, Vec3::new(0.75, 0.5, 0.75), half));
        // A hair further and it overlaps.
        assert!(intersects(&world, Vec3::new(0.76, 0.5, 0.75), half));
    }

    #[test]
    fn test_box_spanning_several_cells() {
        let world = world_with(&[(1, 1, 2)]);
        // Box straddles the corner between four columns.
        assert!(intersects(&world, Vec3::new(1.0, 1.0, 2.5), HALF));
        assert!(!intersects(&world, Vec3::new(0.5, 0.5, 2.5), HALF));
    }

    #[test]
    fn test_negative_coordinates() {
        let world = world_with(&[(-1, -1, -1)]);
        assert!(intersects(&world, Vec3::new(-0.5, -0.5, -0.5), HALF));
        assert!(!intersects(&world, Vec3::new(-0.5, -0.5, 0.75), HALF));
    }

    #[test]
    fn test_hypothetical_block_does_not_mutate_world() {
        let world = world_with(&[(0, 0, 0)]);
        let candidate = BlockCoord::new(0, 0, 1);
        let view = world.with_block(candidate);

        assert!(view.is_solid(candidate));
        assert!(view.is_solid(BlockCoord::new(0, 0, 0)));
        assert!(!world.is_occupied(candidate));
        assert_eq!(world.len(), 1);
        assert_eq!(world.events().len(), 1);
    }

    #[test]
    fn test_placement_into_actor_is_blocked() {
        let world = world_with(&[(0, 0, 0)]);
        let actor = ActorState::new(Vec3::new(0.5, 0.5, 1.75), 0.6, 1.5);

        assert!(placement_blocked_by_actor(&world, &actor, BlockCoord::new(0, 0, 1)));
        assert!(placement_blocked_by_actor(&world, &actor, BlockCoord::new(0, 0, 2)));
        // Block the actor is standing on is below its feet; an adjacent column is clear.
        assert!(!placement_blocked_by_actor(&world, &actor, BlockCoord::new(1, 0, 1)));
        assert!(!placement_blocked_by_actor(&world, &actor, BlockCoord::new(0, 0, 3)));
    }
}
