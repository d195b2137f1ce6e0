//! Kinematic voxel physics: AABB-versus-grid collision, the gravity/jump
//! movement step, and stepped raycasts for block targeting and placement.
//!
//! Everything here is a plain function over a [`BlockQuery`] view of the world.
//! Nothing owns global state; the caller's simulation context passes the world
//! and the actor in by reference each frame.

pub mod player_physics;
pub mod voxel_collision;
pub mod voxel_raycast;

pub use player_physics::{
    ActorState, GroundState, MoveIntent, PhysicsParams, StepOutcome, clamp_dt,
    player_movement_step, probe_ground,
};
pub use voxel_collision::{BlockQuery, WithBlock, intersects, placement_blocked_by_actor};
pub use voxel_raycast::{
    BlockFace, BlockRay, FaceHit, PlacementHit, RaycastHit, RaycastSettings, cast_block_ray,
    find_placement, find_placement_target, find_targeted_block, resolve_face,
};
