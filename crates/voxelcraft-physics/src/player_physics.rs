//! Player character physics: a kinematic box moved by input, gravity and
//! axis-separated collision against the voxel grid.
//!
//! Each frame runs the same fixed sequence: jump, gravity, horizontal intent,
//! per-axis movement (X, then Y, then Z), ground probe, void recovery. The
//! axis order is deliberate and asymmetric: at a corner the X move is resolved
//! before Y, which decides which wall the actor slides along.

use glam::{Quat, Vec3};
use tracing::{trace, warn};
use voxelcraft_math::{Aabb, BlockCoord};

use crate::voxel_collision::{BlockQuery, intersects};

/// Downward acceleration in blocks/s².
pub const GRAVITY: f32 = 20.0;
/// Instant upward velocity applied by a jump, in blocks/s.
pub const JUMP_SPEED: f32 = 8.0;
/// Terminal fall speed in blocks/s.
pub const MAX_FALL_SPEED: f32 = 20.0;
/// Horizontal walk speed in blocks/s.
pub const WALK_SPEED: f32 = 4.0;
/// Largest time step a single frame may integrate.
pub const MAX_DT: f32 = 0.1;
/// How far below the feet the ground probe looks.
pub const GROUND_PROBE: f32 = 0.01;
/// Falling below this height teleports the actor back to spawn.
pub const VOID_FLOOR: f32 = -50.0;
/// Default safe spawn point above the starting platform.
pub const SPAWN_POINT: Vec3 = Vec3::new(0.5, -4.5, 3.0);
/// Player box width (X and Y).
pub const PLAYER_WIDTH: f32 = 0.6;
/// Player box height (Z).
pub const PLAYER_HEIGHT: f32 = 1.5;

/// Slack when deciding which block tops lie at or below the feet.
const SNAP_TOLERANCE: f32 = 1e-4;
const Z_AXIS: usize = 2;

/// Whether the actor is supported by a surface directly beneath it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GroundState {
    #[default]
    Airborne,
    Grounded,
}

/// Tunable constants for [`player_movement_step`].
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f32,
    pub jump_speed: f32,
    pub max_fall_speed: f32,
    pub move_speed: f32,
    pub max_dt: f32,
    pub ground_probe: f32,
    pub void_floor: f32,
    pub spawn_point: Vec3,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            move_speed: WALK_SPEED,
            max_dt: MAX_DT,
            ground_probe: GROUND_PROBE,
            void_floor: VOID_FLOOR,
            spawn_point: SPAWN_POINT,
        }
    }
}

/// Kinematic state of the player's collision box.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorState {
    /// Center of the bounding box.
    pub position: Vec3,
    /// Velocity in blocks/s (Z up).
    pub velocity: Vec3,
    /// `(width/2, width/2, height/2)`.
    pub half_extents: Vec3,
    pub ground: GroundState,
}

impl ActorState {
    /// Creates an airborne actor at rest.
    pub fn new(position: Vec3, width: f32, height: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            half_extents: Vec3::new(width * 0.5, width * 0.5, height * 0.5),
            ground: GroundState::Airborne,
        }
    }

    pub fn on_ground(&self) -> bool {
        self.ground == GroundState::Grounded
    }

    pub fn width(&self) -> f32 {
        self.half_extents.x * 2.0
    }

    pub fn height(&self) -> f32 {
        self.half_extents.z * 2.0
    }

    /// Height of the soles of the actor's feet.
    pub fn bottom(&self) -> f32 {
        self.position.z - self.half_extents.z
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.half_extents)
    }

    /// Teleports to `position` with zero velocity, airborne.
    pub fn reset_to(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.ground = GroundState::Airborne;
    }
}

/// Movement keys held this frame plus the actor's facing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Facing around the vertical axis in radians; zero faces +Y, positive turns toward -X.
    pub yaw: f32,
}

impl MoveIntent {
    /// Unit horizontal direction the keys ask for in world space, or zero.
    ///
    /// Opposing keys cancel. Diagonals are normalised so they are no faster
    /// than a single key.
    pub fn wish_direction(&self) -> Vec3 {
        let facing = Quat::from_rotation_z(self.yaw);
        let forward = facing * Vec3::Y;
        let right = facing * Vec3::X;

        let mut direction = Vec3::ZERO;
        if self.forward {
            direction += forward;
        }
        if self.back {
            direction -= forward;
        }
        if self.right {
            direction += right;
        }
        if self.left {
            direction -= right;
        }
        Vec3::new(direction.x, direction.y, 0.0).normalize_or_zero()
    }
}

/// What happened during one [`player_movement_step`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepOutcome {
    /// The time step actually integrated after clamping.
    pub dt: f32,
    pub jumped: bool,
    /// The actor went from airborne to grounded this frame.
    pub landed: bool,
    /// The actor fell below the void floor and was teleported to spawn.
    pub respawned: bool,
}

/// Clamps a frame time into `0.0..=max_dt`. Non-finite or negative input, or a
/// non-positive `max_dt`, integrates nothing.
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        0.0
    } else {
        dt.min(max_dt).max(0.0)
    }
}

/// Advances the actor by one frame.
///
/// Never fails: every branch settles the actor into [`GroundState::Airborne`]
/// or [`GroundState::Grounded`].
pub fn player_movement_step<W: BlockQuery + ?Sized>(
    actor: &mut ActorState,
    world: &W,
    intent: &MoveIntent,
    params: &PhysicsParams,
    dt: f32,
) -> StepOutcome {
    let dt = clamp_dt(dt, params.max_dt);
    let mut outcome = StepOutcome {
        dt,
        ..Default::default()
    };

    if intent.jump && actor.on_ground() {
        actor.velocity.z = params.jump_speed;
        actor.ground = GroundState::Airborne;
        outcome.jumped = true;
    }

    if !actor.on_ground() {
        actor.velocity.z = (actor.velocity.z - params.gravity * dt).max(-params.max_fall_speed);
    }

    let walk = intent.wish_direction() * params.move_speed;
    actor.velocity.x = walk.x;
    actor.velocity.y = walk.y;

    let was_airborne = !actor.on_ground();
    move_with_collision(actor, world, dt);
    update_ground_state(actor, world, params.ground_probe);
    outcome.landed = was_airborne && actor.on_ground();

    if actor.position.z < params.void_floor {
        warn!(
            z = actor.position.z,
            spawn = ?params.spawn_point,
            "actor fell out of the world, respawning"
        );
        actor.reset_to(params.spawn_point);
        outcome.respawned = true;
    }

    outcome
}

/// Returns `true` if the actor would collide after being nudged `distance` downward.
pub fn probe_ground<W: BlockQuery + ?Sized>(actor: &ActorState, world: &W, distance: f32) -> bool {
    intersects(
        world,
        actor.position - Vec3::Z * distance,
        actor.half_extents,
    )
}

/// Moves along X, Y, then Z, committing each axis only if it stays clear.
///
/// A blocked downward Z move snaps the actor onto the block it hit.
fn move_with_collision<W: BlockQuery + ?Sized>(actor: &mut ActorState, world: &W, dt: f32) {
    for axis in 0..3 {
        let mut tentative = actor.position;
        tentative[axis] += actor.velocity[axis] * dt;

        if !intersects(world, tentative, actor.half_extents) {
            actor.position = tentative;
            continue;
        }

        if axis == Z_AXIS && actor.velocity.z < 0.0 {
            snap_to_support(actor, world, tentative.z - actor.half_extents.z);
        }
        actor.velocity[axis] = 0.0;
    }
}

fn update_ground_state<W: BlockQuery + ?Sized>(actor: &mut ActorState, world: &W, probe: f32) {
    // Rising actors are never grounded, even while still inside the probe gap.
    if actor.velocity.z > 0.0 || !probe_ground(actor, world, probe) {
        actor.ground = GroundState::Airborne;
        return;
    }

    if actor.ground == GroundState::Airborne {
        snap_to_support(actor, world, actor.bottom() - probe);
    }
    actor.ground = GroundState::Grounded;
    actor.velocity.z = 0.0;
}

/// Places the actor's feet exactly on the highest block top between its
/// current feet and `lowest_bottom`.
fn snap_to_support<W: BlockQuery + ?Sized>(
    actor: &mut ActorState,
    world: &W,
    lowest_bottom: f32,
) {
    let Some(top) = support_top(world, &actor.aabb(), lowest_bottom) else {
        return;
    };

    let snapped = Vec3::new(actor.position.x, actor.position.y, top + actor.half_extents.z);
    if intersects(world, snapped, actor.half_extents) {
        return;
    }

    trace!(from = actor.position.z, to = snapped.z, "snapped onto support");
    actor.position = snapped;
    actor.ground = GroundState::Grounded;
}

/// Highest top face of a solid block under `footprint` whose top is no higher
/// than the footprint's bottom and no lower than `lowest_bottom`.
fn support_top<W: BlockQuery + ?Sized>(
    world: &W,
    footprint: &Aabb,
    lowest_bottom: f32,
) -> Option<f32> {
    let highest_level = (footprint.min.z + SNAP_TOLERANCE).floor() as i32 - 1;
    let lowest_level = lowest_bottom.floor() as i32;
    let columns = footprint.block_range();

    (lowest_level..=highest_level)
        .rev()
        .find(|&z| {
            (columns.min.y..=columns.max.y).any(|y| {
                (columns.min.x..=columns.max.x).any(|x| {
                    let coord = BlockCoord::new(x, y, z);
                    world.is_solid(coord) && overlaps_horizontally(footprint, coord)
                })
            })
        })
        .map(|z| (z + 1) as f32)
}

fn overlaps_horizontally(footprint: &Aabb, coord: BlockCoord) -> bool {
    let cell = Aabb::unit_cell(coord);
    cell.min.x < footprint.max.x
        && cell.max.x > footprint.min.x
        && cell.min.y < footprint.max.y
        && cell.max.y > footprint.min.y
}


#[cfg(test)]
#[path = "player_physics_tests.rs"]
mod scenario_tests;
