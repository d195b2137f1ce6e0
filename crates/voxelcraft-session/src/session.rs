//! One play-through: world, player and the per-frame update.

use glam::Vec3;
use tracing::{debug, info, warn};
use voxelcraft_config::Config;
use voxelcraft_input::FrameInput;
use voxelcraft_math::BlockCoord;
use voxelcraft_physics::player_physics::MAX_DT;
use voxelcraft_physics::voxel_raycast::{COARSE_STEP, FINE_STEP};
use voxelcraft_physics::{
    PhysicsParams, PlacementHit, RaycastSettings, StepOutcome, cast_block_ray, find_placement,
    placement_blocked_by_actor, player_movement_step,
};
use voxelcraft_player::{BodyDimensions, FirstPersonLook, Player};
use voxelcraft_voxel::{BlockType, VoxelWorld};

use crate::hud::HudStatus;
use crate::layout::build_default_world;

/// Result of trying to place the selected block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    Placed(BlockCoord),
    /// Nothing in reach, or the cell next to the struck face is occupied.
    NoTarget,
    /// The new block would overlap the player.
    BlockedByPlayer(BlockCoord),
}

/// What happened during one [`Session::frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub step: StepOutcome,
    pub destroyed: Option<(BlockCoord, BlockType)>,
    pub placed: Option<PlaceOutcome>,
}

/// Block under the crosshair and where a new block would go.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Target {
    block: BlockCoord,
    placement: Option<PlacementHit>,
}

/// The simulation context for an active game.
///
/// Owns the world and the player; everything runs on the caller's thread,
/// one [`frame`](Self::frame) at a time.
#[derive(Debug)]
pub struct Session {
    world: VoxelWorld,
    player: Player,
    params: PhysicsParams,
    raycast: RaycastSettings,
    reach: f32,
    selected: BlockType,
    target: Option<Target>,
    show_target_info: bool,
}

impl Session {
    /// Builds the starting world and puts the player at the spawn point.
    pub fn start(config: &Config) -> Self {
        let physics = &config.physics;
        let (sx, sy, sz) = physics.spawn_point;
        let params = PhysicsParams {
            gravity: physics.gravity,
            jump_speed: physics.jump_speed,
            max_fall_speed: physics.max_fall_speed,
            move_speed: physics.move_speed,
            max_dt: checked_max_dt(physics.max_dt),
            ground_probe: physics.ground_probe,
            void_floor: physics.void_floor,
            spawn_point: Vec3::new(sx, sy, sz),
        };

        let body = BodyDimensions {
            width: config.player.width,
            height: config.player.height,
            eye_height_fraction: config.player.eye_height_fraction,
        };
        let look =
            FirstPersonLook::new(config.player.mouse_sensitivity, config.player.pitch_limit_deg);

        let mut world = VoxelWorld::new();
        let blocks = build_default_world(&mut world, &config.world);

        let mut session = Self {
            world,
            player: Player::new(params.spawn_point, body, look),
            params,
            raycast: RaycastSettings {
                coarse_step: checked_step("coarse_step", config.targeting.coarse_step, COARSE_STEP),
                fine_step: checked_step("fine_step", config.targeting.fine_step, FINE_STEP),
            },
            reach: config.targeting.reach,
            selected: config.world.starting_block,
            target: None,
            show_target_info: config.debug.show_target_info,
        };
        session.refresh_target();

        info!(blocks, spawn = ?session.params.spawn_point, "session started");
        session
    }

    /// Advances one frame: look, hotbar, physics, then block edits.
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> FrameReport {
        self.world.events_mut().swap();

        self.player.look.apply_mouse_delta(input.look_delta);
        if let Some(block) = input.select {
            self.select_block(block);
        }

        let intent = self.player.move_intent(&input.movement);
        let step =
            player_movement_step(&mut self.player.actor, &self.world, &intent, &self.params, dt);
        if step.landed {
            debug!(position = ?self.player.position(), "landed");
        }

        let destroyed = if input.destroy {
            self.destroy_targeted()
        } else {
            None
        };
        let placed = input.place.then(|| self.place_selected());

        self.refresh_target();

        FrameReport {
            step,
            destroyed,
            placed,
        }
    }

    /// Removes the block under the crosshair.
    pub fn destroy_targeted(&mut self) -> Option<(BlockCoord, BlockType)> {
        let ray = self.player.view_ray(self.reach)?;
        let hit = cast_block_ray(&self.world, &ray, self.raycast.coarse_step)?;
        let removed = self.world.remove(hit.block)?;

        debug!(coord = %hit.block, block = %removed, "destroyed block");
        self.refresh_target();
        Some((hit.block, removed))
    }

    /// Places the selected block against the face under the crosshair.
    pub fn place_selected(&mut self) -> PlaceOutcome {
        let Some(placement) = self
            .player
            .view_ray(self.reach)
            .and_then(|ray| find_placement(&self.world, &ray, &self.raycast))
        else {
            debug!("nothing to place against");
            return PlaceOutcome::NoTarget;
        };

        let place = placement.place;
        if placement_blocked_by_actor(&self.world, &self.player.actor, place) {
            debug!(coord = %place, "placement refused, player in the way");
            return PlaceOutcome::BlockedByPlayer(place);
        }

        self.world.set(place, self.selected);
        debug!(coord = %place, block = %self.selected, face = %placement.face, "placed block");
        self.refresh_target();
        PlaceOutcome::Placed(place)
    }

    pub fn select_block(&mut self, block: BlockType) {
        if self.selected != block {
            debug!(%block, "selected block");
            self.selected = block;
        }
    }

    pub fn selected_block(&self) -> BlockType {
        self.selected
    }

    /// Snapshot for the status overlay.
    pub fn hud(&self) -> HudStatus {
        let actor = &self.player.actor;
        let placement = self.target.and_then(|target| target.placement);
        HudStatus {
            grounded: actor.on_ground(),
            vertical_velocity: actor.velocity.z,
            position: actor.position,
            target: self.target.map(|target| target.block),
            place: placement.map(|hit| hit.place),
            face: placement.map(|hit| hit.face),
            selected: self.selected,
            show_target_info: self.show_target_info,
        }
    }

    /// Block currently under the crosshair, if any.
    pub fn highlighted(&self) -> Option<BlockCoord> {
        self.target.map(|target| target.block)
    }

    /// Tears the world down, emitting a removal for every block, and resets the player.
    ///
    /// Returns the number of blocks removed.
    pub fn end(&mut self) -> usize {
        let removed = self.world.clear();
        self.player.respawn(self.params.spawn_point);
        self.target = None;
        info!(removed, "session ended");
        removed
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut VoxelWorld {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    pub fn raycast_settings(&self) -> &RaycastSettings {
        &self.raycast
    }

    fn refresh_target(&mut self) {
        self.target = self.player.view_ray(self.reach).and_then(|ray| {
            let hit = cast_block_ray(&self.world, &ray, self.raycast.coarse_step)?;
            Some(Target {
                block: hit.block,
                placement: find_placement(&self.world, &ray, &self.raycast),
            })
        });
    }
}

/// March steps must stay below one block or the march can skip a cell.
fn checked_step(name: &str, step: f32, fallback: f32) -> f32 {
    if step > 0.0 && step < 1.0 {
        step
    } else {
        warn!(step, fallback, "targeting.{name} must be in (0, 1), using default");
        fallback
    }
}

fn checked_max_dt(max_dt: f32) -> f32 {
    if max_dt > 0.0 && max_dt.is_finite() {
        max_dt
    } else {
        warn!(max_dt, fallback = MAX_DT, "physics.max_dt must be positive, using default");
        MAX_DT
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
