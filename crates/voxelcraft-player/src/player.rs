use glam::Vec3;
use voxelcraft_input::MovementKeys;
use voxelcraft_physics::player_physics::{PLAYER_HEIGHT, PLAYER_WIDTH};
use voxelcraft_physics::{ActorState, BlockRay, MoveIntent};

use crate::FirstPersonLook;

/// Collision box size and where the eyes sit inside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDimensions {
    pub width: f32,
    pub height: f32,
    /// Eye height above the feet as a fraction of `height`.
    pub eye_height_fraction: f32,
}

impl Default for BodyDimensions {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            eye_height_fraction: 0.85,
        }
    }
}

/// The single player-controlled actor.
#[derive(Clone, Debug)]
pub struct Player {
    pub actor: ActorState,
    pub look: FirstPersonLook,
    pub body: BodyDimensions,
}

impl Player {
    /// A player standing still at `spawn`, airborne until the first physics step.
    pub fn new(spawn: Vec3, body: BodyDimensions, look: FirstPersonLook) -> Self {
        Self {
            actor: ActorState::new(spawn, body.width, body.height),
            look,
            body,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.actor.position
    }

    /// Camera position: `eye_height_fraction` of the way up from the feet.
    ///
    /// The offset is measured from the bottom of the box, not from its center.
    /// Offsetting from the center by the same amount would put the eye above the
    /// top of the body.
    pub fn eye_position(&self) -> Vec3 {
        let p = self.actor.position;
        Vec3::new(
            p.x,
            p.y,
            self.actor.bottom() + self.body.eye_height_fraction * self.body.height,
        )
    }

    /// Movement intent for this frame's keys, facing the current yaw.
    pub fn move_intent(&self, keys: &MovementKeys) -> MoveIntent {
        MoveIntent {
            forward: keys.forward,
            back: keys.back,
            left: keys.left,
            right: keys.right,
            jump: keys.jump,
            yaw: self.look.yaw_radians(),
        }
    }

    /// Ray from the eyes along the view direction, limited to `reach`.
    pub fn view_ray(&self, reach: f32) -> Option<BlockRay> {
        BlockRay::new(self.eye_position(), self.look.forward(), reach)
    }

    /// Back to `spawn` at rest. The view direction is kept.
    pub fn respawn(&mut self, spawn: Vec3) {
        self.actor.reset_to(spawn);
    }
}
