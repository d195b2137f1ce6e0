//! Mouse-driven first-person view direction. Z is up.

use glam::{Quat, Vec2, Vec3};

/// Yaw and pitch of the player's view, in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct FirstPersonLook {
    /// Heading in `0.0..360.0`. Zero faces +Y; positive turns left (counter-clockwise from above).
    pub yaw: f32,
    /// Positive looks up.
    pub pitch: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Pitch is clamped to `±pitch_limit` degrees.
    pub pitch_limit: f32,
}

impl Default for FirstPersonLook {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            mouse_sensitivity: 0.2,
            pitch_limit: 89.0,
        }
    }
}

impl FirstPersonLook {
    pub fn new(mouse_sensitivity: f32, pitch_limit: f32) -> Self {
        Self {
            mouse_sensitivity,
            pitch_limit: pitch_limit.abs().min(89.9),
            ..Default::default()
        }
    }

    /// Turn by a raw mouse delta (+x right, +y down).
    pub fn apply_mouse_delta(&mut self, delta: Vec2) {
        if !delta.is_finite() {
            return;
        }
        self.yaw = (self.yaw - delta.x * self.mouse_sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch - delta.y * self.mouse_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Heading in radians, as used by movement intents.
    pub fn yaw_radians(&self) -> f32 {
        self.yaw.to_radians()
    }

    /// Yaw about +Z, then pitch about the turned X axis.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.yaw.to_radians())
            * Quat::from_rotation_x(self.pitch.to_radians())
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Unit forward direction flattened onto the ground plane.
    pub fn horizontal_forward(&self) -> Vec3 {
        Quat::from_rotation_z(self.yaw.to_radians()) * Vec3::Y
    }

    /// Unit right direction on the ground plane.
    pub fn horizontal_right(&self) -> Vec3 {
        Quat::from_rotation_z(self.yaw.to_radians()) * Vec3::X
    }
}
