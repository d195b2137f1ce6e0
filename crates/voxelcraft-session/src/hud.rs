//! Status overlay text: physics state, selected block and targeting details.
//!
//! Example: `Ground | Vel: 0.0 | Pos: 0.5, -4.5, 1.8 | Block: Grass | Target: (0, -3, 0) | Place: (0, -3, 1) | Face: TOP`

use std::fmt;

use glam::Vec3;
use voxelcraft_math::BlockCoord;
use voxelcraft_physics::BlockFace;
use voxelcraft_voxel::BlockType;

/// One-line summary of the controls.
pub const CONTROLS_HELP: &str =
    "WASD: move | Space: jump | Mouse: look | LMB: destroy | RMB: build | 1,2,3: block type | ESC: menu";

/// HUD values sampled from a session.
#[derive(Debug, Clone, PartialEq)]
pub struct HudStatus {
    pub grounded: bool,
    pub vertical_velocity: f32,
    pub position: Vec3,
    pub target: Option<BlockCoord>,
    pub place: Option<BlockCoord>,
    pub face: Option<BlockFace>,
    pub selected: BlockType,
    pub show_target_info: bool,
}

impl HudStatus {
    /// `Ground | Vel: 0.0 | Pos: 0.5, -4.5, 1.8`
    pub fn physics_line(&self) -> String {
        let state = if self.grounded { "Ground" } else { "Air" };
        let p = self.position;
        format!(
            "{state} | Vel: {:.1} | Pos: {:.1}, {:.1}, {:.1}",
            self.vertical_velocity, p.x, p.y, p.z
        )
    }

    pub fn block_line(&self) -> String {
        format!("Block: {}", self.selected.display_name())
    }

    /// Target, placement cell and struck face; empty when disabled.
    pub fn target_lines(&self) -> Vec<String> {
        if !self.show_target_info {
            return Vec::new();
        }
        let mut lines = vec![
            format!("Target: {}", describe(self.target)),
            format!("Place: {}", describe(self.place)),
        ];
        if let Some(face) = self.face {
            lines.push(format!("Face: {face}"));
        }
        lines
    }
}

fn describe(coord: Option<BlockCoord>) -> String {
    coord.map_or_else(|| "none".to_string(), |c| c.to_string())
}

impl fmt::Display for HudStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.physics_line(), self.block_line())?;
        for line in self.target_lines() {
            write!(f, " | {line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> HudStatus {
        HudStatus {
            grounded: true,
            vertical_velocity: 0.0,
            position: Vec3::new(0.5, -4.5, 1.75),
            target: Some(BlockCoord::new(0, -3, 0)),
            place: Some(BlockCoord::new(0, -3, 1)),
            face: Some(BlockFace::Top),
            selected: BlockType::Grass,
            show_target_info: true,
        }
    }

    #[test]
    fn test_physics_line() {
        assert_eq!(status().physics_line(), "Ground | Vel: 0.0 | Pos: 0.5, -4.5, 1.8");

        let falling = HudStatus {
            grounded: false,
            vertical_velocity: -12.34,
            ..status()
        };
        assert!(falling.physics_line().starts_with("Air | Vel: -12.3"));
    }

    #[test]
    fn test_full_line() {
        assert_eq!(
            status().to_string(),
            "Ground | Vel: 0.0 | Pos: 0.5, -4.5, 1.8 | Block: Grass | Target: (0, -3, 0) | Place: (0, -3, 1) | Face: TOP"
        );
    }

    #[test]
    fn test_no_target() {
        let hud = HudStatus {
            target: None,
            place: None,
            face: None,
            selected: BlockType::Wood,
            ..status()
        };
        assert_eq!(hud.target_lines(), vec!["Target: none", "Place: none"]);
        assert_eq!(hud.block_line(), "Block: Wood");
    }

    #[test]
    fn test_target_info_hidden() {
        let hud = HudStatus {
            show_target_info: false,
            ..status()
        };
        assert!(hud.target_lines().is_empty());
        assert!(!hud.to_string().contains("Target"));
    }
}
