//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};
use voxelcraft_voxel::BlockType;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level game configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Movement and gravity tuning.
    pub physics: PhysicsConfig,
    /// Player body and look settings.
    pub player: PlayerConfig,
    /// Block targeting reach and march steps.
    pub targeting: TargetingConfig,
    /// Starting world layout.
    pub world: WorldConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Physics configuration. Z is up; distances are in blocks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration (blocks/s²).
    pub gravity: f32,
    /// Upward velocity applied by a jump (blocks/s).
    pub jump_speed: f32,
    /// Terminal fall speed (blocks/s).
    pub max_fall_speed: f32,
    /// Horizontal walk speed (blocks/s).
    pub move_speed: f32,
    /// Largest frame time integrated in one step (seconds).
    pub max_dt: f32,
    /// Distance below the feet checked for ground contact.
    pub ground_probe: f32,
    /// Falling below this height respawns the player.
    pub void_floor: f32,
    /// Where the player appears at session start and after a void fall.
    pub spawn_point: (f32, f32, f32),
}

/// Player configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Width of the collision box along X and Y.
    pub width: f32,
    /// Height of the collision box.
    pub height: f32,
    /// Eye height as a fraction of body height, measured from the feet.
    pub eye_height_fraction: f32,
    /// Degrees of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Maximum look angle above or below the horizon, in degrees.
    pub pitch_limit_deg: f32,
}

/// Targeting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TargetingConfig {
    /// How far the player can reach, in blocks.
    pub reach: f32,
    /// Step of the march that finds the targeted block.
    pub coarse_step: f32,
    /// Step of the march that locates the struck face.
    pub fine_step: f32,
}

/// World layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// The platform spans `-half_size..half_size` on X and Y.
    pub platform_half_size: i32,
    /// Block selected in the hotbar when a session starts.
    pub starting_block: BlockType,
    /// Place the wood blocks and stone columns on the platform.
    pub decorations: bool,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Include target and face details in the status line.
    pub show_target_info: bool,
}

// --- Default implementations ---

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 20.0,
            jump_speed: 8.0,
            max_fall_speed: 20.0,
            move_speed: 4.0,
            max_dt: 0.1,
            ground_probe: 0.01,
            void_floor: -50.0,
            spawn_point: (0.5, -4.5, 3.0),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: 0.6,
            height: 1.5,
            eye_height_fraction: 0.85,
            mouse_sensitivity: 0.2,
            pitch_limit_deg: 89.0,
        }
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            reach: 5.0,
            coarse_step: 0.02,
            fine_step: 0.01,
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            platform_half_size: 10,
            starting_block: BlockType::Grass,
            decorations: true,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_target_info: true,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
