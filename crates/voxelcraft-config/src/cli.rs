//! Command-line argument parsing for Voxelcraft.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Voxelcraft command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "voxelcraft", about = "Voxelcraft block-building prototype")]
pub struct CliArgs {
    /// Gravity in blocks/s².
    #[arg(long)]
    pub gravity: Option<f32>,

    /// Jump velocity in blocks/s.
    #[arg(long)]
    pub jump_speed: Option<f32>,

    /// Walk speed in blocks/s.
    #[arg(long)]
    pub move_speed: Option<f32>,

    /// Block targeting reach in blocks.
    #[arg(long)]
    pub reach: Option<f32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of frames the headless driver simulates.
    #[arg(long, default_value_t = 240)]
    pub frames: u32,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(g) = args.gravity {
            self.physics.gravity = g;
        }
        if let Some(jump) = args.jump_speed {
            self.physics.jump_speed = jump;
        }
        if let Some(speed) = args.move_speed {
            self.physics.move_speed = speed;
        }
        if let Some(reach) = args.reach {
            self.targeting.reach = reach;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            gravity: Some(9.81),
            reach: Some(8.0),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.physics.gravity, 9.81);
        assert_eq!(config.targeting.reach, 8.0);
        // Non-overridden fields retain defaults
        assert_eq!(config.physics.jump_speed, 8.0);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "voxelcraft",
            "--move-speed",
            "5.5",
            "--log-level",
            "debug",
            "--frames",
            "30",
        ]);
        assert_eq!(args.move_speed, Some(5.5));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.frames, 30);
        assert!(args.config.is_none());

        let defaults = CliArgs::parse_from(["voxelcraft"]);
        assert_eq!(defaults.frames, 240);
    }
}
