//! Configuration for Voxelcraft.
//!
//! Settings persist to disk as a RON file and can be overridden from the
//! command line. Every section uses `#[serde(default)]`, so older or partial
//! files keep loading as new fields are added.

mod app_dirs;
mod cli;
mod config;
mod error;

pub use app_dirs::AppDirs;
pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, PhysicsConfig, PlayerConfig, TargetingConfig, WorldConfig,
};
pub use error::ConfigError;
