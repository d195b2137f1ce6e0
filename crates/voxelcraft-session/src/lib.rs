//! A play session: the voxel world, the player, and the per-frame glue
//! between input, physics and block editing.

mod frame_clock;
mod game_state;
mod hud;
mod layout;
mod session;

pub use frame_clock::FrameClock;
pub use game_state::GameState;
pub use hud::{CONTROLS_HELP, HudStatus};
pub use layout::build_default_world;
pub use session::{FrameReport, PlaceOutcome, Session};
