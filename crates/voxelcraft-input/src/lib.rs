//! Device input for Voxelcraft: frame-coherent keyboard and mouse state,
//! and the fixed bindings that turn them into one [`FrameInput`] per frame.

pub mod bindings;
pub mod keyboard;
pub mod mouse;

pub use bindings::{Bindings, FrameInput, MovementKeys};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use mouse::MouseState;
