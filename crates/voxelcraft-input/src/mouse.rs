//! Mouse look deltas and button clicks, accumulated per frame.

use glam::Vec2;
use rustc_hash::FxHashSet;
use winit::event::{ElementState, MouseButton};

/// Frame-coherent mouse state for first-person control.
///
/// Only raw motion is tracked: with the cursor captured, window positions are
/// meaningless and `DeviceEvent::MouseMotion` carries the look input.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    delta: Vec2,
    held: FxHashSet<MouseButton>,
    clicked: FxHashSet<MouseButton>,
}

impl MouseState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a `DeviceEvent::MouseMotion` raw delta, in pixels.
    pub fn on_raw_motion(&mut self, dx: f64, dy: f64) {
        self.delta += Vec2::new(dx as f32, dy as f32);
    }

    /// Process a `MouseInput` event.
    pub fn on_button(&mut self, button: MouseButton, state: ElementState) {
        match state {
            ElementState::Pressed => {
                if self.held.insert(button) {
                    self.clicked.insert(button);
                }
            }
            ElementState::Released => {
                self.held.remove(&button);
            }
        }
    }

    /// Motion accumulated since the last clear. +x is right, +y is down.
    #[must_use]
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    #[must_use]
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    /// Whether `button` went down this frame.
    #[must_use]
    pub fn just_button_pressed(&self, button: MouseButton) -> bool {
        self.clicked.contains(&button)
    }

    /// Clears motion and clicks. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.delta = Vec2::ZERO;
        self.clicked.clear();
    }
}
