//! Frame-coherent keyboard state tracker.
//!
//! Physical key codes are used so WASD sits under the same fingers on every
//! layout.

use rustc_hash::FxHashSet;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Minimal description of a key event for processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: PhysicalKey,
    pub state: ElementState,
    /// OS auto-repeat; ignored.
    pub repeat: bool,
}

impl RawKeyEvent {
    pub fn pressed(key: PhysicalKey) -> Self {
        Self {
            key,
            state: ElementState::Pressed,
            repeat: false,
        }
    }

    pub fn released(key: PhysicalKey) -> Self {
        Self {
            key,
            state: ElementState::Released,
            repeat: false,
        }
    }
}

/// Held keys plus this frame's press/release transitions.
///
/// Feed events with [`process_event`](Self::process_event) or
/// [`process_raw`](Self::process_raw), query, then call
/// [`clear_transients`](Self::clear_transients) once the frame is consumed.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: FxHashSet<PhysicalKey>,
    transitions: Vec<(PhysicalKey, ElementState)>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &KeyEvent) {
        self.process_raw(RawKeyEvent {
            key: event.physical_key,
            state: event.state,
            repeat: event.repeat,
        });
    }

    pub fn process_raw(&mut self, event: RawKeyEvent) {
        if event.repeat {
            return;
        }
        match event.state {
            ElementState::Pressed => {
                self.held.insert(event.key);
            }
            ElementState::Released => {
                self.held.remove(&event.key);
            }
        }
        self.transitions.push((event.key, event.state));
    }

    /// Returns `true` while the key is held down.
    #[must_use]
    pub fn is_pressed(&self, key: PhysicalKey) -> bool {
        self.held.contains(&key)
    }

    /// Returns `true` if the key went down at any point this frame.
    #[must_use]
    pub fn just_pressed(&self, key: PhysicalKey) -> bool {
        self.saw(key, ElementState::Pressed)
    }

    /// Returns `true` if the key came up at any point this frame.
    #[must_use]
    pub fn just_released(&self, key: PhysicalKey) -> bool {
        self.saw(key, ElementState::Released)
    }

    /// Releases every held key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        let held: Vec<_> = self.held.drain().collect();
        self.transitions
            .extend(held.into_iter().map(|key| (key, ElementState::Released)));
    }

    /// Forget this frame's transitions. Call at end of frame.
    pub fn clear_transients(&mut self) {
        self.transitions.clear();
    }

    fn saw(&self, key: PhysicalKey, state: ElementState) -> bool {
        self.transitions.iter().any(|&(k, s)| k == key && s == state)
    }
}
