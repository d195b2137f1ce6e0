//! Scripted device events standing in for a human at the keyboard.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

use voxelcraft_input::{KeyboardState, MouseState, RawKeyEvent};

/// One synthetic device event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptEvent {
    Key(RawKeyEvent),
    MouseMotion { dx: f64, dy: f64 },
    Button(MouseButton, ElementState),
}

impl ScriptEvent {
    fn press(code: KeyCode) -> Self {
        ScriptEvent::Key(RawKeyEvent::pressed(PhysicalKey::Code(code)))
    }

    fn release(code: KeyCode) -> Self {
        ScriptEvent::Key(RawKeyEvent::released(PhysicalKey::Code(code)))
    }

    /// Feeds the event to the matching device.
    pub fn apply(self, keyboard: &mut KeyboardState, mouse: &mut MouseState) {
        match self {
            ScriptEvent::Key(event) => keyboard.process_raw(event),
            ScriptEvent::MouseMotion { dx, dy } => mouse.on_raw_motion(dx, dy),
            ScriptEvent::Button(button, state) => mouse.on_button(button, state),
        }
    }
}

/// Frame at which the script presses Escape.
pub const MENU_FRAME: u32 = 200;

/// Events delivered before `frame` is simulated.
///
/// Settle, walk two blocks forward, jump, look down at the grass ahead,
/// pick wood, place it, break it again, then leave for the menu.
pub fn events_for(frame: u32) -> Vec<ScriptEvent> {
    match frame {
        60 => vec![ScriptEvent::press(KeyCode::KeyW)],
        90 => vec![
            ScriptEvent::release(KeyCode::KeyW),
            ScriptEvent::press(KeyCode::Space),
        ],
        91 => vec![ScriptEvent::release(KeyCode::Space)],
        // 162.5 px at 0.2 degrees per pixel tilts the view 32.5 degrees down.
        150 => vec![ScriptEvent::MouseMotion { dx: 0.0, dy: 162.5 }],
        155 => vec![
            ScriptEvent::press(KeyCode::Digit3),
            ScriptEvent::release(KeyCode::Digit3),
        ],
        160 => vec![
            ScriptEvent::Button(MouseButton::Right, ElementState::Pressed),
            ScriptEvent::Button(MouseButton::Right, ElementState::Released),
        ],
        175 => vec![
            ScriptEvent::Button(MouseButton::Left, ElementState::Pressed),
            ScriptEvent::Button(MouseButton::Left, ElementState::Released),
        ],
        MENU_FRAME => vec![ScriptEvent::press(KeyCode::Escape)],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_window() {
        let mut keyboard = KeyboardState::new();
        let mut mouse = MouseState::new();
        let w = PhysicalKey::Code(KeyCode::KeyW);

        for frame in 0..=90 {
            for event in events_for(frame) {
                event.apply(&mut keyboard, &mut mouse);
            }
            assert_eq!(keyboard.is_pressed(w), (60..90).contains(&frame), "frame {frame}");
            keyboard.clear_transients();
        }
    }

    #[test]
    fn test_quiet_frames() {
        assert!(events_for(0).is_empty());
        assert!(events_for(100).is_empty());
        assert!(events_for(MENU_FRAME + 1).is_empty());
    }
}
