//! Fixed control scheme: WASD to walk, Space to jump, left click destroys,
//! right click places, 1-3 pick a block, Escape returns to the menu.

use glam::Vec2;
use tracing::debug;
use voxelcraft_voxel::BlockType;
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::keyboard::KeyboardState;
use crate::mouse::MouseState;

/// Movement keys held this frame, independent of facing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Everything the simulation needs from the input devices for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub movement: MovementKeys,
    /// Raw mouse motion in pixels (+x right, +y down).
    pub look_delta: Vec2,
    pub destroy: bool,
    pub place: bool,
    pub select: Option<BlockType>,
    pub menu: bool,
}

/// Maps physical keys and buttons to game controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Bindings {
    pub forward: PhysicalKey,
    pub back: PhysicalKey,
    pub left: PhysicalKey,
    pub right: PhysicalKey,
    pub jump: PhysicalKey,
    pub menu: PhysicalKey,
    pub destroy: MouseButton,
    pub place: MouseButton,
    /// Hotbar keys paired with the block each selects.
    pub hotbar: Vec<(PhysicalKey, BlockType)>,
}

impl Default for Bindings {
    fn default() -> Self {
        let hotbar = BlockType::ALL
            .iter()
            .zip([KeyCode::Digit1, KeyCode::Digit2, KeyCode::Digit3])
            .map(|(&block, code)| (PhysicalKey::Code(code), block))
            .collect();

        Self {
            forward: PhysicalKey::Code(KeyCode::KeyW),
            back: PhysicalKey::Code(KeyCode::KeyS),
            left: PhysicalKey::Code(KeyCode::KeyA),
            right: PhysicalKey::Code(KeyCode::KeyD),
            jump: PhysicalKey::Code(KeyCode::Space),
            menu: PhysicalKey::Code(KeyCode::Escape),
            destroy: MouseButton::Left,
            place: MouseButton::Right,
            hotbar,
        }
    }
}

impl Bindings {
    pub fn movement(&self, keyboard: &KeyboardState) -> MovementKeys {
        MovementKeys {
            forward: keyboard.is_pressed(self.forward),
            back: keyboard.is_pressed(self.back),
            left: keyboard.is_pressed(self.left),
            right: keyboard.is_pressed(self.right),
            jump: keyboard.is_pressed(self.jump),
        }
    }

    /// The block picked this frame. With several hotbar keys down, the last binding wins.
    pub fn hotbar_selection(&self, keyboard: &KeyboardState) -> Option<BlockType> {
        self.hotbar
            .iter()
            .rev()
            .find(|(key, _)| keyboard.just_pressed(*key))
            .map(|&(_, block)| block)
    }

    /// Samples both devices into one frame's input. Does not clear transients.
    pub fn frame_input(&self, keyboard: &KeyboardState, mouse: &MouseState) -> FrameInput {
        let input = FrameInput {
            movement: self.movement(keyboard),
            look_delta: mouse.delta(),
            destroy: mouse.just_button_pressed(self.destroy),
            place: mouse.just_button_pressed(self.place),
            select: self.hotbar_selection(keyboard),
            menu: keyboard.just_pressed(self.menu),
        };
        if let Some(block) = input.select {
            debug!(%block, "hotbar selection");
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyboard::RawKeyEvent;
    use winit::event::ElementState;

    fn press(kb: &mut KeyboardState, code: KeyCode) {
        kb.process_raw(RawKeyEvent::pressed(PhysicalKey::Code(code)));
    }

    #[test]
    fn test_movement_keys() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        press(&mut kb, KeyCode::KeyW);
        press(&mut kb, KeyCode::KeyD);
        press(&mut kb, KeyCode::Space);

        let keys = bindings.movement(&kb);
        assert_eq!(
            keys,
            MovementKeys {
                forward: true,
                back: false,
                left: false,
                right: true,
                jump: true,
            }
        );
    }

    #[test]
    fn test_hotbar_selection() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        assert_eq!(bindings.hotbar_selection(&kb), None);

        press(&mut kb, KeyCode::Digit2);
        assert_eq!(bindings.hotbar_selection(&kb), Some(BlockType::Stone));

        kb.clear_transients();
        // Holding the key does not reselect.
        assert_eq!(bindings.hotbar_selection(&kb), None);

        press(&mut kb, KeyCode::Digit3);
        assert_eq!(bindings.hotbar_selection(&kb), Some(BlockType::Wood));
    }

    #[test]
    fn test_frame_input_combines_devices() {
        let bindings = Bindings::default();
        let mut kb = KeyboardState::new();
        let mut mouse = MouseState::new();

        press(&mut kb, KeyCode::KeyS);
        press(&mut kb, KeyCode::Escape);
        mouse.on_raw_motion(10.0, -4.0);
        mouse.on_button(MouseButton::Right, ElementState::Pressed);

        let input = bindings.frame_input(&kb, &mouse);
        assert!(input.movement.back);
        assert!(input.place);
        assert!(!input.destroy);
        assert!(input.menu);
        assert_eq!(input.look_delta, Vec2::new(10.0, -4.0));
        assert_eq!(input.select, None);
    }
}
