use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Controller, Direction};

/// Held state of the four movement keys, fed from winit keyboard events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    forward: bool,
    back: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    /// Create a key map with every key released
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent; returns true if it changed a bound key
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => self.process_keyboard(event),
            _ => false,
        }
    }

    /// Process a single keyboard event
    pub fn process_keyboard(&mut self, event: &KeyEvent) -> bool {
        match event.physical_key {
            PhysicalKey::Code(keycode) => self.handle_key(keycode, event.state),
            PhysicalKey::Unidentified(_) => false,
        }
    }

    /// Apply a press or release of `keycode`; unbound keys are ignored
    pub fn handle_key(&mut self, keycode: KeyCode, state: ElementState) -> bool {
        match Self::keycode_to_direction(keycode) {
            Some(direction) => {
                self.set(direction, state.is_pressed());
                true
            }
            None => false,
        }
    }

    /// Set one direction's flag directly
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Forward => self.forward = pressed,
            Direction::Back => self.back = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    /// Key map with the given directions held
    pub fn holding(directions: &[Direction]) -> Self {
        let mut keys = Self::new();
        for &direction in directions {
            keys.set(direction, true);
        }
        keys
    }

    /// Map a physical key to its movement direction
    pub fn keycode_to_direction(keycode: KeyCode) -> Option<Direction> {
        match keycode {
            KeyCode::KeyW => Some(Direction::Forward),
            KeyCode::KeyS => Some(Direction::Back),
            KeyCode::KeyA => Some(Direction::Left),
            KeyCode::KeyD => Some(Direction::Right),
            _ => None,
        }
    }
}

impl Controller for KeyState {
    fn is_down(&self, direction: Direction) -> bool {
        match direction {
            Direction::Forward => self.forward,
            Direction::Back => self.back,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // KeyEvent has private fields, so these drive handle_key with KeyCode directly

    #[test]
    fn test_new_key_state_empty() {
        let keys = KeyState::new();
        for direction in Direction::ALL {
            assert!(!keys.is_down(direction));
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut keys = KeyState::new();
        assert!(keys.handle_key(KeyCode::KeyW, ElementState::Pressed));
        assert!(keys.is_down(Direction::Forward));

        assert!(keys.handle_key(KeyCode::KeyW, ElementState::Released));
        assert!(!keys.is_down(Direction::Forward));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.handle_key(KeyCode::KeyQ, ElementState::Pressed));
        assert!(!keys.handle_key(KeyCode::Space, ElementState::Pressed));
        assert!(!keys.handle_key(KeyCode::ArrowUp, ElementState::Pressed));
        assert_eq!(keys, KeyState::new());
    }

    #[test]
    fn test_wasd_mapping() {
        assert_eq!(KeyState::keycode_to_direction(KeyCode::KeyW), Some(Direction::Forward));
        assert_eq!(KeyState::keycode_to_direction(KeyCode::KeyS), Some(Direction::Back));
        assert_eq!(KeyState::keycode_to_direction(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(KeyState::keycode_to_direction(KeyCode::KeyD), Some(Direction::Right));
        assert_eq!(KeyState::keycode_to_direction(KeyCode::Escape), None);
    }

    #[test]
    fn test_holding() {
        let keys = KeyState::holding(&[Direction::Back, Direction::Left]);
        assert!(keys.is_down(Direction::Back));
        assert!(keys.is_down(Direction::Left));
        assert!(!keys.is_down(Direction::Forward));
        assert!(!keys.is_down(Direction::Right));
    }

    #[test]
    fn test_non_keyboard_events_leave_keys_alone() {
        let mut keys = KeyState::holding(&[Direction::Right]);
        assert!(!keys.process_event(&WindowEvent::Focused(false)));
        assert!(!keys.process_event(&WindowEvent::CloseRequested));
        assert_eq!(keys, KeyState::holding(&[Direction::Right]));
    }
}
