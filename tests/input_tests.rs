use isometric_follow::core::{Controller, Direction, KeyState};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

const BOUND: [(KeyCode, Direction); 4] = [
    (KeyCode::KeyW, Direction::Forward),
    (KeyCode::KeyS, Direction::Back),
    (KeyCode::KeyA, Direction::Left),
    (KeyCode::KeyD, Direction::Right),
];

/// Small deterministic generator so sequences are reproducible
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

#[test]
fn test_state_tracks_latest_event_per_key() {
    for seed in 0..50 {
        let mut rng = Lcg(seed);
        let mut keys = KeyState::new();
        let mut expected = [false; 4];

        for _ in 0..200 {
            let slot = (rng.next() % 4) as usize;
            let pressed = rng.next() % 2 == 0;
            let state = if pressed {
                ElementState::Pressed
            } else {
                ElementState::Released
            };

            keys.handle_key(BOUND[slot].0, state);
            expected[slot] = pressed;

            for (i, (_, direction)) in BOUND.iter().enumerate() {
                assert_eq!(keys.is_down(*direction), expected[i], "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_repeated_press_is_idempotent() {
    let mut keys = KeyState::new();
    for _ in 0..5 {
        keys.handle_key(KeyCode::KeyA, ElementState::Pressed);
    }
    assert_eq!(keys, KeyState::holding(&[Direction::Left]));

    keys.handle_key(KeyCode::KeyA, ElementState::Released);
    keys.handle_key(KeyCode::KeyA, ElementState::Released);
    assert_eq!(keys, KeyState::new());
}

#[test]
fn test_release_without_press_is_noop() {
    let mut keys = KeyState::holding(&[Direction::Back]);
    keys.handle_key(KeyCode::KeyW, ElementState::Released);
    assert_eq!(keys, KeyState::holding(&[Direction::Back]));
}

#[test]
fn test_other_keys_never_change_state() {
    let mut keys = KeyState::holding(&[Direction::Forward, Direction::Right]);
    let before = keys;
    for code in [
        KeyCode::KeyQ,
        KeyCode::KeyE,
        KeyCode::Space,
        KeyCode::ShiftLeft,
        KeyCode::Escape,
        KeyCode::ArrowLeft,
        KeyCode::Digit1,
    ] {
        assert!(!keys.handle_key(code, ElementState::Pressed));
        assert!(!keys.handle_key(code, ElementState::Released));
    }
    assert_eq!(keys, before);
}

#[test]
fn test_held_lists_pressed_directions() {
    let mut keys = KeyState::new();
    keys.handle_key(KeyCode::KeyD, ElementState::Pressed);
    keys.handle_key(KeyCode::KeyW, ElementState::Pressed);
    assert_eq!(keys.held(), vec![Direction::Forward, Direction::Right]);
}
