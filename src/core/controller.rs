/// Movement direction bound to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Back,
        Direction::Left,
        Direction::Right,
    ];

    /// Name accepted on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "forward" | "w" => Some(Direction::Forward),
            "back" | "s" => Some(Direction::Back),
            "left" | "a" => Some(Direction::Left),
            "right" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Controller - read side of the held-key map
pub trait Controller {
    /// Check if the key for `direction` is currently held
    fn is_down(&self, direction: Direction) -> bool;

    /// Iterate over every held direction
    fn held(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_down(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockController {
        pressed: Vec<Direction>,
    }

    impl Controller for MockController {
        fn is_down(&self, direction: Direction) -> bool {
            self.pressed.contains(&direction)
        }
    }

    #[test]
    fn test_parse_names_and_letters() {
        assert_eq!(Direction::parse("forward"), Some(Direction::Forward));
        assert_eq!(Direction::parse("BACK"), Some(Direction::Back));
        assert_eq!(Direction::parse("a"), Some(Direction::Left));
        assert_eq!(Direction::parse("d"), Some(Direction::Right));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn test_held_keeps_declaration_order() {
        let controller = MockController {
            pressed: vec![Direction::Right, Direction::Forward],
        };
        assert_eq!(controller.held(), vec![Direction::Forward, Direction::Right]);
    }

    #[test]
    fn test_controller_no_keys_pressed() {
        let controller = MockController { pressed: vec![] };
        for direction in Direction::ALL {
            assert!(!controller.is_down(direction));
        }
        assert!(controller.held().is_empty());
    }
}
