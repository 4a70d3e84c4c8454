use glam::Vec3;

use crate::core::{Controller, Direction};

/// Default displacement per axis per frame
pub const MOVE_SPEED: f32 = 0.1;

impl Direction {
    /// Unscaled ground-plane step for this direction
    ///
    /// Each direction moves along a diagonal of the x/z grid, so on screen
    /// the model travels straight up, down, left or right under the
    /// isometric camera.
    pub const fn axis(self) -> Vec3 {
        match self {
            Direction::Forward => Vec3::new(-1.0, 0.0, -1.0),
            Direction::Back => Vec3::new(1.0, 0.0, 1.0),
            Direction::Left => Vec3::new(-1.0, 0.0, 1.0),
            Direction::Right => Vec3::new(1.0, 0.0, -1.0),
        }
    }
}

/// Displacement for one frame given the held keys
///
/// Axes are summed before scaling so opposite keys cancel exactly. The sum
/// is not normalized: two keys that agree on an axis move twice as fast on it.
pub fn frame_displacement<C: Controller + ?Sized>(input: &C, speed: f32) -> Vec3 {
    let axis = Direction::ALL
        .into_iter()
        .filter(|&d| input.is_down(d))
        .fold(Vec3::ZERO, |sum, d| sum + d.axis());
    axis * speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyState;

    #[test]
    fn test_axes_are_unit_diagonals() {
        for direction in Direction::ALL {
            let axis = direction.axis();
            assert_eq!(axis.y, 0.0);
            assert_eq!(axis.x.abs(), 1.0);
            assert_eq!(axis.z.abs(), 1.0);
        }
    }

    #[test]
    fn test_no_keys_no_motion() {
        assert_eq!(frame_displacement(&KeyState::new(), MOVE_SPEED), Vec3::ZERO);
    }

    #[test]
    fn test_single_direction() {
        let keys = KeyState::holding(&[Direction::Right]);
        assert_eq!(
            frame_displacement(&keys, MOVE_SPEED),
            Vec3::new(MOVE_SPEED, 0.0, -MOVE_SPEED)
        );
    }

    #[test]
    fn test_all_four_cancel() {
        let keys = KeyState::holding(&Direction::ALL);
        assert_eq!(frame_displacement(&keys, MOVE_SPEED), Vec3::ZERO);
    }

    #[test]
    fn test_back_and_right_add_on_x() {
        let keys = KeyState::holding(&[Direction::Back, Direction::Right]);
        assert_eq!(
            frame_displacement(&keys, MOVE_SPEED),
            Vec3::new(2.0 * MOVE_SPEED, 0.0, 0.0)
        );
    }
}
