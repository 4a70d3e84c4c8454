use glam::Vec3;

use crate::camera::IsometricCamera;
use crate::config::Config;
use crate::core::Controller;
use crate::movement::frame_displacement;
use crate::scene::{Transform, World};

/// Per-frame step: move the tracked model by the held keys, then follow it
/// with the camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformUpdater {
    pub speed: f32,
    pub follow_offset: Vec3,
}

impl TransformUpdater {
    pub fn new(config: &Config) -> Self {
        Self {
            speed: config.movement.speed,
            follow_offset: Vec3::from_array(config.camera.follow_offset),
        }
    }

    /// Apply one frame of input
    ///
    /// With no tracked object nothing moves and the camera keeps its pose.
    pub fn update<C: Controller + ?Sized>(
        &self,
        input: &C,
        tracked: Option<&mut Transform>,
        camera: &mut IsometricCamera,
    ) {
        let Some(transform) = tracked else {
            return;
        };

        transform.position += frame_displacement(input, self.speed);
        camera.follow(transform.position, self.follow_offset);
    }

    /// `update` against the world's own model and camera
    pub fn step<C: Controller + ?Sized>(&self, input: &C, world: &mut World) {
        let tracked = world.tracked.as_mut().map(|t| &mut t.transform);
        self.update(input, tracked, &mut world.camera);
    }
}

impl Default for TransformUpdater {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
