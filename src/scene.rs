use glam::{Mat4, Quat, Vec3};

use crate::camera::IsometricCamera;
use crate::config::Config;

/// Position and scale of a scene object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            scale: Vec3::ONE,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, Quat::IDENTITY, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// The model the keys move around
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedObject {
    pub name: String,
    pub transform: Transform,
}

/// Per-frame mutable state: the tracked model (once loaded) and the camera
#[derive(Debug, Clone)]
pub struct World {
    pub tracked: Option<TrackedObject>,
    pub camera: IsometricCamera,
}

impl World {
    pub fn new(config: &Config, aspect: f32) -> Self {
        Self {
            tracked: None,
            camera: IsometricCamera::new(&config.camera, aspect),
        }
    }

    /// Install the loaded model at the origin with unit scale
    pub fn install(&mut self, name: impl Into<String>) {
        self.tracked = Some(TrackedObject {
            name: name.into(),
            transform: Transform::default(),
        });
    }

    pub fn tracked_position(&self) -> Option<Vec3> {
        self.tracked.as_ref().map(|t| t.transform.position)
    }

    pub fn model_matrix(&self) -> Option<Mat4> {
        self.tracked.as_ref().map(|t| t.transform.matrix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_matrix_translates() {
        let t = Transform::at(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.matrix().transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_world_starts_empty() {
        let world = World::new(&Config::default(), 1.0);
        assert!(world.tracked.is_none());
        assert!(world.tracked_position().is_none());
        assert!(world.model_matrix().is_none());
    }

    #[test]
    fn test_install_places_model_at_origin() {
        let mut world = World::new(&Config::default(), 1.0);
        world.install("block");
        let tracked = world.tracked.as_ref().unwrap();
        assert_eq!(tracked.name, "block");
        assert_eq!(tracked.transform.position, Vec3::ZERO);
        assert_eq!(tracked.transform.scale, Vec3::ONE);
    }
}
