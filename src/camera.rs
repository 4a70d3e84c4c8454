use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::renderer::SceneUniform;

/// Orthographic camera looking down the (-1, -1, -1) diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct IsometricCamera {
    pub position: Vec3,
    pub target: Vec3,
    /// Half of the visible height in world units
    pub view_size: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl IsometricCamera {
    /// Camera in its start pose: offset from the origin, looking at it
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            position: Vec3::from_array(config.follow_offset),
            target: Vec3::ZERO,
            view_size: config.view_size,
            aspect,
            near: config.near,
            far: config.far,
        }
    }

    /// Place the camera at `target + offset` and face `target`
    pub fn follow(&mut self, target: Vec3, offset: Vec3) {
        self.position = target + offset;
        self.target = target;
    }

    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_height = self.view_size;
        let half_width = self.view_size * self.aspect;
        Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            self.near,
            self.far,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn to_uniform(&self) -> SceneUniform {
        SceneUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
        }
    }
}
