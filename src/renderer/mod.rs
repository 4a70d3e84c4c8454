pub mod gpu;
pub mod mesh;

use anyhow::Result;
use glam::Mat4;

use crate::config::{ShadingConfig, ShadingMode};
use crate::loaders::PreparedModel;
use crate::scene::World;

pub use gpu::WgpuRenderer;
pub use mesh::{ground_plane, MeshGeometry, Vertex};

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniform {
    pub view_proj: [[f32; 4]; 4],
}

/// Light uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightUniform {
    pub position: [f32; 3],
    /// 0 = soft, 1 = standard
    pub mode: u32,
    pub softness: f32,
    pub ambient: f32,
    pub _pad: [f32; 2],
}

impl LightUniform {
    pub fn from_config(shading: &ShadingConfig) -> Self {
        Self {
            position: shading.light_position,
            mode: match shading.mode {
                ShadingMode::Soft => 0,
                ShadingMode::Standard => 1,
            },
            softness: shading.softness,
            ambient: shading.ambient,
            _pad: [0.0; 2],
        }
    }
}

/// Per-draw uniform: object transform and flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniform {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

impl DrawUniform {
    pub fn new(model: Mat4, color: [f32; 3]) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], 1.0],
        }
    }
}

/// Something that can draw the world once per frame
pub trait SceneRenderer {
    /// Take ownership of the model's geometry; replaces any earlier model
    fn install_model(&mut self, model: &PreparedModel) -> Result<()>;

    /// Draw the ground and, if installed, the model at the world's transform
    fn render(&mut self, world: &World) -> Result<()>;

    /// Resize the drawing target in physical pixels
    fn resize(&mut self, width: u32, height: u32);
}

/// Renderer that draws nothing; counts frames for headless runs and tests
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames: u64,
    pub model: Option<String>,
    pub last_view_proj: Option<Mat4>,
}

impl SceneRenderer for NullRenderer {
    fn install_model(&mut self, model: &PreparedModel) -> Result<()> {
        self.model = Some(model.name.clone());
        Ok(())
    }

    fn render(&mut self, world: &World) -> Result<()> {
        self.frames += 1;
        self.last_view_proj = Some(world.camera.view_projection());
        Ok(())
    }

    fn resize(&mut self, _width: u32, _height: u32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_uniform_sizes_are_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<SceneUniform>(), 64);
        assert_eq!(std::mem::size_of::<LightUniform>(), 32);
        assert_eq!(std::mem::size_of::<DrawUniform>(), 80);
    }

    #[test]
    fn test_light_uniform_mode() {
        let mut shading = ShadingConfig::default();
        assert_eq!(LightUniform::from_config(&shading).mode, 0);
        shading.mode = ShadingMode::Standard;
        let light = LightUniform::from_config(&shading);
        assert_eq!(light.mode, 1);
        assert_eq!(light.position, [50.0, 50.0, 50.0]);
    }

    #[test]
    fn test_null_renderer_counts_frames() {
        let world = World::new(&Config::default(), 1.0);
        let mut renderer = NullRenderer::default();
        renderer.render(&world).unwrap();
        renderer.render(&world).unwrap();
        assert_eq!(renderer.frames, 2);
        assert_eq!(renderer.last_view_proj, Some(world.camera.view_projection()));
    }
}
