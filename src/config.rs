// config.rs - Scene, camera and shading settings
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::movement::MOVE_SPEED;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub movement: MovementConfig,
    pub scene: SceneConfig,
    pub shading: ShadingConfig,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Isometric Follow".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Half of the visible height in world units; controls zoom
    pub view_size: f32,
    pub near: f32,
    pub far: f32,
    /// Camera position relative to the tracked model
    pub follow_offset: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            view_size: 20.0,
            near: 1.0,
            far: 1000.0,
            follow_offset: [20.0, 20.0, 20.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Per-axis displacement per frame
    pub speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self { speed: MOVE_SPEED }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// 0xRRGGBB
    pub clear_color: u32,
    pub ground_size: f32,
    pub ground_height: f32,
    pub ground_color: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: 0x87CEEB,
            ground_size: 100.0,
            ground_height: -1.0,
            ground_color: 0x228B22,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Diffuse term raised to a power, no ambient
    Soft,
    /// Ambient plus lambert diffuse
    Standard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    pub mode: ShadingMode,
    pub light_position: [f32; 3],
    /// Color applied to every model mesh
    pub diffuse_color: u32,
    /// Exponent on the diffuse term in soft mode
    pub softness: f32,
    /// Ambient floor in standard mode
    pub ambient: f32,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            mode: ShadingMode::Soft,
            light_position: [50.0, 50.0, 50.0],
            diffuse_color: 0xAAAAAA,
            softness: 1.5,
            ambient: 0.4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("assets/block.glb"),
        }
    }
}

impl Config {
    /// Read a JSON config file; absent fields keep their defaults
    ///
    /// Values are not validated here; `load` validates after CLI overrides.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse config JSON")
    }

    /// Defaults or the `--config` file, then command-line overrides
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(path) = &cli.model {
            self.model.path = path.clone();
        }
        if let Some(mode) = cli.shading {
            self.shading.mode = mode;
        }
        if let Some(width) = cli.width {
            self.window.width = width;
        }
        if let Some(height) = cli.height {
            self.window.height = height;
        }
    }

    pub fn validate(&self) -> Result<()> {
        let camera = &self.camera;
        if !(camera.view_size > 0.0) {
            bail!("camera.view_size must be positive, got {}", camera.view_size);
        }
        if !(camera.near < camera.far) {
            bail!(
                "camera.near ({}) must be less than camera.far ({})",
                camera.near,
                camera.far
            );
        }
        if camera.follow_offset.iter().any(|c| !c.is_finite()) {
            bail!("camera.follow_offset must be finite");
        }
        if camera.follow_offset == [0.0; 3] {
            bail!("camera.follow_offset must not be zero");
        }
        if !self.movement.speed.is_finite() {
            bail!("movement.speed must be finite");
        }
        if !(self.scene.ground_size > 0.0) {
            bail!("scene.ground_size must be positive");
        }
        if self.window.width == 0 || self.window.height == 0 {
            bail!("window size must be non-zero");
        }
        Ok(())
    }
}
