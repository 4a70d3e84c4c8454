// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::config::ShadingMode;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "isometric-follow")]
#[command(about = "Walk a glTF model around an isometric scene with WASD", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields use defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model file to load (.glb or .gltf)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Lighting model for the scene
    #[arg(long, value_enum)]
    pub shading: Option<ShadingMode>,

    /// Initial window width in logical pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height in logical pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Run N frames without a window and exit
    #[arg(long = "headless-frames", value_name = "N")]
    pub headless_frames: Option<u64>,

    /// Direction held for the whole headless run (forward, back, left, right)
    #[arg(long = "hold", value_name = "DIRECTION")]
    pub hold: Vec<String>,
}
