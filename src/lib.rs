pub mod app;
pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod frame;
pub mod headless;
pub mod loaders;
pub mod math;
pub mod movement;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod updater;

pub use crate::config::Config;
pub use crate::core::{Controller, Direction, KeyState};
pub use crate::scene::World;
pub use crate::session::Session;
pub use crate::updater::TransformUpdater;
