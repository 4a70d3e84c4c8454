use anyhow::Result;

use crate::config::Config;
use crate::core::KeyState;
use crate::loaders::{LoadPoll, MaterialBinder, ModelScene, PendingModel};
use crate::math::hex_to_linear;
use crate::renderer::SceneRenderer;
use crate::scene::World;
use crate::updater::TransformUpdater;

/// Everything one frame reads or writes, independent of the window
pub struct Session {
    pub keys: KeyState,
    pub world: World,
    updater: TransformUpdater,
    pending: PendingModel,
    model_color: [f32; 3],
}

impl Session {
    /// Start the session and begin loading the configured model
    pub fn new(config: &Config, aspect: f32) -> Self {
        Self::with_pending(config, aspect, PendingModel::spawn(&config.model.path))
    }

    pub fn with_pending(config: &Config, aspect: f32, pending: PendingModel) -> Self {
        Self {
            keys: KeyState::new(),
            world: World::new(config, aspect),
            updater: TransformUpdater::new(config),
            pending,
            model_color: hex_to_linear(config.shading.diffuse_color),
        }
    }

    /// One frame: pick up a finished load, apply input, draw
    pub fn frame<R: SceneRenderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        if let LoadPoll::Ready(model) = self.pending.poll() {
            self.install(model, renderer);
        }
        self.updater.step(&self.keys, &mut self.world);
        renderer.render(&self.world)
    }

    /// Block until the model load finishes or fails
    pub fn wait_for_model<R: SceneRenderer + ?Sized>(&mut self, renderer: &mut R) {
        if let LoadPoll::Ready(model) = self.pending.wait() {
            self.install(model, renderer);
        }
    }

    pub fn load_settled(&self) -> bool {
        self.pending.is_settled()
    }

    fn install<R: SceneRenderer + ?Sized>(&mut self, model: ModelScene, renderer: &mut R) {
        let prepared = MaterialBinder::bind(&model, self.model_color);
        if let Err(e) = renderer.install_model(&prepared) {
            log::error!("Error installing model '{}': {:#}", prepared.name, e);
            return;
        }
        log::info!(
            "Tracking model '{}' ({} meshes, {} skipped)",
            prepared.name,
            prepared.meshes.len(),
            prepared.skipped.len()
        );
        self.world.install(prepared.name);
    }
}
