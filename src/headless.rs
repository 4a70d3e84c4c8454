use anyhow::{bail, Result};
use glam::Vec3;

use crate::config::Config;
use crate::core::{CancellationToken, Direction, KeyState};
use crate::frame::{run_until_cancelled, FrameSource, PacedFrames};
use crate::renderer::NullRenderer;
use crate::session::Session;

const HEADLESS_HZ: f32 = 60.0;

/// Where things ended up after a headless run
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessReport {
    pub frames: u64,
    pub model_position: Option<Vec3>,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

/// Parse `--hold` arguments into directions
pub fn parse_holds(names: &[String]) -> Result<Vec<Direction>> {
    names
        .iter()
        .map(|name| match Direction::parse(name) {
            Some(direction) => Ok(direction),
            None => bail!("Unknown direction '{}' (expected forward, back, left or right)", name),
        })
        .collect()
}

/// Run `frames` frames without a window, holding `holds` the whole time
///
/// Waits for the model load to settle first so runs are reproducible.
pub fn run(config: &Config, frames: u64, holds: &[Direction]) -> Result<HeadlessReport> {
    let aspect = config.window.width as f32 / config.window.height as f32;
    let session = Session::new(config, aspect);
    run_session(session, frames, holds, &mut PacedFrames::new(HEADLESS_HZ))
}

/// Headless loop over an existing session and frame source
pub fn run_session<S: FrameSource + ?Sized>(
    mut session: Session,
    frames: u64,
    holds: &[Direction],
    source: &mut S,
) -> Result<HeadlessReport> {
    let mut renderer = NullRenderer::default();
    session.wait_for_model(&mut renderer);
    if session.world.tracked.is_none() {
        log::warn!("No model loaded; input will have no effect");
    }

    session.keys = KeyState::holding(holds);

    let token = CancellationToken::new();
    let mut error = None;
    let mut ran = 0;
    if frames > 0 {
        ran = run_until_cancelled(source, &token, |_frame| {
            if let Err(e) = session.frame(&mut renderer) {
                error = Some(e);
                token.cancel();
                return;
            }
            if renderer.frames >= frames {
                token.cancel();
            }
        });
    }
    if let Some(e) = error {
        return Err(e);
    }

    let report = HeadlessReport {
        frames: ran,
        model_position: session.world.tracked_position(),
        camera_position: session.world.camera.position,
        camera_target: session.world.camera.target,
    };
    log::info!(
        "Headless run: {} frames, model at {:?}, camera at {:?}",
        report.frames,
        report.model_position,
        report.camera_position
    );
    Ok(report)
}
