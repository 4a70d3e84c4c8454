use anyhow::{Context, Result};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::config::Config;
use crate::core::CancellationToken;
use crate::frame::{next_frame, FpsCounter, FrameIterator, FrameSource};
use crate::renderer::{SceneRenderer, WgpuRenderer};
use crate::session::Session;

const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Window host: turns winit events into key state and frames
pub struct App {
    config: Config,
    session: Session,
    frames: FrameIterator,
    fps: FpsCounter,
    cancel: CancellationToken,
    window: Option<Arc<Window>>,
    renderer: Option<WgpuRenderer>,
    error: Option<anyhow::Error>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let aspect = config.window.width as f32 / config.window.height as f32;
        let session = Session::new(&config, aspect);
        Self {
            config,
            session,
            frames: FrameIterator::new(),
            fps: FpsCounter::new(FPS_REPORT_INTERVAL),
            cancel: CancellationToken::new(),
            window: None,
            renderer: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("Failed to create window")?,
        );

        let renderer = pollster::block_on(WgpuRenderer::new(window.clone(), &self.config))
            .context("Failed to initialize renderer")?;

        let size = window.inner_size();
        self.session.world.camera.set_viewport(size.width, size.height);

        self.window = Some(window);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if !self.cancel.is_cancelled() {
            log::info!("Shutting down after {} frames", self.frames.frame_count());
        }
        self.cancel.cancel();
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let Some(frame) = next_frame(&mut self.frames, &self.cancel) else {
            event_loop.exit();
            return;
        };

        if let Err(e) = self.session.frame(renderer) {
            log::error!("Render error: {:#}", e);
        }

        if let Some(fps) = self.fps.tick(frame.delta) {
            log::debug!("FPS: {:.1}", fps);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("{:#}", e);
            self.error = Some(e);
            self.shutdown(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => self.shutdown(event_loop),
            WindowEvent::KeyboardInput { .. } => {
                self.session.keys.process_event(&event);
            }
            WindowEvent::Resized(size) => {
                log::debug!("Resized to {}x{}", size.width, size.height);
                self.session.world.camera.set_viewport(size.width, size.height);
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.cancel.is_cancelled() {
            return;
        }
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run until it is closed
pub fn run(config: Config) -> Result<()> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(config);

    log::info!("Controls: WASD to move, Escape to quit");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
