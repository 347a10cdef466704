use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    window::{CursorGrabMode, Window, WindowId},
};

use brdf_zoo::cli::Cli;
use brdf_zoo::config::CameraConfig;
use brdf_zoo::core::{Clock, InputSession, WinitController};
use brdf_zoo::demo::{Demo, VERTEX_SHADER};
use brdf_zoo::traits::FrameSink;
use brdf_zoo::{Camera, FrameUniforms, Projection};

/// Stand-in for the shading stage: records what would be uploaded.
#[derive(Default)]
struct LogSink {
    frames: u64,
}

impl FrameSink for LogSink {
    fn submit(&mut self, uniforms: &FrameUniforms) -> Result<()> {
        self.frames += 1;
        trace!("frame {}: {:?}", self.frames, uniforms);
        Ok(())
    }
}

struct App {
    title: String,
    size: (u32, u32),
    window: Option<Arc<Window>>,
    camera: Camera,
    session: InputSession,
    controller: WinitController,
    clock: Clock,
    projection: Projection,
    sink: LogSink,
    grabbed: bool,
    fatal: Option<anyhow::Error>,
}

impl App {
    fn new(demo: Demo, size: (u32, u32), camera: Camera) -> Self {
        Self {
            title: format!("BRDF Zoo - {demo}"),
            size,
            window: None,
            camera,
            session: InputSession::new(size.0, size.1),
            controller: WinitController::new(),
            clock: Clock::new(),
            projection: Projection::default(),
            sink: LogSink::default(),
            grabbed: false,
            fatal: None,
        }
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<Arc<Window>> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title(self.title.as_str())
                    .with_inner_size(winit::dpi::PhysicalSize::new(self.size.0, self.size.1)),
            )
            .context("failed to create window")?;
        Ok(Arc::new(window))
    }

    /// Keep the OS cursor grab in step with the session's capture state.
    /// Look input comes from raw device motion, so a locked cursor is
    /// preferred; confinement is the fallback where locking is unsupported.
    fn sync_cursor_grab(&mut self) {
        let captured = self.session.is_captured();
        if captured == self.grabbed {
            return;
        }
        let Some(window) = &self.window else {
            return;
        };

        if captured {
            if let Err(e) = window
                .set_cursor_grab(CursorGrabMode::Locked)
                .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
            {
                warn!("cursor grab unavailable: {e}");
            }
        } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
            warn!("failed to release cursor grab: {e}");
        }
        window.set_cursor_visible(!captured);
        self.grabbed = captured;
    }

    fn redraw(&mut self) -> Result<()> {
        let elapsed = self.clock.tick();
        self.session
            .update(&self.controller, &mut self.camera, elapsed);
        self.sync_cursor_grab();

        let uniforms = FrameUniforms::new(
            &self.camera,
            self.size,
            self.projection,
            self.session.shading(),
        );
        self.sink.submit(&uniforms)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(window) => {
                self.window = Some(window);
                self.sync_cursor_grab();
                self.clock = Clock::new();
            }
            Err(e) => {
                self.fatal = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                debug!("viewport resized to {}x{}", size.width, size.height);
                self.size = (size.width, size.height);
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    error!("frame submission failed: {e:#}");
                    self.fatal = Some(e);
                    event_loop.exit();
                }
            }
            other => {
                if let Some(pointer) = self.controller.process_event(&other) {
                    self.session.handle_pointer(pointer, &mut self.camera);
                }
            }
        }
    }

    fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
        if let Some(pointer) = WinitController::process_device_event(&event) {
            self.session.handle_pointer(pointer, &mut self.camera);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let demo = Demo::from_number(cli.demo)?;

    let config = match &cli.config {
        Some(path) => CameraConfig::load(path)
            .with_context(|| format!("loading camera config {}", path.display()))?,
        None => CameraConfig::default(),
    };

    let mut camera = Camera::with_config(&config);
    camera.set_position_bounds(config.resolve_bounds(demo)?);

    info!(
        "Selected {demo}: shaders {VERTEX_SHADER} + {}",
        demo.fragment_shader()
    );
    debug!("camera bounds {:?}", camera.position_bounds());

    let event_loop = EventLoop::new()?;
    let mut app = App::new(demo, (cli.width, cli.height), camera);

    info!("Controls: WASD, Space/Shift, mouse look, scroll zoom, 0/1/2 specular, L/O/K diffuse, Escape releases cursor");
    event_loop.run_app(&mut app)?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
