//! Brick Breaker entry point
//!
//! winit drives the event loop via `ApplicationHandler`. Window events are
//! translated and queued as they arrive; every `RedrawRequested` hands the
//! queue to `Session::frame`, which simulates and draws exactly one frame.
//! When the session reports an outcome the loop exits and `main` prints the
//! final message.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use brick_breaker::platform::window::{self as platform_window, WindowConfig};
use brick_breaker::platform::InputEvent;
use brick_breaker::renderer::Renderer;
use brick_breaker::{Outcome, Session, Settings};

struct App {
    settings: Settings,
    session: Session,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    /// Events received since the last frame
    pending: Vec<InputEvent>,
    outcome: Option<Outcome>,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn new(settings: Settings) -> Self {
        let session = Session::from_settings(&settings);
        Self {
            settings,
            session,
            window: None,
            renderer: None,
            pending: Vec::new(),
            outcome: None,
            startup_error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let config = WindowConfig {
            title: self.settings.window_title.clone(),
            ..Default::default()
        };
        let window = platform_window::create_window(event_loop, &config)?;
        log::info!("Window created: {}x{}", config.width, config.height);

        self.renderer = Some(Renderer::new(window.clone(), &self.settings)?);
        self.window = Some(window);
        Ok(())
    }

    fn finish(&mut self, event_loop: &ActiveEventLoop, outcome: Outcome) {
        self.outcome = Some(outcome);
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            log::error!("Startup failed: {e:#}");
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };

        match event {
            WindowEvent::Resized(physical_size) => {
                renderer.resize(physical_size.width, physical_size.height);
            }

            WindowEvent::RedrawRequested => {
                let events = std::mem::take(&mut self.pending);
                if let Some(outcome) = self.session.frame(events, renderer) {
                    self.finish(event_loop, outcome);
                }
            }

            other => {
                if let Some(input) = platform_window::translate(&other, renderer.size()) {
                    self.pending.push(input);
                    if input == InputEvent::Closed {
                        if let Some(window) = &self.window {
                            window.request_redraw();
                        }
                    }
                }
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Brick Breaker starting...");

    let settings = Settings::load();
    let event_loop =
        EventLoop::new().map_err(|e| anyhow::anyhow!("failed to create event loop: {e}"))?;

    let mut app = App::new(settings);
    event_loop
        .run_app(&mut app)
        .map_err(|e| anyhow::anyhow!("event loop error: {e}"))?;

    if let Some(e) = app.startup_error.take() {
        return Err(e);
    }

    // Renderer and window are released before the final message
    app.renderer = None;
    app.window = None;

    match app.outcome {
        Some(outcome) => {
            if let Some(message) = outcome.message() {
                println!("{message}");
            }
        }
        None => log::info!("Event loop ended without an outcome"),
    }

    Ok(())
}
