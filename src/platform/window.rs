//! Native window creation and winit event translation

use std::sync::Arc;

use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes};

use super::input::{InputEvent, Key};
use crate::consts::{WINDOW_HEIGHT, WINDOW_WIDTH};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Brick Breaker Game".to_string(),
            width: WINDOW_WIDTH as u32,
            height: WINDOW_HEIGHT as u32,
        }
    }
}

pub fn create_window(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> anyhow::Result<Arc<Window>> {
    let attrs = WindowAttributes::default()
        .with_title(&config.title)
        .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height))
        .with_resizable(false);

    let window = event_loop
        .create_window(attrs)
        .map_err(|e| anyhow::anyhow!("failed to create window: {e}"))?;
    Ok(Arc::new(window))
}

/// Arrow keys plus A/D
pub fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::ArrowLeft | KeyCode::KeyA => Some(Key::Left),
        KeyCode::ArrowRight | KeyCode::KeyD => Some(Key::Right),
        _ => None,
    }
}

/// Scale a physical cursor coordinate into game space
pub fn to_game_space(physical: (f64, f64), surface_size: (u32, u32)) -> (f32, f32) {
    let (w, h) = (surface_size.0.max(1) as f64, surface_size.1.max(1) as f64);
    (
        (physical.0 / w * WINDOW_WIDTH as f64) as f32,
        (physical.1 / h * WINDOW_HEIGHT as f64) as f32,
    )
}

/// Translate a window event into an input event, if it is one we track
pub fn translate(event: &WindowEvent, surface_size: (u32, u32)) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Closed),
        WindowEvent::KeyboardInput { event, .. } => {
            let PhysicalKey::Code(code) = event.physical_key else {
                return None;
            };
            let key = map_key(code)?;
            match event.state {
                ElementState::Pressed => Some(InputEvent::KeyPressed(key)),
                ElementState::Released => Some(InputEvent::KeyReleased(key)),
            }
        }
        WindowEvent::CursorMoved { position, .. } => {
            let (x, y) = to_game_space((position.x, position.y), surface_size);
            Some(InputEvent::MouseMoved { x, y })
        }
        _ => None,
    }
}
