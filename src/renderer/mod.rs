//! wgpu rendering module
//!
//! The game loop only sees `FrameSink`; `Renderer` is the window-backed
//! implementation. Meshes are built on the CPU (`scene`) and drawn through a
//! single flat-color pipeline (`pipeline`).

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod vertex;

use std::sync::Arc;

use winit::window::Window;

pub use pipeline::RenderState;
pub use text::{ResourceError, TextRenderer};
pub use vertex::Vertex;

use crate::settings::Settings;
use crate::sim::GameState;

/// Something that can present the current game state
pub trait FrameSink {
    /// Clear, draw every visible entity and the HUD, then present
    fn draw_frame(&mut self, state: &GameState);
}

/// Window-backed frame sink
pub struct Renderer {
    gpu: RenderState,
    text: TextRenderer,
    font_size: f32,
}

impl Renderer {
    /// Creates the GPU state; a missing font only disables the HUD text
    pub fn new(window: Arc<Window>, settings: &Settings) -> anyhow::Result<Self> {
        let gpu = RenderState::new(window, settings.vsync)?;
        let text = TextRenderer::load_or_disabled(&settings.font_path);
        Ok(Self {
            gpu,
            text,
            font_size: settings.font_size,
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        self.gpu.size
    }
}

impl FrameSink for Renderer {
    fn draw_frame(&mut self, state: &GameState) {
        let vertices = scene::build_frame(state, &mut self.text, self.font_size);
        match self.gpu.render(&vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.gpu.size;
                self.gpu.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
