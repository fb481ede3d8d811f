//! Brick Breaker - a single-screen paddle/ball/brick arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entity state, physics, collisions)
//! - `platform`: Input tracking and window event translation
//! - `renderer`: wgpu rendering pipeline and HUD text
//! - `game`: Per-frame session loop and terminal outcomes
//! - `settings`: Runtime (non-gameplay) configuration

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Outcome, Session};
pub use settings::{PaddleControl, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (game space, pixels, y grows downward)
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the bottom of the window
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis speed in pixels per frame
    pub const BALL_SPEED: f32 = 5.0;
    /// Ball restarts this far above the bottom of the window
    pub const BALL_RESTART_OFFSET: f32 = 50.0;

    /// Brick grid layout
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 10;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 35.0;

    /// Scoring and lives
    pub const POINTS_PER_BRICK: u32 = 10;
    pub const MAX_SCORE: u32 = POINTS_PER_BRICK * (BRICK_ROWS * BRICK_COLS) as u32;
    pub const STARTING_LIVES: u8 = 3;

    /// HUD text
    pub const HUD_FONT_SIZE: f32 = 20.0;
    pub const HUD_MARGIN: f32 = 10.0;
    /// Lives label is anchored this far from the right edge
    pub const HUD_LIVES_INSET: f32 = 100.0;
}
