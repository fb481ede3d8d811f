//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-frame speeds
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Aabb, WallContact, wall_contact};
pub use state::{BRICK_PALETTE, Ball, Brick, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{
    ControlSource, PaddleControl, TickInput, detect_brick_collisions, move_ball, move_paddle, tick,
};
