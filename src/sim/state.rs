//! Game state and core simulation types
//!
//! Everything a session owns lives here. Behavior is limited to geometry
//! helpers and construction; all gameplay mutation happens in `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Every brick destroyed
    Won,
    /// Lives exhausted
    Lost,
    /// Player closed the window
    Closed,
}

impl GamePhase {
    /// No further frames are simulated once a session is terminal
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball touched a side wall
    WallBounce,
    /// Ball touched the top of the playfield
    CeilingBounce,
    PaddleBounce,
    BrickDestroyed { row: usize, col: usize },
    LifeLost { remaining: u8 },
    Won,
    Lost,
}

/// The ball (position is the circle center)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: restart_position(),
            vel: Vec2::new(BALL_SPEED, -BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Move back to the restart point, heading up with a random horizontal direction
    pub fn reset(&mut self, rng: &mut Pcg32) {
        let dir = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.pos = restart_position();
        self.vel = Vec2::new(BALL_SPEED * dir, -BALL_SPEED);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_circle(self.pos, self.radius)
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

fn restart_position() -> Vec2 {
    Vec2::new(WINDOW_WIDTH / 2.0, WINDOW_HEIGHT - BALL_RESTART_OFFSET)
}

/// The player's paddle (position is the top-left corner)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: Vec2::new(
                (WINDOW_WIDTH - PADDLE_WIDTH) / 2.0,
                WINDOW_HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Paddle {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }

    /// Center the paddle on `x`, keeping it inside the playfield
    pub fn center_on(&mut self, x: f32) {
        let max_x = WINDOW_WIDTH - self.size.x;
        self.pos.x = (x - self.size.x / 2.0).clamp(0.0, max_x);
    }
}

/// Row colors, top row first
pub const BRICK_PALETTE: [[f32; 4]; BRICK_ROWS] = [
    [1.0, 0.42, 0.42, 1.0],
    [0.31, 0.8, 0.77, 1.0],
    [0.27, 0.72, 0.82, 1.0],
    [0.59, 0.81, 0.71, 1.0],
    [1.0, 0.79, 0.34, 1.0],
    [1.0, 0.62, 0.95, 1.0],
];

/// A single brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub alive: bool,
    pub color: [f32; 4],
}

impl Brick {
    pub fn new(row: usize, col: usize) -> Self {
        let pos = Vec2::new(
            col as f32 * (BRICK_WIDTH + BRICK_PADDING) + BRICK_OFFSET_LEFT,
            row as f32 * (BRICK_HEIGHT + BRICK_PADDING) + BRICK_OFFSET_TOP,
        );
        Self {
            row,
            col,
            pos,
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            alive: true,
            color: BRICK_PALETTE[row % BRICK_PALETTE.len()],
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_rect(self.pos, self.size)
    }
}

/// Build the full grid in row-major order
pub fn brick_grid() -> Vec<Brick> {
    (0..BRICK_ROWS)
        .flat_map(|row| (0..BRICK_COLS).map(move |col| Brick::new(row, col)))
        .collect()
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub lives: u8,
    pub score: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Row-major brick grid
    pub bricks: Vec<Brick>,
    /// Events produced by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::new();
        ball.reset(&mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            lives: STARTING_LIVES,
            score: 0,
            paddle: Paddle::default(),
            ball,
            bricks: brick_grid(),
            events: Vec::new(),
        }
    }

    /// Look up a brick by grid coordinates
    pub fn brick(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= BRICK_ROWS || col >= BRICK_COLS {
            return None;
        }
        self.bricks.get(row * BRICK_COLS + col)
    }

    pub fn alive_bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.alive)
    }

    pub fn bricks_destroyed(&self) -> usize {
        self.bricks.iter().filter(|b| !b.alive).count()
    }
}
