//! Per-frame simulation tick
//!
//! Advances the session by exactly one frame. The three steps always run in
//! the same order: paddle, ball, bricks. The paddle moves first so the ball
//! is tested against where the paddle is this frame, not last frame.

use serde::{Deserialize, Serialize};

use super::collision::wall_contact;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Which device last drove the paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlSource {
    #[default]
    Keyboard,
    Pointer,
}

/// How keyboard and pointer control are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddleControl {
    /// Whichever device produced input most recently drives the paddle
    #[default]
    MostRecent,
    /// Once the pointer has moved, it overrides the keyboard every frame
    PointerOverride,
}

/// Input intents for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Last known pointer x (game space), if the pointer ever moved
    pub pointer_x: Option<f32>,
    pub last_source: ControlSource,
    pub control: PaddleControl,
}

/// Advance the game state by one frame and return the resulting phase
pub fn tick(state: &mut GameState, input: &TickInput) -> GamePhase {
    state.events.clear();

    if state.phase.is_terminal() {
        return state.phase;
    }

    move_paddle(state, input);
    move_ball(state);
    if !state.phase.is_terminal() {
        detect_brick_collisions(state);
    }

    state.phase
}

/// Keyboard movement with edge checks, then pointer control
pub fn move_paddle(state: &mut GameState, input: &TickInput) {
    let paddle = &mut state.paddle;
    let max_x = WINDOW_WIDTH - paddle.size.x;

    if input.move_right && paddle.right() < WINDOW_WIDTH {
        paddle.pos.x = (paddle.pos.x + PADDLE_SPEED).min(max_x);
    }
    if input.move_left && paddle.left() > 0.0 {
        paddle.pos.x = (paddle.pos.x - PADDLE_SPEED).max(0.0);
    }

    let pointer_drives = match input.control {
        PaddleControl::PointerOverride => input.pointer_x.is_some(),
        PaddleControl::MostRecent => input.last_source == ControlSource::Pointer,
    };
    if pointer_drives {
        if let Some(x) = input.pointer_x {
            paddle.center_on(x);
        }
    }
}

/// Integrate the ball and resolve walls, paddle and floor
pub fn move_ball(state: &mut GameState) {
    state.ball.pos += state.ball.vel;

    let bounds = state.ball.bounds();
    let contact = wall_contact(&bounds, WINDOW_WIDTH, WINDOW_HEIGHT);

    if contact.side() {
        state.ball.vel.x = -state.ball.vel.x;
        state.events.push(GameEvent::WallBounce);
    }
    if contact.top {
        state.ball.vel.y = -state.ball.vel.y;
        state.events.push(GameEvent::CeilingBounce);
    }

    // Always leave the paddle upward so an overlap spanning several frames
    // cannot flip the ball back into it
    if bounds.intersects(&state.paddle.bounds()) {
        state.ball.vel.y = -state.ball.vel.y.abs();
        state.events.push(GameEvent::PaddleBounce);
    }

    if contact.floor {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            remaining: state.lives,
        });

        if state.lives == 0 {
            state.phase = GamePhase::Lost;
            state.events.push(GameEvent::Lost);
        } else {
            state.ball.reset(&mut state.rng);
        }
    }
}

/// Destroy at most one brick: the first alive brick in row-major order
/// that overlaps the ball
pub fn detect_brick_collisions(state: &mut GameState) {
    let ball_bounds = state.ball.bounds();

    let Some(brick) = state
        .bricks
        .iter_mut()
        .find(|b| b.alive && b.bounds().intersects(&ball_bounds))
    else {
        return;
    };

    brick.alive = false;
    let (row, col) = (brick.row, brick.col);

    state.ball.vel.y = -state.ball.vel.y;
    state.score += POINTS_PER_BRICK;
    state.events.push(GameEvent::BrickDestroyed { row, col });

    if state.score == MAX_SCORE {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::Won);
    }
}
