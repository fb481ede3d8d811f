//! Frame mesh construction
//!
//! Turns a `GameState` into one triangle list in game space. Pure CPU work,
//! so everything drawn can be checked without a GPU.

use glam::Vec2;

use super::shapes;
use super::text::TextRenderer;
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::GameState;

const BALL_SEGMENTS: u32 = 24;
const BRICK_OUTLINE_WIDTH: f32 = 1.0;

pub fn score_label(state: &GameState) -> String {
    format!("Score: {}", state.score)
}

pub fn lives_label(state: &GameState) -> String {
    format!("Lives: {}", state.lives)
}

/// Bricks, paddle, ball, then the HUD on top
pub fn build_frame(state: &GameState, text: &mut TextRenderer, font_size: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    for brick in state.alive_bricks() {
        shapes::push_rect(&mut vertices, brick.pos, brick.size, brick.color);
        vertices.extend(shapes::rect_outline(
            brick.pos,
            brick.size,
            BRICK_OUTLINE_WIDTH,
            colors::BRICK_OUTLINE,
        ));
    }

    shapes::push_rect(&mut vertices, state.paddle.pos, state.paddle.size, colors::PADDLE);
    vertices.extend(shapes::circle(
        state.ball.pos,
        state.ball.radius,
        colors::BALL,
        BALL_SEGMENTS,
    ));

    vertices.extend_from_slice(text.layout(
        &score_label(state),
        Vec2::splat(HUD_MARGIN),
        font_size,
        colors::HUD_TEXT,
    ));
    vertices.extend_from_slice(text.layout(
        &lives_label(state),
        Vec2::new(WINDOW_WIDTH - HUD_LIVES_INSET, HUD_MARGIN),
        font_size,
        colors::HUD_TEXT,
    ));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Vertices per brick: fill quad plus four outline bars
    const BRICK_VERTS: usize = 6 + 24;
    const PADDLE_VERTS: usize = 6;
    const BALL_VERTS: usize = BALL_SEGMENTS as usize * 3;

    #[test]
    fn test_full_grid_mesh_size() {
        let state = GameState::new(1);
        let mut text = TextRenderer::disabled();
        let vertices = build_frame(&state, &mut text, HUD_FONT_SIZE);
        assert_eq!(vertices.len(), 60 * BRICK_VERTS + PADDLE_VERTS + BALL_VERTS);
    }

    #[test]
    fn test_dead_bricks_are_not_drawn() {
        let mut state = GameState::new(1);
        for brick in state.bricks.iter_mut().take(7) {
            brick.alive = false;
        }
        let mut text = TextRenderer::disabled();
        let vertices = build_frame(&state, &mut text, HUD_FONT_SIZE);
        assert_eq!(vertices.len(), 53 * BRICK_VERTS + PADDLE_VERTS + BALL_VERTS);

        // Nothing is drawn with the first row's color anywhere in its footprint
        let dead = &state.bricks[0];
        assert!(!vertices.iter().any(|v| v.color == dead.color
            && v.position[0] >= dead.pos.x
            && v.position[0] <= dead.pos.x + dead.size.x
            && v.position[1] >= dead.pos.y
            && v.position[1] <= dead.pos.y + dead.size.y));
    }

    #[test]
    fn test_ball_and_paddle_follow_state() {
        let mut state = GameState::new(1);
        state.ball.pos = Vec2::new(123.0, 456.0);
        let mut text = TextRenderer::disabled();
        let vertices = build_frame(&state, &mut text, HUD_FONT_SIZE);

        let ball_start = 60 * BRICK_VERTS + PADDLE_VERTS;
        assert_eq!(vertices[ball_start].position, [123.0, 456.0]);

        let paddle = &vertices[60 * BRICK_VERTS];
        assert_eq!(paddle.position, state.paddle.pos.to_array());
        assert_eq!(paddle.color, colors::PADDLE);
    }

    #[test]
    fn test_labels() {
        let mut state = GameState::new(1);
        state.score = 250;
        state.lives = 2;
        assert_eq!(score_label(&state), "Score: 250");
        assert_eq!(lives_label(&state), "Lives: 2");
    }
}
