//! Per-frame game loop
//!
//! A `Session` owns everything one game needs. Each call to `Session::frame`
//! is one atomic frame: feed pending input → honor a close request → tick the
//! simulation → draw. Terminal phases are returned as an `Outcome` instead of
//! ending the process, so the caller decides how to shut down.

use crate::platform::{InputEvent, InputTracker};
use crate::renderer::FrameSink;
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, PaddleControl, tick};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { score: u32 },
    Lost { score: u32 },
    Closed,
}

impl Outcome {
    /// Line printed to stdout when the game ends
    pub fn message(&self) -> Option<String> {
        match self {
            Outcome::Won { .. } => Some("You Win!".to_string()),
            Outcome::Lost { score } => Some(format!("Game Over! Final Score: {score}")),
            Outcome::Closed => None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match self {
            Outcome::Won { .. } => GamePhase::Won,
            Outcome::Lost { .. } => GamePhase::Lost,
            Outcome::Closed => GamePhase::Closed,
        }
    }
}

pub struct Session {
    state: GameState,
    input: InputTracker,
    control: PaddleControl,
    frames: u64,
}

impl Session {
    pub fn new(seed: u64, control: PaddleControl) -> Self {
        log::info!("New session (seed {seed}, paddle control {control:?})");
        Self {
            state: GameState::new(seed),
            input: InputTracker::new(),
            control,
            frames: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.resolved_seed(), settings.paddle_control)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    /// Frames simulated so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The terminal outcome, if the session has ended
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state.phase {
            GamePhase::Playing => None,
            GamePhase::Won => Some(Outcome::Won {
                score: self.state.score,
            }),
            GamePhase::Lost => Some(Outcome::Lost {
                score: self.state.score,
            }),
            GamePhase::Closed => Some(Outcome::Closed),
        }
    }

    /// Run one frame. Returns `Some` once the session is over; the frame that
    /// ends the session is not drawn.
    pub fn frame<I, S>(&mut self, events: I, sink: &mut S) -> Option<Outcome>
    where
        I: IntoIterator<Item = InputEvent>,
        S: FrameSink + ?Sized,
    {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }

        for event in events {
            self.input.handle(event);
        }

        if self.input.close_requested() {
            log::info!("Close requested, exiting.");
            self.state.phase = GamePhase::Closed;
            return self.outcome();
        }

        let intents = self.input.intents(self.control);
        tick(&mut self.state, &intents);
        self.frames += 1;
        self.log_events();

        if let Some(outcome) = self.outcome() {
            log::info!(
                "Session ended after {} frames: {:?}",
                self.frames,
                outcome
            );
            return Some(outcome);
        }

        sink.draw_frame(&self.state);
        None
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match event {
                GameEvent::BrickDestroyed { row, col } => {
                    log::debug!("Brick ({row}, {col}) destroyed, score {}", self.state.score);
                }
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ball lost, {remaining} lives left");
                }
                GameEvent::Won => log::info!("All bricks destroyed"),
                GameEvent::Lost => log::info!("Out of lives"),
                GameEvent::WallBounce | GameEvent::CeilingBounce | GameEvent::PaddleBounce => {
                    log::trace!("{event:?}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::Key;
    use glam::Vec2;

    /// Records what it was asked to draw
    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<(u32, u8, f32)>,
    }

    impl FrameSink for RecordingSink {
        fn draw_frame(&mut self, state: &GameState) {
            self.frames
                .push((state.score, state.lives, state.paddle.pos.x));
        }
    }

    fn session() -> Session {
        let mut session = Session::new(3, PaddleControl::MostRecent);
        // Keep the ball out of the way: drifting up through the empty middle
        session.state_mut().ball.pos = Vec2::new(400.0, 400.0);
        session.state_mut().ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        session
    }

    #[test]
    fn test_frame_draws_and_continues() {
        let mut session = session();
        let mut sink = RecordingSink::default();

        assert_eq!(session.frame([], &mut sink), None);
        assert_eq!(sink.frames.len(), 1);
        assert_eq!(session.frames(), 1);
    }

    #[test]
    fn test_keyboard_events_move_paddle() {
        let mut session = session();
        let mut sink = RecordingSink::default();
        let start = session.state().paddle.pos.x;

        session.frame([InputEvent::KeyPressed(Key::Right)], &mut sink);
        session.frame([], &mut sink);
        session.frame([InputEvent::KeyReleased(Key::Right)], &mut sink);

        assert_eq!(sink.frames[0].2, start + PADDLE_SPEED);
        assert_eq!(sink.frames[1].2, start + 2.0 * PADDLE_SPEED);
        assert_eq!(sink.frames[2].2, start + 2.0 * PADDLE_SPEED);
    }

    #[test]
    fn test_pointer_events_move_paddle() {
        let mut session = session();
        let mut sink = RecordingSink::default();

        session.frame([InputEvent::MouseMoved { x: 100.0, y: 0.0 }], &mut sink);
        assert_eq!(sink.frames[0].2, 100.0 - PADDLE_WIDTH / 2.0);
    }

    #[test]
    fn test_close_request_ends_without_drawing() {
        let mut session = session();
        let mut sink = RecordingSink::default();

        let outcome = session.frame([InputEvent::Closed], &mut sink);
        assert_eq!(outcome, Some(Outcome::Closed));
        assert!(sink.frames.is_empty());
        assert_eq!(session.state().phase, GamePhase::Closed);
        assert_eq!(session.frames(), 0);
    }

    #[test]
    fn test_losing_last_life() {
        let mut session = session();
        let mut sink = RecordingSink::default();
        {
            let state = session.state_mut();
            state.lives = 1;
            state.score = 70;
            state.ball.pos = Vec2::new(50.0, WINDOW_HEIGHT + 1.0);
        }

        let outcome = session.frame([], &mut sink);
        assert_eq!(outcome, Some(Outcome::Lost { score: 70 }));
        assert_eq!(session.state().lives, 0);
        assert!(sink.frames.is_empty());
        assert_eq!(
            outcome.and_then(|o| o.message()).as_deref(),
            Some("Game Over! Final Score: 70")
        );
    }

    #[test]
    fn test_winning_on_last_brick() {
        let mut session = session();
        let mut sink = RecordingSink::default();
        {
            let state = session.state_mut();
            for brick in state.bricks.iter_mut().skip(1) {
                brick.alive = false;
            }
            state.score = MAX_SCORE - POINTS_PER_BRICK;
            let target = state.bricks[0].bounds();
            state.ball.pos = (target.min + target.max) / 2.0 - state.ball.vel;
        }

        let outcome = session.frame([], &mut sink);
        assert_eq!(outcome, Some(Outcome::Won { score: 600 }));
        assert_eq!(outcome.and_then(|o| o.message()).as_deref(), Some("You Win!"));
        assert_eq!(outcome.map(|o| o.phase()), Some(GamePhase::Won));
    }

    #[test]
    fn test_terminal_session_stays_terminal() {
        let mut session = session();
        let mut sink = RecordingSink::default();
        session.frame([InputEvent::Closed], &mut sink);

        let outcome = session.frame([InputEvent::KeyPressed(Key::Left)], &mut sink);
        assert_eq!(outcome, Some(Outcome::Closed));
        assert!(sink.frames.is_empty());
        assert!(!session.input().move_left_held());
    }

    #[test]
    fn test_unattended_frames_keep_invariants() {
        let mut session = Session::new(11, PaddleControl::MostRecent);
        let mut sink = RecordingSink::default();

        for _ in 0..5_000 {
            let outcome = session.frame([], &mut sink);
            let state = session.state();
            assert_eq!(state.score as usize, 10 * state.bricks_destroyed());
            assert!(state.lives <= STARTING_LIVES);
            if let Some(outcome) = outcome {
                assert!(matches!(outcome, Outcome::Won { .. } | Outcome::Lost { .. }));
                break;
            }
        }

        // Every drawn frame was a live one
        assert_eq!(sink.frames.len() as u64, session.frames() - session.outcome().map_or(0, |_| 1));
    }

    #[test]
    fn test_closed_outcome_is_silent() {
        assert_eq!(Outcome::Closed.message(), None);
        assert_eq!(Outcome::Closed.phase(), GamePhase::Closed);
    }
}
