//! Input intent tracking.
//!
//! Raw device events are reduced to a handful of level-triggered intents:
//!
//! - **Held keys:** `move_left_held` / `move_right_held` stay true from key-down
//!   until the matching key-up.
//! - **Pointer:** the last horizontal pointer coordinate, in game space.
//! - **Close:** latched once requested; the game loop checks it every frame.
//!
//! The tracker also remembers which device produced input most recently so the
//! simulation can arbitrate between keyboard and pointer paddle control.

use crate::sim::{ControlSource, PaddleControl, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
}

/// Device-independent input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Closed,
    KeyPressed(Key),
    KeyReleased(Key),
    MouseMoved { x: f32, y: f32 },
}

#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    move_left_held: bool,
    move_right_held: bool,
    pointer_x: Option<f32>,
    close_requested: bool,
    last_source: ControlSource,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Closed => self.close_requested = true,
            InputEvent::KeyPressed(key) => {
                self.set_held(key, true);
                self.last_source = ControlSource::Keyboard;
            }
            InputEvent::KeyReleased(key) => self.set_held(key, false),
            InputEvent::MouseMoved { x, .. } => {
                self.pointer_x = Some(x);
                self.last_source = ControlSource::Pointer;
            }
        }
    }

    fn set_held(&mut self, key: Key, held: bool) {
        match key {
            Key::Left => self.move_left_held = held,
            Key::Right => self.move_right_held = held,
        }
    }

    pub fn move_left_held(&self) -> bool {
        self.move_left_held
    }

    pub fn move_right_held(&self) -> bool {
        self.move_right_held
    }

    pub fn pointer_x(&self) -> Option<f32> {
        self.pointer_x
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    pub fn last_source(&self) -> ControlSource {
        self.last_source
    }

    /// Snapshot the current intents for one simulation tick
    pub fn intents(&self, control: PaddleControl) -> TickInput {
        TickInput {
            move_left: self.move_left_held,
            move_right: self.move_right_held,
            pointer_x: self.pointer_x,
            last_source: self.last_source,
            control,
        }
    }
}
