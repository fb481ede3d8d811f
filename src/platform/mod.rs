//! Platform abstraction layer
//!
//! - `input`: device-independent input events and the intent tracker
//! - `window`: winit window creation and event translation

pub mod input;
pub mod window;

pub use input::{InputEvent, InputTracker, Key};
