//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (monotonic millisecond clock)
//! - Input events

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, Key, ScriptedInput};
pub use time::{Clock, ManualClock, SystemClock};
