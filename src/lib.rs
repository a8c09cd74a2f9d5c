//! Glide Snake - a free-moving snake arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, tail chain, collisions, session state)
//! - `platform`: Clock and input sources
//! - `control`: Input events to session changes
//! - `renderer`: Draw-call adapter
//! - `audio`: Sound cue sinks
//! - `settings`: Player preferences
//! - `game`: Frame driver tying the pieces together

pub mod audio;
pub mod control;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
///
/// All distances are in normalized device units, the play area spans [-1, 1].
pub mod consts {
    /// Half-width of the head's hitbox
    pub const HEAD_SCALE: f32 = 0.035;
    /// Half-width of each tail segment
    pub const TAIL_SCALE: f32 = 0.030;
    /// Half-width of the fruit
    pub const FRUIT_SCALE: f32 = 0.025;

    /// Distance kept between consecutive tail segments
    pub const TAIL_SPACING: f32 = 0.070;
    /// Length of the trailing offset used when a segment is spawned
    pub const TRAIL_OFFSET: f32 = 0.07;

    /// Head leaving this box ends the run
    pub const WALL_BOUND: f32 = 0.999;
    /// Lowest fruit coordinate on each axis (inclusive)
    pub const FRUIT_MIN: f32 = -0.975;
    /// Fruit coordinates stay below this on each axis (exclusive)
    pub const FRUIT_MAX: f32 = 0.976;

    /// Level and threshold every run starts from
    pub const START_LEVEL: u32 = 1;
    pub const START_LEVEL_SCORE: u32 = 5;
    /// Threshold growth per level (multiplied by the new level)
    pub const LEVEL_SCORE_STEP: u32 = 5;
}
