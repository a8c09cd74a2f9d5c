//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering,
//! audio and platform dependencies:
//! - Elapsed time and the clock reading are passed in
//! - Randomness comes through `PointSource`
//! - Side effects are reported as `GameEvent`s

pub mod difficulty;
pub mod entity;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use difficulty::{Difficulty, DifficultyParams};
pub use entity::{Entity, has_collided};
pub use geometry::{Quad, distance, div_or_keep};
pub use spawn::{PointSource, SeededPoints};
pub use state::{Direction, GameEvent, GamePhase, GameState};
pub use tick::tick;
