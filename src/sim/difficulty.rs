//! Difficulty levels and the speed/fruit-lifetime each one implies

use serde::{Deserialize, Serialize};

/// Difficulty selected on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Parameters a difficulty applies to the session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Head speed in play-area units per second
    pub step_speed: f32,
    /// How long a fruit stays put before relocating
    pub fruit_lifetime_ms: u64,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn params(&self) -> DifficultyParams {
        match self {
            Difficulty::Easy => DifficultyParams {
                step_speed: 0.25,
                fruit_lifetime_ms: 15_000,
            },
            Difficulty::Medium => DifficultyParams {
                step_speed: 0.45,
                fruit_lifetime_ms: 10_000,
            },
            Difficulty::Hard => DifficultyParams {
                step_speed: 0.65,
                fruit_lifetime_ms: 5_000,
            },
        }
    }

    /// Easy -> Medium -> Hard -> Easy
    pub fn cycle(&self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }
}
