//! Session state and the transitions the engine and controller drive

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::entity::Entity;
use crate::consts::*;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Process just started; acts like game over but never plays the cue
    NotStarted,
    /// Active gameplay
    Playing,
    /// Frozen until a direction key is pressed
    Paused,
    /// Run ended, waiting for Enter
    GameOver,
}

/// Heading of the head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    #[default]
    Stopped,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Stopped => Direction::Stopped,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit vector of travel
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Stopped => Vec2::ZERO,
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::Y,
            Direction::Down => Vec2::NEG_Y,
        }
    }

    /// Where a freshly spawned segment sits relative to the one it trails
    pub fn trail_offset(&self) -> Vec2 {
        -self.unit() * TRAIL_OFFSET
    }
}

/// Things that happened during a tick, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fruit timed out and moved
    FruitExpired { pos: Vec2 },
    /// Head ate the fruit
    FruitEaten { score: u32 },
    /// Score hit the threshold, board reset
    LevelUp { level: u32 },
    /// Run ended
    GameOver { score: u32, high_score: u32 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub head: Entity,
    pub fruit: Entity,
    /// Ordered head-to-end
    pub tail: Vec<Entity>,

    pub score: u32,
    /// Best score seen in this process
    pub high_score: u32,
    pub level: u32,
    /// Score at which the next level starts
    pub level_score: u32,

    pub difficulty: Difficulty,
    /// Head speed, set from the difficulty
    pub step_speed: f32,
    pub fruit_lifetime_ms: u64,
    /// Clock reading when the fruit last moved
    pub fruit_spawn_ms: u64,

    pub direction: Direction,
    pub velocity: Vec2,
    /// Offset applied to new tail segments, follows `direction`
    pub trail_offset: Vec2,

    pub phase: GamePhase,

    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session waiting for the first Enter
    pub fn new(difficulty: Difficulty, fruit_pos: Vec2) -> Self {
        let params = difficulty.params();
        Self {
            head: Entity::new(Vec2::ZERO, HEAD_SCALE),
            fruit: Entity::new(fruit_pos, FRUIT_SCALE),
            tail: Vec::new(),
            score: 0,
            high_score: 0,
            level: START_LEVEL,
            level_score: START_LEVEL_SCORE,
            difficulty,
            step_speed: params.step_speed,
            fruit_lifetime_ms: params.fruit_lifetime_ms,
            fruit_spawn_ms: 0,
            direction: Direction::Stopped,
            velocity: Vec2::ZERO,
            trail_offset: Vec2::ZERO,
            phase: GamePhase::NotStarted,
            events: Vec::new(),
        }
    }

    /// Game over or not yet started
    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver | GamePhase::NotStarted)
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        let params = difficulty.params();
        self.difficulty = difficulty;
        self.step_speed = params.step_speed;
        self.fruit_lifetime_ms = params.fruit_lifetime_ms;
    }

    pub fn cycle_difficulty(&mut self) {
        self.set_difficulty(self.difficulty.cycle());
        log::info!("Difficulty: {}", self.difficulty.as_str());
    }

    /// Turn the head, unless it would reverse onto itself.
    ///
    /// Returns false when the turn was refused.
    pub fn steer(&mut self, dir: Direction) -> bool {
        if dir == Direction::Stopped || self.direction == dir.opposite() {
            return false;
        }
        self.velocity = dir.unit() * self.step_speed;
        self.trail_offset = dir.trail_offset();
        self.direction = dir;
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
        }
        true
    }

    /// Freeze motion until the next accepted turn
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.velocity = Vec2::ZERO;
            self.phase = GamePhase::Paused;
        }
    }

    /// Begin a new run from the game-over screen
    pub fn restart(&mut self, now_ms: u64) {
        self.score = 0;
        self.tail.clear();
        self.reset_head();
        self.fruit_spawn_ms = now_ms;
        self.phase = GamePhase::Playing;
        log::info!(
            "Run started on {} (high score {})",
            self.difficulty.as_str(),
            self.high_score
        );
    }

    /// End the run, record the high score and rewind progression
    pub fn game_over(&mut self) {
        let announce = self.phase != GamePhase::NotStarted;
        self.direction = Direction::Stopped;
        self.velocity = Vec2::ZERO;
        self.phase = GamePhase::GameOver;
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        self.level = START_LEVEL;
        self.level_score = START_LEVEL_SCORE;
        log::info!("Game over: score {}, high score {}", self.score, self.high_score);
        if announce {
            self.events.push(GameEvent::GameOver {
                score: self.score,
                high_score: self.high_score,
            });
        }
    }

    /// Clear the board and raise the threshold
    pub fn next_level(&mut self) {
        self.level += 1;
        self.tail.clear();
        self.reset_head();
        self.level_score += self.level * LEVEL_SCORE_STEP;
        log::info!("Level {} (next at {})", self.level, self.level_score);
        self.events.push(GameEvent::LevelUp { level: self.level });
    }

    /// Take the events accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    fn reset_head(&mut self) {
        self.head.set_position(Vec2::ZERO, HEAD_SCALE);
        self.direction = Direction::Stopped;
        self.velocity = Vec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> GameState {
        let mut state = GameState::new(Difficulty::Easy, Vec2::new(0.5, 0.5));
        state.restart(0);
        state
    }

    #[test]
    fn test_new_session_waits() {
        let state = GameState::new(Difficulty::Medium, Vec2::new(0.5, 0.5));
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert!(state.is_over());
        assert_eq!(state.step_speed, 0.45);
        assert_eq!(state.level, 1);
        assert_eq!(state.level_score, 5);
    }

    #[test]
    fn test_steer_refuses_reversal() {
        let mut state = playing();
        assert!(state.steer(Direction::Left));
        assert!(!state.steer(Direction::Right));
        assert_eq!(state.direction, Direction::Left);
        assert_eq!(state.velocity, Vec2::new(-0.25, 0.0));
        assert_eq!(state.trail_offset, Vec2::new(0.07, 0.0));
    }

    #[test]
    fn test_trail_offsets_trail_behind() {
        assert_eq!(Direction::Right.trail_offset(), Vec2::new(-0.07, 0.0));
        assert_eq!(Direction::Up.trail_offset(), Vec2::new(0.0, -0.07));
        assert_eq!(Direction::Down.trail_offset(), Vec2::new(0.0, 0.07));
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = playing();
        state.steer(Direction::Up);
        state.pause();
        assert!(state.is_paused());
        assert_eq!(state.velocity, Vec2::ZERO);

        // Reversing does not resume
        assert!(!state.steer(Direction::Down));
        assert!(state.is_paused());

        assert!(state.steer(Direction::Left));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_game_over_keeps_best_score() {
        let mut state = playing();
        state.score = 7;
        state.level = 3;
        state.level_score = 30;
        state.game_over();
        assert_eq!(state.high_score, 7);
        assert_eq!(state.level, 1);
        assert_eq!(state.level_score, 5);
        assert_eq!(state.direction, Direction::Stopped);

        state.restart(100);
        state.score = 2;
        state.game_over();
        assert_eq!(state.high_score, 7);
        assert_eq!(state.drain_events().len(), 2);
    }

    #[test]
    fn test_game_over_before_start_is_silent() {
        let mut state = GameState::new(Difficulty::Easy, Vec2::ZERO);
        state.game_over();
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_restart_clears_run() {
        let mut state = playing();
        state.steer(Direction::Right);
        state.head.translate(Vec2::new(0.4, 0.0));
        state.tail.push(Entity::new(Vec2::new(0.3, 0.0), TAIL_SCALE));
        state.score = 4;
        state.game_over();
        state.restart(1234);
        assert_eq!(state.score, 0);
        assert!(state.tail.is_empty());
        assert_eq!(state.head.pos(), Vec2::ZERO);
        assert_eq!(state.direction, Direction::Stopped);
        assert_eq!(state.fruit_spawn_ms, 1234);
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
