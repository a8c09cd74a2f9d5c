//! Frame driver
//!
//! One frame = poll input, advance the simulation, play cues, draw.

use crate::audio::{AudioSink, SoundEffect};
use crate::control::{Control, Controller};
use crate::platform::input::InputSource;
use crate::renderer::{Renderer, present};
use crate::settings::Settings;
use crate::sim::{Difficulty, GameState, PointSource, SeededPoints, tick};

/// Game instance holding all state
pub struct Game<P: PointSource = SeededPoints> {
    pub state: GameState,
    controller: Controller,
    points: P,
    last_ms: Option<u64>,
    running: bool,
}

impl Game<SeededPoints> {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self::with_points(settings.difficulty, SeededPoints::new(seed))
    }
}

impl<P: PointSource> Game<P> {
    pub fn with_points(difficulty: Difficulty, mut points: P) -> Self {
        let fruit = points.random_point();
        Self {
            state: GameState::new(difficulty, fruit),
            controller: Controller::new(),
            points,
            last_ms: None,
            running: true,
        }
    }

    /// False once quit was requested
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Run one frame at clock reading `now_ms`.
    ///
    /// Returns false when the application should exit; nothing is simulated
    /// or drawn on that frame.
    pub fn frame<I, R, A>(&mut self, now_ms: u64, input: &mut I, renderer: &mut R, audio: &mut A) -> bool
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
        A: AudioSink + ?Sized,
    {
        if !self.running {
            return false;
        }
        if self.controller.poll(input, &mut self.state, now_ms) == Control::Quit {
            self.running = false;
            return false;
        }

        let dt = match self.last_ms {
            Some(last) => now_ms.saturating_sub(last) as f32 / 1000.0,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        tick(&mut self.state, dt, now_ms, &mut self.points);

        for event in self.state.drain_events() {
            log::trace!("Event: {:?}", event);
            if let Some(effect) = SoundEffect::for_event(&event) {
                audio.play(effect);
            }
        }

        present(&self.state, renderer);
        true
    }
}
