//! Turns input events into session changes

use crate::platform::input::{InputEvent, InputSource, Key};
use crate::sim::{Direction, GameState};

/// What the frame loop should do after polling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Input controller
///
/// Holds the Tab debounce so one physical press cycles difficulty once.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    tab_held: bool,
}

fn heading(key: Key) -> Option<Direction> {
    match key {
        Key::Left | Key::A => Some(Direction::Left),
        Key::Right | Key::D => Some(Direction::Right),
        Key::Up | Key::W => Some(Direction::Up),
        Key::Down | Key::S => Some(Direction::Down),
        _ => None,
    }
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain pending events into `state`.
    ///
    /// A handled direction or pause key ends the pass; anything queued after
    /// it is left for the next frame.
    pub fn poll<I: InputSource + ?Sized>(
        &mut self,
        input: &mut I,
        state: &mut GameState,
        now_ms: u64,
    ) -> Control {
        while let Some(event) = input.next_event() {
            match event {
                InputEvent::Quit
                | InputEvent::KeyDown(Key::Escape)
                | InputEvent::KeyUp(Key::Escape) => {
                    log::info!("Quit requested");
                    return Control::Quit;
                }
                InputEvent::KeyDown(Key::Enter) if state.is_over() => {
                    state.restart(now_ms);
                }
                InputEvent::KeyDown(Key::Tab) if state.is_over() && !self.tab_held => {
                    state.cycle_difficulty();
                    self.tab_held = true;
                }
                InputEvent::KeyUp(Key::Tab) => {
                    self.tab_held = false;
                }
                InputEvent::KeyDown(Key::Space) if !state.is_over() => {
                    state.pause();
                    break;
                }
                InputEvent::KeyDown(key) if !state.is_over() => {
                    if let Some(dir) = heading(key) {
                        if !state.steer(dir) {
                            log::trace!("Ignored reversal to {:?}", dir);
                        }
                        break;
                    }
                }
                _ => {}
            }
        }
        Control::Continue
    }
}
