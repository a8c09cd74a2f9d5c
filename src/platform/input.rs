//! Discrete input events and where they come from

use std::collections::VecDeque;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Left,
    Right,
    Up,
    Down,
    W,
    A,
    S,
    D,
    Space,
    Enter,
    Tab,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_web(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Key::Escape),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "w" | "W" => Some(Key::W),
            "a" | "A" => Some(Key::A),
            "s" | "S" => Some(Key::S),
            "d" | "D" => Some(Key::D),
            " " => Some(Key::Space),
            "Enter" => Some(Key::Enter),
            "Tab" => Some(Key::Tab),
            _ => None,
        }
    }
}

/// One event from the input device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Queue of pending input events
///
/// Events not consumed during a poll stay queued for the next one.
pub trait InputSource {
    fn next_event(&mut self) -> Option<InputEvent>;
}

/// FIFO input source fed by event callbacks or a script
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Queue a key-down immediately followed by its key-up
    pub fn press(&mut self, key: Key) {
        self.push(InputEvent::KeyDown(key));
        self.push(InputEvent::KeyUp(key));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn next_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}

impl FromIterator<InputEvent> for ScriptedInput {
    fn from_iter<I: IntoIterator<Item = InputEvent>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_web_key_mapping() {
        assert_eq!(Key::from_web("ArrowUp"), Some(Key::Up));
        assert_eq!(Key::from_web("W"), Some(Key::W));
        assert_eq!(Key::from_web(" "), Some(Key::Space));
        assert_eq!(Key::from_web("F5"), None);
    }

    #[test]
    fn test_scripted_input_is_fifo() {
        let mut input = ScriptedInput::new();
        input.press(Key::Enter);
        input.push(InputEvent::Quit);
        assert_eq!(input.len(), 3);
        assert_eq!(input.next_event(), Some(InputEvent::KeyDown(Key::Enter)));
        assert_eq!(input.next_event(), Some(InputEvent::KeyUp(Key::Enter)));
        assert_eq!(input.next_event(), Some(InputEvent::Quit));
        assert_eq!(input.next_event(), None);
    }
}
