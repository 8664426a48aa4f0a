use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The keys the game reacts to; everything else never leaves the
/// input source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Esc,
}

/// Where key events come from.
///
/// `poll_key(Some(t))` waits at most `t` for a key; `poll_key(None)`
/// blocks until one arrives. The game loop only ever uses the bounded
/// form, the pause loop only the unbounded one.
pub trait InputSource {
    fn poll_key(&mut self, timeout: Option<Duration>) -> Result<Option<Key>>;
}

/// Crossterm-backed input source
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }

    fn translate(key: KeyEvent) -> Option<Key> {
        // Only key presses; release/repeat events would double-feed the
        // state machine on some terminals.
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Raw mode swallows SIGINT, so Ctrl+C has to be an explicit quit.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Key::Esc);
        }

        match key.code {
            KeyCode::Up => Some(Key::Up),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Esc => Some(Key::Esc),
            _ => None,
        }
    }
}

impl InputSource for TermInput {
    fn poll_key(&mut self, timeout: Option<Duration>) -> Result<Option<Key>> {
        match timeout {
            Some(timeout) => {
                if event::poll(timeout)? {
                    if let Event::Key(key) = event::read()? {
                        return Ok(Self::translate(key));
                    }
                }
                Ok(None)
            }
            None => loop {
                if let Event::Key(key) = event::read()? {
                    if let Some(key) = Self::translate(key) {
                        return Ok(Some(key));
                    }
                }
            },
        }
    }
}

impl Default for TermInput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_arrows() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(TermInput::translate(up), Some(Key::Up));

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(TermInput::translate(down), Some(Key::Down));

        let left = KeyEvent::new(KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(TermInput::translate(left), Some(Key::Left));

        let right = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(TermInput::translate(right), Some(Key::Right));
    }

    #[test]
    fn test_translate_space_and_esc() {
        let space = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(TermInput::translate(space), Some(Key::Space));

        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(TermInput::translate(esc), Some(Key::Esc));
    }

    #[test]
    fn test_translate_ctrl_c() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(TermInput::translate(ctrl_c), Some(Key::Esc));
    }

    #[test]
    fn test_unknown_key_is_dropped() {
        let x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(TermInput::translate(x), None);
    }
}
