use std::time::Duration;

use anyhow::Result;
use tracing::info;

use crate::game::Direction;
use crate::input::source::{InputSource, Key};

/// What the controller is doing between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Running,
    Paused,
    Quit,
}

/// The verdict for one tick of the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickCommand {
    /// Move the snake in this direction
    Advance(Direction),
    /// A pause just ended; skip this tick's movement
    SkipTick,
    /// Tear down and report the score
    Quit,
}

/// Outcome of feeding one key (or the lack of one) to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Keep going in the current direction
    Advance(Direction),
    /// Paused, or still paused
    Paused,
    /// Just resumed from a pause
    Resumed,
    /// Terminal
    Quit,
}

/// Translates raw keys into validated game commands.
///
/// Three states: Running, Paused, Quit. Space toggles Running/Paused,
/// remembering the direction held when the pause began; Esc is a
/// terminal quit from any state. Unknown keys never reach this type
/// (the input source drops them), so a `None` key simply means the
/// poll timed out and the snake keeps its direction.
pub struct InputController {
    mode: Mode,
    direction: Direction,
    resume_direction: Direction,
}

impl InputController {
    pub fn new(direction: Direction) -> Self {
        Self {
            mode: Mode::Running,
            direction,
            resume_direction: direction,
        }
    }

    /// Current direction of travel
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Pure state transition; drives both the tick poll and the pause
    /// loop, and is what the tests exercise.
    pub fn handle_key(&mut self, key: Option<Key>) -> Signal {
        match self.mode {
            Mode::Quit => Signal::Quit,
            Mode::Running => match key {
                Some(Key::Esc) => {
                    self.mode = Mode::Quit;
                    Signal::Quit
                }
                Some(Key::Space) => {
                    self.mode = Mode::Paused;
                    self.resume_direction = self.direction;
                    info!(direction = ?self.direction, "paused");
                    Signal::Paused
                }
                Some(Key::Up) => self.steer(Direction::Up),
                Some(Key::Down) => self.steer(Direction::Down),
                Some(Key::Left) => self.steer(Direction::Left),
                Some(Key::Right) => self.steer(Direction::Right),
                None => Signal::Advance(self.direction),
            },
            Mode::Paused => match key {
                Some(Key::Esc) => {
                    self.mode = Mode::Quit;
                    Signal::Quit
                }
                Some(Key::Space) => {
                    self.mode = Mode::Running;
                    self.direction = self.resume_direction;
                    info!(direction = ?self.direction, "resumed");
                    Signal::Resumed
                }
                // Everything else is discarded while paused
                _ => Signal::Paused,
            },
        }
    }

    fn steer(&mut self, new_direction: Direction) -> Signal {
        if new_direction != self.direction {
            info!(from = ?self.direction, to = ?new_direction, "direction changed");
        }
        self.direction = new_direction;
        Signal::Advance(self.direction)
    }

    /// One tick's worth of input: a poll bounded by `timeout`, then, if
    /// that entered a pause, a blocking poll until resume or quit.
    pub fn poll(&mut self, source: &mut dyn InputSource, timeout: Duration) -> Result<TickCommand> {
        let key = source.poll_key(Some(timeout))?;

        match self.handle_key(key) {
            Signal::Advance(direction) => Ok(TickCommand::Advance(direction)),
            Signal::Quit => Ok(TickCommand::Quit),
            Signal::Resumed => Ok(TickCommand::SkipTick),
            Signal::Paused => loop {
                let key = source.poll_key(None)?;
                match self.handle_key(key) {
                    Signal::Resumed => return Ok(TickCommand::SkipTick),
                    Signal::Quit => return Ok(TickCommand::Quit),
                    _ => {}
                }
            },
        }
    }
}
