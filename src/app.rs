use std::time::Duration;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::game::config::{START_DIRECTION, START_HEAD};
use crate::game::{speed, Food, GameConfig, Snake};
use crate::input::{InputController, InputSource, TickCommand};
use crate::render::Display;

const SNAKE_GLYPH: char = '#';
const FOOD_GLYPH: char = '*';

/// Owns all mutable game state and runs the tick loop.
///
/// One tick: compute the delay from the snake's length, refresh the
/// status line, poll input for at most that delay, then advance, wrap,
/// and resolve collision and food. Mutations happen strictly in that
/// order, so a tick that ends the game never half-applies.
pub struct GameLoop {
    snake: Snake,
    food: Food,
    score: u32,
    controller: InputController,
    rng: StdRng,
}

impl GameLoop {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        Self {
            snake: Snake::new(START_HEAD, START_DIRECTION, config.initial_length),
            food: Food::fixed(),
            score: 0,
            controller: InputController::new(START_DIRECTION),
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Play one game to completion and return the final score.
    ///
    /// Ends on quit or self-collision; the caller reports the score
    /// through `Display::close`.
    pub fn run(&mut self, display: &mut dyn Display, input: &mut dyn InputSource) -> Result<u32> {
        display.draw_border()?;
        for pos in self.snake.segments() {
            display.draw_cell(pos, SNAKE_GLYPH)?;
        }
        display.draw_cell(self.food.pos(), FOOD_GLYPH)?;

        loop {
            let delay = speed::delay(self.snake.len());
            display.draw_status(self.score, delay)?;

            let direction = match self.controller.poll(input, Duration::from_millis(delay))? {
                TickCommand::Quit => {
                    info!(score = self.score, "quit");
                    break;
                }
                TickCommand::SkipTick => continue,
                TickCommand::Advance(direction) => direction,
            };

            self.snake.advance(direction);
            self.snake.wrap_head();

            if self.snake.is_self_collision() {
                info!(score = self.score, "game over");
                break;
            }

            if self.snake.has_eaten(&self.food) {
                self.score += 1;
                info!(score = self.score, "food eaten");
                self.food = Food::place(&mut self.rng, &self.snake);
                display.draw_cell(self.food.pos(), FOOD_GLYPH)?;
            } else {
                let tail = self.snake.shrink_tail();
                display.erase_cell(tail)?;
            }

            display.draw_cell(self.snake.head(), SNAKE_GLYPH)?;
        }

        Ok(self.score)
    }
}
