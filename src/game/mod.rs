//! Core game rules for Snake
//!
//! Everything in here is pure game logic with no I/O or rendering
//! dependencies, so it can be exercised directly from tests.

pub mod board;
pub mod config;
pub mod direction;
pub mod food;
pub mod snake;
pub mod speed;

pub use board::Coord;
pub use config::GameConfig;
pub use direction::Direction;
pub use food::Food;
pub use snake::Snake;
