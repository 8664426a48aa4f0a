//! Torus Snake - a terminal snake game on a wrapping board
//!
//! This library provides:
//! - Core game rules: board, snake, food, speed curve (game module)
//! - The input port and pause/quit state machine (input module)
//! - The display port and its crossterm backend (render module)
//! - The tick loop tying them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;
