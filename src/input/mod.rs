pub mod controller;
pub mod source;

pub use controller::{InputController, TickCommand};
pub use source::{InputSource, Key, TermInput};
