pub mod display;
pub mod term;

pub use display::Display;
pub use term::TermDisplay;
