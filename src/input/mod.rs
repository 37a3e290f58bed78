//! Input module - terminal key events to game actions

pub mod map;

pub use map::{handle_key_event, should_quit};
