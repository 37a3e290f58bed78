//! Game module - Flappy Bird on the ASCII canvas
//!
//! Pure fixed-tick game logic. The terminal layer only calls
//! `apply_action`, `tick`, and `render_into`.

pub mod flappy;

pub use flappy::{FlappyGame, Pipe};
