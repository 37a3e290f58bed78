//! Terminal ASCII art engine.
//!
//! Layered like a small game engine:
//! - `core`: pure state (canvas, charmaps, rng, animation) with no I/O
//! - `scenes`: procedural frame generators for the demos
//! - `game`: Flappy Bird built on the canvas
//! - `term`: framebuffer, crossterm diff renderer, and views
//! - `input`: key event mapping

pub mod core;
pub mod game;
pub mod input;
pub mod scenes;
pub mod term;
pub mod types;
