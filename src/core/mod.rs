//! Core module - pure engine state with no external dependencies
//!
//! Canvas, character maps, RNG, and animation playback. No terminal,
//! no clocks: everything advances through explicit `tick(elapsed_ms)` calls
//! so it stays deterministic and testable.

pub mod animation;
pub mod canvas;
pub mod charmap;
pub mod rng;

pub use animation::{Clip, Player};
pub use canvas::{Canvas, Pixel, SizeMismatch};
pub use charmap::CharMap;
pub use rng::SimpleRng;
