//! Terminal rendering module
//!
//! A small game-style rendering layer: views map core state into a
//! framebuffer of styled cells, and the renderer flushes framebuffers to the
//! terminal with per-run diffing. Views are pure and unit-testable; only the
//! renderer touches I/O.

pub mod canvas_view;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use canvas_view::CanvasView;
pub use fb::{Cell, CellStyle, FrameBuffer, TermColor, Viewport};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
pub use throttle::RenderThrottle;
