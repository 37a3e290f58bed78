//! Shared types and constants
//! Pure data with no external dependencies

/// Default demo canvas dimensions (characters).
pub const DEFAULT_CANVAS_WIDTH: u16 = 80;
pub const DEFAULT_CANVAS_HEIGHT: u16 = 25;

/// Event-loop granularity (milliseconds).
pub const TICK_MS: u32 = 16;

/// Per-frame duration for demo animations (milliseconds).
pub const DEMO_FRAME_MS: u32 = 70;

/// Fixed game update interval (milliseconds).
pub const GAME_UPDATE_MS: u32 = 100;

/// Static screens re-render at most this often (milliseconds).
pub const STATIC_RENDER_INTERVAL_MS: u64 = 250;

/// Flappy Bird playfield (characters).
pub const GAME_WIDTH: u16 = 100;
pub const GAME_HEIGHT: u16 = 25;

/// Flappy Bird physics, per 100ms update.
pub const BIRD_X: u16 = 10;
pub const GRAVITY: f32 = 0.4;
pub const FLAP_VELOCITY: f32 = -1.5;

/// Pipe geometry and spawning.
pub const PIPE_WIDTH: i16 = 3;
pub const PIPE_KILL_X: i16 = -5;
pub const PIPE_SPAWN_COOLDOWN_MS: u32 = 1500;
/// Spawn probability per update, in per-mill: max(floor, base - score).
pub const PIPE_SPAWN_BASE_PERMILLE: u32 = 150;
pub const PIPE_SPAWN_FLOOR_PERMILLE: u32 = 50;

/// Game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Flap,
    Pause,
    Restart,
}
