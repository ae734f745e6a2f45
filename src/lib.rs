//! Brick Breaker - simulation core for a Breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (state, collisions, engine lifecycle)
//! - `config`: Playfield configuration shared with renderers
//! - `autopilot`: Seeded paddle controller for headless/demo play

pub mod autopilot;
pub mod config;
pub mod sim;

pub use autopilot::Autopilot;
pub use config::{ConfigError, FieldConfig};
pub use sim::{GameEvent, GamePhase, SimulationEngine, Snapshot};

/// Game configuration constants
///
/// These are the contract between the engine and any renderer: both place
/// things using the same units with the origin at the top-left corner.
pub mod consts {
    /// Playfield dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 600.0;

    /// Paddle defaults (sized to the paddle sprite)
    pub const PADDLE_WIDTH: f32 = 178.0;
    pub const PADDLE_HEIGHT: f32 = 28.0;
    /// Gap between the paddle's bottom edge and the floor
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;

    /// Ball defaults (28px sprite)
    pub const BALL_RADIUS: f32 = 14.0;
    /// Per-frame speed on each axis at serve
    pub const BALL_INITIAL_SPEED: f32 = 5.0;

    /// Brick grid layout
    pub const BRICK_WIDTH: f32 = 64.0;
    pub const BRICK_HEIGHT: f32 = 28.0;
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 30.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;
    /// Number of cosmetic brick kinds (one per sprite)
    pub const BRICK_KINDS: u8 = 6;

    /// Session rules
    pub const INITIAL_LIVES: u32 = 3;
    pub const BRICK_SCORE: u32 = 10;
}
