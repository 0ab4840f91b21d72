//! Brick Breaker - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `driver`: Frame-driven tick loop that feeds collaborators
//! - `input`: Raw key/pointer events to per-tick input snapshots
//! - `audio`: Procedural sound cues
//! - `frontend`: Presentation, HUD and overlay collaborator traits
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod driver;
pub mod frontend;
pub mod input;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use driver::Driver;
pub use settings::Settings;
pub use tuning::{ConfigError, Tuning};

/// Game configuration defaults (mirrored by `Tuning::default`)
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Distance from the canvas floor to the paddle's top edge
    pub const PADDLE_FLOOR_INSET: f32 = 30.0;
    /// Pixels per tick when driven by keys
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Maximum deflection off the paddle edge (degrees from vertical)
    pub const PADDLE_MAX_DEFLECTION_DEG: f32 = 60.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 5.0;
    /// Launch angle range (degrees from horizontal, half-open)
    pub const BALL_LAUNCH_MIN_DEG: f32 = 60.0;
    pub const BALL_LAUNCH_MAX_DEG: f32 = 120.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLS: u32 = 10;
    pub const BRICK_WIDTH: f32 = 70.0;
    pub const BRICK_HEIGHT: f32 = 25.0;
    pub const BRICK_PADDING: f32 = 5.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const POINTS_PER_DURABILITY: u32 = 10;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const STARTING_STAGE: u32 = 1;

    /// Floating tolerance for speed invariants
    pub const SPEED_EPSILON: f32 = 1e-3;
}
