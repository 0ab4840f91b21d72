//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick step only
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering, audio or platform dependencies (side effects leave as `GameEvent`s)

pub mod collision;
pub mod geometry;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{Axis, brick_reflection_axis, paddle_deflection, renormalize};
pub use geometry::Rect;
pub use grid::{BRICK_PALETTE, create_bricks};
pub use state::{
    Ball, Brick, Command, GameEvent, GamePhase, GameState, OverlayInfo, Paddle, WallContact,
};
pub use tick::{InputSnapshot, apply_command, tick};
