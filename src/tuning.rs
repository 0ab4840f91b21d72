//! Data-driven game balance
//!
//! Every gameplay constant lives here so a stage can be rebalanced from a
//! JSON file without touching the simulation.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure while loading tuning or settings files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub canvas_width: f32,
    pub canvas_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_floor_inset: f32,
    pub paddle_speed: f32,
    pub paddle_max_deflection_deg: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_launch_min_deg: f32,
    pub ball_launch_max_deg: f32,

    pub brick_rows: u32,
    pub brick_cols: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub points_per_durability: u32,

    pub starting_lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_inset: PADDLE_FLOOR_INSET,
            paddle_speed: PADDLE_SPEED,
            paddle_max_deflection_deg: PADDLE_MAX_DEFLECTION_DEG,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_launch_min_deg: BALL_LAUNCH_MIN_DEG,
            ball_launch_max_deg: BALL_LAUNCH_MAX_DEG,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            points_per_durability: POINTS_PER_DURABILITY,

            starting_lives: STARTING_LIVES,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document (missing keys use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.paddle_width > self.canvas_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_width {} exceeds canvas_width {}",
                self.paddle_width, self.canvas_width
            )));
        }
        if self.ball_radius * 2.0 >= self.canvas_width.min(self.canvas_height) {
            return Err(ConfigError::Invalid(format!(
                "ball_radius {} does not fit the canvas",
                self.ball_radius
            )));
        }
        if self.brick_rows == 0 || self.brick_cols == 0 {
            return Err(ConfigError::Invalid("brick grid needs at least one row and column".into()));
        }
        if self.ball_launch_min_deg >= self.ball_launch_max_deg {
            return Err(ConfigError::Invalid("ball launch angle range is empty".into()));
        }
        if self.starting_lives == 0 {
            return Err(ConfigError::Invalid("starting_lives must be at least 1".into()));
        }
        Ok(())
    }

    /// Y coordinate of the paddle's top edge
    #[inline]
    pub fn paddle_y(&self) -> f32 {
        self.canvas_height - self.paddle_floor_inset
    }

    #[inline]
    pub fn canvas_size(&self) -> Vec2 {
        Vec2::new(self.canvas_width, self.canvas_height)
    }

    #[inline]
    pub fn canvas_center(&self) -> Vec2 {
        self.canvas_size() / 2.0
    }

    /// Paddle edge deflection in radians
    #[inline]
    pub fn max_deflection(&self) -> f32 {
        self.paddle_max_deflection_deg.to_radians()
    }
}
