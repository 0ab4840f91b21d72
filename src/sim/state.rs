//! Game state and core simulation types
//!
//! Everything a session needs to resume lives here, RNG included.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Axis, brick_reflection_axis, paddle_deflection};
use super::geometry::Rect;
use super::grid::create_bricks;
use super::tick::InputSnapshot;
use crate::tuning::{ConfigError, Tuning};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title overlay, waiting for start
    Menu,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Lives exhausted
    GameOver,
    /// Every brick destroyed, waiting to advance
    StageClear,
}

/// Session control requests from the overlay or global key handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Leave the menu and start stage 1
    Start,
    /// Reset score, lives and stage, then start
    Restart,
    /// Advance to the next stage after a clear
    NextStage,
    Pause,
    Resume,
    TogglePause,
    /// Space bar: start from the menu or resume from pause
    Confirm,
}

/// Content for the overlay collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayInfo {
    pub title: String,
    pub message: String,
    pub action_label: String,
    /// Command to issue when the primary button is pressed
    pub action: Command,
}

impl OverlayInfo {
    /// Overlay shown on entering a phase (None while playing)
    pub fn for_phase(phase: GamePhase, score: u64) -> Option<Self> {
        let (title, message, action_label, action) = match phase {
            GamePhase::Playing => return None,
            GamePhase::Menu => (
                "Brick Breaker",
                "Press Space to start".to_string(),
                "Start",
                Command::Start,
            ),
            GamePhase::Paused => (
                "Paused",
                "Press Space to resume".to_string(),
                "Resume",
                Command::Resume,
            ),
            GamePhase::GameOver => (
                "Game Over",
                format!("Final score: {score}"),
                "Play again",
                Command::Restart,
            ),
            GamePhase::StageClear => (
                "Stage Clear!",
                format!("Score: {score}"),
                "Next stage",
                Command::NextStage,
            ),
        };
        Some(Self {
            title: title.to_string(),
            message,
            action_label: action_label.to_string(),
            action,
        })
    }
}

/// Side effects produced by the simulation, drained by the tick driver
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    // Sound cues
    PaddleHit,
    BrickHit,
    BrickBreak { points: u32 },
    WallHit,
    LifeLost,
    StageClear,
    GameOver,
    // HUD refresh
    ScoreChanged(u64),
    LivesChanged(u32),
    StageChanged(u32),
    // Overlay
    ShowOverlay(OverlayInfo),
    HideOverlay,
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner (y never changes)
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick under key control
    pub speed: f32,
}

impl Paddle {
    /// Paddle centred horizontally at the tuned height
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.canvas_width / 2.0 - tuning.paddle_width / 2.0,
                tuning.paddle_y(),
            ),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    /// Follow the pointer if present, otherwise the held keys, then clamp to the canvas
    ///
    /// A non-finite pointer position counts as no pointer.
    pub fn update(&mut self, input: &InputSnapshot, canvas_width: f32) {
        if let Some(pointer_x) = input.pointer_x.filter(|x| x.is_finite()) {
            self.pos.x = pointer_x - self.width / 2.0;
        } else {
            if input.left {
                self.pos.x -= self.speed;
            }
            if input.right {
                self.pos.x += self.speed;
            }
        }
        self.pos.x = self.pos.x.clamp(0.0, (canvas_width - self.width).max(0.0));
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Result of moving the ball against the canvas edges
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    /// Touched nothing
    Clear,
    /// Bounced off the left, right or top wall
    Bounced,
    /// Lower edge reached the floor (a miss)
    Floor,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Scalar speed; `vel.length()` equals this after every response
    pub speed: f32,
}

impl Ball {
    /// Ball at rest in the canvas centre; call `reset` to launch it
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.canvas_center(),
            vel: Vec2::ZERO,
            radius: tuning.ball_radius,
            speed: tuning.ball_speed,
        }
    }

    /// Recentre and pick a new downward launch angle
    pub fn reset<R: Rng + ?Sized>(&mut self, tuning: &Tuning, rng: &mut R) {
        self.pos = tuning.canvas_center();
        self.radius = tuning.ball_radius;
        self.speed = tuning.ball_speed;

        let min = tuning.ball_launch_min_deg.to_radians();
        let max = tuning.ball_launch_max_deg.to_radians();
        let angle = rng.random_range(min..max);
        self.vel = Vec2::new(angle.cos(), angle.sin()) * self.speed;
    }

    /// Bounding box
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.pos, self.radius)
    }

    /// Advance one tick and resolve the canvas edges
    pub fn update(&mut self, canvas: Vec2, events: &mut Vec<GameEvent>) -> WallContact {
        self.pos += self.vel;
        let mut contact = WallContact::Clear;

        if self.pos.x - self.radius <= 0.0 || self.pos.x + self.radius >= canvas.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(self.radius, canvas.x - self.radius);
            events.push(GameEvent::WallHit);
            contact = WallContact::Bounced;
        }

        if self.pos.y - self.radius <= 0.0 {
            self.vel.y = -self.vel.y;
            self.pos.y = self.radius;
            events.push(GameEvent::WallHit);
            contact = WallContact::Bounced;
        }

        if self.pos.y + self.radius >= canvas.y {
            contact = WallContact::Floor;
        }

        contact
    }

    /// Deflect off the paddle; only a descending ball can hit
    pub fn check_paddle_collision(
        &mut self,
        paddle: &Paddle,
        max_deflection: f32,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.vel.y <= 0.0 {
            return false;
        }
        let paddle_bounds = paddle.bounds();
        if !self.bounds().overlaps(&paddle_bounds) {
            return false;
        }

        self.vel = paddle_deflection(
            self.pos.x,
            self.vel,
            &paddle_bounds,
            self.speed,
            max_deflection,
        );
        events.push(GameEvent::PaddleHit);
        true
    }

    /// Reflect off a brick on overlap
    ///
    /// Fires on every overlapping tick, so callers must skip destroyed bricks.
    pub fn check_brick_collision(&mut self, brick: &Brick) -> bool {
        let brick_bounds = brick.bounds();
        if !self.bounds().overlaps(&brick_bounds) {
            return false;
        }

        match brick_reflection_axis(self.pos, &brick_bounds) {
            Axis::Horizontal => self.vel.x = -self.vel.x,
            Axis::Vertical => self.vel.y = -self.vel.y,
        }
        true
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Display colour (0xRRGGBB)
    pub color: u32,
    /// Hits remaining
    pub durability: u32,
    /// Durability at creation (for display)
    pub max_durability: u32,
    /// Score awarded on destruction
    pub points: u32,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(rect: Rect, color: u32, durability: u32, points: u32) -> Self {
        let durability = durability.max(1);
        Self {
            rect,
            color,
            durability,
            max_durability: durability,
            points,
            destroyed: false,
        }
    }

    /// Take one hit; returns the points awarded (0 unless destroyed)
    pub fn hit(&mut self, events: &mut Vec<GameEvent>) -> u32 {
        self.durability = self.durability.saturating_sub(1);
        if self.durability == 0 {
            self.destroyed = true;
            events.push(GameEvent::BrickBreak { points: self.points });
            self.points
        } else {
            events.push(GameEvent::BrickHit);
            0
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Multi-hit bricks show their remaining durability
    pub fn shows_durability(&self) -> bool {
        self.max_durability > 1
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    rng: Pcg32,
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u32,
    pub stage: u32,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks; destroyed ones are compacted out at the end of each tick
    pub bricks: Vec<Brick>,
    /// Side effects since the last drain
    #[serde(skip)]
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session sitting in the menu
    ///
    /// Rejects tuning that fails `Tuning::validate`, since the ball launch and
    /// wall clamps rely on it.
    pub fn new(seed: u64, tuning: Tuning) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: tuning.starting_lives,
            stage: crate::consts::STARTING_STAGE,
            time_ticks: 0,
            paddle: Paddle::new(&tuning),
            ball: Ball::new(&tuning),
            bricks: Vec::new(),
            events: Vec::new(),
            tuning,
        };

        state.push_hud();
        state.show_overlay();
        Ok(state)
    }

    /// Take all pending side effects
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Build a fresh paddle, ball and brick grid for the current stage and play
    pub fn start_game(&mut self) {
        self.paddle = Paddle::new(&self.tuning);
        self.ball = Ball::new(&self.tuning);
        self.ball.reset(&self.tuning, &mut self.rng);
        self.bricks = create_bricks(self.stage, &self.tuning, &mut self.rng);
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::HideOverlay);
        log::info!("Stage {} started with {} bricks", self.stage, self.bricks.len());
    }

    /// Back to score 0, full lives, stage 1
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.lives = self.tuning.starting_lives;
        self.stage = crate::consts::STARTING_STAGE;
        self.push_hud();
    }

    /// Move on to the next stage
    pub fn advance_stage(&mut self) {
        self.stage += 1;
        self.events.push(GameEvent::StageChanged(self.stage));
        self.start_game();
    }

    pub fn pause(&mut self) {
        self.phase = GamePhase::Paused;
        self.show_overlay();
        log::info!("Paused at tick {}", self.time_ticks);
    }

    pub fn resume(&mut self) {
        self.phase = GamePhase::Playing;
        self.events.push(GameEvent::HideOverlay);
        log::info!("Resumed");
    }

    /// Ball crossed the floor: spend a life and respawn, or end the run
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost);
        self.ball.reset(&self.tuning, &mut self.rng);

        if self.lives == 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            self.events.push(GameEvent::LivesChanged(self.lives));
            self.show_overlay();
            log::info!("Game over on stage {} with score {}", self.stage, self.score);
        } else {
            self.events.push(GameEvent::LivesChanged(self.lives));
            log::debug!("Life lost, {} remaining", self.lives);
        }
    }

    /// No bricks left
    pub(crate) fn clear_stage(&mut self) {
        self.phase = GamePhase::StageClear;
        self.events.push(GameEvent::StageClear);
        self.show_overlay();
        log::info!("Stage {} cleared with score {}", self.stage, self.score);
    }

    /// Overlay for the current phase, if any
    pub fn overlay(&self) -> Option<OverlayInfo> {
        OverlayInfo::for_phase(self.phase, self.score)
    }

    fn show_overlay(&mut self) {
        if let Some(info) = self.overlay() {
            self.events.push(GameEvent::ShowOverlay(info));
        }
    }

    fn push_hud(&mut self) {
        self.events.push(GameEvent::ScoreChanged(self.score));
        self.events.push(GameEvent::LivesChanged(self.lives));
        self.events.push(GameEvent::StageChanged(self.stage));
    }
}
