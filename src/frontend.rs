//! Collaborators outside the simulation: drawing, HUD text and overlays
//!
//! The core never draws or touches UI itself; the driver hands state to
//! these traits.

use crate::sim::{Ball, Brick, GameState, OverlayInfo, Paddle};

/// Draws entities for the current frame
pub trait Presenter {
    fn draw_paddle(&mut self, paddle: &Paddle);
    fn draw_ball(&mut self, ball: &Ball);
    /// Never called for destroyed bricks
    fn draw_brick(&mut self, brick: &Brick);
}

/// Score / lives / stage readouts
pub trait Hud {
    fn update_score(&mut self, score: u64);
    fn update_lives(&mut self, lives: u32);
    fn update_stage(&mut self, stage: u32);
}

/// Modal overlay with one primary action
pub trait OverlayView {
    fn show_overlay(&mut self, info: &OverlayInfo);
    fn hide_overlay(&mut self);
}

/// Everything the driver talks to besides audio
pub trait Frontend: Presenter + Hud + OverlayView {}

impl<T: Presenter + Hud + OverlayView> Frontend for T {}

/// Draw bricks, then paddle, then ball
pub fn render<P: Presenter + ?Sized>(state: &GameState, presenter: &mut P) {
    for brick in state.bricks.iter().filter(|b| !b.destroyed) {
        presenter.draw_brick(brick);
    }
    presenter.draw_paddle(&state.paddle);
    presenter.draw_ball(&state.ball);
}

/// Frontend that writes everything to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogFrontend {
    pub frames_drawn: u64,
    pub score: u64,
    pub lives: u32,
    pub stage: u32,
    pub overlay: Option<OverlayInfo>,
}

impl Presenter for LogFrontend {
    fn draw_paddle(&mut self, paddle: &Paddle) {
        self.frames_drawn += 1;
        log::trace!("paddle at x={:.1}", paddle.pos.x);
    }

    fn draw_ball(&mut self, ball: &Ball) {
        log::trace!("ball at ({:.1}, {:.1})", ball.pos.x, ball.pos.y);
    }

    fn draw_brick(&mut self, brick: &Brick) {
        if brick.shows_durability() {
            log::trace!(
                "brick #{:06X} at ({}, {}) durability {}",
                brick.color,
                brick.rect.x(),
                brick.rect.y(),
                brick.durability
            );
        }
    }
}

impl Hud for LogFrontend {
    fn update_score(&mut self, score: u64) {
        self.score = score;
        log::debug!("score: {score}");
    }

    fn update_lives(&mut self, lives: u32) {
        self.lives = lives;
        log::debug!("lives: {lives}");
    }

    fn update_stage(&mut self, stage: u32) {
        self.stage = stage;
        log::debug!("stage: {stage}");
    }
}

impl OverlayView for LogFrontend {
    fn show_overlay(&mut self, info: &OverlayInfo) {
        log::info!("[{}] {} ({})", info.title, info.message, info.action_label);
        self.overlay = Some(info.clone());
    }

    fn hide_overlay(&mut self) {
        self.overlay = None;
    }
}
