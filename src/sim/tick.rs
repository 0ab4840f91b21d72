//! Fixed-step simulation tick
//!
//! Core game loop that advances the session one frame at a time, plus the
//! session control transitions (start, restart, next stage, pause).

use serde::{Deserialize, Serialize};

use super::state::{Command, GameEvent, GamePhase, GameState, WallContact};

/// Input state for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Pointer x in canvas space (None when the pointer is off the canvas)
    pub pointer_x: Option<f32>,
    /// A left-direction key is held
    pub left: bool,
    /// A right-direction key is held
    pub right: bool,
}

/// Advance the game state by one tick
///
/// Does nothing unless the phase is `Playing`. Side effects queue up on the
/// state until the caller takes them with `GameState::drain_events`, so hosts
/// driving `tick` directly must drain once per tick.
pub fn tick(state: &mut GameState, input: &InputSnapshot) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.time_ticks += 1;

    let canvas = state.tuning.canvas_size();
    state.paddle.update(input, canvas.x);

    if state.ball.update(canvas, &mut state.events) == WallContact::Floor {
        state.lose_life();
        if state.phase == GamePhase::GameOver {
            return;
        }
    }

    let max_deflection = state.tuning.max_deflection();
    state
        .ball
        .check_paddle_collision(&state.paddle, max_deflection, &mut state.events);

    // Every live brick is tested each tick; no early exit after a hit.
    for brick in state.bricks.iter_mut().rev() {
        if brick.destroyed || !state.ball.check_brick_collision(brick) {
            continue;
        }
        let points = brick.hit(&mut state.events);
        if points > 0 {
            state.score += u64::from(points);
            state.events.push(GameEvent::ScoreChanged(state.score));
        }
    }

    let before = state.bricks.len();
    state.bricks.retain(|b| !b.destroyed);
    if state.bricks.len() != before {
        log::debug!(
            "Tick {}: {} bricks destroyed, {} left",
            state.time_ticks,
            before - state.bricks.len(),
            state.bricks.len()
        );
    }

    if state.bricks.is_empty() {
        state.clear_stage();
    }
}

/// Apply a session control command; returns whether it was accepted
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match (command, state.phase) {
        (Command::Start, GamePhase::Menu) | (Command::Confirm, GamePhase::Menu) => {
            state.start_game();
        }
        (Command::Restart, GamePhase::GameOver) => {
            state.reset_game();
            state.start_game();
        }
        (Command::NextStage, GamePhase::StageClear) => {
            state.advance_stage();
        }
        (Command::Pause, GamePhase::Playing) | (Command::TogglePause, GamePhase::Playing) => {
            state.pause();
        }
        (Command::Resume, GamePhase::Paused)
        | (Command::TogglePause, GamePhase::Paused)
        | (Command::Confirm, GamePhase::Paused) => {
            state.resume();
        }
        (command, phase) => {
            log::debug!("Ignoring {:?} during {:?}", command, phase);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::Rect;
    use crate::sim::state::Brick;
    use crate::tuning::Tuning;
    use glam::Vec2;

    fn playing(seed: u64) -> GameState {
        let mut state = GameState::new(seed, Tuning::default()).unwrap();
        assert!(apply_command(&mut state, Command::Start));
        state.drain_events();
        state
    }

    #[test]
    fn test_menu_to_playing() {
        let mut state = GameState::new(12345, Tuning::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Menu);

        // Ticking in the menu does nothing
        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.time_ticks, 0);

        assert!(apply_command(&mut state, Command::Confirm));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.bricks.len(), 50);
    }

    #[test]
    fn test_start_only_accepted_in_menu() {
        let mut state = playing(1);
        assert!(!apply_command(&mut state, Command::Start));
        assert!(!apply_command(&mut state, Command::NextStage));
        assert!(!apply_command(&mut state, Command::Restart));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_tick_pause() {
        let mut state = playing(12345);
        tick(&mut state, &InputSnapshot::default());
        let ball_pos = state.ball.pos;

        assert!(apply_command(&mut state, Command::TogglePause));
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.ball.pos, ball_pos);

        assert!(apply_command(&mut state, Command::Confirm));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events().last(), Some(&GameEvent::HideOverlay));
    }

    #[test]
    fn test_single_brick_scores_its_points() {
        let mut state = playing(4);
        let brick_rect = Rect::new(380.0, 280.0, 40.0, 20.0);
        state.bricks = vec![
            Brick::new(brick_rect, 0xFF6B6B, 1, 10),
            Brick::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0xFF6B6B, 1, 10),
        ];
        // Ball centred just below the brick, heading up into it
        state.ball.pos = Vec2::new(400.0, 312.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        tick(&mut state, &InputSnapshot::default());

        assert_eq!(state.score, 10);
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.ball.vel, Vec2::new(0.0, 5.0));
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BrickBreak { points: 10 }));
        assert!(events.contains(&GameEvent::ScoreChanged(10)));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_multi_hit_brick_survives_first_hit() {
        let mut state = playing(4);
        state.bricks = vec![
            Brick::new(Rect::new(380.0, 280.0, 40.0, 20.0), 0, 3, 30),
            Brick::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0, 1, 10),
        ];
        state.ball.pos = Vec2::new(400.0, 312.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        tick(&mut state, &InputSnapshot::default());

        assert_eq!(state.score, 0);
        assert_eq!(state.bricks.len(), 2);
        assert_eq!(state.bricks[0].durability, 2);
        assert!(state.drain_events().contains(&GameEvent::BrickHit));
    }

    #[test]
    fn test_last_brick_clears_stage() {
        let mut state = playing(4);
        state.bricks = vec![Brick::new(Rect::new(380.0, 280.0, 40.0, 20.0), 0, 1, 10)];
        state.ball.pos = Vec2::new(400.0, 312.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        tick(&mut state, &InputSnapshot::default());

        assert_eq!(state.phase, GamePhase::StageClear);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::StageClear));
        assert!(matches!(
            events.last(),
            Some(GameEvent::ShowOverlay(info)) if info.action == Command::NextStage
        ));

        // Next stage keeps the score and rebuilds the grid
        assert!(apply_command(&mut state, Command::NextStage));
        assert_eq!(state.stage, 2);
        assert_eq!(state.score, 10);
        assert_eq!(state.bricks.len(), 50);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_stage_not_cleared_while_bricks_remain() {
        let mut state = playing(4);
        for _ in 0..10 {
            tick(&mut state, &InputSnapshot::default());
        }
        assert!(!state.bricks.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_two_overlapping_bricks_break_in_one_tick() {
        let mut state = playing(8);
        state.bricks = vec![
            Brick::new(Rect::new(360.0, 280.0, 40.0, 20.0), 0, 1, 10),
            Brick::new(Rect::new(400.0, 280.0, 40.0, 20.0), 0, 1, 10),
            Brick::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0, 1, 10),
        ];
        state.ball.pos = Vec2::new(400.0, 312.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.score, 20);
        assert_eq!(state.bricks.len(), 1);
    }

    #[test]
    fn test_last_life_ends_game_and_freezes() {
        let mut state = playing(9);
        state.lives = 1;
        state.ball.pos = Vec2::new(400.0, state.tuning.canvas_height - 10.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.lives, 0);

        let paddle_x = state.paddle.pos.x;
        let ball_pos = state.ball.pos;
        let ticks = state.time_ticks;
        tick(
            &mut state,
            &InputSnapshot {
                pointer_x: Some(10.0),
                ..Default::default()
            },
        );
        assert_eq!(state.paddle.pos.x, paddle_x);
        assert_eq!(state.ball.pos, ball_pos);
        assert_eq!(state.time_ticks, ticks);
    }

    #[test]
    fn test_restart_after_game_over() {
        let mut state = playing(9);
        state.score = 250;
        state.stage = 3;
        state.lives = 1;
        state.ball.pos = Vec2::new(400.0, state.tuning.canvas_height - 10.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        state.drain_events();

        assert!(apply_command(&mut state, Command::Restart));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.stage, 1);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ScoreChanged(0)));
        assert!(events.contains(&GameEvent::LivesChanged(3)));
        assert!(events.contains(&GameEvent::StageChanged(1)));
    }

    #[test]
    fn test_life_lost_respawns_ball() {
        let mut state = playing(11);
        state.ball.pos = Vec2::new(100.0, state.tuning.canvas_height - 10.0);
        state.ball.vel = Vec2::new(0.0, 5.0);

        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.pos, state.tuning.canvas_center());
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::LifeLost));
        assert!(events.contains(&GameEvent::LivesChanged(2)));
    }

    #[test]
    fn test_life_lost_exactly_at_floor() {
        let mut state = playing(11);
        let floor = state.tuning.canvas_height - state.ball.radius;
        state.ball.vel = Vec2::new(0.0, 5.0);

        state.ball.pos = Vec2::new(100.0, floor - 6.0);
        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.lives, 3);

        state.ball.pos = Vec2::new(100.0, floor - 5.0);
        state.ball.vel = Vec2::new(0.0, 5.0);
        tick(&mut state, &InputSnapshot::default());
        assert_eq!(state.lives, 2);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = playing(99999);
        let mut state2 = playing(99999);

        let inputs = [
            InputSnapshot {
                pointer_x: Some(300.0),
                ..Default::default()
            },
            InputSnapshot {
                left: true,
                ..Default::default()
            },
            InputSnapshot::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input);
            tick(&mut state2, input);
            assert_eq!(state1.drain_events(), state2.drain_events());
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }
}
