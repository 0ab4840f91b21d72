//! Tick driver
//!
//! One `frame` per display refresh: apply queued commands, simulate one tick
//! if playing, fan side effects out to audio and the frontend, then draw.

use crate::audio::{AudioManager, SoundEffect};
use crate::frontend::{Frontend, render};
use crate::input::InputState;
use crate::sim::{Command, GameEvent, GamePhase, GameState, apply_command, tick};

/// Owns a session and its collaborators
pub struct Driver<F: Frontend> {
    state: GameState,
    frontend: F,
    audio: AudioManager,
    input: InputState,
    /// Primary action of the overlay currently shown
    overlay_action: Option<Command>,
    frames: u64,
}

impl<F: Frontend> Driver<F> {
    /// Wrap a session; its pending events (initial HUD and menu) go out immediately
    pub fn new(state: GameState, frontend: F, audio: AudioManager) -> Self {
        let mut driver = Self {
            state,
            frontend,
            audio,
            input: InputState::new(),
            overlay_action: None,
            frames: 0,
        };
        driver.dispatch();
        driver
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Input sink for the platform's event handlers
    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    /// Frames run so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Primary action of the visible overlay, if any
    pub fn overlay_action(&self) -> Option<Command> {
        self.overlay_action
    }

    /// Overlay button pressed: queue its action for the next frame
    pub fn press_overlay_action(&mut self) {
        if let Some(action) = self.overlay_action {
            self.input.push_command(action);
        }
    }

    /// Run one display-refresh worth of work
    pub fn frame(&mut self) {
        self.frames += 1;

        for command in self.input.take_commands() {
            apply_command(&mut self.state, command);
        }

        let snapshot = self.input.snapshot();
        tick(&mut self.state, &snapshot);
        self.dispatch();

        if self.state.phase != GamePhase::Menu {
            render(&self.state, &mut self.frontend);
        }
    }

    /// Keep running frames; `limit` of None never returns
    ///
    /// `poll` stands in for the platform's input events and runs before each frame.
    pub fn run<P>(&mut self, limit: Option<u64>, mut poll: P)
    where
        P: FnMut(&GameState, &mut InputState),
    {
        let mut remaining = limit;
        loop {
            if let Some(left) = remaining.as_mut() {
                if *left == 0 {
                    break;
                }
                *left -= 1;
            }
            poll(&self.state, &mut self.input);
            self.frame();
        }
    }

    /// Hand pending side effects to audio and the frontend
    fn dispatch(&mut self) {
        for event in self.state.drain_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
            match event {
                GameEvent::ScoreChanged(score) => self.frontend.update_score(score),
                GameEvent::LivesChanged(lives) => self.frontend.update_lives(lives),
                GameEvent::StageChanged(stage) => self.frontend.update_stage(stage),
                GameEvent::ShowOverlay(info) => {
                    self.overlay_action = Some(info.action);
                    self.frontend.show_overlay(&info);
                }
                GameEvent::HideOverlay => {
                    self.overlay_action = None;
                    self.frontend.hide_overlay();
                }
                _ => {}
            }
        }
    }
}
