//! Input collection
//!
//! Raw key and pointer events arrive between ticks and are folded into an
//! `InputState`. Each tick the driver takes an `InputSnapshot` (last write
//! wins) and any queued session commands.

use std::collections::HashSet;

use crate::sim::{Command, InputSnapshot};

/// Keys the game cares about, by physical key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    A,
    D,
    Space,
    Escape,
    P,
}

impl Key {
    /// Map a DOM-style key name (`KeyboardEvent.key`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "a" | "A" => Some(Key::A),
            "d" | "D" => Some(Key::D),
            " " | "Space" => Some(Key::Space),
            "Escape" => Some(Key::Escape),
            "p" | "P" => Some(Key::P),
            _ => None,
        }
    }

    fn is_left(self) -> bool {
        matches!(self, Key::ArrowLeft | Key::A)
    }

    fn is_right(self) -> bool {
        matches!(self, Key::ArrowRight | Key::D)
    }

    /// Session command issued when this key goes down
    fn command(self) -> Option<Command> {
        match self {
            Key::Space => Some(Command::Confirm),
            Key::Escape | Key::P => Some(Command::TogglePause),
            _ => None,
        }
    }
}

/// Accumulated input between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pointer_x: Option<f32>,
    held: HashSet<Key>,
    commands: Vec<Command>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key pressed (by name); unknown keys are ignored
    pub fn key_down(&mut self, name: &str) {
        let Some(key) = Key::from_name(name) else {
            return;
        };
        // Auto-repeat delivers repeated downs; only the first issues a command
        if self.held.insert(key) {
            if let Some(command) = key.command() {
                self.commands.push(command);
            }
        }
    }

    /// Key released (by name)
    pub fn key_up(&mut self, name: &str) {
        if let Some(key) = Key::from_name(name) {
            self.held.remove(&key);
        }
    }

    /// Pointer moved; `client_x` is page space, `canvas_left` the canvas offset
    pub fn pointer_move(&mut self, client_x: f32, canvas_left: f32) {
        self.pointer_x = Some(client_x - canvas_left);
    }

    /// Pointer left the canvas
    pub fn pointer_leave(&mut self) {
        self.pointer_x = None;
    }

    /// Queue a command directly (overlay button, autopilot)
    pub fn push_command(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Current state for the paddle
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            pointer_x: self.pointer_x,
            left: self.held.iter().any(|k| k.is_left()),
            right: self.held.iter().any(|k| k.is_right()),
        }
    }

    /// Commands queued since the last call, oldest first
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
