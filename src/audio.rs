//! Procedural sound cues
//!
//! Every cue is a single decaying oscillator tone, so no sample files are
//! needed. Playback goes through an `AudioBackend`; without one the manager
//! stays silent and the game carries on.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits brick (doesn't break)
    BrickHit,
    /// Brick breaks
    BrickBreak,
    /// Ball hits a side or top wall
    WallHit,
    /// Ball fell past the paddle
    LifeLost,
    /// Every brick destroyed
    StageClear,
    /// Last life lost
    GameOver,
}

/// Oscillator waveform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
}

/// A single tone with an exponential decay envelope
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    /// Hz
    pub frequency: f32,
    /// Seconds until the envelope has decayed to silence
    pub duration: f32,
    pub waveform: Waveform,
    /// Gain at onset before volume scaling
    pub peak_gain: f32,
}

impl SoundEffect {
    /// Synthesis parameters for this cue
    pub fn tone(self) -> Tone {
        let (frequency, duration, waveform) = match self {
            SoundEffect::PaddleHit => (200.0, 0.1, Waveform::Square),
            SoundEffect::BrickHit => (300.0, 0.15, Waveform::Square),
            SoundEffect::BrickBreak => (150.0, 0.2, Waveform::Sawtooth),
            SoundEffect::WallHit => (100.0, 0.1, Waveform::Sine),
            SoundEffect::LifeLost => (80.0, 0.3, Waveform::Sawtooth),
            SoundEffect::StageClear => (400.0, 0.5, Waveform::Sine),
            SoundEffect::GameOver => (100.0, 0.5, Waveform::Sawtooth),
        };
        Tone {
            frequency,
            duration,
            waveform,
            peak_gain: 0.3,
        }
    }

    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
            GameEvent::BrickHit => Some(SoundEffect::BrickHit),
            GameEvent::BrickBreak { .. } => Some(SoundEffect::BrickBreak),
            GameEvent::WallHit => Some(SoundEffect::WallHit),
            GameEvent::LifeLost => Some(SoundEffect::LifeLost),
            GameEvent::StageClear => Some(SoundEffect::StageClear),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
            _ => None,
        }
    }
}

/// Something that can turn a tone into sound
///
/// Implementations must not block; failures are the backend's to swallow.
pub trait AudioBackend {
    fn play_tone(&mut self, tone: &Tone, gain: f32);
}

/// Backend that only logs cues, for headless runs
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioBackend for LogAudio {
    fn play_tone(&mut self, tone: &Tone, gain: f32) {
        log::trace!(
            "tone {:.0} Hz {:?} for {:.2}s at gain {:.2}",
            tone.frequency,
            tone.waveform,
            tone.duration,
            gain
        );
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Option<Box<dyn AudioBackend>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl std::fmt::Debug for AudioManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioManager")
            .field("enabled", &self.is_enabled())
            .field("master_volume", &self.master_volume)
            .field("sfx_volume", &self.sfx_volume)
            .field("muted", &self.muted)
            .finish()
    }
}

impl AudioManager {
    /// Manager over an optional backend; `None` means audio is unavailable
    pub fn new(backend: Option<Box<dyn AudioBackend>>) -> Self {
        if backend.is_none() {
            log::warn!("No audio backend available - audio disabled");
        }
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager that never makes a sound
    pub fn silent() -> Self {
        Self {
            backend: None,
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: true,
        }
    }

    /// Apply volume and mute preferences
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect (fire and forget)
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(backend) = self.backend.as_mut() else {
            return;
        };

        let tone = effect.tone();
        backend.play_tone(&tone, tone.peak_gain * vol);
    }
}
