//! Playback state machine.
//!
//! ```text
//! Stopped --set_animation--> Playing <--play/pause--> Paused
//!    ^                          |                        |
//!    +----------stop------------+------------stop--------+
//! ```
//!
//! Only `Playing` advances time. Every successful `set_animation` restarts
//! the clock at zero.

use serde::{Deserialize, Serialize};

use crate::error::AnimError;
use crate::ids::AnimationId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackStatus {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
        }
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// What a transition actually did; the animator turns these into events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Paused,
    Resumed,
    Stopped,
    Unchanged,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackState {
    pub status: PlaybackStatus,
    pub current: Option<AnimationId>,
    /// Logical seconds since the active animation started, already speed-scaled.
    pub elapsed: f32,
    pub speed: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Accept only positive finite multipliers.
pub fn validate_speed(speed: f32) -> Result<f32, AnimError> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(AnimError::InvalidSpeed { speed })
    }
}

impl PlaybackState {
    pub fn new(speed: f32) -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current: None,
            elapsed: 0.0,
            speed,
        }
    }

    pub fn start(&mut self, id: AnimationId) -> Transition {
        self.current = Some(id);
        self.elapsed = 0.0;
        self.status = PlaybackStatus::Playing;
        Transition::Started
    }

    pub fn pause(&mut self) -> Transition {
        match self.status {
            PlaybackStatus::Playing => {
                self.status = PlaybackStatus::Paused;
                Transition::Paused
            }
            _ => Transition::Unchanged,
        }
    }

    /// Resume from pause. Stopped has no animation to resume, so it stays put.
    pub fn play(&mut self) -> Transition {
        match self.status {
            PlaybackStatus::Paused if self.current.is_some() => {
                self.status = PlaybackStatus::Playing;
                Transition::Resumed
            }
            _ => Transition::Unchanged,
        }
    }

    pub fn stop(&mut self) -> Transition {
        let was_stopped = self.status == PlaybackStatus::Stopped && self.current.is_none();
        self.status = PlaybackStatus::Stopped;
        self.current = None;
        self.elapsed = 0.0;
        if was_stopped {
            Transition::Unchanged
        } else {
            Transition::Stopped
        }
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), AnimError> {
        self.speed = validate_speed(speed)?;
        Ok(())
    }

    /// Advance by `dt` wall seconds. Returns the animation to evaluate, if any.
    pub fn advance(&mut self, dt: f32) -> Option<AnimationId> {
        if !self.status.is_playing() {
            return None;
        }
        let id = self.current?;
        self.elapsed += dt * self.speed;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_from_stopped_is_noop() {
        let mut s = PlaybackState::default();
        assert_eq!(s.play(), Transition::Unchanged);
        assert_eq!(s.status, PlaybackStatus::Stopped);
    }

    #[test]
    fn pause_freezes_advance() {
        let mut s = PlaybackState::default();
        s.start(AnimationId::Bounce);
        s.advance(0.5);
        assert_eq!(s.pause(), Transition::Paused);
        assert_eq!(s.advance(10.0), None);
        assert_eq!(s.elapsed, 0.5);
        assert_eq!(s.play(), Transition::Resumed);
        assert_eq!(s.advance(0.25), Some(AnimationId::Bounce));
        assert_eq!(s.elapsed, 0.75);
    }

    #[test]
    fn stop_clears_animation_and_time() {
        let mut s = PlaybackState::default();
        s.start(AnimationId::Spin);
        s.advance(1.0);
        assert_eq!(s.stop(), Transition::Stopped);
        assert_eq!(s.current, None);
        assert_eq!(s.elapsed, 0.0);
        assert_eq!(s.stop(), Transition::Unchanged);
    }

    #[test]
    fn invalid_speed_is_rejected_and_kept() {
        let mut s = PlaybackState::new(1.5);
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            assert!(s.set_speed(bad).is_err());
        }
        assert_eq!(s.speed, 1.5);
    }
}
