//! Output contracts from the animator.
//!
//! Outputs carry the transform for this tick (if a model is attached) and the
//! semantic events queued since the previous tick. Adapters apply the
//! transform to the model root and forward the events to their UI.

use serde::{Deserialize, Serialize};

use crate::ids::AnimationId;
use crate::playback::PlaybackStatus;
use crate::transform::Transform;

/// Discrete signals produced by commands.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
#[non_exhaustive]
pub enum CoreEvent {
    ModelAttached,
    ModelDetached,
    AnimationStarted {
        animation: AnimationId,
        #[serde(skip_serializing_if = "Option::is_none")]
        prompt: Option<String>,
    },
    PromptRejected {
        prompt: String,
    },
    PlaybackPaused,
    PlaybackResumed,
    PlaybackStopped,
    SpeedChanged {
        speed: f32,
    },
}

/// Returned by `Animator::update`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub transform: Option<Transform>,
    #[serde(default)]
    pub status: PlaybackStatus,
    #[serde(default)]
    pub elapsed: f32,
    #[serde(default)]
    pub events: Vec<CoreEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.transform = None;
        self.status = PlaybackStatus::Stopped;
        self.elapsed = 0.0;
        self.events.clear();
    }
}
