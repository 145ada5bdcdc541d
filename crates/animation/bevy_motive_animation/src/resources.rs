use bevy::prelude::*;
use motive_animation_core::{Animator, Command, CoreEvent};

/// The animator plus the entity it is currently attached to.
#[derive(Resource, Debug, Default)]
pub struct MotiveAnimator {
    pub animator: Animator,
    pub target: Option<Entity>,
}

impl MotiveAnimator {
    pub fn new(animator: Animator) -> Self {
        Self {
            animator,
            target: None,
        }
    }
}

/// Playback command for the animator. Prompts and controls share this one
/// event stream so they apply in the order they were sent.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MotiveCommand(pub Command);

impl MotiveCommand {
    /// Free-text animation prompt, e.g. from a chat box.
    pub fn prompt(text: impl Into<String>) -> Self {
        Self(Command::SetAnimation {
            prompt: text.into(),
        })
    }
}

impl From<Command> for MotiveCommand {
    fn from(cmd: Command) -> Self {
        Self(cmd)
    }
}

/// Core events re-published each frame for UI systems.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct MotiveEvent(pub CoreEvent);
