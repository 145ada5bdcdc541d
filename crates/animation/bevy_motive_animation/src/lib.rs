//! Bevy adapter for `motive-animation-core`.
//!
//! Mark the loaded model root with [`AnimatedModel`], send [`MotiveCommand`]s
//! (prompts via [`MotiveCommand::prompt`]), and the plugin writes the evaluated
//! pose back onto its `Transform` every frame.

use bevy::prelude::*;
use motive_animation_core::{Animator, Config};

mod components;
mod resources;
mod systems;

pub use components::AnimatedModel;
pub use resources::{MotiveAnimator, MotiveCommand, MotiveEvent};
pub use systems::{rest_from_transform, write_pose};

/// Ordering for the plugin's systems inside `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotiveSet;

#[derive(Default)]
pub struct MotivePlugin {
    pub config: Config,
}

impl Plugin for MotivePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(MotiveAnimator::new(Animator::new(self.config.clone())))
            .add_event::<MotiveCommand>()
            .add_event::<MotiveEvent>()
            .add_systems(
                Update,
                (
                    systems::attach_models_system,
                    systems::detach_models_system,
                    systems::handle_commands_system,
                    systems::tick_animation_system,
                )
                    .chain()
                    .in_set(MotiveSet),
            );
    }
}
