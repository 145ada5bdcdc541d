use bevy::prelude::*;

/// Marker for the model root the animator drives. Its `Transform` when the
/// marker is added becomes the rest pose.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct AnimatedModel;
