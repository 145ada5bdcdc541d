use bevy::prelude::*;

use motive_animation_core::{RestPose, Transform as Pose, Vec3 as PoseVec3};

use crate::components::AnimatedModel;
use crate::resources::{MotiveAnimator, MotiveCommand, MotiveEvent};

/// Capture a Bevy transform as a rest pose. Rotation is stored as XYZ Euler angles.
pub fn rest_from_transform(tf: &Transform) -> RestPose {
    let (x, y, z) = tf.rotation.to_euler(EulerRot::XYZ);
    RestPose::capture(&Pose::new(
        PoseVec3::from(tf.translation.to_array()),
        PoseVec3::new(x, y, z),
        PoseVec3::from(tf.scale.to_array()),
    ))
}

/// Write an evaluated pose onto a Bevy transform.
pub fn write_pose(pose: &Pose, tf: &mut Transform) {
    let p = pose.position;
    let r = pose.rotation;
    let s = pose.scale;
    tf.translation = Vec3::new(p.x, p.y, p.z);
    tf.rotation = Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
    tf.scale = Vec3::new(s.x, s.y, s.z);
}

/// Attach newly marked models. Only one model is driven at a time; the most
/// recent one wins.
pub fn attach_models_system(
    added: Query<(Entity, &Transform), Added<AnimatedModel>>,
    mut anim: ResMut<MotiveAnimator>,
) {
    for (entity, tf) in added.iter() {
        if let Some(prev) = anim.target.filter(|prev| *prev != entity) {
            warn!("replacing animated model {prev:?} with {entity:?}");
        }
        anim.animator.set_model(Some(rest_from_transform(tf)));
        anim.target = Some(entity);
    }
}

/// Detach when the driven entity loses its marker or is despawned.
pub fn detach_models_system(
    mut removed: RemovedComponents<AnimatedModel>,
    mut anim: ResMut<MotiveAnimator>,
) {
    for entity in removed.read() {
        if anim.target == Some(entity) {
            anim.animator.set_model(None);
            anim.target = None;
        }
    }
}

/// Apply queued commands in send order.
pub fn handle_commands_system(
    mut commands: EventReader<MotiveCommand>,
    mut anim: ResMut<MotiveAnimator>,
) {
    for MotiveCommand(cmd) in commands.read() {
        if let Err(err) = anim.animator.apply(cmd.clone()) {
            warn!("motive command rejected: {err}");
        }
    }
}

/// Advance the animator by the frame delta, apply the pose and forward events.
pub fn tick_animation_system(
    time: Res<Time>,
    mut anim: ResMut<MotiveAnimator>,
    mut models: Query<&mut Transform, With<AnimatedModel>>,
    mut events: EventWriter<MotiveEvent>,
) {
    let target = anim.target;
    let out = anim.animator.update(time.delta_seconds());
    events.send_batch(out.events.iter().cloned().map(MotiveEvent));

    let (Some(entity), Some(pose)) = (target, out.transform.as_ref()) else {
        return;
    };
    if let Ok(mut tf) = models.get_mut(entity) {
        write_pose(pose, &mut tf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_capture_round_trips_euler() {
        let tf = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_euler(EulerRot::XYZ, 0.3, -0.2, 0.1),
            scale: Vec3::splat(2.0),
        };
        let rest = rest_from_transform(&tf);
        let mut back = Transform::default();
        write_pose(rest.transform(), &mut back);
        assert!((back.translation - tf.translation).length() < 1e-5);
        assert!(back.rotation.angle_between(tf.rotation) < 1e-4);
        assert!((back.scale - tf.scale).length() < 1e-5);
    }
}
