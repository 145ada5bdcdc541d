//! Motion registry: one closed-form function per [`AnimationId`].
//!
//! The registry is an exhaustive match, so adding an id without a motion is a
//! compile error rather than a runtime lookup failure.

pub mod functions;

use crate::ids::AnimationId;
use crate::jitter::JitterSource;
use crate::transform::{RestPose, Transform};

/// Signature shared by every motion: (speed-scaled time, rest pose, jitter) → transform.
pub type MotionFn = fn(f32, &RestPose, &mut dyn JitterSource) -> Transform;

pub fn motion_fn(id: AnimationId) -> MotionFn {
    use functions as f;
    match id {
        AnimationId::Rotate => f::rotate,
        AnimationId::Spin => f::spin,
        AnimationId::Bounce => f::bounce,
        AnimationId::Float => f::float,
        AnimationId::Pulse => f::pulse,
        AnimationId::Wave => f::wave,
        AnimationId::Shake => f::shake,
        AnimationId::Swing => f::swing,
        AnimationId::Jump => f::jump,
        AnimationId::Dance => f::dance,
        AnimationId::Wobble => f::wobble,
        AnimationId::Roll => f::roll,
        AnimationId::Flip => f::flip,
        AnimationId::Breathe => f::breathe,
        AnimationId::Walk => f::walk,
        AnimationId::Orbit => f::orbit,
        AnimationId::Spiral => f::spiral,
        AnimationId::Tornado => f::tornado,
        AnimationId::Earthquake => f::earthquake,
        AnimationId::Nod => f::nod,
        AnimationId::Tilt => f::tilt,
        AnimationId::Heartbeat => f::heartbeat,
        AnimationId::Zigzag => f::zigzag,
        AnimationId::Sway => f::sway,
        AnimationId::Twist => f::twist,
        AnimationId::Squash => f::squash,
        AnimationId::Tumble => f::tumble,
        AnimationId::Hop => f::hop,
        AnimationId::Wiggle => f::wiggle,
    }
}

/// Evaluate `id` at logical time `t` against `rest`.
///
/// Pure in `(id, t, rest)` for every id except `earthquake`, which draws
/// three samples from `jitter` per call.
#[inline]
pub fn evaluate(
    id: AnimationId,
    t: f32,
    rest: &RestPose,
    jitter: &mut dyn JitterSource,
) -> Transform {
    motion_fn(id)(t, rest, jitter)
}
