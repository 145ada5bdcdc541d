//! Motion functions. Each one maps (t, rest) to a transform by offsetting the
//! rest pose; none of them read the previous frame.
//!
//! `t` is elapsed logical time in seconds, already multiplied by the playback
//! speed. Frequencies and amplitudes are fixed per motion.

use std::f32::consts::{FRAC_PI_2, TAU};

use crate::jitter::JitterSource;
use crate::transform::{RestPose, Transform, Vec3};

#[inline]
fn start(rest: &RestPose) -> Transform {
    *rest.transform()
}

#[inline]
fn up(dy: f32) -> Vec3 {
    Vec3::new(0.0, dy, 0.0)
}

#[inline]
fn yaw(a: f32) -> Vec3 {
    Vec3::new(0.0, a, 0.0)
}

/// Non-negative half-wave of `sin`.
#[inline]
fn half_wave(x: f32) -> f32 {
    x.sin().max(0.0)
}

/// Triangle wave in [-1, 1] with the same phase and period as `sin`.
#[inline]
fn triangle(x: f32) -> f32 {
    x.sin().asin() / FRAC_PI_2
}

pub fn rotate(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(yaw(t));
    out
}

pub fn spin(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(yaw(t * 3.0));
    out
}

pub fn bounce(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up((t * 4.0).sin().abs() * 0.5));
    out
}

pub fn float(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up((t * 1.5).sin() * 0.2));
    out
}

pub fn pulse(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.scale_uniform(1.0 + (t * 4.0).sin() * 0.15);
    out
}

pub fn wave(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let s = (t * 2.0).sin();
    let mut out = start(rest);
    out.translate(up(s * 0.1))
        .rotate(Vec3::new(0.0, 0.0, s * 0.3));
    out
}

pub fn shake(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(Vec3::new((t * 20.0).sin() * 0.05, 0.0, 0.0));
    out
}

pub fn swing(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(Vec3::new(0.0, 0.0, (t * 2.0).sin() * 0.5));
    out
}

pub fn jump(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    // stretch while rising, squash on landing
    let s = (2.0 * t.rem_euclid(TAU)).sin();
    let mut out = start(rest);
    out.translate(up(s.max(0.0) * 1.0))
        .scale_by(Vec3::new(1.0 - s * 0.05, 1.0 + s * 0.1, 1.0 - s * 0.05));
    out
}

pub fn dance(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up((t * 6.0).sin().abs() * 0.4))
        .rotate(Vec3::new(0.0, (t * 4.0).sin() * 0.6, (t * 3.0).sin() * 0.25))
        .scale_uniform(1.0 + (t * 6.0).sin() * 0.08);
    out
}

pub fn wobble(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    // quarter-phase offset between axes; z is shifted so the cycle starts at rest
    let phase = t * 3.0;
    let mut out = start(rest);
    out.rotate(Vec3::new(phase.sin() * 0.2, 0.0, phase.cos() * 0.2 - 0.2));
    out
}

pub fn roll(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(Vec3::new(t * 2.0, 0.0, 0.0));
    out
}

pub fn flip(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up(t.sin().abs() * 0.5))
        .rotate(Vec3::new(t * 2.0, 0.0, 0.0));
    out
}

pub fn breathe(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.scale_uniform(1.0 + (t * 1.5).sin() * 0.05);
    out
}

pub fn walk(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let step = t * 4.0;
    let mut out = start(rest);
    out.translate(up(step.sin().abs() * 0.1))
        .rotate(Vec3::new(0.0, 0.0, step.sin() * 0.1));
    out
}

/// Circle of `radius` in the XZ plane, shifted so phase 0 sits at the rest position.
#[inline]
fn circle(phase: f32, radius: f32) -> Vec3 {
    Vec3::new(phase.cos() * radius - radius, 0.0, phase.sin() * radius)
}

pub fn orbit(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(circle(t, 2.0)).rotate(yaw(t));
    out
}

pub fn spiral(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(circle(t * 2.0, 1.5) + up((t * 0.5).sin() * 1.0))
        .rotate(yaw(t * 2.0));
    out
}

pub fn tornado(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let radius = 0.3 + 0.2 * t.sin();
    let phase = t * 6.0;
    let path = Vec3::new(
        phase.cos() * radius - 0.3,
        t.sin().abs() * 1.5,
        phase.sin() * radius,
    );
    let mut out = start(rest);
    out.translate(path).rotate(yaw(t * 8.0));
    out
}

pub fn earthquake(_t: f32, rest: &RestPose, jitter: &mut dyn JitterSource) -> Transform {
    const INTENSITY: f32 = 0.08;
    let offset = Vec3::new(jitter.sample(), jitter.sample(), jitter.sample()).scaled(INTENSITY);
    let mut out = start(rest);
    out.translate(offset);
    out
}

pub fn nod(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(Vec3::new((t * 3.0).sin() * 0.3, 0.0, 0.0));
    out
}

pub fn tilt(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(Vec3::new(0.0, 0.0, (t * 1.2).sin() * 0.25));
    out
}

pub fn heartbeat(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let beat = half_wave(t * 6.0).powi(8);
    let mut out = start(rest);
    out.scale_uniform(1.0 + beat * 0.2);
    out
}

pub fn zigzag(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(Vec3::new(triangle(t * 2.0) * 0.8, 0.0, 0.0));
    out
}

pub fn sway(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let s = t.sin();
    let mut out = start(rest);
    out.translate(Vec3::new(s * 0.3, 0.0, 0.0))
        .rotate(Vec3::new(0.0, 0.0, s * 0.1));
    out
}

pub fn twist(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(yaw((t * 2.0).sin() * 1.2));
    out
}

pub fn squash(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let s = (t * 4.0).sin();
    let mut out = start(rest);
    out.scale_by(Vec3::new(1.0 + s * 0.1, 1.0 - s * 0.2, 1.0 + s * 0.1));
    out
}

pub fn tumble(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up((t * 1.5).sin().abs() * 0.3))
        .rotate(Vec3::new(t * 1.5, 0.0, t));
    out
}

pub fn hop(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.translate(up(half_wave(t * 6.0) * 0.3));
    out
}

pub fn wiggle(t: f32, rest: &RestPose, _: &mut dyn JitterSource) -> Transform {
    let mut out = start(rest);
    out.rotate(Vec3::new(
        0.0,
        (t * 10.0).sin() * 0.15,
        (t * 12.0).sin() * 0.08,
    ));
    out
}
