//! Baking API: sample a motion at a fixed frame rate for clip export.
//!
//! The exporter (video capture on the host) consumes one transform per
//! frame. `earthquake` draws from a `StdRng` seeded by the config so a baked
//! clip is reproducible.

use serde::{Deserialize, Serialize};

use crate::error::AnimError;
use crate::ids::AnimationId;
use crate::jitter::RandJitter;
use crate::motion;
use crate::transform::{RestPose, Transform};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BakingConfig {
    /// Target frame rate (Hz).
    pub frame_rate: f32,
    /// Clip length in wall-clock seconds.
    pub duration: f32,
    /// Playback speed multiplier applied to logical time.
    pub speed: f32,
    /// Seed for `earthquake` jitter.
    pub seed: u64,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            duration: 5.0,
            speed: 1.0,
            seed: 0,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedFrame {
    /// Wall-clock seconds from the start of the clip.
    pub time: f32,
    pub transform: Transform,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BakedClip {
    pub animation: AnimationId,
    pub frame_rate: f32,
    pub duration: f32,
    pub speed: f32,
    pub frames: Vec<BakedFrame>,
}

/// One hour at 30 fps.
pub const MAX_BAKED_FRAMES: usize = 108_000;

fn positive_or(v: f32, fallback: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        fallback
    }
}

/// Bake `id` against `rest`. Non-positive or non-finite config values fall
/// back to the defaults; clips longer than [`MAX_BAKED_FRAMES`] are rejected
/// before anything is allocated.
pub fn bake_clip(
    id: AnimationId,
    rest: &RestPose,
    cfg: &BakingConfig,
) -> Result<BakedClip, AnimError> {
    let defaults = BakingConfig::default();
    let fps = positive_or(cfg.frame_rate, defaults.frame_rate).max(1.0);
    let duration = positive_or(cfg.duration, defaults.duration);
    let speed = positive_or(cfg.speed, defaults.speed);

    // f64 so huge durations saturate instead of wrapping
    let requested = (f64::from(duration) * f64::from(fps)).round() as u64;
    if requested > MAX_BAKED_FRAMES as u64 {
        return Err(AnimError::ClipTooLong {
            frames: requested,
            max: MAX_BAKED_FRAMES,
        });
    }
    let frame_count = (requested as usize).max(1);
    let mut jitter = RandJitter::seeded(cfg.seed);

    let frames = (0..frame_count)
        .map(|i| {
            let time = i as f32 / fps;
            BakedFrame {
                time,
                transform: motion::evaluate(id, time * speed, rest, &mut jitter),
            }
        })
        .collect();

    log::debug!("baked {frame_count} frames of {id} at {fps} fps");
    Ok(BakedClip {
        animation: id,
        frame_rate: fps,
        duration,
        speed,
        frames,
    })
}

/// Export a baked clip as serde_json::Value (stable schema for FFI/serialization).
pub fn export_baked_json(clip: &BakedClip) -> serde_json::Value {
    serde_json::to_value(clip).unwrap_or(serde_json::Value::Null)
}
