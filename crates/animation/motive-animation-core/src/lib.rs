//! Motive Animation Core (engine-agnostic)
//!
//! Turns a free-text prompt into one of a fixed set of procedural motions and
//! evaluates that motion against a model's rest pose each tick. Rendering,
//! model decoding and video capture live in the host; adapters (Bevy/WASM)
//! feed the animator frame deltas and apply its output transform.

pub mod aliases;
pub mod animator;
pub mod baking;
pub mod catalog;
pub mod config;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod jitter;
pub mod model;
pub mod motion;
pub mod outputs;
pub mod playback;
pub mod resolver;
pub mod transform;

// Re-exports for consumers (adapters)
pub use aliases::AliasTable;
pub use animator::Animator;
pub use baking::{
    bake_clip, export_baked_json, BakedClip, BakedFrame, BakingConfig, MAX_BAKED_FRAMES,
};
pub use catalog::{catalog, catalog_by_category, AnimationInfo};
pub use config::Config;
pub use error::AnimError;
pub use ids::{AnimationId, Category};
pub use inputs::{Command, Inputs};
pub use jitter::{ConstJitter, JitterSource, RandJitter};
pub use model::{format_file_size, ModelFormat, ModelInfo};
pub use motion::{evaluate, motion_fn, MotionFn};
pub use outputs::{CoreEvent, Outputs};
pub use playback::{PlaybackState, PlaybackStatus};
pub use resolver::{resolve, MatchKind, PromptResolver};
pub use transform::{RestPose, Transform, Vec3};
