//! Error type for the animation core.

use thiserror::Error;

/// Failures surfaced to hosts. Unresolvable prompts are not errors: the
/// resolver reports them as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AnimError {
    #[error("speed multiplier must be positive and finite, got {speed}")]
    InvalidSpeed { speed: f32 },
    #[error("unknown animation '{name}'")]
    UnknownAnimation { name: String },
    #[error("unsupported model format '{extension}' (supported: {supported})")]
    UnsupportedFormat {
        extension: String,
        supported: &'static str,
    },
    #[error("clip of {frames} frames exceeds the limit of {max}")]
    ClipTooLong { frames: u64, max: usize },
    #[error("config error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnimError {
    fn from(err: serde_json::Error) -> Self {
        AnimError::Config(err.to_string())
    }
}
