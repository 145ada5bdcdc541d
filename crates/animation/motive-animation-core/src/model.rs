//! Metadata for models the host has loaded. Decoding is the host's job; the
//! core only validates the format and labels the file for display.

use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AnimError;

const SUPPORTED: &str = ".glb, .gltf, .obj, .fbx";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelFormat {
    Glb,
    Gltf,
    Obj,
    Fbx,
}

impl ModelFormat {
    pub fn from_extension(ext: &str) -> Result<ModelFormat, AnimError> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "glb" => Ok(ModelFormat::Glb),
            "gltf" => Ok(ModelFormat::Gltf),
            "obj" => Ok(ModelFormat::Obj),
            "fbx" => Ok(ModelFormat::Fbx),
            other => Err(AnimError::UnsupportedFormat {
                extension: other.to_string(),
                supported: SUPPORTED,
            }),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<ModelFormat, AnimError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelFormat::Glb => "GLB",
            ModelFormat::Gltf => "GLTF",
            ModelFormat::Obj => "OBJ",
            ModelFormat::Fbx => "FBX",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    /// Short random id (8 hex chars).
    pub id: String,
    pub filename: String,
    pub format: ModelFormat,
    pub size_bytes: u64,
    pub size_formatted: String,
}

impl ModelInfo {
    pub fn new(filename: &str, size_bytes: u64) -> Result<ModelInfo, AnimError> {
        let format = ModelFormat::from_path(filename)?;
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(8);
        Ok(ModelInfo {
            id,
            filename: filename.to_string(),
            format,
            size_bytes,
            size_formatted: format_file_size(size_bytes),
        })
    }
}

/// Human readable size with one decimal, 1024-based units.
pub fn format_file_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} TB")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_detection_is_case_insensitive() {
        assert_eq!(ModelFormat::from_path("robot.GLB").unwrap(), ModelFormat::Glb);
        assert_eq!(ModelFormat::from_path("a/b/c.fbx").unwrap(), ModelFormat::Fbx);
        assert_eq!(ModelFormat::from_extension(".Obj").unwrap(), ModelFormat::Obj);
    }

    #[test]
    fn rejects_unsupported_and_missing_extensions() {
        assert!(matches!(
            ModelFormat::from_path("scene.blend"),
            Err(AnimError::UnsupportedFormat { .. })
        ));
        assert!(ModelFormat::from_path("README").is_err());
    }

    #[test]
    fn file_sizes() {
        assert_eq!(format_file_size(0), "0.0 B");
        assert_eq!(format_file_size(512), "512.0 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024u64.pow(4)), "3.0 TB");
    }

    #[test]
    fn model_info_has_short_id() {
        let info = ModelInfo::new("duck.gltf", 2048).unwrap();
        assert_eq!(info.id.len(), 8);
        assert_eq!(info.format.label(), "GLTF");
        assert_eq!(info.size_formatted, "2.0 KB");
    }
}
