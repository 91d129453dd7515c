//! # Export Errors
//!
//! Failures raised while encoding or writing scene artifacts.

use std::path::PathBuf;

use thiserror::Error;
use trolley_scene::GeometryError;

/// Errors from artifact encoding and filesystem writes.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A filesystem operation failed for a concrete artifact path.
    #[error("Export I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The glTF document could not be serialized.
    #[error("GLB JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A scene part failed to tessellate into a mesh.
    #[error("Scene tessellation failed: {0}")]
    Tessellation(#[from] GeometryError),

    /// The scene holds no parts, so there is nothing to encode.
    #[error("Cannot export an empty scene")]
    EmptyScene,

    /// Both the primary export and the fallback export failed.
    #[error("GLB export failed ({primary}) and the PLY fallback also failed")]
    FallbackFailed {
        primary: String,
        #[source]
        source: Box<ExportError>,
    },
}

impl ExportError {
    /// Wrap an I/O error with the artifact path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ExportError::io(
            "models/latest.glb",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.contains("models/latest.glb"));
        assert!(text.contains("denied"));
    }

    #[test]
    fn fallback_failure_keeps_both_causes() {
        let inner = ExportError::io(
            "models/latest.ply",
            std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        );
        let err = ExportError::FallbackFailed {
            primary: "short read".to_string(),
            source: Box::new(inner),
        };
        assert!(err.to_string().contains("short read"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
