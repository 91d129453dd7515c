//! # Trolley Export
//!
//! Artifact export boundary for the trolley pipeline.
//!
//! ## Architecture
//!
//! The scene leaves the pipeline through exactly one call, [`export_scene`]:
//!
//! 1. Encode the scene as GLB and write it atomically to the primary path.
//! 2. If that fails for any reason, log a warning, write an ASCII PLY to
//!    the fallback path, and record the failure in a sentinel file next to
//!    the artifacts. The degraded run is observable three ways: the
//!    warning, the sentinel, and the returned [`ExportOutcome`].
//! 3. If the fallback fails as well, the error carries both causes.
//!
//! Writes go through a staging file renamed into place, so a crash mid-write
//! never leaves a truncated artifact at a published path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use trolley_scene::Scene;

pub mod error;
pub mod glb;
pub mod ply;

pub use error::ExportError;

use config::constants::{GLB_ERROR_PATH, MODEL_GLB_PATH, MODEL_PLY_PATH, MODEL_UNIT_SCALE};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Artifact paths and unit conversion for one export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Primary artifact path (GLB).
    pub glb_path: PathBuf,
    /// Fallback artifact path (ASCII PLY).
    pub ply_path: PathBuf,
    /// Sentinel written when the primary export fails.
    pub sentinel_path: PathBuf,
    /// Millimeters-to-model-units factor applied during encoding.
    pub unit_scale: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            glb_path: PathBuf::from(MODEL_GLB_PATH),
            ply_path: PathBuf::from(MODEL_PLY_PATH),
            sentinel_path: PathBuf::from(GLB_ERROR_PATH),
            unit_scale: MODEL_UNIT_SCALE,
        }
    }
}

impl ExportConfig {
    /// Default artifact layout rooted under `base` instead of the
    /// working directory.
    pub fn rooted(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            glb_path: base.join(MODEL_GLB_PATH),
            ply_path: base.join(MODEL_PLY_PATH),
            sentinel_path: base.join(GLB_ERROR_PATH),
            unit_scale: MODEL_UNIT_SCALE,
        }
    }
}

/// Format of the artifact that ended up on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Glb,
    Ply,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Glb => write!(f, "glb"),
            Self::Ply => write!(f, "ply"),
        }
    }
}

/// What one export run produced.
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    /// Path of the artifact that was written.
    pub path: PathBuf,
    /// Format of that artifact.
    pub format: ExportFormat,
    /// Why the primary export was skipped, when the run fell back.
    pub fallback_reason: Option<String>,
}

impl ExportOutcome {
    /// True when the run degraded to the PLY fallback.
    pub fn fell_back(&self) -> bool {
        self.fallback_reason.is_some()
    }
}

// =============================================================================
// EXPORT ENTRY POINT
// =============================================================================

/// Writes the scene to disk, GLB first, PLY on failure.
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use trolley_export::{export_scene, ExportConfig, ExportFormat};
/// use trolley_scene::{PartBody, PositionedPrimitive, Primitive, SceneBuilder};
///
/// let mut builder = SceneBuilder::new();
/// builder.set_housing(PartBody::Primitive(PositionedPrimitive::new(
///     Primitive::Box { extents: DVec3::new(300.0, 30.0, 100.0) },
///     DVec3::ZERO,
/// )));
/// let scene = builder.finish()?;
///
/// let config = ExportConfig::rooted(std::env::temp_dir().join("trolley-doc-example"));
/// let outcome = export_scene(&scene, &config)?;
/// assert_eq!(outcome.format, ExportFormat::Glb);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export_scene(scene: &Scene, config: &ExportConfig) -> Result<ExportOutcome, ExportError> {
    match write_glb(scene, config) {
        Ok(outcome) => {
            clear_stale_sentinel(&config.sentinel_path);
            Ok(outcome)
        }
        Err(primary) => {
            warn!(error = %primary, "GLB export failed, falling back to PLY");
            let reason = primary.to_string();

            if let Err(source) = write_ply(scene, config) {
                return Err(ExportError::FallbackFailed {
                    primary: reason,
                    source: Box::new(source),
                });
            }

            write_sentinel(&config.sentinel_path, &reason, &config.ply_path);
            info!(path = %config.ply_path.display(), "PLY fallback written");
            Ok(ExportOutcome {
                path: config.ply_path.clone(),
                format: ExportFormat::Ply,
                fallback_reason: Some(reason),
            })
        }
    }
}

fn write_glb(scene: &Scene, config: &ExportConfig) -> Result<ExportOutcome, ExportError> {
    let bytes = glb::encode_glb(scene, config.unit_scale)?;
    write_atomic(&config.glb_path, &bytes)?;
    info!(
        path = %config.glb_path.display(),
        bytes = bytes.len(),
        "GLB export written"
    );
    Ok(ExportOutcome {
        path: config.glb_path.clone(),
        format: ExportFormat::Glb,
        fallback_reason: None,
    })
}

fn write_ply(scene: &Scene, config: &ExportConfig) -> Result<(), ExportError> {
    let bytes = ply::encode_ply(scene, config.unit_scale)?;
    write_atomic(&config.ply_path, &bytes)
}

/// Records why the primary export failed. Best effort: a sentinel that
/// cannot be written must not mask the successful fallback.
fn write_sentinel(path: &Path, reason: &str, fallback: &Path) {
    let body = format!(
        "GLB export failed: {reason}\nFallback written to: {}\n",
        fallback.display()
    );
    if let Err(error) = write_atomic(path, body.as_bytes()) {
        warn!(error = %error, "could not write export sentinel");
    }
}

/// Removes a sentinel left by an earlier failed run, so its presence
/// always reflects the latest run.
fn clear_stale_sentinel(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "cleared stale export sentinel"),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
        Err(error) => warn!(error = %error, "could not clear stale export sentinel"),
    }
}

// =============================================================================
// ATOMIC WRITES
// =============================================================================

/// Writes bytes to a staging sibling and renames it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| ExportError::io(parent, error))?;
        }
    }
    let staging = staging_path(path);
    fs::write(&staging, bytes).map_err(|error| ExportError::io(&staging, error))?;
    fs::rename(&staging, path).map_err(|error| ExportError::io(path, error))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| std::ffi::OsString::from("artifact"));
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// TESTS
// =============================================================================
