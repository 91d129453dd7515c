//! # Pipeline Configuration Constants
//!
//! Single source of truth for every tunable value in the trolley preview
//! pipeline: numeric tolerances, tessellation quality, physical defaults,
//! and the canonical artifact paths.

use std::fmt;

// =============================================================================
// PRECISION
// =============================================================================

/// Tolerance used for floating-point comparisons across the pipeline.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// assert!((0.1_f64 + 0.2 - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1.0e-9;

// =============================================================================
// UNITS
// =============================================================================

/// Scale factor from pipeline units (millimeters) to exported model units
/// (meters). Applied exactly once, inside the export encoders.
///
/// # Example
///
/// ```rust
/// use config::constants::MODEL_UNIT_SCALE;
///
/// assert_eq!(300.0 * MODEL_UNIT_SCALE, 0.3);
/// ```
pub const MODEL_UNIT_SCALE: f64 = 1.0e-3;

// =============================================================================
// TESSELLATION
// =============================================================================

/// Minimum segment count that still forms a closed polygon.
pub const MIN_SEGMENTS: u32 = 3;

/// Upper bound on segment counts; beyond this the preview gains nothing.
pub const MAX_SEGMENTS: u32 = 512;

/// Segment count for the thin hole-marker cylinders.
///
/// # Example
///
/// ```rust
/// use config::constants::{HOLE_MARKER_SEGMENTS, MIN_SEGMENTS};
///
/// assert!(HOLE_MARKER_SEGMENTS >= MIN_SEGMENTS);
/// ```
pub const HOLE_MARKER_SEGMENTS: u32 = 48;

/// Segment count for roller cylinders, the visually dominant round parts.
pub const ROLLER_SEGMENTS: u32 = 64;

/// Segment count for the connecting rod, the longest curved surface.
pub const ROD_SEGMENTS: u32 = 96;

// =============================================================================
// PHYSICAL DEFAULTS
// =============================================================================

/// Standard gravitational acceleration in m/s² used when the loads section
/// does not override it.
///
/// # Example
///
/// ```rust
/// use config::constants::STANDARD_GRAVITY;
///
/// assert_eq!(STANDARD_GRAVITY, 9.80665);
/// ```
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Default roller outer diameter in millimeters. One of the two spec fields
/// allowed to default; everything structural must be spelled out.
pub const DEFAULT_ROLLER_OUTER_DIAMETER: f64 = 39.5;

/// Default roller width in millimeters.
pub const DEFAULT_ROLLER_WIDTH: f64 = 20.0;

// =============================================================================
// ARTIFACT PATHS
// =============================================================================

/// Default location of the input spec document.
pub const DEFAULT_SPEC_PATH: &str = "spec/trolley.yaml";

/// Primary export artifact: binary glTF scene with named nodes.
pub const MODEL_GLB_PATH: &str = "models/latest.glb";

/// Fallback export artifact: ASCII PLY of the merged scene mesh.
pub const MODEL_PLY_PATH: &str = "models/latest.ply";

/// Sentinel file recording why the primary export was skipped.
pub const GLB_ERROR_PATH: &str = "models/GLB_ERROR.txt";

/// Static-load report destination.
pub const REPORT_PATH: &str = "reports/latest.md";

// =============================================================================
// TESSELLATION PROFILE
// =============================================================================

/// Validated bundle of per-part-family segment counts.
///
/// Builders receive this profile explicitly instead of reaching for the
/// constants themselves, so a run's quality settings live in one value.
///
/// # Example
///
/// ```rust
/// use config::constants::TessellationProfile;
///
/// let profile = TessellationProfile::default();
/// assert_eq!(profile.rollers, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TessellationProfile {
    /// Segments for hole-marker cylinders.
    pub hole_markers: u32,
    /// Segments for roller cylinders.
    pub rollers: u32,
    /// Segments for the connecting rod.
    pub rod: u32,
}

impl TessellationProfile {
    /// Builds a profile enforcing the segment-count bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use config::constants::TessellationProfile;
    ///
    /// let profile = TessellationProfile::new(24, 32, 48).expect("valid profile");
    /// assert_eq!(profile.hole_markers, 24);
    /// assert!(TessellationProfile::new(2, 32, 48).is_err());
    /// ```
    pub fn new(hole_markers: u32, rollers: u32, rod: u32) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("hole_markers", hole_markers),
            ("rollers", rollers),
            ("rod", rod),
        ] {
            if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&value) {
                return Err(ConfigError::InvalidSegments { name, value });
            }
        }
        Ok(Self {
            hole_markers,
            rollers,
            rod,
        })
    }
}

impl Default for TessellationProfile {
    fn default() -> Self {
        Self {
            hole_markers: HOLE_MARKER_SEGMENTS,
            rollers: ROLLER_SEGMENTS,
            rod: ROD_SEGMENTS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when a segment count falls outside `MIN_SEGMENTS..=MAX_SEGMENTS`.
    InvalidSegments {
        /// Which profile field was rejected.
        name: &'static str,
        /// The rejected count.
        value: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments { name, value } => {
                write!(
                    f,
                    "segment count for {name} must be in {MIN_SEGMENTS}..={MAX_SEGMENTS}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPERS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
