//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[test]
fn test_unit_scale_is_mm_to_m() {
    assert_eq!(MODEL_UNIT_SCALE, 1.0e-3);
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_segment_counts_within_bounds() {
    for value in [HOLE_MARKER_SEGMENTS, ROLLER_SEGMENTS, ROD_SEGMENTS] {
        assert!(value >= MIN_SEGMENTS, "count {value} below minimum");
        assert!(value <= MAX_SEGMENTS, "count {value} above maximum");
    }
}

#[test]
fn test_rod_is_smoothest_part() {
    // The rod shows the longest curved silhouette, so it gets the most
    // segments, followed by rollers, then the small hole markers.
    assert!(ROD_SEGMENTS > ROLLER_SEGMENTS);
    assert!(ROLLER_SEGMENTS > HOLE_MARKER_SEGMENTS);
}

#[test]
fn test_profile_default_matches_constants() {
    let profile = TessellationProfile::default();
    assert_eq!(profile.hole_markers, HOLE_MARKER_SEGMENTS);
    assert_eq!(profile.rollers, ROLLER_SEGMENTS);
    assert_eq!(profile.rod, ROD_SEGMENTS);
}

#[test]
fn test_profile_rejects_degenerate_counts() {
    let result = TessellationProfile::new(2, ROLLER_SEGMENTS, ROD_SEGMENTS);
    assert_eq!(
        result,
        Err(ConfigError::InvalidSegments {
            name: "hole_markers",
            value: 2
        })
    );
}

#[test]
fn test_profile_rejects_excessive_counts() {
    let result = TessellationProfile::new(48, MAX_SEGMENTS + 1, 96);
    assert!(result.is_err());
}

// =============================================================================
// PHYSICAL DEFAULT TESTS
// =============================================================================

#[test]
fn test_standard_gravity_value() {
    assert_eq!(STANDARD_GRAVITY, 9.80665);
}

#[test]
fn test_roller_defaults_are_positive() {
    assert!(DEFAULT_ROLLER_OUTER_DIAMETER > 0.0);
    assert!(DEFAULT_ROLLER_WIDTH > 0.0);
}

// =============================================================================
// PATH TESTS
// =============================================================================

#[test]
fn test_artifact_paths_are_distinct() {
    let paths = [MODEL_GLB_PATH, MODEL_PLY_PATH, GLB_ERROR_PATH, REPORT_PATH];
    for (i, a) in paths.iter().enumerate() {
        for b in paths.iter().skip(i + 1) {
            assert_ne!(a, b, "artifact paths must not collide");
        }
    }
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + 1e-6));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(0.001));
}
