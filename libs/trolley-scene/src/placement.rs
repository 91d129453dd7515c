//! # Placement Engine
//!
//! Converts spec-relative coordinates (distance from the left edge and
//! from the top edge of the tube face) into the centered model frame, and
//! derives the rod's hanging position from roller geometry. Both formulas
//! live here and nowhere else; every consumer of a hole or rod position
//! goes through these functions.

use glam::DVec3;
use trolley_spec::{AssemblySpec, HolePlacement, TubeSpec};

use crate::error::GeometryError;
use crate::scene::hole_node_name;

/// Model-frame center of a hole placement.
///
/// Spec coordinates use a top-left origin on the tube face; the model
/// frame is centered on the tube with +Z toward the top edge:
///
/// ```text
/// x = x_from_left - length / 2
/// y = 0
/// z = height / 2 - y_from_top
/// ```
///
/// The same point positions both the hole marker and the roller it
/// carries.
pub fn hole_center(hole: &HolePlacement, tube: &TubeSpec) -> DVec3 {
    DVec3::new(
        hole.x_from_left_mm - tube.length / 2.0,
        0.0,
        tube.height / 2.0 - hole.y_from_top_mm,
    )
}

/// Vertical center of the connecting rod.
///
/// The rod hangs directly beneath the upper roller row, tangent to the
/// roller circumference: upper hole center minus one roller radius and
/// one rod radius.
pub fn rod_center_z(
    tube_height: f64,
    upper_hole_y: f64,
    roller_outer_diameter: f64,
    rod_diameter: f64,
) -> f64 {
    (tube_height / 2.0 - upper_hole_y) - (roller_outer_diameter / 2.0 + rod_diameter / 2.0)
}

/// Validates the spec-level geometry invariants before any body is built.
///
/// Checks that the wall pair leaves a cavity and that every hole lies on
/// the tube face. Failures name the offending hole node and quantities.
pub fn validate_spec(spec: &AssemblySpec) -> Result<(), GeometryError> {
    let tube = &spec.tube;

    if tube.wall * 2.0 >= tube.min_extent() {
        return Err(GeometryError::CavityCollapsed {
            wall: tube.wall,
            min_extent: tube.min_extent(),
        });
    }

    for (index, hole) in spec.holes.iter().enumerate() {
        let x = hole.x_from_left_mm;
        let y = hole.y_from_top_mm;
        if !(0.0..=tube.length).contains(&x) || !(0.0..=tube.height).contains(&y) {
            return Err(GeometryError::HoleOutsideTube {
                name: hole_node_name(index, hole.label.as_deref()),
                x,
                y,
                length: tube.length,
                height: tube.height,
            });
        }
    }

    // Holes cannot be built without roller geometry; the resolver always
    // pairs them, so a mismatch means a hand-built spec.
    if !spec.holes.is_empty() && spec.rollers.is_none() {
        return Err(GeometryError::degenerate(format!(
            "{} hole(s) placed but no roller geometry present",
            spec.holes.len()
        )));
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use trolley_spec::RollerSpec;

    fn tube() -> TubeSpec {
        TubeSpec {
            length: 300.0,
            width: 30.0,
            height: 100.0,
            wall: 3.0,
        }
    }

    fn hole(x: f64, y: f64) -> HolePlacement {
        HolePlacement {
            label: None,
            x_from_left_mm: x,
            y_from_top_mm: y,
        }
    }

    fn spec_with_holes(holes: Vec<HolePlacement>) -> AssemblySpec {
        AssemblySpec {
            tube: tube(),
            rollers: Some(RollerSpec {
                outer_diameter: 39.5,
                width: 20.0,
                hole_diameter: 8.0,
            }),
            holes,
            rod: None,
        }
    }

    #[test]
    fn test_hole_center_reference_values() {
        // 30mm from the left, 30mm from the top on a 300x30x100 tube.
        let center = hole_center(&hole(30.0, 30.0), &tube());
        assert_eq!(center, DVec3::new(-120.0, 0.0, 20.0));
    }

    #[test]
    fn test_hole_center_face_corners() {
        let t = tube();
        assert_eq!(hole_center(&hole(0.0, 0.0), &t), DVec3::new(-150.0, 0.0, 50.0));
        assert_eq!(
            hole_center(&hole(300.0, 100.0), &t),
            DVec3::new(150.0, 0.0, -50.0)
        );
    }

    #[test]
    fn test_hole_center_is_injective() {
        let t = tube();
        let a = hole_center(&hole(30.0, 30.0), &t);
        let b = hole_center(&hole(30.0, 70.0), &t);
        let c = hole_center(&hole(270.0, 30.0), &t);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_rod_center_z_reference_value() {
        // height 100, upper hole 30, roller 39.5, rod 20:
        // (50 - 30) - (19.75 + 10) = -9.75
        let z = rod_center_z(100.0, 30.0, 39.5, 20.0);
        assert_eq!(z, -9.75);
    }

    #[test]
    fn test_validate_accepts_reference_spec() {
        let spec = spec_with_holes(vec![hole(30.0, 30.0), hole(270.0, 70.0)]);
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_validate_accepts_holes_on_the_edge() {
        let spec = spec_with_holes(vec![hole(0.0, 0.0), hole(300.0, 100.0)]);
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_validate_rejects_collapsed_cavity() {
        let mut spec = spec_with_holes(Vec::new());
        spec.tube.wall = 15.0; // doubled equals the 30mm width
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, GeometryError::CavityCollapsed { .. }));
    }

    #[test]
    fn test_validate_rejects_hole_off_the_face() {
        let spec = spec_with_holes(vec![hole(30.0, 30.0), hole(310.0, 30.0)]);
        let err = validate_spec(&spec).unwrap_err();
        match err {
            GeometryError::HoleOutsideTube { name, x, .. } => {
                assert_eq!(name, "hole_1");
                assert_eq!(x, 310.0);
            }
            other => panic!("Expected HoleOutsideTube, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_holes_without_rollers() {
        let mut spec = spec_with_holes(vec![hole(30.0, 30.0)]);
        spec.rollers = None;
        let err = validate_spec(&spec).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_validate_names_labeled_holes() {
        let spec = spec_with_holes(vec![HolePlacement {
            label: Some("ne".to_string()),
            x_from_left_mm: -1.0,
            y_from_top_mm: 30.0,
        }]);
        let err = validate_spec(&spec).unwrap_err();
        match err {
            GeometryError::HoleOutsideTube { name, .. } => assert_eq!(name, "hole_ne"),
            other => panic!("Expected HoleOutsideTube, got {other:?}"),
        }
    }
}
