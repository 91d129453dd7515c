//! # Canonical Assembly Spec
//!
//! The one structure every historical document shape resolves into.
//! All dimensions are millimeters.

use serde::{Deserialize, Serialize};

/// Fully resolved assembly description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblySpec {
    /// The hollow tube housing.
    pub tube: TubeSpec,
    /// Roller geometry shared by all placements. Present exactly when the
    /// spec places at least one hole; roller keys in a zero-hole document
    /// carry no meaning and are ignored.
    pub rollers: Option<RollerSpec>,
    /// Roller bore placements, possibly empty.
    pub holes: Vec<HolePlacement>,
    /// Optional connecting rod.
    pub rod: Option<RodSpec>,
}

impl AssemblySpec {
    /// Smallest distance-from-top among the holes: the upper roller row.
    /// `None` when the spec has no holes.
    pub fn upper_hole_y(&self) -> Option<f64> {
        self.holes
            .iter()
            .map(|hole| hole.y_from_top_mm)
            .fold(None, |best, y| match best {
                Some(current) if current <= y => Some(current),
                _ => Some(y),
            })
    }
}

/// Outer tube housing dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeSpec {
    /// Extent along X.
    pub length: f64,
    /// Extent along Y.
    pub width: f64,
    /// Extent along Z.
    pub height: f64,
    /// Wall thickness of the hollow shell.
    pub wall: f64,
}

impl TubeSpec {
    /// Smallest outer extent; the wall pair must fit inside it.
    pub fn min_extent(&self) -> f64 {
        self.length.min(self.width).min(self.height)
    }
}

/// Roller geometry shared by every placed roller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollerSpec {
    /// Outer diameter of the roller body.
    pub outer_diameter: f64,
    /// Axial width of the roller body.
    pub width: f64,
    /// Diameter of the bore drilled for the roller axle.
    pub hole_diameter: f64,
}

/// One roller bore position, measured on the tube face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolePlacement {
    /// Label carried from the legacy named-corner layout, used in node names.
    pub label: Option<String>,
    /// Distance from the left edge of the tube face.
    pub x_from_left_mm: f64,
    /// Distance from the top edge of the tube face.
    pub y_from_top_mm: f64,
}

/// Connecting rod dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RodSpec {
    /// Rod diameter.
    pub diameter: f64,
    /// Rod length along the tube axis.
    pub length: f64,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hole(x: f64, y: f64) -> HolePlacement {
        HolePlacement {
            label: None,
            x_from_left_mm: x,
            y_from_top_mm: y,
        }
    }

    #[test]
    fn test_upper_hole_is_minimum_y() {
        let spec = AssemblySpec {
            tube: TubeSpec {
                length: 300.0,
                width: 30.0,
                height: 100.0,
                wall: 3.0,
            },
            rollers: None,
            holes: vec![hole(30.0, 70.0), hole(270.0, 30.0), hole(30.0, 30.0)],
            rod: None,
        };
        assert_eq!(spec.upper_hole_y(), Some(30.0));
    }

    #[test]
    fn test_upper_hole_none_without_holes() {
        let spec = AssemblySpec {
            tube: TubeSpec {
                length: 300.0,
                width: 30.0,
                height: 100.0,
                wall: 3.0,
            },
            rollers: None,
            holes: Vec::new(),
            rod: None,
        };
        assert_eq!(spec.upper_hole_y(), None);
    }

    #[test]
    fn test_min_extent() {
        let tube = TubeSpec {
            length: 300.0,
            width: 30.0,
            height: 100.0,
            wall: 3.0,
        };
        assert_eq!(tube.min_extent(), 30.0);
    }
}
