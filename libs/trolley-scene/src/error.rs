//! # Geometry Errors
//!
//! Error types for constraint validation and mesh generation.

use thiserror::Error;

/// Errors that can occur while building assembly geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// The wall pair leaves no room for a cavity.
    #[error(
        "Cavity collapsed: wall {wall}mm doubled meets or exceeds the smallest tube extent {min_extent}mm"
    )]
    CavityCollapsed { wall: f64, min_extent: f64 },

    /// A hole placement falls off the tube face.
    #[error(
        "Hole {name} outside tube face: x={x}mm must be within 0..={length}mm, y={y}mm within 0..={height}mm"
    )]
    HoleOutsideTube {
        name: String,
        x: f64,
        y: f64,
        length: f64,
        height: f64,
    },

    /// Degenerate primitive parameters.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// The scene was finished without a housing body.
    #[error("Empty assembly: no housing body was provided")]
    EmptyAssembly,

    /// Two scene nodes would share one name.
    #[error("Duplicate node name: {name}")]
    DuplicateNodeName { name: String },
}

impl GeometryError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cavity_error_names_both_quantities() {
        let err = GeometryError::CavityCollapsed {
            wall: 16.0,
            min_extent: 30.0,
        };
        let text = err.to_string();
        assert!(text.contains("16"));
        assert!(text.contains("30"));
    }

    #[test]
    fn test_hole_error_names_the_hole() {
        let err = GeometryError::HoleOutsideTube {
            name: "hole_ne".to_string(),
            x: 310.0,
            y: 30.0,
            length: 300.0,
            height: 100.0,
        };
        assert!(err.to_string().contains("hole_ne"));
    }
}
