//! # Positioned Primitives
//!
//! The shape vocabulary of the assembly: boxes and cylinders, each with a
//! rigid placement. Cylinders are always generated on the canonical Z axis
//! and reoriented with an exact quarter-turn, so every part axis in the
//! model is bit-exact.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::mesh::Mesh;
use crate::tessellate::{box_mesh, cylinder_mesh};

/// Cylinder orientation axis in the model frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Along the tube length.
    X,
    /// Across the tube width.
    Y,
    /// Vertical, the canonical generation axis.
    Z,
}

impl Axis {
    /// Maps a point from the canonical +Z frame onto this axis.
    ///
    /// Quarter-turns follow the right-hand rule and are implemented as
    /// coordinate permutations, not matrix products, so the rotated
    /// coordinates carry no rounding:
    ///
    /// - `Z` is the identity
    /// - `X` is +90° about Y: `(x, y, z) → (z, y, -x)`
    /// - `Y` is -90° about X: `(x, y, z) → (x, z, -y)`
    #[inline]
    pub fn orient_from_z(self, point: DVec3) -> DVec3 {
        match self {
            Axis::Z => point,
            Axis::X => DVec3::new(point.z, point.y, -point.x),
            Axis::Y => DVec3::new(point.x, point.z, -point.y),
        }
    }
}

/// A primitive shape in its canonical frame, before placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned box with full XYZ extents, centered on the origin.
    Box {
        /// Full extents along X, Y, Z.
        extents: DVec3,
    },
    /// Cylinder centered on the origin, reoriented onto `axis`.
    Cylinder {
        /// Cylinder radius.
        radius: f64,
        /// Extent along the cylinder axis.
        height: f64,
        /// Final orientation of the axis.
        axis: Axis,
        /// Tessellation segment count.
        segments: u32,
    },
}

impl Primitive {
    /// Tessellates the primitive in place: canonical frame, then the exact
    /// axis reorientation for cylinders.
    pub fn mesh(&self) -> Result<Mesh, GeometryError> {
        match self {
            Primitive::Box { extents } => box_mesh(*extents),
            Primitive::Cylinder {
                radius,
                height,
                axis,
                segments,
            } => {
                let mut mesh = cylinder_mesh(*radius, *height, *segments)?;
                if *axis != Axis::Z {
                    mesh.map_vertices(|v| axis.orient_from_z(v));
                }
                Ok(mesh)
            }
        }
    }
}

/// A primitive with its placement in the model frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedPrimitive {
    /// The shape and its parameters.
    pub primitive: Primitive,
    /// Center position in the model frame, millimeters.
    pub translation: DVec3,
}

impl PositionedPrimitive {
    /// Places a primitive at the given center.
    pub fn new(primitive: Primitive, translation: DVec3) -> Self {
        Self {
            primitive,
            translation,
        }
    }

    /// Tessellates and translates into the model frame.
    pub fn to_mesh(&self) -> Result<Mesh, GeometryError> {
        let mut mesh = self.primitive.mesh()?;
        mesh.translate(self.translation);
        Ok(mesh)
    }
}

/// Geometry payload of one scene node.
#[derive(Debug, Clone)]
pub enum PartBody {
    /// A single positioned primitive.
    Primitive(PositionedPrimitive),
    /// Several positioned primitives acting as one part (the wall-slab
    /// housing).
    Compound(Vec<PositionedPrimitive>),
    /// Pre-tessellated geometry (the shell-strategy housings).
    Mesh(Mesh),
}

impl PartBody {
    /// Tessellates the whole body into one mesh.
    pub fn to_mesh(&self) -> Result<Mesh, GeometryError> {
        match self {
            PartBody::Primitive(placed) => placed.to_mesh(),
            PartBody::Compound(parts) => {
                if parts.is_empty() {
                    return Err(GeometryError::degenerate("compound part has no primitives"));
                }
                let mut merged = Mesh::new();
                for placed in parts {
                    merged.merge(&placed.to_mesh()?);
                }
                Ok(merged)
            }
            PartBody::Mesh(mesh) => Ok(mesh.clone()),
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
    fn test_axis_orientation_is_exact() {
        assert_eq!(Axis::Z.orient_from_z(DVec3::Z), DVec3::Z);
        assert_eq!(Axis::X.orient_from_z(DVec3::Z), DVec3::X);
        assert_eq!(Axis::Y.orient_from_z(DVec3::Z), DVec3::Y);
    }

    #[test]
    fn test_axis_orientation_is_a_rotation() {
        // A proper rotation preserves handedness: the images of X, Y, Z
        // must still form a right-handed frame.
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let x = axis.orient_from_z(DVec3::X);
            let y = axis.orient_from_z(DVec3::Y);
            let z = axis.orient_from_z(DVec3::Z);
            assert_eq!(x.cross(y), z);
        }
    }

    #[test]
    fn test_cylinder_reoriented_to_x_spans_length() {
        let primitive = Primitive::Cylinder {
            radius: 10.0,
            height: 260.0,
            axis: Axis::X,
            segments: 16,
        };
        let mesh = primitive.mesh().unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.x, -130.0);
        assert_eq!(max.x, 130.0);
        assert_eq!(max.y, 10.0);
    }

    #[test]
    fn test_cylinder_reoriented_to_y_spans_width() {
        let primitive = Primitive::Cylinder {
            radius: 19.75,
            height: 20.0,
            axis: Axis::Y,
            segments: 16,
        };
        let mesh = primitive.mesh().unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.y, -10.0);
        assert_eq!(max.y, 10.0);
    }

    #[test]
    fn test_positioned_primitive_translates() {
        let placed = PositionedPrimitive::new(
            Primitive::Box {
                extents: DVec3::splat(2.0),
            },
            DVec3::new(-120.0, 0.0, 20.0),
        );
        let mesh = placed.to_mesh().unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-121.0, -1.0, 19.0));
        assert_eq!(max, DVec3::new(-119.0, 1.0, 21.0));
    }

    #[test]
    fn test_compound_body_merges_all_parts() {
        let slab = |z: f64| {
            PositionedPrimitive::new(
                Primitive::Box {
                    extents: DVec3::new(10.0, 10.0, 1.0),
                },
                DVec3::new(0.0, 0.0, z),
            )
        };
        let body = PartBody::Compound(vec![slab(-5.0), slab(5.0)]);
        let mesh = body.to_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.triangle_count(), 24);
        assert!(mesh.validate());
    }

    #[test]
    fn test_empty_compound_is_degenerate() {
        let body = PartBody::Compound(Vec::new());
        assert!(body.to_mesh().is_err());
    }
}
