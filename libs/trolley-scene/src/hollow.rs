//! # Hollow-Body Strategies
//!
//! Three interchangeable ways to make the housing read as hollow in a
//! viewer, behind one trait. A run picks exactly one strategy through
//! [`HollowMode`]; fidelity levels are never mixed within a configuration.
//!
//! - `subtract`: exact shell subtraction for the concentric box pair,
//!   watertight
//! - `inverted_shell`: outer box plus flipped-winding inner box, a visual
//!   hack that is not watertight
//! - `wall_slabs`: four discrete wall boxes with the tube ends left open

use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use trolley_spec::TubeSpec;

use crate::error::GeometryError;
use crate::mesh::Mesh;
use crate::primitive::{PartBody, PositionedPrimitive, Primitive};
use crate::tessellate::box_mesh;

/// Selects which hollow-housing construction a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HollowMode {
    /// Watertight shell via exact subtraction.
    Subtract,
    /// Outer plus inner box with flipped winding.
    InvertedShell,
    /// Four discrete wall slabs, ends open.
    WallSlabs,
}

impl HollowMode {
    /// The strategy implementing this mode.
    pub fn strategy(self) -> &'static dyn HollowStrategy {
        match self {
            HollowMode::Subtract => &SubtractShell,
            HollowMode::InvertedShell => &InvertedShell,
            HollowMode::WallSlabs => &WallSlabs,
        }
    }
}

impl Default for HollowMode {
    fn default() -> Self {
        HollowMode::Subtract
    }
}

impl fmt::Display for HollowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HollowMode::Subtract => "subtract",
            HollowMode::InvertedShell => "inverted_shell",
            HollowMode::WallSlabs => "wall_slabs",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HollowMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "subtract" => Ok(HollowMode::Subtract),
            "inverted_shell" => Ok(HollowMode::InvertedShell),
            "wall_slabs" => Ok(HollowMode::WallSlabs),
            other => Err(format!(
                "unknown hollow mode {other:?} (expected subtract, inverted_shell or wall_slabs)"
            )),
        }
    }
}

/// One technique for producing a visually hollow housing body.
pub trait HollowStrategy {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Builds the housing body for the given tube.
    fn housing(&self, tube: &TubeSpec) -> Result<PartBody, GeometryError>;
}

/// Inner cavity extents: full length, wall pair removed from width and
/// height. Shared by every strategy so they all hollow the same volume.
fn cavity_extents(tube: &TubeSpec) -> Result<DVec3, GeometryError> {
    let extents = DVec3::new(
        tube.length,
        tube.width - 2.0 * tube.wall,
        tube.height - 2.0 * tube.wall,
    );
    if extents.y <= 0.0 || extents.z <= 0.0 {
        return Err(GeometryError::CavityCollapsed {
            wall: tube.wall,
            min_extent: tube.min_extent(),
        });
    }
    Ok(extents)
}

// =============================================================================
// SUBTRACT
// =============================================================================

/// Exact shell subtraction, specialized to the concentric axis-aligned box
/// pair the housing produces. The result is a watertight rectangular tube:
/// four outer walls, four inner walls facing the cavity, and two end rings.
pub struct SubtractShell;

impl HollowStrategy for SubtractShell {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn housing(&self, tube: &TubeSpec) -> Result<PartBody, GeometryError> {
        let cavity = cavity_extents(tube)?;
        let mesh = rectangular_tube_mesh(
            DVec3::new(tube.length, tube.width, tube.height),
            cavity,
        );
        if !mesh.validate() {
            return Err(GeometryError::degenerate(format!(
                "shell mesh failed validation for tube {tube:?}"
            )));
        }
        Ok(PartBody::Mesh(mesh))
    }
}

/// Watertight shell between two concentric boxes sharing their X extent.
///
/// 16 vertices (8 outer corners, 8 inner corners) and 32 triangles: outer
/// walls wind outward, inner walls wind into the cavity, and the two end
/// rings close the X faces with four trapezoids each.
fn rectangular_tube_mesh(outer: DVec3, inner: DVec3) -> Mesh {
    let (hl, hw, hh) = (outer.x / 2.0, outer.y / 2.0, outer.z / 2.0);
    let (iw, ih) = (inner.y / 2.0, inner.z / 2.0);

    let mut mesh = Mesh::with_capacity(16, 32);

    // Outer corners, left end (x = -hl) then right end (x = +hl)
    let o = [
        mesh.add_vertex(DVec3::new(-hl, -hw, -hh)), // 0
        mesh.add_vertex(DVec3::new(-hl, hw, -hh)),  // 1
        mesh.add_vertex(DVec3::new(-hl, hw, hh)),   // 2
        mesh.add_vertex(DVec3::new(-hl, -hw, hh)),  // 3
        mesh.add_vertex(DVec3::new(hl, -hw, -hh)),  // 4
        mesh.add_vertex(DVec3::new(hl, hw, -hh)),   // 5
        mesh.add_vertex(DVec3::new(hl, hw, hh)),    // 6
        mesh.add_vertex(DVec3::new(hl, -hw, hh)),   // 7
    ];
    // Inner corners, same ordering
    let i = [
        mesh.add_vertex(DVec3::new(-hl, -iw, -ih)), // 8
        mesh.add_vertex(DVec3::new(-hl, iw, -ih)),  // 9
        mesh.add_vertex(DVec3::new(-hl, iw, ih)),   // 10
        mesh.add_vertex(DVec3::new(-hl, -iw, ih)),  // 11
        mesh.add_vertex(DVec3::new(hl, -iw, -ih)),  // 12
        mesh.add_vertex(DVec3::new(hl, iw, -ih)),   // 13
        mesh.add_vertex(DVec3::new(hl, iw, ih)),    // 14
        mesh.add_vertex(DVec3::new(hl, -iw, ih)),   // 15
    ];

    let mut quad = |a: u32, b: u32, c: u32, d: u32| {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    };

    // Outer walls, normals outward
    quad(o[0], o[1], o[5], o[4]); // bottom (-Z)
    quad(o[3], o[7], o[6], o[2]); // top (+Z)
    quad(o[0], o[4], o[7], o[3]); // front (-Y)
    quad(o[1], o[2], o[6], o[5]); // back (+Y)

    // Inner walls, normals into the cavity
    quad(i[0], i[4], i[5], i[1]); // cavity floor faces +Z
    quad(i[3], i[2], i[6], i[7]); // cavity ceiling faces -Z
    quad(i[0], i[3], i[7], i[4]); // cavity front faces +Y
    quad(i[1], i[5], i[6], i[2]); // cavity back faces -Y

    // Right end ring (x = +hl), normal +X
    quad(o[4], o[5], i[5], i[4]);
    quad(o[6], o[7], i[7], i[6]);
    quad(o[7], o[4], i[4], i[7]);
    quad(o[5], o[6], i[6], i[5]);

    // Left end ring (x = -hl), normal -X
    quad(i[0], i[1], o[1], o[0]);
    quad(i[2], i[3], o[3], o[2]);
    quad(i[3], i[0], o[0], o[3]);
    quad(i[1], i[2], o[2], o[1]);

    mesh
}

// =============================================================================
// INVERTED SHELL
// =============================================================================

/// Pseudo-hollow visual hack: the outer box plus the cavity box with its
/// winding reversed, concatenated into one mesh. Cheap and
/// viewer-friendly, but not watertight; downstream tools that need a
/// manifold should use [`SubtractShell`].
pub struct InvertedShell;

impl HollowStrategy for InvertedShell {
    fn name(&self) -> &'static str {
        "inverted_shell"
    }

    fn housing(&self, tube: &TubeSpec) -> Result<PartBody, GeometryError> {
        let cavity = cavity_extents(tube)?;
        let mut shell = box_mesh(DVec3::new(tube.length, tube.width, tube.height))?;
        let mut inner = box_mesh(cavity)?;
        inner.flip_winding();
        shell.merge(&inner);
        Ok(PartBody::Mesh(shell))
    }
}

// =============================================================================
// WALL SLABS
// =============================================================================

/// Four discrete wall boxes: top, bottom and the two sides, each one wall
/// thick. The only variant that leaves the tube ends open, so rollers
/// stay visible through the ends.
pub struct WallSlabs;

impl HollowStrategy for WallSlabs {
    fn name(&self) -> &'static str {
        "wall_slabs"
    }

    fn housing(&self, tube: &TubeSpec) -> Result<PartBody, GeometryError> {
        cavity_extents(tube)?;

        let horizontal = Primitive::Box {
            extents: DVec3::new(tube.length, tube.width, tube.wall),
        };
        // Side slabs span between the horizontal slabs, not over them.
        let vertical = Primitive::Box {
            extents: DVec3::new(tube.length, tube.wall, tube.height - 2.0 * tube.wall),
        };

        let z_offset = (tube.height - tube.wall) / 2.0;
        let y_offset = (tube.width - tube.wall) / 2.0;

        Ok(PartBody::Compound(vec![
            PositionedPrimitive::new(horizontal.clone(), DVec3::new(0.0, 0.0, z_offset)),
            PositionedPrimitive::new(horizontal, DVec3::new(0.0, 0.0, -z_offset)),
            PositionedPrimitive::new(vertical.clone(), DVec3::new(0.0, y_offset, 0.0)),
            PositionedPrimitive::new(vertical, DVec3::new(0.0, -y_offset, 0.0)),
        ]))
    }
}

// =============================================================================
// TESTS
// =============================================================================
