//! # Spec to Scene
//!
//! The one function that turns a resolved [`AssemblySpec`] into the named
//! scene: housing via the selected hollow strategy, one marker and one
//! roller per hole, and the rod hanging beneath the upper roller row.

use config::constants::TessellationProfile;
use glam::DVec3;
use tracing::debug;

use trolley_spec::AssemblySpec;

use crate::error::GeometryError;
use crate::hollow::HollowMode;
use crate::placement::{hole_center, rod_center_z, validate_spec};
use crate::primitive::{Axis, PartBody, PositionedPrimitive, Primitive};
use crate::scene::{hole_node_name, roller_node_name, Scene, SceneBuilder, ROD_NODE};

/// Assembles the full scene for a resolved spec.
///
/// Validates the geometry invariants first, then builds nodes in the
/// stable order `tube`, holes, rollers, `rod`. A spec with zero holes
/// yields a bare housing (plus the rod when a rod block is present).
///
/// ## Example
///
/// ```rust
/// use config::constants::TessellationProfile;
/// use trolley_scene::{assemble, HollowMode};
/// use trolley_spec::{resolve_text, SpecDefaults};
///
/// let spec = resolve_text(
///     "trolley:\n  tube: {length: 300, width: 30, height: 100, wall: 3}\n",
///     &SpecDefaults::default(),
/// )
/// .unwrap();
/// let scene = assemble(&spec, &TessellationProfile::default(), HollowMode::Subtract).unwrap();
/// assert_eq!(scene.node_names(), ["tube"]);
/// ```
pub fn assemble(
    spec: &AssemblySpec,
    profile: &TessellationProfile,
    mode: HollowMode,
) -> Result<Scene, GeometryError> {
    validate_spec(spec)?;

    let mut builder = SceneBuilder::new();
    builder.set_housing(mode.strategy().housing(&spec.tube)?);

    if let Some(rollers) = &spec.rollers {
        // Hole markers: thin bores across the full tube width.
        for (index, hole) in spec.holes.iter().enumerate() {
            let marker = Primitive::Cylinder {
                radius: rollers.hole_diameter / 2.0,
                height: spec.tube.width,
                axis: Axis::Y,
                segments: profile.hole_markers,
            };
            builder.add_part(
                hole_node_name(index, hole.label.as_deref()),
                PartBody::Primitive(PositionedPrimitive::new(
                    marker,
                    hole_center(hole, &spec.tube),
                )),
            )?;
        }

        // Rollers share their hole's center.
        for (index, hole) in spec.holes.iter().enumerate() {
            let roller = Primitive::Cylinder {
                radius: rollers.outer_diameter / 2.0,
                height: rollers.width,
                axis: Axis::Y,
                segments: profile.rollers,
            };
            builder.add_part(
                roller_node_name(index, hole.label.as_deref()),
                PartBody::Primitive(PositionedPrimitive::new(
                    roller,
                    hole_center(hole, &spec.tube),
                )),
            )?;
        }
    }

    if let Some(rod) = &spec.rod {
        let z = match (spec.upper_hole_y(), &spec.rollers) {
            (Some(upper), Some(rollers)) => {
                rod_center_z(spec.tube.height, upper, rollers.outer_diameter, rod.diameter)
            }
            // No roller row to hang beneath: rest on the tube axis.
            _ => 0.0,
        };
        let primitive = Primitive::Cylinder {
            radius: rod.diameter / 2.0,
            height: rod.length,
            axis: Axis::X,
            segments: profile.rod,
        };
        builder.add_part(
            ROD_NODE,
            PartBody::Primitive(PositionedPrimitive::new(primitive, DVec3::new(0.0, 0.0, z))),
        )?;
    }

    let scene = builder.finish()?;
    debug!(nodes = scene.len(), strategy = %mode, "assembled scene");
    Ok(scene)
}

// =============================================================================
// TESTS
// =============================================================================
