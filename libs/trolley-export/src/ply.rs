//! # ASCII PLY Encoding
//!
//! Fallback artifact format. The scene collapses into one merged mesh
//! because PLY has no notion of named sub-objects; the GLB path is the
//! one that preserves the part outline.

use trolley_scene::Scene;

use crate::error::ExportError;

/// Encodes the scene as an ASCII PLY byte stream.
///
/// Applies the same millimeter-to-model-unit conversion as the GLB
/// encoder so both artifacts agree on coordinates.
pub fn encode_ply(scene: &Scene, unit_scale: f64) -> Result<Vec<u8>, ExportError> {
    if scene.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let mesh = scene.merged_mesh()?;

    let mut out = String::new();
    out.push_str("ply\n");
    out.push_str("format ascii 1.0\n");
    out.push_str(&format!("element vertex {}\n", mesh.vertex_count()));
    out.push_str("property float x\n");
    out.push_str("property float y\n");
    out.push_str("property float z\n");
    out.push_str(&format!("element face {}\n", mesh.triangle_count()));
    out.push_str("property list uchar int vertex_indices\n");
    out.push_str("end_header\n");

    for vertex in mesh.vertices() {
        let scaled = (*vertex * unit_scale).as_vec3();
        out.push_str(&format!("{} {} {}\n", scaled.x, scaled.y, scaled.z));
    }
    for triangle in mesh.triangles() {
        out.push_str(&format!(
            "3 {} {} {}\n",
            triangle[0], triangle[1], triangle[2]
        ));
    }

    Ok(out.into_bytes())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use trolley_scene::{PartBody, PositionedPrimitive, Primitive, SceneBuilder};

    fn box_scene() -> Scene {
        let mut builder = SceneBuilder::new();
        builder.set_housing(PartBody::Primitive(PositionedPrimitive::new(
            Primitive::Box {
                extents: DVec3::new(2.0, 2.0, 2.0),
            },
            DVec3::ZERO,
        )));
        builder.finish().unwrap()
    }

    #[test]
    fn test_ply_header_shape() {
        let bytes = encode_ply(&box_scene(), 1.0).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ply");
        assert_eq!(lines[1], "format ascii 1.0");
        assert_eq!(lines[2], "element vertex 8");
        assert_eq!(lines[6], "element face 12");
        assert_eq!(lines[7], "property list uchar int vertex_indices");
        assert_eq!(lines[8], "end_header");
    }

    #[test]
    fn test_ply_body_counts_match_header() {
        let bytes = encode_ply(&box_scene(), 1.0).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let body: Vec<&str> = text
            .lines()
            .skip_while(|line| *line != "end_header")
            .skip(1)
            .collect();
        assert_eq!(body.len(), 8 + 12);
        let faces = body.iter().filter(|line| line.starts_with("3 ")).count();
        assert_eq!(faces, 12);
    }

    #[test]
    fn test_ply_applies_unit_scale() {
        let bytes = encode_ply(&box_scene(), 1e-3).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        // A 2 mm cube scales to corners at +/-0.001 model units.
        assert!(text.contains("0.001 0.001 0.001"));
        assert!(!text.contains("1 1 1\n"));
    }
}
