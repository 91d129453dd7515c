//! # Binary glTF Encoding
//!
//! Builds a single-buffer GLB container from a scene. Each scene part
//! becomes one named node referencing one mesh, so viewers show the
//! assembly as an outline of selectable parts rather than a vertex soup.
//!
//! Layout notes:
//! - One interleaving-free buffer: per part, a POSITION block followed by
//!   an index block.
//! - Positions are converted from f64 millimeters to f32 model units here;
//!   nowhere else in the pipeline scales coordinates.
//! - No normals are emitted. The meshes are flat-shaded boxes and prisms
//!   and viewers reconstruct face normals on import.

use serde_json::json;
use trolley_scene::{GeometryError, Scene};

use crate::error::ExportError;

// =============================================================================
// GLB CONTAINER CONSTANTS
// =============================================================================

/// "glTF" in little-endian ASCII.
const GLB_MAGIC: u32 = 0x4654_6C67;
/// Container version 2.
const GLB_VERSION: u32 = 2;
/// "JSON" chunk tag.
const CHUNK_TYPE_JSON: u32 = 0x4E4F_534A;
/// "BIN\0" chunk tag.
const CHUNK_TYPE_BIN: u32 = 0x004E_4942;

/// glTF componentType for f32.
const COMPONENT_FLOAT: u32 = 5126;
/// glTF componentType for u32.
const COMPONENT_UNSIGNED_INT: u32 = 5125;
/// bufferView target for vertex attributes.
const TARGET_ARRAY_BUFFER: u32 = 34962;
/// bufferView target for indices.
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;

// =============================================================================
// ENCODER
// =============================================================================

/// Encodes the scene as a GLB byte stream.
///
/// `unit_scale` converts internal millimeter coordinates into the model
/// units stored in the file (1e-3 yields meters, the glTF convention).
pub fn encode_glb(scene: &Scene, unit_scale: f64) -> Result<Vec<u8>, ExportError> {
    if scene.is_empty() {
        return Err(ExportError::EmptyScene);
    }

    let mut bin: Vec<u8> = Vec::new();
    let mut buffer_views = Vec::new();
    let mut accessors = Vec::new();
    let mut meshes = Vec::new();
    let mut nodes = Vec::new();

    for part in scene.parts() {
        let mesh = part.to_mesh()?;
        if mesh.is_empty() {
            return Err(GeometryError::degenerate(format!(
                "part '{}' produced an empty mesh",
                part.name()
            ))
            .into());
        }

        // POSITION block, with the min/max the accessor must declare.
        let position_offset = bin.len();
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for vertex in mesh.vertices() {
            let scaled = (*vertex * unit_scale).as_vec3();
            let components = [scaled.x, scaled.y, scaled.z];
            for (axis, value) in components.iter().enumerate() {
                min[axis] = min[axis].min(*value);
                max[axis] = max[axis].max(*value);
            }
            for value in components {
                bin.extend_from_slice(&value.to_le_bytes());
            }
        }
        let position_length = bin.len() - position_offset;

        // Index block. Both blocks are 4-byte multiples, so accessor
        // offsets stay aligned without padding.
        let index_offset = bin.len();
        for triangle in mesh.triangles() {
            for index in triangle {
                bin.extend_from_slice(&index.to_le_bytes());
            }
        }
        let index_length = bin.len() - index_offset;

        let position_view = buffer_views.len();
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": position_offset,
            "byteLength": position_length,
            "target": TARGET_ARRAY_BUFFER,
        }));
        let index_view = buffer_views.len();
        buffer_views.push(json!({
            "buffer": 0,
            "byteOffset": index_offset,
            "byteLength": index_length,
            "target": TARGET_ELEMENT_ARRAY_BUFFER,
        }));

        let position_accessor = accessors.len();
        accessors.push(json!({
            "bufferView": position_view,
            "componentType": COMPONENT_FLOAT,
            "count": mesh.vertex_count(),
            "type": "VEC3",
            "min": min,
            "max": max,
        }));
        let index_accessor = accessors.len();
        accessors.push(json!({
            "bufferView": index_view,
            "componentType": COMPONENT_UNSIGNED_INT,
            "count": mesh.triangle_count() * 3,
            "type": "SCALAR",
        }));

        let mesh_index = meshes.len();
        meshes.push(json!({
            "name": part.name(),
            "primitives": [{
                "attributes": { "POSITION": position_accessor },
                "indices": index_accessor,
                "material": 0,
            }],
        }));
        nodes.push(json!({
            "name": part.name(),
            "mesh": mesh_index,
        }));
    }

    let root_nodes: Vec<usize> = (0..nodes.len()).collect();
    let document = json!({
        "asset": { "version": "2.0", "generator": "trolley-export" },
        "scene": 0,
        "scenes": [{ "name": "trolley", "nodes": root_nodes }],
        "nodes": nodes,
        "meshes": meshes,
        "materials": [default_material()],
        "accessors": accessors,
        "bufferViews": buffer_views,
        "buffers": [{ "byteLength": bin.len() }],
    });

    // JSON chunk is space-padded, BIN chunk zero-padded, both to 4 bytes.
    let mut json_chunk = serde_json::to_vec(&document)?;
    while json_chunk.len() % 4 != 0 {
        json_chunk.push(b' ');
    }
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let total_length = 12 + 8 + json_chunk.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total_length);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&GLB_VERSION.to_le_bytes());
    out.extend_from_slice(&(total_length as u32).to_le_bytes());

    out.extend_from_slice(&(json_chunk.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_JSON.to_le_bytes());
    out.extend_from_slice(&json_chunk);

    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_TYPE_BIN.to_le_bytes());
    out.extend_from_slice(&bin);

    Ok(out)
}

/// Neutral steel-gray PBR material shared by every part.
///
/// Double-sided because the inverted-shell and wall-slab housings expose
/// interior faces.
fn default_material() -> serde_json::Value {
    json!({
        "name": "steel",
        "pbrMetallicRoughness": {
            "baseColorFactor": [0.62, 0.64, 0.67, 1.0],
            "metallicFactor": 0.8,
            "roughnessFactor": 0.45,
        },
        "doubleSided": true,
    })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use trolley_scene::{Axis, PartBody, PositionedPrimitive, Primitive, SceneBuilder};

    fn sample_scene() -> Scene {
        let mut builder = SceneBuilder::new();
        builder.set_housing(PartBody::Primitive(PositionedPrimitive::new(
            Primitive::Box {
                extents: DVec3::new(300.0, 30.0, 100.0),
            },
            DVec3::ZERO,
        )));
        builder
            .add_part(
                "rod",
                PartBody::Primitive(PositionedPrimitive::new(
                    Primitive::Cylinder {
                        radius: 10.0,
                        height: 260.0,
                        axis: Axis::X,
                        segments: 16,
                    },
                    DVec3::new(0.0, 0.0, -9.75),
                )),
            )
            .unwrap();
        builder.finish().unwrap()
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn json_chunk(bytes: &[u8]) -> serde_json::Value {
        let json_length = read_u32(bytes, 12) as usize;
        assert_eq!(read_u32(bytes, 16), CHUNK_TYPE_JSON);
        serde_json::from_slice(&bytes[20..20 + json_length]).unwrap()
    }

    #[test]
    fn test_glb_header_magic_and_length() {
        let bytes = encode_glb(&sample_scene(), 1e-3).unwrap();
        assert_eq!(&bytes[0..4], b"glTF");
        assert_eq!(read_u32(bytes.as_slice(), 0), GLB_MAGIC);
        assert_eq!(read_u32(bytes.as_slice(), 4), GLB_VERSION);
        // Declared total length matches the byte stream.
        assert_eq!(read_u32(bytes.as_slice(), 8) as usize, bytes.len());
    }

    #[test]
    fn test_glb_chunks_are_aligned_and_tagged() {
        let bytes = encode_glb(&sample_scene(), 1e-3).unwrap();
        let json_length = read_u32(bytes.as_slice(), 12) as usize;
        assert_eq!(json_length % 4, 0);
        assert_eq!(read_u32(bytes.as_slice(), 16), CHUNK_TYPE_JSON);

        let bin_header = 20 + json_length;
        let bin_length = read_u32(bytes.as_slice(), bin_header) as usize;
        assert_eq!(bin_length % 4, 0);
        assert_eq!(read_u32(bytes.as_slice(), bin_header + 4), CHUNK_TYPE_BIN);
        assert_eq!(bin_header + 8 + bin_length, bytes.len());
    }

    #[test]
    fn test_glb_nodes_carry_part_names() {
        let bytes = encode_glb(&sample_scene(), 1e-3).unwrap();
        let document = json_chunk(&bytes);
        let nodes = document["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0]["name"], "tube");
        assert_eq!(nodes[1]["name"], "rod");
        // Scene lists every node as a root.
        assert_eq!(document["scenes"][0]["nodes"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_glb_buffer_length_matches_bin_chunk() {
        let bytes = encode_glb(&sample_scene(), 1e-3).unwrap();
        let document = json_chunk(&bytes);
        let json_length = read_u32(bytes.as_slice(), 12) as usize;
        let bin_length = read_u32(bytes.as_slice(), 20 + json_length) as usize;
        assert_eq!(
            document["buffers"][0]["byteLength"].as_u64().unwrap() as usize,
            bin_length
        );
    }

    #[test]
    fn test_glb_position_accessor_is_scaled_to_meters() {
        let bytes = encode_glb(&sample_scene(), 1e-3).unwrap();
        let document = json_chunk(&bytes);
        // Accessor 0 is the housing POSITION block; the 300x30x100 box is
        // centered, so the max corner lands at (0.15, 0.015, 0.05) m.
        let max = document["accessors"][0]["max"].as_array().unwrap();
        assert!((max[0].as_f64().unwrap() - 0.15).abs() < 1e-6);
        assert!((max[1].as_f64().unwrap() - 0.015).abs() < 1e-6);
        assert!((max[2].as_f64().unwrap() - 0.05).abs() < 1e-6);
        let min = document["accessors"][0]["min"].as_array().unwrap();
        assert!((min[0].as_f64().unwrap() + 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_glb_accessor_counts_match_mesh() {
        let scene = sample_scene();
        let bytes = encode_glb(&scene, 1e-3).unwrap();
        let document = json_chunk(&bytes);
        let housing = scene.parts()[0].to_mesh().unwrap();
        assert_eq!(
            document["accessors"][0]["count"].as_u64().unwrap() as usize,
            housing.vertex_count()
        );
        assert_eq!(
            document["accessors"][1]["count"].as_u64().unwrap() as usize,
            housing.triangle_count() * 3
        );
    }
}
