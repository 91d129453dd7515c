//! # Primitive Tessellation
//!
//! Generates triangle meshes for the two primitive shapes in their
//! canonical frames: boxes centered on the origin, cylinders centered on
//! the origin with the axis along Z. Reorientation and placement happen
//! afterwards, in the primitive layer.

use config::constants::MIN_SEGMENTS;
use glam::DVec3;
use std::f64::consts::PI;

use crate::error::GeometryError;
use crate::mesh::Mesh;

/// Creates a centered axis-aligned box mesh.
///
/// # Arguments
///
/// * `extents` - Full dimensions [x, y, z]
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use trolley_scene::tessellate::box_mesh;
/// use glam::DVec3;
///
/// let mesh = box_mesh(DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn box_mesh(extents: DVec3) -> Result<Mesh, GeometryError> {
    if extents.x <= 0.0 || extents.y <= 0.0 || extents.z <= 0.0 {
        return Err(GeometryError::degenerate(format!(
            "Box extents must be positive: {extents:?}"
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);

    let half = extents / 2.0;
    let (min, max) = (-half, half);

    // Add 8 vertices (corners of the box)
    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z)); // 0: left-front-bottom
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z)); // 1: right-front-bottom
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z)); // 2: right-back-bottom
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z)); // 3: left-back-bottom

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z)); // 4: left-front-top
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z)); // 5: right-front-top
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z)); // 6: right-back-top
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z)); // 7: left-back-top

    // Add 12 triangles (2 per face, counter-clockwise winding for outward normals)

    // Bottom face (z = min.z) - looking from below, CCW
    mesh.add_triangle(v0, v2, v1);
    mesh.add_triangle(v0, v3, v2);

    // Top face (z = max.z) - looking from above, CCW
    mesh.add_triangle(v4, v5, v6);
    mesh.add_triangle(v4, v6, v7);

    // Front face (y = min.y) - looking from front, CCW
    mesh.add_triangle(v0, v1, v5);
    mesh.add_triangle(v0, v5, v4);

    // Back face (y = max.y) - looking from back, CCW
    mesh.add_triangle(v2, v3, v7);
    mesh.add_triangle(v2, v7, v6);

    // Left face (x = min.x) - looking from left, CCW
    mesh.add_triangle(v3, v0, v4);
    mesh.add_triangle(v3, v4, v7);

    // Right face (x = max.x) - looking from right, CCW
    mesh.add_triangle(v1, v2, v6);
    mesh.add_triangle(v1, v6, v5);

    Ok(mesh)
}

/// Creates a centered cylinder mesh with its axis along Z.
///
/// # Arguments
///
/// * `radius` - Cylinder radius
/// * `height` - Height along Z, centered at the origin
/// * `segments` - Number of segments around the circumference
///
/// # Example
///
/// ```rust
/// use trolley_scene::tessellate::cylinder_mesh;
///
/// let mesh = cylinder_mesh(5.0, 10.0, 32).unwrap();
/// assert!(mesh.validate());
/// ```
pub fn cylinder_mesh(radius: f64, height: f64, segments: u32) -> Result<Mesh, GeometryError> {
    if height <= 0.0 {
        return Err(GeometryError::degenerate(format!(
            "Cylinder height must be positive: {height}"
        )));
    }

    if radius <= 0.0 {
        return Err(GeometryError::degenerate(format!(
            "Cylinder radius must be positive: {radius}"
        )));
    }

    if segments < MIN_SEGMENTS {
        return Err(GeometryError::degenerate(format!(
            "Cylinder segments must be at least {MIN_SEGMENTS}: {segments}"
        )));
    }

    let mut mesh = Mesh::with_capacity(segments as usize * 2, segments as usize * 4);

    let z_bottom = -height / 2.0;
    let z_top = height / 2.0;

    // Generate bottom circle vertices
    let bottom_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let x = radius * theta.cos();
            let y = radius * theta.sin();
            mesh.add_vertex(DVec3::new(x, y, z_bottom))
        })
        .collect();

    // Generate top circle vertices
    let top_indices: Vec<u32> = (0..segments)
        .map(|j| {
            let theta = 2.0 * PI * j as f64 / segments as f64;
            let x = radius * theta.cos();
            let y = radius * theta.sin();
            mesh.add_vertex(DVec3::new(x, y, z_top))
        })
        .collect();

    // Generate side faces: quads between the two circles
    for j in 0..segments {
        let j_next = (j + 1) % segments;

        let b0 = bottom_indices[j as usize];
        let b1 = bottom_indices[j_next as usize];
        let t0 = top_indices[j as usize];
        let t1 = top_indices[j_next as usize];

        mesh.add_triangle(b0, b1, t1);
        mesh.add_triangle(b0, t1, t0);
    }

    // Generate bottom cap
    for j in 1..segments - 1 {
        mesh.add_triangle(
            bottom_indices[0],
            bottom_indices[(j + 1) as usize],
            bottom_indices[j as usize],
        );
    }

    // Generate top cap
    for j in 1..segments - 1 {
        mesh.add_triangle(
            top_indices[0],
            top_indices[j as usize],
            top_indices[(j + 1) as usize],
        );
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_vertex_and_triangle_count() {
        let mesh = box_mesh(DVec3::splat(10.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_box_centered() {
        let mesh = box_mesh(DVec3::new(10.0, 20.0, 30.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-5.0, -10.0, -15.0));
        assert_eq!(max, DVec3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn test_box_validates() {
        let mesh = box_mesh(DVec3::splat(10.0)).unwrap();
        assert!(mesh.validate());
    }

    #[test]
    fn test_box_invalid_extent() {
        assert!(box_mesh(DVec3::new(0.0, 10.0, 10.0)).is_err());
        assert!(box_mesh(DVec3::new(-5.0, 10.0, 10.0)).is_err());
    }

    #[test]
    fn test_cylinder_basic() {
        let mesh = cylinder_mesh(5.0, 10.0, 32).unwrap();
        assert!(mesh.validate());
        // 2 circles of vertices, sides plus two cap fans.
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 32 * 2 + 30 * 2);
    }

    #[test]
    fn test_cylinder_centered_on_z() {
        let mesh = cylinder_mesh(5.0, 10.0, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min.z, -5.0);
        assert_eq!(max.z, 5.0);
        assert_eq!(max.x, 5.0);
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(cylinder_mesh(5.0, 0.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_invalid_radius() {
        assert!(cylinder_mesh(0.0, 10.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(cylinder_mesh(5.0, 10.0, 2).is_err());
    }
}
