//! # Scene Assembly
//!
//! The named, ordered, immutable collection of part bodies handed to the
//! exporter. Node names are stable across runs so downstream viewers can
//! address parts: `tube`, `hole_<idx|label>`, `roller_<idx|label>`, `rod`.

use std::collections::BTreeSet;

use crate::error::GeometryError;
use crate::mesh::Mesh;
use crate::primitive::PartBody;

/// Node name of the housing body.
pub const HOUSING_NODE: &str = "tube";

/// Node name of the connecting rod.
pub const ROD_NODE: &str = "rod";

/// Stable node name for a hole marker: the legacy corner label when the
/// document carried one, the hole index otherwise.
pub fn hole_node_name(index: usize, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("hole_{label}"),
        None => format!("hole_{index}"),
    }
}

/// Stable node name for a roller, mirroring [`hole_node_name`].
pub fn roller_node_name(index: usize, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("roller_{label}"),
        None => format!("roller_{index}"),
    }
}

/// One named part of the assembled scene.
#[derive(Debug, Clone)]
pub struct ScenePart {
    name: String,
    body: PartBody,
}

impl ScenePart {
    /// The stable node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The geometry payload.
    pub fn body(&self) -> &PartBody {
        &self.body
    }

    /// Tessellates this part into one mesh.
    pub fn to_mesh(&self) -> Result<Mesh, GeometryError> {
        self.body.to_mesh()
    }
}

/// Immutable assembled scene: housing first, then parts in insertion
/// order. Built once per run through [`SceneBuilder`].
#[derive(Debug, Clone)]
pub struct Scene {
    parts: Vec<ScenePart>,
}

impl Scene {
    /// All parts, housing first.
    pub fn parts(&self) -> &[ScenePart] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// A finished scene always carries at least the housing.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Looks up a part by node name.
    pub fn find(&self, name: &str) -> Option<&ScenePart> {
        self.parts.iter().find(|part| part.name == name)
    }

    /// Node names in scene order.
    pub fn node_names(&self) -> Vec<&str> {
        self.parts.iter().map(|part| part.name.as_str()).collect()
    }

    /// Tessellates every part into one merged mesh, for exporters without
    /// a scene graph.
    pub fn merged_mesh(&self) -> Result<Mesh, GeometryError> {
        let mut merged = Mesh::new();
        for part in &self.parts {
            merged.merge(&part.to_mesh()?);
        }
        Ok(merged)
    }
}

/// Builder enforcing the scene invariants: exactly one housing, unique
/// node names, stable ordering.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    housing: Option<PartBody>,
    parts: Vec<ScenePart>,
    names: BTreeSet<String>,
}

impl SceneBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the housing body, stored under the reserved `tube` node.
    pub fn set_housing(&mut self, body: PartBody) {
        self.housing = Some(body);
    }

    /// Appends a named part. The housing name is reserved; any repeated
    /// name is rejected.
    pub fn add_part(
        &mut self,
        name: impl Into<String>,
        body: PartBody,
    ) -> Result<(), GeometryError> {
        let name = name.into();
        if name == HOUSING_NODE || !self.names.insert(name.clone()) {
            return Err(GeometryError::DuplicateNodeName { name });
        }
        self.parts.push(ScenePart { name, body });
        Ok(())
    }

    /// Finishes the scene. Fails when no housing body was provided;
    /// everything else is optional.
    pub fn finish(self) -> Result<Scene, GeometryError> {
        let housing = self.housing.ok_or(GeometryError::EmptyAssembly)?;
        let mut parts = Vec::with_capacity(self.parts.len() + 1);
        parts.push(ScenePart {
            name: HOUSING_NODE.to_string(),
            body: housing,
        });
        parts.extend(self.parts);
        Ok(Scene { parts })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{PositionedPrimitive, Primitive};
    use glam::DVec3;

    fn body() -> PartBody {
        PartBody::Primitive(PositionedPrimitive::new(
            Primitive::Box {
                extents: DVec3::splat(1.0),
            },
            DVec3::ZERO,
        ))
    }

    #[test]
    fn test_node_names_prefer_labels() {
        assert_eq!(hole_node_name(0, None), "hole_0");
        assert_eq!(hole_node_name(3, Some("ne")), "hole_ne");
        assert_eq!(roller_node_name(2, None), "roller_2");
        assert_eq!(roller_node_name(0, Some("sw")), "roller_sw");
    }

    #[test]
    fn test_builder_orders_housing_first() {
        let mut builder = SceneBuilder::new();
        builder.add_part("hole_0", body()).unwrap();
        builder.set_housing(body());
        builder.add_part("rod", body()).unwrap();
        let scene = builder.finish().unwrap();
        assert_eq!(scene.node_names(), ["tube", "hole_0", "rod"]);
    }

    #[test]
    fn test_builder_without_housing_fails() {
        let mut builder = SceneBuilder::new();
        builder.add_part("hole_0", body()).unwrap();
        let err = builder.finish().unwrap_err();
        assert!(matches!(err, GeometryError::EmptyAssembly));
    }

    #[test]
    fn test_builder_rejects_duplicate_names() {
        let mut builder = SceneBuilder::new();
        builder.add_part("hole_ne", body()).unwrap();
        let err = builder.add_part("hole_ne", body()).unwrap_err();
        match err {
            GeometryError::DuplicateNodeName { name } => assert_eq!(name, "hole_ne"),
            other => panic!("Expected DuplicateNodeName, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_reserves_the_housing_name() {
        let mut builder = SceneBuilder::new();
        let err = builder.add_part("tube", body()).unwrap_err();
        assert!(matches!(err, GeometryError::DuplicateNodeName { .. }));
    }

    #[test]
    fn test_scene_find_and_merge() {
        let mut builder = SceneBuilder::new();
        builder.set_housing(body());
        builder.add_part("rod", body()).unwrap();
        let scene = builder.finish().unwrap();

        assert!(scene.find("rod").is_some());
        assert!(scene.find("missing").is_none());

        let merged = scene.merged_mesh().unwrap();
        assert_eq!(merged.vertex_count(), 16); // two unit boxes
        assert_eq!(merged.triangle_count(), 24);
    }
}
