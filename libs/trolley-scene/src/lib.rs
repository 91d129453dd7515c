//! # Trolley Scene
//!
//! Geometry core: turns a resolved assembly spec into a named scene of
//! positioned primitive solids.
//!
//! ## Architecture
//!
//! ```text
//! trolley-spec (AssemblySpec) → placement + hollow strategy → Scene
//! ```
//!
//! All coordinates are millimeters in a right-handed frame centered on the
//! tube, +X along the length, +Y across the width, +Z toward the top edge.
//! Cylinder reorientation uses exact quarter-turn permutations, so part
//! axes carry no rounding.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::TessellationProfile;
//! use trolley_scene::{assemble, HollowMode};
//! use trolley_spec::{resolve_text, SpecDefaults};
//!
//! let spec = resolve_text(
//!     "trolley:\n  tube: {length: 300, width: 30, height: 100, wall: 3}\n",
//!     &SpecDefaults::default(),
//! )
//! .unwrap();
//! let scene = assemble(&spec, &TessellationProfile::default(), HollowMode::default()).unwrap();
//! assert_eq!(scene.node_names(), ["tube"]);
//! ```

pub mod assemble;
pub mod error;
pub mod hollow;
pub mod mesh;
pub mod placement;
pub mod primitive;
pub mod scene;
pub mod tessellate;

// Re-export public API
pub use assemble::assemble;
pub use error::GeometryError;
pub use hollow::{HollowMode, HollowStrategy, InvertedShell, SubtractShell, WallSlabs};
pub use mesh::Mesh;
pub use placement::{hole_center, rod_center_z, validate_spec};
pub use primitive::{Axis, PartBody, PositionedPrimitive, Primitive};
pub use scene::{hole_node_name, roller_node_name, Scene, SceneBuilder, ScenePart, HOUSING_NODE, ROD_NODE};
