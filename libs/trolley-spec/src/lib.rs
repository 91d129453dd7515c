//! # Trolley Spec
//!
//! Spec document parsing and schema-tolerant resolution.
//!
//! ## Architecture
//!
//! ```text
//! YAML text → RawDocument (serde_yaml) → resolve_assembly → AssemblySpec
//! ```
//!
//! The document layer knows how to navigate mappings and report precise
//! paths; the resolve layer knows which historical key spellings exist.
//! Everything downstream sees only the canonical [`AssemblySpec`].
//!
//! ## Example
//!
//! ```rust
//! use trolley_spec::{resolve_text, SpecDefaults};
//!
//! let spec = resolve_text(
//!     "trolley:\n  tube: {length: 300, width: 30, height: 100, wall: 3}\n",
//!     &SpecDefaults::default(),
//! )
//! .unwrap();
//! assert_eq!(spec.tube.length, 300.0);
//! ```

pub mod document;
pub mod error;
pub mod resolve;
pub mod spec;

// Re-export public API
pub use document::{Aliased, RawDocument, Section};
pub use error::SpecError;
pub use resolve::{resolve_assembly, SpecDefaults};
pub use spec::{AssemblySpec, HolePlacement, RodSpec, RollerSpec, TubeSpec};

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse YAML text and resolve it into the canonical assembly spec.
///
/// One-call entry point for consumers that only need the geometry side of
/// the document. Callers that also read the loads section should parse a
/// [`RawDocument`] once and resolve from that instead.
///
/// ## Example
///
/// ```rust
/// use trolley_spec::{resolve_text, SpecDefaults};
///
/// let spec = resolve_text(
///     "trolley:\n  tube: {length: 10, width: 10, height: 10, wall: 1}\n",
///     &SpecDefaults::default(),
/// )
/// .unwrap();
/// assert!(spec.holes.is_empty());
/// ```
pub fn resolve_text(text: &str, defaults: &SpecDefaults) -> Result<AssemblySpec, SpecError> {
    let doc = RawDocument::parse(text)?;
    resolve_assembly(&doc, defaults)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_text_end_to_end() {
        let spec = resolve_text(
            "trolley:\n  tube: {length: 300, width: 30, height: 100, wall: 3}\n  rollers: {hole_diameter: 8}\n  holes:\n    - {x: 30, y: 30}\n",
            &SpecDefaults::default(),
        )
        .unwrap();
        assert_eq!(spec.holes.len(), 1);
        assert!(spec.rollers.is_some());
    }

    #[test]
    fn test_resolve_text_surfaces_syntax_errors() {
        let err = resolve_text("trolley: [unclosed", &SpecDefaults::default()).unwrap_err();
        assert!(matches!(err, SpecError::Syntax(_)));
    }
}
