//! # Trolley Loads
//!
//! Static-load estimation over the spec document, independent of the
//! geometry pipeline.
//!
//! ## Architecture
//!
//! ```text
//! RawDocument --> resolve_loads --> LoadInputs --> estimate --> LoadEstimate
//!                                                                  |
//!                                        render_report + write_report
//! ```
//!
//! The loads section is optional: a document without one produces no
//! report and no error. A present but malformed section fails loudly with
//! the canonical field path.

use std::path::Path;

use tracing::info;
use trolley_spec::RawDocument;

pub mod error;
pub mod estimate;
pub mod report;

pub use error::LoadsError;
pub use estimate::{estimate, resolve_loads, LoadEstimate, LoadInputs, LOADS};
pub use report::{render_report, write_report};

/// Resolves, estimates, and writes the report in one call.
///
/// Returns the figures when a report was written, `None` when the
/// document has no loads section.
///
/// # Example
///
/// ```rust
/// use trolley_loads::emit_report;
/// use trolley_spec::RawDocument;
///
/// let doc = RawDocument::parse(
///     "loads:\n  total_mass_kg: 120\n  center_of_mass_offset_x_mm: 250\n  roller_base_width_mm: 180\n",
/// )?;
/// let path = std::env::temp_dir().join("trolley-doc-report.md");
/// let figures = emit_report(&doc, "spec/trolley.yaml", &path)?.unwrap();
/// assert!(figures.weight_n > 0.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn emit_report(
    doc: &RawDocument,
    source: &str,
    path: &Path,
) -> Result<Option<LoadEstimate>, LoadsError> {
    let Some(inputs) = resolve_loads(doc)? else {
        return Ok(None);
    };

    let figures = estimate(&inputs);
    let content = render_report(source, &inputs, &figures);
    write_report(path, &content)?;
    info!(
        path = %path.display(),
        weight_n = figures.weight_n,
        moment_n_m = figures.moment_n_m,
        equivalent_force_n = figures.equivalent_force_n,
        "load report written"
    );
    Ok(Some(figures))
}

// =============================================================================
// TESTS
// =============================================================================
