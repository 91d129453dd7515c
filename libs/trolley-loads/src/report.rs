//! # Markdown Report
//!
//! Renders the load figures into the human-readable report and writes it
//! atomically to the reports directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LoadsError;
use crate::estimate::{LoadEstimate, LoadInputs};

/// Renders the report body.
///
/// `source` names the document the inputs came from, so the report stays
/// traceable when specs move around.
pub fn render_report(source: &str, inputs: &LoadInputs, estimate: &LoadEstimate) -> String {
    let mut out = String::new();
    out.push_str("# Trolley static load report\n\n");

    out.push_str(&format!("## Inputs (from {source})\n"));
    out.push_str(&format!("- Mass: **{:.2} kg**\n", inputs.total_mass_kg));
    out.push_str(&format!("- g: **{:.5} m/s²**\n", inputs.gravity_m_s2));
    out.push_str(&format!(
        "- Lever arm x: **{:.1} mm**\n",
        inputs.center_of_mass_offset_x_mm
    ));
    out.push_str(&format!(
        "- Roller base (L-R): **{:.1} mm**\n\n",
        inputs.roller_base_width_mm
    ));

    out.push_str("## Quick estimates\n");
    out.push_str(&format!("- Weight W = m·g: **{:.1} N**\n", estimate.weight_n));
    out.push_str(&format!(
        "- Moment M = W·x: **{:.1} N·m**\n",
        estimate.moment_n_m
    ));
    out.push_str(&format!(
        "- Equivalent force pair F = M/base: **{:.1} N**\n\n",
        estimate.equivalent_force_n
    ));

    out.push_str("## Note\n");
    out.push_str(
        "These figures are a quick formula check, not a structural analysis. \
         Full verification runs downstream on the exported model.\n",
    );

    out
}

/// Writes the report through a staging file renamed into place.
pub fn write_report(path: &Path, content: &str) -> Result<(), LoadsError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|error| LoadsError::io(parent, error))?;
        }
    }
    let staging = staging_path(path);
    fs::write(&staging, content).map_err(|error| LoadsError::io(&staging, error))?;
    fs::rename(&staging, path).map_err(|error| LoadsError::io(path, error))?;
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| std::ffi::OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

// =============================================================================
// TESTS
// =============================================================================
