//! # Static-Load Estimation
//!
//! Resolves the `loads` section of the spec document and computes the
//! quick-check numbers: weight, tipping moment about the roller line, and
//! the equivalent force pair the roller base must react.
//!
//! The estimator is independent of the geometry core. It shares only the
//! document and its alias conventions with the rest of the pipeline.

use config::constants::STANDARD_GRAVITY;
use serde::{Deserialize, Serialize};
use trolley_spec::{Aliased, RawDocument, Section, SpecError};

use crate::error::LoadsError;

// =============================================================================
// ALIAS TABLES
// =============================================================================

/// Top-level section holding the load figures.
pub const LOADS: Aliased = Aliased::plain("loads");

const TOTAL_MASS: Aliased = Aliased::plain("total_mass_kg");
const GRAVITY: Aliased = Aliased::plain("gravity_m_s2");
const COM_OFFSET_X: Aliased =
    Aliased::with_aliases("center_of_mass_offset_x_mm", &["center_of_mass_offset_x"]);
const ROLLER_BASE: Aliased =
    Aliased::with_aliases("roller_base_width_mm", &["roller_base_width"]);

// =============================================================================
// TYPES
// =============================================================================

/// Resolved inputs of one load estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadInputs {
    /// Suspended mass in kilograms.
    pub total_mass_kg: f64,
    /// Gravitational acceleration in m/s².
    pub gravity_m_s2: f64,
    /// Horizontal center-of-mass offset from the roller line, millimeters.
    /// May be negative when the mass hangs on the other side.
    pub center_of_mass_offset_x_mm: f64,
    /// Distance between the left and right roller rows, millimeters.
    pub roller_base_width_mm: f64,
}

/// Derived static-load figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadEstimate {
    /// Weight W = m·g, newtons.
    pub weight_n: f64,
    /// Tipping moment M = W·x, newton-meters.
    pub moment_n_m: f64,
    /// Equivalent force pair F = M/base, newtons. Zero when the roller
    /// base width is zero.
    pub equivalent_force_n: f64,
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolves the loads section, if the document has one.
///
/// Returns `Ok(None)` when the section is absent entirely; a present but
/// malformed section is an error, never a silent skip.
pub fn resolve_loads(doc: &RawDocument) -> Result<Option<LoadInputs>, LoadsError> {
    let Some(section) = doc.section(&LOADS)? else {
        return Ok(None);
    };

    let total_mass_kg = positive(&section, &TOTAL_MASS, section.require_number(&TOTAL_MASS)?)?;
    let gravity_m_s2 = positive(
        &section,
        &GRAVITY,
        section.number_or(&GRAVITY, STANDARD_GRAVITY)?,
    )?;
    let center_of_mass_offset_x_mm = section.require_number(&COM_OFFSET_X)?;
    let roller_base_width_mm =
        non_negative(&section, &ROLLER_BASE, section.require_number(&ROLLER_BASE)?)?;

    Ok(Some(LoadInputs {
        total_mass_kg,
        gravity_m_s2,
        center_of_mass_offset_x_mm,
        roller_base_width_mm,
    }))
}

fn positive(section: &Section<'_>, name: &Aliased, value: f64) -> Result<f64, LoadsError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SpecError::invalid(
            section.field_path(name),
            "positive number",
            value.to_string(),
        )
        .into())
    }
}

fn non_negative(section: &Section<'_>, name: &Aliased, value: f64) -> Result<f64, LoadsError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(SpecError::invalid(
            section.field_path(name),
            "non-negative number",
            value.to_string(),
        )
        .into())
    }
}

// =============================================================================
// ESTIMATION
// =============================================================================

/// Computes the quick-check figures from resolved inputs.
///
/// Offsets come in as millimeters and convert to meters here, so the
/// moment lands in N·m and the force pair in N.
///
/// # Example
///
/// ```rust
/// use trolley_loads::{estimate, LoadInputs};
///
/// let inputs = LoadInputs {
///     total_mass_kg: 120.0,
///     gravity_m_s2: 9.80665,
///     center_of_mass_offset_x_mm: 250.0,
///     roller_base_width_mm: 180.0,
/// };
/// let figures = estimate(&inputs);
/// assert!((figures.weight_n - 1176.798).abs() < 1e-9);
/// ```
pub fn estimate(inputs: &LoadInputs) -> LoadEstimate {
    let weight_n = inputs.total_mass_kg * inputs.gravity_m_s2;
    let moment_n_m = weight_n * (inputs.center_of_mass_offset_x_mm / 1000.0);
    let base_m = inputs.roller_base_width_mm / 1000.0;
    let equivalent_force_n = if base_m > 0.0 { moment_n_m / base_m } else { 0.0 };

    LoadEstimate {
        weight_n,
        moment_n_m,
        equivalent_force_n,
    }
}

// =============================================================================
// TESTS
// =============================================================================
