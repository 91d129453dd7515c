//! # Schema Resolution
//!
//! Turns any recognized historical document shape into the canonical
//! [`AssemblySpec`]. All legacy-key knowledge lives in the alias tables
//! here; consumers never walk the raw document themselves.
//!
//! Resolution is deterministic: the canonical key wins, then each alias in
//! table order. Only roller outer diameter and width may default; every
//! structurally relevant field fails loudly when absent. Resolution walks
//! sections in a fixed order (tube, holes, rollers, rod), so the first
//! missing field in that order is the one reported.

use config::constants::{DEFAULT_ROLLER_OUTER_DIAMETER, DEFAULT_ROLLER_WIDTH};

use crate::document::{Aliased, RawDocument, Section};
use crate::error::SpecError;
use crate::spec::{AssemblySpec, HolePlacement, RodSpec, RollerSpec, TubeSpec};

// =============================================================================
// ALIAS TABLES
// =============================================================================

const ROOT: Aliased = Aliased::with_aliases("trolley", &["trolley_alt_internal_rod"]);
const HOUSING: Aliased = Aliased::plain("housing");
const TUBE: Aliased = Aliased::plain("tube");
const TUBE_LENGTH: Aliased = Aliased::plain("length");
const TUBE_WIDTH: Aliased = Aliased::plain("width");
const TUBE_HEIGHT: Aliased = Aliased::plain("height");
const TUBE_WALL: Aliased = Aliased::with_aliases("wall", &["wall_thickness", "wallThickness"]);

const ROLLERS: Aliased = Aliased::with_aliases("rollers", &["roller"]);
const ROLLER_OUTER_DIAMETER: Aliased = Aliased::with_aliases("outer_diameter", &["outer_d"]);
const ROLLER_WIDTH: Aliased = Aliased::plain("width");
const ROLLER_HOLE_DIAMETER: Aliased = Aliased::with_aliases("hole_diameter", &["hole_d"]);

const HOLES: Aliased = Aliased::plain("holes");
const ROLLER_HOLES: Aliased = Aliased::plain("roller_holes");
const HOLE_X: Aliased = Aliased::with_aliases("x_from_left_mm", &["x_from_left", "x"]);
const HOLE_Y: Aliased = Aliased::with_aliases("y_from_top_mm", &["y_from_top", "y"]);

const ROD: Aliased = Aliased::plain("rod");
const ROD_DIAMETER: Aliased = Aliased::with_aliases("diameter", &["d"]);
const ROD_LENGTH: Aliased = Aliased::with_aliases("length", &["L"]);

// =============================================================================
// DEFAULTS
// =============================================================================

/// The documented defaults the resolver is allowed to apply, passed in
/// explicitly so call sites can see exactly what may be filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecDefaults {
    /// Used when the roller section omits `outer_diameter`.
    pub roller_outer_diameter: f64,
    /// Used when the roller section omits `width`.
    pub roller_width: f64,
}

impl Default for SpecDefaults {
    fn default() -> Self {
        Self {
            roller_outer_diameter: DEFAULT_ROLLER_OUTER_DIAMETER,
            roller_width: DEFAULT_ROLLER_WIDTH,
        }
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolves the assembly section of a parsed document into the canonical
/// spec, or fails naming the first absent required field.
pub fn resolve_assembly(
    doc: &RawDocument,
    defaults: &SpecDefaults,
) -> Result<AssemblySpec, SpecError> {
    let root = doc.section(&ROOT)?.ok_or_else(|| SpecError::MissingRoot {
        tried: ROOT.candidates().collect(),
    })?;

    let tube = resolve_tube(&root)?;
    let holes = resolve_holes(&root)?;
    let rollers = if holes.is_empty() {
        None
    } else {
        Some(resolve_rollers(&root, defaults)?)
    };
    let rod = resolve_rod(&root)?;

    Ok(AssemblySpec {
        tube,
        rollers,
        holes,
        rod,
    })
}

fn resolve_tube(root: &Section) -> Result<TubeSpec, SpecError> {
    let tube = if let Some(section) = root.child(&TUBE)? {
        section
    } else if let Some(housing) = root.child(&HOUSING)? {
        housing.require_child(&TUBE)?
    } else {
        return Err(SpecError::missing(root.field_path(&TUBE)));
    };

    Ok(TubeSpec {
        length: positive_field(&tube, &TUBE_LENGTH)?,
        width: positive_field(&tube, &TUBE_WIDTH)?,
        height: positive_field(&tube, &TUBE_HEIGHT)?,
        wall: positive_field(&tube, &TUBE_WALL)?,
    })
}

fn resolve_holes(root: &Section) -> Result<Vec<HolePlacement>, SpecError> {
    if let Some(items) = root.sequence(&HOLES)? {
        return items
            .iter()
            .map(|section| resolve_hole(section, None))
            .collect();
    }
    if let Some(entries) = root.named_entries(&ROLLER_HOLES)? {
        return entries
            .into_iter()
            .map(|(label, section)| resolve_hole(&section, Some(label)))
            .collect();
    }
    // Zero holes is a legal bare-tube spec.
    Ok(Vec::new())
}

fn resolve_hole(section: &Section, label: Option<String>) -> Result<HolePlacement, SpecError> {
    Ok(HolePlacement {
        label,
        x_from_left_mm: section.require_number(&HOLE_X)?,
        y_from_top_mm: section.require_number(&HOLE_Y)?,
    })
}

fn resolve_rollers(root: &Section, defaults: &SpecDefaults) -> Result<RollerSpec, SpecError> {
    match root.child(&ROLLERS)? {
        Some(section) => Ok(RollerSpec {
            outer_diameter: positive(
                section.number_or(&ROLLER_OUTER_DIAMETER, defaults.roller_outer_diameter)?,
                section.field_path(&ROLLER_OUTER_DIAMETER),
            )?,
            width: positive(
                section.number_or(&ROLLER_WIDTH, defaults.roller_width)?,
                section.field_path(&ROLLER_WIDTH),
            )?,
            // The bore diameter decides whether an axle fits; it never
            // defaults.
            hole_diameter: positive_field(&section, &ROLLER_HOLE_DIAMETER)?,
        }),
        None => Err(SpecError::missing(format!(
            "{}.{}.{}",
            root.path(),
            ROLLERS.canonical(),
            ROLLER_HOLE_DIAMETER.canonical()
        ))),
    }
}

fn resolve_rod(root: &Section) -> Result<Option<RodSpec>, SpecError> {
    let Some(section) = root.child(&ROD)? else {
        return Ok(None);
    };
    Ok(Some(RodSpec {
        diameter: positive_field(&section, &ROD_DIAMETER)?,
        length: positive_field(&section, &ROD_LENGTH)?,
    }))
}

fn positive_field(section: &Section, name: &Aliased) -> Result<f64, SpecError> {
    positive(section.require_number(name)?, section.field_path(name))
}

fn positive(value: f64, path: String) -> Result<f64, SpecError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(SpecError::invalid(
            path,
            "positive number",
            format!("number {value}"),
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
