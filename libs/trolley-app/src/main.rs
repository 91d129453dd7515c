//! # Trolley Pipeline Binary
//!
//! Batch runner wiring the whole toolchain: read the YAML spec, resolve it
//! into the canonical assembly, build the scene, export the model, and
//! write the static-load report when the document carries a loads section.
//!
//! One invocation, one pass, no daemon behavior. Every fatal error names
//! the stage and the spec field or path at fault.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::info;

use config::constants::{TessellationProfile, DEFAULT_SPEC_PATH, REPORT_PATH};
use trolley_export::{export_scene, ExportConfig};
use trolley_loads::emit_report;
use trolley_scene::{assemble, HollowMode};
use trolley_spec::{resolve_assembly, RawDocument, SpecDefaults};

const USAGE: &str = "\
Usage: trolley [OPTIONS] [SPEC_PATH]

Builds the trolley preview model and static-load report from a YAML spec.

Arguments:
  SPEC_PATH         spec document (default: spec/trolley.yaml)

Options:
  --hollow <MODE>   housing strategy: subtract | inverted_shell | wall_slabs
  -h, --help        print this help
";

/// Parsed command line.
#[derive(Debug)]
struct Args {
    spec_path: PathBuf,
    hollow: HollowMode,
}

/// Parses everything after the program name. Returns `None` when help was
/// requested.
fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Option<Args>> {
    let mut spec_path: Option<PathBuf> = None;
    let mut hollow = HollowMode::default();

    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--hollow" => {
                let value = argv
                    .next()
                    .context("--hollow needs a value (subtract | inverted_shell | wall_slabs)")?;
                hollow = parse_hollow(&value)?;
            }
            other if other.starts_with("--hollow=") => {
                hollow = parse_hollow(&other["--hollow=".len()..])?;
            }
            other if other.starts_with('-') => {
                bail!("Unknown option: {other}\n\n{USAGE}");
            }
            other => {
                if spec_path.replace(PathBuf::from(other)).is_some() {
                    bail!("More than one spec path given\n\n{USAGE}");
                }
            }
        }
    }

    Ok(Some(Args {
        spec_path: spec_path.unwrap_or_else(|| PathBuf::from(DEFAULT_SPEC_PATH)),
        hollow,
    }))
}

fn parse_hollow(value: &str) -> Result<HollowMode> {
    HollowMode::from_str(value).map_err(anyhow::Error::msg)
}

fn run(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.spec_path)
        .with_context(|| format!("Cannot read spec document {}", args.spec_path.display()))?;
    let doc = RawDocument::parse(&text)?;
    let spec = resolve_assembly(&doc, &SpecDefaults::default())?;
    info!(
        spec = %args.spec_path.display(),
        holes = spec.holes.len(),
        hollow = %args.hollow,
        "spec resolved"
    );

    let scene = assemble(&spec, &TessellationProfile::default(), args.hollow)?;
    let outcome = export_scene(&scene, &ExportConfig::default())?;
    info!(
        path = %outcome.path.display(),
        format = %outcome.format,
        "model written"
    );

    let source = args.spec_path.display().to_string();
    if emit_report(&doc, &source, Path::new(REPORT_PATH))?.is_none() {
        info!("document has no loads section, skipping report");
    }

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let Some(args) = parse_args(std::env::args().skip(1))? else {
        print!("{USAGE}");
        return Ok(());
    };
    run(&args)
}

// =============================================================================
// TESTS
// =============================================================================
