mod display;
mod form;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use trivenn::render::raster::{self, RasterOptions};
use trivenn::render::{LayoutOptions, SvgRenderOptions, sanitize_svg_id};
use trivenn::{OverlapMap, normalize_entries};
use uuid::Uuid;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(io::Error),
    Raster(raster::RasterError),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Raster(err) => write!(f, "{err}"),
        }
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<raster::RasterError> for CliError {
    fn from(value: raster::RasterError) -> Self {
        Self::Raster(value)
    }
}

fn usage() -> &'static str {
    "trivenn-cli\n\
\n\
USAGE:\n\
  trivenn-cli\n\
\n\
Fill out the table on stdin: up to 15 (center, surface-function) row pairs,\n\
surface functions comma-separated, a fully blank row submits. Two PNG files\n\
are written to the current directory:\n\
  center_venn_<id>.png    centers by shared surface functions\n\
  function_venn_<id>.png  surface functions by participating centers\n\
"
}

fn parse_args(argv: &[String]) -> Result<(), CliError> {
    // The form is the whole surface; any argument is a usage error.
    match argv.get(1) {
        None => Ok(()),
        Some(_) => Err(CliError::Usage(usage())),
    }
}

fn save_diagram(
    title: &str,
    prefix: &str,
    map: &OverlapMap,
    layout_options: &LayoutOptions,
) -> Result<PathBuf, CliError> {
    let svg_options = SvgRenderOptions {
        diagram_id: Some(sanitize_svg_id(&format!("{prefix}-venn"))),
    };
    let raster_options = RasterOptions {
        scale: 1.0,
        background: Some("white".to_string()),
    };
    let bytes = raster::render_overlap_png(title, map, layout_options, &svg_options, &raster_options)?;

    let filename = format!("{prefix}_venn_{}.png", Uuid::new_v4().simple());
    std::fs::write(&filename, bytes)?;
    println!("Saved: {filename}");
    Ok(PathBuf::from(filename))
}

fn run() -> Result<(), CliError> {
    println!("Fill out the input table to generate Venn diagrams.");

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let entries = form::collect_entries(
        &mut stdin.lock(),
        &mut io::stderr(),
        &form::FormOptions::default(),
    )?;
    let rows = normalize_entries(&entries);
    tracing::debug!(rows = rows.len(), "input table normalized");

    let layout_options = LayoutOptions::default();

    let centers = OverlapMap::by_center(&rows);
    let center_png = save_diagram(
        "Centers by Shared Surface Functions",
        "center",
        &centers,
        &layout_options,
    )?;
    if interactive {
        display::open_blocking(&center_png);
    }

    let functions = OverlapMap::by_function(&rows);
    let function_png = save_diagram(
        "Surface Functions by Participating Centers",
        "function",
        &functions,
        &layout_options,
    )?;
    if interactive {
        display::open_blocking(&function_png);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = parse_args(&std::env::args().collect::<Vec<_>>()) {
        eprintln!("{err}");
        std::process::exit(2);
    }

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
