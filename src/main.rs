//! Writes the Koch snowflake of a triangle as svg.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

use nkoch::draw::svg::SvgDocument;
use nkoch::params::{checked_depth, DEFAULT_DEPTH, MAX_DEPTH};
use nkoch::raster::{DevicePolygon, PixelRounding};
use nkoch::{subdivide_with, KochParams, Polygon};

/// Starting triangle in device coordinates
const TRIANGLE: [(f64, f64); 3] = [(250.0, 50.0), (400.0, 350.0), (100.0, 350.0)];

/// Koch curve generator
///
/// Subdivides a triangle DEPTH times and prints the outline as svg.
#[derive(Parser)]
#[command(name = "nkoch")]
#[command(version)]
struct Cli {
    /// Number of subdivision passes (0 to 5)
    #[arg(allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Width and height of the canvas in pixels
    #[arg(long, default_value = "500")]
    size: u32,

    /// How coordinates are snapped to pixels
    #[arg(long, value_enum, default_value = "truncate")]
    rounding: Rounding,

    /// Keep floating point coordinates instead of snapping to pixels
    #[arg(long)]
    no_pixels: bool,

    /// Fit the view box to the curve instead of the canvas
    #[arg(long)]
    fit: bool,

    /// Write the svg to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Rounding {
    Truncate,
    Round,
}

impl From<Rounding> for PixelRounding {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Truncate => PixelRounding::Truncate,
            Rounding::Round => PixelRounding::Round,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let depth = effective_depth(cli.depth);

    let triangle = Polygon::from_tuples(&TRIANGLE)?;
    let result = subdivide_with(&triangle, &KochParams::new().with_depth(depth))?;
    info!("{}", result);

    let mut svg = if cli.fit {
        SvgDocument::fitting(&result.polygon.bounding_box().padded(10.0))
    } else {
        let size = f64::from(cli.size);
        SvgDocument::new(size, size)
    }
    .with_title(format!("Koch curve of depth {}", depth));

    if cli.no_pixels {
        svg.add_polygon(result.polygon.vertices());
    } else {
        let device = DevicePolygon::from_polygon(&result.polygon, cli.rounding.into())?;
        svg.add_polygon(device.vertices());
    }

    match cli.output {
        Some(path) => {
            fs::write(&path, svg.to_string())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

/// Falls back to [`DEFAULT_DEPTH`] for a missing or out of range depth.
fn effective_depth(depth: Option<i64>) -> u32 {
    let Some(depth) = depth else {
        info!(
            "No depth given, using the default of {}. Usage: nkoch [DEPTH] (0 to {})",
            DEFAULT_DEPTH, MAX_DEPTH
        );
        return DEFAULT_DEPTH;
    };
    match checked_depth(depth) {
        Ok(depth) if depth <= MAX_DEPTH => depth,
        Ok(_) => {
            warn!(
                "Maximum depth of {} exceeded by {}, using the default of {}",
                MAX_DEPTH, depth, DEFAULT_DEPTH
            );
            DEFAULT_DEPTH
        }
        Err(err) => {
            warn!("{}, using the default of {}", err, DEFAULT_DEPTH);
            DEFAULT_DEPTH
        }
    }
}
