//! Reproject a raw O-grid value file to an equirectangular PNG.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use gaussian_grid::{io, GridParameters, GridTopology};
use renderer::{reproject_grayscale, reproject_hue, RasterSize};

#[derive(Parser, Debug)]
#[command(name = "grid-to-png")]
#[command(about = "Render a reduced Gaussian grid value file as an equirectangular PNG")]
struct Args {
    /// Raw little-endian f32 value file
    input: PathBuf,

    /// Output PNG (defaults to the input path with .bin replaced by .png)
    output: Option<PathBuf>,

    /// Colour mode
    #[arg(long, value_enum, default_value = "gray", env = "GRID_TO_PNG_MODE")]
    mode: Mode,

    /// Raster width in pixels
    #[arg(long, default_value = "1024", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Raster height in pixels
    #[arg(long, default_value = "512", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Grid resolution N (1280 for O1280)
    #[arg(long, default_value = "1280", env = "GRID_N")]
    grid_n: usize,

    /// Fail when the file does not hold exactly one value per grid point
    #[arg(long)]
    strict: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Grayscale normalized over the rendered range
    Gray,
    /// Blue to red hue ramp over -50..50
    Hue,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let params = GridParameters::new(args.grid_n).context("Invalid --grid-n")?;
    let topology = GridTopology::new(params);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    let values = io::read_values(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    info!(
        path = %args.input.display(),
        points = values.len(),
        "Loaded grid values"
    );
    if let Some((min, max)) = values.min_max() {
        info!(min, max, "Raw value range");
    }

    if let Err(e) = values.check_len(&topology) {
        if args.strict {
            bail!("{}", e);
        }
        warn!(error = %e, "Grid size mismatch, missing points render as 0.0");
    }

    let size = RasterSize::new(args.width as usize, args.height as usize);
    info!(
        width = size.width,
        height = size.height,
        mode = ?args.mode,
        "Reprojecting"
    );

    match args.mode {
        Mode::Gray => {
            let raster = reproject_grayscale(&topology, &values, size);
            info!(min = raster.range.min, max = raster.range.max, "Reprojected value range");
            raster
                .write_png(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
        Mode::Hue => {
            let raster = reproject_hue(&topology, &values, size);
            info!(min = raster.range.min, max = raster.range.max, "Reprojected value range");
            raster
                .write_png(&output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
        }
    }

    info!(path = %output.display(), "Saved PNG");
    Ok(())
}

/// `foo.bin` becomes `foo.png`; any other name gets `.png` appended.
fn default_output_path(input: &Path) -> PathBuf {
    if input.extension().map_or(false, |ext| ext == "bin") {
        input.with_extension("png")
    } else {
        let mut name = input.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}
