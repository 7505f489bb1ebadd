//! Generates synthetic O-grid value files for rendering tests.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use field_synth::{cyclone_field, load_yaml, pressure_field, uniform, CycloneConfig, PressureFieldConfig};
use gaussian_grid::{io, GridParameters, GridTopology, GridValues};

#[derive(Parser, Debug)]
#[command(name = "fixture-gen")]
#[command(about = "Generate synthetic reduced Gaussian grid fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory the files are written to
    #[arg(long, global = true, default_value = "tests/fixtures", env = "FIXTURES_DIR")]
    out_dir: PathBuf,

    /// Grid resolution N (1280 for O1280)
    #[arg(long, global = true, default_value = "1280", env = "GRID_N")]
    grid_n: usize,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Constant fields (55.0 and -20.0 unless a single value is given)
    Uniform {
        /// Value for a single custom file
        #[arg(long, requires = "name", allow_hyphen_values = true)]
        value: Option<f32>,

        /// File name for the custom value
        #[arg(long, requires = "value")]
        name: Option<String>,
    },

    /// Low/high pressure centres with seeded noise
    Pressure {
        /// YAML file overriding the default field parameters
        #[arg(long)]
        config: Option<PathBuf>,

        /// Noise seed, overrides the config
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Cyclone U/V wind components
    Wind {
        /// YAML file overriding the default cyclone parameters
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
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

    let params = GridParameters::new(cli.grid_n).context("Invalid --grid-n")?;
    let topology = GridTopology::new(params);
    info!(
        n = cli.grid_n,
        points = topology.total_points(),
        "Grid topology ready"
    );

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let written = run(&cli.command, &topology, &cli.out_dir)?;
    info!(files = written.len(), dir = %cli.out_dir.display(), "Fixtures generated");
    Ok(())
}

/// Execute one subcommand, returning the files it wrote.
fn run(command: &Commands, topology: &GridTopology, out_dir: &Path) -> Result<Vec<PathBuf>> {
    match command {
        Commands::Uniform { value, name } => {
            let fields = match (value, name) {
                (Some(v), Some(n)) => vec![(*v, n.clone())],
                _ => vec![
                    (55.0, "uniform-55.bin".to_string()),
                    (-20.0, "uniform-minus20.bin".to_string()),
                ],
            };

            fields
                .into_iter()
                .map(|(v, n)| {
                    info!(value = v, "Generating uniform field");
                    save(&out_dir.join(n), &uniform(topology, v))
                })
                .collect()
        }

        Commands::Pressure { config, seed } => {
            let mut cfg: PressureFieldConfig = match config {
                Some(path) => load_yaml(path)?,
                None => PressureFieldConfig::default(),
            };
            if let Some(seed) = seed {
                cfg.seed = *seed;
            }

            let field = pressure_field(topology, &cfg)?;
            Ok(vec![save(&out_dir.join("pressure-low-high.bin"), &field)?])
        }

        Commands::Wind { config } => {
            let cfg: CycloneConfig = match config {
                Some(path) => load_yaml(path)?,
                None => CycloneConfig::default(),
            };

            let wind = cyclone_field(topology, &cfg)?;
            let max_speed = (0..wind.u.len())
                .map(|i| wind.speed(i))
                .fold(0.0f32, f32::max);
            info!(max_speed, "Cyclone wind field");

            Ok(vec![
                save(&out_dir.join("wind-cyclone-u.bin"), &wind.u)?,
                save(&out_dir.join("wind-cyclone-v.bin"), &wind.v)?,
            ])
        }
    }
}

fn save(path: &Path, values: &GridValues) -> Result<PathBuf> {
    if let Some((min, max)) = values.min_max() {
        info!(path = %path.display(), min, max, "Value range");
    }
    io::write_values(path, values).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path.to_path_buf())
}
