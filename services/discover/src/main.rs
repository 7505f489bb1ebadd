//! Lists the model runs in the public bucket and prints the timestep
//! series assembled from them.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use discovery::{
    build_timesteps, discover_runs, verify, BucketListing, DiscoveryConfig, ModelPolicy,
    S3Listing, TimestepRecord,
};

/// Timesteps shown at each end of the series.
const PREVIEW_LEN: usize = 5;

#[derive(Parser, Debug)]
#[command(name = "discover")]
#[command(about = "Discover model runs and build a continuous timestep series")]
struct Args {
    /// Model name (ecmwf_ifs or ecmwf_ifs025)
    #[arg(default_value = "ecmwf_ifs")]
    model: String,

    /// HEAD-check a sample of the timestep URLs
    #[arg(long)]
    verify: bool,

    /// Number of timesteps to verify
    #[arg(long, default_value = "10")]
    sample_count: usize,

    /// Bucket root URL
    #[arg(long, env = "DISCOVERY_BASE_URL")]
    base_url: Option<String>,

    /// Print the full series as JSON instead of a preview
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
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
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let model: ModelPolicy = args.model.parse()?;

    let mut config = DiscoveryConfig::from_env();
    if let Some(url) = &args.base_url {
        config = config.with_base_url(url.as_str());
    }
    info!(
        model = %model,
        url = %config.object_url(&model.data_prefix()),
        "Exploring model"
    );

    let listing = S3Listing::new(config)?;
    let runs = discover_runs(&listing, model)
        .await
        .context("Failed to list model runs")?;

    let Some(latest) = runs.last() else {
        warn!(model = %model, "No runs found");
        return Ok(());
    };
    if let Some(first) = runs.first() {
        info!(datetime = %first.datetime, run = %first.run_label, "First run");
    }
    info!(datetime = %latest.datetime, run = %latest.run_label, "Last run");

    let files = listing
        .list_keys(&latest.prefix)
        .await
        .with_context(|| format!("Failed to list files of {}", latest.prefix))?;
    let timesteps = build_timesteps(model, &runs, &files, &listing.config().base_url);

    if let (Some(first), Some(last)) = (timesteps.first(), timesteps.last()) {
        info!(
            model = %model,
            count = timesteps.len(),
            first = %first.timestep,
            last = %last.timestep,
            "Generated timesteps"
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&timesteps)?);
    } else {
        print_preview(&timesteps);
    }

    if args.verify {
        let results = verify(
            listing.client(),
            &timesteps,
            args.sample_count,
            listing.config().parallel_checks,
        )
        .await;

        println!("\nVerification ({} checks):", results.len());
        for r in &results {
            println!("  [{}] {} (run {}): {}", r.index, r.timestep, r.run_label, r.status);
        }
    }

    Ok(())
}

fn print_preview(timesteps: &[TimestepRecord]) {
    let head = &timesteps[..timesteps.len().min(PREVIEW_LEN)];
    let tail = &timesteps[timesteps.len().saturating_sub(PREVIEW_LEN)..];

    println!("First {} timesteps:", head.len());
    for ts in head {
        println!("  {}", preview_line(ts));
    }
    println!("\nLast {} timesteps:", tail.len());
    for ts in tail {
        println!("  {}", preview_line(ts));
    }
}

fn preview_line(ts: &TimestepRecord) -> String {
    format!("{} (run {}) -> {}", ts.timestep, ts.run_label, ts.file_name())
}
