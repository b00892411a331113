use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use robotaxi_fixtures::dates::resolve_today;
use robotaxi_fixtures::generate;
use robotaxi_fixtures::settings::{resolve_settings, Args};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting robotaxi_fixtures");

    let args = Args::parse();
    let settings = resolve_settings(&args, |k| std::env::var(k).ok())?;
    debug!("Resolved settings: {:?}", settings);

    let today = resolve_today(&settings.clock);

    let mut rng = match settings.seed {
        Some(seed) => {
            info!("Using fixed seed={}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let report = generate(&settings.output_dir, settings.days, today, &mut rng)?;
    for path in &report.files {
        debug!("Output: {}", path.display());
    }
    info!(
        "Done - output_dir={}, dates={}..{}, files={}",
        report.output_dir.display(),
        report.dates.first().map(String::as_str).unwrap_or("-"),
        report.dates.last().map(String::as_str).unwrap_or("-"),
        report.files.len()
    );
    Ok(())
}
