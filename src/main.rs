//! Binary entry point for the OKX announcement harvester.
//!
//! ## Usage
//!
//! ```sh
//! okx_announcements 2024-01-01 2024-01-31 ./out
//! ```
//!
//! Crawls every announcement section on okx.com, keeps the articles whose
//! publish date falls inside the inclusive window, writes
//! `./out/articles_info.json`, and prints the path written.

use clap::Parser;
use okx_announcements::cli::Cli;
use okx_announcements::config::SiteConfig;
use okx_announcements::outputs::json;
use okx_announcements::scrapers::{self, okx};
use okx_announcements::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("okx_announcements starting up");

    let args = Cli::parse();
    debug!(%args.start_date, %args.end_date, %args.output_folder, "Parsed CLI arguments");

    if args.start_date > args.end_date {
        warn!(
            start = %args.start_date,
            end = %args.end_date,
            "Start date is after end date; no articles can match"
        );
    }

    // Early check: ensure the output dir is writable before any network work
    if let Err(e) = ensure_writable_dir(&args.output_folder).await {
        error!(
            path = %args.output_folder,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    let site = SiteConfig::default();
    let client = scrapers::build_http_client(&site)?;

    let records = okx::crawl_sections(&client, &site, args.start_date, args.end_date).await;
    info!(count = records.len(), "Articles in window");

    let path = json::write_articles(&records, &args.output_folder).await?;
    println!("json file saved in: {}", path.display());

    let elapsed = start_time.elapsed();
    info!(?elapsed, secs = elapsed.as_secs(), "Execution complete");

    Ok(())
}
