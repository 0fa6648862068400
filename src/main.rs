mod catalog;
mod collect;
mod decode;
mod extract;
mod fetch;
mod harvest;
mod sink;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::{error, info};

use catalog::{Catalog, Target};
use fetch::{Fetcher, Throttle};
use sink::CsvSink;

const BASE_URL: &str = "https://www.example-directory.com";
const PAGE_DELAY: Duration = Duration::from_secs(2);
const DETAIL_DELAY: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(
    name = "contact_scraper",
    about = "Paginated directory scraper: collects listing links, then harvests names and Cloudflare-protected emails into CSV files"
)]
struct Cli {
    /// Target index from the catalog file
    #[arg(short, long)]
    index: usize,
    /// Output CSV file (default: <target name>.csv)
    #[arg(short, long)]
    output: Option<String>,
    /// Catalog JSON file mapping target names to URL paths
    #[arg(long, default_value = "subdomains.json")]
    targets: PathBuf,
    /// Site root the catalog paths are appended to
    #[arg(long, default_value = BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let catalog = Catalog::load(&cli.targets)?;
    let Some(target) = catalog.get(cli.index) else {
        bail!(
            "Invalid index: {}. Must be between 0 and {}.",
            cli.index,
            catalog.len().saturating_sub(1)
        );
    };

    run(
        &cli.base_url,
        target,
        cli.output.as_deref(),
        Path::new("."),
        &Throttle::new(PAGE_DELAY),
        &Throttle::new(DETAIL_DELAY),
    )
    .await
}

/// Drive one full scrape: resolve pagination, walk the listing pages into
/// `<name>_list.csv`, then visit each collected link and append contact
/// rows to the output file. Aborts before harvesting when the walk yields
/// no links.
async fn run(
    base_url: &str,
    target: &Target,
    output: Option<&str>,
    out_dir: &Path,
    page_throttle: &Throttle,
    detail_throttle: &Throttle,
) -> Result<()> {
    let url = format!("{}{}", base_url, target.path);
    info!("Starting scraper for: {}", url);

    let fetcher = Fetcher::new()?;

    let total_pages = collect::resolve_total_pages(&fetcher, &url).await;
    if total_pages == 0 {
        // Not an error: a listing without pagination anchors is one page
        info!("No pagination detected; treating listing as a single page.");
    } else {
        info!("Total pages: {}", total_pages);
    }

    let list_path = out_dir.join(format!("{}_list.csv", target.name));
    let mut list_sink = CsvSink::create(&list_path, &["href"])?;
    let hrefs =
        collect::collect_links(&fetcher, total_pages, &url, &mut list_sink, page_throttle).await?;

    if hrefs.is_empty() {
        error!("No hrefs found to process.");
        return Ok(());
    }
    info!("Total hrefs found: {}", hrefs.len());

    let contact_path = match output {
        Some(name) => out_dir.join(name),
        None => out_dir.join(format!("{}.csv", target.name)),
    };
    let mut contact_sink = CsvSink::create(&contact_path, &["name", "email"])?;
    harvest::harvest(&fetcher, &hrefs, base_url, &mut contact_sink, detail_throttle).await?;

    info!("Data saved to {}", contact_path.display());
    Ok(())
}

// ── Tests ──
