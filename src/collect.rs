use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::extract;
use crate::fetch::{Fetcher, Throttle};
use crate::sink::{LinkRow, Sink};

/// Determine the pagination page count for a listing URL.
///
/// One fetch, no retry. Transport failure logs a warning and yields 0, the
/// same value as "no pagination present"; the collector treats both as a
/// single-page listing.
pub async fn resolve_total_pages(fetcher: &Fetcher, url: &str) -> usize {
    match fetcher.get_text(url).await {
        Ok(html) => extract::total_pages(&html),
        Err(e) => {
            warn!("Failed to fetch pagination for {}: {}", url, e);
            0
        }
    }
}

/// Walk pagination pages 1..=total_pages and gather detail-page links.
///
/// Links are appended to the sink as each page completes, so a run killed
/// mid-walk still leaves every finished page on disk. A page that fails to
/// fetch contributes zero links and does not abort the walk. The returned
/// list preserves page order and within-page document order.
pub async fn collect_links<S: Sink<LinkRow>>(
    fetcher: &Fetcher,
    total_pages: usize,
    url: &str,
    sink: &mut S,
    throttle: &Throttle,
) -> Result<Vec<String>> {
    let mut all = Vec::new();

    if total_pages == 0 {
        // Single-page listing: one fetch, no politeness pause.
        let hrefs = fetch_page_links(fetcher, url, 1).await;
        persist(sink, &hrefs)?;
        info!("No pagination detected. Fetched {} hrefs from page 1.", hrefs.len());
        all.extend(hrefs);
    } else {
        let pb = ProgressBar::new(total_pages as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages ({eta})")?
                .progress_chars("=> "),
        );

        for page in 1..=total_pages {
            throttle.pause().await;
            let hrefs = fetch_page_links(fetcher, url, page).await;
            persist(sink, &hrefs)?;
            all.extend(hrefs);
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    info!("Total hrefs fetched: {}", all.len());
    Ok(all)
}

async fn fetch_page_links(fetcher: &Fetcher, url: &str, page: usize) -> Vec<String> {
    let page_url = format!("{}&page={}", url, page);
    match fetcher.get_text(&page_url).await {
        Ok(html) => extract::listing_links(&html),
        Err(e) => {
            warn!("Failed to fetch page {}: {}", page, e);
            Vec::new()
        }
    }
}

fn persist<S: Sink<LinkRow>>(sink: &mut S, hrefs: &[String]) -> Result<()> {
    for href in hrefs {
        sink.append(&LinkRow { href: href.clone() })?;
    }
    Ok(())
}

// ── Tests ──
