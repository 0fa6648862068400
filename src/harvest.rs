use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::extract;
use crate::fetch::{Fetcher, Throttle};
use crate::sink::{ContactRow, Sink};

/// Visit every collected link and persist one contact row per decoded
/// email, or a single empty-email row when a page has none. A link that
/// fails to fetch is skipped without emitting a row; everything else about
/// the walk is strictly in input order.
pub async fn harvest<S: Sink<ContactRow>>(
    fetcher: &Fetcher,
    hrefs: &[String],
    base_url: &str,
    sink: &mut S,
    throttle: &Throttle,
) -> Result<()> {
    let pb = ProgressBar::new(hrefs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} pages ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    for (idx, href) in hrefs.iter().enumerate() {
        let full_url = format!("{}{}", base_url, href);
        debug!("Fetching URL ({}/{}): {}", idx + 1, hrefs.len(), full_url);

        let html = match fetcher.get_text(&full_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed to fetch {}: {}", full_url, e);
                pb.inc(1);
                continue;
            }
        };

        let name = extract::page_name(&html);
        let emails = extract::page_emails(&html);

        if emails.is_empty() {
            // Every visited page yields at least one row
            sink.append(&ContactRow { name, email: String::new() })?;
        } else {
            for email in emails {
                sink.append(&ContactRow { name: name.clone(), email })?;
            }
        }

        throttle.pause().await;
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(())
}

// ── Tests ──
