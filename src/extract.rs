use regex::Regex;
use scraper::{Html, Selector};
use tracing::warn;

use crate::decode::decode_cfemail;

// All knowledge of the target site's DOM shape lives in these selectors.
// When the site changes, this module is the only place that needs to follow.
const PAGINATION_ANCHORS: &str = "body > div#content > div.container > div > ul > li > a";
const LISTING_ANCHORS: &str = "body > div#content > div.container > div > div > div > div > p > a";
const NAME_HEADING: &str = "body > div#content > div.container > h2.title-divider > span";
const CF_EMAIL_ANCHORS: &str = "a.__cf_email__";

/// Total pagination page count from a listing document.
///
/// Reads the last pagination anchor and parses the trailing `page=<N>` from
/// its href. Returns 0 when there are no pagination anchors or the last one
/// does not match the pattern; callers treat 0 as "single page".
pub fn total_pages(html: &str) -> usize {
    let doc = Html::parse_document(html);
    let anchors = Selector::parse(PAGINATION_ANCHORS).unwrap();
    let page_suffix = Regex::new(r"page=(\d+)$").unwrap();

    doc.select(&anchors)
        .last()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| page_suffix.captures(href))
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Hrefs of all detail-page anchors on a listing document, in document
/// order. Anchors without an href attribute are skipped.
pub fn listing_links(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let anchors = Selector::parse(LISTING_ANCHORS).unwrap();

    doc.select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}

/// Display name from a detail document, or `""` when the heading is absent.
pub fn page_name(html: &str) -> String {
    let doc = Html::parse_document(html);
    let heading = Selector::parse(NAME_HEADING).unwrap();

    doc.select(&heading)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

/// Decoded email addresses from every Cloudflare-protected anchor on a
/// detail document. Anchors without the data attribute are skipped;
/// malformed tokens are skipped with a warning.
pub fn page_emails(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let protected = Selector::parse(CF_EMAIL_ANCHORS).unwrap();

    let mut emails = Vec::new();
    for el in doc.select(&protected) {
        let Some(token) = el.value().attr("data-cfemail") else {
            continue;
        };
        match decode_cfemail(token) {
            Ok(email) => emails.push(email),
            Err(e) => warn!("Skipping malformed cfemail token {:?}: {}", token, e),
        }
    }
    emails
}

// ── Tests ──
