use std::time::Duration;

use anyhow::{Context, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Blocking-style HTTP boundary: one shared client, fixed timeout, and a
/// non-2xx status treated the same as any other transport failure.
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }

    /// Fetch a URL and return the response body as text.
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request failed: {}", url))?
            .error_for_status()
            .with_context(|| format!("Request failed: {}", url))?;
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read body: {}", url))?;
        Ok(body)
    }
}

/// Fixed politeness pause between consecutive fetches. Not a backoff: the
/// interval never adapts and there are no retries. Tests construct a
/// zero-interval throttle so walks run without delay.
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    #[cfg(test)]
    pub fn none() -> Self {
        Self { interval: Duration::ZERO }
    }

    pub async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/missing", server.url());
        assert!(fetcher.get_text(&url).await.is_err());
    }

    #[tokio::test]
    async fn success_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/page")
            .with_body("<html>ok</html>")
            .create_async()
            .await;

        let fetcher = Fetcher::new().unwrap();
        let url = format!("{}/page", server.url());
        assert_eq!(fetcher.get_text(&url).await.unwrap(), "<html>ok</html>");
    }
}
