//! Page fetching.
//!
//! Issues a single bounded GET for a URL and turns the response into
//! [`PageFeatures`]. Fetching is total: every failure (unparseable URL,
//! timeout, connection error, unreadable body) ends in the explicit
//! empty-page fallback and is only logged and counted.

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::error_handling::{PageFetchError, ProcessingStats};
use crate::features::{analyze_document, PageFeatures};

/// Fetches pages and analyzes their markup.
#[derive(Clone)]
pub struct PageFetcher {
    client: Arc<reqwest::Client>,
    stats: Arc<ProcessingStats>,
}

impl PageFetcher {
    /// Creates a fetcher around a shared client.
    ///
    /// The client's timeout bounds every fetch; see
    /// [`crate::initialization::init_client`].
    pub fn new(client: Arc<reqwest::Client>, stats: Arc<ProcessingStats>) -> Self {
        Self { client, stats }
    }

    /// Fetches `url` and returns its page features.
    ///
    /// Never fails and never retries. Any fetch failure yields
    /// [`PageFeatures::empty`].
    pub async fn fetch_page_features(&self, url: &str) -> PageFeatures {
        match self.try_fetch_page(url).await {
            Ok(features) => features,
            Err(e) => self.empty_page_fallback(url, e),
        }
    }

    fn empty_page_fallback(&self, url: &str, error: PageFetchError) -> PageFeatures {
        warn!("Page fetch for {url} failed, using empty page: {error}");
        self.stats.increment_fetch_failure(error.kind());
        PageFeatures::empty()
    }

    async fn try_fetch_page(&self, url: &str) -> Result<PageFeatures, PageFetchError> {
        let target = Url::parse(url)?;

        // Error statuses still carry a page worth analyzing
        let response = self.client.get(target).send().await?;
        let status = response.status();

        if !is_html_response(response.headers()) {
            debug!("Non-HTML response from {url} (status {status}), analyzing empty document");
            return Ok(analyze_document(""));
        }

        let body = response.text().await?;
        debug!(
            "Fetched {} bytes of HTML from {url} (status {status})",
            body.len()
        );
        Ok(analyze_document(&body))
    }
}

/// Whether the declared content type mentions `html` (case-insensitive).
fn is_html_response(headers: &reqwest::header::HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| content_type.to_ascii_lowercase().contains("html"))
}
