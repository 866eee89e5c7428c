//! Listing scrapers and the HTTP plumbing they share.
//!
//! Each source module follows the same pattern: pure URL construction,
//! selector-based extraction from a fetched document, and an orchestrating
//! crawl function that walks the source's sections. The only source at the
//! moment is okx.com ([`okx`]).
//!
//! The shared plumbing here is deliberately thin: one client per process
//! with a browser-like User-Agent, one GET per page, and a 200-or-nothing
//! contract. Transport failures are logged and surface to callers as an
//! absent document, never as an error value.

use crate::config::SiteConfig;
use reqwest::{Client, StatusCode};
use scraper::Html;
use tracing::error;

pub mod okx;

/// Build the HTTP client used for every request in a run.
///
/// Only the User-Agent is configured; timeouts, redirects, and connection
/// handling stay at reqwest's defaults.
pub fn build_http_client(config: &SiteConfig) -> Result<Client, reqwest::Error> {
    Client::builder().user_agent(&config.user_agent).build()
}

/// Fetch a URL and parse the response body as an HTML document.
///
/// Performs exactly one GET. A 200 response yields a parsed document; any
/// other status, or a transport error, is logged at error level and yields
/// `None`. Callers must check for absence before use — a missing document
/// means that page contributes nothing to the crawl.
pub async fn fetch_document(client: &Client, url: &str) -> Option<Html> {
    let response = match client.get(url).send().await {
        Ok(response) => response,
        Err(e) => {
            error!(%url, error = %e, "Request failed");
            return None;
        }
    };

    let status = response.status();
    if status != StatusCode::OK {
        error!(%url, status = status.as_u16(), "Unexpected status for listing page");
        return None;
    }

    match response.text().await {
        Ok(body) => Some(Html::parse_document(&body)),
        Err(e) => {
            error!(%url, error = %e, "Failed reading response body");
            None
        }
    }
}
