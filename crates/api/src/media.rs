//! Best-effort cover-art lookup against the Deezer public search API.
//!
//! Absence of a cover is a valid terminal state, not an error: every
//! failure path (network, non-2xx, malformed JSON, empty result set)
//! yields `None` and a debug-level trace line. Nothing here is ever
//! surfaced to an API caller.

use std::time::Duration;

/// Public Deezer search endpoint.
const DEEZER_API_URL: &str = "https://api.deezer.com";

/// Request timeout for lookups. Lookups run inline on track/artist
/// creation, so they must fail fast.
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Client for the media lookup collaborator.
pub struct MediaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MediaClient {
    /// Client against the real Deezer API.
    pub fn new() -> Self {
        Self::with_base_url(DEEZER_API_URL)
    }

    /// Client against an arbitrary base URL (injectable for tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Search for a track and return its album cover URL, if any.
    pub async fn search_track_cover(&self, artist: &str, title: &str) -> Option<String> {
        let query = format!("{artist} {title}");
        let first = self.search("/search", &query).await?;
        let album = first.get("album")?;
        album
            .get("cover_big")
            .or_else(|| album.get("cover_medium"))
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    }

    /// Search for an artist and return their picture URL, if any.
    pub async fn search_artist_image(&self, name: &str) -> Option<String> {
        let first = self.search("/search/artist", name).await?;
        first
            .get("picture_big")
            .or_else(|| first.get("picture_medium"))
            .and_then(|v| v.as_str())
            .map(str::to_owned)
    }

    /// Run a single-result search and return the first hit.
    async fn search(&self, path: &str, query: &str) -> Option<serde_json::Value> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("q", query), ("limit", "1")])
            .send()
            .await
            .map_err(|e| tracing::debug!(error = %e, %url, "media lookup request failed"))
            .ok()?;

        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), %url, "media lookup non-success status");
            return None;
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| tracing::debug!(error = %e, %url, "media lookup returned bad JSON"))
            .ok()?;

        let first = body.get("data")?.as_array()?.first()?.clone();
        Some(first)
    }
}

impl Default for MediaClient {
    fn default() -> Self {
        Self::new()
    }
}
