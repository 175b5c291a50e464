//! Video metadata lookup via the YouTube Data API.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;
use crate::youtube::VideoId;
use crate::GuideError;

/// Title used when the catalog has the video but no title for it.
pub const FALLBACK_TITLE: &str = "Untitled Video";

/// Looks up a video's display title in the catalog.
pub struct MetadataFetcher {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl MetadataFetcher {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.youtube.api_key.trim().to_string();
        if api_key.is_empty() {
            anyhow::bail!(
                "YouTube API key is missing. Set youtube.api_key in config or VIDGUIDE_YOUTUBE_API_KEY."
            );
        }

        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .context("Failed to build YouTube Data API client")?,
            api_key,
            endpoint: settings
                .youtube
                .api_endpoint
                .trim()
                .trim_end_matches('/')
                .to_string(),
        })
    }

    /// Fetch the video's title, substituting a placeholder when the catalog
    /// record carries none. A video absent from the catalog is
    /// `VideoNotFound`.
    pub async fn fetch_title(&self, id: &VideoId) -> crate::Result<String> {
        let url = format!(
            "{}/videos?part=snippet&id={}&key={}",
            self.endpoint, id, self.api_key
        );
        tracing::debug!(video_id = %id, "Fetching video metadata");

        let response = match self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Catalog request failed");
                return Err(GuideError::VideoNotFound);
            }
        };

        let payload: VideoListResponse = match response.json().await {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Failed to decode catalog response");
                return Err(GuideError::VideoNotFound);
            }
        };

        match resolve_title(payload) {
            Ok(title) => Ok(title),
            Err(err) => {
                tracing::warn!(video_id = %id, "Catalog returned no item for video");
                Err(err)
            }
        }
    }
}

/// Pick the title out of a catalog response: first item wins, a missing
/// title falls back to the placeholder, an empty item list is a failure.
fn resolve_title(response: VideoListResponse) -> crate::Result<String> {
    let Some(item) = response.items.into_iter().next() else {
        return Err(GuideError::VideoNotFound);
    };

    Ok(item
        .snippet
        .and_then(|s| s.title)
        .unwrap_or_else(|| FALLBACK_TITLE.to_string()))
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: Option<String>,
}
